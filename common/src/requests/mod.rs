//! Outbound webhook payload.

use crate::model::field::Field;
use crate::model::record::{FormRecord, SeedFields};
use crate::sanitize::strip_markup;

/// Multipart body sent to the webhook.
///
/// Text parts keep their wire order: the seven seeded fields followed by the
/// justification. The attachment, when present, goes under the label of
/// [`Field::Attachment`].
#[derive(Debug, Clone, PartialEq)]
pub struct SubmissionPayload<F> {
    pub text_parts: Vec<(&'static str, String)>,
    pub attachment: Option<F>,
}

impl<F: Clone> SubmissionPayload<F> {
    /// Builds the payload from a record, stripping markup from every text value
    /// once more on the way out.
    pub fn from_record(record: &FormRecord<F>) -> Self {
        let seeds: SeedFields = record.seeds.resanitized();
        let mut text_parts: Vec<(&'static str, String)> = Field::SEEDED
            .iter()
            .map(|field| {
                (
                    field.part_label(),
                    seeds.get(*field).unwrap_or_default().to_string(),
                )
            })
            .collect();
        text_parts.push((
            Field::Justification.part_label(),
            strip_markup(&record.justification),
        ));

        Self {
            text_parts,
            attachment: record.attachment.clone(),
        }
    }

    /// Number of multipart parts, attachment included.
    pub fn part_count(&self) -> usize {
        self.text_parts.len() + usize::from(self.attachment.is_some())
    }

    pub fn text(&self, label: &str) -> Option<&str> {
        self.text_parts
            .iter()
            .find(|(part, _)| *part == label)
            .map(|(_, value)| value.as_str())
    }
}
