//! The justification form state machine.
//!
//! `FormController` owns the record, the inline errors and the submission
//! state. The UI drives it with edits and submit attempts and performs the
//! network call itself between [`FormController::begin_submit`] and
//! [`FormController::finish_submit`].
//!
//! ```text
//! Idle --begin_submit (valid)--> Submitting --finish_submit(Ok)--> Completed
//!  ^                                  |                                |
//!  +------- finish_submit(Err) -------+                                |
//!  +------------------------ back_to_form -----------------------------+
//! ```

use crate::model::attachment::AttachmentFile;
use crate::model::field::Field;
use crate::model::record::{FormRecord, SeedFields};
use crate::requests::SubmissionPayload;
use crate::submission::{SubmissionError, SubmissionState, SubmitBlocked};
use crate::validation::{
    JUSTIFICATION_MIN_LENGTH, ValidationError, ValidationErrorSet, validate_file, validate_text,
};

#[derive(Debug, Clone)]
pub struct FormController<F> {
    record: FormRecord<F>,
    errors: ValidationErrorSet,
    state: SubmissionState,
}

impl<F: AttachmentFile + Clone> FormController<F> {
    /// Creates the controller from the page's query parameters.
    ///
    /// `lookup` returns the raw value of a query key, if present. Seeds are
    /// sanitized and capped by [`SeedFields::from_lookup`].
    pub fn initialize<L>(lookup: L) -> Self
    where
        L: Fn(&str) -> Option<String>,
    {
        Self::with_seeds(SeedFields::from_lookup(lookup))
    }

    pub fn with_seeds(seeds: SeedFields) -> Self {
        Self {
            record: FormRecord::new(seeds),
            errors: ValidationErrorSet::new(),
            state: SubmissionState::Idle,
        }
    }

    pub fn record(&self) -> &FormRecord<F> {
        &self.record
    }

    pub fn errors(&self) -> &ValidationErrorSet {
        &self.errors
    }

    pub fn state(&self) -> SubmissionState {
        self.state
    }

    pub fn is_submitting(&self) -> bool {
        self.state == SubmissionState::Submitting
    }

    pub fn is_completed(&self) -> bool {
        self.state == SubmissionState::Completed
    }

    /// Applies a text edit coming from the UI.
    ///
    /// Only the justification is editable; seeded fields and the attachment
    /// are refused and `false` is returned. The justification is kept exactly
    /// as typed and, when non-empty, validated right away so the error shows
    /// while the user keeps typing.
    pub fn edit_field(&mut self, field: Field, raw: String) -> bool {
        if field != Field::Justification {
            return false;
        }

        self.errors.clear_field(field);
        if !raw.is_empty() {
            if let Err(error) = validate_text(&raw, JUSTIFICATION_MIN_LENGTH) {
                self.errors.insert(field, error);
            }
        }
        self.record.justification = raw;
        true
    }

    /// Replaces the attachment.
    ///
    /// A file that fails validation is not kept; the error is recorded and
    /// returned so the UI can reset the file picker.
    pub fn set_attachment(&mut self, file: Option<F>) -> Result<(), ValidationError> {
        self.errors.clear_field(Field::Attachment);

        if let Some(file) = &file {
            if let Err(error) = validate_file(file) {
                self.record.attachment = None;
                self.errors.insert(Field::Attachment, error.clone());
                return Err(error);
            }
        }

        self.record.attachment = file;
        Ok(())
    }

    /// Validates the whole record without touching the stored errors.
    pub fn validate_all(&self) -> ValidationErrorSet {
        let mut errors = ValidationErrorSet::new();

        for field in Field::REQUIRED_SEEDS {
            let value = self.record.seeds.get(field).unwrap_or_default();
            if value.trim().is_empty() {
                errors.insert(field, ValidationError::Required);
            }
        }

        if let Err(error) = validate_text(&self.record.justification, JUSTIFICATION_MIN_LENGTH) {
            errors.insert(Field::Justification, error);
        }

        if let Some(file) = &self.record.attachment {
            if let Err(error) = validate_file(file) {
                errors.insert(Field::Attachment, error);
            }
        }

        errors
    }

    /// Whether the submit button should be enabled right now.
    pub fn can_submit(&self) -> bool {
        self.state == SubmissionState::Idle && self.validate_all().is_empty()
    }

    /// Starts a submission.
    ///
    /// On success the controller is `Submitting` and the returned payload must
    /// be sent; the caller reports back through [`Self::finish_submit`]. An
    /// invalid record stays `Idle` with its errors stored.
    pub fn begin_submit(&mut self) -> Result<SubmissionPayload<F>, SubmitBlocked> {
        match self.state {
            SubmissionState::Idle => {}
            SubmissionState::Submitting => return Err(SubmitBlocked::InFlight),
            SubmissionState::Completed => return Err(SubmitBlocked::Completed),
        }

        self.errors.clear();
        let errors = self.validate_all();
        if !errors.is_empty() {
            self.errors = errors;
            return Err(SubmitBlocked::Invalid);
        }

        self.state = SubmissionState::Submitting;
        Ok(SubmissionPayload::from_record(&self.record))
    }

    /// Records how the in-flight submission ended.
    ///
    /// Returns `false` when no submission was in flight, in which case the
    /// outcome is ignored.
    pub fn finish_submit(&mut self, outcome: &Result<(), SubmissionError>) -> bool {
        if self.state != SubmissionState::Submitting {
            return false;
        }
        self.state = match outcome {
            Ok(()) => SubmissionState::Completed,
            Err(_) => SubmissionState::Idle,
        };
        true
    }

    /// Leaves the confirmation view: clears what the user entered and returns
    /// to `Idle`. Seeded fields are kept.
    pub fn back_to_form(&mut self) {
        self.record.clear_editable();
        self.errors.clear();
        self.state = SubmissionState::Idle;
    }
}
