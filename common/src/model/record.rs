use crate::model::field::Field;
use crate::sanitize::{sanitize_seed, strip_markup};

/// Read-only values seeded from the page URL.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeedFields {
    pub id: String,
    pub serial_number: String,
    pub supply_lot_id: String,
    pub last_reading_at: String,
    pub last_reading_level: String,
    pub organization: String,
    pub project_code: String,
}

impl SeedFields {
    /// Builds the seeds from a query-string lookup.
    ///
    /// Missing keys yield empty strings. Every value is stripped of markup and
    /// dropped entirely when it is still longer than the seed cap afterwards.
    pub fn from_lookup<L>(lookup: L) -> Self
    where
        L: Fn(&str) -> Option<String>,
    {
        let mut seeds = SeedFields::default();
        for field in Field::SEEDED {
            let Some(key) = field.query_key() else {
                continue;
            };
            let value = lookup(key).map(|raw| sanitize_seed(&raw)).unwrap_or_default();
            if let Some(slot) = seeds.slot_mut(field) {
                *slot = value;
            }
        }
        seeds
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        let value = match field {
            Field::Id => &self.id,
            Field::SerialNumber => &self.serial_number,
            Field::SupplyLotId => &self.supply_lot_id,
            Field::LastReadingAt => &self.last_reading_at,
            Field::LastReadingLevel => &self.last_reading_level,
            Field::Organization => &self.organization,
            Field::ProjectCode => &self.project_code,
            Field::Justification | Field::Attachment => return None,
        };
        Some(value.as_str())
    }

    fn slot_mut(&mut self, field: Field) -> Option<&mut String> {
        match field {
            Field::Id => Some(&mut self.id),
            Field::SerialNumber => Some(&mut self.serial_number),
            Field::SupplyLotId => Some(&mut self.supply_lot_id),
            Field::LastReadingAt => Some(&mut self.last_reading_at),
            Field::LastReadingLevel => Some(&mut self.last_reading_level),
            Field::Organization => Some(&mut self.organization),
            Field::ProjectCode => Some(&mut self.project_code),
            Field::Justification | Field::Attachment => None,
        }
    }

    /// Copy of the seeds with markup stripped again from every value.
    pub fn resanitized(&self) -> Self {
        SeedFields {
            id: strip_markup(&self.id),
            serial_number: strip_markup(&self.serial_number),
            supply_lot_id: strip_markup(&self.supply_lot_id),
            last_reading_at: strip_markup(&self.last_reading_at),
            last_reading_level: strip_markup(&self.last_reading_level),
            organization: strip_markup(&self.organization),
            project_code: strip_markup(&self.project_code),
        }
    }
}

/// The single record edited by the form.
#[derive(Debug, Clone)]
pub struct FormRecord<F> {
    pub seeds: SeedFields,
    /// Stored exactly as typed; trimming only happens during validation.
    pub justification: String,
    pub attachment: Option<F>,
}

impl<F> FormRecord<F> {
    pub fn new(seeds: SeedFields) -> Self {
        Self {
            seeds,
            justification: String::new(),
            attachment: None,
        }
    }

    /// Clears the user-entered fields, leaving the seeds untouched.
    pub fn clear_editable(&mut self) {
        self.justification.clear();
        self.attachment = None;
    }
}
