//! Field validators and the per-field error set.
//!
//! Each validator returns the first failing check only; callers collect the
//! results per field in a [`ValidationErrorSet`].

mod errors;
mod file;
mod text;

pub use errors::{ValidationError, ValidationErrorSet};
pub use file::{ALLOWED_FILE_TYPES, MAX_FILE_SIZE, validate_file};
pub use text::{
    JUSTIFICATION_MIN_LENGTH, MAX_TEXT_LENGTH, contains_forbidden_content, validate_text,
};
