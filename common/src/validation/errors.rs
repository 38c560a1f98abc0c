use std::collections::BTreeMap;

use thiserror::Error;

use crate::model::field::Field;

/// Why a single field was rejected. Messages are shown inline under the field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Este campo é obrigatório.")]
    Required,

    #[error("Este campo deve ter no mínimo {min} caracteres.")]
    TooShort { min: usize },

    #[error("O texto deve ter no máximo {max} caracteres.")]
    TooLong { max: usize },

    #[error("Conteúdo não permitido detectado.")]
    ForbiddenContent,

    #[error("O arquivo deve ter no máximo 10MB.")]
    FileTooLarge,

    #[error("Tipo de arquivo não permitido. Use apenas: PDF, DOC, DOCX, JPG, PNG.")]
    UnsupportedType,

    #[error("Nome do arquivo contém caracteres inválidos.")]
    InvalidFilename,
}

/// Errors currently attached to form fields, at most one per field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrorSet {
    errors: BTreeMap<Field, ValidationError>,
}

impl ValidationErrorSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn insert(&mut self, field: Field, error: ValidationError) {
        self.errors.insert(field, error);
    }

    pub fn clear_field(&mut self, field: Field) {
        self.errors.remove(&field);
    }

    pub fn clear(&mut self) {
        self.errors.clear();
    }

    pub fn get(&self, field: Field) -> Option<&ValidationError> {
        self.errors.get(&field)
    }

    /// Text to render next to `field`, if it has an error.
    ///
    /// A missing seeded value gets that field's own wording instead of the
    /// generic "required" text.
    pub fn message(&self, field: Field) -> Option<String> {
        let error = self.errors.get(&field)?;
        match (error, field.required_message()) {
            (ValidationError::Required, Some(specific)) => Some(specific.to_string()),
            _ => Some(error.to_string()),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &ValidationError)> {
        self.errors.iter().map(|(field, error)| (*field, error))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_include_limits() {
        assert_eq!(
            ValidationError::TooShort { min: 15 }.to_string(),
            "Este campo deve ter no mínimo 15 caracteres."
        );
        assert_eq!(
            ValidationError::TooLong { max: 250 }.to_string(),
            "O texto deve ter no máximo 250 caracteres."
        );
    }

    #[test]
    fn required_seed_uses_field_wording() {
        let mut set = ValidationErrorSet::new();
        set.insert(Field::SerialNumber, ValidationError::Required);
        set.insert(Field::Justification, ValidationError::Required);

        assert_eq!(
            set.message(Field::SerialNumber).as_deref(),
            Some("Número de Série é obrigatório.")
        );
        assert_eq!(
            set.message(Field::Justification).as_deref(),
            Some("Este campo é obrigatório.")
        );
        assert_eq!(set.message(Field::Attachment), None);
    }

    #[test]
    fn one_error_per_field() {
        let mut set = ValidationErrorSet::new();
        set.insert(Field::Justification, ValidationError::Required);
        set.insert(Field::Justification, ValidationError::ForbiddenContent);
        assert_eq!(set.len(), 1);
        assert_eq!(set.get(Field::Justification), Some(&ValidationError::ForbiddenContent));

        set.clear_field(Field::Justification);
        assert!(set.is_empty());
    }
}
