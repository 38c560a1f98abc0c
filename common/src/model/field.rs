/// Every field shown on the justification form.
///
/// A field knows the three names it travels under: the query-string key it is
/// seeded from, the label of its multipart part, and the DOM id of its input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Id,
    SerialNumber,
    SupplyLotId,
    LastReadingAt,
    LastReadingLevel,
    Organization,
    ProjectCode,
    Justification,
    Attachment,
}

impl Field {
    /// Seeded fields in multipart order.
    pub const SEEDED: [Field; 7] = [
        Field::Id,
        Field::SerialNumber,
        Field::SupplyLotId,
        Field::LastReadingAt,
        Field::LastReadingLevel,
        Field::Organization,
        Field::ProjectCode,
    ];

    /// Seeded fields that must be non-empty before a submission is allowed.
    pub const REQUIRED_SEEDS: [Field; 4] = [
        Field::SerialNumber,
        Field::SupplyLotId,
        Field::LastReadingAt,
        Field::LastReadingLevel,
    ];

    pub fn is_seeded(self) -> bool {
        Self::SEEDED.contains(&self)
    }

    /// Query-string key, `None` for user-entered fields.
    pub fn query_key(self) -> Option<&'static str> {
        match self {
            Field::Id => Some("id"),
            Field::SerialNumber => Some("numeroSerie"),
            Field::SupplyLotId => Some("serieSuprimento"),
            Field::LastReadingAt => Some("dataUltimaLeitura"),
            Field::LastReadingLevel => Some("nivelUltimaLeitura"),
            Field::Organization => Some("organizacao"),
            Field::ProjectCode => Some("codigoProjeto"),
            Field::Justification | Field::Attachment => None,
        }
    }

    /// Label of the multipart part carrying this field.
    pub fn part_label(self) -> &'static str {
        match self {
            Field::Id => "id",
            Field::SerialNumber => "Número de Série",
            Field::SupplyLotId => "Série do Suprimento",
            Field::LastReadingAt => "Data da Última Leitura",
            Field::LastReadingLevel => "Nível da Última Leitura (%)",
            Field::Organization => "Organização",
            Field::ProjectCode => "Código do Projeto",
            Field::Justification => "Justificativa",
            Field::Attachment => "Anexo",
        }
    }

    pub fn dom_id(self) -> &'static str {
        match self {
            Field::Justification => "justificativa",
            Field::Attachment => "anexo",
            other => other.query_key().unwrap_or_default(),
        }
    }

    /// Message shown when a required seeded field arrived empty.
    pub fn required_message(self) -> Option<&'static str> {
        match self {
            Field::SerialNumber => Some("Número de Série é obrigatório."),
            Field::SupplyLotId => Some("Série do Suprimento é obrigatória."),
            Field::LastReadingAt => Some("Data da Última Leitura é obrigatória."),
            Field::LastReadingLevel => Some("Nível da Última Leitura é obrigatório."),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_url_fields_have_query_keys() {
        for field in Field::SEEDED {
            assert!(field.query_key().is_some(), "{field:?}");
            assert!(field.is_seeded());
        }
        assert_eq!(Field::Justification.query_key(), None);
        assert_eq!(Field::Attachment.query_key(), None);
        assert!(!Field::Justification.is_seeded());
    }

    #[test]
    fn dom_ids_follow_query_keys() {
        assert_eq!(Field::SerialNumber.dom_id(), "numeroSerie");
        assert_eq!(Field::Justification.dom_id(), "justificativa");
        assert_eq!(Field::Attachment.dom_id(), "anexo");
    }

    #[test]
    fn required_seeds_have_their_own_messages() {
        for field in Field::REQUIRED_SEEDS {
            assert!(field.required_message().is_some(), "{field:?}");
        }
        assert_eq!(Field::Organization.required_message(), None);
    }
}
