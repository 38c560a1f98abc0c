use std::sync::LazyLock;

use regex::RegexSet;

use super::ValidationError;

/// Longest accepted justification, in characters after trimming.
pub const MAX_TEXT_LENGTH: usize = 250;

/// Shortest accepted justification, in characters after trimming.
pub const JUSTIFICATION_MIN_LENGTH: usize = 15;

static FORBIDDEN_PATTERNS: LazyLock<RegexSet> = LazyLock::new(|| {
    RegexSet::new([
        r"(?i)<script",
        r"(?i)javascript:",
        r"(?i)on[a-z0-9_]+\s*=",
        r"(?i)data:text/html",
        r"(?i)vbscript:",
    ])
    .expect("forbidden content patterns compile")
});

/// True when `text` contains a script opener, a script scheme, an inline event
/// handler or an HTML data URL, in any case and at any position.
pub fn contains_forbidden_content(text: &str) -> bool {
    FORBIDDEN_PATTERNS.is_match(text)
}

/// Validates free text.
///
/// Length checks use the trimmed text; the forbidden-content scan looks at the
/// untrimmed input. `min_length == 0` disables the minimum check.
pub fn validate_text(text: &str, min_length: usize) -> Result<(), ValidationError> {
    let length = text.trim().chars().count();

    if length == 0 {
        return Err(ValidationError::Required);
    }
    if min_length > 0 && length < min_length {
        return Err(ValidationError::TooShort { min: min_length });
    }
    if length > MAX_TEXT_LENGTH {
        return Err(ValidationError::TooLong {
            max: MAX_TEXT_LENGTH,
        });
    }
    if contains_forbidden_content(text) {
        return Err(ValidationError::ForbiddenContent);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const PLAIN: &str = "Toner vazou dentro da impressora";

    #[test]
    fn empty_and_blank_are_required() {
        assert_eq!(validate_text("", 15), Err(ValidationError::Required));
        assert_eq!(validate_text("   \n\t ", 15), Err(ValidationError::Required));
        assert_eq!(validate_text(" ", 0), Err(ValidationError::Required));
    }

    #[test]
    fn length_bounds_apply_to_trimmed_text() {
        assert_eq!(validate_text(&"a".repeat(15), 15), Ok(()));
        assert_eq!(validate_text(&"a".repeat(250), 15), Ok(()));
        assert_eq!(
            validate_text(&"a".repeat(14), 15),
            Err(ValidationError::TooShort { min: 15 })
        );
        assert_eq!(
            validate_text(&"a".repeat(251), 15),
            Err(ValidationError::TooLong { max: 250 })
        );
        let padded = format!("   {}   ", "a".repeat(14));
        assert_eq!(validate_text(&padded, 15), Err(ValidationError::TooShort { min: 15 }));
        let padded = format!("   {}   ", "a".repeat(250));
        assert_eq!(validate_text(&padded, 15), Ok(()));
    }

    #[test]
    fn lengths_count_characters_not_bytes() {
        let accented = "ç".repeat(15);
        assert_eq!(validate_text(&accented, 15), Ok(()));
        assert_eq!(validate_text(&"ã".repeat(250), 15), Ok(()));
    }

    #[test]
    fn min_length_zero_skips_the_minimum() {
        assert_eq!(validate_text("a", 0), Ok(()));
    }

    #[test]
    fn each_forbidden_pattern_is_detected_anywhere() {
        let payloads = [
            "<script>alert(1)</script>",
            "<SCRIPT src=x>",
            "veja JavaScript:alert(1)",
            "<img onerror=alert(1)>",
            "texto onclick = x",
            "data:TEXT/html;base64,AAAA",
            "VBScript:msgbox",
        ];
        for payload in payloads {
            let text = format!("{PLAIN} {payload} {PLAIN}");
            assert!(contains_forbidden_content(&text), "{payload}");
            assert_eq!(
                validate_text(&text, 15),
                Err(ValidationError::ForbiddenContent),
                "{payload}"
            );
        }
    }

    #[test]
    fn ordinary_text_is_not_forbidden() {
        let texts = [
            PLAIN,
            "Cartucho com defeito, script de teste falhou",
            "Nível em 40% = troca antecipada",
            "Equipe on-line confirmou a troca",
            "data: 12/05, texto/html não se aplica",
        ];
        for text in texts {
            assert!(!contains_forbidden_content(text), "{text}");
            assert_eq!(validate_text(text, 15), Ok(()), "{text}");
        }
    }

    #[test]
    fn length_errors_win_over_forbidden_content() {
        assert_eq!(
            validate_text("<script>", 15),
            Err(ValidationError::TooShort { min: 15 })
        );
    }
}
