use crate::model::attachment::AttachmentFile;

use super::ValidationError;

/// Largest accepted attachment: 10 MiB.
pub const MAX_FILE_SIZE: u64 = 10 * 1024 * 1024;

/// Accepted MIME types and the extensions each one may carry.
pub const ALLOWED_FILE_TYPES: [(&str, &[&str]); 5] = [
    ("application/pdf", &[".pdf"]),
    ("application/msword", &[".doc"]),
    (
        "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        &[".docx"],
    ),
    ("image/jpeg", &[".jpg", ".jpeg"]),
    ("image/png", &[".png"]),
];

const FORBIDDEN_FILENAME_CHARS: [char; 9] = ['<', '>', ':', '"', '/', '\\', '|', '?', '*'];

/// Validates an attachment: size first, then the MIME/extension pair, then
/// the file name.
pub fn validate_file<F: AttachmentFile + ?Sized>(file: &F) -> Result<(), ValidationError> {
    if file.size() > MAX_FILE_SIZE {
        return Err(ValidationError::FileTooLarge);
    }

    let name = file.name();
    if !is_allowed_type(&file.mime_type(), &name) {
        return Err(ValidationError::UnsupportedType);
    }

    if name
        .chars()
        .any(|c| FORBIDDEN_FILENAME_CHARS.contains(&c) || ('\u{0}'..='\u{1f}').contains(&c))
    {
        return Err(ValidationError::InvalidFilename);
    }

    Ok(())
}

fn is_allowed_type(mime_type: &str, name: &str) -> bool {
    // A name without a dot yields the whole name as its "extension".
    let extension = format!(
        ".{}",
        name.rsplit('.').next().unwrap_or_default().to_lowercase()
    );
    ALLOWED_FILE_TYPES
        .iter()
        .find(|(mime, _)| *mime == mime_type)
        .is_some_and(|(_, extensions)| extensions.contains(&extension.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const MIB: u64 = 1024 * 1024;

    struct TestFile {
        name: &'static str,
        mime: &'static str,
        size: u64,
    }

    impl AttachmentFile for TestFile {
        fn name(&self) -> String {
            self.name.to_string()
        }

        fn mime_type(&self) -> String {
            self.mime.to_string()
        }

        fn size(&self) -> u64 {
            self.size
        }
    }

    fn file(name: &'static str, mime: &'static str, size: u64) -> TestFile {
        TestFile { name, mime, size }
    }

    #[test]
    fn pdf_report_passes() {
        assert_eq!(validate_file(&file("report.pdf", "application/pdf", 5 * MIB)), Ok(()));
    }

    #[test]
    fn renamed_executable_is_unsupported() {
        assert_eq!(
            validate_file(&file("report.exe", "application/pdf", 5 * MIB)),
            Err(ValidationError::UnsupportedType)
        );
    }

    #[test]
    fn oversized_pdf_is_rejected() {
        assert_eq!(
            validate_file(&file("report.pdf", "application/pdf", 11 * MIB)),
            Err(ValidationError::FileTooLarge)
        );
        assert_eq!(validate_file(&file("report.pdf", "application/pdf", MAX_FILE_SIZE)), Ok(()));
        assert_eq!(
            validate_file(&file("report.pdf", "application/pdf", MAX_FILE_SIZE + 1)),
            Err(ValidationError::FileTooLarge)
        );
    }

    #[test]
    fn bad_characters_in_name_are_rejected() {
        assert_eq!(
            validate_file(&file("bad<name>.pdf", "application/pdf", MIB)),
            Err(ValidationError::InvalidFilename)
        );
        assert_eq!(
            validate_file(&file("a\u{7}b.png", "image/png", MIB)),
            Err(ValidationError::InvalidFilename)
        );
        assert_eq!(
            validate_file(&file("dir\\foto.jpg", "image/jpeg", MIB)),
            Err(ValidationError::InvalidFilename)
        );
    }

    #[test]
    fn mime_and_extension_must_agree() {
        assert_eq!(
            validate_file(&file("foto.png", "image/jpeg", MIB)),
            Err(ValidationError::UnsupportedType)
        );
        assert_eq!(
            validate_file(&file("laudo.pdf", "", MIB)),
            Err(ValidationError::UnsupportedType)
        );
    }

    #[test]
    fn name_without_dot_counts_as_its_own_extension() {
        assert_eq!(validate_file(&file("pdf", "application/pdf", MIB)), Ok(()));
        assert_eq!(
            validate_file(&file("laudo", "application/pdf", MIB)),
            Err(ValidationError::UnsupportedType)
        );
    }

    #[test]
    fn every_allowed_pair_passes_case_insensitively() {
        let allowed = [
            file("a.PDF", "application/pdf", MIB),
            file("a.doc", "application/msword", MIB),
            file(
                "a.Docx",
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
                MIB,
            ),
            file("a.jpg", "image/jpeg", MIB),
            file("a.JPEG", "image/jpeg", MIB),
            file("a.png", "image/png", MIB),
        ];
        for f in &allowed {
            assert_eq!(validate_file(f), Ok(()), "{}", f.name);
        }
    }

    #[test]
    fn size_is_checked_before_type_and_name() {
        assert_eq!(
            validate_file(&file("bad<name>.exe", "application/x-msdownload", 20 * MIB)),
            Err(ValidationError::FileTooLarge)
        );
        assert_eq!(
            validate_file(&file("bad<name>.exe", "application/x-msdownload", MIB)),
            Err(ValidationError::UnsupportedType)
        );
    }
}
