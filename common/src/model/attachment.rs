//! Abstraction over the file handle picked by the user.
//!
//! The browser hands out `web_sys::File`; tests use a plain struct. Validation
//! only needs the three properties below, so the form is generic over them.

/// A file selected for upload.
pub trait AttachmentFile {
    /// File name as reported by the picker, without any directory part.
    fn name(&self) -> String;

    /// Declared MIME type. May be empty when the browser could not guess it.
    fn mime_type(&self) -> String;

    /// Size in bytes.
    fn size(&self) -> u64;
}
