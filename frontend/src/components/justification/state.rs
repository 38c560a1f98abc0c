//! Component state for the justification form.
//!
//! The form rules live in `common::form::FormController`; this struct only adds
//! what the browser side needs around it: the loaded configuration, the file
//! input node and the one-time URL scrub guard.

use common::config::FormConfig;
use common::form::FormController;
use common::model::attachment::AttachmentFile;
use yew::prelude::*;

/// A file picked in the browser, adapted to the form's attachment interface.
#[derive(Clone)]
pub struct SelectedFile(web_sys::File);

impl SelectedFile {
    pub fn new(file: web_sys::File) -> Self {
        Self(file)
    }

    pub fn file(&self) -> &web_sys::File {
        &self.0
    }
}

impl AttachmentFile for SelectedFile {
    fn name(&self) -> String {
        self.0.name()
    }

    fn mime_type(&self) -> String {
        self.0.type_()
    }

    fn size(&self) -> u64 {
        self.0.size() as u64
    }
}

pub struct JustificationForm {
    /// Record, inline errors and submission state.
    pub form: FormController<SelectedFile>,

    pub config: FormConfig,

    /// The `<input type="file">`, cleared whenever a file is rejected or the form resets.
    pub file_input_ref: NodeRef,

    /// Guard so the address bar is rewritten only once.
    pub url_scrubbed: bool,
}

impl JustificationForm {
    pub fn new<L>(config: FormConfig, lookup: L) -> Self
    where
        L: Fn(&str) -> Option<String>,
    {
        Self {
            form: FormController::initialize(lookup),
            config,
            file_input_ref: NodeRef::default(),
            url_scrubbed: false,
        }
    }

    /// Drops the visual selection of the file picker.
    pub fn clear_file_input(&self) {
        if let Some(input) = self.file_input_ref.cast::<web_sys::HtmlInputElement>() {
            input.set_value("");
        }
    }
}
