use common::submission::SubmissionError;

#[derive(Clone)]
pub enum Msg {
    UpdateJustification(String),
    FileSelected(Option<web_sys::File>),
    Submit,
    SubmissionFinished(Result<(), SubmissionError>),
    BackToForm,
}
