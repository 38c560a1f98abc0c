pub mod confirmation;
pub mod justification;
pub mod page_shell;
