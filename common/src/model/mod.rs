pub mod attachment;
pub mod field;
pub mod record;
