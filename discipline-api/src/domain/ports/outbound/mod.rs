mod record_repository;
mod sheet_source;

pub use record_repository::*;
pub use sheet_source::*;
