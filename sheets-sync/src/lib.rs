mod client;
pub mod domain;
mod sheet_ref;

pub use client::*;
pub use domain::{parse_snapshot, SheetSnapshot, SheetViolation, SheetViolator};
pub use sheet_ref::*;
