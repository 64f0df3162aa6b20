mod parser;
mod snapshot;

pub use parser::*;
pub use snapshot::*;
