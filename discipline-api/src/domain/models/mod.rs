mod dashboard;
mod event;
mod ids;
mod import;
mod stats;
mod taxonomy;
mod violation;
mod violator;

pub use dashboard::*;
pub use event::*;
pub use ids::*;
pub use import::*;
pub use stats::*;
pub use taxonomy::*;
pub use violation::*;
pub use violator::*;
