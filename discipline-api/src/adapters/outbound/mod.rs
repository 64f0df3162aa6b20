pub mod memory;
pub mod sheets;
