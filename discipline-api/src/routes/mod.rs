pub(crate) mod dashboard;
pub(crate) mod error;
pub(crate) mod events;
pub(crate) mod sheets;
pub(crate) mod violations;
pub(crate) mod violators;

pub(crate) use error::ApiError;
