use std::sync::Arc;

use crate::domain::ports::inbound::RecordService;

#[derive(Clone)]
pub struct AppState {
    pub records: Arc<dyn RecordService>,
}

impl AppState {
    pub fn new(records: Arc<dyn RecordService>) -> Self {
        Self { records }
    }
}
