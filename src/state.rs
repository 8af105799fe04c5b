use crate::models::ToolRecord;
use std::sync::Arc;

/// The loaded table, read-only for the lifetime of the process. Views are
/// recomputed from it on every request.
#[derive(Clone)]
pub struct AppState {
    pub table: Arc<Vec<ToolRecord>>,
}

impl AppState {
    pub fn new(table: Vec<ToolRecord>) -> Self {
        Self {
            table: Arc::new(table),
        }
    }
}
