pub mod app;
pub mod errors;
pub mod export;
pub mod handlers;
pub mod metrics;
pub mod models;
pub mod rollup;
pub mod state;
pub mod storage;
pub mod ui;

pub use app::router;
pub use state::AppState;
pub use storage::{load_table, parse_table, resolve_data_path};
