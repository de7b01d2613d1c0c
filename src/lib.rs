pub mod app;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod recurrence;
pub mod seed;
pub mod state;
pub mod stats;
pub mod storage;
pub mod ui;

pub use app::router;
pub use state::{AppData, AppState};
pub use storage::resolve_data_dir;
