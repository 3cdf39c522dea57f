pub mod app;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod pause;
pub mod program;
pub mod progress;
pub mod selector;
pub mod state;
pub mod stats;
pub mod storage;
pub mod ui;

pub use app::router;
pub use state::AppState;
pub use storage::{load_data, resolve_data_path};
