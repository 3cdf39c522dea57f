use crate::models::AppData;
use crate::program::ProgramCatalog;
use std::{path::PathBuf, sync::Arc};
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub data_path: PathBuf,
    pub data: Arc<Mutex<AppData>>,
    /// Immutable reference data; shared without the mutex.
    pub catalog: Arc<ProgramCatalog>,
}

impl AppState {
    pub fn new(data_path: PathBuf, data: AppData, catalog: ProgramCatalog) -> Self {
        Self {
            data_path,
            data: Arc::new(Mutex::new(data)),
            catalog: Arc::new(catalog),
        }
    }
}
