use crate::errors::AppError;
use crate::models::AppData;
use std::{env, path::Path, path::PathBuf, time::Duration};
use tokio::fs;
use tracing::{error, warn};

const WRITE_ATTEMPTS: u32 = 3;

pub fn resolve_data_path() -> Result<PathBuf, std::io::Error> {
    if let Ok(path) = env::var("APP_DATA_PATH") {
        return Ok(PathBuf::from(path));
    }

    Ok(PathBuf::from("data/challenge90.json"))
}

pub async fn load_data(path: &Path) -> AppData {
    match fs::read(path).await {
        Ok(bytes) => match serde_json::from_slice(&bytes) {
            Ok(data) => data,
            Err(err) => {
                error!("failed to parse data file: {err}");
                AppData::default()
            }
        },
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => AppData::default(),
        Err(err) => {
            error!("failed to read data file: {err}");
            AppData::default()
        }
    }
}

/// Writes the full data file, retrying transient failures a bounded number
/// of times before surfacing the error to the caller.
pub async fn persist_data(path: &Path, data: &AppData) -> Result<(), AppError> {
    let payload = serde_json::to_vec_pretty(data).map_err(AppError::internal)?;

    let mut last_err = None;
    for attempt in 1..=WRITE_ATTEMPTS {
        match fs::write(path, &payload).await {
            Ok(()) => return Ok(()),
            Err(err) => {
                warn!("data file write failed (attempt {attempt}/{WRITE_ATTEMPTS}): {err}");
                last_err = Some(err);
                if attempt < WRITE_ATTEMPTS {
                    tokio::time::sleep(Duration::from_millis(50 * u64::from(attempt))).await;
                }
            }
        }
    }

    match last_err {
        Some(err) => Err(AppError::internal(err)),
        None => Ok(()),
    }
}
