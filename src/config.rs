use std::path::PathBuf;

use dotenv::dotenv;
use log::debug;

use crate::errors::AppError;
use crate::store::{self, CsvStore};

/// Settings resolved once at startup and handed to everything that needs them.
#[derive(Debug, Clone)]
pub struct Config {
    pub store_path: PathBuf,
}

impl Config {
    /// `file` comes from `--file` or `CONTACTS_FILE`; without either the store
    /// sits next to the executable.
    pub fn resolve(file: Option<PathBuf>) -> Result<Self, AppError> {
        let store_path = match file {
            Some(path) => path,
            None => store::default_store_path()?,
        };

        debug!("contacts file resolved to {:?}", store_path);
        Ok(Self { store_path })
    }

    pub fn store(&self) -> CsvStore {
        CsvStore::new(&self.store_path)
    }
}

/// Loads `.env` from the working directory, if present, into the environment.
pub fn load_env() {
    dotenv().ok();
}
