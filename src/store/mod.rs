pub mod csv_file;
pub mod memory;
pub mod storage_port;

use crate::prelude::{AppError, Contact};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub use csv_file::CsvStore;

pub const STORE_FILE_NAME: &str = "contacts.csv";

/// Header row of the store file, in column order.
pub const HEADER: [&str; 5] = ["first_name", "last_name", "phone", "phone2", "email"];

pub trait ContactStore {
    fn load(&self) -> Result<Vec<Contact>, AppError>;

    fn save(&self, contacts: &[Contact]) -> Result<(), AppError>;

    fn append(&self, contact: &Contact) -> Result<(), AppError> {
        let mut contacts = self.load()?;
        contacts.push(contact.clone());
        self.save(&contacts)
    }

    /// Creates an empty store if none exists yet. Safe to call repeatedly.
    fn ensure_exists(&self) -> Result<(), AppError> {
        Ok(())
    }

    fn describe(&self) -> String;
}

/// `contacts.csv` next to the running executable.
pub fn default_store_path() -> Result<PathBuf, AppError> {
    let exe = env::current_exe()?;
    let dir = exe
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."));
    Ok(dir.join(STORE_FILE_NAME))
}

pub fn create_file_parent(path: &Path) -> Result<(), AppError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent)?;
    }
    Ok(())
}
