pub use crate::cli::{command, run_app};
pub use crate::config::Config;
pub use crate::domain::{
    ClearOutcome, ContactBook, EditOutcome,
    contact::{self, Contact, ContactKey, ContactUpdate, is_valid_email, is_valid_phone},
};
pub use crate::errors::AppError;
pub use crate::store::{self, ContactStore, CsvStore, memory::MemStore};
