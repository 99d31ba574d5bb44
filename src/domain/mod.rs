pub mod book;
pub mod contact;

use crate::errors::AppError;
use crate::store::ContactStore;

pub use book::{ClearOutcome, ContactBook, EditOutcome};
pub use contact::{Contact, ContactKey, ContactUpdate};
