use super::*;

use std::cell::RefCell;

/// Store that lives only as long as the process.
#[derive(Debug, Default)]
pub struct MemStore {
    data: RefCell<Vec<Contact>>,
}

impl MemStore {
    pub fn with_contacts(contacts: Vec<Contact>) -> Self {
        Self {
            data: RefCell::new(contacts),
        }
    }
}

impl ContactStore for MemStore {
    fn load(&self) -> Result<Vec<Contact>, AppError> {
        Ok(self.data.borrow().clone())
    }

    fn save(&self, contacts: &[Contact]) -> Result<(), AppError> {
        *self.data.borrow_mut() = contacts.to_vec();
        Ok(())
    }

    fn append(&self, contact: &Contact) -> Result<(), AppError> {
        self.data.borrow_mut().push(contact.clone());
        Ok(())
    }

    fn describe(&self) -> String {
        "memory".to_string()
    }
}
