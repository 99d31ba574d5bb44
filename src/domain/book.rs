use super::*;

use log::{debug, info};

/// CRUD over a [`ContactStore`]. Every call reads the store afresh and every
/// mutation writes it back before returning; nothing is cached in between.
pub struct ContactBook<S: ContactStore> {
    storage: S,
}

#[derive(Debug, PartialEq, Eq)]
pub enum EditOutcome {
    Updated { before: Contact, after: Contact },
    NoChange(Contact),
}

#[derive(Debug, PartialEq, Eq)]
pub enum ClearOutcome {
    Cleared(usize),
    AlreadyEmpty,
}

impl<S: ContactStore> ContactBook<S> {
    pub fn open(storage: S) -> Result<Self, AppError> {
        storage.ensure_exists()?;
        debug!("opened contact book on {}", storage.describe());
        Ok(Self { storage })
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn list_all(&self) -> Result<Vec<Contact>, AppError> {
        self.storage.load()
    }

    pub fn find_by_name(&self, key: &ContactKey) -> Result<Option<Contact>, AppError> {
        let contacts = self.storage.load()?;
        Ok(contacts.into_iter().find(|c| key.matches(c)))
    }

    /// Like [`find_by_name`](Self::find_by_name) but a missing key is an error.
    pub fn get(&self, key: &ContactKey) -> Result<Contact, AppError> {
        self.find_by_name(key)?
            .ok_or_else(|| AppError::NotFound(format!("Contact {}", key)))
    }

    pub fn create(&self, contact: Contact) -> Result<(), AppError> {
        contact.validate()?;

        if let Some(existing) = self.find_by_name(&contact.key())? {
            return Err(AppError::AlreadyExists(Box::new(existing)));
        }

        self.storage.append(&contact)?;
        info!("created contact {}", contact.key());
        Ok(())
    }

    /// Replaces the contact stored under `key` with `update` merged over it.
    ///
    /// Renaming onto a name pair held by a different contact is refused with
    /// [`AppError::AlreadyExists`].
    pub fn edit(&self, key: &ContactKey, update: &ContactUpdate) -> Result<EditOutcome, AppError> {
        let mut contacts = self.storage.load()?;

        let Some(position) = contacts.iter().position(|c| key.matches(c)) else {
            return Err(AppError::NotFound(format!("Contact {}", key)));
        };

        let original = contacts[position].clone();
        let merged = update.apply(&original);

        if merged == original {
            debug!("edit of {} changed nothing", key);
            return Ok(EditOutcome::NoChange(original));
        }

        merged.validate()?;

        let new_key = merged.key();
        if let Some(clash) = contacts
            .iter()
            .enumerate()
            .find(|(i, c)| *i != position && new_key.matches(c))
            .map(|(_, c)| c)
        {
            return Err(AppError::AlreadyExists(Box::new(clash.clone())));
        }

        contacts[position] = merged.clone();
        self.storage.save(&contacts)?;

        info!("edited contact {} -> {}", key, new_key);
        Ok(EditOutcome::Updated {
            before: original,
            after: merged,
        })
    }

    pub fn delete_one(&self, key: &ContactKey) -> Result<Contact, AppError> {
        let mut contacts = self.storage.load()?;

        let Some(position) = contacts.iter().position(|c| key.matches(c)) else {
            return Err(AppError::NotFound(format!("Contact {}", key)));
        };

        let deleted = contacts.remove(position);
        self.storage.save(&contacts)?;

        info!("deleted contact {}", deleted.key());
        Ok(deleted)
    }

    pub fn delete_all(&self) -> Result<ClearOutcome, AppError> {
        let count = self.storage.load()?.len();

        if count == 0 {
            return Ok(ClearOutcome::AlreadyEmpty);
        }

        self.storage.save(&[])?;

        info!("deleted all {} contacts", count);
        Ok(ClearOutcome::Cleared(count))
    }
}
