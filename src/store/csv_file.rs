use super::*;

use csv::{ReaderBuilder, Terminator, Writer, WriterBuilder};
use log::debug;
use std::fs::{File, OpenOptions};
use std::io::Write;

/// Flat CSV file holding one header row followed by one row per contact.
#[derive(Debug, Clone)]
pub struct CsvStore {
    path: PathBuf,
}

impl CsvStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    // Rows end in CRLF; readers accept either line ending.
    fn writer(file: File) -> Writer<File> {
        WriterBuilder::new()
            .has_headers(false)
            .terminator(Terminator::CRLF)
            .from_writer(file)
    }
}

impl ContactStore for CsvStore {
    fn load(&self) -> Result<Vec<Contact>, AppError> {
        let file = File::open(&self.path)?;
        let mut reader = ReaderBuilder::new().has_headers(true).from_reader(file);

        let headers = reader.headers()?.clone();
        if headers.is_empty() {
            return Ok(Vec::new());
        }
        if headers.iter().ne(HEADER.iter().copied()) {
            return Err(AppError::CorruptStore(format!(
                "expected header '{}', found '{}'",
                HEADER.join(","),
                headers.iter().collect::<Vec<_>>().join(",")
            )));
        }

        let mut contacts = Vec::new();
        for result in reader.deserialize() {
            let record: Contact = result?;
            contacts.push(record);
        }

        debug!("read {} contacts from {:?}", contacts.len(), self.path);
        Ok(contacts)
    }

    fn save(&self, contacts: &[Contact]) -> Result<(), AppError> {
        create_file_parent(&self.path)?;

        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&self.path)?;

        let mut writer = Self::writer(file);
        writer.write_record(HEADER)?;
        for contact in contacts {
            writer.serialize(contact)?;
        }
        writer.flush()?;

        debug!("rewrote {:?} with {} contacts", self.path, contacts.len());
        Ok(())
    }

    fn append(&self, contact: &Contact) -> Result<(), AppError> {
        // A hand-edited file may lack the final line break.
        let unterminated = fs::read(&self.path)?.last().is_some_and(|b| *b != b'\n');

        let mut file = OpenOptions::new().append(true).open(&self.path)?;
        if unterminated {
            file.write_all(b"\r\n")?;
        }

        let mut writer = Self::writer(file);
        writer.serialize(contact)?;
        writer.flush()?;

        debug!("appended one contact to {:?}", self.path);
        Ok(())
    }

    fn ensure_exists(&self) -> Result<(), AppError> {
        // A zero-byte file still needs its header before rows are appended.
        if fs::metadata(&self.path).is_ok_and(|meta| meta.len() > 0) {
            return Ok(());
        }

        debug!("writing header to contacts file at {:?}", self.path);
        self.save(&[])
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
