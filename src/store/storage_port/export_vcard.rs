use super::*;

use chrono::{DateTime, Utc};
use log::info;
use std::io::{BufWriter, Write};

pub const EXPORT_FILE_NAME: &str = "contacts.vcf";

/// Picks the `.vcf` destination: `des` if given (a directory gets
/// `contacts.vcf` appended), otherwise next to the store file.
pub fn resolve_export_path(des: Option<&str>, store_path: &Path) -> Result<PathBuf, AppError> {
    let Some(des) = des else {
        let dir = store_path.parent().unwrap_or_else(|| Path::new("."));
        return Ok(dir.join(EXPORT_FILE_NAME));
    };

    let file_path = PathBuf::from(des);

    if file_path.is_dir() {
        return Ok(file_path.join(EXPORT_FILE_NAME));
    }

    if file_path.extension().is_none_or(|ext| ext != "vcf") {
        return Err(AppError::Validation(
            "Export file must be a .vcf file".to_string(),
        ));
    }

    Ok(file_path)
}

pub fn export_contacts_to_vcard(contacts: &[Contact], des: &Path) -> Result<u64, AppError> {
    create_file_parent(des)?;

    let file = fs::OpenOptions::new()
        .write(true)
        .truncate(true)
        .create(true)
        .open(des)?;
    let mut writer = BufWriter::new(file);

    let rev = Utc::now();
    let mut counter: u64 = 0;

    for contact in contacts {
        writer.write_all(render_vcard(contact, &rev).as_bytes())?;
        counter += 1;
    }

    writer.flush()?;

    info!("exported {} contacts to {:?}", counter, des);
    Ok(counter)
}

/// One vCard 3.0 entry with CRLF line endings.
pub fn render_vcard(contact: &Contact, rev: &DateTime<Utc>) -> String {
    let first = escape_text(&contact.first_name);
    let last = escape_text(&contact.last_name);

    let mut lines = vec![
        "BEGIN:VCARD".to_string(),
        "VERSION:3.0".to_string(),
        format!("N:{last};{first};;;"),
        format!("FN:{first} {last}"),
        format!("TEL;TYPE=CELL:{}", contact.primary_phone),
    ];

    if !contact.secondary_phone.is_empty() {
        lines.push(format!("TEL;TYPE=VOICE:{}", contact.secondary_phone));
    }

    if !contact.email.is_empty() {
        lines.push(format!("EMAIL;TYPE=INTERNET:{}", escape_text(&contact.email)));
    }

    lines.push(format!("REV:{}", rev.format("%Y%m%dT%H%M%SZ")));
    lines.push("END:VCARD".to_string());

    let mut card = lines.join("\r\n");
    card.push_str("\r\n");
    card
}

fn escape_text(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            ',' => escaped.push_str("\\,"),
            ';' => escaped.push_str("\\;"),
            '\n' => escaped.push_str("\\n"),
            '\r' => {}
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use tempfile::tempdir;

    #[test]
    fn renders_only_present_fields() {
        let rev = Utc.with_ymd_and_hms(2024, 3, 1, 12, 30, 0).unwrap();
        let contact = Contact::new("Amin", "Khatoon Abadi", "09123456789", "", "");

        let card = render_vcard(&contact, &rev);

        assert_eq!(
            card,
            "BEGIN:VCARD\r\n\
             VERSION:3.0\r\n\
             N:Khatoon Abadi;Amin;;;\r\n\
             FN:Amin Khatoon Abadi\r\n\
             TEL;TYPE=CELL:09123456789\r\n\
             REV:20240301T123000Z\r\n\
             END:VCARD\r\n"
        );
    }

    #[test]
    fn escapes_structured_separators() {
        let rev = Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap();
        let contact = Contact::new("Jo; Jr", "Smith, III", "09123456789", "09111111111", "jo@example.com");

        let card = render_vcard(&contact, &rev);

        assert!(card.contains("N:Smith\\, III;Jo\\; Jr;;;\r\n"));
        assert!(card.contains("TEL;TYPE=VOICE:09111111111\r\n"));
        assert!(card.contains("EMAIL;TYPE=INTERNET:jo@example.com\r\n"));
    }

    #[test]
    fn export_destination_rules() -> Result<(), AppError> {
        let dir = tempdir()?;
        let store_path = dir.path().join("contacts.csv");

        assert_eq!(
            resolve_export_path(None, &store_path)?,
            dir.path().join(EXPORT_FILE_NAME)
        );

        let dir_str = dir.path().to_string_lossy().to_string();
        assert_eq!(
            resolve_export_path(Some(&dir_str), &store_path)?,
            dir.path().join(EXPORT_FILE_NAME)
        );

        assert!(matches!(
            resolve_export_path(Some("out.csv"), &store_path),
            Err(AppError::Validation(_))
        ));
        Ok(())
    }

    #[test]
    fn writes_one_card_per_contact() -> Result<(), AppError> {
        let dir = tempdir()?;
        let des = dir.path().join("out.vcf");
        let contacts = vec![
            Contact::new("Amin", "Khatoon Abadi", "09123456789", "", ""),
            Contact::new("Sara", "Ahmadi", "09350000000", "", "sara@example.com"),
        ];

        let total = export_contacts_to_vcard(&contacts, &des)?;

        let data = fs::read_to_string(&des)?;
        assert_eq!(total, 2);
        assert_eq!(data.matches("BEGIN:VCARD").count(), 2);
        assert!(data.contains("FN:Sara Ahmadi"));
        Ok(())
    }
}
