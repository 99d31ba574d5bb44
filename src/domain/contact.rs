use std::fmt;
use std::net::{Ipv4Addr, Ipv6Addr};

use super::*;
use regex::Regex;
use serde::{Deserialize, Serialize};

const PHONE_PATTERN: &str = r"^09[0-9]{9}$";

// Dot-atom or quoted-string local part, then a hostname or a bracketed literal.
// Literals are captured and checked separately in `is_valid_address_literal`.
const EMAIL_PATTERN: &str = concat!(
    r"^(?:",
    r"[\x2d!\x23-\x27*+\x2f-\x39=?A-Z\x5e-\x7e]+(?:\.[\x2d!\x23-\x27*+\x2f-\x39=?A-Z\x5e-\x7e]+)*",
    r#"|"(?:[\x5d!\x23-\x5b\x5e-\x7e \t]|\x5c[\t\x20-\x7e])+""#,
    r")@(?:",
    r"[0-9A-Za-z](?:[0-9A-Za-z\x2d]{0,61}[0-9A-Za-z])?(?:\.[0-9A-Za-z](?:[0-9A-Za-z\x2d]{0,61}[0-9A-Za-z])?)*",
    r"|\[(?P<literal>[^\x5b\x5d]+)\]",
    r")$"
);

const GENERAL_LITERAL_PATTERN: &str = r"^[0-9A-Za-z\x2d]*[0-9A-Za-z]:[\x21-\x5a\x5e-\x7e]+$";

/// A stored contact. Serialized field names follow the store file header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub first_name: String,
    pub last_name: String,

    #[serde(rename = "phone")]
    pub primary_phone: String,

    #[serde(rename = "phone2", default)]
    pub secondary_phone: String,

    #[serde(default)]
    pub email: String,
}

/// Identity of a contact: the name pair, compared case-insensitively.
#[derive(Debug, Clone)]
pub struct ContactKey {
    pub first_name: String,
    pub last_name: String,
}

/// Replacement values for an edit. `None` keeps the stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactUpdate {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub primary_phone: Option<String>,
    pub secondary_phone: Option<String>,
    pub email: Option<String>,
}

pub struct ValidationReq;

impl ValidationReq {
    pub fn first_name_req() -> String {
        "Contact's first name cannot be empty".to_string()
    }

    pub fn last_name_req() -> String {
        "Contact's last name cannot be empty".to_string()
    }

    pub fn phone_req() -> String {
        "Phone number must be 09 followed by 9 digits (for example: 09123456789)".to_string()
    }

    pub fn phone2_req() -> String {
        "Second phone number can be empty, or must be 09 followed by 9 digits".to_string()
    }

    pub fn email_req() -> String {
        "Email can be empty, or must be a valid email address".to_string()
    }
}

impl Contact {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        primary_phone: impl Into<String>,
        secondary_phone: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Contact {
            first_name: first_name.into(),
            last_name: last_name.into(),
            primary_phone: primary_phone.into(),
            secondary_phone: secondary_phone.into(),
            email: email.into(),
        }
    }

    pub fn key(&self) -> ContactKey {
        ContactKey::new(&self.first_name, &self.last_name)
    }

    /// Checks every field rule; the first violated rule is reported.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.first_name.trim().is_empty() {
            return Err(AppError::Validation(ValidationReq::first_name_req()));
        }

        if self.last_name.trim().is_empty() {
            return Err(AppError::Validation(ValidationReq::last_name_req()));
        }

        if !is_valid_phone(&self.primary_phone)? {
            return Err(AppError::Validation(ValidationReq::phone_req()));
        }

        if !self.secondary_phone.is_empty() && !is_valid_phone(&self.secondary_phone)? {
            return Err(AppError::Validation(ValidationReq::phone2_req()));
        }

        if !self.email.is_empty() && !is_valid_email(&self.email)? {
            return Err(AppError::Validation(ValidationReq::email_req()));
        }

        Ok(())
    }

    pub fn has_duplicate_phone(&self) -> bool {
        !self.secondary_phone.is_empty() && self.secondary_phone == self.primary_phone
    }
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "First name: {}", self.first_name)?;
        writeln!(f, "Last name: {}", self.last_name)?;
        write!(f, "Phone number: {}", self.primary_phone)?;
        if !self.secondary_phone.is_empty() {
            write!(f, "\nSecond phone number: {}", self.secondary_phone)?;
        }
        if !self.email.is_empty() {
            write!(f, "\nEmail address: {}", self.email)?;
        }
        Ok(())
    }
}

impl ContactKey {
    pub fn new(first_name: &str, last_name: &str) -> Self {
        ContactKey {
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
        }
    }

    pub fn matches(&self, contact: &Contact) -> bool {
        names_match(&self.first_name, &contact.first_name)
            && names_match(&self.last_name, &contact.last_name)
    }
}

impl fmt::Display for ContactKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.first_name, self.last_name)
    }
}

impl ContactUpdate {
    /// Builds an update from raw answers, where an empty answer means "skip".
    pub fn from_input(
        first_name: &str,
        last_name: &str,
        primary_phone: &str,
        secondary_phone: &str,
        email: &str,
    ) -> Self {
        ContactUpdate {
            first_name: skip_if_empty(first_name),
            last_name: skip_if_empty(last_name),
            primary_phone: skip_if_empty(primary_phone),
            secondary_phone: skip_if_empty(secondary_phone),
            email: skip_if_empty(email),
        }
    }

    /// Produces the full replacement record for `original`.
    pub fn apply(&self, original: &Contact) -> Contact {
        let pick = |new: &Option<String>, old: &String| new.clone().unwrap_or_else(|| old.clone());

        Contact {
            first_name: pick(&self.first_name, &original.first_name),
            last_name: pick(&self.last_name, &original.last_name),
            primary_phone: pick(&self.primary_phone, &original.primary_phone),
            secondary_phone: pick(&self.secondary_phone, &original.secondary_phone),
            email: pick(&self.email, &original.email),
        }
    }
}

fn skip_if_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

// Upper-casing first folds forms like 'ß' to 'ss'.
fn fold_case(name: &str) -> String {
    name.to_uppercase().to_lowercase()
}

fn names_match(a: &str, b: &str) -> bool {
    fold_case(a) == fold_case(b)
}

pub fn is_valid_phone(phone: &str) -> Result<bool, AppError> {
    let re = Regex::new(PHONE_PATTERN)?;
    Ok(re.is_match(phone))
}

pub fn is_valid_email(email: &str) -> Result<bool, AppError> {
    let re = Regex::new(EMAIL_PATTERN)?;

    let Some(captures) = re.captures(email) else {
        return Ok(false);
    };

    match captures.name("literal") {
        Some(literal) => is_valid_address_literal(literal.as_str()),
        None => Ok(true),
    }
}

fn is_valid_address_literal(literal: &str) -> Result<bool, AppError> {
    if let Some(v6) = literal.strip_prefix("IPv6:") {
        return Ok(v6.parse::<Ipv6Addr>().is_ok());
    }

    if literal.parse::<Ipv4Addr>().is_ok() {
        return Ok(true);
    }

    let re = Regex::new(GENERAL_LITERAL_PATTERN)?;
    Ok(re.is_match(literal))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn amin() -> Contact {
        Contact::new("Amin", "Khatoon Abadi", "09123456789", "", "")
    }

    #[test]
    fn phone_requires_09_and_nine_digits() -> Result<(), AppError> {
        assert!(is_valid_phone("09123456789")?);

        assert!(!is_valid_phone("9123456789")?); // missing leading 0
        assert!(!is_valid_phone("0912345678")?); // 10 digits
        assert!(!is_valid_phone("091234567890")?); // 12 digits
        assert!(!is_valid_phone("08123456789")?);
        assert!(!is_valid_phone("0912345678a")?);
        assert!(!is_valid_phone("")?);
        Ok(())
    }

    #[test]
    fn email_accepts_common_shapes() -> Result<(), AppError> {
        assert!(is_valid_email("a@b.com")?);
        assert!(is_valid_email("aminkhatoonabadi@gmail.com")?);
        assert!(is_valid_email("first.last+tag@mail.example.org")?);
        assert!(is_valid_email("\"john doe\"@example.com")?);
        assert!(is_valid_email("user@[192.168.0.1]")?);
        assert!(is_valid_email("user@[IPv6:2001:db8::1]")?);
        Ok(())
    }

    #[test]
    fn email_rejects_malformed_addresses() -> Result<(), AppError> {
        assert!(!is_valid_email("a@@b.com")?);
        assert!(!is_valid_email("a.com")?);
        assert!(!is_valid_email("a@b.com trailing")?);
        assert!(!is_valid_email(".a@b.com")?);
        assert!(!is_valid_email("a..b@c.com")?);
        assert!(!is_valid_email("a@-b.com")?);
        assert!(!is_valid_email("user@[300.1.1.1]")?);
        assert!(!is_valid_email("user@[IPv6:not-an-address]")?);
        Ok(())
    }

    #[test]
    fn key_matches_ignoring_case() {
        let key = ContactKey::new("AMIN", "khatoon abadi");

        assert!(key.matches(&amin()));
        assert!(!ContactKey::new("Amin", "Khatoon").matches(&amin()));
    }

    #[test]
    fn key_matches_folded_forms() {
        let contact = Contact::new("Jonas", "Straße", "09123456789", "", "");

        assert!(ContactKey::new("jonas", "STRASSE").matches(&contact));
        assert!(ContactKey::new("JONAS", "strasse").matches(&contact));
    }

    #[test]
    fn validate_reports_the_broken_field() {
        let mut contact = amin();
        assert!(contact.validate().is_ok());

        contact.first_name = "  ".to_string();
        let err = contact.validate().unwrap_err();
        assert!(err.to_string().contains("first name cannot be empty"));

        let mut contact = amin();
        contact.secondary_phone = "12345".to_string();
        let err = contact.validate().unwrap_err();
        assert!(err.to_string().contains("Second phone number"));

        let mut contact = amin();
        contact.email = "not-an-email".to_string();
        assert!(matches!(contact.validate(), Err(AppError::Validation(_))));
    }

    #[test]
    fn update_keeps_skipped_fields() {
        let update = ContactUpdate::from_input("", "", "", "09111111111", "");
        let merged = update.apply(&amin());

        assert_eq!(
            merged,
            Contact::new("Amin", "Khatoon Abadi", "09123456789", "09111111111", "")
        );
    }

    #[test]
    fn empty_update_reproduces_original() {
        let update = ContactUpdate::from_input("", "", "", "", "");

        assert_eq!(update, ContactUpdate::default());
        assert_eq!(update.apply(&amin()), amin());
    }

    #[test]
    fn display_omits_empty_optional_fields() {
        let rendered = amin().to_string();

        assert!(rendered.contains("Phone number: 09123456789"));
        assert!(!rendered.contains("Second phone number"));
        assert!(!rendered.contains("Email address"));
    }
}
