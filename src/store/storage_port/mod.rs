pub mod export_vcard;

use super::*;
pub use export_vcard::{export_contacts_to_vcard, resolve_export_path};
