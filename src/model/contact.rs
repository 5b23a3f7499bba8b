use serde::{Deserialize, Serialize};

use super::record::Record;

/// An entry in the contact book
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub name: String,
    pub phone: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub address: String,
}

impl Contact {
    pub fn new(
        name: impl Into<String>,
        phone: impl Into<String>,
        email: impl Into<String>,
        address: impl Into<String>,
    ) -> Self {
        Contact {
            name: name.into(),
            phone: phone.into(),
            email: email.into(),
            address: address.into(),
        }
    }

    /// Copy with every field trimmed of surrounding whitespace
    pub fn trimmed(&self) -> Self {
        Contact::new(
            self.name.trim(),
            self.phone.trim(),
            self.email.trim(),
            self.address.trim(),
        )
    }

    /// Two contacts clash when their names match ignoring case, or their
    /// phone numbers match exactly.
    pub fn clashes_with(&self, other: &Contact) -> bool {
        self.name.to_lowercase() == other.name.to_lowercase() || self.phone == other.phone
    }
}

impl Record for Contact {
    const NOUN: &'static str = "contact";

    fn label(&self) -> &str {
        &self.name
    }
}

/// Replacement values for a contact update. `None` keeps the current value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactPatch {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
}

impl ContactPatch {
    /// Build a patch from raw user input: each field is trimmed, and an
    /// empty result means "leave unchanged".
    pub fn from_input(name: &str, phone: &str, email: &str, address: &str) -> Self {
        fn keep_if_empty(s: &str) -> Option<String> {
            let s = s.trim();
            (!s.is_empty()).then(|| s.to_string())
        }
        ContactPatch {
            name: keep_if_empty(name),
            phone: keep_if_empty(phone),
            email: keep_if_empty(email),
            address: keep_if_empty(address),
        }
    }

    /// Apply the patch; returns whether any field actually changed.
    pub fn apply(self, contact: &mut Contact) -> bool {
        let mut changed = false;
        for (slot, value) in [
            (&mut contact.name, self.name),
            (&mut contact.phone, self.phone),
            (&mut contact.email, self.email),
            (&mut contact.address, self.address),
        ] {
            if let Some(value) = value
                && *slot != value
            {
                *slot = value;
                changed = true;
            }
        }
        changed
    }
}
