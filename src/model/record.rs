use serde::Serialize;
use serde::de::DeserializeOwned;

/// A flat record kept in a JSON-backed collection.
pub trait Record: Clone + Serialize + DeserializeOwned {
    /// Singular noun used in user-facing messages ("task", "contact")
    const NOUN: &'static str;

    /// The identifying field reported back after an add or delete
    fn label(&self) -> &str;
}
