//! The service catalog the platform hands to bound apps through `VCAP_SERVICES`.
//!
//! Only user-provided services are modelled:
//!
//! ```json
//! {
//!   "user-provided": [
//!     { "name": "compliment-service", "credentials": { "compliment": "great" } }
//!   ]
//! }
//! ```
//!
//! Decoding is lenient the same way Go's `encoding/json` is when unmarshalling into a fixed
//! struct: a document that isn't JSON at all decodes to the empty catalog, but a value of the
//! wrong type only loses that value. Field names match case-insensitively, later duplicate
//! keys replace earlier ones, and a credential that isn't a string reads as `""`.

use serde::de::{self, Deserializer, IgnoredAny, MapAccess, SeqAccess, Visitor};
use serde::Deserialize;
use std::collections::HashMap;
use std::fmt;
use std::marker::PhantomData;

/// Name of the user-provided service the credential-aware greeters look for.
pub const COMPLIMENT_SERVICE: &str = "compliment-service";

/// Credential key read from [`COMPLIMENT_SERVICE`].
pub const COMPLIMENT_KEY: &str = "compliment";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServiceCatalog {
    pub user_provided: Vec<ServiceEntry>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServiceEntry {
    pub name: String,
    pub credentials: HashMap<String, String>,
}

impl ServiceCatalog {
    /// Decode `raw`, falling back to the empty catalog when it isn't a JSON document.
    ///
    /// Invalid UTF-8 inside strings is replaced with U+FFFD rather than rejected.
    #[must_use]
    pub fn parse_or_default(raw: &[u8]) -> Self {
        let text = String::from_utf8_lossy(raw);
        serde_json::from_str::<Decoded<ServiceCatalog>>(&text)
            .ok()
            .and_then(|decoded| decoded.0)
            .unwrap_or_default()
    }

    /// Credentials of the first entry called `service`, if there is one.
    #[must_use]
    pub fn credentials_for(&self, service: &str) -> Option<&HashMap<String, String>> {
        self.user_provided
            .iter()
            .find(|entry| entry.name == service)
            .map(|entry| &entry.credentials)
    }

    /// The `key` credential of `service`, or `""` if either is missing.
    #[must_use]
    pub fn credential(&self, service: &str, key: &str) -> &str {
        self.credentials_for(service)
            .and_then(|credentials| credentials.get(key))
            .map_or("", String::as_str)
    }
}

fn is_field(key: &str, field: &str) -> bool {
    key == field || key.to_lowercase() == field
}

/// A value decoded from any JSON type. `None` means the JSON type didn't fit and the
/// destination should be left as it was.
struct Decoded<T>(Option<T>);

/// How a destination type takes each JSON shape. Shapes that don't fit are consumed and
/// ignored.
trait Lenient: Sized {
    fn from_map<'de, A: MapAccess<'de>>(mut map: A) -> Result<Option<Self>, A::Error> {
        while map.next_entry::<IgnoredAny, IgnoredAny>()?.is_some() {}
        Ok(None)
    }

    fn from_seq<'de, A: SeqAccess<'de>>(mut seq: A) -> Result<Option<Self>, A::Error> {
        while seq.next_element::<IgnoredAny>()?.is_some() {}
        Ok(None)
    }

    fn from_string(_: &str) -> Option<Self> {
        None
    }

    fn from_null() -> Option<Self> {
        None
    }
}

impl<'de, T: Lenient> Deserialize<'de> for Decoded<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer
            .deserialize_any(LenientVisitor(PhantomData))
            .map(Decoded)
    }
}

struct LenientVisitor<T>(PhantomData<T>);

impl<'de, T: Lenient> Visitor<'de> for LenientVisitor<T> {
    type Value = Option<T>;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("any JSON value")
    }

    fn visit_bool<E: de::Error>(self, _: bool) -> Result<Self::Value, E> {
        Ok(None)
    }

    fn visit_i64<E: de::Error>(self, _: i64) -> Result<Self::Value, E> {
        Ok(None)
    }

    fn visit_u64<E: de::Error>(self, _: u64) -> Result<Self::Value, E> {
        Ok(None)
    }

    fn visit_f64<E: de::Error>(self, _: f64) -> Result<Self::Value, E> {
        Ok(None)
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        Ok(T::from_string(v))
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(T::from_null())
    }

    fn visit_seq<A: SeqAccess<'de>>(self, seq: A) -> Result<Self::Value, A::Error> {
        T::from_seq(seq)
    }

    fn visit_map<A: MapAccess<'de>>(self, map: A) -> Result<Self::Value, A::Error> {
        T::from_map(map)
    }
}

impl Lenient for String {
    fn from_string(v: &str) -> Option<Self> {
        Some(v.to_owned())
    }
}

impl Lenient for HashMap<String, String> {
    fn from_map<'de, A: MapAccess<'de>>(mut map: A) -> Result<Option<Self>, A::Error> {
        let mut credentials = HashMap::new();
        while let Some(key) = map.next_key::<String>()? {
            let value = map.next_value::<Decoded<String>>()?.0.unwrap_or_default();
            credentials.insert(key, value);
        }
        Ok(Some(credentials))
    }

    fn from_null() -> Option<Self> {
        Some(HashMap::new())
    }
}

impl Lenient for Vec<ServiceEntry> {
    fn from_seq<'de, A: SeqAccess<'de>>(mut seq: A) -> Result<Option<Self>, A::Error> {
        let mut entries = Vec::new();
        while let Some(entry) = seq.next_element::<Decoded<ServiceEntry>>()? {
            entries.push(entry.0.unwrap_or_default());
        }
        Ok(Some(entries))
    }

    fn from_null() -> Option<Self> {
        Some(Vec::new())
    }
}

impl Lenient for ServiceEntry {
    fn from_map<'de, A: MapAccess<'de>>(mut map: A) -> Result<Option<Self>, A::Error> {
        let mut entry = ServiceEntry::default();
        while let Some(key) = map.next_key::<String>()? {
            if is_field(&key, "name") {
                if let Some(name) = map.next_value::<Decoded<String>>()?.0 {
                    entry.name = name;
                }
            } else if is_field(&key, "credentials") {
                if let Some(credentials) =
                    map.next_value::<Decoded<HashMap<String, String>>>()?.0
                {
                    entry.credentials = credentials;
                }
            } else {
                map.next_value::<IgnoredAny>()?;
            }
        }
        Ok(Some(entry))
    }
}

impl Lenient for ServiceCatalog {
    fn from_map<'de, A: MapAccess<'de>>(mut map: A) -> Result<Option<Self>, A::Error> {
        let mut catalog = ServiceCatalog::default();
        while let Some(key) = map.next_key::<String>()? {
            if is_field(&key, "user-provided") {
                if let Some(entries) = map.next_value::<Decoded<Vec<ServiceEntry>>>()?.0 {
                    catalog.user_provided = entries;
                }
            } else {
                map.next_value::<IgnoredAny>()?;
            }
        }
        Ok(Some(catalog))
    }
}
