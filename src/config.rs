use crate::error::Error;
use std::ffi::OsString;
use std::net::{Ipv4Addr, SocketAddr};
use std::sync::Arc;

pub type SharedConfig = Arc<Config>;

/// Process configuration, read from the environment once at startup and handed to every
/// request handler.
///
/// Values that end up in response bodies are kept as the raw bytes the platform provided,
/// so they are echoed back unchanged even when they aren't valid UTF-8.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// `NAME`, or empty when unset.
    pub name: Vec<u8>,
    /// `VCAP_SERVICES` exactly as the platform provided it, or empty when unset.
    pub vcap_services: Vec<u8>,
    /// Only used by the reminder greeter.
    pub reminder: Reminder,
    /// All interfaces, on `PORT`.
    pub bind_addr: SocketAddr,
}

/// `VERB`, `ANIMAL_TYPE`, `ANIMAL_NAME`, `HOUR` and `MINUTE`, each empty when unset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Reminder {
    pub verb: Vec<u8>,
    pub animal_type: Vec<u8>,
    pub animal_name: Vec<u8>,
    pub hour: Vec<u8>,
    pub minute: Vec<u8>,
}

impl Config {
    /// Load the config from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingPort`] or [`Error::InvalidPort`] if `PORT` can't be used to
    /// build a bind address.
    pub fn from_env() -> Result<Self, Error> {
        Self::from_lookup(|key| std::env::var_os(key))
    }

    /// Load the config using `lookup` to resolve variable names to values.
    ///
    /// # Errors
    ///
    /// See [`Config::from_env`].
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<OsString>) -> Result<Self, Error> {
        let port = match lookup("PORT") {
            Some(port) if !port.is_empty() => port.to_string_lossy().into_owned(),
            _ => return Err(Error::MissingPort),
        };
        let port: u16 = port
            .parse()
            .map_err(|err| Error::InvalidPort(port.clone(), err))?;

        let raw = |key: &str| {
            lookup(key)
                .map(OsString::into_encoded_bytes)
                .unwrap_or_default()
        };

        Ok(Self {
            name: raw("NAME"),
            vcap_services: raw("VCAP_SERVICES"),
            reminder: Reminder {
                verb: raw("VERB"),
                animal_type: raw("ANIMAL_TYPE"),
                animal_name: raw("ANIMAL_NAME"),
                hour: raw("HOUR"),
                minute: raw("MINUTE"),
            },
            bind_addr: SocketAddr::from((Ipv4Addr::UNSPECIFIED, port)),
        })
    }
}
