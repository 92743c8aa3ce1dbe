//! Error types.

use std::net::SocketAddr;
use std::num::ParseIntError;

/// Error enumerates the ways a fixture app can fail to start or keep serving.
///
/// Nothing in here is ever produced while answering a request: missing or malformed
/// request-time input always degrades to empty values instead.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Returned by [`Config::from_env`][crate::config::Config::from_env] when `PORT` is unset
    /// or empty.
    #[error("PORT must be set")]
    MissingPort,

    /// Returned when `PORT` is set to something other than a decimal TCP port number.
    #[error("PORT {0:?} is not a valid port number")]
    InvalidPort(String, #[source] ParseIntError),

    /// Returned when the HTTP listener can't be bound to the
    /// [`Config::bind_addr`][crate::config::Config::bind_addr].
    #[error("unable to bind HTTP listener to {0}")]
    Bind(SocketAddr, #[source] hyper::Error),

    /// Returned when the HTTP server stops with an error after it started.
    #[error("HTTP server error")]
    Serve(#[from] hyper::Error),
}
