//! HTTP endpoints served by each fixture app.
//!
//! Every endpoint answers any request method with HTTP 200 (OK) and a `text/plain` body.
//! Any other path gets HTTP 404 (Not Found).
//!
//! # Greeter
//!
//! ## `/`
//!
//!   Returns `hello {NAME}\n`.
//!
//! # Farewell
//!
//! ## `/`
//!
//!   Returns `goodbye {NAME}\n`.
//!
//! ## `/v1`
//!
//!   Returns `goodbye from v1 {NAME}\n`.
//!
//! # Credential greeter
//!
//! ## `/`
//!
//!   Returns
//!
//!   ```text
//!   hello {NAME}, you are {compliment}!
//!   You have these services: {VCAP_SERVICES}
//!   ```
//!
//!   Where `{compliment}` is the `compliment` credential of the first user-provided service
//!   named `compliment-service` in `VCAP_SERVICES`, or empty if there is none, and
//!   `{VCAP_SERVICES}` is the variable's raw bytes. See [`crate::vcap`].
//!
//! # Reminder greeter
//!
//! ## `/`
//!
//!   Returns
//!
//!   ```text
//!   hello {NAME}, you are {compliment}!
//!   You have these services: {VCAP_SERVICES}.
//!   Did you remember to {VERB} your {ANIMAL_TYPE} named {ANIMAL_NAME} at {HOUR}:{MINUTE}?
//!   ```
//!
//!   With a trailing newline. Unset variables render as empty.

mod handlers;
mod routes;
pub mod server;

use crate::config::Config;
pub use routes::new as router;
pub use server::bind;

/// Renders the response body for one route.
pub type Handler = fn(&Config) -> Vec<u8>;

const GREETER_ROUTES: &[(&str, Handler)] = &[("/", handlers::hello)];
const FAREWELL_ROUTES: &[(&str, Handler)] =
    &[("/", handlers::goodbye), ("/v1", handlers::goodbye_v1)];
const CREDENTIAL_GREETER_ROUTES: &[(&str, Handler)] = &[("/", handlers::hello_with_services)];
const REMINDER_GREETER_ROUTES: &[(&str, Handler)] = &[("/", handlers::hello_with_reminder)];

/// The fixture apps. Each binary serves exactly one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum App {
    Greeter,
    Farewell,
    CredentialGreeter,
    ReminderGreeter,
}

impl App {
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            App::Greeter => "greeter",
            App::Farewell => "farewell",
            App::CredentialGreeter => "credential-greeter",
            App::ReminderGreeter => "reminder-greeter",
        }
    }

    /// The app's route table, mapping exact request paths to handlers.
    #[must_use]
    pub fn routes(self) -> &'static [(&'static str, Handler)] {
        match self {
            App::Greeter => GREETER_ROUTES,
            App::Farewell => FAREWELL_ROUTES,
            App::CredentialGreeter => CREDENTIAL_GREETER_ROUTES,
            App::ReminderGreeter => REMINDER_GREETER_ROUTES,
        }
    }
}
