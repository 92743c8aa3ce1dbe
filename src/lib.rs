//! Fixture apps
//!
//! Tiny HTTP apps that acceptance tests deploy to a Cloud Foundry style platform and then
//! call to check the deployment worked. Each app is configured from the environment the
//! platform provides (`PORT`, `NAME` and, for the credential greeters, `VCAP_SERVICES`) and
//! answers with a fixed greeting. See [`api`] for the endpoints.
#![warn(clippy::pedantic)]

pub mod api;
pub mod config;
pub mod error;
pub mod runner;
pub mod vcap;

pub use api::App;
pub use config::{Config, Reminder, SharedConfig};
pub use runner::run;
pub use vcap::ServiceCatalog;
