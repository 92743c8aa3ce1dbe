use crate::api::{routes, App};
use crate::config::SharedConfig;
use crate::error::Error;
use axum::routing::IntoMakeService;
use axum::Router;
use hyper::server::conn::AddrIncoming;

/// A bound fixture app server. Await it to serve until it fails.
pub type Server = axum::Server<AddrIncoming, IntoMakeService<Router>>;

/// Bind the listener for `app` to [`Config::bind_addr`][crate::config::Config::bind_addr].
///
/// # Errors
///
/// Returns [`Error::Bind`] if the address can't be bound.
pub fn bind(app: App, config: SharedConfig) -> Result<Server, Error> {
    let addr = config.bind_addr;
    let builder = axum::Server::try_bind(&addr).map_err(|err| Error::Bind(addr, err))?;
    Ok(builder.serve(routes::new(app, config).into_make_service()))
}
