//! Transport gateway for the Rocketlane REST API.
//!
//! Every tool builds an [`ApiRequest`], hands it to [`Gateway::execute`], and
//! receives an [`Outcome`]: success payload, upstream HTTP error, or transport
//! failure. Nothing is retried.

mod client;
mod outcome;
mod request;

pub use client::{API_KEY_HEADER, Gateway, GatewayInitError};
pub use outcome::Outcome;
pub use request::{ApiRequest, Method, QueryValue};
