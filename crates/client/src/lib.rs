//! HTTP boundary for the folio admin console.
//!
//! Provides the [`gateway::AdminGateway`] trait the form sessions talk to,
//! its [`reqwest`]-backed implementation, the multipart upload job, and
//! client configuration from the environment.

pub mod config;
pub mod error;
pub mod gateway;
pub mod http;
pub mod upload;
