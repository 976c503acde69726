//! REST client for the ZeroOne backend.
//!
//! Reads come back as domain types (posts already normalized). User actions
//! go through [`ApiClient`]'s [`zeroone_optimistic::Network`] impl so the
//! optimistic coordinator can drive them; creating and editing posts and
//! comments return the stored record directly.

pub mod admin;
pub mod auth;
pub mod client;
pub mod comments;
pub mod config;
pub mod error;
pub mod network;
pub mod notifications;
pub mod posts;
pub mod users;

pub use client::ApiClient;
pub use config::{ClientConfig, Credentials};
pub use error::ApiError;
pub use network::route;
