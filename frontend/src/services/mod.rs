//! Backend services.
//!
//! Every call goes to the PIX backend over HTTP with a bearer token.
//!
//! # Services
//!
//! - [`auth`] - login and current user
//! - [`projects`] - project listing and asset membership
//! - [`assets`] - asset lookup and multipart upload
//! - [`processing`] - processing request creation

pub mod http;
pub mod auth;
pub mod projects;
pub mod assets;
pub mod processing;

pub use auth::*;
pub use projects::*;
pub use assets::*;
pub use processing::*;
