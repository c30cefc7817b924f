//! Routed pages.

mod login;
mod logout;
mod not_found;
mod processing;
mod project;
mod projects;

pub use login::*;
pub use logout::*;
pub use not_found::*;
pub use processing::*;
pub use project::*;
pub use projects::*;
