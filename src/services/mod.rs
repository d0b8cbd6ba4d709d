//! Business logic layer for the shortening service.
//!
//! Contains all the core functionality for creating and resolving
//! redirects and managing user accounts.

mod credentials;
mod helpers;
mod redirects;
mod users;

pub use credentials::{generate_password, hash_password, verify_password};
pub use helpers::generate_token;
pub use redirects::*;
pub use users::*;
