//! Auth service library.
//!
//! Registration, credential checks and JWT issuance. Customer storage sits
//! behind [`CustomerDirectory`] so this crate never touches the database.

pub mod directory;
pub mod service;

pub use directory::CustomerDirectory;
pub use service::{AuthService, Authenticator, Claims, Registration, TokenResponse};
