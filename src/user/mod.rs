//! User domain model and its ports.
//!
//! Nothing in this module knows about HTTP or SQL; the adapters in
//! [`crate::router`] and [`postgres`] translate to and from their own shapes.

mod postgres;
mod repository;
mod service;

pub use postgres::*;
pub use repository::*;
pub use service::*;

/// Canonical in-memory representation of a user.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct User {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

/// The mutable fields of a [`User`], as carried by an update request.
///
/// The identifier is never part of a patch; it comes from the request path.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UserPatch {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl User {
    /// Overwrite every mutable field from `patch`, keeping `id`.
    ///
    /// All three fields are always replaced; there is no partial-field
    /// selection.
    pub fn apply(&mut self, patch: UserPatch) {
        self.first_name = patch.first_name;
        self.last_name = patch.last_name;
        self.email = patch.email;
    }
}
