//! Request middleware and extractors.
//!
//! Authorization is split into three pieces:
//!
//! 1. [`auth::AuthUser`] — bearer-token extractor exposing the caller's
//!    verified claims.
//! 2. [`role::RoleStore`] — capability interface resolving a caller's
//!    role from their email. Roles live in the database, not the token:
//!    promoting a user takes effect on their very next request.
//! 3. [`policy`] — a declarative table mapping every route to its access
//!    level, enforced by a single middleware layer.

pub mod auth;
pub mod policy;
pub mod role;
