//! Configuration modules for the SportsCamp API.
//!
//! Each submodule handles one aspect of configuration, loaded from
//! environment variables at startup (via dotenvy in `main`).
//!
//! # Modules
//!
//! - [`cors`]: CORS allowed origins
//! - [`database`]: PostgreSQL connection pool initialization
//! - [`jwt`]: Token signing secret and expiry
//! - [`stripe`]: Payment processor credentials and endpoint

pub mod cors;
pub mod database;
pub mod jwt;
pub mod stripe;
