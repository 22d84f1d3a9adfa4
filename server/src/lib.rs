//! Server library module.
//!
//! Exposes the JSON API routes so the binary and the integration tests
//! mount exactly the same router.

pub mod routes;
