//! Domain-level frontend features and their shared logic. Routes import these
//! modules to keep view code focused while session handling stays in one place.

pub mod auth;
