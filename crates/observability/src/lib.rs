//! `showroom-observability`: structured logging for the showroom session.
//!
//! The session's transcript owns stdout, so everything here writes to stderr.

pub mod logging;

pub use logging::{DEFAULT_FILTER, init};
