//! `showroom-cli`
//!
//! **Responsibility:** the interactive flooring showroom session.
//!
//! The session owns the catalog for its whole lifetime and talks to the user
//! through any `BufRead`/`Write` pair, so the binary wires it to the terminal
//! and tests drive it with in-memory buffers.

pub mod errors;
pub mod menu;
pub mod session;

pub use errors::SessionError;
pub use menu::{MenuChoice, SessionState};
pub use session::Session;
