//! Directory and booking core for local service professionals and
//! short-term rentals.
//!
//! Everything runs in process memory: the catalog is seeded mock data,
//! bookings end in a chat deep-link, and the points balance lives only as
//! long as the session.

pub mod assist;
pub mod booking;
pub mod catalog;
pub mod config;
pub mod discovery;
pub mod error;
pub mod models;
pub mod session;

pub use error::{HubError, Result};
