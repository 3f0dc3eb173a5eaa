//! # Nominatim
//!
//! Reverse geocoding against a Nominatim-style `/reverse` endpoint,
//! reduced to what a map widget needs: coordinates in, an optional place
//! with a short label out. Consumers depend on the [`ReverseGeocode`]
//! trait; the bundled [`Client`] is its HTTP implementation.

mod client;
mod config;
mod error;
mod place;

pub use self::client::{Client, ReverseGeocode};
pub use self::config::Config;
pub use self::error::{Error, Result};
pub use self::place::{Address, Place};
