//! Core library for the `sunset` CLI.
//!
//! This crate defines:
//! - A client for the sunrise-sunset.org API
//! - The [`SolarTimes`] model and its conversion to local time
//! - Configuration handling
//!
//! It is used by `sunset-cli`, but can also be reused by other binaries or services.

pub mod client;
pub mod config;
pub mod error;
pub mod local;
pub mod model;
pub mod transport;

pub use client::{BASE_URL, SolarTimeClient};
pub use config::Config;
pub use error::SolarError;
pub use model::{Location, SolarEvent, SolarTimes};
pub use transport::{HttpTransport, Transport};
