//! futurama-rs: Rust client for the Futurama characters API
//!
//! This crate provides a small, read-only client for the public
//! `futuramaapi.com` REST API.
//!
//! # Example
//!
//! ```no_run
//! use futurama_rs::{CharactersQuery, FuturamaClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = FuturamaClient::new()?;
//!
//!     // First page, ordered by id
//!     let characters = client.characters(&CharactersQuery::default()).await?;
//!     for c in characters {
//!         println!("{}: {}", c.id, c.name);
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod types;

pub use client::{
    CHARACTERS_PATH, CharactersQuery, DEFAULT_BASE_URL, FuturamaClient, OrderDirection,
    REQUEST_TIMEOUT,
};
pub use config::ApiConfig;
pub use error::FuturamaError;
pub use types::{Character, CharacterStatus, CharactersPage};
