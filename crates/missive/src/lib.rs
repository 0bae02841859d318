//! Missive messaging API client for Rust.
//!
//! The crate owns the remote-call failure taxonomy ([`ApiError`]) and its
//! user-facing localization ([`ApiError::describe`]): every failure path of a
//! remote call resolves to exactly one taxonomy value, and every taxonomy
//! value resolves to exactly one string fit to show the user.
//!
//! # Example
//!
//! ```rust,no_run
//! use missive::{Client, EnglishCatalog};
//!
//! #[tokio::main]
//! async fn main() {
//!     let client = Client::builder()
//!         .access_token("token_xxx")
//!         .build()
//!         .expect("client config");
//!
//!     match client.user("773e5e77-4107-45c2-b648-8fc722ed77f5").await {
//!         Ok(user) => println!("{}", user.full_name),
//!         Err(error) => eprintln!("{}", error.describe(&EnglishCatalog)),
//!     }
//! }
//! ```

mod client;
mod config;
mod description;
mod error;
mod preview;
mod transport;
mod types;

pub use client::Client;
pub use config::{ClientBuilder, Config, ConfigError, DEFAULT_API_HOST, DEFAULT_TIMEOUT};
pub use description::{EnglishCatalog, MessageCatalog, MessageKey};
pub use error::ApiError;
pub use preview::{post_preview, PREVIEW_LIMIT};
pub use transport::TransportError;
pub use types::{
    Account, Relationship, RelationshipAction, RelationshipRequest, RemoteError,
    ResponseEnvelope, User,
};

impl ClientBuilder {
    /// Build the Missive client.
    pub fn build(self) -> Result<Client, ConfigError> {
        let config = self.build_config()?;
        Client::from_config(config)
    }
}
