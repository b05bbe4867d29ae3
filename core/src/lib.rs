//! Core components for signed timetable API clients.
//!
//! This crate provides the foundational types and traits for the ptvsign
//! ecosystem. It carries no service knowledge of its own: the actual
//! request signing and endpoint catalogue live in the service crates.
//!
//! ## Overview
//!
//! The crate is built around a few key concepts:
//!
//! - **Context**: a container holding implementations for HTTP sending and
//!   environment access, so clients stay testable without a network
//! - **Traits**: abstract interfaces for credential loading
//!   ([`ProvideCredential`]) and credential validity ([`SigningCredential`])
//! - **Error**: one structured error type with a machine-checkable
//!   [`ErrorKind`] for every failure a call can surface
//!
//! ## Example
//!
//! ```no_run
//! use ptvsign_core::{Context, OsEnv, ProvideCredential, Result, SigningCredential};
//! use async_trait::async_trait;
//!
//! // Define your credential type
//! #[derive(Clone, Debug)]
//! struct MyCredential {
//!     dev_id: String,
//!     api_key: String,
//! }
//!
//! impl SigningCredential for MyCredential {
//!     fn is_valid(&self) -> bool {
//!         !self.dev_id.is_empty() && !self.api_key.is_empty()
//!     }
//! }
//!
//! // Implement a credential loader
//! #[derive(Debug)]
//! struct MyLoader;
//!
//! #[async_trait]
//! impl ProvideCredential for MyLoader {
//!     type Credential = MyCredential;
//!
//!     async fn provide_credential(&self, _: &Context) -> Result<Option<Self::Credential>> {
//!         Ok(Some(MyCredential {
//!             dev_id: "3000000".to_string(),
//!             api_key: "my-api-key".to_string(),
//!         }))
//!     }
//! }
//!
//! # async fn example() -> Result<()> {
//! let ctx = Context::new().with_env(OsEnv);
//! let cred = MyLoader.provide_credential(&ctx).await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Utilities
//!
//! - [`hash`]: HMAC-SHA1 helpers used for request signatures
//! - [`time`]: ISO-8601 formatting the timetable service requires, plus
//!   conversion of service timestamps to Melbourne local time
//! - [`utils`]: general utilities including data redaction

// Make sure all our public APIs have docs.
#![warn(missing_docs)]

pub mod hash;
pub mod time;
pub mod utils;

mod context;
pub use context::Context;
pub use context::Env;
pub use context::HttpSend;
pub use context::NoopEnv;
pub use context::NoopHttpSend;
pub use context::OsEnv;
pub use context::StaticEnv;

mod api;
pub use api::{ProvideCredential, ProvideCredentialChain, SigningCredential};

mod error;
pub use error::{Error, ErrorKind, Result};
