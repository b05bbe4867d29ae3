//! PTV Timetable API signing and client implementation for ptvsign.
//!
//! This crate talks to the Public Transport Victoria Timetable API v3. Every
//! call is a GET authenticated by an HMAC-SHA1 signature over the exact
//! path-and-query bytes sent, computed from a `{dev id, api key}` pair
//! issued by PTV.
//!
//! ## Quick Start
//!
//! ```no_run
//! use ptvsign_core::{Context, OsEnv, Result};
//! use ptvsign_http_send_reqwest::ReqwestHttpSend;
//! use ptvsign_timetable::{Client, StaticCredentialProvider};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let ctx = Context::new()
//!         .with_http_send(ReqwestHttpSend::default())
//!         .with_env(OsEnv);
//!
//!     let client = Client::new(ctx, StaticCredentialProvider::new("your-dev-id", "your-api-key"));
//!
//!     // Raw endpoint access returns the service's JSON untouched.
//!     let departures = client.departures("train", 1104).await?;
//!     println!("{departures}");
//!
//!     // Or use the search filter for reduced stop/line records.
//!     let stops = client.find_stops("Hoddle St", Some("train")).await?;
//!     println!("{} matching stops", stops.len());
//!
//!     // Service timestamps are UTC; show them in network-local time.
//!     let local = ptvsign_timetable::melbourne_time("2024-01-01T12:00:00Z")?;
//!     println!("{local}");
//!     Ok(())
//! }
//! ```
//!
//! ## Credential Sources
//!
//! ```bash
//! export PTV_DEV_ID=your-dev-id
//! export PTV_API_KEY=your-api-key
//! ```
//!
//! [`DefaultCredentialProvider`] resolves static [`Config`] values first and
//! falls back to the environment; [`StaticCredentialProvider`] and
//! [`EnvCredentialProvider`] are available individually. Request a key by
//! emailing PTV with subject "PTV Timetable API - request for key".
//!
//! ## Signing contract
//!
//! The signature is `HMAC-SHA1(api_key, "/v3/<path>?<query>")`, hex
//! encoded upper-case, where `<query>` carries the caller's parameters in
//! their given order with `devid` appended last. The signed bytes must be
//! byte-identical to what goes on the wire; [`RequestSigner`] owns that
//! invariant.

mod constants;

mod config;
pub use config::Config;

mod credential;
pub use credential::Credential;

mod sign;
pub use sign::RequestSigner;

mod client;
pub use client::Client;

mod mode;
pub use mode::{route_type, Mode, MODE_NAMES};

mod search;
pub use search::EntityKind;

pub use ptvsign_core::time::melbourne_time;

mod provide_credential;
pub use provide_credential::*;
