//! # svcshare-client
//!
//! Async client for the ServiceShare freelancer payment gateway.
//!
//! Every call is a single HTTP POST of a signed, partially encrypted JSON
//! envelope. The client seals the business payload, sends it, checks the
//! business status code, verifies the platform's signature and returns the
//! decrypted reply.
//!
//! ## Call Flow
//!
//! ```text
//! payload ──► JSON ──► AES-256-ECB ──► reqData ──► RSA-SHA1 sign ──► POST
//!                                                                    │
//! plaintext ◄── AES decrypt ◄── verify sign ◄── resCode == "0000" ◄──┘
//! ```
//!
//! ## Examples
//!
//! ```rust,no_run
//! use svcshare_client::services::BalanceQueryRequest;
//! use svcshare_client::Client;
//!
//! # async fn run() -> svcshare_core::Result<()> {
//! let client = Client::from_env()?;
//! let balance = client
//!     .accounts()
//!     .query_balance(&BalanceQueryRequest {
//!         provider_id: 42,
//!         payment_type: None,
//!     })
//!     .await?;
//! println!("balance: {} fen", balance.balance);
//! # Ok(())
//! # }
//! ```
//!
//! Webhook handlers pass the raw request body to
//! [`Client::verify_and_decrypt_notification`] and answer with a
//! [`NotificationAck`].

pub mod client;
pub mod notify;
pub mod services;

// Re-export commonly used types
pub use client::Client;
pub use notify::NotificationAck;
pub use svcshare_core::{ApiError, Config, Error, Result};
