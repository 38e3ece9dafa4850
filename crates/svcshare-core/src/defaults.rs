//! Centralized default constants for the ServiceShare client.
//!
//! Configuration, the transport invoker and the CLI read these instead of
//! repeating literals. Values not marked otherwise are fixed by the platform
//! protocol and must not be changed independently of the remote side.

use std::time::Duration;

// =============================================================================
// ENDPOINT
// =============================================================================

/// Platform test gateway, used when `SS_API_URL` is unset.
pub const TEST_GATEWAY_URL: &str =
    "http://testgateway.serviceshare.com/testapi/clientapi/clientBusiness/common";

/// Protocol version sent in every envelope.
pub const PROTOCOL_VERSION: &str = "V1.0";

// =============================================================================
// TRANSPORT
// =============================================================================

/// Default per-call HTTP timeout in seconds.
pub const TIMEOUT_SECS: u64 = 60;

/// Default per-call HTTP timeout.
pub const TIMEOUT: Duration = Duration::from_secs(TIMEOUT_SECS);

/// `Content-Type` header for envelope POSTs.
pub const CONTENT_TYPE: &str = "application/json;charset=utf-8";

/// `Accept` header for envelope POSTs.
pub const ACCEPT: &str = "application/json";

// =============================================================================
// ENVELOPE
// =============================================================================

/// Business status code meaning success.
pub const SUCCESS_CODE: &str = "0000";

/// Status code returned to the platform when a notification is rejected.
pub const ACK_FAILURE_CODE: &str = "9999";

/// Upper bound (exclusive) of the random request-ID suffix; six digits.
pub const REQUEST_ID_SUFFIX_RANGE: u32 = 1_000_000;

// =============================================================================
// KEYS
// =============================================================================

/// AES-256 key length in bytes.
pub const AES_KEY_LEN: usize = 32;

/// Modulus size for merchant keys generated by `svcshare keygen`.
pub const RSA_KEY_BITS: usize = 2048;

// =============================================================================
// PAYMENTS
// =============================================================================

/// Smallest single payment accepted by the platform, in fen.
pub const MIN_PAYMENT_AMT: i64 = 10;

/// Largest single payment accepted by the platform, in fen.
pub const MAX_PAYMENT_AMT: i64 = 9_800_000;
