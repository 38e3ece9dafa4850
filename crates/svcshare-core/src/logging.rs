//! Structured logging field names for the ServiceShare client.
//!
//! All crates use these constants for structured `tracing` fields so that log
//! aggregation can query calls by request ID or operation code.
//!
//! ## Log Level Contract
//!
//! | Level | Usage |
//! |-------|-------|
//! | ERROR | Non-200 status or unparseable response; raw body included |
//! | WARN  | Business error codes, rejected notifications |
//! | INFO  | One line per completed call |
//! | DEBUG | Outbound and inbound envelopes (ciphertext only) |
//! | TRACE | Decrypted payload lengths |
//!
//! Plaintext business payloads and key material are never logged at INFO or
//! above.

// ─── Identity fields ───────────────────────────────────────────────────────

/// Envelope request ID (`reqId`).
pub const REQUEST_ID: &str = "request_id";

/// Operation code (`funCode`).
pub const FUN_CODE: &str = "fun_code";

/// Merchant ID (`merId`).
pub const MERCHANT_ID: &str = "merchant_id";

/// Component within the client.
/// Values: "transport", "notify", "cli"
pub const COMPONENT: &str = "component";

// ─── Outcome fields ────────────────────────────────────────────────────────

/// HTTP status code of the platform response.
pub const HTTP_STATUS: &str = "http_status";

/// Business status code (`resCode`).
pub const RES_CODE: &str = "res_code";

/// Business status message (`resMsg`).
pub const RES_MSG: &str = "res_msg";

/// Whether the response signature was checked.
pub const SIGNATURE_VERIFIED: &str = "signature_verified";

// ─── Measurement fields ────────────────────────────────────────────────────

/// Wall-clock duration in milliseconds.
pub const DURATION_MS: &str = "duration_ms";

/// Raw HTTP body length in bytes.
pub const BODY_LEN: &str = "body_len";

/// Decrypted payload length in bytes.
pub const PAYLOAD_LEN: &str = "payload_len";

// ─── Error fields ──────────────────────────────────────────────────────────

/// Error message.
pub const ERROR: &str = "error";

/// Raw response body attached to transport failures.
pub const RAW_BODY: &str = "raw_body";
