//! Typed operations over [`Client::execute`](crate::Client::execute).
//!
//! Each service validates its request before anything is encrypted or sent,
//! and parses the decrypted reply into typed structs.

pub mod accounts;
pub mod freelancers;
pub mod payments;

pub use accounts::{AccountService, BalanceQueryRequest, BalanceQueryResponse};
pub use freelancers::{
    FreelancerService, SignQueryRequest, SignResult, SignState, SilentSignRequest,
    SilentSignResponse,
};
pub use payments::{
    PaymentBatchResult, PaymentCallback, PaymentExecuteResult, PaymentItem, PaymentQueryItem,
    PaymentQueryRequest, PaymentQueryResult, PaymentRequest, PaymentResponse, PaymentService,
    PaymentState,
};

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use svcshare_core::{Error, Result};

use crate::client::Client;

impl Client {
    pub fn accounts(&self) -> AccountService<'_> {
        AccountService::new(self)
    }

    pub fn payments(&self) -> PaymentService<'_> {
        PaymentService::new(self)
    }

    pub fn freelancers(&self) -> FreelancerService<'_> {
        FreelancerService::new(self)
    }
}

fn require(value: &str, field: &str) -> Result<()> {
    if value.is_empty() {
        return Err(Error::InvalidRequest(format!("{} is required", field)));
    }
    Ok(())
}

fn require_id(value: i64, field: &str) -> Result<()> {
    if value == 0 {
        return Err(Error::InvalidRequest(format!("{} is required", field)));
    }
    Ok(())
}

/// Parse a decrypted payload that must be present.
fn parse_required<R: DeserializeOwned>(data: &str) -> Result<R> {
    if data.is_empty() {
        return Err(Error::EmptyResponse);
    }
    serde_json::from_str(data)
        .map_err(|e| Error::Serialization(format!("failed to parse response: {}", e)))
}

/// Identifiers the platform sends as either JSON strings or numbers.
fn string_or_number<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Id {
        Text(String),
        Int(i64),
        Uint(u64),
    }

    Ok(match Option::<Id>::deserialize(deserializer)? {
        Some(Id::Text(s)) => s,
        Some(Id::Int(n)) => n.to_string(),
        Some(Id::Uint(n)) => n.to_string(),
        None => String::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Holder {
        #[serde(default, deserialize_with = "string_or_number")]
        id: String,
    }

    #[test]
    fn test_string_or_number() {
        let cases = [
            (r#"{"id":"SS-1"}"#, "SS-1"),
            (r#"{"id":2005564279308279809}"#, "2005564279308279809"),
            (r#"{"id":18446744073709551615}"#, "18446744073709551615"),
            (r#"{"id":null}"#, ""),
            (r#"{}"#, ""),
        ];
        for (json, expected) in cases {
            let holder: Holder = serde_json::from_str(json).unwrap();
            assert_eq!(holder.id, expected, "{}", json);
        }
    }

    #[test]
    fn test_require() {
        assert!(require("x", "name").is_ok());
        assert_eq!(
            require("", "name").unwrap_err(),
            Error::InvalidRequest("name is required".into())
        );
        assert!(require_id(7, "providerId").is_ok());
        assert!(matches!(require_id(0, "providerId"), Err(Error::InvalidRequest(_))));
    }

    #[test]
    fn test_parse_required() {
        assert_eq!(parse_required::<serde_json::Value>(""), Err(Error::EmptyResponse));
        assert!(matches!(
            parse_required::<serde_json::Value>("{"),
            Err(Error::Serialization(_))
        ));
        let value: serde_json::Value = parse_required(r#"{"a":1}"#).unwrap();
        assert_eq!(value["a"], 1);
    }
}
