//! Merchant account operations.

use serde::{Deserialize, Serialize};
use svcshare_core::{fun_code, PaymentType, Result};

use super::{parse_required, require_id};
use crate::client::Client;

/// Balance query (`6003`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BalanceQueryRequest {
    pub provider_id: i64,
    /// Account channel; all channels when omitted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_type: Option<PaymentType>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BalanceQueryResponse {
    /// Available balance in fen.
    #[serde(default)]
    pub balance: i64,
    #[serde(default)]
    pub provider_id: i64,
}

pub struct AccountService<'a> {
    client: &'a Client,
}

impl<'a> AccountService<'a> {
    pub fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Query the merchant balance held with a service provider.
    pub async fn query_balance(&self, req: &BalanceQueryRequest) -> Result<BalanceQueryResponse> {
        req.validate()?;
        let data = self.client.execute(fun_code::BALANCE_QUERY, req).await?;
        parse_required(&data)
    }
}

impl BalanceQueryRequest {
    pub fn validate(&self) -> Result<()> {
        require_id(self.provider_id, "providerId")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use svcshare_core::Error;

    #[test]
    fn test_request_wire_format() {
        let req = BalanceQueryRequest {
            provider_id: 123,
            payment_type: None,
        };
        assert_eq!(serde_json::to_string(&req).unwrap(), r#"{"providerId":123}"#);

        let req = BalanceQueryRequest {
            provider_id: 123,
            payment_type: Some(PaymentType::Alipay),
        };
        assert_eq!(
            serde_json::to_string(&req).unwrap(),
            r#"{"providerId":123,"paymentType":"1"}"#
        );
    }

    #[test]
    fn test_validate_requires_provider() {
        let req = BalanceQueryRequest::default();
        assert_eq!(
            req.validate(),
            Err(Error::InvalidRequest("providerId is required".into()))
        );
    }

    #[test]
    fn test_response_parse() {
        let resp: BalanceQueryResponse =
            serde_json::from_str(r#"{"balance":1234567,"providerId":42}"#).unwrap();
        assert_eq!(resp.balance, 1_234_567);
        assert_eq!(resp.provider_id, 42);
    }
}
