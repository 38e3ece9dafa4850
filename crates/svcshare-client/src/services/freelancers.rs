//! Freelancer contract signing.

use serde::{Deserialize, Serialize};
use svcshare_core::{fun_code, PaymentType, Result};

use super::{parse_required, require, require_id, string_or_number};
use crate::client::Client;

/// Silent contract signing (`6010`).
///
/// The platform matches contracts on merchant, name, ID card, mobile and
/// provider. The reply only confirms receipt; the outcome arrives by
/// notification or [`FreelancerService::sign_query`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SilentSignRequest {
    pub name: String,
    /// Bank card number, Alipay account or WeChat OpenID.
    pub card_no: String,
    pub id_card: String,
    pub mobile: String,
    pub payment_type: PaymentType,
    pub provider_id: i64,
    /// ID card front image, hex encoded.
    pub id_card_pic1: String,
    /// ID card back image, hex encoded.
    pub id_card_pic2: String,
    /// Returned unchanged in the reply and notification.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub other_param: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub notify_url: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tag_list: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SilentSignResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub other_param: Option<String>,
}

/// Signing status query (`6011`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignQueryRequest {
    pub name: String,
    pub id_card: String,
    pub mobile: String,
    pub provider_id: i64,
}

/// Contract state of a freelancer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "i64", into = "i64")]
pub enum SignState {
    #[default]
    Unsigned,
    Signed,
    NotFound,
    Pending,
    Failed,
    Cancelled,
    /// A state code this client does not know.
    Other(i64),
}

impl From<i64> for SignState {
    fn from(code: i64) -> Self {
        match code {
            0 => Self::Unsigned,
            1 => Self::Signed,
            2 => Self::NotFound,
            3 => Self::Pending,
            4 => Self::Failed,
            5 => Self::Cancelled,
            other => Self::Other(other),
        }
    }
}

impl From<SignState> for i64 {
    fn from(state: SignState) -> Self {
        match state {
            SignState::Unsigned => 0,
            SignState::Signed => 1,
            SignState::NotFound => 2,
            SignState::Pending => 3,
            SignState::Failed => 4,
            SignState::Cancelled => 5,
            SignState::Other(code) => code,
        }
    }
}

/// Signing outcome, from a query reply or a signing notification.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SignResult {
    pub name: String,
    pub card_no: String,
    pub id_card: String,
    pub mobile: String,
    pub state: SignState,
    pub other_param: String,
    #[serde(deserialize_with = "string_or_number")]
    pub provider_id: String,
    /// Failure reason, when signing failed.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub ret_msg: String,
}

pub struct FreelancerService<'a> {
    client: &'a Client,
}

impl<'a> FreelancerService<'a> {
    pub fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Start silent signing. An empty reply is valid when no `otherParam`
    /// was sent.
    pub async fn silent_sign(&self, req: &SilentSignRequest) -> Result<SilentSignResponse> {
        req.validate()?;
        let resp = self
            .client
            .execute_json::<_, SilentSignResponse>(fun_code::SILENT_SIGN, req)
            .await?;
        Ok(resp.unwrap_or_default())
    }

    /// Query the signing state of a freelancer.
    pub async fn sign_query(&self, req: &SignQueryRequest) -> Result<SignResult> {
        req.validate()?;
        let data = self.client.execute(fun_code::SIGN_QUERY, req).await?;
        parse_required(&data)
    }

    /// Verify, decrypt and parse a signing notification body.
    pub fn parse_sign_callback(&self, body: &[u8]) -> Result<SignResult> {
        let data = self.client.verify_and_decrypt_notification(body)?;
        parse_required(&data)
    }
}

impl SilentSignRequest {
    pub fn validate(&self) -> Result<()> {
        require(&self.name, "name")?;
        require(&self.card_no, "cardNo")?;
        require(&self.id_card, "idCard")?;
        require(&self.mobile, "mobile")?;
        require_id(self.provider_id, "providerId")?;
        require(&self.id_card_pic1, "idCardPic1")?;
        require(&self.id_card_pic2, "idCardPic2")
    }
}

impl SignQueryRequest {
    pub fn validate(&self) -> Result<()> {
        require(&self.name, "name")?;
        require(&self.id_card, "idCard")?;
        require(&self.mobile, "mobile")?;
        require_id(self.provider_id, "providerId")
    }
}
