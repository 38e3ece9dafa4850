//! Wire envelopes exchanged with the platform.
//!
//! Every call is a [`RequestMessage`] POSTed as JSON and answered with a
//! [`ResponseMessage`]. Platform-initiated notifications reuse the request
//! shape. The business payload travels encrypted in `reqData`/`resData`;
//! `sign` covers that ciphertext string.
//!
//! Missing or `null` string fields decode as empty strings; the platform
//! omits `resData` and `sign` when it has nothing to send.

use serde::{Deserialize, Deserializer, Serialize};

use crate::codes;
use crate::error::{ApiError, Error, Result};

/// Outbound call envelope, also the shape of inbound notifications.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestMessage {
    #[serde(default, deserialize_with = "nullable_string")]
    pub req_id: String,
    #[serde(default, deserialize_with = "nullable_string")]
    pub fun_code: String,
    #[serde(default, deserialize_with = "nullable_string")]
    pub mer_id: String,
    #[serde(default, deserialize_with = "nullable_string")]
    pub version: String,
    /// Base64 AES ciphertext of the business JSON.
    #[serde(default, deserialize_with = "nullable_string")]
    pub req_data: String,
    #[serde(default, deserialize_with = "nullable_string")]
    pub sign: String,
    /// Notifications observed in the field carry the payload as `resData`.
    #[serde(
        default,
        rename = "resData",
        skip_serializing,
        deserialize_with = "nullable_string"
    )]
    res_data: String,
}

impl RequestMessage {
    /// Unsigned envelope around an already encrypted payload.
    pub fn new(
        req_id: impl Into<String>,
        fun_code: impl Into<String>,
        mer_id: impl Into<String>,
        version: impl Into<String>,
        req_data: impl Into<String>,
    ) -> Self {
        Self {
            req_id: req_id.into(),
            fun_code: fun_code.into(),
            mer_id: mer_id.into(),
            version: version.into(),
            req_data: req_data.into(),
            sign: String::new(),
            res_data: String::new(),
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Parse an inbound notification body. `reqData` wins; `resData` is used
    /// only when `reqData` is absent or empty.
    pub fn from_notification(body: &[u8]) -> Result<Self> {
        let mut message: Self =
            serde_json::from_slice(body).map_err(|e| Error::InvalidNotification(e.to_string()))?;

        let res_data = std::mem::take(&mut message.res_data);
        if message.req_data.is_empty() {
            message.req_data = res_data;
        }

        Ok(message)
    }

    pub fn is_signed(&self) -> bool {
        !self.sign.is_empty()
    }
}

/// Platform reply envelope.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseMessage {
    #[serde(default, deserialize_with = "nullable_string")]
    pub req_id: String,
    #[serde(default, deserialize_with = "nullable_string")]
    pub fun_code: String,
    #[serde(default, deserialize_with = "nullable_string")]
    pub mer_id: String,
    #[serde(default, deserialize_with = "nullable_string")]
    pub version: String,
    #[serde(default, deserialize_with = "nullable_string")]
    pub res_data: String,
    #[serde(default, deserialize_with = "nullable_string")]
    pub res_code: String,
    #[serde(default, deserialize_with = "nullable_string")]
    pub res_msg: String,
    #[serde(default, deserialize_with = "nullable_string")]
    pub sign: String,
}

impl ResponseMessage {
    /// Parse a response body.
    pub fn parse(body: &[u8]) -> Result<Self> {
        serde_json::from_slice(body).map_err(|e| Error::InvalidResponse(e.to_string()))
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// `resCode` is the success sentinel.
    pub fn is_success(&self) -> bool {
        codes::is_success(&self.res_code)
    }

    /// The business error carried by a non-success reply.
    pub fn api_error(&self) -> Option<ApiError> {
        if self.is_success() {
            None
        } else {
            Some(ApiError::new(&self.res_code, &self.res_msg))
        }
    }

    /// Pass a successful reply through; otherwise return its business error.
    pub fn into_result(self) -> Result<Self> {
        match self.api_error() {
            Some(e) => Err(Error::Api(e)),
            None => Ok(self),
        }
    }

    pub fn has_payload(&self) -> bool {
        !self.res_data.is_empty()
    }

    pub fn is_signed(&self) -> bool {
        !self.sign.is_empty()
    }
}

/// Decode a JSON string field, treating `null` as empty.
fn nullable_string<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
