//! Platform-initiated notifications: verification, decryption and the
//! acknowledgement body returned to the platform.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use svcshare_core::{defaults, Error, RequestMessage, Result};
use svcshare_crypto::SymmetricCipher;

use crate::client::Client;

impl Client {
    /// Verify and decrypt a notification body pushed by the platform.
    ///
    /// The signature is mandatory here, unlike on call responses. Returns the
    /// plaintext JSON, or an empty string when the notification carries no
    /// data.
    pub fn verify_and_decrypt_notification(&self, body: &[u8]) -> Result<String> {
        let message = RequestMessage::from_notification(body).map_err(|e| {
            warn!(
                component = "notify",
                body_len = body.len(),
                error = %e,
                "Rejected malformed notification"
            );
            e
        })?;

        if !message.is_signed() {
            warn!(
                component = "notify",
                fun_code = %message.fun_code,
                merchant_id = %message.mer_id,
                "Rejected unsigned notification"
            );
            return Err(Error::MissingSignature);
        }

        self.verify_platform(&message.req_data, &message.sign, "notification")
            .map_err(|e| {
                warn!(
                    component = "notify",
                    fun_code = %message.fun_code,
                    error = %e,
                    "Notification signature did not verify"
                );
                e
            })?;

        if message.req_data.is_empty() {
            return Ok(String::new());
        }

        let plaintext = self
            .cipher()
            .decrypt(&message.req_data)
            .map_err(|e| Error::from_crypto("notification data", e))?;

        debug!(
            component = "notify",
            fun_code = %message.fun_code,
            payload_len = plaintext.len(),
            "Notification verified"
        );

        Ok(plaintext)
    }
}

/// Acknowledgement body a webhook handler returns to the platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationAck {
    pub res_code: String,
    pub res_msg: String,
}

impl NotificationAck {
    /// Notification accepted.
    pub fn success() -> Self {
        Self {
            res_code: defaults::SUCCESS_CODE.to_string(),
            res_msg: "Success".to_string(),
        }
    }

    /// Notification rejected; the platform will redeliver.
    pub fn failure() -> Self {
        Self {
            res_code: defaults::ACK_FAILURE_CODE.to_string(),
            res_msg: "Failed".to_string(),
        }
    }

    /// Ack matching the outcome of processing a notification.
    pub fn for_result<T>(result: &Result<T>) -> Self {
        match result {
            Ok(_) => Self::success(),
            Err(_) => Self::failure(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.res_code == defaults::SUCCESS_CODE
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}
