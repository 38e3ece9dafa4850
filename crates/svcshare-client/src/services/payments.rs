//! Batch payments to freelancers and their status.
//!
//! A successful [`PaymentService::payment`] reply only means the platform
//! accepted the batch. Final order states arrive by notification
//! ([`PaymentService::parse_payment_callback`]) or by polling
//! [`PaymentService::payment_query`]. Use `orderNo` as the transaction key
//! when reconciling.

use serde::{Deserialize, Serialize};
use svcshare_core::defaults::{MAX_PAYMENT_AMT, MIN_PAYMENT_AMT};
use svcshare_core::{fun_code, Error, PaymentType, Result};
use tracing::info;

use super::{parse_required, require, require_id, string_or_number};
use crate::client::Client;

/// One payout in a batch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentItem {
    pub mer_order_id: String,
    /// Amount in fen.
    pub amt: i64,
    pub payee_name: String,
    /// Bank card number, Alipay account or WeChat OpenID.
    pub payee_acc: String,
    pub id_card: String,
    pub mobile: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub memo: String,
    pub payment_type: PaymentType,
    /// Per-order notification URL.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub notify_url: String,
}

/// Batch payment (`6001`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRequest {
    pub mer_batch_id: String,
    pub pay_items: Vec<PaymentItem>,
    /// Task code describing the reason for payment.
    pub task_id: i64,
    pub provider_id: i64,
}

/// Acceptance result for one order in a batch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PaymentExecuteResult {
    pub mer_order_id: String,
    #[serde(deserialize_with = "string_or_number")]
    pub order_no: String,
    pub amt: i64,
    pub fee: i64,
    pub res_code: String,
    pub res_msg: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PaymentResponse {
    pub success_num: i64,
    pub failure_num: i64,
    pub mer_batch_id: String,
    pub pay_result_list: Vec<PaymentExecuteResult>,
}

/// Order filter for a payment query. Both fields empty matches nothing;
/// omit the filter list entirely to return the whole batch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentQueryItem {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub mer_order_id: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub order_no: String,
}

/// Payment status query (`6002`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentQueryRequest {
    pub mer_batch_id: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub query_items: Vec<PaymentQueryItem>,
}

/// Order state as reported by the platform.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "i64", into = "i64")]
pub enum PaymentState {
    #[default]
    Processing,
    Success,
    Failed,
    PendingConfirm,
    Cancelled,
    /// A state code this client does not know.
    Other(i64),
}

impl PaymentState {
    /// No further transitions will be reported.
    pub fn is_final(&self) -> bool {
        matches!(self, Self::Success | Self::Failed | Self::Cancelled)
    }
}

impl From<i64> for PaymentState {
    fn from(code: i64) -> Self {
        match code {
            1 => Self::Processing,
            3 => Self::Success,
            4 => Self::Failed,
            6 => Self::PendingConfirm,
            7 => Self::Cancelled,
            other => Self::Other(other),
        }
    }
}

impl From<PaymentState> for i64 {
    fn from(state: PaymentState) -> Self {
        match state {
            PaymentState::Processing => 1,
            PaymentState::Success => 3,
            PaymentState::Failed => 4,
            PaymentState::PendingConfirm => 6,
            PaymentState::Cancelled => 7,
            PaymentState::Other(code) => code,
        }
    }
}

/// Status of one order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PaymentQueryResult {
    pub mer_order_id: String,
    #[serde(deserialize_with = "string_or_number")]
    pub order_no: String,
    pub state: PaymentState,
    pub amt: i64,
    pub fee: i64,
    pub user_fee: i64,
    pub tax: i64,
    pub user_due_amt: i64,
    pub res_code: String,
    pub res_msg: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PaymentBatchResult {
    pub mer_batch_id: String,
    pub query_items: Vec<PaymentQueryResult>,
}

/// Single-order payment notification.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PaymentCallback {
    pub mer_order_id: String,
    #[serde(deserialize_with = "string_or_number")]
    pub order_no: String,
    pub state: PaymentState,
    pub amt: i64,
    pub fee: i64,
    pub user_fee_ratio: f64,
    pub va_tax: i64,
    pub va_add_tax: i64,
    /// Platform-local time, `YYYY-MM-DD HH:MM:SS`.
    pub create_time: String,
    pub res_msg: String,
}

pub struct PaymentService<'a> {
    client: &'a Client,
}

impl<'a> PaymentService<'a> {
    pub fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Submit a payment batch.
    pub async fn payment(&self, req: &PaymentRequest) -> Result<PaymentResponse> {
        req.validate()?;
        let data = self.client.execute(fun_code::PAYMENT, req).await?;
        let resp: PaymentResponse = parse_required(&data)?;

        info!(
            mer_batch_id = %resp.mer_batch_id,
            success_num = resp.success_num,
            failure_num = resp.failure_num,
            "Payment batch accepted"
        );

        Ok(resp)
    }

    /// Query order states in a batch.
    pub async fn payment_query(&self, req: &PaymentQueryRequest) -> Result<PaymentBatchResult> {
        require(&req.mer_batch_id, "merBatchId")?;
        let data = self.client.execute(fun_code::PAYMENT_QUERY, req).await?;
        parse_required(&data)
    }

    /// Verify, decrypt and parse a payment notification body.
    pub fn parse_payment_callback(&self, body: &[u8]) -> Result<PaymentCallback> {
        let data = self.client.verify_and_decrypt_notification(body)?;
        parse_required(&data)
    }
}

impl PaymentRequest {
    pub fn validate(&self) -> Result<()> {
        require(&self.mer_batch_id, "merBatchId")?;
        if self.pay_items.is_empty() {
            return Err(Error::InvalidRequest("payItems cannot be empty".to_string()));
        }
        require_id(self.provider_id, "providerId")?;

        for (i, item) in self.pay_items.iter().enumerate() {
            item.validate()
                .map_err(|e| match e {
                    Error::InvalidRequest(msg) => {
                        Error::InvalidRequest(format!("payItems[{}].{}", i, msg))
                    }
                    other => other,
                })?;
        }

        Ok(())
    }
}

impl PaymentItem {
    pub fn validate(&self) -> Result<()> {
        require(&self.mer_order_id, "merOrderId")?;
        if !(MIN_PAYMENT_AMT..=MAX_PAYMENT_AMT).contains(&self.amt) {
            return Err(Error::InvalidRequest(format!(
                "amt must be between {} and {} fen",
                MIN_PAYMENT_AMT, MAX_PAYMENT_AMT
            )));
        }
        require(&self.payee_name, "payeeName")?;
        require(&self.payee_acc, "payeeAcc")?;
        require(&self.id_card, "idCard")?;
        require(&self.mobile, "mobile")
    }
}
