//! Platform operation codes, payment channels and business status codes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::defaults::SUCCESS_CODE;

/// Operation codes (`funCode`) understood by the platform.
pub mod fun_code {
    /// Batch payment to freelancers.
    pub const PAYMENT: &str = "6001";
    /// Payment status query for a merchant batch.
    pub const PAYMENT_QUERY: &str = "6002";
    /// Merchant account balance query.
    pub const BALANCE_QUERY: &str = "6003";
    /// Silent contract signing for a freelancer.
    pub const SILENT_SIGN: &str = "6010";
    /// Contract signing status query.
    pub const SIGN_QUERY: &str = "6011";
}

/// Payout channel. Serialized as the platform's single-digit strings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaymentType {
    #[default]
    #[serde(rename = "0")]
    BankCard,
    #[serde(rename = "1")]
    Alipay,
    #[serde(rename = "2")]
    WeChat,
}

impl PaymentType {
    /// Wire value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BankCard => "0",
            Self::Alipay => "1",
            Self::WeChat => "2",
        }
    }
}

impl fmt::Display for PaymentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PaymentType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "0" | "bank" | "bankcard" | "bank_card" => Ok(Self::BankCard),
            "1" | "alipay" => Ok(Self::Alipay),
            "2" | "wechat" => Ok(Self::WeChat),
            other => Err(format!(
                "unknown payment type '{}' (expected 0/bank, 1/alipay or 2/wechat)",
                other
            )),
        }
    }
}

/// Whether `code` is the success sentinel.
pub fn is_success(code: &str) -> bool {
    code == SUCCESS_CODE
}

/// Codes whose outcome is undetermined on the platform side. The operation
/// may or may not have taken effect; query before resubmitting.
pub const OUTCOME_UNKNOWN_CODES: &[&str] = &["6000", "6042", "6102"];

/// Documented business status codes.
static BUSINESS_CODES: &[(&str, &str)] = &[
    ("0000", "success"),
    ("6000", "request outcome unknown, verify before retrying"),
    ("6001", "parameter error"),
    ("6002", "invalid transaction amount"),
    ("6003", "customer not found"),
    ("6004", "customer not activated"),
    ("6005", "customer key is empty"),
    ("6006", "request signature verification failed"),
    ("6007", "request data decryption failed"),
    ("6008", "merchant is blacklisted"),
    ("6009", "no customer risk-control profile"),
    ("6010", "customer account missing or inactive"),
    ("6011", "request address not whitelisted"),
    ("6012", "duplicate merchant batch ID"),
    ("6013", "payment amount exceeds limit"),
    ("6014", "failed to persist request"),
    ("6015", "customer fee rate missing or fee calculation failed"),
    ("6016", "user already signed"),
    ("6017", "customer payout channel not configured"),
    ("6018", "customer lacks permission for this operation"),
    ("6019", "insufficient merchant balance"),
    ("6020", "order not found"),
    ("6021", "customer not contracted with this service company"),
    ("6022", "signing identity authentication failed"),
    ("6023", "reconciliation file not found"),
    ("6024", "name is required"),
    ("6025", "ID card number is required"),
    ("6026", "service provider ID is required"),
    ("6027", "user not signed with this service provider"),
    ("6028", "platform service provider not found"),
    ("6029", "platform service provider unavailable"),
    ("6030", "customer ID is required"),
    ("6031", "merchant batch ID is required"),
    ("6032", "merchant batch ID not found"),
    ("6033", "merchant order ID or order number not found"),
    ("6034", "batch count does not match items"),
    ("6035", "batch total does not match items"),
    ("6036", "a batch may use only one service provider"),
    ("6037", "user signing in progress"),
    ("6038", "customer does not support API signing"),
    ("6039", "service provider requires ID card images"),
    ("6040", "service provider requires a task code"),
    ("6041", "task not found"),
    ("6042", "too many requests, retry later"),
    ("6043", "three-factor identity check failed"),
    ("6044", "customer not contracted with this service provider"),
    ("6045", "no invoiceable category found"),
    ("6046", "no invoice profile for this service provider"),
    ("6047", "order awaiting risk review"),
    ("6048", "risk review rejected"),
    ("6049", "no matching records"),
    ("6050", "invalid task state"),
    ("6051", "duplicate merchant order ID"),
    ("6052", "customer does not support the API"),
    ("6053", "customer fee rate not configured"),
    ("6054", "duplicate recharge order ID"),
    ("6055", "no rechargeable amount found"),
    ("6056", "recharge account does not match platform"),
    ("6057", "recharge amount exceeds rechargeable amount"),
    ("6058", "a batch may use only one payout channel"),
    ("6059", "management fee deduction mode differs from service provider"),
    ("6060", "management fee rate mode differs from service provider"),
    ("6062", "signing requirements not configured"),
    ("6063", "service provider setup incomplete"),
    ("6064", "enterprise does not support the API"),
    ("6065", "channel does not support balance query or split"),
    ("6067", "merchant public key malformed"),
    ("6093", "one-click payout not enabled"),
    ("6100", "payee must confirm receipt manually"),
    ("6101", "signing or task verification failed"),
    ("6102", "request timed out, retry"),
    ("6103", "only orders pending confirmation can be cancelled"),
    ("6104", "settlement not available at this time"),
    ("6105", "signing not available at this time"),
    ("6220", "no electronic receipt available"),
];

/// Documented meaning of a business status code, if known.
pub fn describe(code: &str) -> Option<&'static str> {
    BUSINESS_CODES
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, description)| *description)
}
