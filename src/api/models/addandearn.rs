use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::common::echo_field;

#[derive(Debug, Default, Deserialize)]
pub struct OrderCreateRequest {
    #[serde(default, deserialize_with = "echo_field")]
    pub order_sn: Option<Value>,
}

#[derive(Debug, Serialize)]
pub struct PaymentLink {
    #[serde(rename = "type")]
    pub link_type: String,
    pub pay_url: String,
}

#[derive(Debug, Serialize)]
pub struct OrderAmount {
    pub money: i64,
}

#[derive(Debug, Serialize)]
pub struct DepositBalance {
    pub balance: i64,
}
