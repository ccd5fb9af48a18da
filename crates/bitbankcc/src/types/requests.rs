/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed request bodies and query option sets
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::enums::{OrderType, PositionSide, Side, SortOrder};
use crate::http::QueryParams;

/// Body of `POST /user/spot/order`.
///
/// Optional fields are omitted from the body unless set; `post_only:
/// Some(false)` is sent as an explicit `false`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewOrder {
    pub pair: String,
    #[serde(with = "rust_decimal::serde::str")]
    pub amount: Decimal,
    #[serde(with = "rust_decimal::serde::str_option")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<Decimal>,
    pub side: Side,
    #[serde(rename = "type")]
    pub order_type: OrderType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub post_only: Option<bool>,
    #[serde(with = "rust_decimal::serde::str_option")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trigger_price: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position_side: Option<PositionSide>,
}

impl NewOrder {
    pub fn limit(pair: impl Into<String>, side: Side, amount: Decimal, price: Decimal) -> Self {
        Self {
            pair: pair.into(),
            amount,
            price: Some(price),
            side,
            order_type: OrderType::Limit,
            post_only: None,
            trigger_price: None,
            position_side: None,
        }
    }

    pub fn market(pair: impl Into<String>, side: Side, amount: Decimal) -> Self {
        Self {
            pair: pair.into(),
            amount,
            price: None,
            side,
            order_type: OrderType::Market,
            post_only: None,
            trigger_price: None,
            position_side: None,
        }
    }

    pub fn with_order_type(mut self, order_type: OrderType) -> Self {
        self.order_type = order_type;
        self
    }

    pub fn with_post_only(mut self, post_only: bool) -> Self {
        self.post_only = Some(post_only);
        self
    }

    pub fn with_trigger_price(mut self, trigger_price: Decimal) -> Self {
        self.trigger_price = Some(trigger_price);
        self
    }

    /// Marks the order as a margin order for the given side
    pub fn with_position_side(mut self, position_side: PositionSide) -> Self {
        self.position_side = Some(position_side);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CancelOrderRequest {
    pub pair: String,
    pub order_id: i64,
}

/// Body shared by `cancel_orders` and `orders_info`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderIdsRequest {
    pub pair: String,
    pub order_ids: Vec<i64>,
}

/// Body of `POST /user/request_withdrawal`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WithdrawalRequest {
    pub asset: String,
    /// Registered withdrawal account uuid
    pub uuid: String,
    #[serde(with = "rust_decimal::serde::str")]
    pub amount: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub otp_token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sms_token: Option<String>,
}

impl WithdrawalRequest {
    pub fn new(asset: impl Into<String>, uuid: impl Into<String>, amount: Decimal) -> Self {
        Self {
            asset: asset.into(),
            uuid: uuid.into(),
            amount,
            otp_token: None,
            sms_token: None,
        }
    }

    pub fn with_otp_token(mut self, token: impl Into<String>) -> Self {
        self.otp_token = Some(token.into());
        self
    }

    pub fn with_sms_token(mut self, token: impl Into<String>) -> Self {
        self.sms_token = Some(token.into());
        self
    }
}

/// Optional filters for `GET /user/spot/active_orders`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActiveOrdersQuery {
    pub count: Option<u32>,
    pub from_id: Option<i64>,
    pub end_id: Option<i64>,
    pub since: Option<i64>,
    pub end: Option<i64>,
}

impl ActiveOrdersQuery {
    pub(crate) fn append_to(&self, params: &mut QueryParams) {
        params
            .push_opt("count", self.count)
            .push_opt("from_id", self.from_id)
            .push_opt("end_id", self.end_id)
            .push_opt("since", self.since)
            .push_opt("end", self.end);
    }
}

/// Optional filters for `GET /user/spot/trade_history`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TradeHistoryQuery {
    pub count: Option<u32>,
    pub order_id: Option<i64>,
    pub since: Option<i64>,
    pub end: Option<i64>,
    pub order: Option<SortOrder>,
}

impl TradeHistoryQuery {
    pub(crate) fn append_to(&self, params: &mut QueryParams) {
        params
            .push_opt("count", self.count)
            .push_opt("order_id", self.order_id)
            .push_opt("since", self.since)
            .push_opt("end", self.end)
            .push_opt("order", self.order);
    }
}

/// Optional filters for deposit and withdrawal history
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HistoryQuery {
    pub count: Option<u32>,
    pub since: Option<i64>,
    pub end: Option<i64>,
}

impl HistoryQuery {
    pub(crate) fn append_to(&self, params: &mut QueryParams) {
        params
            .push_opt("count", self.count)
            .push_opt("since", self.since)
            .push_opt("end", self.end);
    }
}
