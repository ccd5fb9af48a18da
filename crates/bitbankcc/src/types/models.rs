/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust structs with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::enums::{MakerTaker, OrderStatus, OrderType, PositionSide, Side};

// ### Public market data

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ticker {
    /// Only present in `/tickers` entries
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pair: Option<String>,
    #[serde(with = "rust_decimal::serde::str_option", default)]
    pub sell: Option<Decimal>,
    #[serde(with = "rust_decimal::serde::str_option", default)]
    pub buy: Option<Decimal>,
    #[serde(with = "rust_decimal::serde::str_option", default)]
    pub open: Option<Decimal>,
    #[serde(with = "rust_decimal::serde::str_option", default)]
    pub high: Option<Decimal>,
    #[serde(with = "rust_decimal::serde::str_option", default)]
    pub low: Option<Decimal>,
    #[serde(with = "rust_decimal::serde::str_option", default)]
    pub last: Option<Decimal>,
    #[serde(
        default,
        deserialize_with = "serde_helpers::deserialize_decimal_or_zero",
        serialize_with = "serde_helpers::serialize_decimal"
    )]
    pub vol: Decimal,
    pub timestamp: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DepthLevel(
    #[serde(with = "rust_decimal::serde::str")] pub Decimal,
    #[serde(with = "rust_decimal::serde::str")] pub Decimal,
);

impl DepthLevel {
    pub fn price(&self) -> Decimal {
        self.0
    }

    pub fn amount(&self) -> Decimal {
        self.1
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Depth {
    pub asks: Vec<DepthLevel>,
    pub bids: Vec<DepthLevel>,
    pub timestamp: i64,
    #[serde(
        rename = "sequenceId",
        default,
        deserialize_with = "serde_helpers::deserialize_opt_string_or_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub sequence_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub transaction_id: i64,
    pub side: Side,
    #[serde(with = "rust_decimal::serde::str")]
    pub price: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub amount: Decimal,
    pub executed_at: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transactions {
    pub transactions: Vec<Transaction>,
}

/// `[open, high, low, close, volume, timestamp]`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ohlcv(
    #[serde(with = "rust_decimal::serde::str")] pub Decimal,
    #[serde(with = "rust_decimal::serde::str")] pub Decimal,
    #[serde(with = "rust_decimal::serde::str")] pub Decimal,
    #[serde(with = "rust_decimal::serde::str")] pub Decimal,
    #[serde(with = "rust_decimal::serde::str")] pub Decimal,
    pub i64,
);

impl Ohlcv {
    pub fn open(&self) -> Decimal {
        self.0
    }

    pub fn high(&self) -> Decimal {
        self.1
    }

    pub fn low(&self) -> Decimal {
        self.2
    }

    pub fn close(&self) -> Decimal {
        self.3
    }

    pub fn volume(&self) -> Decimal {
        self.4
    }

    pub fn timestamp(&self) -> i64 {
        self.5
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandlestickSeries {
    #[serde(rename = "type")]
    pub candle_type: String,
    pub ohlcv: Vec<Ohlcv>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candlestick {
    pub candlestick: Vec<CandlestickSeries>,
    #[serde(default)]
    pub timestamp: Option<i64>,
}

// ### Account

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Asset {
    pub asset: String,
    #[serde(default)]
    pub amount_precision: u32,
    #[serde(
        default,
        deserialize_with = "serde_helpers::deserialize_decimal_or_zero",
        serialize_with = "serde_helpers::serialize_decimal"
    )]
    pub onhand_amount: Decimal,
    #[serde(
        default,
        deserialize_with = "serde_helpers::deserialize_decimal_or_zero",
        serialize_with = "serde_helpers::serialize_decimal"
    )]
    pub locked_amount: Decimal,
    #[serde(
        default,
        deserialize_with = "serde_helpers::deserialize_decimal_or_zero",
        serialize_with = "serde_helpers::serialize_decimal"
    )]
    pub free_amount: Decimal,
    #[serde(
        default,
        deserialize_with = "serde_helpers::deserialize_decimal_or_zero",
        serialize_with = "serde_helpers::serialize_decimal"
    )]
    pub withdrawing_amount: Decimal,
    #[serde(default)]
    pub stop_deposit: bool,
    #[serde(default)]
    pub stop_withdrawal: bool,
    /// Flat string for some assets, `{min, max}` for others
    #[serde(default)]
    pub withdrawal_fee: Value,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assets {
    pub assets: Vec<Asset>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub order_id: i64,
    pub pair: String,
    pub side: Side,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position_side: Option<PositionSide>,
    #[serde(rename = "type")]
    pub order_type: OrderType,
    #[serde(with = "rust_decimal::serde::str_option", default)]
    pub start_amount: Option<Decimal>,
    #[serde(with = "rust_decimal::serde::str_option", default)]
    pub remaining_amount: Option<Decimal>,
    #[serde(
        default,
        deserialize_with = "serde_helpers::deserialize_decimal_or_zero",
        serialize_with = "serde_helpers::serialize_decimal"
    )]
    pub executed_amount: Decimal,
    #[serde(with = "rust_decimal::serde::str_option", default)]
    pub price: Option<Decimal>,
    #[serde(default)]
    pub post_only: Option<bool>,
    #[serde(default)]
    pub user_cancelable: Option<bool>,
    #[serde(
        default,
        deserialize_with = "serde_helpers::deserialize_decimal_or_zero",
        serialize_with = "serde_helpers::serialize_decimal"
    )]
    pub average_price: Decimal,
    pub ordered_at: i64,
    #[serde(default)]
    pub expire_at: Option<i64>,
    #[serde(default)]
    pub triggered_at: Option<i64>,
    #[serde(default)]
    pub canceled_at: Option<i64>,
    #[serde(default)]
    pub executed_at: Option<i64>,
    #[serde(with = "rust_decimal::serde::str_option", default)]
    pub trigger_price: Option<Decimal>,
    pub status: OrderStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Orders {
    pub orders: Vec<Order>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trade {
    pub trade_id: i64,
    pub pair: String,
    pub order_id: i64,
    pub side: Side,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position_side: Option<PositionSide>,
    #[serde(rename = "type")]
    pub order_type: OrderType,
    #[serde(with = "rust_decimal::serde::str")]
    pub amount: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub price: Decimal,
    pub maker_taker: MakerTaker,
    #[serde(
        default,
        deserialize_with = "serde_helpers::deserialize_decimal_or_zero",
        serialize_with = "serde_helpers::serialize_decimal"
    )]
    pub fee_amount_base: Decimal,
    #[serde(
        default,
        deserialize_with = "serde_helpers::deserialize_decimal_or_zero",
        serialize_with = "serde_helpers::serialize_decimal"
    )]
    pub fee_amount_quote: Decimal,
    #[serde(with = "rust_decimal::serde::str_option", default)]
    pub fee_occurred_amount_quote: Option<Decimal>,
    #[serde(with = "rust_decimal::serde::str_option", default)]
    pub profit_loss: Option<Decimal>,
    #[serde(with = "rust_decimal::serde::str_option", default)]
    pub interest: Option<Decimal>,
    pub executed_at: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trades {
    pub trades: Vec<Trade>,
}

/// Margin account snapshot.
///
/// Only `positions` is typed; notices, payables and loss-cut thresholds vary
/// by account state and are passed through as JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarginPositions {
    #[serde(default)]
    pub notice: Value,
    #[serde(default)]
    pub payables: Value,
    #[serde(default)]
    pub positions: Vec<MarginPosition>,
    #[serde(default)]
    pub losscut_threshold: Value,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarginPosition {
    pub pair: String,
    pub position_side: PositionSide,
    #[serde(
        default,
        deserialize_with = "serde_helpers::deserialize_decimal_or_zero",
        serialize_with = "serde_helpers::serialize_decimal"
    )]
    pub open_amount: Decimal,
    #[serde(
        default,
        deserialize_with = "serde_helpers::deserialize_decimal_or_zero",
        serialize_with = "serde_helpers::serialize_decimal"
    )]
    pub product: Decimal,
    #[serde(
        default,
        deserialize_with = "serde_helpers::deserialize_decimal_or_zero",
        serialize_with = "serde_helpers::serialize_decimal"
    )]
    pub average_price: Decimal,
    #[serde(
        default,
        deserialize_with = "serde_helpers::deserialize_decimal_or_zero",
        serialize_with = "serde_helpers::serialize_decimal"
    )]
    pub unrealized_fee_amount: Decimal,
    #[serde(
        default,
        deserialize_with = "serde_helpers::deserialize_decimal_or_zero",
        serialize_with = "serde_helpers::serialize_decimal"
    )]
    pub unrealized_interest_amount: Decimal,
}

// ### Deposits and withdrawals

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Deposit {
    pub uuid: String,
    pub asset: String,
    #[serde(default)]
    pub network: Option<String>,
    #[serde(with = "rust_decimal::serde::str")]
    pub amount: Decimal,
    #[serde(default)]
    pub txid: Option<String>,
    pub status: String,
    pub found_at: i64,
    #[serde(default)]
    pub confirmed_at: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Deposits {
    pub deposits: Vec<Deposit>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Withdrawal {
    pub uuid: String,
    pub asset: String,
    #[serde(default)]
    pub account_uuid: Option<String>,
    #[serde(with = "rust_decimal::serde::str")]
    pub amount: Decimal,
    #[serde(with = "rust_decimal::serde::str_option", default)]
    pub fee: Option<Decimal>,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub network: Option<String>,
    #[serde(default)]
    pub txid: Option<String>,
    /// Number or string depending on the asset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination_tag: Option<Value>,
    pub status: String,
    pub requested_at: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Withdrawals {
    pub withdrawals: Vec<Withdrawal>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WithdrawalAccount {
    pub uuid: String,
    pub label: String,
    pub address: String,
    #[serde(default)]
    pub network: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WithdrawalAccounts {
    pub accounts: Vec<WithdrawalAccount>,
}

// ### Misc

/// Channel and token for the private stream
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubscribeStatus {
    pub pubnub_channel: String,
    pub pubnub_token: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PairStatus {
    pub pair: String,
    /// `NORMAL`, `BUSY`, `VERY_BUSY` or `HALT`
    pub status: String,
    #[serde(
        default,
        deserialize_with = "serde_helpers::deserialize_decimal_or_zero",
        serialize_with = "serde_helpers::serialize_decimal"
    )]
    pub min_amount: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExchangeStatus {
    pub statuses: Vec<PairStatus>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PairInfo {
    pub name: String,
    pub base_asset: String,
    pub quote_asset: String,
    #[serde(with = "rust_decimal::serde::str_option", default)]
    pub unit_amount: Option<Decimal>,
    #[serde(with = "rust_decimal::serde::str_option", default)]
    pub limit_max_amount: Option<Decimal>,
    #[serde(with = "rust_decimal::serde::str_option", default)]
    pub market_max_amount: Option<Decimal>,
    #[serde(default)]
    pub price_digits: u32,
    #[serde(default)]
    pub amount_digits: u32,
    #[serde(default)]
    pub is_enabled: bool,
    #[serde(default)]
    pub stop_order: bool,
    #[serde(default)]
    pub stop_order_and_cancel: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pairs {
    pub pairs: Vec<PairInfo>,
}

mod serde_helpers {
    use super::Decimal;
    use serde::{Deserialize, Deserializer, Serializer};
    use serde_json::Value;
    use std::str::FromStr;

    pub fn deserialize_decimal_or_zero<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        if value.is_null() {
            return Ok(Decimal::ZERO);
        }

        if let Some(raw) = value.as_str() {
            if raw.trim().is_empty() {
                return Ok(Decimal::ZERO);
            }
            return Decimal::from_str(raw).map_err(serde::de::Error::custom);
        }

        if value.is_number() {
            return Decimal::from_str(&value.to_string()).map_err(serde::de::Error::custom);
        }

        Err(serde::de::Error::custom("invalid decimal value"))
    }

    pub fn serialize_decimal<S>(value: &Decimal, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&value.to_string())
    }

    pub fn deserialize_opt_string_or_number<'de, D>(
        deserializer: D,
    ) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Value::deserialize(deserializer)? {
            Value::Null => Ok(None),
            Value::String(s) => Ok(Some(s)),
            Value::Number(n) => Ok(Some(n.to_string())),
            _ => Err(serde::de::Error::custom("expected string or number")),
        }
    }
}
