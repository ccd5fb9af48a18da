/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust enums with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Buy,
    Sell,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderType {
    Limit,
    Market,
    Stop,
    StopLimit,
    TakeProfit,
    StopLoss,
}

/// Margin position direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PositionSide {
    Long,
    Short,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    Inactive,
    Unfilled,
    PartiallyFilled,
    FullyFilled,
    CanceledUnfilled,
    CanceledPartiallyFilled,
    #[serde(other)]
    Unknown,
}

impl OrderStatus {
    /// Whether the order can still trade
    pub fn is_active(self) -> bool {
        matches!(
            self,
            OrderStatus::Inactive | OrderStatus::Unfilled | OrderStatus::PartiallyFilled
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MakerTaker {
    Maker,
    Taker,
}

/// Sort direction for history queries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    Desc,
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        })
    }
}

/// Candlestick interval, as it appears in `/{pair}/candlestick/{type}/...`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CandleType {
    #[serde(rename = "1min")]
    OneMin,
    #[serde(rename = "5min")]
    FiveMin,
    #[serde(rename = "15min")]
    FifteenMin,
    #[serde(rename = "30min")]
    ThirtyMin,
    #[serde(rename = "1hour")]
    OneHour,
    #[serde(rename = "4hour")]
    FourHour,
    #[serde(rename = "8hour")]
    EightHour,
    #[serde(rename = "12hour")]
    TwelveHour,
    #[serde(rename = "1day")]
    OneDay,
    #[serde(rename = "1week")]
    OneWeek,
    #[serde(rename = "1month")]
    OneMonth,
}

impl CandleType {
    pub const ALL: [CandleType; 11] = [
        CandleType::OneMin,
        CandleType::FiveMin,
        CandleType::FifteenMin,
        CandleType::ThirtyMin,
        CandleType::OneHour,
        CandleType::FourHour,
        CandleType::EightHour,
        CandleType::TwelveHour,
        CandleType::OneDay,
        CandleType::OneWeek,
        CandleType::OneMonth,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            CandleType::OneMin => "1min",
            CandleType::FiveMin => "5min",
            CandleType::FifteenMin => "15min",
            CandleType::ThirtyMin => "30min",
            CandleType::OneHour => "1hour",
            CandleType::FourHour => "4hour",
            CandleType::EightHour => "8hour",
            CandleType::TwelveHour => "12hour",
            CandleType::OneDay => "1day",
            CandleType::OneWeek => "1week",
            CandleType::OneMonth => "1month",
        }
    }

    /// Daily and shorter candles are requested per day (`yyyymmdd`); longer
    /// ones per year (`yyyy`).
    pub fn is_yearly(self) -> bool {
        matches!(
            self,
            CandleType::FourHour
                | CandleType::EightHour
                | CandleType::TwelveHour
                | CandleType::OneDay
                | CandleType::OneWeek
                | CandleType::OneMonth
        )
    }
}

impl fmt::Display for CandleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for CandleType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CandleType::ALL
            .into_iter()
            .find(|candle| candle.as_str() == s)
            .ok_or_else(|| format!("unknown candle type: {s}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn candle_type_round_trips_through_str() {
        for candle in CandleType::ALL {
            assert_eq!(candle.as_str().parse::<CandleType>(), Ok(candle));
            assert_eq!(
                serde_json::to_string(&candle).unwrap(),
                format!("\"{}\"", candle.as_str())
            );
        }
        assert!("2hour".parse::<CandleType>().is_err());
    }

    #[test]
    fn order_status_tolerates_new_values() {
        let status: OrderStatus = serde_json::from_str("\"FULLY_FILLED\"").unwrap();
        assert_eq!(status, OrderStatus::FullyFilled);
        assert!(!status.is_active());

        let status: OrderStatus = serde_json::from_str("\"SOMETHING_NEW\"").unwrap();
        assert_eq!(status, OrderStatus::Unknown);
    }

    #[test]
    fn order_type_wire_names() {
        assert_eq!(
            serde_json::to_string(&OrderType::StopLimit).unwrap(),
            "\"stop_limit\""
        );
        assert_eq!(serde_json::to_string(&Side::Sell).unwrap(), "\"sell\"");
        assert_eq!(serde_json::to_string(&PositionSide::Long).unwrap(), "\"long\"");
    }
}
