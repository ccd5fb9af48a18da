/*
[INPUT]:  Asset names, history filters and withdrawal requests
[OUTPUT]: Account data (assets, trades, positions, deposits, withdrawals)
[POS]:    HTTP layer - user/account endpoints (require signed requests)
[UPDATE]: When adding new user endpoints or changing query parameters
*/

// ### User Endpoints

use crate::http::{PrivateClient, QueryParams, Result};
use crate::types::{
    Assets, Deposits, ExchangeStatus, HistoryQuery, MarginPositions, Pairs, SubscribeStatus,
    TradeHistoryQuery, Trades, Withdrawal, WithdrawalAccounts, WithdrawalRequest, Withdrawals,
};

impl PrivateClient {
    /// Query asset balances
    ///
    /// GET /user/assets
    pub async fn get_assets(&self) -> Result<Assets> {
        self.get("/user/assets", &QueryParams::new()).await
    }

    /// Query executed trades, optionally for one pair
    ///
    /// GET /user/spot/trade_history[?pair&count&order_id&since&end&order]
    pub async fn get_trade_history(
        &self,
        pair: Option<&str>,
        query: &TradeHistoryQuery,
    ) -> Result<Trades> {
        let mut params = QueryParams::new();
        params.push_opt("pair", pair);
        query.append_to(&mut params);
        self.get("/user/spot/trade_history", &params).await
    }

    /// Query open margin positions
    ///
    /// GET /user/margin/positions
    pub async fn get_margin_positions(&self) -> Result<MarginPositions> {
        self.get("/user/margin/positions", &QueryParams::new()).await
    }

    /// GET /user/deposit_history?asset={asset}[&count&since&end]
    pub async fn get_deposit_history(&self, asset: &str, query: &HistoryQuery) -> Result<Deposits> {
        let mut params = QueryParams::new();
        params.push("asset", asset);
        query.append_to(&mut params);
        self.get("/user/deposit_history", &params).await
    }

    /// Registered withdrawal accounts for an asset
    ///
    /// GET /user/withdrawal_account?asset={asset}
    pub async fn get_withdrawal_account(&self, asset: &str) -> Result<WithdrawalAccounts> {
        let mut params = QueryParams::new();
        params.push("asset", asset);
        self.get("/user/withdrawal_account", &params).await
    }

    /// Submit a withdrawal to a registered account
    ///
    /// POST /user/request_withdrawal
    pub async fn request_withdrawal(&self, request: &WithdrawalRequest) -> Result<Withdrawal> {
        self.post("/user/request_withdrawal", request).await
    }

    /// GET /user/withdrawal_history?asset={asset}[&count&since&end]
    pub async fn get_withdrawal_history(
        &self,
        asset: &str,
        query: &HistoryQuery,
    ) -> Result<Withdrawals> {
        let mut params = QueryParams::new();
        params.push("asset", asset);
        query.append_to(&mut params);
        self.get("/user/withdrawal_history", &params).await
    }

    /// Channel and token for the private push stream
    ///
    /// GET /user/subscribe
    pub async fn get_subscribe_status(&self) -> Result<SubscribeStatus> {
        self.get("/user/subscribe", &QueryParams::new()).await
    }

    /// Per-pair exchange status
    ///
    /// GET /spot/status
    pub async fn get_exchange_status(&self) -> Result<ExchangeStatus> {
        self.get("/spot/status", &QueryParams::new()).await
    }

    /// Trading rules for every pair
    ///
    /// GET /spot/pairs
    pub async fn get_pairs(&self) -> Result<Pairs> {
        self.get("/spot/pairs", &QueryParams::new()).await
    }
}
