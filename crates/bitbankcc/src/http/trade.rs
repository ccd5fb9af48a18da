/*
[INPUT]:  Order parameters and order ids
[OUTPUT]: Order state returned by the exchange
[POS]:    HTTP layer - spot/margin order endpoints (require signed requests)
[UPDATE]: When adding new trading endpoints or changing order flow
*/

use crate::http::{PrivateClient, QueryParams, Result};
use crate::types::{ActiveOrdersQuery, CancelOrderRequest, NewOrder, Order, OrderIdsRequest, Orders};

impl PrivateClient {
    /// Look up a single order
    ///
    /// GET /user/spot/order?pair={pair}&order_id={order_id}
    pub async fn get_order(&self, pair: &str, order_id: i64) -> Result<Order> {
        let mut params = QueryParams::new();
        params.push("pair", pair).push("order_id", order_id);
        self.get("/user/spot/order", &params).await
    }

    /// Look up several orders at once
    ///
    /// POST /user/spot/orders_info
    pub async fn get_orders_info(&self, pair: &str, order_ids: &[i64]) -> Result<Orders> {
        let body = OrderIdsRequest {
            pair: pair.to_string(),
            order_ids: order_ids.to_vec(),
        };
        self.post("/user/spot/orders_info", &body).await
    }

    /// List open orders
    ///
    /// GET /user/spot/active_orders?pair={pair}[&count&from_id&end_id&since&end]
    pub async fn get_active_orders(&self, pair: &str, query: &ActiveOrdersQuery) -> Result<Orders> {
        let mut params = QueryParams::new();
        params.push("pair", pair);
        query.append_to(&mut params);
        self.get("/user/spot/active_orders", &params).await
    }

    /// Place a spot or margin order
    ///
    /// POST /user/spot/order
    pub async fn order(&self, order: &NewOrder) -> Result<Order> {
        self.post("/user/spot/order", order).await
    }

    /// Cancel one order
    ///
    /// POST /user/spot/cancel_order
    pub async fn cancel_order(&self, pair: &str, order_id: i64) -> Result<Order> {
        let body = CancelOrderRequest {
            pair: pair.to_string(),
            order_id,
        };
        self.post("/user/spot/cancel_order", &body).await
    }

    /// Cancel several orders
    ///
    /// POST /user/spot/cancel_orders
    pub async fn cancel_orders(&self, pair: &str, order_ids: &[i64]) -> Result<Orders> {
        let body = OrderIdsRequest {
            pair: pair.to_string(),
            order_ids: order_ids.to_vec(),
        };
        self.post("/user/spot/cancel_orders", &body).await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use crate::http::signature::{ACCESS_KEY, ACCESS_SIGNATURE, sign_message};
    use crate::http::{AuthMethod, BitbankError, Clock, Credentials, PrivateClient, SigningConfig};
    use crate::types::{ActiveOrdersQuery, NewOrder, OrderStatus, OrderType, PositionSide, Side};
    use rust_decimal::Decimal;
    use wiremock::matchers::{body_string, header, method, path, query_param};
    use wiremock::{Mock, MockServer, Request, ResponseTemplate};

    #[derive(Debug)]
    struct FixedClock(u64);

    impl Clock for FixedClock {
        fn now_millis(&self) -> u64 {
            self.0
        }
    }

    const NOW: u64 = 1_700_000_000_000;

    fn dec(value: &str) -> Decimal {
        value.parse().expect("decimal literal")
    }

    fn client_for(server: &MockServer) -> PrivateClient {
        PrivateClient::with_signing_config(
            Credentials::new("api-key", "api-secret"),
            SigningConfig::default()
                .with_endpoint(format!("{}/v1", server.uri()))
                .with_auth_method(AuthMethod::Nonce),
        )
        .expect("client init")
        .with_clock(Arc::new(FixedClock(NOW)))
    }

    fn order_json(order_id: i64, status: &str) -> serde_json::Value {
        serde_json::json!({
            "order_id": order_id,
            "pair": "btc_jpy",
            "side": "buy",
            "type": "limit",
            "start_amount": "0.01",
            "remaining_amount": "0.01",
            "executed_amount": "0",
            "price": "5000000",
            "post_only": false,
            "average_price": "0",
            "ordered_at": NOW,
            "status": status
        })
    }

    fn ok(data: serde_json::Value) -> ResponseTemplate {
        ResponseTemplate::new(200).set_body_json(serde_json::json!({"success": 1, "data": data}))
    }

    #[tokio::test]
    async fn test_get_order_signs_prefixed_path() {
        let server = MockServer::start().await;
        let expected_signature = sign_message(
            "api-secret",
            &format!("{NOW}/v1/user/spot/order?pair=btc_jpy&order_id=42"),
        );

        Mock::given(method("GET"))
            .and(path("/v1/user/spot/order"))
            .and(query_param("pair", "btc_jpy"))
            .and(query_param("order_id", "42"))
            .and(header(ACCESS_KEY, "api-key"))
            .and(header("ACCESS-NONCE", NOW.to_string().as_str()))
            .and(header(ACCESS_SIGNATURE, expected_signature.as_str()))
            .and(header("content-type", "application/json"))
            .respond_with(ok(order_json(42, "UNFILLED")))
            .expect(1)
            .mount(&server)
            .await;

        let order = client_for(&server)
            .get_order("btc_jpy", 42)
            .await
            .expect("get_order failed");

        assert_eq!(order.order_id, 42);
        assert_eq!(order.status, OrderStatus::Unfilled);
        assert_eq!(order.price, Some(dec("5000000")));
    }

    #[tokio::test]
    async fn test_order_signs_exact_body() {
        let server = MockServer::start().await;
        let body = r#"{"pair":"btc_jpy","amount":"0.01","price":"5000000","side":"buy","type":"limit","post_only":true}"#;
        let expected_signature = sign_message("api-secret", &format!("{NOW}{body}"));

        Mock::given(method("POST"))
            .and(path("/v1/user/spot/order"))
            .and(body_string(body))
            .and(header(ACCESS_SIGNATURE, expected_signature.as_str()))
            .respond_with(ok(order_json(7, "UNFILLED")))
            .expect(1)
            .mount(&server)
            .await;

        let order = NewOrder::limit("btc_jpy", Side::Buy, dec("0.01"), dec("5000000"))
            .with_post_only(true);
        let placed = client_for(&server).order(&order).await.expect("order failed");

        assert_eq!(placed.order_id, 7);
        assert_eq!(placed.order_type, OrderType::Limit);
    }

    #[tokio::test]
    async fn test_margin_order_body_fields() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/user/spot/order"))
            .respond_with(ok(order_json(8, "INACTIVE")))
            .expect(1)
            .mount(&server)
            .await;

        let order = NewOrder::market("btc_jpy", Side::Sell, dec("0.5"))
            .with_order_type(OrderType::Stop)
            .with_trigger_price(dec("4800000"))
            .with_position_side(PositionSide::Long);
        client_for(&server).order(&order).await.expect("order failed");

        let requests = server.received_requests().await.expect("recorded requests");
        let sent: serde_json::Value = serde_json::from_slice(&requests[0].body).expect("json body");
        assert_eq!(sent["trigger_price"], "4800000");
        assert_eq!(sent["position_side"], "long");
        assert!(sent.get("price").is_none());
        assert!(sent.get("post_only").is_none());
    }

    #[tokio::test]
    async fn test_get_active_orders_omits_unset_filters() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1/user/spot/active_orders"))
            .respond_with(ok(serde_json::json!({
                "orders": [order_json(1, "UNFILLED"), order_json(2, "PARTIALLY_FILLED")]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let query = ActiveOrdersQuery {
            count: Some(2),
            since: Some(0),
            ..Default::default()
        };
        let orders = client_for(&server)
            .get_active_orders("btc_jpy", &query)
            .await
            .expect("active orders");

        assert_eq!(orders.orders.len(), 2);
        let requests = server.received_requests().await.expect("recorded requests");
        let request: &Request = &requests[0];
        assert_eq!(request.url.query(), Some("pair=btc_jpy&count=2&since=0"));
    }

    #[tokio::test]
    async fn test_cancel_orders_and_orders_info() {
        let server = MockServer::start().await;
        let orders = serde_json::json!({
            "orders": [order_json(1, "CANCELED_UNFILLED"), order_json(2, "CANCELED_UNFILLED")]
        });

        Mock::given(method("POST"))
            .and(path("/v1/user/spot/cancel_orders"))
            .and(body_string(r#"{"pair":"btc_jpy","order_ids":[1,2]}"#))
            .respond_with(ok(orders.clone()))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/v1/user/spot/orders_info"))
            .and(body_string(r#"{"pair":"btc_jpy","order_ids":[1,2]}"#))
            .respond_with(ok(orders))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server);
        let cancelled = client.cancel_orders("btc_jpy", &[1, 2]).await.expect("cancel_orders");
        let info = client.get_orders_info("btc_jpy", &[1, 2]).await.expect("orders_info");

        assert_eq!(cancelled, info);
        assert!(cancelled.orders.iter().all(|o| o.status == OrderStatus::CanceledUnfilled));
    }

    #[tokio::test]
    async fn test_cancel_order_exchange_error() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/user/spot/cancel_order"))
            .and(body_string(r#"{"pair":"btc_jpy","order_id":99}"#))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({"success": 0, "data": {"code": 50026}})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let err = client_for(&server).cancel_order("btc_jpy", 99).await.unwrap_err();

        match err {
            BitbankError::Exchange(inner) => {
                assert_eq!(inner.code, "50026");
                assert_eq!(inner.message, "ご指定の注文は既にキャンセル済みです");
            }
            other => panic!("Expected Exchange error, got {other:?}"),
        }
    }
}
