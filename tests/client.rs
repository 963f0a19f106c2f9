//! HTTP behaviour of `DashboardClient` and `Dashboard` against an in-process
//! mock backend.
//!
//! The mock speaks just enough HTTP/1.1 for `reqwest`: it reads one request
//! per connection, records it, answers from a route table, and closes.

use std::sync::{Arc, Mutex};

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use serde_json::json;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

use marketboard::error::DashboardError;
use marketboard::session::Session;
use marketboard::types::{LeaderKind, Timeframe};
use marketboard::{Dashboard, DashboardClient};

// ===================================================================
// Mock backend
// ===================================================================

#[derive(Debug, Clone)]
struct Recorded {
    target: String,
    headers: Vec<(String, String)>,
}

impl Recorded {
    fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }
}

struct Route {
    path: &'static str,
    status: u16,
    content_type: &'static str,
    body: String,
}

fn ok(path: &'static str, body: serde_json::Value) -> Route {
    Route {
        path,
        status: 200,
        content_type: "application/json",
        body: body.to_string(),
    }
}

fn respond(path: &'static str, status: u16, content_type: &'static str, body: &str) -> Route {
    Route {
        path,
        status,
        content_type,
        body: body.to_owned(),
    }
}

struct MockBackend {
    origin: String,
    requests: Arc<Mutex<Vec<Recorded>>>,
}

impl MockBackend {
    async fn start(routes: Vec<Route>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let origin = format!("http://{}", listener.local_addr().unwrap());
        let requests = Arc::new(Mutex::new(Vec::new()));
        let routes = Arc::new(routes);

        let log = Arc::clone(&requests);
        tokio::spawn(async move {
            loop {
                let Ok((mut socket, _)) = listener.accept().await else {
                    return;
                };
                let log = Arc::clone(&log);
                let routes = Arc::clone(&routes);
                tokio::spawn(async move {
                    let mut buf = Vec::new();
                    let mut chunk = [0u8; 4096];
                    while !buf.windows(4).any(|w| w == b"\r\n\r\n") {
                        match socket.read(&mut chunk).await {
                            Ok(0) | Err(_) => return,
                            Ok(n) => buf.extend_from_slice(&chunk[..n]),
                        }
                    }
                    let head = String::from_utf8_lossy(&buf).into_owned();
                    let mut lines = head.split("\r\n");
                    let target = lines
                        .next()
                        .and_then(|l| l.split(' ').nth(1))
                        .unwrap_or_default()
                        .to_owned();
                    let headers = lines
                        .take_while(|l| !l.is_empty())
                        .filter_map(|l| l.split_once(':'))
                        .map(|(k, v)| (k.trim().to_ascii_lowercase(), v.trim().to_owned()))
                        .collect();
                    log.lock().unwrap().push(Recorded {
                        target: target.clone(),
                        headers,
                    });

                    let path = target.split('?').next().unwrap_or_default();
                    let response = match routes.iter().find(|r| r.path == path) {
                        Some(route) => format!(
                            "HTTP/1.1 {} X\r\ncontent-type: {}\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{}",
                            route.status,
                            route.content_type,
                            route.body.len(),
                            route.body
                        ),
                        None => "HTTP/1.1 404 Not Found\r\ncontent-length: 0\r\nconnection: close\r\n\r\n".to_owned(),
                    };
                    let _ = socket.write_all(response.as_bytes()).await;
                    let _ = socket.shutdown().await;
                });
            }
        });

        Self { origin, requests }
    }

    fn client(&self) -> DashboardClient {
        DashboardClient::with_base_urls(
            format!("{}/api/stock", self.origin),
            format!("{}/api/news", self.origin),
            format!("{}/api/rds/", self.origin),
        )
        .unwrap()
    }

    fn requests(&self) -> Vec<Recorded> {
        self.requests.lock().unwrap().clone()
    }

    fn hits(&self, path: &str) -> usize {
        self.requests()
            .iter()
            .filter(|r| r.target.split('?').next() == Some(path))
            .count()
    }
}

fn finnhub_quote() -> serde_json::Value {
    json!({ "c": 213.49, "d": 4.81, "dp": 2.305, "h": 213.95, "l": 209.58, "o": 211.25, "pc": 208.68 })
}

fn token() -> String {
    let header = URL_SAFE_NO_PAD.encode(r#"{"alg":"HS256"}"#);
    let payload = URL_SAFE_NO_PAD.encode(r#"{"name":"Sam","sub":"sam@example.com"}"#);
    format!("{header}.{payload}.sig")
}

// ===================================================================
// Client
// ===================================================================

#[tokio::test]
async fn quote_request_and_mapping() {
    let backend = MockBackend::start(vec![ok("/api/stock/finnhub/quote/AAPL", finnhub_quote())]).await;
    let client = backend.client();

    let quote = client.get_quote(" AAPL ").await.unwrap();
    assert_eq!(quote.current_price, 213.49);
    assert_eq!(quote.previous_close_price, Some(208.68));

    let requests = backend.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].target, "/api/stock/finnhub/quote/AAPL");
    assert_eq!(requests[0].header("accept"), Some("application/json"));
    assert_eq!(requests[0].header("authorization"), None);
}

#[tokio::test]
async fn services_use_their_own_base_urls() {
    let backend = MockBackend::start(vec![
        ok("/api/rds/historical-price-full/MSFT", json!([{ "date": "2025-03-14", "close": 388.56 }])),
        ok("/api/news/general-news", json!([])),
        ok("/api/stock/market-leaders/losers", json!([{ "symbol": "INTC", "price": "19.90" }])),
    ])
    .await;
    let client = backend.client();

    let daily = client.get_daily_chart("MSFT").await.unwrap();
    assert_eq!(daily.len(), 1);
    assert!(client.get_general_news().await.unwrap().is_empty());
    let losers = client.get_market_leaders(LeaderKind::Losers).await.unwrap();
    assert_eq!(losers[0].price, 19.9);
}

#[tokio::test]
async fn signals_upper_case_symbol_and_send_limit() {
    let backend = MockBackend::start(vec![ok(
        "/api/rds/signals/NVDA",
        json!([{ "ticker": "NVDA", "signalDate": "2025-03-14", "riskScore": 58 }]),
    )])
    .await;
    let client = backend.client();

    let signals = client.get_ml_signals("nvda", None).await.unwrap();
    assert_eq!(signals[0].risk_score, Some(58));
    client.get_ml_signals("nvda", Some(30)).await.unwrap();

    let targets: Vec<String> = backend.requests().into_iter().map(|r| r.target).collect();
    assert_eq!(targets, ["/api/rds/signals/NVDA?limit=180", "/api/rds/signals/NVDA?limit=30"]);
}

#[tokio::test]
async fn invalid_arguments_never_reach_the_network() {
    let backend = MockBackend::start(vec![]).await;
    let client = backend.client();

    assert!(matches!(client.get_quote("  ").await, Err(DashboardError::InvalidArgument(_))));
    assert!(matches!(
        client.get_ml_signals("AAPL", Some(0)).await,
        Err(DashboardError::InvalidArgument(_))
    ));
    assert!(backend.requests().is_empty());
}

#[tokio::test]
async fn symbol_is_a_single_path_segment() {
    let backend = MockBackend::start(vec![]).await;
    let url = backend
        .client()
        .url(marketboard::client::Service::Stock, &["quote", "BRK/B"])
        .unwrap();
    assert!(url.as_str().ends_with("/api/stock/quote/BRK%2FB"));
}

#[tokio::test]
async fn session_token_is_sent_as_bearer() {
    let backend = MockBackend::start(vec![ok("/api/stock/finnhub/quote/AAPL", finnhub_quote())]).await;
    let session = Session::from_token(token()).unwrap();
    let mut client = backend.client().with_session(session).unwrap();
    assert_eq!(client.session().unwrap().user().name, "Sam");

    client.get_quote("AAPL").await.unwrap();
    let signed_out = client.clear_session();
    assert!(signed_out.is_some());
    client.get_quote("AAPL").await.unwrap();

    let requests = backend.requests();
    let expected = format!("Bearer {}", token());
    assert_eq!(requests[0].header("authorization"), Some(expected.as_str()));
    assert_eq!(requests[1].header("authorization"), None);
}

#[tokio::test]
async fn structured_error_body_becomes_api_error() {
    let backend = MockBackend::start(vec![respond(
        "/api/stock/company-profile/ZZZZ",
        404,
        "application/json",
        r#"{"timestamp":"2025-03-14T20:00:00.000+00:00","status":404,"error":"Not Found","path":"/api/stock/company-profile/ZZZZ"}"#,
    )])
    .await;

    let err = backend.client().get_company_profile("ZZZZ").await.unwrap_err();
    match err {
        DashboardError::Api(body) => {
            assert_eq!(body.status, Some(404));
            assert_eq!(body.error.as_deref(), Some("Not Found"));
            assert_eq!(body.to_string(), "[404] Not Found: No message");
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn unstructured_error_falls_back_to_status() {
    let backend =
        MockBackend::start(vec![respond("/api/stock/stock-screener", 502, "text/plain", "upstream down")]).await;

    let err = backend.client().get_stock_screener().await.unwrap_err();
    match err {
        DashboardError::HttpStatus { status, body } => {
            assert_eq!(status.as_u16(), 502);
            assert_eq!(body, "upstream down");
        }
        other => panic!("expected HttpStatus error, got {other:?}"),
    }
}

#[tokio::test]
async fn malformed_success_body_is_json_error() {
    let backend =
        MockBackend::start(vec![respond("/api/stock/sectors-performance", 200, "application/json", "{\"oops\"")]).await;
    let err = backend.client().get_sector_performance().await.unwrap_err();
    assert!(matches!(err, DashboardError::Json(_)));
}

// ===================================================================
// Dashboard
// ===================================================================

fn detail_routes(price_change: Route) -> Vec<Route> {
    vec![
        ok("/api/stock/finnhub/quote/AAPL", finnhub_quote()),
        ok(
            "/api/stock/historical-chart/AAPL",
            json!([
                { "date": "2025-03-14 10:00:00", "close": 212.0 },
                { "date": "2025-03-14 09:30:00", "close": 210.0 },
                { "date": "2025-03-13 15:55:00", "close": 208.0 }
            ]),
        ),
        ok(
            "/api/rds/historical-price-full/AAPL",
            json!([
                { "date": "2025-03-14", "close": 213.49 },
                { "date": "2025-03-13", "close": 208.68 },
                { "date": "2025-03-12", "close": 203.49 }
            ]),
        ),
        price_change,
    ]
}

#[tokio::test]
async fn stock_detail_assembles_and_caches() {
    let backend = MockBackend::start(detail_routes(ok(
        "/api/stock/stock-price-change/AAPL",
        json!({ "symbol": "AAPL", "1D": 2.305, "1M": 4.9 }),
    )))
    .await;
    let dashboard = Dashboard::new(backend.client());

    let today = dashboard.stock_detail("aapl", Timeframe::OneDay).await.unwrap();
    assert_eq!(today.symbol, "AAPL");
    assert_eq!(today.chart.len(), 78);
    assert_eq!(today.chart[0].price, Some(210.0));
    assert_eq!(today.change.absolute.map(|a| (a * 100.0).round() / 100.0), Some(4.81));
    assert_eq!(today.change.percent, Some(2.305));

    let month = dashboard.stock_detail("AAPL", Timeframe::OneMonth).await.unwrap();
    let labels: Vec<&str> = month.chart.iter().map(|p| p.label.as_str()).collect();
    assert_eq!(labels, ["2025-03-12", "2025-03-13", "2025-03-14"]);
    assert_eq!(month.change.absolute, Some(213.49 - 203.49));
    assert_eq!(month.change.percent, Some(4.9));

    // The second view is served entirely from cache.
    for path in [
        "/api/stock/finnhub/quote/AAPL",
        "/api/stock/historical-chart/AAPL",
        "/api/rds/historical-price-full/AAPL",
        "/api/stock/stock-price-change/AAPL",
    ] {
        assert_eq!(backend.hits(path), 1, "{path}");
    }

    dashboard.invalidate_symbol("AAPL").await.unwrap();
    dashboard.quote("AAPL").await.unwrap();
    assert_eq!(backend.hits("/api/stock/finnhub/quote/AAPL"), 2);
}

#[tokio::test]
async fn stock_detail_survives_missing_price_change_table() {
    let backend = MockBackend::start(detail_routes(respond(
        "/api/stock/stock-price-change/AAPL",
        500,
        "application/json",
        r#"{"message":"quota exceeded"}"#,
    )))
    .await;
    let dashboard = Dashboard::new(backend.client());

    let detail = dashboard.stock_detail("AAPL", Timeframe::FiveDays).await.unwrap();
    assert_eq!(detail.chart.len(), 3);
    assert!(detail.change.absolute.is_some());
    assert_eq!(detail.change.percent, None);
}

#[tokio::test]
async fn chart_fetches_only_needed_series() {
    let backend = MockBackend::start(detail_routes(ok("/api/stock/stock-price-change/AAPL", json!({})))).await;
    let dashboard = Dashboard::new(backend.client());

    let points = dashboard.chart("AAPL", Timeframe::OneYear).await.unwrap();
    assert_eq!(points.len(), 3);
    assert_eq!(backend.hits("/api/rds/historical-price-full/AAPL"), 1);
    assert_eq!(backend.hits("/api/stock/historical-chart/AAPL"), 0);
}

#[tokio::test]
async fn failed_quote_fails_the_detail_view() {
    let backend = MockBackend::start(vec![ok("/api/stock/historical-chart/AAPL", json!([]))]).await;
    let dashboard = Dashboard::new(backend.client());

    let err = dashboard.stock_detail("AAPL", Timeframe::OneDay).await.unwrap_err();
    assert!(matches!(err, DashboardError::Shared(_)));
}

#[tokio::test]
async fn unpriced_and_malformed_samples_do_not_fail_the_view() {
    let backend = MockBackend::start(vec![
        ok("/api/stock/finnhub/quote/AAPL", finnhub_quote()),
        ok(
            "/api/stock/historical-chart/AAPL",
            json!([
                { "date": "2025-03-14 09:35:00", "close": 101.0 },
                { "date": "2025-03-14 09:30:00", "close": null },
                { "date": "not a timestamp", "close": 99.0 }
            ]),
        ),
        ok("/api/rds/historical-price-full/AAPL", json!([{ "date": "2025-03-14", "close": null }])),
        ok("/api/stock/stock-price-change/AAPL", json!({ "1D": 0.5 })),
    ])
    .await;
    let dashboard = Dashboard::new(backend.client());

    let detail = dashboard.stock_detail("AAPL", Timeframe::OneDay).await.unwrap();
    assert_eq!(detail.chart.len(), 78);
    assert_eq!(detail.chart[0].price, None);
    assert_eq!(detail.chart[1].price, Some(101.0));
    assert!(detail.change.absolute.is_some());

    assert_eq!(dashboard.intraday_chart("AAPL").await.unwrap().len(), 2);
    assert_eq!(backend.hits("/api/stock/historical-chart/AAPL"), 1);

    // Everything fetched above is still fresh.
    assert_eq!(dashboard.purge_stale().await, 0);
    assert_eq!(backend.hits("/api/stock/finnhub/quote/AAPL"), 1);
}
