//! Deserialization of upstream payloads and the shared enums.

use chrono::NaiveDate;
use serde_json::json;

use marketboard::chart::assemble_in_year;
use marketboard::error::DashboardError;
use marketboard::types::chart::{ChartPoint, DailyBar, IntradayBar, PriceChange};
use marketboard::types::company::CompanyProfile;
use marketboard::types::de::lenient_rows;
use marketboard::types::market::{MarketLeader, SectorPerformance, UsSymbol};
use marketboard::types::news::NewsArticle;
use marketboard::types::quote::{FinnhubQuote, PriceChangeTable, Quote, StockQuote};
use marketboard::types::{LeaderKind, Timeframe};

// ===================================================================
// Enums
// ===================================================================

#[test]
fn timeframe_parses_case_insensitively() {
    for (raw, tf) in [
        ("1d", Timeframe::OneDay),
        ("5D", Timeframe::FiveDays),
        ("1m", Timeframe::OneMonth),
        ("ytd", Timeframe::YearToDate),
        ("YTD", Timeframe::YearToDate),
        ("1y", Timeframe::OneYear),
    ] {
        assert_eq!(raw.parse::<Timeframe>().unwrap(), tf, "{raw}");
    }
    assert!(matches!("3M".parse::<Timeframe>(), Err(DashboardError::InvalidArgument(_))));
}

#[test]
fn timeframe_display_and_serde() {
    assert_eq!(Timeframe::default(), Timeframe::OneDay);
    assert_eq!(Timeframe::YearToDate.to_string(), "YTD");
    assert_eq!(Timeframe::YearToDate.key(), "ytd");
    assert_eq!(serde_json::to_value(Timeframe::FiveDays).unwrap(), json!("5D"));
    assert_eq!(serde_json::to_value(Timeframe::YearToDate).unwrap(), json!("ytd"));
    assert_eq!(serde_json::from_value::<Timeframe>(json!("YTD")).unwrap(), Timeframe::YearToDate);
    assert!(Timeframe::FiveDays.is_intraday());
    assert!(!Timeframe::OneMonth.is_intraday());
}

#[test]
fn leader_kind_path_segments() {
    assert_eq!(LeaderKind::Gainers.as_str(), "gainers");
    assert_eq!(LeaderKind::Actives.to_string(), "actives");
}

// ===================================================================
// Chart samples
// ===================================================================

#[test]
fn intraday_bar_accepts_string_prices() {
    let bars: Vec<IntradayBar> = serde_json::from_value(json!([
        { "date": "2025-03-14 15:55:00", "open": "213.1", "close": "213.49", "volume": 1200 },
        { "date": "2025-03-14T15:50:00", "close": 212.8 }
    ]))
    .unwrap();

    assert_eq!(bars[0].close, Some(213.49));
    assert_eq!(bars[0].open, Some(213.1));
    assert_eq!(bars[0].volume, Some(1200.0));
    assert_eq!(bars[0].trading_day(), NaiveDate::from_ymd_opt(2025, 3, 14).unwrap());
    assert_eq!(bars[1].timestamp.to_string(), "2025-03-14 15:50:00");
    assert_eq!(bars[1].open, None);
}

#[test]
fn null_or_blank_close_leaves_sample_unpriced() {
    let bars: Vec<IntradayBar> = serde_json::from_str(
        r#"[{"date":"2025-03-14 09:35:00","close":101.0},{"date":"2025-03-14 09:30:00","close":null}]"#,
    )
    .unwrap();
    assert_eq!(bars.len(), 2);
    assert_eq!(bars[0].close, Some(101.0));
    assert_eq!(bars[1].close, None);

    let daily: Vec<DailyBar> = serde_json::from_value(json!([
        { "date": "2025-03-14", "close": "" },
        { "date": "2025-03-13" }
    ]))
    .unwrap();
    assert_eq!(daily[0].close, None);
    assert_eq!(daily[1].close, None);

    let points = assemble_in_year(Timeframe::OneDay, &bars, &[], 2025);
    assert_eq!(points[0], ChartPoint::new("09:30", None));
    assert_eq!(points[1], ChartPoint::new("09:35", Some(101.0)));

    let month = assemble_in_year(Timeframe::OneMonth, &[], &daily, 2025);
    assert_eq!(month, vec![ChartPoint::new("2025-03-13", None), ChartPoint::new("2025-03-14", None)]);
}

#[test]
fn malformed_rows_are_skipped_not_fatal() {
    let single = serde_json::from_value::<IntradayBar>(json!({ "date": "14/03/2025", "close": 1 }));
    assert!(single.is_err());

    let rows = vec![
        json!({ "date": "2025-03-14 09:35:00", "close": 101.0 }),
        json!({ "date": "14/03/2025", "close": 1 }),
        json!({ "close": 2 }),
        json!({ "date": "2025-03-14 09:30:00", "close": "100.5" }),
    ];
    let bars: Vec<IntradayBar> = lenient_rows(rows, "intraday");
    assert_eq!(bars.len(), 2);
    assert_eq!(bars[0].close, Some(101.0));
    assert_eq!(bars[1].close, Some(100.5));

    let daily: Vec<DailyBar> = lenient_rows(vec![json!({ "date": "yesterday", "close": 1 })], "daily");
    assert!(daily.is_empty());
}

#[test]
fn daily_bar_parses_date_prefix() {
    let bar: DailyBar = serde_json::from_value(json!({
        "date": "2025-03-14 00:00:00",
        "close": 213.49,
        "adjClose": "213.49",
        "changePercent": "",
    }))
    .unwrap();

    assert_eq!(bar.date, NaiveDate::from_ymd_opt(2025, 3, 14).unwrap());
    assert_eq!(bar.adj_close, Some(213.49));
    assert_eq!(bar.change_percent, None);
}

#[test]
fn chart_output_serializes_for_rendering() {
    let points = vec![ChartPoint::new("09:30", Some(1.5)), ChartPoint::new("09:35", None)];
    assert_eq!(
        serde_json::to_value(&points).unwrap(),
        json!([{ "label": "09:30", "price": 1.5 }, { "label": "09:35", "price": null }])
    );

    let change = PriceChange {
        absolute: Some(2.0),
        percent: None,
    };
    assert_eq!(serde_json::to_value(change).unwrap(), json!({ "absolute": 2.0 }));
    assert!(PriceChange::default().is_empty());
}

// ===================================================================
// Quotes
// ===================================================================

#[test]
fn finnhub_quote_maps_to_descriptive_fields() {
    let raw: FinnhubQuote = serde_json::from_value(json!({
        "c": 213.49, "d": 4.81, "dp": 2.305, "h": 213.95, "l": 209.58, "o": 211.25, "pc": 208.68, "t": 1741982400
    }))
    .unwrap();
    let quote = Quote::from(raw);

    assert_eq!(quote.current_price, 213.49);
    assert_eq!(quote.percent_change, Some(2.305));
    assert_eq!(quote.previous_close_price, Some(208.68));
    assert_eq!(
        serde_json::to_value(&quote).unwrap()["highPriceOfDay"],
        json!(213.95)
    );
}

#[test]
fn stock_quote_tolerates_sparse_payload() {
    let quote: StockQuote = serde_json::from_value(json!({ "symbol": "AAPL", "price": 213.49, "previousClose": 208.68 }))
        .unwrap();
    assert_eq!(quote.previous_close, Some(208.68));
    assert_eq!(quote.market_cap, None);
}

#[test]
fn price_change_table_keys() {
    let table: PriceChangeTable = serde_json::from_value(json!({
        "symbol": "AAPL",
        "1D": 2.305,
        "5D": "-1.2",
        "1M": -6.4,
        "3M": -9.1,
        "ytd": -14.6,
        "1Y": 24.0,
        "10Y": 812.5,
        "max": 150000.0
    }))
    .unwrap();

    assert_eq!(table.for_timeframe(Timeframe::OneDay), Some(2.305));
    assert_eq!(table.for_timeframe(Timeframe::FiveDays), Some(-1.2));
    assert_eq!(table.for_timeframe(Timeframe::YearToDate), Some(-14.6));
    assert_eq!(table.get("YTD"), Some(-14.6));
    assert_eq!(table.get("3M"), Some(-9.1));
    assert_eq!(table.get("6M"), None);
    assert_eq!(table.get("10Y"), Some(812.5));
    assert_eq!(table.get("2W"), None);
}

// ===================================================================
// Company, market, news
// ===================================================================

#[test]
fn company_profile_accepts_both_field_sets() {
    let legacy: CompanyProfile = serde_json::from_value(json!({
        "symbol": "AAPL",
        "mktCap": 3.2e12,
        "lastDiv": 0.99,
        "volAvg": "54000000",
        "range": "164.08-260.10",
        "cik": "0000320193",
        "fullTimeEmployees": "164000",
        "isEtf": false
    }))
    .unwrap();
    let current: CompanyProfile = serde_json::from_value(json!({
        "symbol": "AAPL",
        "marketCap": 3.2e12,
        "lastDividend": 0.99,
        "averageVolume": 54000000,
        "fullTimeEmployees": 164000,
        "zip": 95014,
        "isEtf": "false"
    }))
    .unwrap();

    for profile in [&legacy, &current] {
        assert_eq!(profile.market_cap, Some(3.2e12));
        assert_eq!(profile.last_dividend, Some(0.99));
        assert_eq!(profile.average_volume, Some(54e6));
        assert_eq!(profile.full_time_employees.as_deref(), Some("164000"));
        assert_eq!(profile.is_etf, Some(false));
    }
    assert_eq!(legacy.year_range(), Some((164.08, 260.10)));
    assert_eq!(current.year_range(), None);
    assert_eq!(current.zip.as_deref(), Some("95014"));
}

#[test]
fn market_leader_string_prices() {
    let leaders: Vec<MarketLeader> = serde_json::from_value(json!([
        { "symbol": "SMCI", "name": "Super Micro", "price": "43.10", "change": "5.2", "changesPercentage": "13.72" },
        { "symbol": "INTC", "price": 19.9, "changesPercentage": -4.1 }
    ]))
    .unwrap();

    assert_eq!(leaders[0].price, 43.1);
    assert!(leaders[0].is_up());
    assert!(!leaders[1].is_up());
    assert_eq!(leaders[1].change, None);
}

#[test]
fn sector_percent_strips_suffix() {
    let sector: SectorPerformance =
        serde_json::from_value(json!({ "sector": "Energy", "changesPercentage": "-0.5123%" })).unwrap();
    assert_eq!(sector.percent(), Some(-0.5123));

    let garbled = SectorPerformance {
        sector: "Utilities".into(),
        changes_percentage: "n/a".into(),
    };
    assert_eq!(garbled.percent(), None);
}

#[test]
fn us_symbol_type_field() {
    let symbol: UsSymbol = serde_json::from_value(json!({
        "symbol": "AAPL", "description": "APPLE INC", "displaySymbol": "AAPL", "type": "Common Stock", "mic": "XNAS"
    }))
    .unwrap();
    assert_eq!(symbol.security_type.as_deref(), Some("Common Stock"));
    assert_eq!(symbol.mic.as_deref(), Some("XNAS"));
}

#[test]
fn news_article_helpers() {
    let article: NewsArticle = serde_json::from_value(json!({
        "id": 7391, "category": "company", "datetime": 1741982400, "headline": "Apple rallies",
        "image": "", "related": "AAPL", "source": "Reuters", "summary": "...", "url": "https://example.com/a"
    }))
    .unwrap();

    assert_eq!(article.image_url(), None);
    assert_eq!(article.published_at().unwrap().to_rfc3339(), "2025-03-14T20:00:00+00:00");
}
