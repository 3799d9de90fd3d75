//! End-to-end URL construction checks against the public builder surface.

use chrono::{DateTime, Utc};
use covalent_client::endpoints::{address, block, defi, events, nft, pricing, tokens};
use covalent_client::{
    ClientConfig, CommonOptions, CovalentError, DayRange, OutputFormat, PageOptions,
    QuoteCurrency, SortOrder,
};
use url::Url;

fn config() -> ClientConfig {
    ClientConfig::default().with_api_key("ckey_test")
}

fn day(s: &str) -> chrono::NaiveDate {
    s.parse().unwrap()
}

fn ts(s: &str) -> DateTime<Utc> {
    s.parse().unwrap()
}

/// Builds one request per resource family with representative parameters.
fn sample_requests(
    config: &ClientConfig,
    common: &CommonOptions,
) -> Vec<covalent_client::ResolvedRequest> {
    let range = DayRange::new(Some(day("2021-04-01")), Some(day("2021-05-01")));
    vec![
        pricing::spot_prices(config, &["BTC, ETH"], common).unwrap(),
        pricing::historical_prices(config, "TRIBE", &range, Some(SortOrder::Ascending), common)
            .unwrap(),
        address::token_balances(config, 1, "0xABC", true, false, common).unwrap(),
        address::transactions(config, 1, "0xABC", None, false, common).unwrap(),
        block::block(config, 1, None, common).unwrap(),
        block::block_heights(config, 1, ts("2021-04-01T00:00:00Z"), None, common).unwrap(),
        events::log_events_by_contract(config, 1, "0xABC", 1, 2, common).unwrap(),
        nft::nft_metadata(config, 1, "0xABC", "42", common).unwrap(),
        tokens::token_holders(config, 1, "0xABC", None, common).unwrap(),
        defi::sushiswap_activity(config, 1, "0xABC", true, common).unwrap(),
    ]
}

#[test]
fn every_request_is_a_well_formed_url_with_one_key() {
    let config = config();
    for request in sample_requests(&config, &CommonOptions::default()) {
        let reparsed = Url::parse(request.url.as_str()).unwrap();
        let keys: Vec<_> = reparsed
            .query_pairs()
            .filter(|(name, _)| name == "key")
            .map(|(_, value)| value.into_owned())
            .collect();
        assert_eq!(keys, vec!["ckey_test".to_string()], "{}", request.url);
        assert_eq!(request.method, reqwest::Method::GET);
        assert_eq!(request.content_type, "application/json");
    }
}

#[test]
fn builders_are_idempotent() {
    let config = config();
    let common = CommonOptions {
        quote_currency: Some(QuoteCurrency::Eth),
        format: Some(OutputFormat::Csv),
        page: Some(PageOptions::new(1, 100).unwrap()),
        ..Default::default()
    };
    let first = sample_requests(&config, &common);
    let second = sample_requests(&config, &common);
    for (a, b) in first.iter().zip(second.iter()) {
        assert_eq!(a.url.as_str(), b.url.as_str());
    }
}

#[test]
fn missing_credential_fails_every_operation_before_any_url() {
    let config = ClientConfig::default();
    let common = CommonOptions::default();

    let checks: Vec<Result<_, CovalentError>> = vec![
        pricing::spot_prices(&config, &["BTC"], &common),
        pricing::price_volatility(&config, &[], &common),
        address::portfolio(&config, 1, "0xABC", &common),
        address::transaction(&config, 1, "0xDEF", false, &common),
        block::block(&config, 1, Some(100), &common),
        events::log_events_by_topics(&config, 1, &["0xAAA"], None, 1, 2, &common),
        nft::nft_token_ids(&config, 1, "0xABC", &common),
        tokens::contract_metadata(&config, 1, "all", &common),
        defi::compound_assets(&config, 1, &common),
    ];
    for result in checks {
        assert!(matches!(
            result.unwrap_err(),
            CovalentError::MissingCredential
        ));
    }
}

#[test]
fn spot_prices_scenario() {
    let config = config();
    let request =
        pricing::spot_prices(&config, &["TRIBE, MATIC ,1INCH"], &CommonOptions::default())
            .unwrap();
    let url = request.url.as_str();
    assert!(url.contains("tickers=TRIBE%2CMATIC%2C1INCH"));
    assert!(!url.contains("page-number"));
    assert!(!url.contains("page-size"));
}

#[test]
fn historical_prices_scenario() {
    let config = config();
    let range = DayRange::new(Some(day("2021-04-01")), Some(day("2021-05-01")));
    let request = pricing::historical_prices(
        &config,
        "TRIBE",
        &range,
        Some(SortOrder::Ascending),
        &CommonOptions::default(),
    )
    .unwrap();
    let url = request.url.as_str();
    assert!(url.contains("/historical/usd/tribe/"));
    assert!(url.contains("from=2021-04-01"));
    assert!(url.contains("to=2021-05-01"));
    assert!(url.contains("prices-at-asc=true"));
}

#[test]
fn block_scenarios() {
    let config = config();
    let request = block::block(&config, 1, None, &CommonOptions::default()).unwrap();
    assert!(request.url.path().ends_with("/block_v2/latest/"));

    let request = block::block_heights(
        &config,
        1,
        ts("2021-04-01T00:00:00Z"),
        None,
        &CommonOptions::default(),
    )
    .unwrap();
    assert!(
        request
            .url
            .as_str()
            .contains("/block_v2/2021-04-01T00%3A00%3A00Z/latest/")
    );
}

#[test]
fn primer_parameters_ride_along_on_any_operation() {
    let config = config();
    let common = CommonOptions {
        primer: vec![
            ("limit".to_string(), "5".to_string()),
            ("sort".to_string(), "-block_height".to_string()),
        ],
        ..Default::default()
    };
    let request = address::transactions(&config, 1, "0xABC", None, false, &common).unwrap();
    assert!(
        request
            .url
            .as_str()
            .ends_with("/?key=ckey_test&limit=5&sort=-block_height")
    );
}

#[test]
fn base_url_override_is_respected() {
    let config = config().with_base_url(Url::parse("http://localhost:8080/proxy").unwrap());
    let request =
        pricing::spot_prices(&config, &["BTC"], &CommonOptions::default()).unwrap();
    assert!(
        request
            .url
            .as_str()
            .starts_with("http://localhost:8080/proxy/v1/pricing/tickers/")
    );
}

#[test]
fn enum_errors_name_the_accepted_set() {
    let err = "AUD".parse::<QuoteCurrency>().unwrap_err();
    let message = err.to_string();
    assert!(message.contains("AUD"));
    assert!(message.contains("USD, CAD, EUR, SGD, INR, JPY, VND, CNY, KRW, RUB, TRY, ETH"));

    let err = "csv".parse::<OutputFormat>().unwrap_err();
    assert!(err.to_string().contains("JSON, CSV"));
}
