//! Pricing endpoints: spot prices, price volatility and price history.

use crate::config::ClientConfig;
use crate::error::CovalentError;
use crate::params::{DayRange, SortOrder};
use crate::request::{CommonOptions, CurrencyRule, EndpointSpec, ResolvedRequest, UrlAssembler};

static SPOT_PRICES: EndpointSpec = EndpointSpec {
    name: "spot_prices",
    currency: CurrencyRule::Query,
    pagination: true,
};

static PRICE_VOLATILITY: EndpointSpec = EndpointSpec {
    name: "price_volatility",
    currency: CurrencyRule::Query,
    pagination: true,
};

static HISTORICAL_PRICES: EndpointSpec = EndpointSpec {
    name: "historical_prices",
    currency: CurrencyRule::Path,
    pagination: true,
};

static HISTORICAL_PRICES_BY_ADDRESS: EndpointSpec = EndpointSpec {
    name: "historical_prices_by_address",
    currency: CurrencyRule::Path,
    pagination: true,
};

static HISTORICAL_PRICES_BY_ADDRESSES: EndpointSpec = EndpointSpec {
    name: "historical_prices_by_addresses",
    currency: CurrencyRule::Path,
    pagination: true,
};

static HISTORICAL_PRICES_BY_ADDRESSES_V2: EndpointSpec = EndpointSpec {
    name: "historical_prices_by_addresses_v2",
    currency: CurrencyRule::Path,
    pagination: true,
};

/// `GET /v1/pricing/tickers/`: spot prices for the given tickers, or for
/// all supported tickers when the list is empty.
pub fn spot_prices(
    config: &ClientConfig,
    tickers: &[&str],
    common: &CommonOptions,
) -> Result<ResolvedRequest, CovalentError> {
    UrlAssembler::new(&SPOT_PRICES, config)
        .lit("pricing")
        .lit("tickers")
        .query_list("tickers", tickers)
        .finish(common)
}

/// `GET /v1/pricing/volatility/`: 30-day price volatility, optionally
/// restricted to the given tickers.
pub fn price_volatility(
    config: &ClientConfig,
    tickers: &[&str],
    common: &CommonOptions,
) -> Result<ResolvedRequest, CovalentError> {
    UrlAssembler::new(&PRICE_VOLATILITY, config)
        .lit("pricing")
        .lit("volatility")
        .query_list("tickers", tickers)
        .finish(common)
}

/// `GET /v1/pricing/historical/{currency}/{ticker}/`: daily price history
/// for one ticker.
pub fn historical_prices(
    config: &ClientConfig,
    ticker: &str,
    range: &DayRange,
    sort: Option<SortOrder>,
    common: &CommonOptions,
) -> Result<ResolvedRequest, CovalentError> {
    UrlAssembler::new(&HISTORICAL_PRICES, config)
        .lit("pricing")
        .lit("historical")
        .currency(common)
        .ident("ticker", ticker)?
        .query_day("from", range.from)
        .query_day("to", range.to)
        .sort("prices-at-asc", sort)
        .finish(common)
}

/// `GET /v1/pricing/historical_by_address/{chain_id}/{currency}/{address}/`:
/// daily price history for one contract address.
pub fn historical_prices_by_address(
    config: &ClientConfig,
    chain_id: u64,
    address: &str,
    range: &DayRange,
    sort: Option<SortOrder>,
    common: &CommonOptions,
) -> Result<ResolvedRequest, CovalentError> {
    UrlAssembler::new(&HISTORICAL_PRICES_BY_ADDRESS, config)
        .lit("pricing")
        .lit("historical_by_address")
        .chain(chain_id)
        .currency(common)
        .ident("address", address)?
        .query_day("from", range.from)
        .query_day("to", range.to)
        .sort("prices-at-asc", sort)
        .finish(common)
}

/// `GET /v1/pricing/historical_by_addresses/{chain_id}/{currency}/{addresses}/`:
/// daily price history for several contract addresses at once.
pub fn historical_prices_by_addresses(
    config: &ClientConfig,
    chain_id: u64,
    addresses: &[&str],
    range: &DayRange,
    sort: Option<SortOrder>,
    common: &CommonOptions,
) -> Result<ResolvedRequest, CovalentError> {
    UrlAssembler::new(&HISTORICAL_PRICES_BY_ADDRESSES, config)
        .lit("pricing")
        .lit("historical_by_addresses")
        .chain(chain_id)
        .currency(common)
        .ident_list("addresses", addresses)?
        .query_day("from", range.from)
        .query_day("to", range.to)
        .sort("prices-at-asc", sort)
        .finish(common)
}

/// `GET /v1/pricing/historical_by_addresses_v2/{chain_id}/{currency}/{addresses}/`:
/// second revision of the multi-address price history endpoint.
pub fn historical_prices_by_addresses_v2(
    config: &ClientConfig,
    chain_id: u64,
    addresses: &[&str],
    range: &DayRange,
    sort: Option<SortOrder>,
    common: &CommonOptions,
) -> Result<ResolvedRequest, CovalentError> {
    UrlAssembler::new(&HISTORICAL_PRICES_BY_ADDRESSES_V2, config)
        .lit("pricing")
        .lit("historical_by_addresses_v2")
        .chain(chain_id)
        .currency(common)
        .ident_list("addresses", addresses)?
        .query_day("from", range.from)
        .query_day("to", range.to)
        .sort("prices-at-asc", sort)
        .finish(common)
}
