//! Block endpoints: single block lookup and height-range resolution.

use chrono::{DateTime, Utc};

use crate::config::ClientConfig;
use crate::error::CovalentError;
use crate::request::{CommonOptions, CurrencyRule, EndpointSpec, ResolvedRequest, UrlAssembler};

static BLOCK: EndpointSpec = EndpointSpec {
    name: "block",
    currency: CurrencyRule::None,
    pagination: false,
};

static BLOCK_HEIGHTS: EndpointSpec = EndpointSpec {
    name: "block_heights",
    currency: CurrencyRule::None,
    pagination: true,
};

/// `GET /v1/{chain_id}/block_v2/{height}/`: a single block, or the latest
/// block when no height is given.
pub fn block(
    config: &ClientConfig,
    chain_id: u64,
    height: Option<u64>,
    common: &CommonOptions,
) -> Result<ResolvedRequest, CovalentError> {
    UrlAssembler::new(&BLOCK, config)
        .chain(chain_id)
        .lit("block_v2")
        .height_or_latest(height)
        .finish(common)
}

/// `GET /v1/{chain_id}/block_v2/{start}/{end}/`: block heights within a
/// timestamp range. The end bound defaults to the literal `latest`.
pub fn block_heights(
    config: &ClientConfig,
    chain_id: u64,
    start: DateTime<Utc>,
    end: Option<DateTime<Utc>>,
    common: &CommonOptions,
) -> Result<ResolvedRequest, CovalentError> {
    UrlAssembler::new(&BLOCK_HEIGHTS, config)
        .chain(chain_id)
        .lit("block_v2")
        .timestamp_or_latest(Some(start))
        .timestamp_or_latest(end)
        .finish(common)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_config;

    #[test]
    fn absent_height_renders_latest() {
        let config = test_config();
        let request = block(&config, 1, None, &CommonOptions::default()).unwrap();
        assert_eq!(
            request.url.as_str(),
            "https://api.covalenthq.com/v1/1/block_v2/latest/?key=ckey_test"
        );
    }

    #[test]
    fn explicit_height_renders_decimal() {
        let config = test_config();
        let request = block(&config, 1, Some(12_345_678), &CommonOptions::default()).unwrap();
        assert!(request.url.path().contains("/block_v2/12345678/"));
    }

    #[test]
    fn height_range_encodes_colons_and_defaults_end_to_latest() {
        let config = test_config();
        let start = "2021-04-01T00:00:00Z".parse::<DateTime<Utc>>().unwrap();
        let request = block_heights(&config, 1, start, None, &CommonOptions::default()).unwrap();
        assert_eq!(
            request.url.as_str(),
            "https://api.covalenthq.com/v1/1/block_v2/2021-04-01T00%3A00%3A00Z/latest/?key=ckey_test"
        );
    }

    #[test]
    fn explicit_end_bound_is_rendered() {
        let config = test_config();
        let start = "2021-04-01T00:00:00Z".parse::<DateTime<Utc>>().unwrap();
        let end = "2021-04-02T12:30:00Z".parse::<DateTime<Utc>>().unwrap();
        let request =
            block_heights(&config, 1, start, Some(end), &CommonOptions::default()).unwrap();
        assert!(
            request
                .url
                .as_str()
                .contains("/2021-04-01T00%3A00%3A00Z/2021-04-02T12%3A30%3A00Z/")
        );
    }
}
