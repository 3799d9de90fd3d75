//! Log-event endpoints: decoded events by contract address or topic hash.

use crate::config::ClientConfig;
use crate::error::CovalentError;
use crate::request::{CommonOptions, CurrencyRule, EndpointSpec, ResolvedRequest, UrlAssembler};

static LOG_EVENTS_BY_CONTRACT: EndpointSpec = EndpointSpec {
    name: "log_events_by_contract",
    currency: CurrencyRule::None,
    pagination: true,
};

static LOG_EVENTS_BY_TOPICS: EndpointSpec = EndpointSpec {
    name: "log_events_by_topics",
    currency: CurrencyRule::None,
    pagination: true,
};

/// `GET /v1/{chain_id}/events/address/{contract_address}/`: decoded log
/// events emitted by a contract within a block range.
///
/// The remote service requires an explicit block range on this endpoint.
pub fn log_events_by_contract(
    config: &ClientConfig,
    chain_id: u64,
    contract_address: &str,
    starting_block: u64,
    ending_block: u64,
    common: &CommonOptions,
) -> Result<ResolvedRequest, CovalentError> {
    UrlAssembler::new(&LOG_EVENTS_BY_CONTRACT, config)
        .chain(chain_id)
        .lit("events")
        .lit("address")
        .ident("contract-address", contract_address)?
        .query_u64("starting-block", starting_block)
        .query_u64("ending-block", ending_block)
        .finish(common)
}

/// `GET /v1/{chain_id}/events/topics/{topics}/`: decoded log events
/// matching one or more topic hashes, optionally filtered by sender.
pub fn log_events_by_topics(
    config: &ClientConfig,
    chain_id: u64,
    topics: &[&str],
    sender_address: Option<&str>,
    starting_block: u64,
    ending_block: u64,
    common: &CommonOptions,
) -> Result<ResolvedRequest, CovalentError> {
    UrlAssembler::new(&LOG_EVENTS_BY_TOPICS, config)
        .chain(chain_id)
        .lit("events")
        .lit("topics")
        .ident_list("topics", topics)?
        .query_ident_opt("sender-address", sender_address)
        .query_u64("starting-block", starting_block)
        .query_u64("ending-block", ending_block)
        .finish(common)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_config;

    const TRANSFER_TOPIC: &str =
        "0xDDF252AD1BE2C89B69C2B068FC378DAA952BA7F163C4A11628F55A4DF523B3EF";

    #[test]
    fn contract_events_carry_the_block_range() {
        let config = test_config();
        let request = log_events_by_contract(
            &config,
            1,
            "0xC0DA01A04C3F3E0BE433606045BB7017A7323E38",
            12_115_107,
            12_240_004,
            &CommonOptions::default(),
        )
        .unwrap();
        assert_eq!(
            request.url.as_str(),
            "https://api.covalenthq.com/v1/1/events/address/0xc0da01a04c3f3e0be433606045bb7017a7323e38/?key=ckey_test&starting-block=12115107&ending-block=12240004"
        );
    }

    #[test]
    fn topic_events_join_hashes_in_the_path() {
        let config = test_config();
        let request = log_events_by_topics(
            &config,
            1,
            &[TRANSFER_TOPIC, " 0xAAA "],
            None,
            100,
            200,
            &CommonOptions::default(),
        )
        .unwrap();
        let path = request.url.path();
        assert!(path.contains("/events/topics/"));
        assert!(path.contains(&TRANSFER_TOPIC.to_lowercase()));
        assert!(path.contains("%2C0xaaa"));
    }

    #[test]
    fn sender_filter_is_optional_and_lowercased() {
        let config = test_config();
        let request = log_events_by_topics(
            &config,
            1,
            &[TRANSFER_TOPIC],
            Some("0xABC123"),
            100,
            200,
            &CommonOptions::default(),
        )
        .unwrap();
        assert!(request.url.as_str().contains("sender-address=0xabc123"));

        let request = log_events_by_topics(
            &config,
            1,
            &[TRANSFER_TOPIC],
            Some("  "),
            100,
            200,
            &CommonOptions::default(),
        )
        .unwrap();
        assert!(!request.url.as_str().contains("sender-address"));
    }

    #[test]
    fn empty_topic_list_is_rejected() {
        let config = test_config();
        let err = log_events_by_topics(&config, 1, &[], None, 1, 2, &CommonOptions::default())
            .unwrap_err();
        assert!(matches!(err, CovalentError::MissingParameter("topics")));
    }
}
