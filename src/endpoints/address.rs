//! Address-centric endpoints: balances, portfolio, transactions, transfers.

use crate::config::ClientConfig;
use crate::error::CovalentError;
use crate::params::SortOrder;
use crate::request::{CommonOptions, CurrencyRule, EndpointSpec, ResolvedRequest, UrlAssembler};

static TOKEN_BALANCES: EndpointSpec = EndpointSpec {
    name: "token_balances",
    currency: CurrencyRule::Query,
    pagination: false,
};

static PORTFOLIO: EndpointSpec = EndpointSpec {
    name: "portfolio",
    currency: CurrencyRule::Query,
    pagination: false,
};

static TRANSACTIONS: EndpointSpec = EndpointSpec {
    name: "transactions",
    currency: CurrencyRule::Query,
    pagination: true,
};

static ERC20_TRANSFERS: EndpointSpec = EndpointSpec {
    name: "erc20_transfers",
    currency: CurrencyRule::Query,
    pagination: true,
};

static TRANSACTION: EndpointSpec = EndpointSpec {
    name: "transaction",
    currency: CurrencyRule::Query,
    pagination: false,
};

/// `GET /v1/{chain_id}/address/{address}/balances_v2/`: token balances for
/// an address, optionally including NFTs.
///
/// `no_nft_fetch` skips fetching external NFT metadata, which speeds the
/// call up considerably when `nft` is set.
pub fn token_balances(
    config: &ClientConfig,
    chain_id: u64,
    address: &str,
    nft: bool,
    no_nft_fetch: bool,
    common: &CommonOptions,
) -> Result<ResolvedRequest, CovalentError> {
    UrlAssembler::new(&TOKEN_BALANCES, config)
        .chain(chain_id)
        .lit("address")
        .ident("address", address)?
        .lit("balances_v2")
        .flag("nft", nft)
        .flag("no-nft-fetch", no_nft_fetch)
        .finish(common)
}

/// `GET /v1/{chain_id}/address/{address}/portfolio_v2/`: historical
/// portfolio value over time.
pub fn portfolio(
    config: &ClientConfig,
    chain_id: u64,
    address: &str,
    common: &CommonOptions,
) -> Result<ResolvedRequest, CovalentError> {
    UrlAssembler::new(&PORTFOLIO, config)
        .chain(chain_id)
        .lit("address")
        .ident("address", address)?
        .lit("portfolio_v2")
        .finish(common)
}

/// `GET /v1/{chain_id}/address/{address}/transactions_v2/`: all
/// transactions for an address, newest first unless sorted ascending.
pub fn transactions(
    config: &ClientConfig,
    chain_id: u64,
    address: &str,
    sort: Option<SortOrder>,
    no_logs: bool,
    common: &CommonOptions,
) -> Result<ResolvedRequest, CovalentError> {
    UrlAssembler::new(&TRANSACTIONS, config)
        .chain(chain_id)
        .lit("address")
        .ident("address", address)?
        .lit("transactions_v2")
        .sort("block-signed-at-asc", sort)
        .flag("no-logs", no_logs)
        .finish(common)
}

/// `GET /v1/{chain_id}/address/{address}/transfers_v2/`: ERC-20 token
/// transfers for an address, filtered by the given token contract.
pub fn erc20_transfers(
    config: &ClientConfig,
    chain_id: u64,
    address: &str,
    contract_address: &str,
    common: &CommonOptions,
) -> Result<ResolvedRequest, CovalentError> {
    UrlAssembler::new(&ERC20_TRANSFERS, config)
        .chain(chain_id)
        .lit("address")
        .ident("address", address)?
        .lit("transfers_v2")
        .query_ident("contract-address", contract_address)?
        .finish(common)
}

/// `GET /v1/{chain_id}/transaction_v2/{tx_hash}/`: a single transaction
/// with its decoded log events.
pub fn transaction(
    config: &ClientConfig,
    chain_id: u64,
    tx_hash: &str,
    no_logs: bool,
    common: &CommonOptions,
) -> Result<ResolvedRequest, CovalentError> {
    UrlAssembler::new(&TRANSACTION, config)
        .chain(chain_id)
        .lit("transaction_v2")
        .ident("tx-hash", tx_hash)?
        .flag("no-logs", no_logs)
        .finish(common)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_config;
    use crate::params::{PageOptions, QuoteCurrency};

    const ADDRESS: &str = "0x5a6D3b6bf795a3160dc7C139DEE9F60Ce0F00cA6";

    #[test]
    fn balances_lowercase_the_address_and_render_flags() {
        let config = test_config();
        let request = token_balances(
            &config,
            1,
            ADDRESS,
            true,
            true,
            &CommonOptions::default(),
        )
        .unwrap();
        assert_eq!(
            request.url.as_str(),
            "https://api.covalenthq.com/v1/1/address/0x5a6d3b6bf795a3160dc7c139dee9f60ce0f00ca6/balances_v2/?key=ckey_test&nft=true&no-nft-fetch=true"
        );
    }

    #[test]
    fn unset_flags_are_omitted() {
        let config = test_config();
        let request =
            token_balances(&config, 1, ADDRESS, false, false, &CommonOptions::default()).unwrap();
        assert!(!request.url.as_str().contains("nft"));
    }

    #[test]
    fn blank_address_is_rejected() {
        let config = test_config();
        let err = portfolio(&config, 1, "   ", &CommonOptions::default()).unwrap_err();
        assert!(matches!(err, CovalentError::MissingParameter("address")));
    }

    #[test]
    fn transactions_carry_sort_logs_and_pagination() {
        let config = test_config();
        let common = CommonOptions {
            page: Some(PageOptions::new(3, 25).unwrap()),
            quote_currency: Some(QuoteCurrency::Usd),
            ..Default::default()
        };
        let request = transactions(
            &config,
            137,
            ADDRESS,
            Some(SortOrder::Ascending),
            true,
            &common,
        )
        .unwrap();
        assert!(request.url.path().starts_with("/v1/137/address/"));
        assert!(request.url.as_str().ends_with(
            "transactions_v2/?key=ckey_test&block-signed-at-asc=true&no-logs=true&page-number=3&page-size=25&quote-currency=usd"
        ));
    }

    #[test]
    fn transfers_require_a_contract_filter() {
        let config = test_config();
        let err =
            erc20_transfers(&config, 1, ADDRESS, " ", &CommonOptions::default()).unwrap_err();
        assert!(matches!(
            err,
            CovalentError::MissingParameter("contract-address")
        ));

        let request = erc20_transfers(
            &config,
            1,
            ADDRESS,
            "0xDAC17F958D2EE523A2206206994597C13D831EC7",
            &CommonOptions::default(),
        )
        .unwrap();
        assert!(
            request
                .url
                .as_str()
                .contains("contract-address=0xdac17f958d2ee523a2206206994597c13d831ec7")
        );
    }

    #[test]
    fn single_transaction_path_uses_the_hash() {
        let config = test_config();
        let request = transaction(
            &config,
            1,
            "0xB8D2C94A17AF92F0D6BE197F120871B1254B5DF01FE7032EE359CE8D4B006AB7",
            false,
            &CommonOptions::default(),
        )
        .unwrap();
        assert!(request.url.path().contains(
            "/transaction_v2/0xb8d2c94a17af92f0d6be197f120871b1254b5df01fe7032ee359ce8d4b006ab7/"
        ));
    }
}
