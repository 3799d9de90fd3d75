//! NFT endpoints: external metadata, token-id enumeration and history.

use crate::config::ClientConfig;
use crate::error::CovalentError;
use crate::request::{CommonOptions, CurrencyRule, EndpointSpec, ResolvedRequest, UrlAssembler};

static NFT_METADATA: EndpointSpec = EndpointSpec {
    name: "nft_metadata",
    currency: CurrencyRule::None,
    pagination: false,
};

static NFT_TOKEN_IDS: EndpointSpec = EndpointSpec {
    name: "nft_token_ids",
    currency: CurrencyRule::None,
    pagination: true,
};

static NFT_TRANSACTIONS: EndpointSpec = EndpointSpec {
    name: "nft_transactions",
    currency: CurrencyRule::None,
    pagination: false,
};

/// `GET /v1/{chain_id}/tokens/{contract_address}/nft_metadata/{token_id}/`:
/// external metadata (image, attributes) for one NFT.
///
/// Token ids are opaque decimal strings since ERC-721 ids may exceed 64
/// bits.
pub fn nft_metadata(
    config: &ClientConfig,
    chain_id: u64,
    contract_address: &str,
    token_id: &str,
    common: &CommonOptions,
) -> Result<ResolvedRequest, CovalentError> {
    UrlAssembler::new(&NFT_METADATA, config)
        .chain(chain_id)
        .lit("tokens")
        .ident("contract-address", contract_address)?
        .lit("nft_metadata")
        .ident("token-id", token_id)?
        .finish(common)
}

/// `GET /v1/{chain_id}/tokens/{contract_address}/nft_token_ids/`: all
/// token ids minted by a contract.
pub fn nft_token_ids(
    config: &ClientConfig,
    chain_id: u64,
    contract_address: &str,
    common: &CommonOptions,
) -> Result<ResolvedRequest, CovalentError> {
    UrlAssembler::new(&NFT_TOKEN_IDS, config)
        .chain(chain_id)
        .lit("tokens")
        .ident("contract-address", contract_address)?
        .lit("nft_token_ids")
        .finish(common)
}

/// `GET /v1/{chain_id}/tokens/{contract_address}/nft_transactions/{token_id}/`:
/// transaction history for one NFT.
pub fn nft_transactions(
    config: &ClientConfig,
    chain_id: u64,
    contract_address: &str,
    token_id: &str,
    common: &CommonOptions,
) -> Result<ResolvedRequest, CovalentError> {
    UrlAssembler::new(&NFT_TRANSACTIONS, config)
        .chain(chain_id)
        .lit("tokens")
        .ident("contract-address", contract_address)?
        .lit("nft_transactions")
        .ident("token-id", token_id)?
        .finish(common)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_config;

    const CONTRACT: &str = "0xBC4CA0EDA7647A8AB7C2061C2E118A18A936F13D";

    #[test]
    fn metadata_path_interleaves_contract_and_token_id() {
        let config = test_config();
        let request =
            nft_metadata(&config, 1, CONTRACT, "7626", &CommonOptions::default()).unwrap();
        assert_eq!(
            request.url.as_str(),
            "https://api.covalenthq.com/v1/1/tokens/0xbc4ca0eda7647a8ab7c2061c2e118a18a936f13d/nft_metadata/7626/?key=ckey_test"
        );
    }

    #[test]
    fn blank_token_id_is_rejected() {
        let config = test_config();
        let err =
            nft_transactions(&config, 1, CONTRACT, " ", &CommonOptions::default()).unwrap_err();
        assert!(matches!(err, CovalentError::MissingParameter("token-id")));
    }

    #[test]
    fn token_id_enumeration_has_no_token_id_segment() {
        let config = test_config();
        let request = nft_token_ids(&config, 1, CONTRACT, &CommonOptions::default()).unwrap();
        assert!(request.url.path().ends_with("/nft_token_ids/"));
    }
}
