//! Token endpoints: holder snapshots, holder changes and contract metadata.

use crate::config::ClientConfig;
use crate::error::CovalentError;
use crate::request::{CommonOptions, CurrencyRule, EndpointSpec, ResolvedRequest, UrlAssembler};

static TOKEN_HOLDERS: EndpointSpec = EndpointSpec {
    name: "token_holders",
    currency: CurrencyRule::None,
    pagination: true,
};

static TOKEN_HOLDER_CHANGES: EndpointSpec = EndpointSpec {
    name: "token_holder_changes",
    currency: CurrencyRule::None,
    pagination: true,
};

static CONTRACT_METADATA: EndpointSpec = EndpointSpec {
    name: "contract_metadata",
    currency: CurrencyRule::None,
    pagination: true,
};

/// `GET /v1/{chain_id}/tokens/{contract_address}/token_holders/`: token
/// holders as of a block height; absent height means the latest block,
/// resolved server-side.
pub fn token_holders(
    config: &ClientConfig,
    chain_id: u64,
    contract_address: &str,
    block_height: Option<u64>,
    common: &CommonOptions,
) -> Result<ResolvedRequest, CovalentError> {
    UrlAssembler::new(&TOKEN_HOLDERS, config)
        .chain(chain_id)
        .lit("tokens")
        .ident("contract-address", contract_address)?
        .lit("token_holders")
        .query_u64_opt("block-height", block_height)
        .finish(common)
}

/// `GET /v1/{chain_id}/tokens/{contract_address}/token_holders_changes/`:
/// holder-balance changes between two block heights.
pub fn token_holder_changes(
    config: &ClientConfig,
    chain_id: u64,
    contract_address: &str,
    starting_block: u64,
    ending_block: Option<u64>,
    common: &CommonOptions,
) -> Result<ResolvedRequest, CovalentError> {
    UrlAssembler::new(&TOKEN_HOLDER_CHANGES, config)
        .chain(chain_id)
        .lit("tokens")
        .ident("contract-address", contract_address)?
        .lit("token_holders_changes")
        .query_u64("starting-block", starting_block)
        .query_u64_opt("ending-block", ending_block)
        .finish(common)
}

/// `GET /v1/{chain_id}/tokens/tokenlists/{id}/`: contract metadata for a
/// curated token list.
///
/// The id is free text, not an enumeration: the service accepts the `all`
/// sentinel as well as named lists, so local validation only rejects blank
/// input and the id is interpolated with its case intact.
pub fn contract_metadata(
    config: &ClientConfig,
    chain_id: u64,
    id: &str,
    common: &CommonOptions,
) -> Result<ResolvedRequest, CovalentError> {
    UrlAssembler::new(&CONTRACT_METADATA, config)
        .chain(chain_id)
        .lit("tokens")
        .lit("tokenlists")
        .ident_exact("id", id)?
        .finish(common)
}
