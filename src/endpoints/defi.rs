//! DeFi protocol snapshots: per-address positions under
//! `/address/{address}/stacks/{protocol}/...` and network-wide asset lists
//! under `/networks/{protocol}/assets/`.
//!
//! These are fixed-path variants of one pattern, so the per-protocol
//! functions delegate to two shared builders.

use crate::config::ClientConfig;
use crate::error::CovalentError;
use crate::request::{CommonOptions, CurrencyRule, EndpointSpec, ResolvedRequest, UrlAssembler};

/// Point-in-time position snapshots (`balances`, `positions`).
static STACK_SNAPSHOT: EndpointSpec = EndpointSpec {
    name: "defi_stack_snapshot",
    currency: CurrencyRule::Query,
    pagination: false,
};

/// Per-address activity histories (`acts`).
static STACK_ACTIVITY: EndpointSpec = EndpointSpec {
    name: "defi_stack_activity",
    currency: CurrencyRule::Query,
    pagination: true,
};

/// Network-wide asset lists.
static NETWORK_ASSETS: EndpointSpec = EndpointSpec {
    name: "defi_network_assets",
    currency: CurrencyRule::Query,
    pagination: true,
};

fn stack_resource<'a>(
    spec: &'static EndpointSpec,
    config: &'a ClientConfig,
    chain_id: u64,
    address: &str,
    protocol: &'static str,
    resource: &'static str,
) -> Result<UrlAssembler<'a>, CovalentError> {
    Ok(UrlAssembler::new(spec, config)
        .chain(chain_id)
        .lit("address")
        .ident("address", address)?
        .lit("stacks")
        .lit(protocol)
        .lit(resource))
}

fn stack_snapshot(
    config: &ClientConfig,
    chain_id: u64,
    address: &str,
    protocol: &'static str,
    resource: &'static str,
    common: &CommonOptions,
) -> Result<ResolvedRequest, CovalentError> {
    stack_resource(&STACK_SNAPSHOT, config, chain_id, address, protocol, resource)?.finish(common)
}

fn network_assets(
    config: &ClientConfig,
    chain_id: u64,
    protocol: &'static str,
    common: &CommonOptions,
) -> Result<ResolvedRequest, CovalentError> {
    UrlAssembler::new(&NETWORK_ASSETS, config)
        .chain(chain_id)
        .lit("networks")
        .lit(protocol)
        .lit("assets")
        .finish(common)
}

/// `GET .../stacks/aave_v2/balances/`: Aave v2 lending balances.
pub fn aave_v2_balances(
    config: &ClientConfig,
    chain_id: u64,
    address: &str,
    common: &CommonOptions,
) -> Result<ResolvedRequest, CovalentError> {
    stack_snapshot(config, chain_id, address, "aave_v2", "balances", common)
}

/// `GET .../stacks/aave/balances/`: Aave v1 lending balances.
pub fn aave_balances(
    config: &ClientConfig,
    chain_id: u64,
    address: &str,
    common: &CommonOptions,
) -> Result<ResolvedRequest, CovalentError> {
    stack_snapshot(config, chain_id, address, "aave", "balances", common)
}

/// `GET .../stacks/balancer/balances/`: Balancer pool balances.
pub fn balancer_balances(
    config: &ClientConfig,
    chain_id: u64,
    address: &str,
    common: &CommonOptions,
) -> Result<ResolvedRequest, CovalentError> {
    stack_snapshot(config, chain_id, address, "balancer", "balances", common)
}

/// `GET .../stacks/compound/balances/`: Compound supply and borrow
/// balances.
pub fn compound_balances(
    config: &ClientConfig,
    chain_id: u64,
    address: &str,
    common: &CommonOptions,
) -> Result<ResolvedRequest, CovalentError> {
    stack_snapshot(config, chain_id, address, "compound", "balances", common)
}

/// `GET .../stacks/compound/acts/`: Compound activity history.
pub fn compound_activity(
    config: &ClientConfig,
    chain_id: u64,
    address: &str,
    common: &CommonOptions,
) -> Result<ResolvedRequest, CovalentError> {
    stack_resource(&STACK_ACTIVITY, config, chain_id, address, "compound", "acts")?.finish(common)
}

/// `GET /v1/{chain_id}/networks/compound/assets/`: all Compound markets.
pub fn compound_assets(
    config: &ClientConfig,
    chain_id: u64,
    common: &CommonOptions,
) -> Result<ResolvedRequest, CovalentError> {
    network_assets(config, chain_id, "compound", common)
}

/// `GET .../stacks/curve/balances/`: Curve pool balances.
pub fn curve_balances(
    config: &ClientConfig,
    chain_id: u64,
    address: &str,
    common: &CommonOptions,
) -> Result<ResolvedRequest, CovalentError> {
    stack_snapshot(config, chain_id, address, "curve", "balances", common)
}

/// `GET .../stacks/farming/positions/`: farming positions across
/// supported pools.
pub fn farming_positions(
    config: &ClientConfig,
    chain_id: u64,
    address: &str,
    common: &CommonOptions,
) -> Result<ResolvedRequest, CovalentError> {
    stack_snapshot(config, chain_id, address, "farming", "positions", common)
}

/// `GET .../stacks/uniswap_v1/balances/`: Uniswap v1 liquidity balances.
pub fn uniswap_v1_balances(
    config: &ClientConfig,
    chain_id: u64,
    address: &str,
    common: &CommonOptions,
) -> Result<ResolvedRequest, CovalentError> {
    stack_snapshot(config, chain_id, address, "uniswap_v1", "balances", common)
}

/// `GET .../stacks/uniswap_v2/balances/`: Uniswap v2 liquidity balances.
pub fn uniswap_v2_balances(
    config: &ClientConfig,
    chain_id: u64,
    address: &str,
    common: &CommonOptions,
) -> Result<ResolvedRequest, CovalentError> {
    stack_snapshot(config, chain_id, address, "uniswap_v2", "balances", common)
}

/// `GET /v1/{chain_id}/networks/uniswap_v2/assets/`: all Uniswap v2
/// pools.
pub fn uniswap_v2_assets(
    config: &ClientConfig,
    chain_id: u64,
    common: &CommonOptions,
) -> Result<ResolvedRequest, CovalentError> {
    network_assets(config, chain_id, "uniswap_v2", common)
}

/// `GET .../stacks/sushiswap/balances/`: SushiSwap liquidity balances.
pub fn sushiswap_balances(
    config: &ClientConfig,
    chain_id: u64,
    address: &str,
    common: &CommonOptions,
) -> Result<ResolvedRequest, CovalentError> {
    stack_snapshot(config, chain_id, address, "sushiswap", "balances", common)
}

/// `GET .../stacks/sushiswap/acts/`: SushiSwap liquidity transactions;
/// `swaps` additionally includes swap-level insight.
pub fn sushiswap_activity(
    config: &ClientConfig,
    chain_id: u64,
    address: &str,
    swaps: bool,
    common: &CommonOptions,
) -> Result<ResolvedRequest, CovalentError> {
    stack_resource(&STACK_ACTIVITY, config, chain_id, address, "sushiswap", "acts")?
        .flag("swaps", swaps)
        .finish(common)
}

/// `GET /v1/{chain_id}/networks/sushiswap/assets/`: all SushiSwap pools.
pub fn sushiswap_assets(
    config: &ClientConfig,
    chain_id: u64,
    common: &CommonOptions,
) -> Result<ResolvedRequest, CovalentError> {
    network_assets(config, chain_id, "sushiswap", common)
}

/// `GET /v1/{chain_id}/networks/pancakeswap/assets/`: all PancakeSwap
/// pools.
pub fn pancakeswap_assets(
    config: &ClientConfig,
    chain_id: u64,
    common: &CommonOptions,
) -> Result<ResolvedRequest, CovalentError> {
    network_assets(config, chain_id, "pancakeswap", common)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_config;
    use crate::params::QuoteCurrency;

    const ADDRESS: &str = "0x5A6D3B6BF795A3160DC7C139DEE9F60CE0F00CA6";

    #[test]
    fn stack_paths_follow_the_shared_pattern() {
        let config = test_config();
        let request =
            aave_v2_balances(&config, 1, ADDRESS, &CommonOptions::default()).unwrap();
        assert_eq!(
            request.url.as_str(),
            "https://api.covalenthq.com/v1/1/address/0x5a6d3b6bf795a3160dc7c139dee9f60ce0f00ca6/stacks/aave_v2/balances/?key=ckey_test"
        );

        let request =
            farming_positions(&config, 1, ADDRESS, &CommonOptions::default()).unwrap();
        assert!(request.url.path().ends_with("/stacks/farming/positions/"));
    }

    #[test]
    fn network_assets_have_no_address_segment() {
        let config = test_config();
        let request = uniswap_v2_assets(&config, 1, &CommonOptions::default()).unwrap();
        assert_eq!(
            request.url.as_str(),
            "https://api.covalenthq.com/v1/1/networks/uniswap_v2/assets/?key=ckey_test"
        );

        let request = pancakeswap_assets(&config, 56, &CommonOptions::default()).unwrap();
        assert!(
            request
                .url
                .path()
                .starts_with("/v1/56/networks/pancakeswap/")
        );
    }

    #[test]
    fn sushiswap_activity_toggles_swap_insight() {
        let config = test_config();
        let request =
            sushiswap_activity(&config, 1, ADDRESS, true, &CommonOptions::default()).unwrap();
        assert!(request.url.as_str().contains("swaps=true"));

        let request =
            sushiswap_activity(&config, 1, ADDRESS, false, &CommonOptions::default()).unwrap();
        assert!(!request.url.as_str().contains("swaps"));
    }

    #[test]
    fn snapshots_carry_the_quote_currency_when_configured() {
        let config = test_config().with_quote_currency(QuoteCurrency::Cad);
        let request =
            compound_balances(&config, 1, ADDRESS, &CommonOptions::default()).unwrap();
        assert!(request.url.as_str().contains("quote-currency=cad"));
    }

    type BalancesFn =
        fn(&ClientConfig, u64, &str, &CommonOptions) -> Result<ResolvedRequest, CovalentError>;

    #[test]
    fn blank_address_is_rejected_across_protocols() {
        let config = test_config();
        let builders: [BalancesFn; 6] = [
            aave_balances,
            balancer_balances,
            curve_balances,
            uniswap_v1_balances,
            uniswap_v2_balances,
            sushiswap_balances,
        ];
        for builder in builders {
            let err = builder(&config, 1, "", &CommonOptions::default()).unwrap_err();
            assert!(matches!(err, CovalentError::MissingParameter("address")));
        }
    }
}
