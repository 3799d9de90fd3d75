//! High-level asynchronous client for the Covalent API.
//!
//! [`CovalentClient`] pairs a [`ClientConfig`] with the HTTP transport and
//! exposes one async method per remote endpoint. Each method is a thin
//! wrapper around the corresponding pure builder in
//! [`endpoints`](crate::endpoints): all parameter validation happens before
//! any network traffic, and the raw response body is returned to the caller
//! unparsed.
//!
//! # Example
//!
//! ```rust,no_run
//! use covalent_client::{ClientConfig, CommonOptions, CovalentClient};
//!
//! # async fn example() -> Result<(), covalent_client::CovalentError> {
//! let config = ClientConfig::default().with_api_key("ckey_...");
//! let client = CovalentClient::new(config)?;
//!
//! let body = client
//!     .spot_prices(&["BTC", "ETH"], &CommonOptions::default())
//!     .await?;
//! println!("{body}");
//! # Ok(())
//! # }
//! ```

use std::time::Duration;

use chrono::{DateTime, Utc};
use log::debug;

use crate::config::ClientConfig;
use crate::endpoints::{address, block, defi, events, nft, pricing, tokens};
use crate::error::CovalentError;
use crate::http::HttpClient;
use crate::params::{DayRange, SortOrder};
use crate::request::{CommonOptions, ResolvedRequest};

/// Client for the Covalent blockchain-data API.
///
/// Cheap to share behind an `Arc` and safe to use from multiple async tasks
/// concurrently; calls are independent and no state is retained between
/// them beyond transport connection pooling and latency bookkeeping.
pub struct CovalentClient {
    config: ClientConfig,
    http: HttpClient,
}

impl CovalentClient {
    /// Creates a client with the default 30 second request timeout.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized (e.g. TLS
    /// backend failure). A missing API key is not an error here; it is
    /// reported per call, before the request is issued.
    pub fn new(config: ClientConfig) -> Result<Self, CovalentError> {
        let http = HttpClient::new()?;
        Ok(Self { config, http })
    }

    /// Creates a client with a custom request timeout.
    pub fn with_timeout(config: ClientConfig, timeout: Duration) -> Result<Self, CovalentError> {
        let http = HttpClient::with_timeout(timeout)?;
        Ok(Self { config, http })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Round-trip time of the most recent request, if any was made.
    pub async fn last_request_latency(&self) -> Option<Duration> {
        self.http.get_latency().await
    }

    async fn execute(&self, request: ResolvedRequest) -> Result<String, CovalentError> {
        // The URL query carries the API key; log the path only.
        debug!(path = request.url.path(); "HTTP: GET");
        self.http.execute(&request).await
    }

    // Pricing

    /// Spot prices for the given tickers, or all tickers when empty.
    pub async fn spot_prices(
        &self,
        tickers: &[&str],
        common: &CommonOptions,
    ) -> Result<String, CovalentError> {
        self.execute(pricing::spot_prices(&self.config, tickers, common)?)
            .await
    }

    /// 30-day price volatility, optionally restricted to the given tickers.
    pub async fn price_volatility(
        &self,
        tickers: &[&str],
        common: &CommonOptions,
    ) -> Result<String, CovalentError> {
        self.execute(pricing::price_volatility(&self.config, tickers, common)?)
            .await
    }

    /// Daily price history for one ticker.
    pub async fn historical_prices(
        &self,
        ticker: &str,
        range: &DayRange,
        sort: Option<SortOrder>,
        common: &CommonOptions,
    ) -> Result<String, CovalentError> {
        self.execute(pricing::historical_prices(
            &self.config,
            ticker,
            range,
            sort,
            common,
        )?)
        .await
    }

    /// Daily price history for one contract address.
    pub async fn historical_prices_by_address(
        &self,
        chain_id: u64,
        address: &str,
        range: &DayRange,
        sort: Option<SortOrder>,
        common: &CommonOptions,
    ) -> Result<String, CovalentError> {
        self.execute(pricing::historical_prices_by_address(
            &self.config,
            chain_id,
            address,
            range,
            sort,
            common,
        )?)
        .await
    }

    /// Daily price history for several contract addresses at once.
    pub async fn historical_prices_by_addresses(
        &self,
        chain_id: u64,
        addresses: &[&str],
        range: &DayRange,
        sort: Option<SortOrder>,
        common: &CommonOptions,
    ) -> Result<String, CovalentError> {
        self.execute(pricing::historical_prices_by_addresses(
            &self.config,
            chain_id,
            addresses,
            range,
            sort,
            common,
        )?)
        .await
    }

    /// Second revision of the multi-address price history endpoint.
    pub async fn historical_prices_by_addresses_v2(
        &self,
        chain_id: u64,
        addresses: &[&str],
        range: &DayRange,
        sort: Option<SortOrder>,
        common: &CommonOptions,
    ) -> Result<String, CovalentError> {
        self.execute(pricing::historical_prices_by_addresses_v2(
            &self.config,
            chain_id,
            addresses,
            range,
            sort,
            common,
        )?)
        .await
    }

    // Address

    /// Token balances for an address, optionally including NFTs.
    pub async fn token_balances(
        &self,
        chain_id: u64,
        address: &str,
        nft: bool,
        no_nft_fetch: bool,
        common: &CommonOptions,
    ) -> Result<String, CovalentError> {
        self.execute(address::token_balances(
            &self.config,
            chain_id,
            address,
            nft,
            no_nft_fetch,
            common,
        )?)
        .await
    }

    /// Historical portfolio value over time for an address.
    pub async fn portfolio(
        &self,
        chain_id: u64,
        address: &str,
        common: &CommonOptions,
    ) -> Result<String, CovalentError> {
        self.execute(address::portfolio(&self.config, chain_id, address, common)?)
            .await
    }

    /// All transactions for an address.
    pub async fn transactions(
        &self,
        chain_id: u64,
        address: &str,
        sort: Option<SortOrder>,
        no_logs: bool,
        common: &CommonOptions,
    ) -> Result<String, CovalentError> {
        self.execute(address::transactions(
            &self.config,
            chain_id,
            address,
            sort,
            no_logs,
            common,
        )?)
        .await
    }

    /// ERC-20 transfers for an address, filtered by token contract.
    pub async fn erc20_transfers(
        &self,
        chain_id: u64,
        address: &str,
        contract_address: &str,
        common: &CommonOptions,
    ) -> Result<String, CovalentError> {
        self.execute(address::erc20_transfers(
            &self.config,
            chain_id,
            address,
            contract_address,
            common,
        )?)
        .await
    }

    /// A single transaction with its decoded log events.
    pub async fn transaction(
        &self,
        chain_id: u64,
        tx_hash: &str,
        no_logs: bool,
        common: &CommonOptions,
    ) -> Result<String, CovalentError> {
        self.execute(address::transaction(
            &self.config,
            chain_id,
            tx_hash,
            no_logs,
            common,
        )?)
        .await
    }

    // Block

    /// A single block, or the latest block when no height is given.
    pub async fn block(
        &self,
        chain_id: u64,
        height: Option<u64>,
        common: &CommonOptions,
    ) -> Result<String, CovalentError> {
        self.execute(block::block(&self.config, chain_id, height, common)?)
            .await
    }

    /// Block heights within a timestamp range.
    pub async fn block_heights(
        &self,
        chain_id: u64,
        start: DateTime<Utc>,
        end: Option<DateTime<Utc>>,
        common: &CommonOptions,
    ) -> Result<String, CovalentError> {
        self.execute(block::block_heights(
            &self.config,
            chain_id,
            start,
            end,
            common,
        )?)
        .await
    }

    // Log events

    /// Decoded log events emitted by a contract within a block range.
    pub async fn log_events_by_contract(
        &self,
        chain_id: u64,
        contract_address: &str,
        starting_block: u64,
        ending_block: u64,
        common: &CommonOptions,
    ) -> Result<String, CovalentError> {
        self.execute(events::log_events_by_contract(
            &self.config,
            chain_id,
            contract_address,
            starting_block,
            ending_block,
            common,
        )?)
        .await
    }

    /// Decoded log events matching topic hashes, optionally filtered by
    /// sender.
    pub async fn log_events_by_topics(
        &self,
        chain_id: u64,
        topics: &[&str],
        sender_address: Option<&str>,
        starting_block: u64,
        ending_block: u64,
        common: &CommonOptions,
    ) -> Result<String, CovalentError> {
        self.execute(events::log_events_by_topics(
            &self.config,
            chain_id,
            topics,
            sender_address,
            starting_block,
            ending_block,
            common,
        )?)
        .await
    }

    // NFT

    /// External metadata for one NFT.
    pub async fn nft_metadata(
        &self,
        chain_id: u64,
        contract_address: &str,
        token_id: &str,
        common: &CommonOptions,
    ) -> Result<String, CovalentError> {
        self.execute(nft::nft_metadata(
            &self.config,
            chain_id,
            contract_address,
            token_id,
            common,
        )?)
        .await
    }

    /// All token ids minted by a contract.
    pub async fn nft_token_ids(
        &self,
        chain_id: u64,
        contract_address: &str,
        common: &CommonOptions,
    ) -> Result<String, CovalentError> {
        self.execute(nft::nft_token_ids(
            &self.config,
            chain_id,
            contract_address,
            common,
        )?)
        .await
    }

    /// Transaction history for one NFT.
    pub async fn nft_transactions(
        &self,
        chain_id: u64,
        contract_address: &str,
        token_id: &str,
        common: &CommonOptions,
    ) -> Result<String, CovalentError> {
        self.execute(nft::nft_transactions(
            &self.config,
            chain_id,
            contract_address,
            token_id,
            common,
        )?)
        .await
    }

    // Token holders and metadata

    /// Token holders as of a block height (latest when absent).
    pub async fn token_holders(
        &self,
        chain_id: u64,
        contract_address: &str,
        block_height: Option<u64>,
        common: &CommonOptions,
    ) -> Result<String, CovalentError> {
        self.execute(tokens::token_holders(
            &self.config,
            chain_id,
            contract_address,
            block_height,
            common,
        )?)
        .await
    }

    /// Holder-balance changes between two block heights.
    pub async fn token_holder_changes(
        &self,
        chain_id: u64,
        contract_address: &str,
        starting_block: u64,
        ending_block: Option<u64>,
        common: &CommonOptions,
    ) -> Result<String, CovalentError> {
        self.execute(tokens::token_holder_changes(
            &self.config,
            chain_id,
            contract_address,
            starting_block,
            ending_block,
            common,
        )?)
        .await
    }

    /// Contract metadata for a curated token list (`all` for every list).
    pub async fn contract_metadata(
        &self,
        chain_id: u64,
        id: &str,
        common: &CommonOptions,
    ) -> Result<String, CovalentError> {
        self.execute(tokens::contract_metadata(&self.config, chain_id, id, common)?)
            .await
    }

    // DeFi protocol snapshots

    /// Aave v2 lending balances for an address.
    pub async fn aave_v2_balances(
        &self,
        chain_id: u64,
        address: &str,
        common: &CommonOptions,
    ) -> Result<String, CovalentError> {
        self.execute(defi::aave_v2_balances(
            &self.config,
            chain_id,
            address,
            common,
        )?)
        .await
    }

    /// Aave v1 lending balances for an address.
    pub async fn aave_balances(
        &self,
        chain_id: u64,
        address: &str,
        common: &CommonOptions,
    ) -> Result<String, CovalentError> {
        self.execute(defi::aave_balances(&self.config, chain_id, address, common)?)
            .await
    }

    /// Balancer pool balances for an address.
    pub async fn balancer_balances(
        &self,
        chain_id: u64,
        address: &str,
        common: &CommonOptions,
    ) -> Result<String, CovalentError> {
        self.execute(defi::balancer_balances(
            &self.config,
            chain_id,
            address,
            common,
        )?)
        .await
    }

    /// Compound supply and borrow balances for an address.
    pub async fn compound_balances(
        &self,
        chain_id: u64,
        address: &str,
        common: &CommonOptions,
    ) -> Result<String, CovalentError> {
        self.execute(defi::compound_balances(
            &self.config,
            chain_id,
            address,
            common,
        )?)
        .await
    }

    /// Compound activity history for an address.
    pub async fn compound_activity(
        &self,
        chain_id: u64,
        address: &str,
        common: &CommonOptions,
    ) -> Result<String, CovalentError> {
        self.execute(defi::compound_activity(
            &self.config,
            chain_id,
            address,
            common,
        )?)
        .await
    }

    /// All Compound markets.
    pub async fn compound_assets(
        &self,
        chain_id: u64,
        common: &CommonOptions,
    ) -> Result<String, CovalentError> {
        self.execute(defi::compound_assets(&self.config, chain_id, common)?)
            .await
    }

    /// Curve pool balances for an address.
    pub async fn curve_balances(
        &self,
        chain_id: u64,
        address: &str,
        common: &CommonOptions,
    ) -> Result<String, CovalentError> {
        self.execute(defi::curve_balances(&self.config, chain_id, address, common)?)
            .await
    }

    /// Farming positions for an address.
    pub async fn farming_positions(
        &self,
        chain_id: u64,
        address: &str,
        common: &CommonOptions,
    ) -> Result<String, CovalentError> {
        self.execute(defi::farming_positions(
            &self.config,
            chain_id,
            address,
            common,
        )?)
        .await
    }

    /// Uniswap v1 liquidity balances for an address.
    pub async fn uniswap_v1_balances(
        &self,
        chain_id: u64,
        address: &str,
        common: &CommonOptions,
    ) -> Result<String, CovalentError> {
        self.execute(defi::uniswap_v1_balances(
            &self.config,
            chain_id,
            address,
            common,
        )?)
        .await
    }

    /// Uniswap v2 liquidity balances for an address.
    pub async fn uniswap_v2_balances(
        &self,
        chain_id: u64,
        address: &str,
        common: &CommonOptions,
    ) -> Result<String, CovalentError> {
        self.execute(defi::uniswap_v2_balances(
            &self.config,
            chain_id,
            address,
            common,
        )?)
        .await
    }

    /// All Uniswap v2 pools.
    pub async fn uniswap_v2_assets(
        &self,
        chain_id: u64,
        common: &CommonOptions,
    ) -> Result<String, CovalentError> {
        self.execute(defi::uniswap_v2_assets(&self.config, chain_id, common)?)
            .await
    }

    /// SushiSwap liquidity balances for an address.
    pub async fn sushiswap_balances(
        &self,
        chain_id: u64,
        address: &str,
        common: &CommonOptions,
    ) -> Result<String, CovalentError> {
        self.execute(defi::sushiswap_balances(
            &self.config,
            chain_id,
            address,
            common,
        )?)
        .await
    }

    /// SushiSwap liquidity transactions, optionally with swap insight.
    pub async fn sushiswap_activity(
        &self,
        chain_id: u64,
        address: &str,
        swaps: bool,
        common: &CommonOptions,
    ) -> Result<String, CovalentError> {
        self.execute(defi::sushiswap_activity(
            &self.config,
            chain_id,
            address,
            swaps,
            common,
        )?)
        .await
    }

    /// All SushiSwap pools.
    pub async fn sushiswap_assets(
        &self,
        chain_id: u64,
        common: &CommonOptions,
    ) -> Result<String, CovalentError> {
        self.execute(defi::sushiswap_assets(&self.config, chain_id, common)?)
            .await
    }

    /// All PancakeSwap pools.
    pub async fn pancakeswap_assets(
        &self,
        chain_id: u64,
        common: &CommonOptions,
    ) -> Result<String, CovalentError> {
        self.execute(defi::pancakeswap_assets(&self.config, chain_id, common)?)
            .await
    }
}
