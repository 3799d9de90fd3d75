use chrono::{DateTime, NaiveDate, Utc};
use clap::{Parser, Subcommand};

use crate::params::{OutputFormat, QuoteCurrency, SortOrder};

#[derive(Parser)]
#[command(name = "covalent")]
#[command(about = "Covalent blockchain-data API CLI", long_about = None)]
pub struct Cli {
    #[arg(
        short,
        long,
        global = true,
        help = "API key (falls back to the COVALENT_API_KEY environment variable)"
    )]
    pub key: Option<String>,
    #[arg(
        short,
        long,
        global = true,
        help = "Quote currency for price-valued fields, e.g. USD or ETH"
    )]
    pub quote_currency: Option<QuoteCurrency>,
    #[arg(short, long, global = true, help = "Response format: JSON or CSV")]
    pub format: Option<OutputFormat>,
    #[arg(long, global = true, help = "Zero-based page number")]
    pub page_number: Option<u64>,
    #[arg(long, global = true, help = "Number of results per page")]
    pub page_size: Option<u64>,
    #[arg(
        long,
        global = true,
        value_name = "NAME=VALUE",
        help = "Primer parameter (filter, sort, group, limit, skip), passed through verbatim; repeatable"
    )]
    pub primer: Vec<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Spot prices for a list of tickers
    SpotPrices {
        #[arg(short, long, help = "Ticker symbols; repeat or comma-separate")]
        tickers: Vec<String>,
    },
    /// 30-day price volatility for a list of tickers
    PriceVolatility {
        #[arg(short, long, help = "Ticker symbols; repeat or comma-separate")]
        tickers: Vec<String>,
    },
    /// Daily price history for one ticker
    HistoricalPrices {
        #[arg(help = "Ticker symbol, e.g. TRIBE")]
        ticker: String,
        #[arg(long, help = "Range start, yyyy-mm-dd")]
        from: Option<NaiveDate>,
        #[arg(long, help = "Range end, yyyy-mm-dd")]
        to: Option<NaiveDate>,
        #[arg(short, long, help = "Sort order by day: asc or desc")]
        sort: Option<SortOrder>,
    },
    /// Token balances for an address
    Balances {
        #[arg(help = "Numeric chain id, e.g. 1 for Ethereum mainnet")]
        chain_id: u64,
        address: String,
        #[arg(long, help = "Include NFTs in the result")]
        nft: bool,
        #[arg(long, help = "Skip fetching external NFT metadata")]
        no_nft_fetch: bool,
    },
    /// Historical portfolio value for an address
    Portfolio {
        chain_id: u64,
        address: String,
    },
    /// Transactions for an address
    Transactions {
        chain_id: u64,
        address: String,
        #[arg(short, long, help = "Sort order by block time: asc or desc")]
        sort: Option<SortOrder>,
        #[arg(long, help = "Omit log events from the result")]
        no_logs: bool,
    },
    /// ERC-20 transfers for an address, filtered by token contract
    Erc20Transfers {
        chain_id: u64,
        address: String,
        #[arg(short, long, help = "Token contract address to filter by")]
        contract_address: String,
    },
    /// A single transaction by hash
    Transaction {
        chain_id: u64,
        tx_hash: String,
        #[arg(long, help = "Omit log events from the result")]
        no_logs: bool,
    },
    /// A single block, or the latest block when no height is given
    Block {
        chain_id: u64,
        height: Option<u64>,
    },
    /// Block heights within a timestamp range
    BlockHeights {
        chain_id: u64,
        #[arg(help = "Range start, RFC 3339, e.g. 2021-04-01T00:00:00Z")]
        start: DateTime<Utc>,
        #[arg(help = "Range end; omitted means latest")]
        end: Option<DateTime<Utc>>,
    },
    /// Decoded log events emitted by a contract
    LogEvents {
        chain_id: u64,
        contract_address: String,
        #[arg(long)]
        starting_block: u64,
        #[arg(long)]
        ending_block: u64,
    },
    /// Decoded log events matching topic hashes
    TopicEvents {
        chain_id: u64,
        #[arg(short, long, help = "Topic hashes; repeat or comma-separate")]
        topics: Vec<String>,
        #[arg(long, help = "Only events sent by this address")]
        sender_address: Option<String>,
        #[arg(long)]
        starting_block: u64,
        #[arg(long)]
        ending_block: u64,
    },
    /// External metadata for one NFT
    NftMetadata {
        chain_id: u64,
        contract_address: String,
        token_id: String,
    },
    /// Token holders as of a block height
    TokenHolders {
        chain_id: u64,
        contract_address: String,
        #[arg(long, help = "Block height; omitted means latest")]
        block_height: Option<u64>,
    },
    /// Contract metadata for a curated token list ("all" for every list)
    ContractMetadata {
        chain_id: u64,
        #[arg(default_value = "all")]
        id: String,
    },
}
