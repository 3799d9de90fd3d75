use anyhow::{Context, Result, bail};
use clap::Parser;
use log::debug;

use covalent_client::cli::{Cli, Commands};
use covalent_client::logging::init_logging;
use covalent_client::params::{DayRange, PageOptions};
use covalent_client::{ClientConfig, CommonOptions, CovalentClient};

fn common_options(cli: &Cli) -> Result<CommonOptions> {
    let page = match (cli.page_number, cli.page_size) {
        (None, None) => None,
        (page_number, Some(page_size)) => {
            Some(PageOptions::new(page_number.unwrap_or(0), page_size)?)
        },
        (Some(_), None) => bail!("--page-number requires --page-size"),
    };
    let mut primer = Vec::with_capacity(cli.primer.len());
    for pair in &cli.primer {
        let Some((name, value)) = pair.split_once('=') else {
            bail!("--primer expects NAME=VALUE, got `{pair}`");
        };
        primer.push((name.to_string(), value.to_string()));
    }
    Ok(CommonOptions {
        api_key: cli.key.clone(),
        quote_currency: cli.quote_currency,
        format: cli.format,
        page,
        primer,
    })
}

fn as_str_slice(values: &[String]) -> Vec<&str> {
    values.iter().map(String::as_str).collect()
}

#[tokio::main]
async fn main() -> Result<()> {
    init_logging();

    let cli = Cli::parse();
    let common = common_options(&cli)?;

    let config = ClientConfig::from_env().context("Could not load configuration")?;
    let client = CovalentClient::new(config).context("Could not initialize HTTP client")?;

    let body = match &cli.command {
        Commands::SpotPrices { tickers } => {
            client.spot_prices(&as_str_slice(tickers), &common).await?
        },
        Commands::PriceVolatility { tickers } => {
            client
                .price_volatility(&as_str_slice(tickers), &common)
                .await?
        },
        Commands::HistoricalPrices {
            ticker,
            from,
            to,
            sort,
        } => {
            let range = DayRange::new(*from, *to);
            client
                .historical_prices(ticker, &range, *sort, &common)
                .await?
        },
        Commands::Balances {
            chain_id,
            address,
            nft,
            no_nft_fetch,
        } => {
            client
                .token_balances(*chain_id, address, *nft, *no_nft_fetch, &common)
                .await?
        },
        Commands::Portfolio { chain_id, address } => {
            client.portfolio(*chain_id, address, &common).await?
        },
        Commands::Transactions {
            chain_id,
            address,
            sort,
            no_logs,
        } => {
            client
                .transactions(*chain_id, address, *sort, *no_logs, &common)
                .await?
        },
        Commands::Erc20Transfers {
            chain_id,
            address,
            contract_address,
        } => {
            client
                .erc20_transfers(*chain_id, address, contract_address, &common)
                .await?
        },
        Commands::Transaction {
            chain_id,
            tx_hash,
            no_logs,
        } => {
            client
                .transaction(*chain_id, tx_hash, *no_logs, &common)
                .await?
        },
        Commands::Block { chain_id, height } => {
            client.block(*chain_id, *height, &common).await?
        },
        Commands::BlockHeights {
            chain_id,
            start,
            end,
        } => {
            client
                .block_heights(*chain_id, *start, *end, &common)
                .await?
        },
        Commands::LogEvents {
            chain_id,
            contract_address,
            starting_block,
            ending_block,
        } => {
            client
                .log_events_by_contract(
                    *chain_id,
                    contract_address,
                    *starting_block,
                    *ending_block,
                    &common,
                )
                .await?
        },
        Commands::TopicEvents {
            chain_id,
            topics,
            sender_address,
            starting_block,
            ending_block,
        } => {
            client
                .log_events_by_topics(
                    *chain_id,
                    &as_str_slice(topics),
                    sender_address.as_deref(),
                    *starting_block,
                    *ending_block,
                    &common,
                )
                .await?
        },
        Commands::NftMetadata {
            chain_id,
            contract_address,
            token_id,
        } => {
            client
                .nft_metadata(*chain_id, contract_address, token_id, &common)
                .await?
        },
        Commands::TokenHolders {
            chain_id,
            contract_address,
            block_height,
        } => {
            client
                .token_holders(*chain_id, contract_address, *block_height, &common)
                .await?
        },
        Commands::ContractMetadata { chain_id, id } => {
            client.contract_metadata(*chain_id, id, &common).await?
        },
    };

    if let Some(latency) = client.last_request_latency().await {
        debug!(latency:? = latency; "Request completed");
    }

    // Pretty-print JSON bodies; CSV and anything else passes through as-is.
    match serde_json::from_str::<serde_json::Value>(&body) {
        Ok(value) => println!("{}", serde_json::to_string_pretty(&value)?),
        Err(_) => println!("{body}"),
    }
    Ok(())
}
