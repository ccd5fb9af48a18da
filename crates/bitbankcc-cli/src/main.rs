/*
[INPUT]:  CLI arguments, optional YAML configuration file, environment credentials
[OUTPUT]: Pretty-printed JSON responses from the bitbank API
[POS]:    Binary entry point
[UPDATE]: When changing CLI flags, sub-commands, or startup flow
*/

use std::path::PathBuf;

use anyhow::{Context, Result, anyhow};
use bitbankcc::{ActiveOrdersQuery, CandleType, SortOrder, TradeHistoryQuery};
use bitbankcc_cli::CliConfig;
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "bitbankcc", version, about = "bitbank.cc REST API client")]
struct Cli {
    #[arg(long = "config", value_name = "PATH")]
    config_path: Option<PathBuf>,
    #[arg(long = "log-level", value_name = "LEVEL", default_value = "info")]
    log_level: String,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Latest ticker for one pair
    Ticker { pair: String },
    /// Tickers for every pair
    Tickers,
    /// Order book snapshot
    Depth { pair: String },
    /// Recent transactions, or those of one day
    Transactions {
        pair: String,
        #[arg(long, value_name = "YYYYMMDD")]
        date: Option<String>,
    },
    /// OHLCV candles
    Candlestick {
        pair: String,
        candle_type: CandleType,
        /// `YYYYMMDD` for intraday candles, `YYYY` otherwise
        date: String,
    },
    /// Account balances
    Assets,
    /// One order by id
    Order { pair: String, order_id: i64 },
    /// Open orders
    ActiveOrders {
        pair: String,
        #[arg(long)]
        count: Option<u32>,
        #[arg(long)]
        since: Option<i64>,
        #[arg(long)]
        end: Option<i64>,
    },
    /// Executed trades
    TradeHistory {
        #[arg(long)]
        pair: Option<String>,
        #[arg(long)]
        count: Option<u32>,
        #[arg(long)]
        order_id: Option<i64>,
        #[arg(long)]
        since: Option<i64>,
        #[arg(long)]
        end: Option<i64>,
        #[arg(long, value_enum)]
        order: Option<SortArg>,
    },
    /// Open margin positions
    MarginPositions,
    /// Per-pair exchange status
    Status,
    /// Trading rules for every pair
    Pairs,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum SortArg {
    Asc,
    Desc,
}

impl From<SortArg> for SortOrder {
    fn from(value: SortArg) -> Self {
        match value {
            SortArg::Asc => SortOrder::Asc,
            SortArg::Desc => SortOrder::Desc,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();
    init_tracing(&args.log_level)?;

    let config = load_config(args.config_path.as_ref())?;
    debug!(
        endpoint = %config.endpoint,
        public_endpoint = %config.public_endpoint,
        auth_method = ?config.auth_method,
        "configuration loaded"
    );

    run(args.command, &config).await
}

async fn run(command: Command, config: &CliConfig) -> Result<()> {
    match command {
        Command::Ticker { pair } => print(&config.public_client()?.get_ticker(&pair).await?),
        Command::Tickers => print(&config.public_client()?.get_tickers().await?),
        Command::Depth { pair } => print(&config.public_client()?.get_depth(&pair).await?),
        Command::Transactions { pair, date } => print(
            &config
                .public_client()?
                .get_transactions(&pair, date.as_deref())
                .await?,
        ),
        Command::Candlestick {
            pair,
            candle_type,
            date,
        } => print(
            &config
                .public_client()?
                .get_candlestick(&pair, candle_type, &date)
                .await?,
        ),
        Command::Assets => print(&config.private_client()?.get_assets().await?),
        Command::Order { pair, order_id } => {
            print(&config.private_client()?.get_order(&pair, order_id).await?)
        }
        Command::ActiveOrders {
            pair,
            count,
            since,
            end,
        } => {
            let query = ActiveOrdersQuery {
                count,
                since,
                end,
                ..Default::default()
            };
            print(
                &config
                    .private_client()?
                    .get_active_orders(&pair, &query)
                    .await?,
            )
        }
        Command::TradeHistory {
            pair,
            count,
            order_id,
            since,
            end,
            order,
        } => {
            let query = TradeHistoryQuery {
                count,
                order_id,
                since,
                end,
                order: order.map(SortOrder::from),
            };
            print(
                &config
                    .private_client()?
                    .get_trade_history(pair.as_deref(), &query)
                    .await?,
            )
        }
        Command::MarginPositions => print(&config.private_client()?.get_margin_positions().await?),
        Command::Status => print(&config.private_client()?.get_exchange_status().await?),
        Command::Pairs => print(&config.private_client()?.get_pairs().await?),
    }
}

fn print<T: Serialize>(data: &T) -> Result<()> {
    let rendered = serde_json::to_string_pretty(data).context("render response")?;
    println!("{rendered}");
    Ok(())
}

fn init_tracing(log_level: &str) -> Result<()> {
    let filter = EnvFilter::try_new(log_level).context("invalid log level")?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow!(err))
        .context("initialize tracing subscriber")?;
    Ok(())
}

fn load_config(path: Option<&PathBuf>) -> Result<CliConfig> {
    let config = match path {
        Some(path) => {
            let path_str = path.to_str().context("config path must be valid utf-8")?;
            info!(config_path = %path.display(), "loading configuration");
            CliConfig::from_file(path_str).context("load config")?
        }
        None => CliConfig::default(),
    };
    Ok(config.with_env_overrides())
}
