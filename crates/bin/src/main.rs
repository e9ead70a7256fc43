//! Lynchpin CLI binary.
//!
//! Runs the interactive menu when no subcommand is given.

mod integration;

use chrono::Datelike;
use clap::{Args, Parser, Subcommand};
use integration::prompt::Prompter;
use integration::provider::AnyProvider;
use integration::tools::{
    OutputFormat, PeerQuery, ProjectionOptions, Settings, ValuationOptions, analysis_tool,
    classification_tool, convert_tool, dcf_tool, peers_tool, projection_tool, run_menu,
    scorers_tool, valuation_tool,
};
use lynchpin::universe::{DEFAULT_MAX_PEERS, GicsSector, StockIndex};
use lynchpin_valuation::{DcfAssumptions, Multiple};
use std::io::{self, IsTerminal};
use std::path::PathBuf;
use std::process;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter.
const LOG_ENV: &str = "LYNCHPIN_LOG";

#[derive(Parser)]
#[command(name = "lynchpin")]
#[command(about = "Lynchpin: fundamental stock valuation", long_about = None)]
#[command(version)]
struct Cli {
    /// Load snapshots from a JSON file instead of Yahoo Finance
    #[arg(long, global = true)]
    snapshots: Option<PathBuf>,

    /// Directory valuation reports are written to
    #[arg(long, global = true, default_value = ".")]
    output_dir: PathBuf,

    /// Output format
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// DCF assumptions. Any flag given skips the DCF prompts.
#[derive(Args, Debug, Clone, Copy)]
struct DcfArgs {
    /// FCF growth rate as a decimal (0 uses the company's earnings growth)
    #[arg(long)]
    growth: Option<f64>,

    /// Discount rate as a decimal
    #[arg(long)]
    discount: Option<f64>,

    /// Terminal growth rate as a decimal
    #[arg(long)]
    terminal: Option<f64>,

    /// Projection years
    #[arg(long)]
    years: Option<u32>,
}

impl DcfArgs {
    /// `None` when no flag was given, defaults filled in otherwise.
    fn assumptions(self) -> Option<DcfAssumptions> {
        if self.growth.is_none()
            && self.discount.is_none()
            && self.terminal.is_none()
            && self.years.is_none()
        {
            return None;
        }
        let defaults = DcfAssumptions::default();
        Some(DcfAssumptions {
            growth_rate: self.growth.unwrap_or(defaults.growth_rate),
            discount_rate: self.discount.unwrap_or(defaults.discount_rate),
            terminal_growth: self.terminal.unwrap_or(defaults.terminal_growth),
            years: self.years.unwrap_or(defaults.years),
        })
    }
}

#[derive(Subcommand)]
enum Commands {
    /// PEGY, DCF, comparables and Rule of 40, saved as a report
    Valuate {
        /// Stock symbol
        symbol: String,

        /// Comma-separated peer tickers
        #[arg(long, value_delimiter = ',')]
        peers: Option<Vec<String>>,

        /// Comma-separated multiples (P/E, P/S, EV/EBITDA)
        #[arg(long)]
        multiples: Option<String>,

        /// Do not suggest peers from the company's industry
        #[arg(long)]
        no_suggest: bool,

        #[command(flatten)]
        dcf: DcfArgs,
    },

    /// Score a company against valuation and quality rubrics
    Analyze {
        /// Stock symbol
        symbol: String,
    },

    /// Assign a Peter Lynch category
    Classify {
        /// Stock symbol
        symbol: String,
    },

    /// Convert an IBKR trade report into a Yahoo Finance import file
    Convert {
        /// IBKR csv report
        input: PathBuf,

        /// Output file
        #[arg(long, short, default_value = "converted_trades.csv")]
        output: PathBuf,
    },

    /// DCF valuation only
    Dcf {
        /// Stock symbol
        symbol: String,

        #[command(flatten)]
        dcf: DcfArgs,
    },

    /// Low, medium and high price projections
    Project {
        /// Stock symbol
        symbol: String,

        /// Projection years
        #[arg(long, default_value = "5")]
        years: u32,

        /// Override the base market cap
        #[arg(long)]
        base_market_cap: Option<f64>,

        /// Override the starting revenue
        #[arg(long)]
        revenue: Option<f64>,

        /// First projected year (defaults to the current year)
        #[arg(long)]
        first_year: Option<i32>,
    },

    /// List the rubric scorers, or score a single value
    Scorers {
        /// Scorer name (pe, ev_ebitda, ps, pb, earnings_growth, profit_margin, roe, dividend_yield)
        name: Option<String>,

        /// Value to score, in the scorer's unit (percentages as 12.5)
        #[arg(long, requires = "name", allow_negative_numbers = true)]
        value: Option<f64>,
    },

    /// Suggest peers from index constituents in the same industry
    Peers {
        /// Stock symbol
        symbol: String,

        /// Industry to match instead of the company's own
        #[arg(long)]
        industry: Option<String>,

        /// Match this GICS or Yahoo sector instead of an industry
        #[arg(long, conflicts_with = "industry")]
        sector: Option<GicsSector>,

        /// Only search this index (sp500, dax, ftse100)
        #[arg(long)]
        index: Option<StockIndex>,

        /// Maximum number of peers
        #[arg(long, default_value_t = DEFAULT_MAX_PEERS)]
        max: usize,
    },
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

#[tokio::main]
async fn main() {
    init_tracing();
    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut settings = Settings {
        output_dir: cli.output_dir,
        format: cli.format,
        progress: io::stderr().is_terminal(),
        current_year: chrono::Local::now().year(),
    };
    let stdin = io::stdin();
    let mut prompter = Prompter::new(stdin.lock(), io::stdout().lock());

    match &cli.command {
        Some(Commands::Convert { input, output }) => {
            convert_tool(&mut prompter, input, output)?;
            return Ok(());
        }
        Some(Commands::Scorers { name, value }) => {
            scorers_tool(&mut prompter, &settings, name.as_deref(), *value)?;
            return Ok(());
        }
        _ => {}
    }

    let provider = AnyProvider::from_args(cli.snapshots.as_deref())?;
    tracing::debug!(?settings, "Starting");

    match cli.command {
        None => run_menu(&provider, &mut prompter, &settings).await?,
        Some(Commands::Valuate {
            symbol,
            peers,
            multiples,
            no_suggest,
            dcf,
        }) => {
            let options = ValuationOptions {
                assumptions: dcf.assumptions(),
                peers,
                multiples: multiples.as_deref().map(Multiple::parse_list),
                suggest: !no_suggest,
            };
            valuation_tool(&provider, &mut prompter, &settings, &symbol, &options).await?;
        }
        Some(Commands::Analyze { symbol }) => {
            analysis_tool(&provider, &mut prompter, &settings, &symbol).await?;
        }
        Some(Commands::Classify { symbol }) => {
            classification_tool(&provider, &mut prompter, &settings, &symbol).await?;
        }
        Some(Commands::Dcf { symbol, dcf }) => {
            dcf_tool(&provider, &mut prompter, &settings, &symbol, dcf.assumptions()).await?;
        }
        Some(Commands::Project {
            symbol,
            years,
            base_market_cap,
            revenue,
            first_year,
        }) => {
            if let Some(first_year) = first_year {
                settings.current_year = first_year;
            }
            let options = ProjectionOptions {
                years,
                base_market_cap,
                revenue,
            };
            projection_tool(&provider, &mut prompter, &settings, &symbol, options).await?;
        }
        Some(Commands::Peers {
            symbol,
            industry,
            sector,
            index,
            max,
        }) => {
            let query = PeerQuery {
                industry,
                sector,
                index,
                max_peers: max,
            };
            peers_tool(&provider, &mut prompter, &settings, &symbol, &query).await?;
        }
        Some(Commands::Convert { .. } | Commands::Scorers { .. }) => {}
    }

    Ok(())
}
