//! The interactive tools behind each menu entry and subcommand.
//!
//! Every tool fetches what it needs through a [`SnapshotProvider`], prompts
//! through a [`Prompter`] only for values the caller did not supply, and
//! writes its results to the prompter's output.

use super::prompt::Prompter;
use super::provider::ProgressProvider;
use lynchpin::universe::{
    DEFAULT_MAX_PEERS, GicsSector, StockIndex, merge_peers, suggest_peers, suggest_peers_across,
    suggest_sector_peers,
};
use lynchpin_data::{DataError, FinancialSnapshot, Metric, SnapshotProvider};
use lynchpin_output::{
    ExportError, ReportError, ValuationReport, convert_trade_file, fmt_money, fmt_price,
    render_classification, render_projections, render_scorecard,
};
use lynchpin_scoring::{
    LynchInputs, ScoreCard, ScorerCategory, ScorerInfo, classify, get_scorer, scorers_by_category,
};
use lynchpin_valuation::{
    DcfAssumptions, DcfValuation, Multiple, PegKind, ProjectionInputs, RuleOf40, Scenario,
    ValuationError, apply_comps, collect_peer_multiples, dcf_from_snapshot, pegy_from_snapshot,
    project_scenarios, rule_of_40_from_snapshot,
};
use serde_json::json;
use std::collections::BTreeMap;
use std::fmt;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors surfaced by a tool run.
#[derive(Debug, Error)]
pub(crate) enum ToolError {
    /// Snapshot fetch failed.
    #[error(transparent)]
    Data(#[from] DataError),

    /// Model assumptions were invalid.
    #[error(transparent)]
    Valuation(#[from] ValuationError),

    /// Report could not be written.
    #[error(transparent)]
    Report(#[from] ReportError),

    /// Trade report could not be converted.
    #[error(transparent)]
    Export(#[from] ExportError),

    /// JSON output failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Console IO failed.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// No scorer has this name.
    #[error("Unknown scorer: {0}")]
    UnknownScorer(String),
}

pub(crate) type ToolResult<T> = Result<T, ToolError>;

/// How results are printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub(crate) enum OutputFormat {
    /// Human-readable text
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
}

/// Options shared by every tool.
#[derive(Debug, Clone)]
pub(crate) struct Settings {
    /// Directory valuation reports are written to.
    pub(crate) output_dir: PathBuf,
    /// Result format.
    pub(crate) format: OutputFormat,
    /// Show a progress bar while fetching peers.
    pub(crate) progress: bool,
    /// Calendar year projections start from.
    pub(crate) current_year: i32,
}

/// Inputs to the valuation tool. `None` fields are prompted for.
#[derive(Debug, Clone, Default)]
pub(crate) struct ValuationOptions {
    pub(crate) assumptions: Option<DcfAssumptions>,
    pub(crate) peers: Option<Vec<String>>,
    pub(crate) multiples: Option<Vec<Multiple>>,
    /// Suggest peers from the industry before asking for manual ones.
    pub(crate) suggest: bool,
}

/// Inputs to the projection tool.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ProjectionOptions {
    pub(crate) years: u32,
    pub(crate) base_market_cap: Option<f64>,
    pub(crate) revenue: Option<f64>,
}

fn prompt_assumptions<R: BufRead, W: Write>(
    p: &mut Prompter<R, W>,
) -> io::Result<DcfAssumptions> {
    let defaults = DcfAssumptions::default();
    writeln!(p.out, "\nEnter DCF assumptions (press Enter to accept default):")?;
    Ok(DcfAssumptions {
        growth_rate: p.number(
            "FCF growth rate (0 uses the company's earnings growth)",
            defaults.growth_rate,
        )?,
        discount_rate: p.number("Discount rate (as decimal)", defaults.discount_rate)?,
        terminal_growth: p.number("Terminal growth rate (as decimal)", defaults.terminal_growth)?,
        years: p.number("Projection years", defaults.years)?,
    })
}

fn print_dcf<W: Write>(out: &mut W, dcf: Option<&DcfValuation>, years: u32) -> io::Result<()> {
    match dcf {
        Some(dcf) => {
            writeln!(out, "Discounted cash flow ({}y): {}", years, fmt_money(dcf.pv_fcfs))?;
            writeln!(
                out,
                "Terminal value (Gordon growth model): {}",
                fmt_money(dcf.pv_terminal)
            )?;
            writeln!(out, "Total equity: {}", fmt_money(dcf.total_equity))?;
            writeln!(
                out,
                "Intrinsic value per share (DCF): {}",
                fmt_price(dcf.intrinsic_per_share)
            )
        }
        None => writeln!(out, "DCF valuation unavailable (missing data)."),
    }
}

/// Run the DCF model, reporting invalid assumptions instead of failing.
fn run_dcf<W: Write>(
    out: &mut W,
    snapshot: &FinancialSnapshot,
    assumptions: &DcfAssumptions,
) -> io::Result<Option<DcfValuation>> {
    match dcf_from_snapshot(snapshot, assumptions) {
        Ok(dcf) => Ok(dcf),
        Err(e) => {
            writeln!(out, "DCF skipped: {}", e)?;
            Ok(None)
        }
    }
}

/// Comparables step of the valuation tool.
async fn run_comps<P, R, W>(
    provider: &P,
    p: &mut Prompter<R, W>,
    settings: &Settings,
    snapshot: &FinancialSnapshot,
    options: &ValuationOptions,
) -> ToolResult<(BTreeMap<Multiple, f64>, BTreeMap<Multiple, f64>)>
where
    P: SnapshotProvider + Sync,
    R: BufRead,
    W: Write,
{
    let industry = snapshot.industry.as_deref().filter(|i| !i.is_empty());
    writeln!(p.out, "\nIndustry: {}", industry.unwrap_or("N/A"))?;

    let mut suggested = Vec::new();
    if options.suggest {
        if let Some((basis, peers)) =
            suggest_for_snapshot(snapshot, &StockIndex::ALL, DEFAULT_MAX_PEERS)
        {
            writeln!(p.out, "\nSuggested peers in same {}: {}", basis, peers.join(", "))?;
            suggested = peers;
        }
    }

    let manual = match &options.peers {
        Some(peers) => peers.clone(),
        None => p.list(
            "Enter additional comma-separated peer tickers (or press Enter to use suggested only): ",
        )?,
    };
    let peers = merge_peers(&suggested, &manual);
    if peers.is_empty() {
        writeln!(p.out, "No peers specified - skipping comparable valuation.")?;
        return Ok(Default::default());
    }

    let multiples = match &options.multiples {
        Some(multiples) => multiples.clone(),
        None => {
            writeln!(p.out, "\nAvailable multiples: P/E, P/S, EV/EBITDA")?;
            let raw = p.line("Choose multiples (comma-separated): ")?;
            Multiple::parse_list(&raw.unwrap_or_default())
        }
    };
    if multiples.is_empty() {
        writeln!(p.out, "No valid multiples chosen - skipping comparable valuation.")?;
        return Ok(Default::default());
    }

    writeln!(p.out, "Fetching peer multiples... this may take a moment.")?;
    let tracked = ProgressProvider::new(provider, peers.len(), settings.progress);
    let collected = collect_peer_multiples(&tracked, &peers, &multiples).await;
    tracked.finish();

    let averages = collected.averages();
    if averages.is_empty() {
        writeln!(p.out, "Insufficient peer data - skipping comparable valuation.")?;
        return Ok(Default::default());
    }

    let comps = apply_comps(snapshot, &averages);
    if comps.is_empty() {
        writeln!(
            p.out,
            "Comparable valuation could not be calculated (missing target data)."
        )?;
    } else {
        writeln!(p.out, "\nComparable valuation (implied prices):")?;
        for (multiple, price) in &comps {
            writeln!(
                p.out,
                "{}: {} (avg multiple {:.2})",
                multiple,
                fmt_price(*price),
                averages[multiple]
            )?;
        }
    }
    Ok((comps, averages))
}

/// PEGY, DCF, comparables and Rule of 40 for one ticker, saved as a report.
pub(crate) async fn valuation_tool<P, R, W>(
    provider: &P,
    p: &mut Prompter<R, W>,
    settings: &Settings,
    symbol: &str,
    options: &ValuationOptions,
) -> ToolResult<ValuationReport>
where
    P: SnapshotProvider + Sync,
    R: BufRead,
    W: Write,
{
    let snapshot = provider.fetch_snapshot(symbol).await?;
    let symbol = symbol.to_uppercase();

    let price = snapshot.present(Metric::CurrentPrice);
    match price {
        Some(price) => writeln!(p.out, "\nCurrent market price for {}: {}", symbol, fmt_price(price))?,
        None => writeln!(p.out, "\nCurrent price unavailable.")?,
    }

    let pegy = pegy_from_snapshot(&snapshot);
    match &pegy {
        Some(ratio) => {
            writeln!(p.out, "{} ratio: {:.2}", ratio.kind, ratio.value)?;
            if ratio.kind == PegKind::Peg {
                writeln!(p.out, "(Dividend yield not available - showing PEG instead of PEGY)")?;
            }
            writeln!(p.out, "{}", ratio.interpretation())?;
        }
        None => writeln!(p.out, "PEGY/PEG ratio not available (missing data).")?,
    }

    let assumptions = match options.assumptions {
        Some(assumptions) => assumptions,
        None => prompt_assumptions(p)?,
    };
    let dcf = run_dcf(&mut p.out, &snapshot, &assumptions)?;
    print_dcf(&mut p.out, dcf.as_ref(), assumptions.years)?;

    let (comps, averages) = run_comps(provider, p, settings, &snapshot, options).await?;

    let rule: RuleOf40 = rule_of_40_from_snapshot(&snapshot);
    writeln!(p.out, "Rule of 40: {}", rule.message)?;

    let report = ValuationReport::builder(&symbol)
        .price(price)
        .pegy(pegy)
        .dcf(dcf)
        .comps(comps, averages)
        .rule_of_40(Some(rule))
        .build();
    let path = report.write_to(&settings.output_dir)?;
    writeln!(p.out, "\nReport saved to {}", path.display())?;

    if settings.format == OutputFormat::Json {
        writeln!(p.out, "{}", report.to_json()?)?;
    }
    Ok(report)
}

/// Score a ticker against every rubric.
pub(crate) async fn analysis_tool<P, R, W>(
    provider: &P,
    p: &mut Prompter<R, W>,
    settings: &Settings,
    symbol: &str,
) -> ToolResult<ScoreCard>
where
    P: SnapshotProvider + Sync,
    R: BufRead,
    W: Write,
{
    let snapshot = provider.fetch_snapshot(symbol).await?;
    let card = ScoreCard::from_snapshot(&snapshot);
    match settings.format {
        OutputFormat::Text => writeln!(p.out, "\n{}", render_scorecard(&card))?,
        OutputFormat::Json => writeln!(p.out, "{}", serde_json::to_string_pretty(&card)?)?,
    }
    Ok(card)
}

/// Assign a Peter Lynch category to a ticker.
pub(crate) async fn classification_tool<P, R, W>(
    provider: &P,
    p: &mut Prompter<R, W>,
    settings: &Settings,
    symbol: &str,
) -> ToolResult<()>
where
    P: SnapshotProvider + Sync,
    R: BufRead,
    W: Write,
{
    let snapshot = provider.fetch_snapshot(symbol).await?;
    let inputs = LynchInputs::from_snapshot(&snapshot);
    let classification = classify(&snapshot);
    match settings.format {
        OutputFormat::Text => writeln!(p.out, "\n{}", render_classification(&inputs, &classification))?,
        OutputFormat::Json => {
            let value = json!({
                "symbol": snapshot.symbol,
                "classification": classification,
                "description": classification.to_string(),
            });
            writeln!(p.out, "{}", serde_json::to_string_pretty(&value)?)?;
        }
    }
    Ok(())
}

/// DCF valuation only.
pub(crate) async fn dcf_tool<P, R, W>(
    provider: &P,
    p: &mut Prompter<R, W>,
    settings: &Settings,
    symbol: &str,
    assumptions: Option<DcfAssumptions>,
) -> ToolResult<Option<DcfValuation>>
where
    P: SnapshotProvider + Sync,
    R: BufRead,
    W: Write,
{
    let snapshot = provider.fetch_snapshot(symbol).await?;
    let assumptions = match assumptions {
        Some(assumptions) => assumptions,
        None => prompt_assumptions(p)?,
    };
    let dcf = dcf_from_snapshot(&snapshot, &assumptions)?;

    match settings.format {
        OutputFormat::Text => {
            writeln!(p.out, "\nDCF for {}:", symbol.to_uppercase())?;
            print_dcf(&mut p.out, dcf.as_ref(), assumptions.years)?;
            if let (Some(dcf), Some(price)) = (&dcf, snapshot.present(Metric::CurrentPrice)) {
                writeln!(p.out, "Current market price: {}", fmt_price(price))?;
                writeln!(
                    p.out,
                    "Growth rate used: {:.2}%",
                    dcf.growth_rate * 100.0
                )?;
            }
        }
        OutputFormat::Json => writeln!(p.out, "{}", serde_json::to_string_pretty(&dcf)?)?,
    }
    Ok(dcf)
}

/// Low, medium and high scenario price projections.
pub(crate) async fn projection_tool<P, R, W>(
    provider: &P,
    p: &mut Prompter<R, W>,
    settings: &Settings,
    symbol: &str,
    options: ProjectionOptions,
) -> ToolResult<()>
where
    P: SnapshotProvider + Sync,
    R: BufRead,
    W: Write,
{
    let mut snapshot = provider.fetch_snapshot(symbol).await?;
    if let Some(base) = options.base_market_cap {
        snapshot.set(Metric::MarketCap, Some(base));
    }
    if let Some(revenue) = options.revenue {
        snapshot.set(Metric::TotalRevenue, Some(revenue));
    }

    let Some(inputs) = ProjectionInputs::from_snapshot(&snapshot, options.years, settings.current_year)
    else {
        writeln!(
            p.out,
            "Projection unavailable (missing price, shares, market cap or revenue)."
        )?;
        return Ok(());
    };

    let projections = project_scenarios(&inputs, &Scenario::defaults())?;
    match settings.format {
        OutputFormat::Text => write!(p.out, "\n{}", render_projections(&inputs, &projections))?,
        OutputFormat::Json => writeln!(p.out, "{}", serde_json::to_string_pretty(&projections)?)?,
    }
    Ok(())
}

/// What a peer search matched on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum PeerBasis {
    Industry(String),
    Sector(GicsSector),
}

impl fmt::Display for PeerBasis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Industry(industry) => write!(f, "industry ({})", industry),
            Self::Sector(sector) => write!(f, "sector ({})", sector),
        }
    }
}

/// Inputs to the peers tool.
#[derive(Debug, Clone, Default)]
pub(crate) struct PeerQuery {
    /// Industry to match instead of the company's own.
    pub(crate) industry: Option<String>,
    /// Match on this sector instead of an industry.
    pub(crate) sector: Option<GicsSector>,
    /// Only search this index, matching the industry exactly.
    pub(crate) index: Option<StockIndex>,
    pub(crate) max_peers: usize,
}

/// Industry peers for a snapshot, falling back to its GICS sector when no
/// constituent shares the industry.
fn suggest_for_snapshot(
    snapshot: &FinancialSnapshot,
    indexes: &[StockIndex],
    max_peers: usize,
) -> Option<(PeerBasis, Vec<String>)> {
    if let Some(industry) = snapshot.industry.as_deref().filter(|i| !i.trim().is_empty()) {
        let peers = suggest_peers_across(industry, &snapshot.symbol, indexes, max_peers);
        if !peers.is_empty() {
            return Some((PeerBasis::Industry(industry.to_string()), peers));
        }
    }
    let sector = snapshot.sector.as_deref().and_then(GicsSector::from_yahoo_sector)?;
    let peers = suggest_sector_peers(sector, &snapshot.symbol, indexes, max_peers);
    (!peers.is_empty()).then_some((PeerBasis::Sector(sector), peers))
}

/// Suggest peers for a ticker, or for an industry or sector given directly.
///
/// An industry given together with an `index` must match exactly within
/// that index; otherwise matching is partial. A ticker whose own industry
/// matches nothing falls back to its sector.
pub(crate) async fn peers_tool<P, R, W>(
    provider: &P,
    p: &mut Prompter<R, W>,
    settings: &Settings,
    symbol: &str,
    query: &PeerQuery,
) -> ToolResult<Vec<String>>
where
    P: SnapshotProvider + Sync,
    R: BufRead,
    W: Write,
{
    let indexes: &[StockIndex] = match &query.index {
        Some(index) => std::slice::from_ref(index),
        None => &StockIndex::ALL,
    };

    let found = match (query.sector, query.industry.as_deref()) {
        (Some(sector), _) => Some((
            PeerBasis::Sector(sector),
            suggest_sector_peers(sector, symbol, indexes, query.max_peers),
        )),
        (None, Some(industry)) => {
            let peers = match query.index {
                Some(index) => suggest_peers(industry, symbol, index, query.max_peers),
                None => suggest_peers_across(industry, symbol, indexes, query.max_peers),
            };
            Some((PeerBasis::Industry(industry.to_string()), peers))
        }
        (None, None) => {
            let snapshot = provider.fetch_snapshot(symbol).await?;
            suggest_for_snapshot(&snapshot, indexes, query.max_peers)
        }
    };

    let (basis, peers) = match found {
        Some((basis, peers)) if !peers.is_empty() => (Some(basis), peers),
        _ => (None, Vec::new()),
    };

    match (settings.format, &basis) {
        (OutputFormat::Text, Some(basis)) => writeln!(
            p.out,
            "Suggested peers in same {}: {}",
            basis,
            peers.join(", ")
        )?,
        (OutputFormat::Text, None) => {
            writeln!(p.out, "No peers found for {}.", symbol.to_uppercase())?
        }
        (OutputFormat::Json, _) => {
            let (kind, label) = match &basis {
                Some(PeerBasis::Industry(industry)) => ("industry", industry.clone()),
                Some(PeerBasis::Sector(sector)) => ("sector", sector.to_string()),
                None => ("none", String::new()),
            };
            let value = json!({ "basis": kind, "match": label, "peers": peers });
            writeln!(p.out, "{}", serde_json::to_string_pretty(&value)?)?
        }
    }
    Ok(peers)
}

fn scorer_json(scorer: &ScorerInfo) -> serde_json::Value {
    json!({
        "name": scorer.name,
        "label": scorer.label,
        "category": scorer.category.to_string(),
        "description": scorer.description,
        "percent": scorer.percent,
        "in_aggregate": scorer.in_aggregate,
    })
}

/// List the rubric scorers by category, or score one raw value.
///
/// `value` is in the scorer's own unit, so percentages are given as 12.5
/// rather than 0.125.
pub(crate) fn scorers_tool<R: BufRead, W: Write>(
    p: &mut Prompter<R, W>,
    settings: &Settings,
    name: Option<&str>,
    value: Option<f64>,
) -> ToolResult<()> {
    if let Some(name) = name {
        let scorer = get_scorer(name).ok_or_else(|| ToolError::UnknownScorer(name.to_string()))?;
        let score = value.map(|v| (scorer.score)(Some(v)));
        match settings.format {
            OutputFormat::Text => {
                writeln!(p.out, "{} ({}): {}", scorer.label, scorer.name, scorer.description)?;
                if let (Some(value), Some(score)) = (value, score) {
                    writeln!(p.out, "{} -> {}", value, score)?;
                }
            }
            OutputFormat::Json => {
                let mut out = scorer_json(&scorer);
                out["score"] = json!(score);
                writeln!(p.out, "{}", serde_json::to_string_pretty(&out)?)?;
            }
        }
        return Ok(());
    }

    match settings.format {
        OutputFormat::Text => {
            for category in ScorerCategory::ALL {
                writeln!(p.out, "{}:", category)?;
                for scorer in scorers_by_category(category) {
                    let aggregate = if scorer.in_aggregate { "" } else { " (not in aggregate)" };
                    writeln!(p.out, "  {:<16} {}{}", scorer.name, scorer.label, aggregate)?;
                }
            }
        }
        OutputFormat::Json => {
            let all: Vec<_> = ScorerCategory::ALL
                .into_iter()
                .flat_map(scorers_by_category)
                .map(|s| scorer_json(&s))
                .collect();
            writeln!(p.out, "{}", serde_json::to_string_pretty(&all)?)?;
        }
    }
    Ok(())
}

/// Convert a broker trade report into Yahoo's import format.
pub(crate) fn convert_tool<R: BufRead, W: Write>(
    p: &mut Prompter<R, W>,
    input: &Path,
    output: &Path,
) -> ToolResult<usize> {
    let count = convert_trade_file(input, output)?;
    writeln!(
        p.out,
        "Conversion completed. {} trades written to {}",
        count,
        output.display()
    )?;
    Ok(count)
}

fn show_menu<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "\n=== Lynchpin Menu ===")?;
    writeln!(out, "1. Valuation tool")?;
    writeln!(out, "2. Simple company analysis")?;
    writeln!(out, "3. Peter Lynch company category")?;
    writeln!(out, "4. Convert IBKR csv report into Yahoo finance csv report")?;
    writeln!(out, "5. DCF valuation")?;
    writeln!(out, "0. Exit")
}

async fn menu_choice<P, R, W>(
    provider: &P,
    p: &mut Prompter<R, W>,
    settings: &Settings,
    choice: &str,
) -> ToolResult<()>
where
    P: SnapshotProvider + Sync,
    R: BufRead,
    W: Write,
{
    match choice {
        "1" | "2" | "3" | "5" => {
            let Some(symbol) = p.symbol()? else {
                return Ok(());
            };
            match choice {
                "1" => {
                    let options = ValuationOptions {
                        suggest: true,
                        ..ValuationOptions::default()
                    };
                    valuation_tool(provider, p, settings, &symbol, &options)
                        .await
                        .map(drop)
                }
                "2" => analysis_tool(provider, p, settings, &symbol).await.map(drop),
                "3" => classification_tool(provider, p, settings, &symbol).await,
                _ => dcf_tool(provider, p, settings, &symbol, None).await.map(drop),
            }
        }
        "4" => {
            let input = p.line("Input IBKR csv file: ")?.unwrap_or_default();
            if input.is_empty() {
                return Ok(());
            }
            let output = p
                .line("Output csv file [converted_trades.csv]: ")?
                .filter(|o| !o.is_empty())
                .unwrap_or_else(|| "converted_trades.csv".to_string());
            convert_tool(p, Path::new(&input), Path::new(&output)).map(drop)
        }
        _ => {
            writeln!(p.out, "Invalid choice. Please try again.")?;
            Ok(())
        }
    }
}

/// The numbered menu. Tool failures are printed and the menu continues.
pub(crate) async fn run_menu<P, R, W>(
    provider: &P,
    p: &mut Prompter<R, W>,
    settings: &Settings,
) -> ToolResult<()>
where
    P: SnapshotProvider + Sync,
    R: BufRead,
    W: Write,
{
    loop {
        show_menu(&mut p.out)?;
        let Some(choice) = p.line("Choose an option (0-5): ")? else {
            break;
        };
        if choice == "0" {
            break;
        }

        if let Err(e) = menu_choice(provider, p, settings, &choice).await {
            tracing::debug!(error = ?e, "Menu tool failed");
            writeln!(p.out, "Error: {}", e)?;
        }
    }

    writeln!(p.out, "Exiting. Goodbye!")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use lynchpin_data::InMemoryProvider;
    use std::io::Cursor;

    fn provider() -> InMemoryProvider {
        InMemoryProvider::from_snapshots([
            FinancialSnapshot::new("ACME")
                .with_industry("Beverages - Non-Alcoholic")
                .with_sector("Consumer Defensive")
                .with(Metric::CurrentPrice, 150.0)
                .with(Metric::TrailingPe, 20.0)
                .with(Metric::EarningsQuarterlyGrowth, 0.10)
                .with(Metric::DividendYield, 0.02)
                .with(Metric::FreeCashFlow, 100.0)
                .with(Metric::SharesOutstanding, 10.0)
                .with(Metric::EarningsGrowth, 0.08)
                .with(Metric::TrailingEps, 7.5)
                .with(Metric::RevenueGrowth, 0.25)
                .with(Metric::OperatingMargins, 0.20),
            FinancialSnapshot::new("PEP").with(Metric::TrailingPe, 16.0),
            FinancialSnapshot::new("KDP").with(Metric::TrailingPe, 20.0),
            FinancialSnapshot::new("DRILL")
                .with_industry("Oil & Gas Drilling")
                .with_sector("Energy"),
        ])
    }

    fn settings(dir: &Path) -> Settings {
        Settings {
            output_dir: dir.to_path_buf(),
            format: OutputFormat::Text,
            progress: false,
            current_year: 2025,
        }
    }

    fn prompter(input: &str) -> Prompter<Cursor<Vec<u8>>, Vec<u8>> {
        Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn output(p: Prompter<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(p.out).unwrap()
    }

    #[tokio::test]
    async fn test_valuation_tool_prompts() {
        let dir = tempfile::tempdir().unwrap();
        // DCF defaults, one manual peer, P/E only.
        let mut p = prompter("\n\n\n\nmissing\np/e\n");
        let options = ValuationOptions {
            suggest: true,
            ..ValuationOptions::default()
        };

        let report = valuation_tool(&provider(), &mut p, &settings(dir.path()), "acme", &options)
            .await
            .unwrap();

        assert_eq!(report.symbol, "ACME");
        assert_eq!(report.average_multiples[&Multiple::Pe], 18.0);
        assert_eq!(report.comps[&Multiple::Pe], 135.0);
        assert!(dir.path().join("ACME_valuation_report.txt").exists());

        let out = output(p);
        assert!(out.contains("Current market price for ACME: $150.00"));
        assert!(out.contains("PEGY ratio: 1.67"));
        assert!(out.contains("Suggested peers in same industry (Beverages - Non-Alcoholic): KO, PEP, KDP, DGE.L, CCH.L"));
        assert!(out.contains("Intrinsic value per share (DCF): $181.58"));
        assert!(out.contains("P/E: $135.00 (avg multiple 18.00)"));
        assert!(out.contains("Rule of 40: Meets Rule of 40 (Score = 45.00%)"));
    }

    #[tokio::test]
    async fn test_valuation_tool_without_peers() {
        let dir = tempfile::tempdir().unwrap();
        let mut p = prompter("");
        let options = ValuationOptions {
            assumptions: Some(DcfAssumptions::default()),
            peers: Some(Vec::new()),
            multiples: None,
            suggest: false,
        };

        let report = valuation_tool(&provider(), &mut p, &settings(dir.path()), "ACME", &options)
            .await
            .unwrap();

        assert!(report.comps.is_empty());
        assert!(output(p).contains("No peers specified - skipping comparable valuation."));
    }

    #[tokio::test]
    async fn test_invalid_dcf_assumptions_are_reported() {
        let dir = tempfile::tempdir().unwrap();
        let mut p = prompter("");
        let options = ValuationOptions {
            assumptions: Some(DcfAssumptions {
                discount_rate: 0.02,
                ..DcfAssumptions::default()
            }),
            peers: Some(Vec::new()),
            ..ValuationOptions::default()
        };

        let report = valuation_tool(&provider(), &mut p, &settings(dir.path()), "ACME", &options)
            .await
            .unwrap();
        assert!(report.dcf.is_none());
        assert!(output(p).contains("DCF skipped: "));
    }

    #[tokio::test]
    async fn test_dcf_tool_rejects_invalid_assumptions() {
        let dir = tempfile::tempdir().unwrap();
        let mut p = prompter("0\n0.03\n0.03\n5\n");
        let result = dcf_tool(&provider(), &mut p, &settings(dir.path()), "ACME", None).await;
        assert!(matches!(result, Err(ToolError::Valuation(_))));
    }

    #[tokio::test]
    async fn test_peers_tool_with_industry() {
        let dir = tempfile::tempdir().unwrap();
        let mut p = prompter("");
        let query = PeerQuery {
            industry: Some("Auto Manufacturers".to_string()),
            index: Some(StockIndex::Sp500),
            max_peers: 10,
            ..PeerQuery::default()
        };
        let peers = peers_tool(&provider(), &mut p, &settings(dir.path()), "TSLA", &query)
            .await
            .unwrap();
        assert_eq!(peers, vec!["GM", "F"]);
        assert!(output(p).contains("Suggested peers in same industry (Auto Manufacturers): GM, F"));
    }

    #[tokio::test]
    async fn test_peers_tool_falls_back_to_sector() {
        let dir = tempfile::tempdir().unwrap();
        let mut p = prompter("");
        let query = PeerQuery {
            index: Some(StockIndex::Ftse100),
            max_peers: 10,
            ..PeerQuery::default()
        };
        let peers = peers_tool(&provider(), &mut p, &settings(dir.path()), "drill", &query)
            .await
            .unwrap();
        assert_eq!(peers, vec!["SHEL.L", "BP.L"]);
        assert!(output(p).contains("Suggested peers in same sector (Energy): SHEL.L, BP.L"));
    }

    #[tokio::test]
    async fn test_peers_tool_with_sector() {
        let dir = tempfile::tempdir().unwrap();
        let mut p = prompter("");
        let query = PeerQuery {
            sector: Some(GicsSector::Utilities),
            max_peers: 2,
            ..PeerQuery::default()
        };
        let peers = peers_tool(&provider(), &mut p, &settings(dir.path()), "UNKNOWN", &query)
            .await
            .unwrap();
        assert_eq!(peers.len(), 2);
    }

    #[tokio::test]
    async fn test_peers_tool_without_match() {
        let dir = tempfile::tempdir().unwrap();
        let mut p = prompter("");
        let query = PeerQuery {
            industry: Some("Space Mining".to_string()),
            max_peers: 10,
            ..PeerQuery::default()
        };
        let peers = peers_tool(&provider(), &mut p, &settings(dir.path()), "X", &query)
            .await
            .unwrap();
        assert!(peers.is_empty());
        assert!(output(p).contains("No peers found for X."));
    }

    #[tokio::test]
    async fn test_valuation_suggests_sector_peers() {
        let dir = tempfile::tempdir().unwrap();
        let mut p = prompter("");
        let options = ValuationOptions {
            assumptions: Some(DcfAssumptions::default()),
            peers: Some(Vec::new()),
            multiples: Some(vec![Multiple::Pe]),
            suggest: true,
        };
        valuation_tool(&provider(), &mut p, &settings(dir.path()), "DRILL", &options)
            .await
            .unwrap();
        assert!(output(p).contains("Suggested peers in same sector (Energy): XOM, CVX, COP"));
    }

    #[test]
    fn test_scorers_tool_lists_categories() {
        let dir = tempfile::tempdir().unwrap();
        let mut p = prompter("");
        scorers_tool(&mut p, &settings(dir.path()), None, None).unwrap();

        let out = output(p);
        assert!(out.starts_with("Value:\n  pe "));
        assert!(out.contains("P/B Ratio (not in aggregate)"));
        assert!(out.contains("Income:\n  dividend_yield"));
    }

    #[test]
    fn test_scorers_tool_scores_value() {
        let dir = tempfile::tempdir().unwrap();
        let mut p = prompter("");
        scorers_tool(&mut p, &settings(dir.path()), Some("pe"), Some(25.0)).unwrap();
        assert!(output(p).contains("25 -> Score: 5/10 (Fair)"));

        let mut p = prompter("");
        let result = scorers_tool(&mut p, &settings(dir.path()), Some("peg"), None);
        assert!(matches!(result, Err(ToolError::UnknownScorer(_))));
    }

    #[tokio::test]
    async fn test_projection_tool_missing_revenue() {
        let dir = tempfile::tempdir().unwrap();
        let mut p = prompter("");
        let options = ProjectionOptions {
            years: 5,
            base_market_cap: None,
            revenue: None,
        };
        projection_tool(&provider(), &mut p, &settings(dir.path()), "ACME", options)
            .await
            .unwrap();
        assert!(output(p).contains("Projection unavailable"));
    }

    #[tokio::test]
    async fn test_menu_continues_after_errors() {
        let dir = tempfile::tempdir().unwrap();
        let mut p = prompter("9\n2\nnope\n3\nacme\n0\n");
        run_menu(&provider(), &mut p, &settings(dir.path()))
            .await
            .unwrap();

        let out = output(p);
        assert!(out.contains("Invalid choice. Please try again."));
        assert!(out.contains("Error: Invalid symbol: NOPE"));
        assert!(out.contains("\nCompany classified as "));
        assert!(out.ends_with("Exiting. Goodbye!\n"));
    }

    #[tokio::test]
    async fn test_menu_exits_at_end_of_input() {
        let dir = tempfile::tempdir().unwrap();
        let mut p = prompter("");
        run_menu(&provider(), &mut p, &settings(dir.path()))
            .await
            .unwrap();
        assert!(output(p).ends_with("Exiting. Goodbye!\n"));
    }
}
