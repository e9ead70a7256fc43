//! Peer suggestion by industry.

use super::StockIndex;
use super::constituents::{Constituent, IndexUniverse};
use super::gics::GicsSector;
use std::collections::HashSet;

/// Maximum number of peers suggested unless the caller asks otherwise.
pub const DEFAULT_MAX_PEERS: usize = 10;

fn words(label: &str) -> HashSet<String> {
    label.split_whitespace().map(str::to_lowercase).collect()
}

/// Whether every word of `candidate` appears in `target`, ignoring case.
///
/// `"Software - Infrastructure"` matches a candidate labelled `"Software"`,
/// but not the other way round. A blank candidate never matches.
pub fn is_partial_match(target: &str, candidate: &str) -> bool {
    let candidate = words(candidate);
    !candidate.is_empty() && candidate.is_subset(&words(target))
}

fn collect_peers<'a>(
    constituents: impl IntoIterator<Item = &'a Constituent>,
    exclude: &str,
    max_peers: usize,
    matches: impl Fn(&Constituent) -> bool,
) -> Vec<String> {
    let mut peers: Vec<String> = Vec::new();
    for constituent in constituents {
        if peers.len() >= max_peers {
            break;
        }
        if constituent.symbol.eq_ignore_ascii_case(exclude)
            || peers.iter().any(|p| p.eq_ignore_ascii_case(&constituent.symbol))
        {
            continue;
        }
        if matches(constituent) {
            peers.push(constituent.symbol.clone());
        }
    }
    peers
}

/// Up to `max_peers` constituents of `index` whose industry equals
/// `industry`, ignoring case. `exclude` is the target's own symbol.
pub fn suggest_peers(
    industry: &str,
    exclude: &str,
    index: StockIndex,
    max_peers: usize,
) -> Vec<String> {
    if industry.trim().is_empty() {
        return Vec::new();
    }
    let universe = IndexUniverse::by_index(index);
    let peers = collect_peers(universe.constituents(), exclude, max_peers, |c| {
        c.has_industry(industry)
    });
    tracing::debug!(industry, %index, count = peers.len(), "Suggested peers");
    peers
}

/// Up to `max_peers` constituents across `indexes` whose industry partially
/// matches `industry`. Indexes are searched in the order given.
pub fn suggest_peers_across(
    industry: &str,
    exclude: &str,
    indexes: &[StockIndex],
    max_peers: usize,
) -> Vec<String> {
    let universes: Vec<IndexUniverse> = indexes.iter().map(|i| IndexUniverse::by_index(*i)).collect();
    let peers = collect_peers(
        universes.iter().flat_map(IndexUniverse::constituents),
        exclude,
        max_peers,
        |c| c.industries.iter().any(|i| is_partial_match(industry, i)),
    );
    tracing::debug!(industry, count = peers.len(), "Suggested peers across indexes");
    peers
}

/// Up to `max_peers` constituents across `indexes` in the same GICS sector.
///
/// Used when nothing shares the target's industry.
pub fn suggest_sector_peers(
    sector: GicsSector,
    exclude: &str,
    indexes: &[StockIndex],
    max_peers: usize,
) -> Vec<String> {
    let universes: Vec<IndexUniverse> = indexes.iter().map(|i| IndexUniverse::by_index(*i)).collect();
    let peers = collect_peers(
        universes.iter().flat_map(IndexUniverse::constituents),
        exclude,
        max_peers,
        |c| c.sector == sector,
    );
    tracing::debug!(%sector, count = peers.len(), "Suggested sector peers");
    peers
}

/// Merge suggested and manually entered peers.
///
/// Manual entries are trimmed and upper-cased; blanks and duplicates are
/// dropped. Suggested peers keep their order and come first.
pub fn merge_peers<S: AsRef<str>>(suggested: &[String], manual: &[S]) -> Vec<String> {
    let mut merged: Vec<String> = Vec::with_capacity(suggested.len() + manual.len());
    let candidates = suggested
        .iter()
        .map(|s| s.trim().to_uppercase())
        .chain(manual.iter().map(|s| s.as_ref().trim().to_uppercase()));

    for symbol in candidates {
        if !symbol.is_empty() && !merged.contains(&symbol) {
            merged.push(symbol);
        }
    }
    merged
}
