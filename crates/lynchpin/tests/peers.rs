//! Peer suggestion feeding a comparables valuation.

use lynchpin::data::{FinancialSnapshot, InMemoryProvider, Metric};
use lynchpin::universe::{DEFAULT_MAX_PEERS, StockIndex, merge_peers, suggest_peers_across};
use lynchpin::valuation::{Multiple, apply_comps, collect_peer_multiples};

#[tokio::test]
async fn test_suggested_peers_drive_comps() {
    let target = FinancialSnapshot::new("KO")
        .with_industry("Beverages - Non-Alcoholic")
        .with(Metric::SharesOutstanding, 4_300_000_000.0)
        .with(Metric::TrailingEps, 2.5)
        .with(Metric::TotalRevenue, 46_000_000_000.0);

    let industry = target.industry.clone().unwrap_or_default();
    let suggested =
        suggest_peers_across(&industry, &target.symbol, &StockIndex::ALL, DEFAULT_MAX_PEERS);
    assert_eq!(suggested, vec!["PEP", "KDP", "DGE.L", "CCH.L"]);

    let peers = merge_peers(&suggested, &["mnst"]);
    let provider = InMemoryProvider::from_snapshots([
        FinancialSnapshot::new("PEP")
            .with(Metric::TrailingPe, 20.0)
            .with(Metric::PriceToSales, 2.5),
        FinancialSnapshot::new("KDP")
            .with(Metric::TrailingPe, 30.0)
            .with(Metric::PriceToSales, 3.5),
        FinancialSnapshot::new("MNST").with(Metric::TrailingPe, 34.0),
    ]);

    let collected = collect_peer_multiples(&provider, &peers, &[Multiple::Pe, Multiple::Ps]).await;
    assert_eq!(collected.failed(), &["DGE.L".to_string(), "CCH.L".to_string()]);

    let averages = collected.averages();
    assert_eq!(averages[&Multiple::Pe], 28.0);
    assert_eq!(averages[&Multiple::Ps], 3.0);

    let implied = apply_comps(&target, &averages);
    assert_eq!(implied[&Multiple::Pe], 70.0);
    assert!(implied.contains_key(&Multiple::Ps));
}
