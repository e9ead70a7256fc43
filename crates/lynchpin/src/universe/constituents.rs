//! Index constituents with GICS sector and industry labels.
//!
//! Symbols are Yahoo Finance tickers, so DAX members carry a `.DE` suffix and
//! FTSE 100 members a `.L` suffix. Industry labels follow Yahoo's naming so
//! that a fetched snapshot's industry can be matched against them.

use super::StockIndex;
use super::gics::GicsSector;
use serde::{Deserialize, Serialize};

/// Index constituent with GICS sector and industries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Constituent {
    /// Stock symbol.
    pub symbol: String,
    /// GICS sector.
    pub sector: GicsSector,
    /// Industry labels, most specific first.
    pub industries: Vec<String>,
}

impl Constituent {
    /// Create a new constituent.
    pub fn new(symbol: impl Into<String>, sector: GicsSector, industries: &[&str]) -> Self {
        Self {
            symbol: symbol.into(),
            sector,
            industries: industries.iter().map(|i| (*i).to_string()).collect(),
        }
    }

    /// Whether any industry label equals `industry`, ignoring case.
    pub fn has_industry(&self, industry: &str) -> bool {
        let industry = industry.trim();
        self.industries
            .iter()
            .any(|i| i.eq_ignore_ascii_case(industry))
    }
}

/// Constituents of one stock index.
#[derive(Debug, Clone)]
pub struct IndexUniverse {
    index: StockIndex,
    constituents: Vec<Constituent>,
}

impl IndexUniverse {
    /// Load the constituents of `index`.
    pub fn by_index(index: StockIndex) -> Self {
        let constituents = match index {
            StockIndex::Sp500 => sp500(),
            StockIndex::Dax => dax(),
            StockIndex::Ftse100 => ftse100(),
        };
        Self {
            index,
            constituents,
        }
    }

    /// The index these constituents belong to.
    pub const fn index(&self) -> StockIndex {
        self.index
    }

    /// Get all constituents.
    pub fn constituents(&self) -> &[Constituent] {
        &self.constituents
    }
}

fn sp500() -> Vec<Constituent> {
    use GicsSector::*;

    vec![
        // Information Technology (45)
        Constituent::new("AAPL", InformationTechnology, &["Consumer Electronics", "Technology Hardware"]),
        Constituent::new("MSFT", InformationTechnology, &["Software - Infrastructure", "Software"]),
        Constituent::new("NVDA", InformationTechnology, &["Semiconductors"]),
        Constituent::new("AVGO", InformationTechnology, &["Semiconductors"]),
        Constituent::new("AMD", InformationTechnology, &["Semiconductors"]),
        Constituent::new("INTC", InformationTechnology, &["Semiconductors"]),
        Constituent::new("TXN", InformationTechnology, &["Semiconductors"]),
        Constituent::new("QCOM", InformationTechnology, &["Semiconductors"]),
        Constituent::new("AMAT", InformationTechnology, &["Semiconductor Equipment & Materials"]),
        Constituent::new("LRCX", InformationTechnology, &["Semiconductor Equipment & Materials"]),
        Constituent::new("ORCL", InformationTechnology, &["Software - Infrastructure", "Software"]),
        Constituent::new("ADBE", InformationTechnology, &["Software - Application", "Software"]),
        Constituent::new("CRM", InformationTechnology, &["Software - Application", "Software"]),
        Constituent::new("NOW", InformationTechnology, &["Software - Application", "Software"]),
        Constituent::new("INTU", InformationTechnology, &["Software - Application", "Software"]),
        Constituent::new("CSCO", InformationTechnology, &["Communication Equipment"]),
        Constituent::new("ACN", InformationTechnology, &["Information Technology Services"]),
        Constituent::new("IBM", InformationTechnology, &["Information Technology Services"]),
        // Health Care (35)
        Constituent::new("LLY", HealthCare, &["Drug Manufacturers - General", "Pharmaceuticals"]),
        Constituent::new("JNJ", HealthCare, &["Drug Manufacturers - General", "Pharmaceuticals"]),
        Constituent::new("ABBV", HealthCare, &["Drug Manufacturers - General", "Pharmaceuticals"]),
        Constituent::new("MRK", HealthCare, &["Drug Manufacturers - General", "Pharmaceuticals"]),
        Constituent::new("PFE", HealthCare, &["Drug Manufacturers - General", "Pharmaceuticals"]),
        Constituent::new("BMY", HealthCare, &["Drug Manufacturers - General", "Pharmaceuticals"]),
        Constituent::new("AMGN", HealthCare, &["Drug Manufacturers - General", "Biotechnology"]),
        Constituent::new("GILD", HealthCare, &["Drug Manufacturers - General", "Biotechnology"]),
        Constituent::new("UNH", HealthCare, &["Healthcare Plans"]),
        Constituent::new("CVS", HealthCare, &["Healthcare Plans"]),
        Constituent::new("TMO", HealthCare, &["Diagnostics & Research"]),
        Constituent::new("DHR", HealthCare, &["Diagnostics & Research"]),
        Constituent::new("ABT", HealthCare, &["Medical Devices"]),
        Constituent::new("MDT", HealthCare, &["Medical Devices"]),
        Constituent::new("SYK", HealthCare, &["Medical Devices"]),
        // Financials (40)
        Constituent::new("BRK-B", Financials, &["Insurance - Diversified", "Insurance"]),
        Constituent::new("JPM", Financials, &["Banks - Diversified", "Banks"]),
        Constituent::new("BAC", Financials, &["Banks - Diversified", "Banks"]),
        Constituent::new("WFC", Financials, &["Banks - Diversified", "Banks"]),
        Constituent::new("C", Financials, &["Banks - Diversified", "Banks"]),
        Constituent::new("USB", Financials, &["Banks - Regional", "Banks"]),
        Constituent::new("PNC", Financials, &["Banks - Regional", "Banks"]),
        Constituent::new("GS", Financials, &["Capital Markets"]),
        Constituent::new("MS", Financials, &["Capital Markets"]),
        Constituent::new("SCHW", Financials, &["Capital Markets"]),
        Constituent::new("V", Financials, &["Credit Services"]),
        Constituent::new("MA", Financials, &["Credit Services"]),
        Constituent::new("AXP", Financials, &["Credit Services"]),
        Constituent::new("BLK", Financials, &["Asset Management"]),
        Constituent::new("CB", Financials, &["Insurance - Property & Casualty", "Insurance"]),
        Constituent::new("PGR", Financials, &["Insurance - Property & Casualty", "Insurance"]),
        // Consumer Discretionary (25)
        Constituent::new("AMZN", ConsumerDiscretionary, &["Internet Retail"]),
        Constituent::new("EBAY", ConsumerDiscretionary, &["Internet Retail"]),
        Constituent::new("TSLA", ConsumerDiscretionary, &["Auto Manufacturers"]),
        Constituent::new("GM", ConsumerDiscretionary, &["Auto Manufacturers"]),
        Constituent::new("F", ConsumerDiscretionary, &["Auto Manufacturers"]),
        Constituent::new("HD", ConsumerDiscretionary, &["Home Improvement Retail"]),
        Constituent::new("LOW", ConsumerDiscretionary, &["Home Improvement Retail"]),
        Constituent::new("MCD", ConsumerDiscretionary, &["Restaurants"]),
        Constituent::new("SBUX", ConsumerDiscretionary, &["Restaurants"]),
        Constituent::new("CMG", ConsumerDiscretionary, &["Restaurants"]),
        Constituent::new("NKE", ConsumerDiscretionary, &["Footwear & Accessories"]),
        Constituent::new("TJX", ConsumerDiscretionary, &["Apparel Retail"]),
        Constituent::new("BKNG", ConsumerDiscretionary, &["Travel Services"]),
        // Communication Services (50)
        Constituent::new("GOOGL", CommunicationServices, &["Internet Content & Information"]),
        Constituent::new("META", CommunicationServices, &["Internet Content & Information"]),
        Constituent::new("NFLX", CommunicationServices, &["Entertainment"]),
        Constituent::new("DIS", CommunicationServices, &["Entertainment"]),
        Constituent::new("CMCSA", CommunicationServices, &["Telecom Services"]),
        Constituent::new("T", CommunicationServices, &["Telecom Services"]),
        Constituent::new("VZ", CommunicationServices, &["Telecom Services"]),
        Constituent::new("TMUS", CommunicationServices, &["Telecom Services"]),
        // Industrials (20)
        Constituent::new("CAT", Industrials, &["Farm & Heavy Construction Machinery"]),
        Constituent::new("DE", Industrials, &["Farm & Heavy Construction Machinery"]),
        Constituent::new("GE", Industrials, &["Aerospace & Defense"]),
        Constituent::new("RTX", Industrials, &["Aerospace & Defense"]),
        Constituent::new("BA", Industrials, &["Aerospace & Defense"]),
        Constituent::new("LMT", Industrials, &["Aerospace & Defense"]),
        Constituent::new("HON", Industrials, &["Conglomerates"]),
        Constituent::new("MMM", Industrials, &["Conglomerates"]),
        Constituent::new("UPS", Industrials, &["Integrated Freight & Logistics"]),
        Constituent::new("FDX", Industrials, &["Integrated Freight & Logistics"]),
        Constituent::new("UNP", Industrials, &["Railroads"]),
        Constituent::new("CSX", Industrials, &["Railroads"]),
        // Consumer Staples (30)
        Constituent::new("PG", ConsumerStaples, &["Household & Personal Products"]),
        Constituent::new("CL", ConsumerStaples, &["Household & Personal Products"]),
        Constituent::new("KMB", ConsumerStaples, &["Household & Personal Products"]),
        Constituent::new("KO", ConsumerStaples, &["Beverages - Non-Alcoholic", "Beverages"]),
        Constituent::new("PEP", ConsumerStaples, &["Beverages - Non-Alcoholic", "Beverages"]),
        Constituent::new("KDP", ConsumerStaples, &["Beverages - Non-Alcoholic", "Beverages"]),
        Constituent::new("WMT", ConsumerStaples, &["Discount Stores"]),
        Constituent::new("COST", ConsumerStaples, &["Discount Stores"]),
        Constituent::new("PM", ConsumerStaples, &["Tobacco"]),
        Constituent::new("MO", ConsumerStaples, &["Tobacco"]),
        Constituent::new("MDLZ", ConsumerStaples, &["Confectioners"]),
        Constituent::new("HSY", ConsumerStaples, &["Confectioners"]),
        // Energy (10)
        Constituent::new("XOM", Energy, &["Oil & Gas Integrated"]),
        Constituent::new("CVX", Energy, &["Oil & Gas Integrated"]),
        Constituent::new("COP", Energy, &["Oil & Gas E&P"]),
        Constituent::new("EOG", Energy, &["Oil & Gas E&P"]),
        Constituent::new("SLB", Energy, &["Oil & Gas Equipment & Services"]),
        Constituent::new("MPC", Energy, &["Oil & Gas Refining & Marketing"]),
        Constituent::new("PSX", Energy, &["Oil & Gas Refining & Marketing"]),
        // Utilities (55)
        Constituent::new("NEE", Utilities, &["Utilities - Regulated Electric"]),
        Constituent::new("DUK", Utilities, &["Utilities - Regulated Electric"]),
        Constituent::new("SO", Utilities, &["Utilities - Regulated Electric"]),
        Constituent::new("AEP", Utilities, &["Utilities - Regulated Electric"]),
        Constituent::new("D", Utilities, &["Utilities - Regulated Electric"]),
        // Real Estate (60)
        Constituent::new("PLD", RealEstate, &["REIT - Industrial"]),
        Constituent::new("AMT", RealEstate, &["REIT - Specialty"]),
        Constituent::new("EQIX", RealEstate, &["REIT - Specialty"]),
        Constituent::new("SPG", RealEstate, &["REIT - Retail"]),
        Constituent::new("O", RealEstate, &["REIT - Retail"]),
        // Materials (15)
        Constituent::new("LIN", Materials, &["Specialty Chemicals", "Chemicals"]),
        Constituent::new("SHW", Materials, &["Specialty Chemicals", "Chemicals"]),
        Constituent::new("ECL", Materials, &["Specialty Chemicals", "Chemicals"]),
        Constituent::new("DOW", Materials, &["Chemicals"]),
        Constituent::new("FCX", Materials, &["Copper"]),
        Constituent::new("NEM", Materials, &["Gold"]),
        Constituent::new("NUE", Materials, &["Steel"]),
    ]
}

fn dax() -> Vec<Constituent> {
    use GicsSector::*;

    vec![
        Constituent::new("SAP.DE", InformationTechnology, &["Software - Application", "Software"]),
        Constituent::new("IFX.DE", InformationTechnology, &["Semiconductors"]),
        Constituent::new("SIE.DE", Industrials, &["Specialty Industrial Machinery", "Conglomerates"]),
        Constituent::new("AIR.DE", Industrials, &["Aerospace & Defense"]),
        Constituent::new("RHM.DE", Industrials, &["Aerospace & Defense"]),
        Constituent::new("MTX.DE", Industrials, &["Aerospace & Defense"]),
        Constituent::new("DHL.DE", Industrials, &["Integrated Freight & Logistics"]),
        Constituent::new("DTG.DE", Industrials, &["Farm & Heavy Construction Machinery"]),
        Constituent::new("SHL.DE", HealthCare, &["Medical Devices"]),
        Constituent::new("MRK.DE", HealthCare, &["Drug Manufacturers - General", "Pharmaceuticals"]),
        Constituent::new("BAYN.DE", HealthCare, &["Drug Manufacturers - General", "Pharmaceuticals"]),
        Constituent::new("FRE.DE", HealthCare, &["Medical Care Facilities"]),
        Constituent::new("FME.DE", HealthCare, &["Medical Care Facilities"]),
        Constituent::new("QIA.DE", HealthCare, &["Diagnostics & Research"]),
        Constituent::new("ALV.DE", Financials, &["Insurance - Diversified", "Insurance"]),
        Constituent::new("MUV2.DE", Financials, &["Insurance - Reinsurance", "Insurance"]),
        Constituent::new("HNR1.DE", Financials, &["Insurance - Reinsurance", "Insurance"]),
        Constituent::new("DBK.DE", Financials, &["Banks - Regional", "Banks"]),
        Constituent::new("CBK.DE", Financials, &["Banks - Regional", "Banks"]),
        Constituent::new("DB1.DE", Financials, &["Financial Data & Stock Exchanges"]),
        Constituent::new("MBG.DE", ConsumerDiscretionary, &["Auto Manufacturers"]),
        Constituent::new("BMW.DE", ConsumerDiscretionary, &["Auto Manufacturers"]),
        Constituent::new("VOW3.DE", ConsumerDiscretionary, &["Auto Manufacturers"]),
        Constituent::new("P911.DE", ConsumerDiscretionary, &["Auto Manufacturers"]),
        Constituent::new("PAH3.DE", ConsumerDiscretionary, &["Auto Manufacturers"]),
        Constituent::new("CON.DE", ConsumerDiscretionary, &["Auto Parts"]),
        Constituent::new("ADS.DE", ConsumerDiscretionary, &["Footwear & Accessories"]),
        Constituent::new("ZAL.DE", ConsumerDiscretionary, &["Internet Retail"]),
        Constituent::new("DTE.DE", CommunicationServices, &["Telecom Services"]),
        Constituent::new("BEI.DE", ConsumerStaples, &["Household & Personal Products"]),
        Constituent::new("HEN3.DE", ConsumerStaples, &["Household & Personal Products"]),
        Constituent::new("EOAN.DE", Utilities, &["Utilities - Diversified"]),
        Constituent::new("RWE.DE", Utilities, &["Utilities - Diversified"]),
        Constituent::new("ENR.DE", Industrials, &["Specialty Industrial Machinery"]),
        Constituent::new("VNA.DE", RealEstate, &["Real Estate Services"]),
        Constituent::new("BAS.DE", Materials, &["Chemicals"]),
        Constituent::new("SY1.DE", Materials, &["Specialty Chemicals", "Chemicals"]),
        Constituent::new("HEI.DE", Materials, &["Building Materials"]),
        Constituent::new("BNR.DE", Materials, &["Specialty Chemicals", "Chemicals"]),
        Constituent::new("SRT3.DE", HealthCare, &["Medical Instruments & Supplies"]),
    ]
}

fn ftse100() -> Vec<Constituent> {
    use GicsSector::*;

    vec![
        Constituent::new("SHEL.L", Energy, &["Oil & Gas Integrated"]),
        Constituent::new("BP.L", Energy, &["Oil & Gas Integrated"]),
        Constituent::new("AZN.L", HealthCare, &["Drug Manufacturers - General", "Pharmaceuticals"]),
        Constituent::new("GSK.L", HealthCare, &["Drug Manufacturers - General", "Pharmaceuticals"]),
        Constituent::new("HIK.L", HealthCare, &["Drug Manufacturers - Specialty & Generic", "Pharmaceuticals"]),
        Constituent::new("SN.L", HealthCare, &["Medical Devices"]),
        Constituent::new("HSBA.L", Financials, &["Banks - Diversified", "Banks"]),
        Constituent::new("BARC.L", Financials, &["Banks - Diversified", "Banks"]),
        Constituent::new("LLOY.L", Financials, &["Banks - Regional", "Banks"]),
        Constituent::new("NWG.L", Financials, &["Banks - Regional", "Banks"]),
        Constituent::new("STAN.L", Financials, &["Banks - Diversified", "Banks"]),
        Constituent::new("LSEG.L", Financials, &["Financial Data & Stock Exchanges"]),
        Constituent::new("LGEN.L", Financials, &["Insurance - Life", "Insurance"]),
        Constituent::new("AV.L", Financials, &["Insurance - Diversified", "Insurance"]),
        Constituent::new("PRU.L", Financials, &["Insurance - Life", "Insurance"]),
        Constituent::new("ULVR.L", ConsumerStaples, &["Household & Personal Products"]),
        Constituent::new("RKT.L", ConsumerStaples, &["Household & Personal Products"]),
        Constituent::new("DGE.L", ConsumerStaples, &["Beverages - Wineries & Distilleries", "Beverages"]),
        Constituent::new("CCH.L", ConsumerStaples, &["Beverages - Non-Alcoholic", "Beverages"]),
        Constituent::new("BATS.L", ConsumerStaples, &["Tobacco"]),
        Constituent::new("IMB.L", ConsumerStaples, &["Tobacco"]),
        Constituent::new("TSCO.L", ConsumerStaples, &["Grocery Stores"]),
        Constituent::new("SBRY.L", ConsumerStaples, &["Grocery Stores"]),
        Constituent::new("NXT.L", ConsumerDiscretionary, &["Department Stores"]),
        Constituent::new("BME.L", ConsumerDiscretionary, &["Discount Stores"]),
        Constituent::new("CPG.L", ConsumerDiscretionary, &["Restaurants"]),
        Constituent::new("IHG.L", ConsumerDiscretionary, &["Lodging"]),
        Constituent::new("REL.L", Industrials, &["Specialty Business Services"]),
        Constituent::new("EXPN.L", Industrials, &["Consulting Services"]),
        Constituent::new("BA.L", Industrials, &["Aerospace & Defense"]),
        Constituent::new("RR.L", Industrials, &["Aerospace & Defense"]),
        Constituent::new("BNZL.L", Industrials, &["Industrial Distribution"]),
        Constituent::new("VOD.L", CommunicationServices, &["Telecom Services"]),
        Constituent::new("BT-A.L", CommunicationServices, &["Telecom Services"]),
        Constituent::new("WPP.L", CommunicationServices, &["Advertising Agencies"]),
        Constituent::new("SGE.L", InformationTechnology, &["Software - Application", "Software"]),
        Constituent::new("HLMA.L", InformationTechnology, &["Scientific & Technical Instruments"]),
        Constituent::new("NG.L", Utilities, &["Utilities - Regulated Electric"]),
        Constituent::new("SSE.L", Utilities, &["Utilities - Regulated Electric"]),
        Constituent::new("LAND.L", RealEstate, &["REIT - Diversified"]),
        Constituent::new("SGRO.L", RealEstate, &["REIT - Industrial"]),
        Constituent::new("RIO.L", Materials, &["Other Industrial Metals & Mining"]),
        Constituent::new("GLEN.L", Materials, &["Other Industrial Metals & Mining"]),
        Constituent::new("AAL.L", Materials, &["Other Industrial Metals & Mining"]),
        Constituent::new("ANTO.L", Materials, &["Copper"]),
        Constituent::new("CRDA.L", Materials, &["Specialty Chemicals", "Chemicals"]),
    ]
}
