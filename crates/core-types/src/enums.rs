use serde::{Deserialize, Serialize};

/// The legal form of a financial instrument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InstrumentType {
    Cash,
    CertificateOfDeposit,
    Etf,
    FuturesContract,
    Loan,
    Mortgage,
    MuniBond,
    MutualFund,
    Reits,
    Stock,
    Treasuries,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssetClass {
    Equity,
    FixedIncome,
    CashEquivalent,
    Commodity,
    RealEstate,
}

/// The closed set of entity kinds an ESG score or holding may attach to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HolderKind {
    Instrument,
    Company,
    Portfolio,
}
