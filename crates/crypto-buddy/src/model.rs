//! Domain Models
//!
//! The recommendation data store: a small, ordered, immutable table of
//! coins and their attributes. Catalog order is insertion order and drives
//! both tie-breaking and list ordering in the rule engine.

use serde::{Deserialize, Serialize};

use crate::error::{AdvisorError, Result};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PriceTrend {
    Rising,
    Stable,
    Falling,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarketCap {
    High,
    Medium,
    Low,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnergyUse {
    High,
    Medium,
    Low,
}

/// Known attributes of one cryptocurrency
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CoinRecord {
    pub price_trend: PriceTrend,

    pub market_cap: MarketCap,

    pub energy_use: EnergyUse,

    /// Environmental friendliness in 0.0..=1.0, higher is better
    pub sustainability_score: f64,
}

impl CoinRecord {
    pub fn new(
        price_trend: PriceTrend,
        market_cap: MarketCap,
        energy_use: EnergyUse,
        sustainability_score: f64,
    ) -> Self {
        Self {
            price_trend,
            market_cap,
            energy_use,
            sustainability_score,
        }
    }

    pub fn is_rising(&self) -> bool {
        self.price_trend == PriceTrend::Rising
    }

    fn has_valid_score(&self) -> bool {
        (0.0..=1.0).contains(&self.sustainability_score)
    }
}

/// A catalog row: coin identifier plus its record
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub id: String,

    #[serde(flatten)]
    pub record: CoinRecord,
}

/// Ordered mapping from coin identifier to record
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<CatalogEntry>", into = "Vec<CatalogEntry>")]
pub struct CoinCatalog {
    entries: Vec<CatalogEntry>,
}

impl CoinCatalog {
    pub fn builder() -> CatalogBuilder {
        CatalogBuilder::default()
    }

    /// The built-in three-coin table
    pub fn default_catalog() -> Self {
        let entry = |id: &str, record| CatalogEntry { id: id.into(), record };
        Self {
            entries: vec![
                entry("Bitcoin", CoinRecord::new(PriceTrend::Rising, MarketCap::High, EnergyUse::High, 0.3)),
                entry("Ethereum", CoinRecord::new(PriceTrend::Stable, MarketCap::High, EnergyUse::Medium, 0.6)),
                entry("Cardano", CoinRecord::new(PriceTrend::Rising, MarketCap::Medium, EnergyUse::Low, 0.8)),
            ],
        }
    }

    /// Parse an ordered JSON array of entries
    pub fn from_json(json: &str) -> Result<Self> {
        let entries: Vec<CatalogEntry> = serde_json::from_str(json)?;
        Self::try_from(entries)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.entries)?)
    }

    pub fn get(&self, id: &str) -> Option<&CoinRecord> {
        self.entries.iter().find(|e| e.id == id).map(|e| &e.record)
    }

    /// Entries in catalog order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &CoinRecord)> {
        self.entries.iter().map(|e| (e.id.as_str(), &e.record))
    }

    pub fn ids(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.id.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for CoinCatalog {
    fn default() -> Self {
        Self::default_catalog()
    }
}

impl TryFrom<Vec<CatalogEntry>> for CoinCatalog {
    type Error = AdvisorError;

    fn try_from(entries: Vec<CatalogEntry>) -> Result<Self> {
        for (i, entry) in entries.iter().enumerate() {
            if !entry.record.has_valid_score() {
                return Err(AdvisorError::InvalidScore {
                    coin: entry.id.clone(),
                    score: entry.record.sustainability_score,
                });
            }
            if entries[..i].iter().any(|e| e.id == entry.id) {
                return Err(AdvisorError::DuplicateCoin(entry.id.clone()));
            }
        }
        Ok(Self { entries })
    }
}

impl From<CoinCatalog> for Vec<CatalogEntry> {
    fn from(catalog: CoinCatalog) -> Self {
        catalog.entries
    }
}

/// Collects entries in order, validating on `build`
#[derive(Default)]
pub struct CatalogBuilder {
    entries: Vec<CatalogEntry>,
}

impl CatalogBuilder {
    pub fn coin(mut self, id: impl Into<String>, record: CoinRecord) -> Self {
        self.entries.push(CatalogEntry { id: id.into(), record });
        self
    }

    pub fn build(self) -> Result<CoinCatalog> {
        CoinCatalog::try_from(self.entries)
    }
}
