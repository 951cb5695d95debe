//! Pluggable revenue and bonus strategies.
//!
//! `AnalysisOptions` carries two named strategy slots. The options are
//! validated on every run, but the pipeline computes revenue and bonus with
//! the fixed formulas in `aggregator::item_revenue` and
//! `ranker::calculate_bonus`; the configured strategies are not dispatched.
//! `SimpleRevenue` and `BonusByProfit` expose those same formulas through
//! the strategy traits.

use super::aggregator::item_revenue;
use super::ranker::calculate_bonus;
use crate::dataset::{Product, PurchaseItem};
use crate::utils::config::{BONUS_CALCULATOR, REVENUE_CALCULATOR};
use std::fmt;
use std::sync::Arc;

/// Computes the revenue of a single purchase item
pub trait RevenueCalculator: Send + Sync {
    fn item_revenue(&self, item: &PurchaseItem, product: &Product) -> f64;
}

/// Computes a seller's bonus from its profit rank
pub trait BonusCalculator: Send + Sync {
    /// `index` is the zero-based rank out of `total` sellers
    fn bonus(&self, index: usize, total: usize, profit: f64) -> f64;
}

impl<F> RevenueCalculator for F
where
    F: Fn(&PurchaseItem, &Product) -> f64 + Send + Sync,
{
    fn item_revenue(&self, item: &PurchaseItem, product: &Product) -> f64 {
        self(item, product)
    }
}

impl<F> BonusCalculator for F
where
    F: Fn(usize, usize, f64) -> f64 + Send + Sync,
{
    fn bonus(&self, index: usize, total: usize, profit: f64) -> f64 {
        self(index, total, profit)
    }
}

/// Sale price times quantity, less the percentage discount
#[derive(Debug, Clone, Copy, Default)]
pub struct SimpleRevenue;

impl RevenueCalculator for SimpleRevenue {
    fn item_revenue(&self, item: &PurchaseItem, _product: &Product) -> f64 {
        item_revenue(item)
    }
}

/// 15% / 10% / 5% of profit by rank, nothing for last place
#[derive(Debug, Clone, Copy, Default)]
pub struct BonusByProfit;

impl BonusCalculator for BonusByProfit {
    fn bonus(&self, index: usize, total: usize, profit: f64) -> f64 {
        calculate_bonus(index, total, profit)
    }
}

/// A single named entry in `AnalysisOptions`
#[derive(Clone)]
pub enum OptionEntry {
    Revenue(Arc<dyn RevenueCalculator>),
    Bonus(Arc<dyn BonusCalculator>),
    /// Plain data; never a valid strategy
    Value(serde_json::Value),
}

impl OptionEntry {
    /// Whether the entry can be invoked as a strategy
    pub fn is_callable(&self) -> bool {
        !matches!(self, OptionEntry::Value(_))
    }

    fn kind(&self) -> &'static str {
        match self {
            OptionEntry::Revenue(_) => "revenue strategy",
            OptionEntry::Bonus(_) => "bonus strategy",
            OptionEntry::Value(_) => "value",
        }
    }
}

impl fmt::Debug for OptionEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionEntry::Value(value) => write!(f, "Value({})", value),
            other => f.write_str(other.kind()),
        }
    }
}

/// Named options passed to `analyze`
///
/// Entries keep insertion order; setting an existing name replaces it.
/// `Default` fills both strategy slots with the built-in formulas.
#[derive(Debug, Clone)]
pub struct AnalysisOptions {
    entries: Vec<(String, OptionEntry)>,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self::empty()
            .with_revenue_calculator(SimpleRevenue)
            .with_bonus_calculator(BonusByProfit)
    }
}

impl AnalysisOptions {
    /// Options with no entries at all
    pub fn empty() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Insert or replace a named entry
    pub fn with_entry(mut self, name: impl Into<String>, entry: OptionEntry) -> Self {
        let name = name.into();
        match self.entries.iter().position(|(existing, _)| *existing == name) {
            Some(index) => self.entries[index].1 = entry,
            None => self.entries.push((name, entry)),
        }
        self
    }

    pub fn with_revenue_calculator(self, calculator: impl RevenueCalculator + 'static) -> Self {
        self.with_entry(REVENUE_CALCULATOR, OptionEntry::Revenue(Arc::new(calculator)))
    }

    pub fn with_bonus_calculator(self, calculator: impl BonusCalculator + 'static) -> Self {
        self.with_entry(BONUS_CALCULATOR, OptionEntry::Bonus(Arc::new(calculator)))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &OptionEntry)> {
        self.entries.iter().map(|(name, entry)| (name.as_str(), entry))
    }

    pub fn get(&self, name: &str) -> Option<&OptionEntry> {
        self.iter()
            .find(|(existing, _)| *existing == name)
            .map(|(_, entry)| entry)
    }

    /// Strategy configured in the `revenue_calculator` slot
    pub fn revenue_calculator(&self) -> Option<&dyn RevenueCalculator> {
        match self.get(REVENUE_CALCULATOR) {
            Some(OptionEntry::Revenue(calculator)) => Some(calculator.as_ref()),
            _ => None,
        }
    }

    /// Strategy configured in the `bonus_calculator` slot
    pub fn bonus_calculator(&self) -> Option<&dyn BonusCalculator> {
        match self.get(BONUS_CALCULATOR) {
            Some(OptionEntry::Bonus(calculator)) => Some(calculator.as_ref()),
            _ => None,
        }
    }
}
