// 🛒 Gross Store - Unit table + customer bills
// Quantities are tracked in single units; the unit table converts "dozen" etc.

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::Path;
use thiserror::Error;
use tracing::{debug, warn};

// ============================================================================
// UNIT TABLE
// ============================================================================

/// Fixed mapping from unit name to how many single items it stands for.
///
/// Deserialization goes through `from_units`, so zero multipliers are rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "BTreeMap<String, u32>", into = "BTreeMap<String, u32>")]
pub struct UnitTable {
    units: BTreeMap<String, u32>,
}

impl UnitTable {
    /// Build a table from explicit (name, multiplier) pairs
    pub fn from_units<I, S>(units: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, u32)>,
        S: Into<String>,
    {
        let units: BTreeMap<String, u32> = units
            .into_iter()
            .map(|(name, amount)| (name.into(), amount))
            .collect();

        if let Some((name, _)) = units.iter().find(|(_, amount)| **amount == 0) {
            bail!("Unit {:?} has a zero multiplier", name);
        }

        Ok(UnitTable { units })
    }

    /// Load a table from a JSON object, e.g. `{"dozen": 12, "gross": 144}`
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read units file: {:?}", path.as_ref()))?;

        serde_json::from_str(&content).context("Failed to parse units JSON")
    }

    pub fn get(&self, unit: &str) -> Option<u32> {
        self.units.get(unit).copied()
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.units.iter().map(|(name, amount)| (name.as_str(), *amount))
    }
}

impl TryFrom<BTreeMap<String, u32>> for UnitTable {
    type Error = anyhow::Error;

    fn try_from(units: BTreeMap<String, u32>) -> Result<Self> {
        Self::from_units(units)
    }
}

impl From<UnitTable> for BTreeMap<String, u32> {
    fn from(table: UnitTable) -> Self {
        table.units
    }
}

impl Default for UnitTable {
    fn default() -> Self {
        let units = [
            ("quarter_of_a_dozen", 3),
            ("half_of_a_dozen", 6),
            ("dozen", 12),
            ("small_gross", 120),
            ("gross", 144),
            ("great_gross", 1728),
        ];

        UnitTable {
            units: units
                .into_iter()
                .map(|(name, amount)| (name.to_string(), amount))
                .collect(),
        }
    }
}

// ============================================================================
// BILL
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BillError {
    #[error("unknown unit: {0}")]
    UnknownUnit(String),

    #[error("item not on bill: {0}")]
    ItemNotFound(String),

    #[error("adding {added} {item} to {current} overflows the bill")]
    Overflow {
        item: String,
        current: u32,
        added: u32,
    },

    #[error("cannot remove {requested} of {item}: only {available} on bill")]
    InsufficientQuantity {
        item: String,
        requested: u32,
        available: u32,
    },
}

/// A customer's bill: item name -> quantity in single units.
///
/// Quantities are always positive; an item whose quantity drops to zero is
/// removed from the bill. Bills are only built through `add_item`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Bill {
    items: HashMap<String, u32>,
}

impl Bill {
    pub fn new() -> Self {
        Bill::default()
    }

    /// Add one `unit` worth of `item`
    pub fn add_item(&mut self, units: &UnitTable, item: &str, unit: &str) -> Result<(), BillError> {
        let amount = units
            .get(unit)
            .ok_or_else(|| BillError::UnknownUnit(unit.to_string()))?;

        let current = self.get_item(item).unwrap_or(0);
        let quantity = current.checked_add(amount).ok_or_else(|| BillError::Overflow {
            item: item.to_string(),
            current,
            added: amount,
        })?;

        self.items.insert(item.to_string(), quantity);
        debug!(item, unit, quantity, "added item to bill");

        Ok(())
    }

    /// Remove one `unit` worth of `item`. The bill is left untouched on error.
    pub fn remove_item(&mut self, units: &UnitTable, item: &str, unit: &str) -> Result<(), BillError> {
        let available = self
            .get_item(item)
            .ok_or_else(|| BillError::ItemNotFound(item.to_string()))?;
        let requested = units
            .get(unit)
            .ok_or_else(|| BillError::UnknownUnit(unit.to_string()))?;

        if requested > available {
            return Err(BillError::InsufficientQuantity {
                item: item.to_string(),
                requested,
                available,
            });
        }

        if requested == available {
            self.items.remove(item);
            debug!(item, unit, "removed item from bill");
        } else {
            self.items.insert(item.to_string(), available - requested);
            debug!(item, unit, quantity = available - requested, "reduced item on bill");
        }

        Ok(())
    }

    /// Quantity of `item` on the bill, if present
    pub fn get_item(&self, item: &str) -> Option<u32> {
        self.items.get(item).copied()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Items sorted by name, for stable output
    pub fn sorted_items(&self) -> Vec<(&str, u32)> {
        let mut items: Vec<(&str, u32)> = self
            .items
            .iter()
            .map(|(name, quantity)| (name.as_str(), *quantity))
            .collect();
        items.sort_by(|a, b| a.0.cmp(b.0));
        items
    }
}

// ============================================================================
// LEDGER REPLAY
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LedgerAction {
    Add,
    Remove,
}

/// One row of a bill ledger CSV: `action,item,unit`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LedgerEntry {
    pub action: LedgerAction,
    pub item: String,
    pub unit: String,
}

impl LedgerEntry {
    pub fn apply(&self, bill: &mut Bill, units: &UnitTable) -> Result<(), BillError> {
        match self.action {
            LedgerAction::Add => bill.add_item(units, &self.item, &self.unit),
            LedgerAction::Remove => bill.remove_item(units, &self.item, &self.unit),
        }
    }
}

/// Replay a ledger CSV into a fresh bill.
///
/// Rows rejected by the bill rules are logged and skipped; a malformed CSV
/// is an error.
pub fn load_ledger(csv_path: &Path, units: &UnitTable) -> Result<Bill> {
    let mut rdr = csv::Reader::from_path(csv_path).context("Failed to open ledger CSV")?;

    let mut bill = Bill::new();

    for (index, result) in rdr.deserialize().enumerate() {
        let entry: LedgerEntry = result.context("Failed to deserialize ledger entry")?;

        if let Err(e) = entry.apply(&mut bill, units) {
            // header is line 1
            warn!(line = index + 2, error = %e, "skipping ledger entry");
        }
    }

    Ok(bill)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_units() {
        let units = UnitTable::default();

        assert_eq!(units.len(), 6);
        assert_eq!(units.get("quarter_of_a_dozen"), Some(3));
        assert_eq!(units.get("half_of_a_dozen"), Some(6));
        assert_eq!(units.get("dozen"), Some(12));
        assert_eq!(units.get("small_gross"), Some(120));
        assert_eq!(units.get("gross"), Some(144));
        assert_eq!(units.get("great_gross"), Some(1728));
        assert_eq!(units.get("pair"), None);
    }

    #[test]
    fn test_zero_multiplier_rejected() {
        assert!(UnitTable::from_units([("dozen", 12), ("nothing", 0)]).is_err());
        assert!(UnitTable::from_units([("pair", 2)]).is_ok());
    }

    #[test]
    fn test_units_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"pair": 2, "dozen": 12}}"#).unwrap();

        let units = UnitTable::from_file(file.path()).unwrap();
        assert_eq!(units.len(), 2);
        assert_eq!(units.get("pair"), Some(2));
    }

    #[test]
    fn test_units_from_bad_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        assert!(UnitTable::from_file(file.path()).is_err());
        assert!(UnitTable::from_file("/nonexistent/units.json").is_err());
    }

    #[test]
    fn test_units_deserialize_rejects_zero() {
        assert!(serde_json::from_str::<UnitTable>(r#"{"nothing": 0}"#).is_err());

        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"dozen": 12, "nothing": 0}}"#).unwrap();
        assert!(UnitTable::from_file(file.path()).is_err());
    }

    #[test]
    fn test_units_serde_roundtrip() {
        let units: UnitTable = serde_json::from_str(r#"{"pair": 2}"#).unwrap();
        let json = serde_json::to_string(&units).unwrap();
        assert_eq!(json, r#"{"pair":2}"#);
    }

    #[test]
    fn test_new_bill_is_empty() {
        let bill = Bill::new();
        assert!(bill.is_empty());
        assert_eq!(bill.get_item("carrot"), None);
    }

    #[test]
    fn test_add_item_accumulates() {
        let units = UnitTable::default();
        let mut bill = Bill::new();

        bill.add_item(&units, "peas", "quarter_of_a_dozen").unwrap();
        bill.add_item(&units, "peas", "dozen").unwrap();
        bill.add_item(&units, "tomato", "gross").unwrap();

        assert_eq!(bill.get_item("peas"), Some(15));
        assert_eq!(bill.get_item("tomato"), Some(144));
        assert_eq!(bill.len(), 2);
    }

    #[test]
    fn test_add_item_unknown_unit() {
        let units = UnitTable::default();
        let mut bill = Bill::new();

        let err = bill.add_item(&units, "pasta", "").unwrap_err();
        assert_eq!(err, BillError::UnknownUnit(String::new()));
        assert_eq!(bill.get_item("pasta"), None);
    }

    #[test]
    fn test_add_item_overflow_leaves_bill_untouched() {
        let units = UnitTable::from_units([("crate", 3_000_000_000)]).unwrap();
        let mut bill = Bill::new();

        bill.add_item(&units, "melon", "crate").unwrap();
        let err = bill.add_item(&units, "melon", "crate").unwrap_err();
        assert_eq!(
            err,
            BillError::Overflow {
                item: "melon".to_string(),
                current: 3_000_000_000,
                added: 3_000_000_000,
            }
        );
        assert_eq!(bill.get_item("melon"), Some(3_000_000_000));

        // a fresh item that can't overflow still lands; no zero entries appear
        let units = UnitTable::from_units([("max", u32::MAX)]).unwrap();
        bill.add_item(&units, "kiwi", "max").unwrap();
        assert!(bill.add_item(&units, "kiwi", "max").is_err());
        assert_eq!(bill.get_item("kiwi"), Some(u32::MAX));
        assert_eq!(bill.len(), 2);
    }

    #[test]
    fn test_remove_item_partial() {
        let units = UnitTable::default();
        let mut bill = Bill::new();
        bill.add_item(&units, "onion", "dozen").unwrap();

        bill.remove_item(&units, "onion", "half_of_a_dozen").unwrap();
        assert_eq!(bill.get_item("onion"), Some(6));
    }

    #[test]
    fn test_remove_item_exact_deletes_entry() {
        let units = UnitTable::default();
        let mut bill = Bill::new();
        bill.add_item(&units, "onion", "dozen").unwrap();

        bill.remove_item(&units, "onion", "dozen").unwrap();
        assert_eq!(bill.get_item("onion"), None);
        assert!(bill.is_empty());
    }

    #[test]
    fn test_remove_item_failures_leave_bill_untouched() {
        let units = UnitTable::default();
        let mut bill = Bill::new();
        bill.add_item(&units, "garlic", "half_of_a_dozen").unwrap();

        assert_eq!(
            bill.remove_item(&units, "papaya", "dozen"),
            Err(BillError::ItemNotFound("papaya".to_string()))
        );
        assert_eq!(
            bill.remove_item(&units, "garlic", "bushel"),
            Err(BillError::UnknownUnit("bushel".to_string()))
        );
        assert_eq!(
            bill.remove_item(&units, "garlic", "dozen"),
            Err(BillError::InsufficientQuantity {
                item: "garlic".to_string(),
                requested: 12,
                available: 6,
            })
        );

        assert_eq!(bill.get_item("garlic"), Some(6));
    }

    #[test]
    fn test_sorted_items() {
        let units = UnitTable::default();
        let mut bill = Bill::new();
        bill.add_item(&units, "zucchini", "dozen").unwrap();
        bill.add_item(&units, "apple", "gross").unwrap();

        assert_eq!(bill.sorted_items(), vec![("apple", 144), ("zucchini", 12)]);
    }

    #[test]
    fn test_load_ledger_skips_rejected_rows() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "action,item,unit").unwrap();
        writeln!(file, "add,milk,dozen").unwrap();
        writeln!(file, "add,eggs,gross").unwrap();
        writeln!(file, "remove,milk,half_of_a_dozen").unwrap();
        writeln!(file, "remove,bread,dozen").unwrap(); // not on bill
        writeln!(file, "add,eggs,bushel").unwrap(); // unknown unit
        writeln!(file, "remove,eggs,gross").unwrap();

        let bill = load_ledger(file.path(), &UnitTable::default()).unwrap();

        assert_eq!(bill.get_item("milk"), Some(6));
        assert_eq!(bill.get_item("eggs"), None);
        assert_eq!(bill.len(), 1);
    }

    #[test]
    fn test_load_ledger_malformed() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "action,item,unit").unwrap();
        writeln!(file, "sell,milk,dozen").unwrap();

        assert!(load_ledger(file.path(), &UnitTable::default()).is_err());
    }
}
