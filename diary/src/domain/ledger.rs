//! Date-keyed food ledger.
//!
//! The ledger maps each calendar date to the day's meal log. Dates without a
//! stored log read as an empty log, and a log that becomes empty is dropped,
//! so "absent" and "empty" are never distinguishable to callers.
//!
//! Updates are computed with pure `DayLog` transforms and committed only on
//! success, leaving the ledger untouched when an operation is refused.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use log::{info, warn};
use shared::{DayLog, FoodEntryInput, FoodItem, MealSlot};

use super::food_entry::{parse_food_entry, FoodValidationError};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LedgerError {
    #[error(transparent)]
    Validation(#[from] FoodValidationError),
    #[error("No {slot} entry at index {index} (slot holds {len})")]
    IndexOutOfRange {
        slot: MealSlot,
        index: usize,
        len: usize,
    },
}

/// Returns a copy of `log` with `item` appended to `slot`
pub fn with_item(log: &DayLog, slot: MealSlot, item: FoodItem) -> DayLog {
    let mut next = log.clone();
    next.slot_mut(slot).push(item);
    next
}

/// Returns a copy of `log` without the entry at `index`, or None if out of range
pub fn without_item(log: &DayLog, slot: MealSlot, index: usize) -> Option<DayLog> {
    if index >= log.slot(slot).len() {
        return None;
    }
    let mut next = log.clone();
    next.slot_mut(slot).remove(index);
    Some(next)
}

/// In-memory mapping from date to that day's meal log
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FoodLedger {
    days: BTreeMap<NaiveDate, DayLog>,
}

impl FoodLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ledger holding one breakfast entry on `today`
    pub fn with_sample_entry(today: NaiveDate) -> Self {
        let mut ledger = Self::new();
        ledger.days.insert(
            today,
            with_item(&DayLog::empty(), MealSlot::Breakfast, sample_entry()),
        );
        ledger
    }

    /// The log for `date`, or an empty log if nothing was recorded
    pub fn get_day_log(&self, date: NaiveDate) -> DayLog {
        self.days.get(&date).cloned().unwrap_or_default()
    }

    /// Append an already-built item to the end of `slot` on `date`
    pub fn add_food_item(
        &mut self,
        date: NaiveDate,
        slot: MealSlot,
        item: FoodItem,
    ) -> Result<DayLog, LedgerError> {
        if item.name.trim().is_empty() {
            warn!("Rejected unnamed food item for {} on {}", slot, date);
            return Err(FoodValidationError::EmptyName.into());
        }

        let next = with_item(&self.get_day_log(date), slot, item);
        info!(
            "➕ Added to {} on {} ({} entries that day)",
            slot,
            date,
            next.item_count()
        );
        self.commit(date, next.clone());
        Ok(next)
    }

    /// Parse raw form input, then append it
    pub fn add_food_entry(
        &mut self,
        date: NaiveDate,
        slot: MealSlot,
        input: &FoodEntryInput,
    ) -> Result<DayLog, LedgerError> {
        let item = parse_food_entry(input).map_err(|e| {
            warn!("Rejected food entry for {} on {}: {}", slot, date, e);
            e
        })?;
        self.add_food_item(date, slot, item)
    }

    /// Remove the entry at `index` from `slot` on `date`
    pub fn remove_food_item(
        &mut self,
        date: NaiveDate,
        slot: MealSlot,
        index: usize,
    ) -> Result<DayLog, LedgerError> {
        let current = self.get_day_log(date);
        let next = without_item(&current, slot, index).ok_or_else(|| {
            let len = current.slot(slot).len();
            warn!("Remove out of range: {} index {} on {} (len {})", slot, index, date, len);
            LedgerError::IndexOutOfRange { slot, index, len }
        })?;

        info!("➖ Removed {} entry {} on {}", slot, index, date);
        self.commit(date, next.clone());
        Ok(next)
    }

    /// Dates holding at least one entry, ascending
    pub fn logged_dates(&self) -> Vec<NaiveDate> {
        self.days.keys().copied().collect()
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    fn commit(&mut self, date: NaiveDate, log: DayLog) {
        if log.is_empty() {
            self.days.remove(&date);
        } else {
            self.days.insert(date, log);
        }
    }
}

fn sample_entry() -> FoodItem {
    FoodItem {
        name: "White bread, 1 slice".to_string(),
        calories: 75,
        carbs: 14,
        fat: 1,
        protein: 3,
        sodium: 134,
        sugar: 1,
    }
}
