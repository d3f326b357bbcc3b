//! Nutrient aggregation against daily goals.

use shared::{DailyGoals, DayLog, MealSlot, NutrientTotals};

/// Sum every nutrient across all four slots. Zero for an empty log.
pub fn compute_totals(log: &DayLog) -> NutrientTotals {
    MealSlot::all()
        .into_iter()
        .map(|slot| compute_slot_totals(log, slot))
        .sum()
}

/// Sum every nutrient within a single slot
pub fn compute_slot_totals(log: &DayLog, slot: MealSlot) -> NutrientTotals {
    log.slot(slot).iter().map(|item| item.nutrients()).sum()
}

/// Per-nutrient allowance left for the day, clamped at zero.
/// Going over a goal shows as 0 remaining; overage is not reported separately.
pub fn compute_remaining(totals: &NutrientTotals, goals: &DailyGoals) -> NutrientTotals {
    NutrientTotals {
        calories: goals.calories.saturating_sub(totals.calories),
        carbs: goals.carbs.saturating_sub(totals.carbs),
        fat: goals.fat.saturating_sub(totals.fat),
        protein: goals.protein.saturating_sub(totals.protein),
        sodium: goals.sodium.saturating_sub(totals.sodium),
        sugar: goals.sugar.saturating_sub(totals.sugar),
    }
}

/// Fill fraction for a progress bar, `min(current / goal, 1)`.
/// A non-positive goal yields 0.
pub fn compute_progress_fraction(current: f64, goal: f64) -> f64 {
    if goal <= 0.0 || !goal.is_finite() || current.is_nan() {
        return 0.0;
    }
    (current / goal).clamp(0.0, 1.0)
}
