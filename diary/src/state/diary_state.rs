//! # Food Diary State Module
//!
//! Screen controller for the food diary.
//!
//! ## Responsibilities:
//! - Owns the ledger and the selected-date cursor
//! - Header day navigation and date-picker month navigation
//! - Modal state (date picker / add-food form) and the add-food form fields
//! - Derived views: summary table, progress bars, meal sections, picker grid
//!
//! ## Purpose:
//! A renderer only draws what this state exposes and forwards user events to
//! its methods. Every method runs to completion within one interaction.

use chrono::{Datelike, NaiveDate};
use log::{info, warn};
use shared::{CalendarCell, DailyGoals, DayLog, FoodItem, MealSlot, Nutrient, NutrientTotals};

use crate::config::DiaryConfig;
use crate::domain::calendar::{CalendarError, CalendarService, WEEKDAY_HEADERS};
use crate::domain::ledger::{FoodLedger, LedgerError};
use crate::domain::nutrition::{compute_progress_fraction, compute_remaining, compute_totals};

use super::food_form_state::AddFoodFormState;
use super::modal_state::ActiveModal;

/// Nutrients shown as progress bars, in display order
const PROGRESS_NUTRIENTS: [Nutrient; 4] = [
    Nutrient::Calories,
    Nutrient::Carbs,
    Nutrient::Fat,
    Nutrient::Protein,
];

/// Totals, goals and remaining allowance for the selected date
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DailySummary {
    pub totals: NutrientTotals,
    pub goals: DailyGoals,
    pub remaining: NutrientTotals,
}

/// One progress bar row
#[derive(Debug, Clone, PartialEq)]
pub struct NutritionProgress {
    pub nutrient: Nutrient,
    pub label: &'static str,
    pub current: u32,
    pub goal: u32,
    /// Bar fill in [0, 1]
    pub fraction: f64,
}

/// One meal card with its entries in display order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MealSection {
    pub slot: MealSlot,
    pub title: String,
    pub items: Vec<FoodItem>,
}

impl MealSection {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// How a picker day is highlighted; the selected date wins over today
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayHighlight {
    Selected,
    Today,
    Normal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatePickerCell {
    Blank,
    Day {
        date: NaiveDate,
        highlight: DayHighlight,
    },
}

/// Everything the date-picker modal draws
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatePickerView {
    pub title: String,
    pub weekday_headers: [&'static str; 7],
    pub cells: Vec<DatePickerCell>,
}

/// Food diary screen controller
#[derive(Debug, Clone)]
pub struct FoodDiaryState {
    ledger: FoodLedger,
    goals: DailyGoals,
    calendar: CalendarService,

    /// Date the ledger is read and written against
    pub selected_date: NaiveDate,

    /// Today's date, used for highlighting in the picker
    pub today: NaiveDate,

    /// Which modal is open, if any
    pub modal: ActiveModal,

    /// Add-food modal fields
    pub add_food_form: AddFoodFormState,
}

impl FoodDiaryState {
    /// Create the screen with the cursor on `today`
    pub fn new(config: &DiaryConfig, today: NaiveDate) -> Self {
        let ledger = if config.seed_sample_entry {
            FoodLedger::with_sample_entry(today)
        } else {
            FoodLedger::new()
        };

        Self {
            ledger,
            goals: config.daily_goals,
            calendar: CalendarService::new(),
            selected_date: today,
            today,
            modal: ActiveModal::None,
            add_food_form: AddFoodFormState::new(),
        }
    }

    /// Create the screen dated with the local clock
    pub fn new_for_local_today(config: &DiaryConfig) -> Self {
        Self::new(config, chrono::Local::now().date_naive())
    }

    pub fn ledger(&self) -> &FoodLedger {
        &self.ledger
    }

    pub fn goals(&self) -> &DailyGoals {
        &self.goals
    }

    /// Log for the selected date
    pub fn current_day_log(&self) -> DayLog {
        self.ledger.get_day_log(self.selected_date)
    }

    /// Header arrow: one day back
    pub fn navigate_previous_day(&mut self) {
        self.selected_date = self.calendar.shift_date(self.selected_date, -1);
        info!("📅 Navigated to previous day: {}", self.selected_date);
    }

    /// Header arrow: one day forward
    pub fn navigate_next_day(&mut self) {
        self.selected_date = self.calendar.shift_date(self.selected_date, 1);
        info!("📅 Navigated to next day: {}", self.selected_date);
    }

    pub fn open_date_picker(&mut self) {
        self.modal = ActiveModal::DatePicker;
        info!("📅 Opened date picker on {}", self.selected_date);
    }

    /// Picker arrow: move the cursor one month back
    pub fn picker_previous_month(&mut self) {
        self.selected_date = self.calendar.shift_month(self.selected_date, -1);
        info!(
            "📅 Navigated to previous month: {}/{}",
            self.selected_date.month(),
            self.selected_date.year()
        );
    }

    /// Picker arrow: move the cursor one month forward
    pub fn picker_next_month(&mut self) {
        self.selected_date = self.calendar.shift_month(self.selected_date, 1);
        info!(
            "📅 Navigated to next month: {}/{}",
            self.selected_date.month(),
            self.selected_date.year()
        );
    }

    /// Pick a day in the picker; closes the picker
    pub fn select_date(&mut self, date: NaiveDate) {
        self.selected_date = date;
        if self.modal.is_date_picker() {
            self.modal = ActiveModal::None;
        }
        info!("📅 Selected {}", date);
    }

    /// Open the add-food form targeting `slot` with blank fields
    pub fn open_add_food(&mut self, slot: MealSlot) {
        self.add_food_form.clear();
        self.modal = ActiveModal::AddFood { slot };
        info!("🍽️ Opened add food for {} on {}", slot, self.selected_date);
    }

    /// Close whichever modal is open. The add-food fields are kept.
    pub fn close_modal(&mut self) {
        self.modal = ActiveModal::None;
    }

    pub fn add_food_form_mut(&mut self) -> &mut AddFoodFormState {
        &mut self.add_food_form
    }

    /// Validate the add-food form and log it under the target slot.
    ///
    /// On success the form is cleared and the modal closed. On failure the
    /// message is kept on the form for inline display, the modal stays open
    /// and the ledger is unchanged. Does nothing if the form is not open.
    pub fn submit_add_food(&mut self) -> Result<Option<DayLog>, LedgerError> {
        let Some(slot) = self.modal.add_food_slot() else {
            warn!("Add food submitted with no form open");
            return Ok(None);
        };

        match self
            .ledger
            .add_food_entry(self.selected_date, slot, &self.add_food_form.input)
        {
            Ok(log) => {
                self.add_food_form.clear();
                self.modal = ActiveModal::None;
                Ok(Some(log))
            }
            Err(e) => {
                self.add_food_form.set_error(e.to_string());
                Err(e)
            }
        }
    }

    /// Remove button on a meal row
    pub fn remove_food(&mut self, slot: MealSlot, index: usize) -> Result<DayLog, LedgerError> {
        self.ledger.remove_food_item(self.selected_date, slot, index)
    }

    /// Summary table for the selected date
    pub fn summary(&self) -> DailySummary {
        let totals = compute_totals(&self.current_day_log());
        DailySummary {
            totals,
            goals: self.goals,
            remaining: compute_remaining(&totals, &self.goals),
        }
    }

    /// Calories, carbs, fat and protein bars
    pub fn progress_bars(&self) -> Vec<NutritionProgress> {
        let totals = compute_totals(&self.current_day_log());
        PROGRESS_NUTRIENTS
            .into_iter()
            .map(|nutrient| {
                let current = totals.get(nutrient);
                let goal = self.goals.get(nutrient);
                NutritionProgress {
                    nutrient,
                    label: nutrient.label(),
                    current,
                    goal,
                    fraction: compute_progress_fraction(f64::from(current), f64::from(goal)),
                }
            })
            .collect()
    }

    /// The four meal cards for the selected date
    pub fn meal_sections(&self) -> Vec<MealSection> {
        let log = self.current_day_log();
        MealSlot::all()
            .into_iter()
            .map(|slot| MealSection {
                slot,
                title: format!("{} {}", slot.icon(), slot.title()),
                items: log.slot(slot).to_vec(),
            })
            .collect()
    }

    /// Header text, e.g. "Monday, June 16, 2025"
    pub fn header_label(&self) -> String {
        self.calendar.format_display_date(self.selected_date)
    }

    /// Grid for the month containing the selected date
    pub fn date_picker_view(&self) -> Result<DatePickerView, CalendarError> {
        let year = self.selected_date.year();
        let month = self.selected_date.month();
        let grid = self.calendar.build_month_grid(year, month)?;

        let cells = grid
            .cells
            .iter()
            .map(|cell| match cell {
                CalendarCell::Blank => DatePickerCell::Blank,
                CalendarCell::Day(date) => DatePickerCell::Day {
                    date: *date,
                    highlight: self.highlight_for(*date),
                },
            })
            .collect();

        Ok(DatePickerView {
            title: self.calendar.format_month_title(year, month),
            weekday_headers: WEEKDAY_HEADERS,
            cells,
        })
    }

    fn highlight_for(&self, date: NaiveDate) -> DayHighlight {
        if date == self.selected_date {
            DayHighlight::Selected
        } else if date == self.today {
            DayHighlight::Today
        } else {
            DayHighlight::Normal
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::food_entry::FoodValidationError;
    use crate::test_utils::init_test_logging;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn empty_diary(today: NaiveDate) -> FoodDiaryState {
        let config = DiaryConfig {
            seed_sample_entry: false,
            ..DiaryConfig::default()
        };
        FoodDiaryState::new(&config, today)
    }

    #[test]
    fn test_new_seeds_today() {
        let diary = FoodDiaryState::new(&DiaryConfig::default(), date(2025, 6, 16));

        assert_eq!(diary.selected_date, date(2025, 6, 16));
        assert_eq!(diary.modal, ActiveModal::None);
        assert_eq!(diary.current_day_log().breakfast.len(), 1);
        assert_eq!(diary.summary().totals.calories, 75);
    }

    #[test]
    fn test_add_food_flow() {
        init_test_logging();
        let mut diary = empty_diary(date(2025, 6, 16));

        diary.open_add_food(MealSlot::Breakfast);
        diary.add_food_form_mut().set_name("Apple");
        diary.add_food_form_mut().set_calories("95");
        let log = diary.submit_add_food().unwrap().unwrap();

        assert_eq!(log.breakfast, vec![FoodItem::new("Apple", 95)]);
        assert_eq!(diary.modal, ActiveModal::None);
        assert_eq!(diary.add_food_form, AddFoodFormState::new());

        let summary = diary.summary();
        assert_eq!(summary.totals, NutrientTotals { calories: 95, ..NutrientTotals::zero() });
        assert_eq!(summary.remaining.calories, 1870 - 95);
    }

    #[test]
    fn test_rejected_add_keeps_modal_and_state() {
        let mut diary = empty_diary(date(2025, 6, 16));

        diary.open_add_food(MealSlot::Snacks);
        diary.add_food_form_mut().set_name("Chips");
        let err = diary.submit_add_food().unwrap_err();

        assert_eq!(err, LedgerError::Validation(FoodValidationError::MissingCalories));
        assert_eq!(diary.modal, ActiveModal::AddFood { slot: MealSlot::Snacks });
        assert_eq!(diary.add_food_form.error_message.as_deref(), Some("Please enter calories"));
        assert_eq!(diary.add_food_form.input.name, "Chips");
        assert!(diary.ledger().is_empty());
    }

    #[test]
    fn test_submit_without_open_form_is_noop() {
        let mut diary = empty_diary(date(2025, 6, 16));

        assert_eq!(diary.submit_add_food(), Ok(None));
        assert!(diary.ledger().is_empty());
    }

    #[test]
    fn test_entries_follow_selected_date() {
        let mut diary = empty_diary(date(2025, 6, 16));

        diary.navigate_next_day();
        diary.open_add_food(MealSlot::Dinner);
        diary.add_food_form_mut().set_name("Pasta");
        diary.add_food_form_mut().set_calories("600");
        diary.submit_add_food().unwrap();

        assert_eq!(diary.current_day_log().dinner.len(), 1);
        diary.navigate_previous_day();
        assert!(diary.current_day_log().is_empty());
        assert_eq!(diary.ledger().logged_dates(), vec![date(2025, 6, 17)]);
    }

    #[test]
    fn test_day_arrows_stop_at_date_range_limits() {
        let mut diary = empty_diary(date(2025, 6, 16));

        diary.select_date(NaiveDate::MAX);
        diary.navigate_next_day();
        assert_eq!(diary.selected_date, NaiveDate::MAX);

        diary.select_date(NaiveDate::MIN);
        diary.navigate_previous_day();
        assert_eq!(diary.selected_date, NaiveDate::MIN);
    }

    #[test]
    fn test_remove_food() {
        let mut diary = FoodDiaryState::new(&DiaryConfig::default(), date(2025, 6, 16));

        assert!(matches!(
            diary.remove_food(MealSlot::Breakfast, 3),
            Err(LedgerError::IndexOutOfRange { .. })
        ));
        diary.remove_food(MealSlot::Breakfast, 0).unwrap();
        assert_eq!(diary.summary().totals, NutrientTotals::zero());
    }

    #[test]
    fn test_date_picker_navigation() {
        let mut diary = empty_diary(date(2025, 1, 31));

        diary.open_date_picker();
        assert!(diary.modal.is_date_picker());

        diary.picker_previous_month();
        assert_eq!(diary.selected_date, date(2024, 12, 31));
        diary.picker_next_month();
        diary.picker_next_month();
        assert_eq!(diary.selected_date, date(2025, 2, 28));
        assert!(diary.modal.is_date_picker());

        diary.select_date(date(2025, 2, 3));
        assert_eq!(diary.selected_date, date(2025, 2, 3));
        assert_eq!(diary.modal, ActiveModal::None);
    }

    #[test]
    fn test_opening_one_modal_replaces_the_other() {
        let mut diary = empty_diary(date(2025, 6, 16));

        diary.open_date_picker();
        diary.open_add_food(MealSlot::Lunch);
        assert_eq!(diary.modal, ActiveModal::AddFood { slot: MealSlot::Lunch });

        diary.close_modal();
        assert!(!diary.modal.is_open());
    }

    #[test]
    fn test_date_picker_view_highlights() {
        let mut diary = empty_diary(date(2024, 2, 10));
        diary.select_date(date(2024, 2, 20));

        let view = diary.date_picker_view().unwrap();
        assert_eq!(view.title, "February 2024");
        assert_eq!(view.weekday_headers[0], "Sun");
        assert_eq!(view.cells.len(), 4 + 29);

        let highlighted: Vec<(NaiveDate, DayHighlight)> = view
            .cells
            .iter()
            .filter_map(|cell| match cell {
                DatePickerCell::Day { date, highlight } if *highlight != DayHighlight::Normal => {
                    Some((*date, *highlight))
                }
                _ => None,
            })
            .collect();
        assert_eq!(
            highlighted,
            vec![
                (date(2024, 2, 10), DayHighlight::Today),
                (date(2024, 2, 20), DayHighlight::Selected),
            ]
        );
    }

    #[test]
    fn test_selected_wins_over_today() {
        let diary = empty_diary(date(2025, 6, 16));

        let view = diary.date_picker_view().unwrap();
        let today_cell = view
            .cells
            .iter()
            .find(|c| matches!(c, DatePickerCell::Day { date: d, .. } if *d == date(2025, 6, 16)))
            .unwrap();
        assert!(matches!(
            today_cell,
            DatePickerCell::Day { highlight: DayHighlight::Selected, .. }
        ));
    }

    #[test]
    fn test_progress_bars_clamp() {
        let mut diary = empty_diary(date(2025, 6, 16));
        diary.open_add_food(MealSlot::Lunch);
        {
            let form = diary.add_food_form_mut();
            form.set_name("Big burrito");
            form.set_calories("900");
            form.set_protein("200");
        }
        diary.submit_add_food().unwrap();

        let bars = diary.progress_bars();
        let labels: Vec<&str> = bars.iter().map(|b| b.label).collect();
        assert_eq!(labels, vec!["Calories", "Carbs", "Fat", "Protein"]);
        assert!((bars[0].fraction - 900.0 / 1870.0).abs() < 1e-9);
        assert_eq!(bars[1].fraction, 0.0);
        assert_eq!(bars[3].fraction, 1.0);
        assert_eq!(diary.summary().remaining.protein, 0);
    }

    #[test]
    fn test_meal_sections_and_header() {
        let diary = FoodDiaryState::new(&DiaryConfig::default(), date(2025, 6, 16));

        let sections = diary.meal_sections();
        let titles: Vec<&str> = sections.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, vec!["🍳 Breakfast", "🥗 Lunch", "🍽️ Dinner", "🍿 Snacks"]);
        assert!(!sections[0].is_empty());
        assert!(sections[1].is_empty());

        assert_eq!(diary.header_label(), "Monday, June 16, 2025");
    }
}
