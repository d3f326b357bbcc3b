use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign};

/// A single logged food entry. All nutrient quantities are whole units
/// (kcal for calories, mg for sodium, grams for the rest).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FoodItem {
    /// Display name, e.g. "White bread, 1 slice"
    pub name: String,
    pub calories: u32,
    pub carbs: u32,
    pub fat: u32,
    pub protein: u32,
    pub sodium: u32,
    pub sugar: u32,
}

impl FoodItem {
    /// Create an item with only a name and calories; every macro is zero
    pub fn new(name: impl Into<String>, calories: u32) -> Self {
        Self {
            name: name.into(),
            calories,
            carbs: 0,
            fat: 0,
            protein: 0,
            sodium: 0,
            sugar: 0,
        }
    }

    /// Nutrient contribution of this item
    pub fn nutrients(&self) -> NutrientTotals {
        NutrientTotals {
            calories: self.calories,
            carbs: self.carbs,
            fat: self.fat,
            protein: self.protein,
            sodium: self.sodium,
            sugar: self.sugar,
        }
    }
}

/// Meal category within a day's log
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MealSlot {
    Breakfast,
    Lunch,
    Dinner,
    Snacks,
}

impl MealSlot {
    /// All slots in display order
    pub fn all() -> [MealSlot; 4] {
        [MealSlot::Breakfast, MealSlot::Lunch, MealSlot::Dinner, MealSlot::Snacks]
    }

    /// Section title shown above the slot's entries
    pub fn title(&self) -> &'static str {
        match self {
            MealSlot::Breakfast => "Breakfast",
            MealSlot::Lunch => "Lunch",
            MealSlot::Dinner => "Dinner",
            MealSlot::Snacks => "Snacks",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            MealSlot::Breakfast => "🍳",
            MealSlot::Lunch => "🥗",
            MealSlot::Dinner => "🍽️",
            MealSlot::Snacks => "🍿",
        }
    }
}

impl fmt::Display for MealSlot {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// The four ordered meal sequences logged for one calendar date.
/// Insertion order within a slot is the display order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayLog {
    pub breakfast: Vec<FoodItem>,
    pub lunch: Vec<FoodItem>,
    pub dinner: Vec<FoodItem>,
    pub snacks: Vec<FoodItem>,
}

impl DayLog {
    /// A log with all four slots empty
    pub fn empty() -> Self {
        Self::default()
    }

    /// Entries recorded in a slot
    pub fn slot(&self, slot: MealSlot) -> &[FoodItem] {
        match slot {
            MealSlot::Breakfast => &self.breakfast,
            MealSlot::Lunch => &self.lunch,
            MealSlot::Dinner => &self.dinner,
            MealSlot::Snacks => &self.snacks,
        }
    }

    pub fn slot_mut(&mut self, slot: MealSlot) -> &mut Vec<FoodItem> {
        match slot {
            MealSlot::Breakfast => &mut self.breakfast,
            MealSlot::Lunch => &mut self.lunch,
            MealSlot::Dinner => &mut self.dinner,
            MealSlot::Snacks => &mut self.snacks,
        }
    }

    /// True when no slot holds an entry
    pub fn is_empty(&self) -> bool {
        MealSlot::all().iter().all(|slot| self.slot(*slot).is_empty())
    }

    /// Total number of entries across all slots
    pub fn item_count(&self) -> usize {
        MealSlot::all().iter().map(|slot| self.slot(*slot).len()).sum()
    }

    /// Iterate every entry with its slot, in display order
    pub fn iter_items(&self) -> impl Iterator<Item = (MealSlot, &FoodItem)> + '_ {
        MealSlot::all()
            .into_iter()
            .flat_map(move |slot| self.slot(slot).iter().map(move |item| (slot, item)))
    }
}

/// Nutrient identifiers used for goal lookups and progress rows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Nutrient {
    Calories,
    Carbs,
    Fat,
    Protein,
    Sodium,
    Sugar,
}

impl Nutrient {
    pub fn all() -> [Nutrient; 6] {
        [
            Nutrient::Calories,
            Nutrient::Carbs,
            Nutrient::Fat,
            Nutrient::Protein,
            Nutrient::Sodium,
            Nutrient::Sugar,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Nutrient::Calories => "Calories",
            Nutrient::Carbs => "Carbs",
            Nutrient::Fat => "Fat",
            Nutrient::Protein => "Protein",
            Nutrient::Sodium => "Sodium",
            Nutrient::Sugar => "Sugar",
        }
    }
}

/// Per-nutrient sums (also used for remaining allowances)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NutrientTotals {
    pub calories: u32,
    pub carbs: u32,
    pub fat: u32,
    pub protein: u32,
    pub sodium: u32,
    pub sugar: u32,
}

impl NutrientTotals {
    pub fn zero() -> Self {
        Self::default()
    }

    /// Value for a single nutrient
    pub fn get(&self, nutrient: Nutrient) -> u32 {
        match nutrient {
            Nutrient::Calories => self.calories,
            Nutrient::Carbs => self.carbs,
            Nutrient::Fat => self.fat,
            Nutrient::Protein => self.protein,
            Nutrient::Sodium => self.sodium,
            Nutrient::Sugar => self.sugar,
        }
    }
}

impl Add for NutrientTotals {
    type Output = NutrientTotals;

    fn add(self, rhs: NutrientTotals) -> NutrientTotals {
        NutrientTotals {
            calories: self.calories.saturating_add(rhs.calories),
            carbs: self.carbs.saturating_add(rhs.carbs),
            fat: self.fat.saturating_add(rhs.fat),
            protein: self.protein.saturating_add(rhs.protein),
            sodium: self.sodium.saturating_add(rhs.sodium),
            sugar: self.sugar.saturating_add(rhs.sugar),
        }
    }
}

impl AddAssign for NutrientTotals {
    fn add_assign(&mut self, rhs: NutrientTotals) {
        *self = *self + rhs;
    }
}

impl Sum for NutrientTotals {
    fn sum<I: Iterator<Item = NutrientTotals>>(iter: I) -> Self {
        iter.fold(NutrientTotals::zero(), Add::add)
    }
}

/// Fixed daily nutrient targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DailyGoals {
    pub calories: u32,
    pub carbs: u32,
    pub fat: u32,
    pub protein: u32,
    pub sodium: u32,
    pub sugar: u32,
}

impl Default for DailyGoals {
    fn default() -> Self {
        Self {
            calories: 1870,
            carbs: 209,
            fat: 58,
            protein: 84,
            sodium: 2300,
            sugar: 63,
        }
    }
}

impl DailyGoals {
    /// Target for a single nutrient
    pub fn get(&self, nutrient: Nutrient) -> u32 {
        match nutrient {
            Nutrient::Calories => self.calories,
            Nutrient::Carbs => self.carbs,
            Nutrient::Fat => self.fat,
            Nutrient::Protein => self.protein,
            Nutrient::Sodium => self.sodium,
            Nutrient::Sugar => self.sugar,
        }
    }
}

/// Raw text fields of the add-food form, exactly as typed
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FoodEntryInput {
    pub name: String,
    pub calories: String,
    pub carbs: String,
    pub fat: String,
    pub protein: String,
    pub sodium: String,
    pub sugar: String,
}

impl FoodEntryInput {
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// One cell of a 7-column month grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CalendarCell {
    /// Padding before the first of the month
    Blank,
    /// An actual day of the month
    Day(NaiveDate),
}

impl CalendarCell {
    pub fn date(&self) -> Option<NaiveDate> {
        match self {
            CalendarCell::Blank => None,
            CalendarCell::Day(date) => Some(*date),
        }
    }
}

/// A month laid out on a Sunday-first 7-column grid, without trailing padding
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthGrid {
    pub year: i32,
    pub month: u32,
    pub first_day_of_week: u32, // 0 = Sunday, 1 = Monday, etc.
    pub cells: Vec<CalendarCell>,
}

impl MonthGrid {
    /// Number of cells holding a date
    pub fn day_count(&self) -> usize {
        self.cells.iter().filter(|c| c.date().is_some()).count()
    }

    /// Number of leading blank cells
    pub fn blank_count(&self) -> usize {
        self.cells.iter().take_while(|c| **c == CalendarCell::Blank).count()
    }

    /// Cells split into rows of seven; the last row may be shorter
    pub fn weeks(&self) -> Vec<&[CalendarCell]> {
        self.cells.chunks(7).collect()
    }
}

/// Activity level catalogue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActivityLevel {
    #[serde(rename = "Sedentary")]
    Sedentary,
    #[serde(rename = "Lightly Active")]
    LightlyActive,
    #[serde(rename = "Moderately Active")]
    ModeratelyActive,
    #[serde(rename = "Very Active")]
    VeryActive,
}

impl ActivityLevel {
    pub fn all() -> [ActivityLevel; 4] {
        [
            ActivityLevel::Sedentary,
            ActivityLevel::LightlyActive,
            ActivityLevel::ModeratelyActive,
            ActivityLevel::VeryActive,
        ]
    }

    pub fn id(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "Sedentary",
            ActivityLevel::LightlyActive => "Lightly Active",
            ActivityLevel::ModeratelyActive => "Moderately Active",
            ActivityLevel::VeryActive => "Very Active",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "SEDENTARY",
            ActivityLevel::LightlyActive => "LIGHTLY ACTIVE",
            ActivityLevel::ModeratelyActive => "MODERATELY ACTIVE",
            ActivityLevel::VeryActive => "VERY ACTIVE",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::all().into_iter().find(|level| level.id() == id)
    }
}

/// Nightly sleep bucket. Ids are the representative hour counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SleepHours {
    #[serde(rename = "4")]
    UnderFive,
    #[serde(rename = "5")]
    FiveToSix,
    #[serde(rename = "7")]
    SixToEight,
    #[serde(rename = "9")]
    OverEight,
}

impl SleepHours {
    pub fn all() -> [SleepHours; 4] {
        [
            SleepHours::UnderFive,
            SleepHours::FiveToSix,
            SleepHours::SixToEight,
            SleepHours::OverEight,
        ]
    }

    pub fn id(&self) -> &'static str {
        match self {
            SleepHours::UnderFive => "4",
            SleepHours::FiveToSix => "5",
            SleepHours::SixToEight => "7",
            SleepHours::OverEight => "9",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SleepHours::UnderFive => "<5 HOURS",
            SleepHours::FiveToSix => "5-6 HOURS",
            SleepHours::SixToEight => "6-8 HOURS",
            SleepHours::OverEight => ">8 HOURS",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::all().into_iter().find(|bucket| bucket.id() == id)
    }
}

/// Diet preference catalogue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DietPreference {
    Vegetarian,
    Vegan,
    Omnivore,
    Keto,
    Other,
}

impl DietPreference {
    pub fn all() -> [DietPreference; 5] {
        [
            DietPreference::Vegetarian,
            DietPreference::Vegan,
            DietPreference::Omnivore,
            DietPreference::Keto,
            DietPreference::Other,
        ]
    }

    pub fn id(&self) -> &'static str {
        match self {
            DietPreference::Vegetarian => "Vegetarian",
            DietPreference::Vegan => "Vegan",
            DietPreference::Omnivore => "Omnivore",
            DietPreference::Keto => "Keto",
            DietPreference::Other => "Other",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DietPreference::Vegetarian => "VEGETARIAN",
            DietPreference::Vegan => "VEGAN",
            DietPreference::Omnivore => "OMNIVORE",
            DietPreference::Keto => "KETO",
            DietPreference::Other => "OTHER",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::all().into_iter().find(|diet| diet.id() == id)
    }
}

/// The three independent questions of the lifestyle form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LifestyleCategory {
    ActivityLevel,
    SleepHours,
    DietPreference,
}

impl LifestyleCategory {
    pub fn all() -> [LifestyleCategory; 3] {
        [
            LifestyleCategory::ActivityLevel,
            LifestyleCategory::SleepHours,
            LifestyleCategory::DietPreference,
        ]
    }

    /// Section heading shown above the options
    pub fn title(&self) -> &'static str {
        match self {
            LifestyleCategory::ActivityLevel => "Activity Level",
            LifestyleCategory::SleepHours => "Sleep Hours",
            LifestyleCategory::DietPreference => "Diet Preference",
        }
    }
}

impl fmt::Display for LifestyleCategory {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// Current choices on the lifestyle form; `None` means unset
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LifestyleSelection {
    pub activity_level: Option<ActivityLevel>,
    pub sleep_hours: Option<SleepHours>,
    pub diet_preference: Option<DietPreference>,
}

impl LifestyleSelection {
    /// Categories that still need an answer, in form order
    pub fn missing_categories(&self) -> Vec<LifestyleCategory> {
        let mut missing = Vec::new();
        if self.activity_level.is_none() {
            missing.push(LifestyleCategory::ActivityLevel);
        }
        if self.sleep_hours.is_none() {
            missing.push(LifestyleCategory::SleepHours);
        }
        if self.diet_preference.is_none() {
            missing.push(LifestyleCategory::DietPreference);
        }
        missing
    }

    pub fn is_complete(&self) -> bool {
        self.missing_categories().is_empty()
    }

    /// The complete triple, if every category is answered
    pub fn to_data(&self) -> Option<LifestyleData> {
        Some(LifestyleData {
            activity_level: self.activity_level?,
            sleep_hours: self.sleep_hours?,
            diet_preference: self.diet_preference?,
        })
    }
}

/// Result handed to the next step of the intake flow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LifestyleData {
    pub activity_level: ActivityLevel,
    pub sleep_hours: SleepHours,
    pub diet_preference: DietPreference,
}
