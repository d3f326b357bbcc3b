//! # Add Food Form State
//!
//! Text typed into the add-food modal plus the inline error from the last
//! rejected submit.

use shared::FoodEntryInput;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddFoodFormState {
    /// Raw field contents
    pub input: FoodEntryInput,

    /// Message from the last failed submit, cleared on the next edit or reset
    pub error_message: Option<String>,
}

impl AddFoodFormState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset every field and the error
    pub fn clear(&mut self) {
        self.input.clear();
        self.error_message = None;
    }

    pub fn set_error(&mut self, message: String) {
        self.error_message = Some(message);
    }

    /// Quick check used to enable the submit button; full parsing happens on submit
    pub fn can_submit(&self) -> bool {
        !self.input.name.trim().is_empty() && !self.input.calories.trim().is_empty()
    }

    pub fn set_name(&mut self, value: impl Into<String>) {
        self.input.name = value.into();
        self.error_message = None;
    }

    pub fn set_calories(&mut self, value: impl Into<String>) {
        self.input.calories = value.into();
        self.error_message = None;
    }

    pub fn set_carbs(&mut self, value: impl Into<String>) {
        self.input.carbs = value.into();
    }

    pub fn set_fat(&mut self, value: impl Into<String>) {
        self.input.fat = value.into();
    }

    pub fn set_protein(&mut self, value: impl Into<String>) {
        self.input.protein = value.into();
    }

    pub fn set_sodium(&mut self, value: impl Into<String>) {
        self.input.sodium = value.into();
    }

    pub fn set_sugar(&mut self, value: impl Into<String>) {
        self.input.sugar = value.into();
    }
}
