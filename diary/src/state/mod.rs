//! Screen state controllers driven by a renderer.

pub mod diary_state;
pub mod food_form_state;
pub mod lifestyle_state;
pub mod modal_state;

pub use diary_state::{
    DailySummary, DatePickerCell, DatePickerView, DayHighlight, FoodDiaryState, MealSection,
    NutritionProgress,
};
pub use food_form_state::AddFoodFormState;
pub use lifestyle_state::LifestyleFormState;
pub use modal_state::ActiveModal;
