//! # Modal State Module
//!
//! The diary screen shows at most one modal at a time: the date picker or the
//! add-food form. The add-food variant carries the meal slot the new entry
//! will be logged under.

use shared::MealSlot;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveModal {
    #[default]
    None,
    DatePicker,
    AddFood { slot: MealSlot },
}

impl ActiveModal {
    pub fn is_open(&self) -> bool {
        !matches!(self, ActiveModal::None)
    }

    pub fn is_date_picker(&self) -> bool {
        matches!(self, ActiveModal::DatePicker)
    }

    /// Target slot while the add-food form is open
    pub fn add_food_slot(&self) -> Option<MealSlot> {
        match self {
            ActiveModal::AddFood { slot } => Some(*slot),
            _ => None,
        }
    }
}
