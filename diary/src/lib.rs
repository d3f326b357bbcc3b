//! # Food Diary
//!
//! Logic behind two screens of a nutrition tracking app:
//!
//! - the food diary, a date-keyed ledger of meals with nutrient totals,
//!   remaining allowances against daily goals and a month date picker
//! - the lifestyle intake form, three single-choice questions handed to the
//!   next step of a multi-step flow
//!
//! All state lives in memory for the lifetime of the screen. Rendering is left
//! to the host: the `state` controllers expose plain view structs and take
//! user events as method calls.

pub mod config;
pub mod domain;
pub mod state;

#[cfg(test)]
pub(crate) mod test_utils;

pub use config::DiaryConfig;
pub use domain::{
    CalendarError, CalendarService, FlowNavigator, FoodLedger, FoodValidationError, LedgerError,
    LifestyleValidationError, Navigator,
};
pub use state::{FoodDiaryState, LifestyleFormState};
