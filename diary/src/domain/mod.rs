//! Domain services: everything the screens compute, free of presentation.

pub mod calendar;
pub mod food_entry;
pub mod ledger;
pub mod lifestyle;
pub mod navigation;
pub mod nutrition;

pub use calendar::{CalendarError, CalendarService, WEEKDAY_HEADERS};
pub use food_entry::{parse_food_entry, FoodValidationError};
pub use ledger::{FoodLedger, LedgerError};
pub use lifestyle::LifestyleValidationError;
pub use navigation::{FlowNavigator, Navigator};
