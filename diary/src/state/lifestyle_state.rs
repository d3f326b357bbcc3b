//! # Lifestyle Form State Module
//!
//! Screen controller for the lifestyle intake step.
//!
//! The form works in two modes. Embedded in a multi-step host, it hands its
//! result to the host's `on_next` / `on_back` continuations. Used as a
//! standalone page, it falls back to the `Navigator`: forward to the next
//! route of the flow, or back. A supplied continuation always takes
//! precedence over the navigator.

use log::{info, warn};
use shared::{
    ActivityLevel, DietPreference, LifestyleCategory, LifestyleData, LifestyleSelection,
    SleepHours,
};

use crate::config::DiaryConfig;
use crate::domain::lifestyle::{
    apply_option_id, option_groups, validate_selection, LifestyleValidationError, OptionGroup,
    DEFAULT_NEXT_ROUTE, INCOMPLETE_WARNING,
};
use crate::domain::navigation::Navigator;

pub type NextCallback = Box<dyn FnMut(&LifestyleData)>;
pub type BackCallback = Box<dyn FnMut()>;

pub struct LifestyleFormState {
    /// Current answers
    selection: LifestyleSelection,

    /// Whether the incomplete-selection warning is displayed
    show_warning: bool,

    /// Route pushed after a valid submit when no `on_next` is supplied
    next_route: String,

    on_next: Option<NextCallback>,
    on_back: Option<BackCallback>,
    navigator: Box<dyn Navigator>,
}

impl std::fmt::Debug for LifestyleFormState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LifestyleFormState")
            .field("selection", &self.selection)
            .field("show_warning", &self.show_warning)
            .field("next_route", &self.next_route)
            .field("on_next", &self.on_next.is_some())
            .field("on_back", &self.on_back.is_some())
            .finish()
    }
}

impl LifestyleFormState {
    /// Standalone form using `navigator` for both directions
    pub fn new(navigator: Box<dyn Navigator>) -> Self {
        Self {
            selection: LifestyleSelection::default(),
            show_warning: false,
            next_route: DEFAULT_NEXT_ROUTE.to_string(),
            on_next: None,
            on_back: None,
            navigator,
        }
    }

    /// Standalone form moving to the configured `lifestyle_next_route`
    pub fn from_config(config: &DiaryConfig, navigator: Box<dyn Navigator>) -> Self {
        Self::new(navigator).with_next_route(config.lifestyle_next_route.clone())
    }

    /// Override the route pushed after a valid submit
    pub fn with_next_route(mut self, route: impl Into<String>) -> Self {
        self.next_route = route.into();
        self
    }

    /// Continuation receiving the completed selection instead of navigating
    pub fn with_on_next(mut self, on_next: impl FnMut(&LifestyleData) + 'static) -> Self {
        self.on_next = Some(Box::new(on_next));
        self
    }

    /// Continuation invoked by `go_back` instead of navigating
    pub fn with_on_back(mut self, on_back: impl FnMut() + 'static) -> Self {
        self.on_back = Some(Box::new(on_back));
        self
    }

    pub fn selection(&self) -> &LifestyleSelection {
        &self.selection
    }

    pub fn select_activity_level(&mut self, level: ActivityLevel) {
        self.selection.activity_level = Some(level);
    }

    pub fn select_sleep_hours(&mut self, hours: SleepHours) {
        self.selection.sleep_hours = Some(hours);
    }

    pub fn select_diet_preference(&mut self, diet: DietPreference) {
        self.selection.diet_preference = Some(diet);
    }

    /// Select by catalogue id, e.g. `(SleepHours, "7")`
    pub fn select_by_id(
        &mut self,
        category: LifestyleCategory,
        id: &str,
    ) -> Result<(), LifestyleValidationError> {
        apply_option_id(&mut self.selection, category, id)
    }

    /// Option lists with the current answers marked
    pub fn option_groups(&self) -> Vec<OptionGroup> {
        option_groups(&self.selection)
    }

    /// Inline warning while an incomplete submit is unresolved
    pub fn warning_message(&self) -> Option<&'static str> {
        self.show_warning.then_some(INCOMPLETE_WARNING)
    }

    /// NEXT button. Requires an answer in every category.
    pub fn submit(&mut self) -> Result<LifestyleData, LifestyleValidationError> {
        let data = match validate_selection(&self.selection) {
            Ok(data) => data,
            Err(e) => {
                warn!("Lifestyle submit refused: {}", e);
                self.show_warning = true;
                return Err(e);
            }
        };
        self.show_warning = false;

        match self.on_next.as_mut() {
            Some(on_next) => {
                info!("Lifestyle submitted to host: {:?}", data);
                on_next(&data);
            }
            None => {
                info!("Lifestyle submitted, moving to {}", self.next_route);
                self.navigator.push(&self.next_route);
            }
        }
        Ok(data)
    }

    /// BACK button
    pub fn go_back(&mut self) {
        match self.on_back.as_mut() {
            Some(on_back) => on_back(),
            None => self.navigator.back(),
        }
    }
}
