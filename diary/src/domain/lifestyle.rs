//! Lifestyle intake domain logic.
//!
//! The form asks three independent single-choice questions. Selections can be
//! changed freely in any order; only submission requires all three answers.

use shared::{
    ActivityLevel, DietPreference, LifestyleCategory, LifestyleData, LifestyleSelection,
    SleepHours,
};

/// Route of the step following the lifestyle form in the intake flow
pub const DEFAULT_NEXT_ROUTE: &str = "/health/forms/Wellness";

/// Inline message shown when submitting an incomplete form
pub const INCOMPLETE_WARNING: &str = "Please select an option in each category before continuing.";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LifestyleValidationError {
    #[error("Please select an option in each category before continuing (missing: {})", format_missing(.missing))]
    IncompleteSelection { missing: Vec<LifestyleCategory> },
    #[error("Unknown {category} option \"{id}\"")]
    UnknownOption {
        category: LifestyleCategory,
        id: String,
    },
}

fn format_missing(missing: &[LifestyleCategory]) -> String {
    missing
        .iter()
        .map(|c| c.title())
        .collect::<Vec<_>>()
        .join(", ")
}

/// The complete triple, or the categories still unset
pub fn validate_selection(
    selection: &LifestyleSelection,
) -> Result<LifestyleData, LifestyleValidationError> {
    selection
        .to_data()
        .ok_or_else(|| LifestyleValidationError::IncompleteSelection {
            missing: selection.missing_categories(),
        })
}

/// Replace one category's answer using its catalogue id
pub fn apply_option_id(
    selection: &mut LifestyleSelection,
    category: LifestyleCategory,
    id: &str,
) -> Result<(), LifestyleValidationError> {
    let unknown = || LifestyleValidationError::UnknownOption {
        category,
        id: id.to_string(),
    };

    match category {
        LifestyleCategory::ActivityLevel => {
            selection.activity_level = Some(ActivityLevel::from_id(id).ok_or_else(unknown)?);
        }
        LifestyleCategory::SleepHours => {
            selection.sleep_hours = Some(SleepHours::from_id(id).ok_or_else(unknown)?);
        }
        LifestyleCategory::DietPreference => {
            selection.diet_preference = Some(DietPreference::from_id(id).ok_or_else(unknown)?);
        }
    }
    Ok(())
}

/// One selectable option as a renderer needs it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionView {
    pub id: &'static str,
    pub label: &'static str,
    pub selected: bool,
}

/// A titled list of options for one category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionGroup {
    pub category: LifestyleCategory,
    pub title: &'static str,
    pub options: Vec<OptionView>,
}

/// The three catalogues in form order, with the current choice marked
pub fn option_groups(selection: &LifestyleSelection) -> Vec<OptionGroup> {
    LifestyleCategory::all()
        .into_iter()
        .map(|category| {
            let options = match category {
                LifestyleCategory::ActivityLevel => ActivityLevel::all()
                    .into_iter()
                    .map(|o| OptionView {
                        id: o.id(),
                        label: o.label(),
                        selected: selection.activity_level == Some(o),
                    })
                    .collect(),
                LifestyleCategory::SleepHours => SleepHours::all()
                    .into_iter()
                    .map(|o| OptionView {
                        id: o.id(),
                        label: o.label(),
                        selected: selection.sleep_hours == Some(o),
                    })
                    .collect(),
                LifestyleCategory::DietPreference => DietPreference::all()
                    .into_iter()
                    .map(|o| OptionView {
                        id: o.id(),
                        label: o.label(),
                        selected: selection.diet_preference == Some(o),
                    })
                    .collect(),
            };
            OptionGroup {
                category,
                title: category.title(),
                options,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_complete_selection() {
        let selection = LifestyleSelection {
            activity_level: Some(ActivityLevel::ModeratelyActive),
            sleep_hours: Some(SleepHours::SixToEight),
            diet_preference: Some(DietPreference::Omnivore),
        };

        let data = validate_selection(&selection).unwrap();
        assert_eq!(data.activity_level, ActivityLevel::ModeratelyActive);
        assert_eq!(data.sleep_hours, SleepHours::SixToEight);
        assert_eq!(data.diet_preference, DietPreference::Omnivore);
    }

    #[test]
    fn test_validate_reports_missing_categories() {
        let selection = LifestyleSelection {
            sleep_hours: Some(SleepHours::OverEight),
            ..LifestyleSelection::default()
        };

        let err = validate_selection(&selection).unwrap_err();
        assert_eq!(
            err,
            LifestyleValidationError::IncompleteSelection {
                missing: vec![LifestyleCategory::ActivityLevel, LifestyleCategory::DietPreference],
            }
        );
        assert!(err.to_string().contains("Activity Level, Diet Preference"));
    }

    #[test]
    fn test_apply_option_id() {
        let mut selection = LifestyleSelection::default();

        apply_option_id(&mut selection, LifestyleCategory::SleepHours, "5").unwrap();
        assert_eq!(selection.sleep_hours, Some(SleepHours::FiveToSix));

        let err = apply_option_id(&mut selection, LifestyleCategory::SleepHours, "12").unwrap_err();
        assert!(matches!(err, LifestyleValidationError::UnknownOption { .. }));
        // A rejected id keeps the previous answer
        assert_eq!(selection.sleep_hours, Some(SleepHours::FiveToSix));
    }

    #[test]
    fn test_option_groups_mark_selection() {
        let selection = LifestyleSelection {
            diet_preference: Some(DietPreference::Keto),
            ..LifestyleSelection::default()
        };

        let groups = option_groups(&selection);
        let sizes: Vec<usize> = groups.iter().map(|g| g.options.len()).collect();
        assert_eq!(sizes, vec![4, 4, 5]);

        let selected: Vec<&str> = groups
            .iter()
            .flat_map(|g| g.options.iter())
            .filter(|o| o.selected)
            .map(|o| o.id)
            .collect();
        assert_eq!(selected, vec!["Keto"]);
        assert_eq!(groups[1].title, "Sleep Hours");
    }
}
