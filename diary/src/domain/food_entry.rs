//! Food entry domain logic for the add-food form.
//!
//! Every numeric field arrives as free text. Name and calories are required;
//! the remaining macros are optional and fall back to zero whenever they are
//! empty or unparseable, so a missing macro never blocks an entry.

use log::debug;
use shared::{FoodEntryInput, FoodItem};

/// Specific validation errors for the add-food form
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FoodValidationError {
    #[error("Please enter a food name")]
    EmptyName,
    #[error("Please enter calories")]
    MissingCalories,
    #[error("Calories must be a whole number, got \"{0}\"")]
    InvalidCalories(String),
    #[error("Calories cannot be negative ({0})")]
    NegativeCalories(i64),
}

/// Parse the raw form fields into a loggable item
pub fn parse_food_entry(input: &FoodEntryInput) -> Result<FoodItem, FoodValidationError> {
    let name = input.name.trim();
    if name.is_empty() {
        return Err(FoodValidationError::EmptyName);
    }

    let calories = parse_calories(&input.calories)?;

    let item = FoodItem {
        name: name.to_string(),
        calories,
        carbs: parse_optional_amount(&input.carbs),
        fat: parse_optional_amount(&input.fat),
        protein: parse_optional_amount(&input.protein),
        sodium: parse_optional_amount(&input.sodium),
        sugar: parse_optional_amount(&input.sugar),
    };
    debug!("🍽️ Parsed food entry: {:?}", item);
    Ok(item)
}

fn parse_calories(raw: &str) -> Result<u32, FoodValidationError> {
    if raw.trim().is_empty() {
        return Err(FoodValidationError::MissingCalories);
    }

    match parse_leading_int(raw) {
        Some(value) if value < 0 => Err(FoodValidationError::NegativeCalories(value)),
        Some(value) => Ok(clamp_to_u32(value)),
        None => Err(FoodValidationError::InvalidCalories(raw.trim().to_string())),
    }
}

/// Optional macros coerce anything unusable (empty, junk, negative) to 0
pub fn parse_optional_amount(raw: &str) -> u32 {
    match parse_leading_int(raw) {
        Some(value) if value > 0 => clamp_to_u32(value),
        _ => 0,
    }
}

/// Integer parsing with leading-integer semantics: skip leading whitespace,
/// accept an optional sign, then take the leading run of digits and ignore
/// whatever follows ("95 kcal" -> 95, "12.7" -> 12). None when there are no
/// digits. Out-of-range values saturate to the i64 bounds.
pub fn parse_leading_int(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits: &str = {
        let end = rest
            .char_indices()
            .find(|(_, c)| !c.is_ascii_digit())
            .map(|(i, _)| i)
            .unwrap_or(rest.len());
        &rest[..end]
    };
    if digits.is_empty() {
        return None;
    }

    let magnitude = digits
        .bytes()
        .fold(0i64, |acc, b| acc.saturating_mul(10).saturating_add(i64::from(b - b'0')));
    Some(if negative { -magnitude } else { magnitude })
}

fn clamp_to_u32(value: i64) -> u32 {
    u32::try_from(value).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(name: &str, calories: &str) -> FoodEntryInput {
        FoodEntryInput {
            name: name.to_string(),
            calories: calories.to_string(),
            ..FoodEntryInput::default()
        }
    }

    #[test]
    fn test_name_and_calories_only() {
        let item = parse_food_entry(&input("Apple", "95")).unwrap();

        assert_eq!(item, FoodItem::new("Apple", 95));
    }

    #[test]
    fn test_all_fields() {
        let entry = FoodEntryInput {
            name: "  White bread, 1 slice ".to_string(),
            calories: "75".to_string(),
            carbs: "14".to_string(),
            fat: "1".to_string(),
            protein: "3".to_string(),
            sodium: "134".to_string(),
            sugar: "1".to_string(),
        };

        let item = parse_food_entry(&entry).unwrap();
        assert_eq!(item.name, "White bread, 1 slice");
        assert_eq!(item.sodium, 134);
        assert_eq!(item.carbs, 14);
    }

    #[test]
    fn test_required_fields() {
        assert_eq!(parse_food_entry(&input("", "95")), Err(FoodValidationError::EmptyName));
        assert_eq!(parse_food_entry(&input("   ", "95")), Err(FoodValidationError::EmptyName));
        assert_eq!(
            parse_food_entry(&input("Apple", "")),
            Err(FoodValidationError::MissingCalories)
        );
        assert_eq!(
            parse_food_entry(&input("Apple", "lots")),
            Err(FoodValidationError::InvalidCalories("lots".to_string()))
        );
        assert_eq!(
            parse_food_entry(&input("Apple", "-20")),
            Err(FoodValidationError::NegativeCalories(-20))
        );
    }

    #[test]
    fn test_optional_fields_never_reject() {
        let entry = FoodEntryInput {
            name: "Soup".to_string(),
            calories: "120".to_string(),
            carbs: "abc".to_string(),
            fat: "-4".to_string(),
            protein: "".to_string(),
            sodium: "8.9".to_string(),
            sugar: "  3g".to_string(),
        };

        let item = parse_food_entry(&entry).unwrap();
        assert_eq!(item.carbs, 0);
        assert_eq!(item.fat, 0);
        assert_eq!(item.protein, 0);
        assert_eq!(item.sodium, 8);
        assert_eq!(item.sugar, 3);
    }

    #[test]
    fn test_parse_leading_int() {
        assert_eq!(parse_leading_int("95"), Some(95));
        assert_eq!(parse_leading_int("  95 kcal"), Some(95));
        assert_eq!(parse_leading_int("12.7"), Some(12));
        assert_eq!(parse_leading_int("+7"), Some(7));
        assert_eq!(parse_leading_int("-3"), Some(-3));
        assert_eq!(parse_leading_int("kcal 95"), None);
        assert_eq!(parse_leading_int("-"), None);
        assert_eq!(parse_leading_int(""), None);
    }

    #[test]
    fn test_huge_values_saturate() {
        assert_eq!(parse_optional_amount("99999999999999999999999"), u32::MAX);
        let item = parse_food_entry(&input("Feast", "5000000000")).unwrap();
        assert_eq!(item.calories, u32::MAX);
    }
}
