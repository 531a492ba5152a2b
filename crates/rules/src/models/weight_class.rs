use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{Gender, normalize_token};
use crate::error::RulesError;

/// Upper bound stored for the heaviest class of each table.
pub const OPEN_ENDED_MAX_KG: i64 = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WeightClass {
    Rooster,
    LightFeather,
    Feather,
    Light,
    Middle,
    MediumHeavy,
    Heavy,
    SuperHeavy,
    UltraHeavy,
}

/// One row of a gender-specific weight table.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct WeightClassEntry {
    pub value: WeightClass,
    pub label: String,
    #[serde(with = "rust_decimal::serde::float")]
    #[schema(value_type = f64)]
    pub max: Decimal,
}

const MALE_TABLE: &[WeightClass] = &[
    WeightClass::Rooster,
    WeightClass::LightFeather,
    WeightClass::Feather,
    WeightClass::Light,
    WeightClass::Middle,
    WeightClass::MediumHeavy,
    WeightClass::Heavy,
    WeightClass::SuperHeavy,
    WeightClass::UltraHeavy,
];

const FEMALE_TABLE: &[WeightClass] = &[
    WeightClass::Rooster,
    WeightClass::LightFeather,
    WeightClass::Feather,
    WeightClass::Light,
    WeightClass::Middle,
    WeightClass::MediumHeavy,
    WeightClass::Heavy,
    WeightClass::SuperHeavy,
];

impl WeightClass {
    /// The ordered table for a gender, lightest first. Empty when weight does not apply.
    pub fn table(gender: Gender) -> &'static [WeightClass] {
        match gender {
            Gender::Male => MALE_TABLE,
            Gender::Female => FEMALE_TABLE,
            Gender::NotApplicable => &[],
        }
    }

    pub fn entries(gender: Gender) -> Vec<WeightClassEntry> {
        Self::table(gender)
            .iter()
            .filter_map(|class| {
                class.max_kg(gender).map(|max| WeightClassEntry {
                    value: *class,
                    label: class.label().to_string(),
                    max,
                })
            })
            .collect()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Rooster => "ROOSTER",
            Self::LightFeather => "LIGHT_FEATHER",
            Self::Feather => "FEATHER",
            Self::Light => "LIGHT",
            Self::Middle => "MIDDLE",
            Self::MediumHeavy => "MEDIUM_HEAVY",
            Self::Heavy => "HEAVY",
            Self::SuperHeavy => "SUPER_HEAVY",
            Self::UltraHeavy => "ULTRA_HEAVY",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Rooster => "Rooster",
            Self::LightFeather => "Light Feather",
            Self::Feather => "Feather",
            Self::Light => "Light",
            Self::Middle => "Middle",
            Self::MediumHeavy => "Medium Heavy",
            Self::Heavy => "Heavy",
            Self::SuperHeavy => "Super Heavy",
            Self::UltraHeavy => "Ultra Heavy",
        }
    }

    /// Maximum weight in kg for this class, or `None` when the class is not part of the
    /// gender's table.
    pub fn max_kg(&self, gender: Gender) -> Option<Decimal> {
        let max = match (gender, self) {
            (Gender::Male, Self::Rooster) => Decimal::new(575, 1),
            (Gender::Male, Self::LightFeather) => Decimal::new(64, 0),
            (Gender::Male, Self::Feather) => Decimal::new(70, 0),
            (Gender::Male, Self::Light) => Decimal::new(76, 0),
            (Gender::Male, Self::Middle) => Decimal::new(823, 1),
            (Gender::Male, Self::MediumHeavy) => Decimal::new(883, 1),
            (Gender::Male, Self::Heavy) => Decimal::new(943, 1),
            (Gender::Male, Self::SuperHeavy) => Decimal::new(1005, 1),
            (Gender::Male, Self::UltraHeavy) => Decimal::new(OPEN_ENDED_MAX_KG, 0),
            (Gender::Female, Self::Rooster) => Decimal::new(485, 1),
            (Gender::Female, Self::LightFeather) => Decimal::new(535, 1),
            (Gender::Female, Self::Feather) => Decimal::new(585, 1),
            (Gender::Female, Self::Light) => Decimal::new(64, 0),
            (Gender::Female, Self::Middle) => Decimal::new(69, 0),
            (Gender::Female, Self::MediumHeavy) => Decimal::new(74, 0),
            (Gender::Female, Self::Heavy) => Decimal::new(793, 1),
            (Gender::Female, Self::SuperHeavy) => Decimal::new(OPEN_ENDED_MAX_KG, 0),
            _ => return None,
        };
        Some(max)
    }

    pub fn is_open_ended(&self, gender: Gender) -> bool {
        self.max_kg(gender) == Some(Decimal::new(OPEN_ENDED_MAX_KG, 0))
    }

    pub fn is_available_for(&self, gender: Gender) -> bool {
        Self::table(gender).contains(self)
    }

    /// Lightest class of the gender's table that admits `weight_kg`.
    pub fn classify(gender: Gender, weight_kg: Decimal) -> Option<WeightClass> {
        if weight_kg <= Decimal::ZERO {
            return None;
        }

        Self::table(gender)
            .iter()
            .copied()
            .find(|class| class.max_kg(gender).is_some_and(|max| weight_kg <= max))
    }
}

impl std::str::FromStr for WeightClass {
    type Err = RulesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = normalize_token(s);
        MALE_TABLE
            .iter()
            .copied()
            .find(|class| class.as_str() == normalized)
            .ok_or_else(|| RulesError::unknown("weight class", s))
    }
}

impl std::fmt::Display for WeightClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tables_are_ascending() {
        for gender in [Gender::Male, Gender::Female] {
            let maxima: Vec<Decimal> = WeightClass::table(gender)
                .iter()
                .map(|class| class.max_kg(gender).unwrap())
                .collect();
            assert!(maxima.windows(2).all(|w| w[0] < w[1]), "{gender}");
        }
    }

    #[test]
    fn test_female_thresholds_below_male() {
        for class in WeightClass::table(Gender::Female) {
            if class.is_open_ended(Gender::Female) {
                continue;
            }
            let female = class.max_kg(Gender::Female).unwrap();
            let male = class.max_kg(Gender::Male).unwrap();
            assert!(female < male, "{class}: {female} vs {male}");
        }
    }

    #[test]
    fn test_heaviest_class_is_open_ended() {
        assert!(WeightClass::UltraHeavy.is_open_ended(Gender::Male));
        assert!(WeightClass::SuperHeavy.is_open_ended(Gender::Female));
        assert!(!WeightClass::SuperHeavy.is_open_ended(Gender::Male));
    }

    #[test]
    fn test_not_applicable_has_no_classes() {
        assert!(WeightClass::table(Gender::NotApplicable).is_empty());
        assert!(WeightClass::entries(Gender::NotApplicable).is_empty());
        assert_eq!(WeightClass::Rooster.max_kg(Gender::NotApplicable), None);
    }

    #[test]
    fn test_ultra_heavy_is_male_only() {
        assert!(WeightClass::UltraHeavy.is_available_for(Gender::Male));
        assert!(!WeightClass::UltraHeavy.is_available_for(Gender::Female));
    }

    #[test]
    fn test_classify() {
        assert_eq!(
            WeightClass::classify(Gender::Male, Decimal::new(825, 1)),
            Some(WeightClass::MediumHeavy)
        );
        assert_eq!(
            WeightClass::classify(Gender::Male, Decimal::new(823, 1)),
            Some(WeightClass::Middle)
        );
        assert_eq!(
            WeightClass::classify(Gender::Female, Decimal::new(80, 0)),
            Some(WeightClass::SuperHeavy)
        );
        assert_eq!(
            WeightClass::classify(Gender::Male, Decimal::new(150, 0)),
            Some(WeightClass::UltraHeavy)
        );
        assert_eq!(WeightClass::classify(Gender::Male, Decimal::ZERO), None);
        assert_eq!(
            WeightClass::classify(Gender::NotApplicable, Decimal::new(30, 0)),
            None
        );
    }
}
