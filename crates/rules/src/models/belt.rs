use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::normalize_token;
use crate::error::RulesError;

/// Belt ranks in graduation order: kids grades first, then adult, then master belts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BeltRank {
    WhiteGrey,
    Grey,
    GreyBlack,
    YellowWhite,
    Yellow,
    YellowBlack,
    OrangeWhite,
    Orange,
    OrangeBlack,
    GreenWhite,
    Green,
    GreenBlack,
    White,
    Blue,
    Purple,
    Brown,
    Black,
    Coral,
    Red,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum BeltTier {
    Kids,
    Adult,
    Master,
}

impl BeltRank {
    pub fn all() -> &'static [BeltRank] {
        use BeltRank::*;
        &[
            WhiteGrey,
            Grey,
            GreyBlack,
            YellowWhite,
            Yellow,
            YellowBlack,
            OrangeWhite,
            Orange,
            OrangeBlack,
            GreenWhite,
            Green,
            GreenBlack,
            White,
            Blue,
            Purple,
            Brown,
            Black,
            Coral,
            Red,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::WhiteGrey => "WHITE_GREY",
            Self::Grey => "GREY",
            Self::GreyBlack => "GREY_BLACK",
            Self::YellowWhite => "YELLOW_WHITE",
            Self::Yellow => "YELLOW",
            Self::YellowBlack => "YELLOW_BLACK",
            Self::OrangeWhite => "ORANGE_WHITE",
            Self::Orange => "ORANGE",
            Self::OrangeBlack => "ORANGE_BLACK",
            Self::GreenWhite => "GREEN_WHITE",
            Self::Green => "GREEN",
            Self::GreenBlack => "GREEN_BLACK",
            Self::White => "WHITE",
            Self::Blue => "BLUE",
            Self::Purple => "PURPLE",
            Self::Brown => "BROWN",
            Self::Black => "BLACK",
            Self::Coral => "CORAL",
            Self::Red => "RED",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::WhiteGrey => "White-Grey",
            Self::Grey => "Grey",
            Self::GreyBlack => "Grey-Black",
            Self::YellowWhite => "Yellow-White",
            Self::Yellow => "Yellow",
            Self::YellowBlack => "Yellow-Black",
            Self::OrangeWhite => "Orange-White",
            Self::Orange => "Orange",
            Self::OrangeBlack => "Orange-Black",
            Self::GreenWhite => "Green-White",
            Self::Green => "Green",
            Self::GreenBlack => "Green-Black",
            Self::White => "White",
            Self::Blue => "Blue",
            Self::Purple => "Purple",
            Self::Brown => "Brown",
            Self::Black => "Black",
            Self::Coral => "Coral (Red-Black)",
            Self::Red => "Red",
        }
    }

    /// Hex colour used when rendering the belt.
    pub fn color(&self) -> &'static str {
        match self {
            Self::WhiteGrey => "#808080",
            Self::Grey => "#A9A9A9",
            Self::GreyBlack => "#696969",
            Self::YellowWhite => "#FFFF99",
            Self::Yellow => "#FFD700",
            Self::YellowBlack => "#B8860B",
            Self::OrangeWhite => "#FFD599",
            Self::Orange => "#FFA500",
            Self::OrangeBlack => "#CC8400",
            Self::GreenWhite => "#90EE90",
            Self::Green => "#00A000",
            Self::GreenBlack => "#006400",
            Self::White => "#FFFFFF",
            Self::Blue => "#0000FF",
            Self::Purple => "#800080",
            Self::Brown => "#8B4513",
            Self::Black => "#000000",
            Self::Coral => "#8B0000",
            Self::Red => "#FF0000",
        }
    }

    pub fn tier(&self) -> BeltTier {
        match self {
            Self::White | Self::Blue | Self::Purple | Self::Brown | Self::Black => BeltTier::Adult,
            Self::Coral | Self::Red => BeltTier::Master,
            _ => BeltTier::Kids,
        }
    }

    pub fn is_kids_belt(&self) -> bool {
        self.tier() == BeltTier::Kids
    }
}

impl std::str::FromStr for BeltRank {
    type Err = RulesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = normalize_token(s);
        Self::all()
            .iter()
            .copied()
            .find(|belt| belt.as_str() == normalized)
            .ok_or_else(|| RulesError::unknown("belt rank", s))
    }
}

impl std::fmt::Display for BeltRank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_order_groups_tiers() {
        let tiers: Vec<BeltTier> = BeltRank::all().iter().map(|b| b.tier()).collect();
        let first_adult = tiers.iter().position(|t| *t == BeltTier::Adult).unwrap();
        let first_master = tiers.iter().position(|t| *t == BeltTier::Master).unwrap();

        assert_eq!(first_adult, 12);
        assert!(tiers[..first_adult].iter().all(|t| *t == BeltTier::Kids));
        assert!(tiers[first_adult..first_master].iter().all(|t| *t == BeltTier::Adult));
        assert!(tiers[first_master..].iter().all(|t| *t == BeltTier::Master));
    }

    #[test]
    fn test_kids_belt_flag() {
        assert!(BeltRank::GreyBlack.is_kids_belt());
        assert!(!BeltRank::White.is_kids_belt());
        assert!(!BeltRank::Coral.is_kids_belt());
    }

    #[test]
    fn test_parse_is_forgiving() {
        assert_eq!("blue".parse::<BeltRank>().unwrap(), BeltRank::Blue);
        assert_eq!("green-black".parse::<BeltRank>().unwrap(), BeltRank::GreenBlack);
        assert_eq!(" White Grey ".parse::<BeltRank>().unwrap(), BeltRank::WhiteGrey);
        assert!("azul".parse::<BeltRank>().is_err());
    }

    #[test]
    fn test_wire_value_matches_as_str() {
        let json = serde_json::to_string(&BeltRank::OrangeBlack).unwrap();
        assert_eq!(json, "\"ORANGE_BLACK\"");
    }
}
