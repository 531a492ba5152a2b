//! Allotted match time for a division.
//!
//! Division labels are entered by organizers and rarely match the catalog exactly, so the
//! lookup works on free text: the age category is checked against an ordered list of youth
//! patterns, then the belt rank against keyword lists, then a default applies. The first
//! match wins and an age-category match always beats the belt rank.

use lazy_static::lazy_static;
use regex::Regex;
use tracing::{debug, warn};

use crate::dto::division::DivisionDescriptor;
use crate::error::{Result, RulesError};
use crate::models::{BeltRank, Division};

/// Used when no division is given and when nothing in it is recognized.
pub const DEFAULT_MATCH_SECONDS: u32 = 5 * 60;

/// Read access to the two text fields the resolver looks at.
pub trait DivisionText {
    fn age_category_text(&self) -> Option<&str>;
    fn belt_rank_text(&self) -> Option<&str>;

    fn name_text(&self) -> Option<&str> {
        None
    }
}

impl DivisionText for DivisionDescriptor {
    fn age_category_text(&self) -> Option<&str> {
        self.age_category.as_deref()
    }

    fn belt_rank_text(&self) -> Option<&str> {
        self.belt_rank.as_deref()
    }

    fn name_text(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

impl DivisionText for Division {
    fn age_category_text(&self) -> Option<&str> {
        Some(self.age_category.as_str())
    }

    fn belt_rank_text(&self) -> Option<&str> {
        Some(self.belt_rank.as_str())
    }

    fn name_text(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum YouthFamily {
    MightyMite,
    PeeWee,
    Junior,
    Teen,
}

impl YouthFamily {
    pub fn label(&self) -> &'static str {
        match self {
            Self::MightyMite => "Mighty Mite",
            Self::PeeWee => "Pee Wee",
            Self::Junior => "Junior",
            Self::Teen => "Teen",
        }
    }
}

/// Which rule produced a duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DurationSource {
    NoDivision,
    AgeCategory(YouthFamily),
    YouthKeyword,
    BeltRank(BeltRank),
    Fallback,
}

impl DurationSource {
    pub fn describe(&self) -> String {
        match self {
            Self::NoDivision => "default (no division)".to_string(),
            Self::AgeCategory(family) => format!("age category: {}", family.label()),
            Self::YouthKeyword => "youth keyword".to_string(),
            Self::BeltRank(belt) => format!("belt rank: {}", belt.label()),
            Self::Fallback => "default (unrecognized division)".to_string(),
        }
    }

    pub fn is_default(&self) -> bool {
        matches!(self, Self::NoDivision | Self::Fallback)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchDuration {
    pub seconds: u32,
    pub source: DurationSource,
}

#[derive(Debug, Clone)]
struct YouthRule {
    family: YouthFamily,
    pattern: Regex,
    seconds: u32,
}

#[derive(Debug, Clone)]
struct BeltRule {
    belt: BeltRank,
    keywords: Vec<String>,
    seconds: u32,
}

/// Ordered rule set used to resolve match durations.
#[derive(Debug, Clone)]
pub struct MatchTimeTable {
    youth_rules: Vec<YouthRule>,
    youth_keywords: Option<(Regex, u32)>,
    belt_rules: Vec<BeltRule>,
    default_seconds: u32,
}

lazy_static! {
    static ref STANDARD_TABLE: MatchTimeTable = MatchTimeTable::standard_rules()
        .expect("standard match time rules are valid");
}

impl MatchTimeTable {
    /// Empty table; every lookup resolves to `default_seconds`.
    pub fn new(default_seconds: u32) -> Result<Self> {
        ensure_positive(default_seconds)?;
        Ok(Self {
            youth_rules: Vec::new(),
            youth_keywords: None,
            belt_rules: Vec::new(),
            default_seconds,
        })
    }

    /// The governing body's table.
    pub fn standard() -> &'static MatchTimeTable {
        &STANDARD_TABLE
    }

    fn standard_rules() -> Result<Self> {
        Self::new(DEFAULT_MATCH_SECONDS)?
            .with_youth_rule(
                YouthFamily::MightyMite,
                r"mighty\s*mite|tiny\s*tot|\bmm\d?\b|\b[4-6]\s*-\s*[5-7]\b|\b[4-7]\s*years?\b",
                2 * 60,
            )?
            .with_youth_rule(
                YouthFamily::PeeWee,
                r"pee\s*wee|wee\s*one|\bpw\d?\b|\b8\s*-\s*9\b|\b[89]\s*years?\b",
                3 * 60,
            )?
            .with_youth_rule(
                YouthFamily::Junior,
                r"junior|little\s*one|\bjr\d?\b|\b10\s*-\s*11\b|\b1[01]\s*years?\b",
                3 * 60,
            )?
            .with_youth_rule(
                YouthFamily::Teen,
                r"teen|\bt\d?\b|\b1[2-5]\s*-\s*1[3-5]\b|\b1[2-5]\s*years?\b",
                4 * 60,
            )?
            .with_youth_keywords(
                r"\byouth\b|\bkids?\b|\bchildren\b|\bjuvenile\b|\bcrian[cç]as?\b",
                3 * 60,
            )?
            .with_belt_rule(BeltRank::White, &["WHITE", "BRANCA"], 5 * 60)?
            .with_belt_rule(BeltRank::Blue, &["BLUE", "AZUL"], 6 * 60)?
            .with_belt_rule(BeltRank::Purple, &["PURPLE", "ROXA"], 7 * 60)?
            .with_belt_rule(BeltRank::Brown, &["BROWN", "MARROM"], 8 * 60)?
            .with_belt_rule(BeltRank::Black, &["BLACK", "PRETA"], 10 * 60)
    }

    /// Appends a youth rule. Patterns are matched case-insensitively against the age
    /// category with underscores read as spaces.
    pub fn with_youth_rule(mut self, family: YouthFamily, pattern: &str, seconds: u32) -> Result<Self> {
        ensure_positive(seconds)?;
        self.youth_rules.push(YouthRule {
            family,
            pattern: compile(pattern)?,
            seconds,
        });
        Ok(self)
    }

    /// Generic youth words, checked after every youth rule.
    pub fn with_youth_keywords(mut self, pattern: &str, seconds: u32) -> Result<Self> {
        ensure_positive(seconds)?;
        self.youth_keywords = Some((compile(pattern)?, seconds));
        Ok(self)
    }

    /// Appends a belt rule matched by case-insensitive substring on any keyword.
    pub fn with_belt_rule(mut self, belt: BeltRank, keywords: &[&str], seconds: u32) -> Result<Self> {
        ensure_positive(seconds)?;
        self.belt_rules.push(BeltRule {
            belt,
            keywords: keywords.iter().map(|k| k.to_uppercase()).collect(),
            seconds,
        });
        Ok(self)
    }

    pub fn default_seconds(&self) -> u32 {
        self.default_seconds
    }

    /// Seconds for a belt rank by itself, ignoring age.
    pub fn belt_seconds(&self, belt: BeltRank) -> Option<u32> {
        self.belt_rules
            .iter()
            .find(|rule| rule.belt == belt)
            .map(|rule| rule.seconds)
    }

    pub fn resolve<T: DivisionText + ?Sized>(&self, division: Option<&T>) -> MatchDuration {
        let Some(division) = division else {
            debug!("No division provided, using {}s default", self.default_seconds);
            return MatchDuration {
                seconds: self.default_seconds,
                source: DurationSource::NoDivision,
            };
        };

        let age_text = division
            .age_category_text()
            .unwrap_or_default()
            .replace('_', " ")
            .to_lowercase();
        let belt_text = division.belt_rank_text().unwrap_or_default().to_uppercase();

        if let Some(rule) = self
            .youth_rules
            .iter()
            .find(|rule| rule.pattern.is_match(&age_text))
        {
            debug!(age_category = %age_text, family = ?rule.family, seconds = rule.seconds, "Matched youth age category");
            return MatchDuration {
                seconds: rule.seconds,
                source: DurationSource::AgeCategory(rule.family),
            };
        }

        if let Some((pattern, seconds)) = &self.youth_keywords
            && pattern.is_match(&age_text)
        {
            debug!(age_category = %age_text, seconds, "Matched youth keyword");
            return MatchDuration {
                seconds: *seconds,
                source: DurationSource::YouthKeyword,
            };
        }

        if let Some(rule) = self.belt_rules.iter().find(|rule| {
            rule.keywords
                .iter()
                .any(|keyword| belt_text.contains(keyword.as_str()))
        }) {
            debug!(belt_rank = %belt_text, seconds = rule.seconds, "Matched belt rank");
            return MatchDuration {
                seconds: rule.seconds,
                source: DurationSource::BeltRank(rule.belt),
            };
        }

        warn!(
            division = division.name_text().unwrap_or("<unnamed>"),
            age_category = %age_text,
            belt_rank = %belt_text,
            "Division matched no match time rule, using {}s default",
            self.default_seconds
        );
        MatchDuration {
            seconds: self.default_seconds,
            source: DurationSource::Fallback,
        }
    }
}

/// Seconds allotted to a match in `division` under the standard table.
pub fn resolve_match_duration<T: DivisionText + ?Sized>(division: Option<&T>) -> u32 {
    MatchTimeTable::standard().resolve(division).seconds
}

fn compile(pattern: &str) -> Result<Regex> {
    Regex::new(&format!("(?i){pattern}")).map_err(|e| RulesError::InvalidMatchTime(format!(
        "invalid pattern '{pattern}': {e}"
    )))
}

fn ensure_positive(seconds: u32) -> Result<()> {
    if seconds == 0 {
        return Err(RulesError::InvalidMatchTime(
            "match duration must be greater than zero".to_string(),
        ));
    }
    Ok(())
}
