use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use super::grounding::fields;

/// Semantic kind of a numerical claim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum ClaimKind {
    Currency,
    Percentage,
    Count,
}

impl fmt::Display for ClaimKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Currency => "currency",
            Self::Percentage => "percentage",
            Self::Count => "count",
        };
        f.write_str(s)
    }
}

/// Magnitude word attached to a number ("billion", "k", ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum Scale {
    Unit,
    Thousand,
    Million,
    Billion,
    Trillion,
}

impl Scale {
    pub fn multiplier(self) -> f64 {
        match self {
            Self::Unit => 1.0,
            Self::Thousand => 1e3,
            Self::Million => 1e6,
            Self::Billion => 1e9,
            Self::Trillion => 1e12,
        }
    }

    /// Parse a scale suffix. Unknown or empty suffixes are `Unit`.
    pub fn from_suffix(suffix: &str) -> Self {
        match suffix.trim().to_ascii_lowercase().as_str() {
            "k" | "thousand" => Self::Thousand,
            "m" | "mn" | "mm" | "million" | "millions" => Self::Million,
            "b" | "bn" | "billion" | "billions" => Self::Billion,
            "t" | "tn" | "trillion" | "trillions" => Self::Trillion,
            _ => Self::Unit,
        }
    }
}

/// A quantitative assertion extracted from free text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct NumericalClaim {
    /// Field the claim was found in.
    pub field: String,
    /// Matched text as written.
    pub raw: String,
    /// Magnitude normalized to the base unit (raw USD, percentage points, units).
    pub value: f64,
    pub kind: ClaimKind,
    pub scale: Scale,
    /// Lowercased text immediately preceding the match.
    pub context: String,
    /// Byte offset of the match within its field.
    pub offset: usize,
}

/// Maps a claim to the grounding field it should be checked against.
///
/// A rule applies when the claim kind matches and either `context_keywords`
/// is empty or one of them occurs in the claim's context.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct GroundingRule {
    pub kind: ClaimKind,
    #[serde(default)]
    pub context_keywords: Vec<String>,
    pub field: String,
}

impl GroundingRule {
    pub fn new(kind: ClaimKind, keywords: &[&str], field: &str) -> Self {
        Self {
            kind,
            context_keywords: keywords.iter().map(|k| k.to_string()).collect(),
            field: field.to_string(),
        }
    }

    pub fn matches(&self, claim: &NumericalClaim) -> bool {
        if claim.kind != self.kind {
            return false;
        }
        self.context_keywords.is_empty()
            || self
                .context_keywords
                .iter()
                .any(|k| claim.context.contains(&k.to_lowercase()))
    }
}

/// Default claim-to-grounding mapping. Order matters: first match wins.
pub fn default_grounding_rules() -> Vec<GroundingRule> {
    vec![
        GroundingRule::new(
            ClaimKind::Currency,
            &["market cap", "valuation"],
            fields::MARKET_CAP_USD,
        ),
        GroundingRule::new(
            ClaimKind::Currency,
            &["tvl", "total value locked"],
            fields::TVL_USD,
        ),
        GroundingRule::new(ClaimKind::Currency, &[], fields::MARKET_SIZE_USD),
        GroundingRule::new(
            ClaimKind::Percentage,
            &["supply", "allocat"],
            fields::TOKEN_ALLOCATION_PCT,
        ),
        GroundingRule::new(ClaimKind::Percentage, &[], fields::GROWTH_RATE_PCT),
        GroundingRule::new(
            ClaimKind::Count,
            &["user", "wallet", "holder"],
            fields::ACTIVE_USERS,
        ),
    ]
}

/// Outcome of checking one claim against the grounding snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum ClaimVerdict {
    /// Within tolerance of the grounding value.
    Supported,
    /// Diverges from the grounding value beyond tolerance.
    Contradicted,
    /// No grounding value for the mapped field.
    Unverifiable,
}

/// Per-claim detail of a grounding check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ClaimCheck {
    pub claim: NumericalClaim,
    pub grounding_field: Option<String>,
    pub grounding_value: Option<f64>,
    pub relative_difference: Option<f64>,
    pub verdict: ClaimVerdict,
}

/// Aggregate result of checking a set of claims against grounding.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct GroundingReport {
    pub total: usize,
    pub supported: usize,
    pub contradicted: usize,
    pub unverifiable: usize,
    pub details: Vec<ClaimCheck>,
}

impl GroundingReport {
    pub fn contradictions(&self) -> impl Iterator<Item = &ClaimCheck> {
        self.details
            .iter()
            .filter(|d| d.verdict == ClaimVerdict::Contradicted)
    }

    pub fn has_contradictions(&self) -> bool {
        self.contradicted > 0
    }
}
