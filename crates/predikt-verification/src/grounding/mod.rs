//! Claim-to-grounding contradiction checks.

mod cache;

pub use cache::GroundingCache;

use predikt_core::config::defaults::DEFAULT_CONTRADICTION_TOLERANCE;
use predikt_core::config::VerificationConfig;
use predikt_core::models::{
    default_grounding_rules, ClaimCheck, ClaimVerdict, GroundingReport, GroundingRule,
    GroundingSnapshot, NumericalClaim,
};
use predikt_observability::tracing_setup::events;

/// Mapping table plus contradiction tolerance.
#[derive(Debug, Clone, PartialEq)]
pub struct GroundingPolicy {
    /// First matching rule decides the grounding field.
    pub rules: Vec<GroundingRule>,
    /// Maximum relative difference still counted as agreement.
    pub tolerance: f64,
}

impl GroundingPolicy {
    pub fn new(rules: Vec<GroundingRule>, tolerance: f64) -> Self {
        Self { rules, tolerance }
    }

    pub fn from_config(config: &VerificationConfig) -> Self {
        Self::new(
            config.grounding_rules.clone(),
            config.contradiction_tolerance,
        )
    }

    /// Grounding field a claim maps to, if any rule applies.
    pub fn field_for(&self, claim: &NumericalClaim) -> Option<&str> {
        self.rules
            .iter()
            .find(|r| r.matches(claim))
            .map(|r| r.field.as_str())
    }
}

impl Default for GroundingPolicy {
    fn default() -> Self {
        Self::new(default_grounding_rules(), DEFAULT_CONTRADICTION_TOLERANCE)
    }
}

/// `|claimed - grounded| / |grounded|`; a zero grounding value only agrees
/// with a zero claim.
pub fn relative_difference(claimed: f64, grounded: f64) -> f64 {
    if grounded == 0.0 {
        return if claimed == 0.0 { 0.0 } else { f64::INFINITY };
    }
    (claimed - grounded).abs() / grounded.abs()
}

/// Check every claim against the snapshot.
///
/// A claim whose mapped field is missing from the snapshot (or that maps to
/// no field) is unverifiable, never contradicted.
pub fn verify_claims_against_grounding<I>(
    claims: I,
    grounding: &GroundingSnapshot,
    policy: &GroundingPolicy,
) -> GroundingReport
where
    I: IntoIterator<Item = NumericalClaim>,
{
    let mut report = GroundingReport::default();

    for claim in claims {
        let field = policy.field_for(&claim).map(str::to_string);
        let grounding_value = field.as_deref().and_then(|f| grounding.get(f));

        let (verdict, relative) = match grounding_value {
            None => (ClaimVerdict::Unverifiable, None),
            Some(g) => {
                let rel = relative_difference(claim.value, g);
                if rel > policy.tolerance {
                    (ClaimVerdict::Contradicted, Some(rel))
                } else {
                    (ClaimVerdict::Supported, Some(rel))
                }
            }
        };

        report.total += 1;
        match verdict {
            ClaimVerdict::Supported => report.supported += 1,
            ClaimVerdict::Contradicted => {
                report.contradicted += 1;
                if let Some(g) = grounding_value {
                    events::claim_contradicted(&claim.field, &claim.raw, claim.value, g);
                }
            }
            ClaimVerdict::Unverifiable => report.unverifiable += 1,
        }

        report.details.push(ClaimCheck {
            claim,
            grounding_field: field,
            grounding_value,
            relative_difference: relative,
            verdict,
        });
    }

    report
}
