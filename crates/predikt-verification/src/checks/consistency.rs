//! Internal consistency of an evaluation: the overall score against its
//! sub-scores, and the overall score against the tone of the text.

use std::sync::LazyLock;

use predikt_core::models::{CheckOutcome, EvaluationRecord};
use regex::Regex;

use super::CheckContext;

pub const SCORE_ID: &str = "score_consistency";
pub const TONE_ID: &str = "tone_consistency";

static POSITIVE_TONE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(strong buy|(?:highly|strongly) recommend(?:ed)?|excellent|outstanding|exceptional|compelling|promising|well[- ]positioned)\b",
    )
    .unwrap()
});

static NEGATIVE_TONE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(avoid|do not invest|not recommended|reject|pass on|red flags?|unsustainable|fraud(?:ulent)?|scam|critical flaws?|abandon)\b",
    )
    .unwrap()
});

/// The overall score may not stray further than the configured gap from the
/// score implied by the sub-scores.
pub fn check_scores(record: &EvaluationRecord, ctx: &CheckContext<'_>) -> CheckOutcome {
    let implied = record.implied_overall();
    let gap = (record.overall_score - implied).abs();
    if gap <= ctx.config.consistency_max_gap {
        return CheckOutcome::pass();
    }
    CheckOutcome::fail(format!(
        "overall_score {:.1} differs from sub-score implied {:.1} by {:.1} (max {:.1})",
        record.overall_score, implied, gap, ctx.config.consistency_max_gap
    ))
}

/// High scores must not read as a rejection; low scores must not read as an
/// endorsement.
pub fn check_tone(record: &EvaluationRecord, ctx: &CheckContext<'_>) -> CheckOutcome {
    let score = record.overall_score;
    let texts = std::iter::once(record.rationale.as_str())
        .chain(record.recommendations.iter().map(String::as_str));

    if score >= ctx.config.tone_high_score {
        if let Some(phrase) = first_match(&NEGATIVE_TONE_RE, texts) {
            return CheckOutcome::fail(format!(
                "overall_score {score:.1} is high but the text says \"{phrase}\""
            ));
        }
    } else if score <= ctx.config.tone_low_score {
        if let Some(phrase) = first_match(&POSITIVE_TONE_RE, texts) {
            return CheckOutcome::fail(format!(
                "overall_score {score:.1} is low but the text says \"{phrase}\""
            ));
        }
    }
    CheckOutcome::pass()
}

fn first_match<'t>(re: &Regex, mut texts: impl Iterator<Item = &'t str>) -> Option<String> {
    texts.find_map(|t| re.find(t).map(|m| m.as_str().to_lowercase()))
}
