use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Inclusive valid range for a score field.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoreRange {
    pub min: f64,
    pub max: f64,
}

impl ScoreRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Non-finite values are never in range.
    pub fn contains(&self, value: f64) -> bool {
        value.is_finite() && value >= self.min && value <= self.max
    }

    pub fn clamp(&self, value: f64) -> f64 {
        if value.is_nan() {
            return self.min;
        }
        value.clamp(self.min, self.max)
    }

    /// Position of `value` inside the range on a 0.0–1.0 scale.
    pub fn normalize(&self, value: f64) -> f64 {
        let span = self.max - self.min;
        if span <= 0.0 {
            return 0.0;
        }
        (value - self.min) / span
    }
}

/// Sub-scores of an evaluation, each on a 0–10 scale where higher is better.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SubScores {
    pub technical_feasibility: f64,
    pub tokenomics_design: f64,
    pub market_fit: f64,
    /// How well execution risk is contained (10 = negligible risk).
    pub execution_risk: f64,
}

impl SubScores {
    pub fn fields(&self) -> [(&'static str, f64); 4] {
        [
            ("sub_scores.technical_feasibility", self.technical_feasibility),
            ("sub_scores.tokenomics_design", self.tokenomics_design),
            ("sub_scores.market_fit", self.market_fit),
            ("sub_scores.execution_risk", self.execution_risk),
        ]
    }

    pub fn mean(&self) -> f64 {
        let fields = self.fields();
        fields.iter().map(|(_, v)| v).sum::<f64>() / fields.len() as f64
    }
}

/// An AI-generated evaluation of a project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct EvaluationRecord {
    pub id: String,
    /// Overall score on a 0–100 scale.
    pub overall_score: f64,
    pub sub_scores: SubScores,
    pub rationale: String,
    #[serde(default)]
    pub risks: Vec<String>,
    #[serde(default)]
    pub recommendations: Vec<String>,
}

impl EvaluationRecord {
    pub const OVERALL_RANGE: ScoreRange = ScoreRange::new(0.0, 100.0);
    pub const SUB_SCORE_RANGE: ScoreRange = ScoreRange::new(0.0, 10.0);

    /// Every numeric score with the range it must lie in.
    pub fn score_fields(&self) -> Vec<(&'static str, f64, ScoreRange)> {
        let mut fields = vec![("overall_score", self.overall_score, Self::OVERALL_RANGE)];
        fields.extend(
            self.sub_scores
                .fields()
                .into_iter()
                .map(|(name, v)| (name, v, Self::SUB_SCORE_RANGE)),
        );
        fields
    }

    /// Free-text fields in declaration order, list entries suffixed by index.
    pub fn text_fields(&self) -> Vec<(String, &str)> {
        let mut fields = vec![("rationale".to_string(), self.rationale.as_str())];
        for (i, risk) in self.risks.iter().enumerate() {
            fields.push((format!("risks[{i}]"), risk.as_str()));
        }
        for (i, rec) in self.recommendations.iter().enumerate() {
            fields.push((format!("recommendations[{i}]"), rec.as_str()));
        }
        fields
    }

    /// Sub-score mean projected onto the overall score's scale.
    pub fn implied_overall(&self) -> f64 {
        let position = Self::SUB_SCORE_RANGE.normalize(self.sub_scores.mean());
        Self::OVERALL_RANGE.min + position * (Self::OVERALL_RANGE.max - Self::OVERALL_RANGE.min)
    }
}
