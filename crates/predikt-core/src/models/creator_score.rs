use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Historical return samples of one creator, tagged by trading pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CreatorSamples {
    pub creator_id: String,
    /// `(pair, return)` in chronological order.
    pub returns: Vec<(String, f64)>,
}

impl CreatorSamples {
    pub fn new(creator_id: impl Into<String>) -> Self {
        Self {
            creator_id: creator_id.into(),
            returns: Vec::new(),
        }
    }

    pub fn push(&mut self, pair: impl Into<String>, value: f64) {
        self.returns.push((pair.into(), value));
    }

    pub fn len(&self) -> usize {
        self.returns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.returns.is_empty()
    }
}

/// De-biased performance score of a creator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CreatorScore {
    pub creator_id: String,
    pub sample_size: usize,
    /// Winsorization trim fraction applied per side.
    pub alpha: f64,
    pub mean_return: f64,
    /// Population standard deviation of the winsorized returns.
    pub std_return: f64,
    /// `mean_return / std_return`, 0 when there is no dispersion.
    pub risk_adjusted: f64,
    /// Shrinkage weight `n / (n + prior_weight)`.
    pub confidence_weight: f64,
    pub score: f64,
    pub insufficient_data: bool,
}
