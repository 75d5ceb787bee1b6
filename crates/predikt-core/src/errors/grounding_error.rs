/// Errors raised while obtaining grounding snapshots.
#[derive(Debug, Clone, thiserror::Error)]
pub enum GroundingError {
    #[error("grounding fetch failed for {key}: {reason}")]
    FetchFailed { key: String, reason: String },
}
