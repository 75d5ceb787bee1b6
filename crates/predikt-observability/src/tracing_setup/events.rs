//! Structured log events for key operations.
//!
//! Each function emits a `tracing` event with structured fields.

/// Log the end of a verification run.
pub fn verification_completed(
    record_id: &str,
    checks_run: u32,
    checks_failed: u32,
    repairs_attempted: u32,
    duration_ms: f64,
) {
    tracing::info!(
        event = "verification_completed",
        record_id = %record_id,
        checks_run = checks_run,
        checks_failed = checks_failed,
        repairs_attempted = repairs_attempted,
        duration_ms = duration_ms,
        "verification completed"
    );
}

/// Log a fatal check failure.
pub fn fatal_verification_failure(record_id: &str, check_id: &str, detail: &str) {
    tracing::error!(
        event = "fatal_verification_failure",
        record_id = %record_id,
        check_id = %check_id,
        detail = %detail,
        "fatal verification failure"
    );
}

/// Log one repair attempt and whether the check passed afterwards.
pub fn repair_attempted(check_id: &str, attempt: u32, succeeded: bool, error: Option<&str>) {
    tracing::debug!(
        event = "repair_attempted",
        check_id = %check_id,
        attempt = attempt,
        succeeded = succeeded,
        error = ?error,
        "repair attempted"
    );
}

/// Log a claim that contradicts grounding data.
pub fn claim_contradicted(field: &str, raw: &str, claimed: f64, grounded: f64) {
    tracing::warn!(
        event = "claim_contradicted",
        field = %field,
        raw = %raw,
        claimed = claimed,
        grounded = grounded,
        "claim contradicted by grounding"
    );
}

/// Log a computed creator score.
pub fn creator_scored(creator_id: &str, sample_size: usize, score: f64, insufficient: bool) {
    tracing::debug!(
        event = "creator_scored",
        creator_id = %creator_id,
        sample_size = sample_size,
        score = score,
        insufficient_data = insufficient,
        "creator scored"
    );
}

/// Log a market creation.
pub fn market_created(market_id: &str, pair: &str) {
    tracing::info!(
        event = "market_created",
        market_id = %market_id,
        pair = %pair,
        "market created"
    );
}

/// Log a prediction placed on a market.
pub fn prediction_placed(market_id: &str, user: &str, side: &str, amount: u64) {
    tracing::info!(
        event = "prediction_placed",
        market_id = %market_id,
        user = %user,
        side = %side,
        amount = amount,
        "prediction placed"
    );
}

/// Log a market resolution.
pub fn market_resolved(market_id: &str, outcome: &str) {
    tracing::info!(
        event = "market_resolved",
        market_id = %market_id,
        outcome = %outcome,
        "market resolved"
    );
}
