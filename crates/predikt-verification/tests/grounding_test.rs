//! Tests for claim-to-grounding contradiction checks and the snapshot cache.

use std::cell::Cell;

use predikt_core::config::GroundingConfig;
use predikt_core::errors::GroundingError;
use predikt_core::models::{fields, ClaimKind, ClaimVerdict, GroundingRule, GroundingSnapshot};
use predikt_verification::{
    extract_numerical_claims, verify_claims_against_grounding, GroundingCache, GroundingPolicy,
};

#[test]
fn market_size_far_above_grounding_is_contradicted() {
    let claims = extract_numerical_claims([("rationale", "A $45 billion opportunity.")]);
    let grounding = GroundingSnapshot::new().with_value(fields::MARKET_SIZE_USD, 12e9);
    let report = verify_claims_against_grounding(&claims, &grounding, &GroundingPolicy::default());

    assert_eq!(report.total, 1);
    assert_eq!(report.contradicted, 1);
    let check = &report.details[0];
    assert_eq!(check.verdict, ClaimVerdict::Contradicted);
    assert_eq!(check.grounding_field.as_deref(), Some("market_size_usd"));
    assert!((check.relative_difference.unwrap() - 2.75).abs() < 1e-9);
}

#[test]
fn claim_within_tolerance_is_supported() {
    let claims = extract_numerical_claims([("rationale", "A $15 billion opportunity.")]);
    let grounding = GroundingSnapshot::new().with_value(fields::MARKET_SIZE_USD, 12e9);
    let report = verify_claims_against_grounding(&claims, &grounding, &GroundingPolicy::default());

    assert_eq!(report.supported, 1);
    assert!(!report.has_contradictions());
}

#[test]
fn missing_grounding_field_is_unverifiable() {
    let claims = extract_numerical_claims([("rationale", "Over 2 million users and $45 billion market.")]);
    let grounding = GroundingSnapshot::new().with_value(fields::GROWTH_RATE_PCT, 10.0);
    let report = verify_claims_against_grounding(&claims, &grounding, &GroundingPolicy::default());

    assert_eq!(report.total, 2);
    assert_eq!(report.unverifiable, 2);
    assert_eq!(report.contradicted, 0);
}

#[test]
fn context_keywords_pick_the_grounding_field() {
    let text = "Market cap sits at $900 million. Separately, TVL reached $40 million.";
    let claims = extract_numerical_claims([("rationale", text)]).with_context_chars(20);
    let grounding = GroundingSnapshot::new()
        .with_value(fields::MARKET_CAP_USD, 850e6)
        .with_value(fields::TVL_USD, 200e6);
    let report = verify_claims_against_grounding(&claims, &grounding, &GroundingPolicy::default());

    assert_eq!(report.details[0].grounding_field.as_deref(), Some("market_cap_usd"));
    assert_eq!(report.details[0].verdict, ClaimVerdict::Supported);
    assert_eq!(report.details[1].grounding_field.as_deref(), Some("tvl_usd"));
    assert_eq!(report.details[1].verdict, ClaimVerdict::Contradicted);
}

#[test]
fn tolerance_and_rules_are_configurable() {
    let policy = GroundingPolicy::new(
        vec![GroundingRule::new(ClaimKind::Percentage, &[], "apy_pct")],
        0.05,
    );
    let claims = extract_numerical_claims([("rationale", "Staking yields 11% APY.")]);
    let grounding = GroundingSnapshot::new().with_value("apy_pct", 10.0);
    let report = verify_claims_against_grounding(&claims, &grounding, &policy);

    assert_eq!(report.contradicted, 1);
}

#[test]
fn non_finite_grounding_values_are_ignored() {
    let claims = extract_numerical_claims([("rationale", "A $45 billion market.")]);
    let grounding = GroundingSnapshot::new().with_value(fields::MARKET_SIZE_USD, f64::NAN);
    let report = verify_claims_against_grounding(&claims, &grounding, &GroundingPolicy::default());

    assert_eq!(report.unverifiable, 1);
}

#[test]
fn cache_fetches_once_per_key() {
    let cache = GroundingCache::new(&GroundingConfig::default());
    let fetches = Cell::new(0);
    let fetch = || {
        fetches.set(fetches.get() + 1);
        Ok(GroundingSnapshot::new().with_value(fields::MARKET_SIZE_USD, 1e9))
    };

    let first = cache.get_or_fetch("proj-1", fetch).unwrap();
    let second = cache.get_or_fetch("proj-1", fetch).unwrap();
    assert_eq!(fetches.get(), 1);
    assert_eq!(first, second);
    assert_eq!(cache.entry_count(), 1);

    cache.invalidate("proj-1");
    assert!(cache.get("proj-1").is_none());
}

#[test]
fn cache_does_not_store_failed_fetches() {
    let cache = GroundingCache::default();
    let err = cache
        .get_or_fetch("proj-2", || {
            Err(GroundingError::FetchFailed {
                key: "proj-2".to_string(),
                reason: "indexer offline".to_string(),
            })
        })
        .unwrap_err();
    assert!(err.to_string().contains("indexer offline"));
    assert!(cache.get("proj-2").is_none());

    cache.insert("proj-2", GroundingSnapshot::new().with_source("manual"));
    assert_eq!(
        cache.get("proj-2").and_then(|s| s.source.clone()).as_deref(),
        Some("manual")
    );
}
