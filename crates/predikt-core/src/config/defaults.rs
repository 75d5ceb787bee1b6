// Single source of truth for all default values.

// --- Statistics ---
pub const DEFAULT_SMALL_SAMPLE_ALPHA: f64 = 0.10;
pub const DEFAULT_LARGE_SAMPLE_ALPHA: f64 = 0.05;
pub const DEFAULT_SMALL_SAMPLE_THRESHOLD: usize = 20;
pub const DEFAULT_MIN_SAMPLES: usize = 5;
pub const DEFAULT_PRIOR_WEIGHT: f64 = 10.0;

// --- Verification ---
pub const DEFAULT_MAX_REPAIRS: u32 = 3;
pub const DEFAULT_CONTRADICTION_TOLERANCE: f64 = 0.5;
pub const DEFAULT_RECHECK_AFTER_REPAIR: bool = true;
pub const DEFAULT_CONSISTENCY_MAX_GAP: f64 = 25.0;
pub const DEFAULT_TONE_HIGH_SCORE: f64 = 70.0;
pub const DEFAULT_TONE_LOW_SCORE: f64 = 30.0;
pub const DEFAULT_CLAIM_CONTEXT_CHARS: usize = 60;

// --- Grounding cache ---
pub const DEFAULT_GROUNDING_CACHE_CAPACITY: u64 = 256;
pub const DEFAULT_GROUNDING_CACHE_TTL_SECS: u64 = 900; // 15 minutes

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = true;
