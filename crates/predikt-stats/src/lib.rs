//! # predikt-stats
//!
//! Robust statistics over historical return samples.
//!
//! - **Winsorization**: clamp each tail to the nearest retained value,
//!   preserving sample size and order. Fails open on empty input or an
//!   out-of-range alpha.
//! - **Per-pair winsorization**: every trading pair is trimmed using only
//!   its own distribution.
//! - **Creator scoring**: winsorized mean / std, shrunk toward zero for
//!   small samples, ranked in parallel.

pub mod creator_score;
pub mod winsorize;

pub use creator_score::{score_creator, score_creators, CreatorScorer};
pub use winsorize::{
    get_alpha_for_sample_size, winsorize, winsorize_by_pair, winsorized_mean, winsorized_std,
};
