//! Seams between the core computations and their callers.

pub mod repairer;
pub mod scorer;
pub mod verifier;

pub use repairer::IRepairer;
pub use scorer::ICreatorScorer;
pub use verifier::IVerifier;
