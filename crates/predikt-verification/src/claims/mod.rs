//! Numerical claim extraction from free text.
//!
//! [`extract_numerical_claims`] returns a [`ClaimSequence`]: a finite,
//! restartable view over the input fields. Nothing is scanned until the
//! sequence is iterated, and each call to [`ClaimSequence::iter`] starts
//! over from the first field. Inputs are borrowed, never mutated.

mod patterns;

use std::iter::FusedIterator;

use predikt_core::config::defaults::DEFAULT_CLAIM_CONTEXT_CHARS;
use predikt_core::models::NumericalClaim;

/// Build a lazy claim sequence over `(field name, text)` pairs.
///
/// Claims come out in field order, then in order of appearance within each
/// field.
pub fn extract_numerical_claims<'a, I, K>(fields: I) -> ClaimSequence<'a>
where
    I: IntoIterator<Item = (K, &'a str)>,
    K: Into<String>,
{
    ClaimSequence {
        fields: fields.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        context_chars: DEFAULT_CLAIM_CONTEXT_CHARS,
    }
}

/// A restartable, lazily-scanned sequence of numerical claims.
#[derive(Debug, Clone)]
pub struct ClaimSequence<'a> {
    fields: Vec<(String, &'a str)>,
    context_chars: usize,
}

impl<'a> ClaimSequence<'a> {
    /// Characters kept on each side of a match as its context.
    pub fn with_context_chars(mut self, chars: usize) -> Self {
        self.context_chars = chars;
        self
    }

    pub fn iter(&self) -> ClaimIter<'_, 'a> {
        ClaimIter {
            fields: &self.fields,
            next_field: 0,
            pending: Vec::new().into_iter(),
            context_chars: self.context_chars,
        }
    }

    pub fn field_count(&self) -> usize {
        self.fields.len()
    }
}

impl<'s, 'a> IntoIterator for &'s ClaimSequence<'a> {
    type Item = NumericalClaim;
    type IntoIter = ClaimIter<'s, 'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over a [`ClaimSequence`]. Scans one field at a time.
#[derive(Debug)]
pub struct ClaimIter<'s, 'a> {
    fields: &'s [(String, &'a str)],
    next_field: usize,
    pending: std::vec::IntoIter<NumericalClaim>,
    context_chars: usize,
}

impl Iterator for ClaimIter<'_, '_> {
    type Item = NumericalClaim;

    fn next(&mut self) -> Option<NumericalClaim> {
        loop {
            if let Some(claim) = self.pending.next() {
                return Some(claim);
            }
            let (name, text) = self.fields.get(self.next_field)?;
            self.next_field += 1;
            self.pending = patterns::scan_field(name, text, self.context_chars).into_iter();
        }
    }
}

impl FusedIterator for ClaimIter<'_, '_> {}
