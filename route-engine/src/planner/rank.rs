//! Candidate ranking for plan results.
//!
//! Keeps every discovered candidate fully sorted so reporting can take
//! the top N without caring how many exclusions produced a result.

use std::cmp::Ordering;

use crate::domain::Candidate;

/// A pool of route candidates, kept sorted best-first.
///
/// Ranking is by total time, then total distance (see
/// [`Candidate::rank_cmp`]). Insertion is stable: among candidates with
/// identical metrics, the one pushed earlier stays first, so the seeded
/// best route outranks an alternate that merely ties it.
#[derive(Debug, Clone, Default)]
pub struct CandidatePool {
    candidates: Vec<Candidate>,
}

impl CandidatePool {
    /// Create an empty pool.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `candidate` at its rank.
    pub fn push(&mut self, candidate: Candidate) {
        let at = self
            .candidates
            .partition_point(|existing| existing.rank_cmp(&candidate) != Ordering::Greater);
        self.candidates.insert(at, candidate);
    }

    /// Returns all candidates, best first.
    pub fn as_slice(&self) -> &[Candidate] {
        &self.candidates
    }

    /// Returns the best-ranked candidate.
    pub fn best(&self) -> Option<&Candidate> {
        self.candidates.first()
    }

    /// Returns the best `n` candidates (or all of them if fewer exist).
    pub fn top(&self, n: usize) -> &[Candidate] {
        &self.candidates[..n.min(self.candidates.len())]
    }

    /// Returns an iterator over the candidates, best first.
    pub fn iter(&self) -> std::slice::Iter<'_, Candidate> {
        self.candidates.iter()
    }

    /// Returns the number of candidates.
    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    /// Returns true if the pool holds no candidates.
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }
}

impl<'a> IntoIterator for &'a CandidatePool {
    type Item = &'a Candidate;
    type IntoIter = std::slice::Iter<'a, Candidate>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
