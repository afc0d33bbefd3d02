//! Fuzzy selection of a removal target
//!
//! Candidates are ranked by normalized Levenshtein similarity and the best
//! one must clear an acceptance threshold. Integer queries short-circuit to
//! positional selection without any scoring.

use strsim::levenshtein;

/// Outcome of matching a removal query against the candidate list
#[derive(Debug, Clone, PartialEq)]
pub enum Selection {
    /// The query was an in-range index; scoring was bypassed
    Position(usize),

    /// The query was an integer outside `[0, len)`
    OutOfRange(usize),

    /// Best-scoring candidate at or above the threshold
    Similar { index: usize, score: f64 },

    /// Nothing scored at or above the threshold; `best` is None for an
    /// empty candidate list
    NoMatch { best: Option<f64> },
}

/// Normalized similarity in [0, 1]: 1.0 is identical, 0.0 shares nothing.
pub fn similarity(a: &str, b: &str) -> f64 {
    let longest = a.chars().count().max(b.chars().count());
    if longest == 0 {
        return 1.0;
    }
    1.0 - levenshtein(a, b) as f64 / longest as f64
}

/// Pick the candidate best matching `query`.
///
/// Ties resolve to the first occurrence in input order. Matching is
/// case-sensitive.
pub fn select<S: AsRef<str>>(query: &str, candidates: &[S], threshold: f64) -> Selection {
    if candidates.is_empty() {
        return Selection::NoMatch { best: None };
    }

    if let Ok(index) = query.trim().parse::<usize>() {
        if index < candidates.len() {
            return Selection::Position(index);
        }
        return Selection::OutOfRange(index);
    }

    let mut best_index = 0;
    let mut best_score = -1.0;

    for (i, candidate) in candidates.iter().enumerate() {
        let score = similarity(query, candidate.as_ref());
        if score > best_score {
            best_score = score;
            best_index = i;
        }
    }

    if best_score >= threshold {
        Selection::Similar {
            index: best_index,
            score: best_score,
        }
    } else {
        Selection::NoMatch {
            best: Some(best_score),
        }
    }
}
