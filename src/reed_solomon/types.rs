//! Types and structures for Reed-Solomon operations

use crate::error::{Result, RsError};
use crate::galois::Galois;
use crate::poly::Poly;
use rustc_hash::FxHashSet as HashSet;
use std::fmt;

/// Received word: one `(evaluation point, value)` pair per encoding position.
///
/// Evaluation points are pairwise distinct and fixed at construction; only the
/// values may be changed afterwards (by a corruptor).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Codeword<const P: u32> {
    pairs: Vec<(Galois<P>, Galois<P>)>,
}

impl<const P: u32> Codeword<P> {
    /// Build a codeword, rejecting repeated evaluation points
    pub fn new(pairs: Vec<(Galois<P>, Galois<P>)>) -> Result<Self> {
        let mut seen = HashSet::default();
        for &(point, _) in &pairs {
            if !seen.insert(point) {
                return Err(RsError::DuplicateEvaluationPoint {
                    point: point.value(),
                });
            }
        }
        Ok(Self { pairs })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn pairs(&self) -> &[(Galois<P>, Galois<P>)] {
        &self.pairs
    }

    pub fn points(&self) -> impl Iterator<Item = Galois<P>> + '_ {
        self.pairs.iter().map(|&(a, _)| a)
    }

    pub fn values(&self) -> impl Iterator<Item = Galois<P>> + '_ {
        self.pairs.iter().map(|&(_, y)| y)
    }

    pub fn value(&self, index: usize) -> Option<Galois<P>> {
        self.pairs.get(index).map(|&(_, y)| y)
    }

    /// Overwrite the received value at `index`
    pub fn set_value(&mut self, index: usize, value: Galois<P>) -> Result<()> {
        let length = self.pairs.len();
        let pair = self.pairs.get_mut(index).ok_or_else(|| {
            RsError::InvalidParameters(format!(
                "position {} is outside a length-{} codeword",
                index, length
            ))
        })?;
        pair.1 = value;
        Ok(())
    }

    /// Positions where `poly` disagrees with the received value
    pub fn mismatched_positions(&self, poly: &Poly<P>) -> Vec<usize> {
        self.pairs
            .iter()
            .enumerate()
            .filter(|(_, (a, y))| poly.evaluate(*a) != *y)
            .map(|(i, _)| i)
            .collect()
    }

    /// Number of positions where `poly` disagrees with the received value
    pub fn mismatches(&self, poly: &Poly<P>) -> usize {
        self.pairs
            .iter()
            .filter(|&&(a, y)| poly.evaluate(a) != y)
            .count()
    }
}

impl<const P: u32> fmt::Display for Codeword<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, (a, y)) in self.pairs.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "[{}, {}]", a, y)?;
        }
        write!(f, "]")
    }
}

/// The evaluation points `0, 1, ..., n - 1`
pub fn default_points<const P: u32>(n: usize) -> Result<Vec<Galois<P>>> {
    if n > P as usize {
        return Err(RsError::InvalidParameters(format!(
            "GF({}) has only {} distinct evaluation points, {} requested",
            P, P, n
        )));
    }
    Ok((0..n).map(Galois::from).collect())
}

/// Reject decoder inputs no decoder can make sense of
pub(crate) fn validate_decoder_input<const P: u32>(codeword: &Codeword<P>, k: usize) -> Result<()> {
    if k == 0 {
        return Err(RsError::InvalidParameters(
            "message length k must be at least 1".to_string(),
        ));
    }
    if codeword.is_empty() {
        return Err(RsError::InvalidParameters("codeword is empty".to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::galois::Gf257;

    fn pairs(values: &[(u32, u32)]) -> Vec<(Gf257, Gf257)> {
        values
            .iter()
            .map(|&(a, y)| (Gf257::new(a), Gf257::new(y)))
            .collect()
    }

    #[test]
    fn test_codeword_rejects_duplicate_points() {
        let err = Codeword::new(pairs(&[(0, 1), (1, 2), (0, 3)])).unwrap_err();
        assert_eq!(err, RsError::DuplicateEvaluationPoint { point: 0 });
    }

    #[test]
    fn test_set_value_only_changes_value() {
        let mut c = Codeword::new(pairs(&[(0, 1), (5, 2)])).unwrap();
        c.set_value(1, Gf257::new(9)).unwrap();
        assert_eq!(c.pairs(), &pairs(&[(0, 1), (5, 9)])[..]);
        assert!(c.set_value(2, Gf257::ONE).is_err());
    }

    #[test]
    fn test_mismatches() {
        // p(x) = 1 + x
        let p = Poly::new(vec![Gf257::ONE, Gf257::ONE]);
        let c = Codeword::new(pairs(&[(0, 1), (1, 2), (2, 7), (3, 4)])).unwrap();
        assert_eq!(c.mismatches(&p), 1);
        assert_eq!(c.mismatched_positions(&p), vec![2]);
    }

    #[test]
    fn test_default_points() {
        let points = default_points::<257>(4).unwrap();
        assert_eq!(points, vec![Gf257::new(0), Gf257::new(1), Gf257::new(2), Gf257::new(3)]);
        assert!(default_points::<257>(257).is_ok());
        assert!(default_points::<257>(258).is_err());
    }

    #[test]
    fn test_display() {
        let c = Codeword::new(pairs(&[(0, 97), (1, 195)])).unwrap();
        assert_eq!(c.to_string(), "[[0, 97], [1, 195]]");
    }
}
