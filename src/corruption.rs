//! Error injection for codewords
//!
//! A [`Corruptor`] replaces the values at some positions of a codeword and
//! reports which positions it touched. Evaluation points are never changed.

use crate::error::{Result, RsError};
use crate::galois::Galois;
use crate::reed_solomon::Codeword;
use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Something that can introduce symbol errors into a codeword
pub trait Corruptor<const P: u32> {
    /// Corrupt exactly `count` distinct positions and return them in ascending order
    fn corrupt(&mut self, codeword: &mut Codeword<P>, count: usize) -> Result<Vec<usize>>;
}

fn check_count(count: usize, length: usize) -> Result<()> {
    if count > length {
        return Err(RsError::CorruptionOutOfRange {
            requested: count,
            length,
        });
    }
    Ok(())
}

/// Uniformly random corruption: distinct positions, each replaced by a value
/// drawn uniformly from the field elements other than the original
#[derive(Debug, Clone)]
pub struct RandomCorruptor {
    rng: StdRng,
}

impl RandomCorruptor {
    pub fn new(rng: StdRng) -> Self {
        Self { rng }
    }

    /// Reproducible corruption from a fixed seed
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// Corruption seeded from the operating system
    pub fn from_os_rng() -> Self {
        Self::new(StdRng::from_os_rng())
    }
}

impl<const P: u32> Corruptor<P> for RandomCorruptor {
    fn corrupt(&mut self, codeword: &mut Codeword<P>, count: usize) -> Result<Vec<usize>> {
        check_count(count, codeword.len())?;

        let mut positions =
            rand::seq::index::sample(&mut self.rng, codeword.len(), count).into_vec();
        positions.sort_unstable();

        for &position in &positions {
            let original = codeword.value(position).ok_or(RsError::CorruptionOutOfRange {
                requested: position + 1,
                length: codeword.len(),
            })?;
            // Adding a nonzero offset always changes the symbol
            let offset = Galois::new(self.rng.random_range(1..P));
            codeword.set_value(position, original + offset)?;
        }

        debug!("Corrupted positions {:?}", positions);
        Ok(positions)
    }
}

/// Deterministic corruption: add a fixed nonzero error at fixed positions
///
/// `corrupt(.., count)` applies the first `count` entries.
#[derive(Debug, Clone)]
pub struct FixedCorruptor<const P: u32> {
    corruptions: Vec<(usize, Galois<P>)>,
}

impl<const P: u32> FixedCorruptor<P> {
    /// Explicit `(position, error)` list; zero errors are rejected
    pub fn new(corruptions: Vec<(usize, Galois<P>)>) -> Result<Self> {
        if let Some(&(position, _)) = corruptions.iter().find(|(_, error)| error.is_zero()) {
            return Err(RsError::InvalidParameters(format!(
                "corruption at position {} has a zero error value",
                position
            )));
        }
        Ok(Self { corruptions })
    }

    /// Add one to the value at each listed position
    pub fn at_positions(positions: &[usize]) -> Self {
        Self {
            corruptions: positions.iter().map(|&p| (p, Galois::ONE)).collect(),
        }
    }
}

impl<const P: u32> Corruptor<P> for FixedCorruptor<P> {
    fn corrupt(&mut self, codeword: &mut Codeword<P>, count: usize) -> Result<Vec<usize>> {
        check_count(count, codeword.len())?;
        if count > self.corruptions.len() {
            return Err(RsError::CorruptionOutOfRange {
                requested: count,
                length: self.corruptions.len(),
            });
        }

        let corruptions = &self.corruptions[..count];
        let mut positions: Vec<usize> =
            corruptions.iter().map(|&(position, _)| position).collect();
        positions.sort_unstable();
        positions.dedup();
        if positions.len() != count {
            return Err(RsError::InvalidParameters(
                "fixed corruption positions must be distinct".to_string(),
            ));
        }
        if let Some(&last) = positions.last() {
            check_count(last + 1, codeword.len())?;
        }

        // Nothing is written until every position is known to be valid
        for &(position, error) in corruptions {
            let original = codeword.value(position).ok_or(RsError::CorruptionOutOfRange {
                requested: position + 1,
                length: codeword.len(),
            })?;
            codeword.set_value(position, original + error)?;
        }
        Ok(positions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::galois::Gf257;
    use crate::reed_solomon::Encoder;

    fn codeword(n: usize) -> Codeword<257> {
        let message = [Gf257::new(97), Gf257::new(98), Gf257::new(99)];
        Encoder::with_length(n).unwrap().encode(&message).unwrap()
    }

    #[test]
    fn test_random_corruption_changes_exactly_count_positions() {
        let clean = codeword(30);
        let mut received = clean.clone();
        let positions = RandomCorruptor::seeded(7).corrupt(&mut received, 12).unwrap();

        assert_eq!(positions.len(), 12);
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
        for i in 0..30 {
            let changed = clean.value(i) != received.value(i);
            assert_eq!(changed, positions.contains(&i), "position {}", i);
        }
        assert!(clean.points().eq(received.points()));
    }

    #[test]
    fn test_random_corruption_is_reproducible() {
        let mut first = codeword(20);
        let mut second = codeword(20);
        let a = RandomCorruptor::seeded(42).corrupt(&mut first, 5).unwrap();
        let b = RandomCorruptor::seeded(42).corrupt(&mut second, 5).unwrap();
        assert_eq!(a, b);
        assert_eq!(first, second);
    }

    #[test]
    fn test_corrupt_all_and_none() {
        let clean = codeword(8);
        let mut received = clean.clone();
        let positions = RandomCorruptor::seeded(1).corrupt(&mut received, 8).unwrap();
        assert_eq!(positions, (0..8).collect::<Vec<_>>());
        assert!(clean.values().zip(received.values()).all(|(a, b)| a != b));

        let mut untouched = clean.clone();
        assert!(RandomCorruptor::seeded(1)
            .corrupt(&mut untouched, 0)
            .unwrap()
            .is_empty());
        assert_eq!(untouched, clean);
    }

    #[test]
    fn test_too_many_corruptions() {
        let mut received = codeword(4);
        assert_eq!(
            RandomCorruptor::seeded(0).corrupt(&mut received, 5),
            Err(RsError::CorruptionOutOfRange {
                requested: 5,
                length: 4
            })
        );
    }

    #[test]
    fn test_fixed_corruption() {
        let clean = codeword(6);
        let mut received = clean.clone();
        let mut corruptor =
            FixedCorruptor::new(vec![(4, Gf257::new(3)), (1, Gf257::new(250)), (2, Gf257::ONE)])
                .unwrap();
        let positions = corruptor.corrupt(&mut received, 2).unwrap();
        assert_eq!(positions, vec![1, 4]);
        assert_eq!(
            received.value(4).unwrap(),
            clean.value(4).unwrap() + Gf257::new(3)
        );
        assert_eq!(received.value(2), clean.value(2));
    }

    #[test]
    fn test_fixed_corruption_failure_leaves_codeword_untouched() {
        let clean = codeword(6);

        let mut received = clean.clone();
        let mut repeated =
            FixedCorruptor::new(vec![(1, Gf257::new(5)), (1, Gf257::new(7))]).unwrap();
        assert!(matches!(
            repeated.corrupt(&mut received, 2),
            Err(RsError::InvalidParameters(_))
        ));
        assert_eq!(received, clean);

        let mut outside = FixedCorruptor::<257>::at_positions(&[0, 9]);
        assert_eq!(
            outside.corrupt(&mut received, 2),
            Err(RsError::CorruptionOutOfRange {
                requested: 10,
                length: 6
            })
        );
        assert_eq!(received, clean);
    }

    #[test]
    fn test_fixed_corruption_rejects_zero_error() {
        assert!(FixedCorruptor::new(vec![(0, Gf257::ZERO)]).is_err());
    }
}
