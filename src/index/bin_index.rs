//! Fixed-resolution bucket index over a linear or circular key domain.
//!
//! The index is a *culling* structure: a point query returns every value whose
//! range touches the bucket the key falls into, so callers must re-verify exact
//! overlap for correctness-critical decisions.

use crate::errors::VisibilityError;
use crate::float_types::{FULL_CIRCLE, Real};

/// Upper bound on the number of buckets a single index may allocate.
pub const MAX_BIN_COUNT: usize = 1 << 24;

#[derive(Debug, Clone)]
pub struct BinIndex<T> {
    min_key: Real,
    max_key: Real,
    bin_size: Real,
    ring: bool,
    bins: Vec<Vec<T>>,
}

impl<T: Clone> BinIndex<T> {
    /// A linear index over `[min_key, max_key]`. Ranges must satisfy `from <= to`.
    pub fn linear(min_key: Real, max_key: Real, bin_size: Real) -> Result<Self, VisibilityError> {
        Self::with_domain(min_key, max_key, bin_size, false)
    }

    /// A ring index over `[0, max_key]`. A range with `from > to` wraps through `0`.
    pub fn ring(max_key: Real, bin_size: Real) -> Result<Self, VisibilityError> {
        Self::with_domain(0.0, max_key, bin_size, true)
    }

    /// A ring over the full circle with one-degree buckets.
    pub fn angular() -> Self {
        Self::from_valid_domain(0.0, FULL_CIRCLE, 1.0, true)
    }

    fn with_domain(min_key: Real, max_key: Real, bin_size: Real, ring: bool) -> Result<Self, VisibilityError> {
        if bin_size.is_nan() || bin_size <= 0.0 {
            return Err(VisibilityError::InvalidBinSize(bin_size));
        }
        if !(min_key.is_finite() && max_key.is_finite()) || max_key <= min_key {
            return Err(VisibilityError::InvalidDomain {
                min: min_key,
                max: max_key,
            });
        }
        if ((max_key - min_key) / bin_size).floor() >= MAX_BIN_COUNT as Real {
            return Err(VisibilityError::InvalidBinSize(bin_size));
        }
        Ok(Self::from_valid_domain(min_key, max_key, bin_size, ring))
    }

    fn from_valid_domain(min_key: Real, max_key: Real, bin_size: Real, ring: bool) -> Self {
        // both ends of the domain own a bucket
        let bin_count = ((max_key - min_key) / bin_size).floor() as usize + 1;
        Self {
            min_key,
            max_key,
            bin_size,
            ring,
            bins: vec![Vec::new(); bin_count],
        }
    }

    pub fn bin_count(&self) -> usize {
        self.bins.len()
    }

    pub const fn bin_size(&self) -> Real {
        self.bin_size
    }

    pub const fn is_ring(&self) -> bool {
        self.ring
    }

    /// Empties every bucket, keeping the allocation.
    pub fn clear(&mut self) {
        self.bins.iter_mut().for_each(Vec::clear);
    }

    fn bin_of(&self, name: &'static str, key: Real) -> Result<usize, VisibilityError> {
        if key.is_nan() {
            return Err(VisibilityError::NotANumber(name));
        }
        if key < self.min_key || key > self.max_key {
            return Err(VisibilityError::KeyOutOfRange {
                name,
                key,
                min: self.min_key,
                max: self.max_key,
            });
        }
        let bin = ((key - self.min_key) / self.bin_size).floor() as usize;
        Ok(bin.min(self.bins.len() - 1))
    }

    /// The bucket spans covered by `[from, to]`, split in two when a ring range wraps.
    fn spans(&self, from: Real, to: Real) -> Result<[Option<(usize, usize)>; 2], VisibilityError> {
        let first = self.bin_of("from", from)?;
        let last = self.bin_of("to", to)?;
        if from <= to {
            return Ok([Some((first, last)), None]);
        }
        if !self.ring {
            return Err(VisibilityError::InvertedRange { from, to });
        }
        if first <= last {
            // both ends share a bucket, the range wraps over every bucket
            return Ok([Some((0, self.bins.len() - 1)), None]);
        }
        Ok([Some((first, self.bins.len() - 1)), Some((0, last))])
    }

    /// Stores `value` in every bucket touched by `[from, to]`.
    pub fn add(&mut self, from: Real, to: Real, value: T) -> Result<(), VisibilityError> {
        for (first, last) in self.spans(from, to)?.into_iter().flatten() {
            for bin in &mut self.bins[first..=last] {
                bin.push(value.clone());
            }
        }
        Ok(())
    }

    /// Everything stored in the bucket `key` falls into.
    pub fn query(&self, key: Real) -> Result<&[T], VisibilityError> {
        let bin = self.bin_of("key", key)?;
        Ok(&self.bins[bin])
    }
}

impl<T: Clone + PartialEq> BinIndex<T> {
    /// Deduplicated union of every bucket touched by `[from, to]`.
    pub fn query_range(&self, from: Real, to: Real) -> Result<Vec<&T>, VisibilityError> {
        let mut found: Vec<&T> = Vec::new();
        for (first, last) in self.spans(from, to)?.into_iter().flatten() {
            for value in self.bins[first..=last].iter().flatten() {
                if !found.contains(&value) {
                    found.push(value);
                }
            }
        }
        Ok(found)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bucket_count_includes_both_ends() {
        let index: BinIndex<u8> = BinIndex::ring(10.0, 1.0).unwrap();
        assert_eq!(index.bin_count(), 11);
        let index: BinIndex<u8> = BinIndex::linear(0.0, 360.0, 0.5).unwrap();
        assert_eq!(index.bin_count(), 721);
        assert_eq!(BinIndex::<u8>::angular().bin_count(), 361);
    }

    #[test]
    fn rejects_bad_construction() {
        assert!(matches!(
            BinIndex::<u8>::linear(0.0, 10.0, 0.0),
            Err(VisibilityError::InvalidBinSize(_))
        ));
        assert!(matches!(
            BinIndex::<u8>::ring(-1.0, 1.0),
            Err(VisibilityError::InvalidDomain { .. })
        ));
    }

    #[test]
    fn rejects_unbounded_bucket_count() {
        assert!(matches!(
            BinIndex::<u8>::ring(360.0, 1e-12),
            Err(VisibilityError::InvalidBinSize(_))
        ));
        assert!(matches!(
            BinIndex::<u8>::linear(0.0, 1.0e30, 1.0),
            Err(VisibilityError::InvalidBinSize(_))
        ));
        let index: BinIndex<u8> = BinIndex::ring(360.0, 0.25).unwrap();
        assert_eq!(index.bin_count(), 1441);
    }

    #[test]
    fn wrap_within_one_bucket_stores_once() {
        let mut index = BinIndex::ring(10.0, 1.0).unwrap();
        index.add(5.7, 5.2, 'w').unwrap();
        assert_eq!(index.query(5.5).unwrap(), &['w']);
        assert_eq!(index.query(0.0).unwrap(), &['w']);
    }

    #[test]
    fn clear_keeps_buckets() {
        let mut index = BinIndex::ring(10.0, 1.0).unwrap();
        index.add(2.0, 4.0, 'a').unwrap();
        index.clear();
        assert!(index.query(3.0).unwrap().is_empty());
        assert_eq!(index.bin_count(), 11);
    }
}
