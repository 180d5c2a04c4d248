//! Truncated geometric noise for counting queries.
//!
//! A count `i` in `0..=m` is released as `j` in `0..=m` with probability
//!
//! ```text
//!     c(j) * decay^|i - j|
//! ```
//!
//! where `c(j) = 1/(1+decay)` at the boundaries (`j = 0` or `j = m`) and
//! `c(j) = (1-decay)/(1+decay)` elsewhere. The boundary weights collect the
//! tails of the two-sided geometric distribution, so each row sums to 1
//! without any renormalization.
use ndarray::*;
use std::convert::TryFrom;

use crate::errors::{ChannelError, Result};

/// Geometric noise with a fixed decay in `(0, 1)`.
///
/// Lower decays add less noise.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeometricKernel {
    decay: f64,
}

impl GeometricKernel {
    pub fn new(decay: f64) -> Result<GeometricKernel> {
        if !(decay > 0. && decay < 1.) {
            return Err(ChannelError::InvalidDecay(decay));
        }
        Ok(GeometricKernel { decay })
    }

    pub fn decay(&self) -> f64 {
        self.decay
    }

    /// Probability of releasing `reported` when the true count is `actual`,
    /// for counts in `0..=max_count`.
    pub fn weight(&self, actual: usize, reported: usize, max_count: usize)
            -> Result<f64> {
        for &count in &[actual, reported] {
            if count > max_count {
                return Err(ChannelError::OutOfRange { index: count,
                                                      size: max_count + 1 });
            }
        }
        Ok(self.weight_unchecked(actual, reported, max_count))
    }

    fn weight_unchecked(&self, actual: usize, reported: usize,
                        max_count: usize) -> f64 {
        let a = self.decay;
        // With a single count, both tails fall on it.
        if max_count == 0 {
            return 1.;
        }
        let c = if reported == 0 || reported == max_count {
            1. / (1. + a)
        } else {
            (1. - a) / (1. + a)
        };
        let distance = if actual > reported {
            actual - reported
        } else {
            reported - actual
        };
        // Beyond i32::MAX the weight underflows to 0 anyway.
        let distance = i32::try_from(distance).unwrap_or(i32::MAX);
        c * a.powi(distance)
    }

    /// Distribution of the released count when the true count is `actual`.
    pub fn row(&self, actual: usize, max_count: usize) -> Result<Array1<f64>> {
        if actual > max_count {
            return Err(ChannelError::OutOfRange { index: actual,
                                                  size: max_count + 1 });
        }
        Ok((0..=max_count).map(|j| self.weight_unchecked(actual, j, max_count))
                          .collect())
    }

    /// The kernel as a channel from true counts to released counts.
    pub fn matrix(&self, max_count: usize) -> Array2<f64> {
        Array::from_shape_fn((max_count + 1, max_count + 1),
                             |(i, j)| self.weight_unchecked(i, j, max_count))
    }
}

/// Weight of releasing `reported` for a true count `actual`, with counts in
/// `0..=max_count` and geometric decay `decay`.
///
/// # Examples
///
/// ```
/// use qif_channels::channels::kernel_weight;
///
/// let w = kernel_weight(0, 0, 3, 1. / 3.).unwrap();
/// assert!((w - 0.75).abs() < 1e-12);
/// ```
pub fn kernel_weight(actual: usize, reported: usize, max_count: usize,
                     decay: f64) -> Result<f64> {
    GeometricKernel::new(decay)?.weight(actual, reported, max_count)
}


#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::approx_eq;
    use ndarray::array;

    #[test]
    fn boundary_and_interior_weights() {
        let k = GeometricKernel::new(1. / 3.).unwrap();
        assert!(approx_eq!(f64, k.weight(0, 0, 3).unwrap(), 0.75, epsilon = 1e-12));
        assert!(approx_eq!(f64, k.weight(3, 3, 3).unwrap(), 0.75, epsilon = 1e-12));
        assert!(approx_eq!(f64, k.weight(1, 1, 3).unwrap(), 0.5, epsilon = 1e-12));
        assert!(approx_eq!(f64, k.weight(0, 1, 3).unwrap(), 0.5 / 3., epsilon = 1e-12));
        assert!(approx_eq!(f64, k.weight(0, 3, 3).unwrap(), 0.75 / 27., epsilon = 1e-12));
        assert!(approx_eq!(f64, k.weight(2, 0, 3).unwrap(), 0.75 / 9., epsilon = 1e-12));
    }

    #[test]
    fn kernel_is_symmetric_in_distance() {
        let k = GeometricKernel::new(0.4).unwrap();
        assert!(approx_eq!(f64, k.weight(1, 3, 5).unwrap(),
                           k.weight(3, 1, 5).unwrap(), epsilon = 1e-12));
    }

    #[test]
    fn rows_sum_to_one_without_renormalization() {
        for &decay in &[0.1, 1. / 3., 0.5, 0.9] {
            let k = GeometricKernel::new(decay).unwrap();
            for max_count in 0..6 {
                let h = k.matrix(max_count);
                for row in h.outer_iter() {
                    assert!(approx_eq!(f64, row.sum(), 1., epsilon = 1e-12));
                }
            }
        }
    }

    #[test]
    fn far_counts_weigh_nothing() {
        let k = GeometricKernel::new(0.5).unwrap();
        let far = i32::MAX as usize + 10;
        let w = k.weight(0, far, far).unwrap();
        assert!(w >= 0. && w < 1e-300);
        assert_eq!(k.weight(far, 0, far).unwrap(), w);
    }

    #[test]
    fn single_count() {
        let k = GeometricKernel::new(0.5).unwrap();
        assert_eq!(k.row(0, 0).unwrap(), array![1.]);
    }

    #[test]
    fn invalid_arguments() {
        assert_eq!(GeometricKernel::new(1.), Err(ChannelError::InvalidDecay(1.)));
        assert_eq!(GeometricKernel::new(0.), Err(ChannelError::InvalidDecay(0.)));
        assert!(GeometricKernel::new(std::f64::NAN).is_err());
        let k = GeometricKernel::new(0.5).unwrap();
        assert_eq!(k.row(4, 3),
                   Err(ChannelError::OutOfRange { index: 4, size: 4 }));
        assert!(k.weight(0, 4, 3).is_err());
    }

    #[test]
    fn matrix_matches_rows() {
        let k = GeometricKernel::new(1. / 3.).unwrap();
        let h = k.matrix(3);
        assert_eq!(h.dim(), (4, 4));
        for i in 0..4 {
            assert_eq!(h.row(i), k.row(i, 3).unwrap());
        }
    }
}
