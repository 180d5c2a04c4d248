//! Maps integer indexes to instances (and back) by mixed-radix
//! decomposition.
//!
//! The instance of index `i` is the big-endian base-`B` representation of
//! `i` on `N` digits, where `B` is the alphabet size and `N` the instance
//! length: position 0 holds the most significant digit.
use std::convert::TryFrom;

use crate::Symbol;
use crate::errors::{ChannelError, Result};

/// All the sequences of `length` symbols over an alphabet of
/// `alphabet_size` symbols.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InstanceSpace {
    length: usize,
    alphabet_size: usize,
    size: usize,
}

impl InstanceSpace {
    /// Creates the space of instances of `length` symbols over an
    /// alphabet of `alphabet_size` symbols.
    ///
    /// Fails if the alphabet is empty, or with `SpaceOverflow` if the number
    /// of instances does not fit in a `usize`.
    pub fn new(length: usize, alphabet_size: usize) -> Result<InstanceSpace> {
        if alphabet_size == 0 {
            return Err(ChannelError::InvalidArity(
                "the alphabet must contain at least one symbol".into()));
        }
        let size = u32::try_from(length).ok()
            .and_then(|l| alphabet_size.checked_pow(l))
            .ok_or(ChannelError::SpaceOverflow { length, alphabet_size })?;

        Ok(InstanceSpace { length, alphabet_size, size })
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn alphabet_size(&self) -> usize {
        self.alphabet_size
    }

    /// Number of instances, `alphabet_size^length`.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the instance of index `index`.
    pub fn decode(&self, index: usize) -> Result<Vec<Symbol>> {
        if index >= self.size {
            return Err(ChannelError::OutOfRange { index, size: self.size });
        }
        Ok(self.decode_unchecked(index))
    }

    /// Returns the index of `instance`; inverse of `decode()`.
    pub fn encode(&self, instance: &[Symbol]) -> Result<usize> {
        if instance.len() != self.length {
            return Err(ChannelError::InvalidArity(
                format!("instance has length {}, expected {}",
                        instance.len(), self.length)));
        }

        let mut index = 0;
        for &symbol in instance {
            if symbol >= self.alphabet_size {
                return Err(ChannelError::SymbolOutOfRange {
                    symbol,
                    alphabet_size: self.alphabet_size,
                });
            }
            // Cannot overflow: the result is < size.
            index = index * self.alphabet_size + symbol;
        }
        Ok(index)
    }

    /// Iterates over all the instances, in index order.
    pub fn instances(&self) -> impl Iterator<Item=Vec<Symbol>> + '_ {
        (0..self.size).map(move |i| self.decode_unchecked(i))
    }

    fn decode_unchecked(&self, index: usize) -> Vec<Symbol> {
        let mut instance = vec![0; self.length];
        let mut rest = index;
        for symbol in instance.iter_mut().rev() {
            *symbol = rest % self.alphabet_size;
            rest /= self.alphabet_size;
        }
        instance
    }
}

/// Returns the instance of index `index` among the sequences of `length`
/// symbols over an alphabet of `alphabet_size` symbols.
///
/// # Examples
///
/// ```
/// use qif_channels::channels::decode;
///
/// // Base-2 digits of 5.
/// assert_eq!(decode(5, 3, 2).unwrap(), vec![1, 0, 1]);
/// assert!(decode(8, 3, 2).is_err());
/// ```
pub fn decode(index: usize, length: usize, alphabet_size: usize)
        -> Result<Vec<Symbol>> {
    InstanceSpace::new(length, alphabet_size)?.decode(index)
}

/// Returns the index of `instance` over an alphabet of `alphabet_size`
/// symbols.
pub fn encode(instance: &[Symbol], alphabet_size: usize) -> Result<usize> {
    InstanceSpace::new(instance.len(), alphabet_size)?.encode(instance)
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_big_endian_digits() {
        assert_eq!(decode(5, 3, 2).unwrap(), vec![1, 0, 1]);
        assert_eq!(decode(0, 3, 2).unwrap(), vec![0, 0, 0]);
        assert_eq!(decode(7, 3, 2).unwrap(), vec![1, 1, 1]);
        // 23 = 2*9 + 1*3 + 2.
        assert_eq!(decode(23, 3, 3).unwrap(), vec![2, 1, 2]);
        assert_eq!(decode(3, 3, 2).unwrap(), vec![0, 1, 1]);
    }

    #[test]
    fn decode_out_of_range() {
        assert_eq!(decode(8, 3, 2),
                   Err(ChannelError::OutOfRange { index: 8, size: 8 }));
        assert_eq!(decode(1, 0, 4),
                   Err(ChannelError::OutOfRange { index: 1, size: 1 }));
    }

    #[test]
    fn empty_instance() {
        let space = InstanceSpace::new(0, 3).unwrap();
        assert_eq!(space.size(), 1);
        assert_eq!(space.decode(0).unwrap(), Vec::<Symbol>::new());
        assert_eq!(space.encode(&[]).unwrap(), 0);
    }

    #[test]
    fn unary_alphabet() {
        let space = InstanceSpace::new(4, 1).unwrap();
        assert_eq!(space.size(), 1);
        assert_eq!(space.decode(0).unwrap(), vec![0, 0, 0, 0]);
    }

    #[test]
    fn invalid_spaces() {
        assert!(matches!(InstanceSpace::new(3, 0),
                         Err(ChannelError::InvalidArity(_))));
        let overflow = InstanceSpace::new(200, 10).unwrap_err();
        assert_eq!(overflow, ChannelError::SpaceOverflow { length: 200,
                                                          alphabet_size: 10 });
        assert_eq!(overflow.to_string(),
                   "instance space of 10^200 instances overflows its indexes");
    }

    #[test]
    fn encode_inverts_decode() {
        for &(length, alphabet_size) in &[(1, 1), (3, 2), (2, 3), (4, 3), (3, 5)] {
            let space = InstanceSpace::new(length, alphabet_size).unwrap();
            for index in 0..space.size() {
                let instance = space.decode(index).unwrap();
                assert_eq!(instance.len(), length);
                assert!(instance.iter().all(|&s| s < alphabet_size));
                assert_eq!(space.encode(&instance).unwrap(), index);
            }
        }
    }

    #[test]
    fn encode_rejects_invalid_instances() {
        let space = InstanceSpace::new(3, 2).unwrap();
        assert_eq!(space.encode(&[0, 2, 1]),
                   Err(ChannelError::SymbolOutOfRange { symbol: 2,
                                                        alphabet_size: 2 }));
        assert!(matches!(space.encode(&[0, 1]),
                         Err(ChannelError::InvalidArity(_))));
        assert_eq!(encode(&[1, 0, 1], 2).unwrap(), 5);
    }

    #[test]
    fn instances_in_index_order() {
        let space = InstanceSpace::new(2, 3).unwrap();
        let all = space.instances().collect::<Vec<_>>();
        assert_eq!(all.len(), 9);
        for (i, instance) in all.iter().enumerate() {
            assert_eq!(*instance, space.decode(i).unwrap());
        }
    }
}
