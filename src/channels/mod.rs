//! This module builds channel matrices: it enumerates the inputs of a
//! mechanism, observes each of them, and collects the observations into
//! a stochastic matrix.
pub mod instances;
pub mod observations;
pub mod tallies;
pub mod kernel;
pub mod assembler;

pub use self::instances::{InstanceSpace, decode, encode};
pub use self::observations::{Winner, FullTally, CountOf, TieBreak,
                             winner, tally, count_of};
pub use self::tallies::{Tally, enumerate_tallies, count_tallies, binomial};
pub use self::kernel::{GeometricKernel, kernel_weight};
pub use self::assembler::{ChannelLimits, MAX_ROWS, build_channel, channel_row,
                          build_noisy_channel, noisy_channel_row};

use crate::Symbol;
use crate::errors::Result;


/// An observation an adversary makes of an instance.
///
/// Its outputs are numbered `0..columns()`, which are the columns of the
/// channel matrix.
pub trait Observation {
    /// Number of distinct outputs.
    fn columns(&self) -> usize;
    /// Returns the output observed for `instance`.
    fn column(&self, instance: &[Symbol]) -> Result<usize>;
    /// Names of the outputs, in column order.
    fn labels(&self) -> Vec<String>;
    /// Fails unless every instance of `space` is a valid input, and every
    /// output is reachable from some instance.
    fn check_space(&self, space: &InstanceSpace) -> Result<()>;
}
