//! Assembles channel matrices by exhaustive enumeration of the inputs.
//!
//! Row `i` of a channel is the distribution of the observations for the
//! instance of index `i`; column `j` is the `j`-th output of the
//! observation. Deterministic observations give one-hot rows; noisy ones
//! spread each row according to a `GeometricKernel`.
//!
//! # Examples
//!
//! ```
//! #[macro_use(array)]
//! extern crate ndarray;
//! extern crate qif_channels;
//!
//! # fn main() {
//! use qif_channels::channels::*;
//!
//! let space = InstanceSpace::new(2, 2).unwrap();
//! let tally = FullTally::new(2, 2).unwrap();
//! let channel = build_channel(&space, &tally, &ChannelLimits::default())
//!                     .unwrap();
//!
//! // Columns: (2 0), (1 1), (0 2).
//! assert_eq!(channel, array![[1., 0., 0.],
//!                            [0., 1., 0.],
//!                            [0., 1., 0.],
//!                            [0., 0., 1.]]);
//! # }
//! ```
use ndarray::*;
use tracing::{debug, trace};

use crate::channels::{InstanceSpace, Observation, GeometricKernel};
use crate::errors::{ChannelError, Result};

/// Default largest number of rows of a materialized channel.
pub const MAX_ROWS: usize = 1 << 16;

/// Bounds on the channels that are built in full.
///
/// Single rows (`channel_row()`, `noisy_channel_row()`) are not bounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChannelLimits {
    pub max_rows: usize,
}

impl Default for ChannelLimits {
    fn default() -> ChannelLimits {
        ChannelLimits { max_rows: MAX_ROWS }
    }
}

impl ChannelLimits {
    fn check(&self, space: &InstanceSpace) -> Result<()> {
        if space.size() > self.max_rows {
            return Err(ChannelError::TooLarge { rows: space.size(),
                                                limit: self.max_rows });
        }
        Ok(())
    }
}

fn check_space<O: Observation>(space: &InstanceSpace, observation: &O)
        -> Result<()> {
    if space.length() == 0 {
        return Err(ChannelError::InvalidArity(
            "instances need at least one voter or row".into()));
    }
    if observation.columns() == 0 {
        return Err(ChannelError::InvalidArity(
            "the observation has no outputs".into()));
    }
    observation.check_space(space)
}

/// Returns the column observed for the instance of index `index`.
fn observed_column<O: Observation>(space: &InstanceSpace, observation: &O,
                                   index: usize) -> Result<usize> {
    let instance = space.decode(index)?;
    let column = observation.column(&instance)?;
    if column >= observation.columns() {
        return Err(ChannelError::UnknownOutcome(format!("column {}", column)));
    }
    trace!(index, ?instance, column, "observed");
    Ok(column)
}

/// Builds the deterministic channel of `observation` over all the
/// instances of `space`.
///
/// The whole matrix is built or an error is returned: a failure on any row
/// (e.g., an ambiguous tie) fails the construction.
pub fn build_channel<O: Observation>(space: &InstanceSpace, observation: &O,
                                     limits: &ChannelLimits)
        -> Result<Array2<f64>> {
    check_space(space, observation)?;
    limits.check(space)?;

    let mut channel = Array2::zeros((space.size(), observation.columns()));
    for (index, mut row) in channel.outer_iter_mut().enumerate() {
        row[observed_column(space, observation, index)?] = 1.;
    }
    debug!(rows = channel.nrows(), columns = channel.ncols(),
           "built deterministic channel");
    Ok(channel)
}

/// Row of index `index` of the deterministic channel of `observation`.
pub fn channel_row<O: Observation>(space: &InstanceSpace, observation: &O,
                                   index: usize) -> Result<Array1<f64>> {
    check_space(space, observation)?;

    let mut row = Array1::zeros(observation.columns());
    row[observed_column(space, observation, index)?] = 1.;
    Ok(row)
}

/// Builds the channel releasing `observation` through `kernel`.
///
/// The columns of `observation` are taken as the counts
/// `0..observation.columns()`, and the observed count is the kernel's true
/// count.
pub fn build_noisy_channel<O: Observation>(space: &InstanceSpace,
                                           observation: &O,
                                           kernel: &GeometricKernel,
                                           limits: &ChannelLimits)
        -> Result<Array2<f64>> {
    check_space(space, observation)?;
    limits.check(space)?;

    let max_count = observation.columns() - 1;
    let mut channel = Array2::zeros((space.size(), observation.columns()));
    for (index, mut row) in channel.outer_iter_mut().enumerate() {
        let actual = observed_column(space, observation, index)?;
        row.assign(&kernel.row(actual, max_count)?);
    }
    debug!(rows = channel.nrows(), columns = channel.ncols(),
           decay = kernel.decay(), "built noisy channel");
    Ok(channel)
}

/// Row of index `index` of the noisy channel of `observation`.
pub fn noisy_channel_row<O: Observation>(space: &InstanceSpace,
                                         observation: &O,
                                         kernel: &GeometricKernel,
                                         index: usize) -> Result<Array1<f64>> {
    check_space(space, observation)?;

    let actual = observed_column(space, observation, index)?;
    kernel.row(actual, observation.columns() - 1)
}
