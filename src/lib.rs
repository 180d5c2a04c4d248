//! qif-channels builds the channel matrices of small discrete mechanisms,
//! as used in quantitative information flow: voting protocols (announce
//! the winner, announce the full tally) and counting queries over a
//! database (exact count, or count released through a geometric noise
//! mechanism).
//!
//! A channel is a stochastic matrix `C` where `C[x][y]` is the probability
//! of observing output `y` when the secret input is `x`. Inputs are all the
//! sequences of `N` symbols (voters, database rows) drawn from an alphabet
//! of `B` symbols (candidates, categorical values); they are never stored,
//! but generated on demand from their index in `[0, B^N)`.
//!
//! # Getting started
//!
//! ```
//! use qif_channels::channels::*;
//!
//! # fn main() -> qif_channels::errors::Result<()> {
//! let space = InstanceSpace::new(3, 2)?;
//! let winner = Winner::new(2, TieBreak::LowestIndex)?;
//! let channel = build_channel(&space, &winner, &ChannelLimits::default())?;
//!
//! assert_eq!(channel.dim(), (8, 2));
//! // Votes [0, 1, 1]: candidate 1 wins.
//! assert_eq!(channel.row(3).to_vec(), vec![0., 1.]);
//! # Ok(())
//! # }
//! ```
//!
//! For command line usage, see the help screen: `qif-channels -h`.
//!
//! # References
//!
//! [1] 2014, "Additive and multiplicative notions of leakage, and their
//! capacities". _M. S. Alvim et al._
//!
//! [2] 2012, "Universally utility-maximizing privacy mechanisms".
//! _A. Ghosh, T. Roughgarden, M. Sundararajan_.
pub mod channels;
pub mod display;
pub mod errors;
pub mod security_measures;

/// Position of a symbol (candidate, categorical value) in the alphabet.
pub type Symbol = usize;
