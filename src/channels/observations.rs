//! Observation functions: what an adversary sees of an instance.
//!
//! Each observation also knows the set of outputs it can produce, and
//! maps every output to a column of the channel matrix.
use std::collections::HashMap;
use itertools::Itertools;

use crate::Symbol;
use crate::channels::{InstanceSpace, Observation};
use crate::channels::tallies::{Tally, enumerate_tallies};
use crate::errors::{ChannelError, Result};

/// How `winner()` resolves a tie between the most voted candidates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TieBreak {
    /// The tied candidate with the lowest index wins.
    LowestIndex,
    /// Ties are reported as errors.
    Reject,
}

/// Counts the occurrences of each of the `alphabet_size` symbols in
/// `instance`.
pub fn tally(instance: &[Symbol], alphabet_size: usize) -> Result<Tally> {
    let mut counts = vec![0; alphabet_size];
    for &symbol in instance {
        match counts.get_mut(symbol) {
            Some(c) => *c += 1,
            None => return Err(ChannelError::SymbolOutOfRange {
                symbol,
                alphabet_size,
            }),
        }
    }
    Ok(counts)
}

/// Number of occurrences of `value` in `instance`.
pub fn count_of(instance: &[Symbol], value: Symbol) -> usize {
    instance.iter().filter(|&&s| s == value).count()
}

/// Returns the symbol occurring most often in `instance`.
///
/// The scan goes by increasing symbol, so that with `TieBreak::LowestIndex`
/// the lowest of the tied symbols wins.
/// An empty instance has no winner and is rejected.
///
/// # Examples
///
/// ```
/// use qif_channels::channels::{winner, TieBreak};
///
/// assert_eq!(winner(&[0, 1, 1], 2, TieBreak::LowestIndex).unwrap(), 1);
/// assert_eq!(winner(&[2, 0, 2, 0], 3, TieBreak::LowestIndex).unwrap(), 0);
/// assert!(winner(&[2, 0, 2, 0], 3, TieBreak::Reject).is_err());
/// ```
pub fn winner(instance: &[Symbol], alphabet_size: usize, ties: TieBreak)
        -> Result<Symbol> {
    if instance.is_empty() {
        return Err(ChannelError::InvalidArity(
            "cannot pick the winner of an empty election".into()));
    }
    let counts = tally(instance, alphabet_size)?;

    let mut best = 0;
    for (symbol, &c) in counts.iter().enumerate() {
        if c > counts[best] {
            best = symbol;
        }
    }

    if ties == TieBreak::Reject {
        let tied = counts.iter()
                         .positions(|&c| c == counts[best])
                         .collect::<Vec<_>>();
        if tied.len() > 1 {
            return Err(ChannelError::AmbiguousTie { symbols: tied,
                                                    count: counts[best] });
        }
    }
    Ok(best)
}

/// Announces the winner of a plurality election.
#[derive(Debug, Clone)]
pub struct Winner {
    candidates: usize,
    ties: TieBreak,
}

impl Winner {
    pub fn new(candidates: usize, ties: TieBreak) -> Result<Winner> {
        if candidates == 0 {
            return Err(ChannelError::InvalidArity(
                "an election needs at least one candidate".into()));
        }
        Ok(Winner { candidates, ties })
    }

    /// Announces the winner among the symbols of `space`.
    pub fn for_space(space: &InstanceSpace, ties: TieBreak) -> Result<Winner> {
        Winner::new(space.alphabet_size(), ties)
    }
}

impl Observation for Winner {
    fn columns(&self) -> usize {
        self.candidates
    }

    fn column(&self, instance: &[Symbol]) -> Result<usize> {
        winner(instance, self.candidates, self.ties)
    }

    fn labels(&self) -> Vec<String> {
        (0..self.candidates).map(|c| c.to_string()).collect()
    }

    fn check_space(&self, space: &InstanceSpace) -> Result<()> {
        check_candidates(self.candidates, space)
    }
}

fn check_candidates(candidates: usize, space: &InstanceSpace) -> Result<()> {
    if candidates != space.alphabet_size() {
        return Err(ChannelError::InvalidArity(
            format!("{} candidates, but instances range over {} symbols",
                    candidates, space.alphabet_size())));
    }
    Ok(())
}

/// Announces the full tally of an election.
///
/// Columns are the reachable tallies, in the order of
/// `enumerate_tallies()`.
#[derive(Debug, Clone)]
pub struct FullTally {
    voters: usize,
    candidates: usize,
    outcomes: Vec<Tally>,
    // Column of each tally in `outcomes`.
    columns: HashMap<Tally, usize>,
}

impl FullTally {
    pub fn new(voters: usize, candidates: usize) -> Result<FullTally> {
        if candidates == 0 {
            return Err(ChannelError::InvalidArity(
                "an election needs at least one candidate".into()));
        }
        let outcomes = enumerate_tallies(voters, candidates);
        let columns = outcomes.iter()
                              .cloned()
                              .enumerate()
                              .map(|(i, t)| (t, i))
                              .collect();

        Ok(FullTally { voters, candidates, outcomes, columns })
    }

    /// Announces the tally of the elections of `space`.
    pub fn for_space(space: &InstanceSpace) -> Result<FullTally> {
        FullTally::new(space.length(), space.alphabet_size())
    }

    /// Reachable tallies, in column order.
    pub fn outcomes(&self) -> &[Tally] {
        &self.outcomes
    }
}

impl Observation for FullTally {
    fn columns(&self) -> usize {
        self.outcomes.len()
    }

    fn column(&self, instance: &[Symbol]) -> Result<usize> {
        let t = tally(instance, self.candidates)?;
        self.columns.get(&t)
                    .copied()
                    .ok_or_else(|| ChannelError::UnknownOutcome(
                        format!("{:?}", t)))
    }

    fn labels(&self) -> Vec<String> {
        self.outcomes.iter()
                     .map(|t| format!("({})", t.iter().join(" ")))
                     .collect()
    }

    fn check_space(&self, space: &InstanceSpace) -> Result<()> {
        check_candidates(self.candidates, space)?;
        if self.voters != space.length() {
            return Err(ChannelError::InvalidArity(
                format!("tallies of {} voters, but instances have {} voters",
                        self.voters, space.length())));
        }
        Ok(())
    }
}

/// Releases how many rows of a database hold `value`.
///
/// Columns are the counts `0..=rows`.
#[derive(Debug, Clone)]
pub struct CountOf {
    value: Symbol,
    rows: usize,
}

impl CountOf {
    pub fn new(value: Symbol, rows: usize) -> CountOf {
        CountOf { value, rows }
    }

    /// Counts `value` in the databases of `space`.
    pub fn for_space(space: &InstanceSpace, value: Symbol) -> Result<CountOf> {
        let count = CountOf::new(value, space.length());
        count.check_space(space)?;
        Ok(count)
    }

    /// The largest count this observation can release.
    pub fn max_count(&self) -> usize {
        self.rows
    }
}

impl Observation for CountOf {
    fn columns(&self) -> usize {
        self.rows + 1
    }

    fn column(&self, instance: &[Symbol]) -> Result<usize> {
        let c = count_of(instance, self.value);
        if c > self.rows {
            return Err(ChannelError::UnknownOutcome(c.to_string()));
        }
        Ok(c)
    }

    fn labels(&self) -> Vec<String> {
        (0..=self.rows).map(|c| c.to_string()).collect()
    }

    fn check_space(&self, space: &InstanceSpace) -> Result<()> {
        if self.value >= space.alphabet_size() {
            return Err(ChannelError::SymbolOutOfRange {
                symbol: self.value,
                alphabet_size: space.alphabet_size(),
            });
        }
        if self.rows != space.length() {
            return Err(ChannelError::InvalidArity(
                format!("counts over {} rows, but databases have {} rows",
                        self.rows, space.length())));
        }
        Ok(())
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tally_counts() {
        assert_eq!(tally(&[0, 2, 2, 1, 2], 3).unwrap(), vec![1, 1, 3]);
        assert_eq!(tally(&[], 2).unwrap(), vec![0, 0]);
        assert_eq!(tally(&[0, 3], 3),
                   Err(ChannelError::SymbolOutOfRange { symbol: 3,
                                                        alphabet_size: 3 }));
    }

    #[test]
    fn count_of_value() {
        assert_eq!(count_of(&[1, 0, 1, 1], 1), 3);
        assert_eq!(count_of(&[1, 0, 1, 1], 2), 0);
    }

    #[test]
    fn winner_lowest_index_tie_break() {
        assert_eq!(winner(&[1, 0], 2, TieBreak::LowestIndex).unwrap(), 0);
        assert_eq!(winner(&[2, 1, 1, 2], 3, TieBreak::LowestIndex).unwrap(), 1);
        assert_eq!(winner(&[2, 2, 0], 3, TieBreak::LowestIndex).unwrap(), 2);
    }

    #[test]
    fn winner_reject_ties() {
        assert_eq!(winner(&[2, 1, 1, 2], 3, TieBreak::Reject),
                   Err(ChannelError::AmbiguousTie { symbols: vec![1, 2],
                                                    count: 2 }));
        assert_eq!(winner(&[2, 1, 2], 3, TieBreak::Reject).unwrap(), 2);
    }

    #[test]
    fn winner_empty_election() {
        assert!(matches!(winner(&[], 2, TieBreak::LowestIndex),
                         Err(ChannelError::InvalidArity(_))));
    }

    #[test]
    fn full_tally_columns() {
        let obs = FullTally::new(2, 3).unwrap();
        assert_eq!(obs.columns(), 6);
        assert_eq!(obs.column(&[0, 0]).unwrap(), 0);
        assert_eq!(obs.column(&[2, 1]).unwrap(), 4);
        assert_eq!(obs.column(&[1, 2]).unwrap(), 4);
        assert_eq!(obs.column(&[2, 2]).unwrap(), 5);
        assert_eq!(obs.labels()[1], "(1 1 0)");
    }

    #[test]
    fn count_columns() {
        let obs = CountOf::new(1, 3);
        assert_eq!(obs.columns(), 4);
        assert_eq!(obs.column(&[1, 1, 0]).unwrap(), 2);
        assert!(obs.column(&[1, 1, 1, 1]).is_err());
    }

    #[test]
    fn observations_match_their_space() {
        let space = InstanceSpace::new(3, 2).unwrap();

        assert!(Winner::for_space(&space, TieBreak::LowestIndex).unwrap()
                       .check_space(&space).is_ok());
        assert!(matches!(Winner::new(5, TieBreak::LowestIndex).unwrap()
                                .check_space(&space),
                         Err(ChannelError::InvalidArity(_))));

        assert!(FullTally::for_space(&space).unwrap()
                          .check_space(&space).is_ok());
        assert!(matches!(FullTally::new(2, 2).unwrap().check_space(&space),
                         Err(ChannelError::InvalidArity(_))));

        assert_eq!(CountOf::for_space(&space, 1).unwrap().max_count(), 3);
        assert!(matches!(CountOf::new(0, 5).check_space(&space),
                         Err(ChannelError::InvalidArity(_))));
        assert_eq!(CountOf::for_space(&space, 9).unwrap_err(),
                   ChannelError::SymbolOutOfRange { symbol: 9,
                                                    alphabet_size: 2 });
    }

    #[test]
    fn observations_need_candidates() {
        assert!(Winner::new(0, TieBreak::LowestIndex).is_err());
        assert!(FullTally::new(3, 0).is_err());
    }
}
