//! Enumeration of the tally vectors attainable by an election.
//!
//! A tally vector assigns a number of votes to each candidate, such that
//! the votes sum up to the number of voters. There are
//! `binomial(voters + candidates - 1, candidates - 1)` of them
//! (stars and bars).
use tracing::debug;

/// A vector of per-candidate vote counts.
pub type Tally = Vec<usize>;

/// Returns all the ways of distributing `voters` indistinguishable votes
/// among `candidates` candidates.
///
/// The order is fixed: candidate 0 receives `voters, voters-1, ..., 0`
/// votes in turn, and for each of these the remaining votes are
/// distributed recursively among the other candidates in the same order.
///
/// # Examples
///
/// ```
/// use qif_channels::channels::enumerate_tallies;
///
/// assert_eq!(enumerate_tallies(2, 2), vec![vec![2, 0],
///                                          vec![1, 1],
///                                          vec![0, 2]]);
/// ```
pub fn enumerate_tallies(voters: usize, candidates: usize) -> Vec<Tally> {
    let tallies = distribute(voters, candidates);
    debug!(voters, candidates, tallies = tallies.len(),
           "enumerated reachable tallies");
    tallies
}

fn distribute(voters: usize, candidates: usize) -> Vec<Tally> {
    match candidates {
        0 => vec![],
        1 => vec![vec![voters]],
        _ => {
            let mut tallies = Vec::new();
            // `rest` votes go to the other candidates.
            for rest in 0..=voters {
                for tail in distribute(rest, candidates - 1) {
                    let mut tally = Vec::with_capacity(candidates);
                    tally.push(voters - rest);
                    tally.extend(tail);
                    tallies.push(tally);
                }
            }
            tallies
        },
    }
}

/// Number of tally vectors for `voters` voters and `candidates`
/// candidates, or `None` if it overflows.
pub fn count_tallies(voters: usize, candidates: usize) -> Option<usize> {
    match candidates {
        0 => Some(0),
        _ => binomial(voters.checked_add(candidates - 1)?, candidates - 1),
    }
}

/// Binomial coefficient `n` choose `k`, or `None` if it overflows.
pub fn binomial(n: usize, k: usize) -> Option<usize> {
    if k > n {
        return Some(0);
    }
    let k = k.min(n - k);
    let mut c: usize = 1;
    for i in 0..k {
        // c * (n - i) is divisible by (i + 1) at every step.
        c = c.checked_mul(n - i)? / (i + 1);
    }
    Some(c)
}
