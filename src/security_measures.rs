//! Definitions of security and leakage measures of a channel.
//!
//! In the documentation, we write R* to indicate the Bayes risk of an
//! adversary observing the channel's output, and G to indicate the error of
//! random guessing (i.e., 1 - max priors).
//!
//! # References
//! [1] M. S. Alvim et al. "Additive and multiplicative notions of leakage,
//!     and their capacities." CSF, 2014.
//! [2] G. Cherubin "Bayes, not Naïve: Security Bounds on Website
//!     Fingerprinting Defenses." PoPETS, 2017
use float_cmp::approx_eq;
use ndarray::*;
use ordered_float::OrderedFloat;

use crate::errors::{ChannelError, Result};

/// The uniform prior over `n` secrets.
pub fn uniform_prior(n: usize) -> Array1<f64> {
    Array::from_elem(n, 1. / n as f64)
}

/// Probability of guessing the secret in one try, without observations.
pub fn prior_vulnerability(prior: &ArrayView1<f64>) -> f64 {
    prior.iter()
         .map(|&p| OrderedFloat(p))
         .max()
         .map_or(0., |p| p.into_inner())
}

/// Probability of guessing the secret in one try, after observing the
/// output of `channel`: `sum_y max_x prior[x] channel[x][y]`.
pub fn posterior_vulnerability(prior: &ArrayView1<f64>,
                               channel: &ArrayView2<f64>) -> Result<f64> {
    if prior.len() != channel.nrows() {
        return Err(ChannelError::InvalidArity(
            format!("prior has {} entries, channel has {} rows",
                    prior.len(), channel.nrows())));
    }

    Ok(channel.axis_iter(Axis(1))
              .map(|column| column.iter()
                                  .zip(prior.iter())
                                  .map(|(c, p)| OrderedFloat(c * p))
                                  .max()
                                  .map_or(0., |v| v.into_inner()))
              .sum())
}

/// Random guessing error G.
pub fn random_guessing(prior: &ArrayView1<f64>) -> f64 {
    1. - prior_vulnerability(prior)
}

/// Bayes risk R* of `channel` under `prior`.
pub fn bayes_risk(prior: &ArrayView1<f64>, channel: &ArrayView2<f64>)
        -> Result<f64> {
    Ok(1. - posterior_vulnerability(prior, channel)?)
}

fn check_guessing(random_guessing: f64) -> Result<()> {
    if approx_eq!(f64, random_guessing, 0.) {
        return Err(ChannelError::DegeneratePrior);
    }
    Ok(())
}

/// Computes the Multiplicative Leakage, as defined in [1].
pub fn multiplicative_leakage(bayes_risk: f64, random_guessing: f64)
        -> Result<f64> {
    check_guessing(random_guessing)?;
    Ok((1. - bayes_risk) / (1. - random_guessing))
}

/// Computes the Additive Leakage, as defined in [1].
pub fn additive_leakage(bayes_risk: f64, random_guessing: f64) -> Result<f64> {
    check_guessing(random_guessing)?;
    Ok(random_guessing - bayes_risk)
}

/// Computes the Bayes security measure, as defined in [2].
pub fn bayes_security_measure(bayes_risk: f64, random_guessing: f64)
        -> Result<f64> {
    check_guessing(random_guessing)?;
    Ok(bayes_risk / random_guessing)
}

/// Computes the Min-entropy leakage, in bits.
pub fn min_entropy_leakage(bayes_risk: f64, random_guessing: f64)
        -> Result<f64> {
    check_guessing(random_guessing)?;
    Ok((1. - bayes_risk).log2() - (1. - random_guessing).log2())
}
