//! Pretty printing of probability distributions.
//!
//! Deciding which entries to highlight (`maxima()`) is kept apart from
//! rendering them (`EntryStyle`).
use float_cmp::approx_eq;
use ordered_float::OrderedFloat;

/// Marks the entries of `row` that equal its maximum.
pub fn maxima(row: &[f64]) -> Vec<bool> {
    let max = match row.iter().map(|&p| OrderedFloat(p)).max() {
        Some(OrderedFloat(max)) => max,
        None => return vec![],
    };
    row.iter()
       .map(|&p| approx_eq!(f64, p, max, ulps = 2))
       .collect()
}

/// Renders a single entry of a distribution.
pub trait EntryStyle {
    fn plain(&self, p: f64) -> String;
    fn highlighted(&self, p: f64) -> String;
}

/// Prefixes highlighted entries with an arrow: `-->0.75`.
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkerStyle;

impl EntryStyle for MarkerStyle {
    fn plain(&self, p: f64) -> String {
        format!("   {:.2}", p)
    }

    fn highlighted(&self, p: f64) -> String {
        format!("-->{:.2}", p)
    }
}

/// Shows highlighted entries in bold, for terminals.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnsiStyle;

impl EntryStyle for AnsiStyle {
    fn plain(&self, p: f64) -> String {
        format!("{:.2}", p)
    }

    fn highlighted(&self, p: f64) -> String {
        format!("\x1b[1m{:.2}\x1b[0m", p)
    }
}

/// Renders `row` as `( p1 p2 ... )`, optionally highlighting its maxima.
///
/// # Examples
///
/// ```
/// use qif_channels::display::{format_distribution, MarkerStyle};
///
/// assert_eq!(format_distribution(&[0.25, 0.75], true, &MarkerStyle),
///            "(    0.25 -->0.75 )");
/// ```
pub fn format_distribution<S: EntryStyle>(row: &[f64], highlight: bool,
                                          style: &S) -> String {
    let marks = if highlight {
        maxima(row)
    } else {
        vec![false; row.len()]
    };

    let mut out = String::from("( ");
    for (&p, &mark) in row.iter().zip(marks.iter()) {
        if mark {
            out.push_str(&style.highlighted(p));
        } else {
            out.push_str(&style.plain(p));
        }
        out.push(' ');
    }
    out.push(')');
    out
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maxima_ties() {
        assert_eq!(maxima(&[0.2, 0.4, 0.4]), vec![false, true, true]);
        assert_eq!(maxima(&[1.]), vec![true]);
        assert!(maxima(&[]).is_empty());
        // 0.1 + 0.2 != 0.3, but they are within a few ulps.
        assert_eq!(maxima(&[0.1 + 0.2, 0.3, 0.]), vec![true, true, false]);
    }

    #[test]
    fn marker_style() {
        assert_eq!(format_distribution(&[0.5, 0.25, 0.25], false, &MarkerStyle),
                   "(    0.50    0.25    0.25 )");
        assert_eq!(format_distribution(&[0.5, 0.25, 0.25], true, &MarkerStyle),
                   "( -->0.50    0.25    0.25 )");
        assert_eq!(format_distribution(&[], true, &MarkerStyle), "( )");
    }

    #[test]
    fn ansi_style() {
        assert_eq!(format_distribution(&[0.1, 0.9], true, &AnsiStyle),
                   "( 0.10 \x1b[1m0.90\x1b[0m )");
    }
}
