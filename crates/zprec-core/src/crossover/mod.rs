// crates/zprec-core/src/crossover/mod.rs
//
// Sign-change scan of a sampled precision-ratio curve against ratio == 1.
//
// Attribution rule: a crossing is reported at the FIRST sample that lands on
// the new side. Samples sitting exactly on 1 are ties; they never cross on
// their own and are skipped when looking back for the previous side, so
//   [2.0, 1.0, 0.5] -> one crossing at index 2
//   [2.0, 1.0, 2.0] -> none
//
// The scan only sees what was sampled. Two crossings closer together than the
// sampling step can cancel out and go unreported.

use crate::error::{Result, ZpError};

/// Which format a ratio sample favours.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    /// ratio > 1: R16F step is smaller.
    Fp,
    /// ratio < 1: R16Unorm step is smaller.
    Unorm,
    /// ratio == 1 (or NaN): no preference.
    Tie,
}

impl Side {
    #[inline]
    pub fn of(ratio: f64) -> Side {
        if ratio > 1.0 {
            Side::Fp
        } else if ratio < 1.0 {
            Side::Unorm
        } else {
            Side::Tie
        }
    }
}

/// Indices where the ratio sequence changes side, in ascending order.
pub fn find_crossover_indices(ratios: &[f64]) -> Vec<usize> {
    let mut out = Vec::new();
    let mut last: Option<Side> = None;

    for (i, &r) in ratios.iter().enumerate() {
        let side = Side::of(r);
        if side == Side::Tie {
            continue;
        }
        if let Some(prev) = last {
            if prev != side {
                out.push(i);
            }
        }
        last = Some(side);
    }

    out
}

/// Domain values at which the ratio crosses 1.
///
/// `domain_values[i]` must be the sample that produced `ratio_values[i]`.
pub fn find_crossovers(domain_values: &[f64], ratio_values: &[f64]) -> Result<Vec<f64>> {
    if domain_values.len() != ratio_values.len() {
        return Err(ZpError::Validation(format!(
            "domain/ratio length mismatch: {} vs {}",
            domain_values.len(),
            ratio_values.len()
        )));
    }

    Ok(find_crossover_indices(ratio_values)
        .into_iter()
        .map(|i| domain_values[i])
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nan_is_treated_as_tie() {
        assert_eq!(Side::of(f64::NAN), Side::Tie);
        assert_eq!(find_crossover_indices(&[2.0, f64::NAN, 0.5]), vec![2]);
    }

    #[test]
    fn leading_ties_do_not_cross() {
        assert!(find_crossover_indices(&[1.0, 1.0, 0.5, 0.25]).is_empty());
    }
}
