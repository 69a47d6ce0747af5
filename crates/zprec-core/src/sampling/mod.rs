// crates/zprec-core/src/sampling/mod.rs

use crate::error::{Result, ZpError};

/// `n` evenly spaced values over `start..=end`.
///
/// The last value is `end` exactly, so endpoint-sensitive transforms (ndc 0/1)
/// hit their planes without rounding drift.
pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (n - 1) as f64;
            (0..n)
                .map(|i| if i == n - 1 { end } else { start + step * i as f64 })
                .collect()
        }
    }
}

/// `n` values spaced evenly in log10 over `10^start_exp..=10^end_exp`.
pub fn logspace(start_exp: f64, end_exp: f64, n: usize) -> Vec<f64> {
    linspace(start_exp, end_exp, n)
        .into_iter()
        .map(|e| 10f64.powf(e))
        .collect()
}

/// Sampling domains the analysis pipelines know how to build.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DepthDomain {
    /// Normalized depth, log-uniform over `10^min_exp..=10^max_exp`.
    LogNormalized { min_exp: f64, max_exp: f64, samples: usize },
    /// Reversed-Z NDC, uniform over `0..=1`.
    NdcLinear { samples: usize },
}

impl DepthDomain {
    pub fn samples(&self) -> usize {
        match *self {
            DepthDomain::LogNormalized { samples, .. } | DepthDomain::NdcLinear { samples } => samples,
        }
    }

    pub fn check(&self) -> Result<()> {
        if self.samples() < 2 {
            return Err(ZpError::Validation(format!(
                "domain needs at least 2 samples, got {}",
                self.samples()
            )));
        }
        if let DepthDomain::LogNormalized { min_exp, max_exp, .. } = *self {
            if !min_exp.is_finite() || !max_exp.is_finite() || min_exp >= max_exp {
                return Err(ZpError::Validation(format!(
                    "log domain must satisfy min_exp < max_exp (min={min_exp}, max={max_exp})"
                )));
            }
            if max_exp > 0.0 {
                return Err(ZpError::Validation(format!(
                    "normalized depth must stay <= 1, got max_exp={max_exp}"
                )));
            }
        }
        Ok(())
    }

    pub fn values(&self) -> Result<Vec<f64>> {
        self.check()?;
        Ok(match *self {
            DepthDomain::LogNormalized { min_exp, max_exp, samples } => logspace(min_exp, max_exp, samples),
            DepthDomain::NdcLinear { samples } => linspace(0.0, 1.0, samples),
        })
    }
}
