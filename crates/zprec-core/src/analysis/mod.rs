// crates/zprec-core/src/analysis/mod.rs
//
// Sweeps that feed sampled domains through the precision model and hand the
// ratio curve to the crossover scan.
//
// Normalized sweep: log-spaced depth in (0, 1].
// Eye sweep:        linear NDC -> eye distance -> eye / far -> precision.

use crate::crossover::find_crossover_indices;
use crate::error::Result;
use crate::precision::{DepthFormat, PrecisionSample};
use crate::projection::ProjectionParams;
use crate::sampling::DepthDomain;

/// Precision model evaluated at each requested depth, in input order.
pub fn key_depth_table(depths: &[f64]) -> Vec<PrecisionSample> {
    depths.iter().map(|&d| PrecisionSample::at(d)).collect()
}

#[derive(Clone, Debug)]
pub struct NormalizedSweep {
    pub samples: Vec<PrecisionSample>,
}

pub fn normalized_sweep(min_exp: f64, max_exp: f64, samples: usize) -> Result<NormalizedSweep> {
    let depths = DepthDomain::LogNormalized { min_exp, max_exp, samples }.values()?;
    Ok(NormalizedSweep {
        samples: key_depth_table(&depths),
    })
}

impl NormalizedSweep {
    pub fn ratios(&self) -> Vec<f64> {
        self.samples.iter().map(|s| s.ratio).collect()
    }

    pub fn crossover_indices(&self) -> Vec<usize> {
        find_crossover_indices(&self.ratios())
    }

    /// Normalized depths at which the better format flips.
    pub fn crossovers(&self) -> Vec<f64> {
        self.crossover_indices()
            .into_iter()
            .map(|i| self.samples[i].depth)
            .collect()
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EyeSample {
    pub ndc_z: f64,
    pub eye_z: f64,
    /// Evaluated at `eye_z / far`.
    pub precision: PrecisionSample,
}

#[derive(Clone, Debug)]
pub struct EyeSweep {
    pub params: ProjectionParams,
    /// Ordered by NDC ascending, i.e. from the far plane towards the near plane.
    pub samples: Vec<EyeSample>,
}

pub fn eye_sweep(params: ProjectionParams, samples: usize) -> Result<EyeSweep> {
    let ndc = DepthDomain::NdcLinear { samples }.values()?;
    let samples = ndc
        .into_iter()
        .map(|ndc_z| {
            let eye_z = params.eye_depth(ndc_z);
            EyeSample {
                ndc_z,
                eye_z,
                precision: PrecisionSample::at(params.normalize(eye_z)),
            }
        })
        .collect();
    Ok(EyeSweep { params, samples })
}

/// Sample counts inside an eye-space range, split by the better format.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RangeCoverage {
    pub total: usize,
    pub fp_better: usize,
    pub unorm_better: usize,
}

impl RangeCoverage {
    pub fn fp_percent(&self) -> f64 {
        percent(self.fp_better, self.total)
    }

    pub fn unorm_percent(&self) -> f64 {
        percent(self.unorm_better, self.total)
    }
}

fn percent(part: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        100.0 * part as f64 / total as f64
    }
}

impl EyeSweep {
    pub fn ratios(&self) -> Vec<f64> {
        self.samples.iter().map(|s| s.precision.ratio).collect()
    }

    /// Eye-space distances (same unit as near/far) at which the better format flips.
    ///
    /// The sweep runs far -> near, so each value is the first sample on the
    /// near side of its crossing.
    pub fn crossovers(&self) -> Vec<f64> {
        self.crossover_points().into_iter().map(|s| s.eye_z).collect()
    }

    /// The samples [`crossovers`](Self::crossovers) reports, with their ratio,
    /// so callers can tell which format wins on the near side.
    pub fn crossover_points(&self) -> Vec<EyeSample> {
        find_crossover_indices(&self.ratios())
            .into_iter()
            .map(|i| self.samples[i])
            .collect()
    }

    /// Counts samples with `eye_z <= max_eye_z`.
    pub fn coverage(&self, max_eye_z: f64) -> RangeCoverage {
        let mut c = RangeCoverage::default();
        for s in self.samples.iter().filter(|s| s.eye_z <= max_eye_z) {
            c.total += 1;
            match s.precision.better_format() {
                DepthFormat::R16F => c.fp_better += 1,
                DepthFormat::R16Unorm => c.unorm_better += 1,
            }
        }
        c
    }
}
