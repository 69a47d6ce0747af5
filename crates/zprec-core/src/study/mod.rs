// crates/zprec-core/src/study/mod.rs

pub mod defaults;
pub mod format;

/// Everything one analysis run needs; replaces hard-coded plane and sample
/// constants so runs can be saved, shared and identified.
#[derive(Clone, Debug, PartialEq)]
pub struct Study {
    pub version: u16,

    /// Near plane distance shared by every far plane below.
    pub near: f64,
    pub far_planes: Vec<f64>,

    /// Normalized sweep: 10^log_min_exp ..= 10^log_max_exp.
    pub log_min_exp: f64,
    pub log_max_exp: f64,
    pub log_samples: u32,

    /// NDC samples per far plane for range coverage.
    pub eye_samples: u32,
    /// NDC samples per far plane for eye-space crossovers (denser).
    pub crossover_samples: u32,

    /// Eye-space distance the coverage statistics care about.
    pub ssao_range: f64,

    pub key_depths: Vec<f64>,
}
