// crates/zprec-core/src/study/defaults.rs

use crate::study::Study;

pub const STUDY_VERSION: u16 = 1;

pub fn default_study() -> Study {
    // Typical SSAO setup: 10cm near plane, far planes from small interiors up
    // to open-world draw distances.
    Study {
        version: STUDY_VERSION,
        near: 0.1,
        far_planes: vec![50.0, 100.0, 200.0, 1000.0],

        // 1e-8 ..= 1 covers the whole R16F subnormal plateau.
        log_min_exp: -8.0,
        log_max_exp: 0.0,
        log_samples: 1000,

        eye_samples: 1000,
        crossover_samples: 10_000,

        // SSAO kernels rarely look past the first 10m.
        ssao_range: 10.0,

        key_depths: vec![0.0001, 0.001, 0.01, 0.1, 0.5],
    }
}
