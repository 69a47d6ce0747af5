// crates/zprec-cli/src/cmd/eye.rs

use clap::Args;
use zprec_core::analysis::{eye_sweep, EyeSample};
use zprec_core::precision::DepthFormat;
use zprec_core::ProjectionParams;

use super::{OutFmt, StudySource};
use crate::io::jsonl;

#[derive(Args, Debug)]
pub struct EyeArgs {
    #[command(flatten)]
    pub source: StudySource,

    /// Override near plane distance
    #[arg(long)]
    pub near: Option<f64>,

    /// Far plane distance (repeatable). Overrides the study's far planes.
    #[arg(long = "far")]
    pub far_planes: Vec<f64>,

    /// Override NDC samples used for range coverage
    #[arg(long)]
    pub samples: Option<u32>,

    /// Override NDC samples used for the crossover scan
    #[arg(long)]
    pub crossover_samples: Option<u32>,

    /// Override the eye-space range (same unit as near/far) counted for coverage
    #[arg(long)]
    pub range: Option<f64>,

    /// Output format. text/csv: one block/row per far plane; jsonl: every crossover-scan sample.
    #[arg(long, value_enum, default_value_t = OutFmt::Text)]
    pub fmt: OutFmt,
}

pub fn run(args: EyeArgs) -> anyhow::Result<()> {
    let far_planes = args.far_planes;
    let study = args.source.resolve(|s| {
        if let Some(n) = args.near {
            s.near = n;
        }
        if !far_planes.is_empty() {
            s.far_planes = far_planes;
        }
        if let Some(n) = args.samples {
            s.eye_samples = n;
        }
        if let Some(n) = args.crossover_samples {
            s.crossover_samples = n;
        }
        if let Some(r) = args.range {
            s.ssao_range = r;
        }
    })?;

    if args.fmt == OutFmt::Csv {
        println!("near,far,range,samples_in_range,r16f_better,r16unorm_better,r16f_pct,crossovers");
    }

    for &far in &study.far_planes {
        let params = ProjectionParams::new(study.near, far)?;

        let coverage = eye_sweep(params, study.eye_samples as usize)?.coverage(study.ssao_range);
        let dense = eye_sweep(params, study.crossover_samples as usize)?;
        let points = dense.crossover_points();

        match args.fmt {
            OutFmt::Text => {
                println!("--- far = {}m ---", far);
                println!("range           = {}..={}m", study.near, study.ssao_range);
                println!(
                    "r16f_better     = {} samples ({:.1}%)",
                    coverage.fp_better,
                    coverage.fp_percent()
                );
                println!(
                    "r16unorm_better = {} samples ({:.1}%)",
                    coverage.unorm_better,
                    coverage.unorm_percent()
                );
                if points.is_empty() {
                    println!("crossovers      = none");
                }
                for (n, p) in points.iter().enumerate() {
                    println!("crossover[{}]    = {:.3}m", n + 1, p.eye_z);
                    print_sides(p);
                }
            }
            OutFmt::Csv => {
                let xs: Vec<String> = points.iter().map(|p| format!("{:.6}", p.eye_z)).collect();
                println!(
                    "{},{},{},{},{},{},{:.3},{}",
                    study.near,
                    far,
                    study.ssao_range,
                    coverage.total,
                    coverage.fp_better,
                    coverage.unorm_better,
                    coverage.fp_percent(),
                    xs.join(";")
                );
            }
            OutFmt::Jsonl => jsonl::write_eye_stdout(far, &dense.samples),
        }

        eprintln!("far={} crossovers={} in_range={}", far, points.len(), coverage.total);
    }

    Ok(())
}

/// The sweep runs far -> near, so the reported sample is on the near side.
fn print_sides(p: &EyeSample) {
    let near_side = p.precision.better_format();
    let far_side = match near_side {
        DepthFormat::R16F => DepthFormat::R16Unorm,
        DepthFormat::R16Unorm => DepthFormat::R16F,
    };
    println!("  {} better for eye_z < {:.3}m", near_side, p.eye_z);
    println!("  {} better for eye_z > {:.3}m", far_side, p.eye_z);
}
