// crates/zprec-cli/src/cmd/report.rs

use anyhow::Context;
use clap::Args;
use zprec_core::analysis::{eye_sweep, key_depth_table, normalized_sweep};
use zprec_core::study::format as study_format;
use zprec_core::ProjectionParams;

use super::StudySource;
use crate::io::html::{self, FarPlaneRow, ReportData};

#[derive(Args, Debug)]
pub struct ReportArgs {
    #[command(flatten)]
    pub source: StudySource,

    /// Output path (.html)
    #[arg(long)]
    pub out: String,
}

pub fn run(args: ReportArgs) -> anyhow::Result<()> {
    let study = args.source.resolve(|_| {})?;

    let sweep = normalized_sweep(study.log_min_exp, study.log_max_exp, study.log_samples as usize)?;

    let mut planes = Vec::with_capacity(study.far_planes.len());
    for &far in &study.far_planes {
        let params = ProjectionParams::new(study.near, far)?;
        let coverage = eye_sweep(params, study.eye_samples as usize)?.coverage(study.ssao_range);
        let crossovers = eye_sweep(params, study.crossover_samples as usize)?.crossovers();
        planes.push(FarPlaneRow {
            far,
            coverage,
            crossovers,
        });
    }

    let data = ReportData {
        study_id: study_format::study_id_hex(&study),
        near: study.near,
        ssao_range: study.ssao_range,
        log_samples: sweep.samples.len(),
        normalized_crossovers: sweep.crossovers(),
        key_depths: key_depth_table(&study.key_depths),
        planes,
    };

    let page = html::render_report(&data);
    std::fs::write(&args.out, page).with_context(|| format!("write report {}", args.out))?;

    eprintln!("report          = {}", args.out);
    eprintln!("far_planes      = {}", data.planes.len());
    Ok(())
}
