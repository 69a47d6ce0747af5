// crates/zprec-cli/src/cmd/compare.rs

use clap::Args;
use zprec_core::analysis::key_depth_table;

use super::{OutFmt, StudySource};
use crate::io::jsonl;

#[derive(Args, Debug)]
pub struct CompareArgs {
    #[command(flatten)]
    pub source: StudySource,

    /// Normalized depth to compare (repeatable). Overrides the study's key depths.
    #[arg(long = "depth")]
    pub depths: Vec<f64>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutFmt::Text)]
    pub fmt: OutFmt,
}

pub fn run(args: CompareArgs) -> anyhow::Result<()> {
    let depths = args.depths;
    let study = args.source.resolve(|s| {
        if !depths.is_empty() {
            s.key_depths = depths;
        }
    })?;

    let rows = key_depth_table(&study.key_depths);

    match args.fmt {
        OutFmt::Text => {
            println!(
                "{:<10} {:<15} {:<15} {:<10} {}",
                "depth", "r16f_step", "r16unorm_step", "advantage", "better"
            );
            println!("{}", "-".repeat(65));
            for r in &rows {
                println!(
                    "{:<10.5} {:<15.10} {:<15.10} {:<10.2} {}",
                    r.depth,
                    r.fp_step,
                    r.unorm_step,
                    r.ratio,
                    r.better_format()
                );
            }
        }
        OutFmt::Csv => {
            println!("depth,r16f_step,r16unorm_step,ratio,better");
            for r in &rows {
                println!(
                    "{},{:e},{:e},{},{}",
                    r.depth,
                    r.fp_step,
                    r.unorm_step,
                    r.ratio,
                    r.better_format()
                );
            }
        }
        OutFmt::Jsonl => jsonl::write_precision_stdout(&rows),
    }

    eprintln!("depths          = {}", rows.len());
    Ok(())
}
