// crates/zprec-cli/src/cmd/sweep.rs

use clap::Args;
use zprec_core::analysis::normalized_sweep;

use super::{OutFmt, StudySource};
use crate::io::jsonl;

#[derive(Args, Debug)]
pub struct SweepArgs {
    #[command(flatten)]
    pub source: StudySource,

    /// Override sample count (log-spaced)
    #[arg(long)]
    pub samples: Option<u32>,

    /// Override lower bound exponent: first sample is 10^min_exp
    #[arg(long, allow_hyphen_values = true)]
    pub min_exp: Option<f64>,

    /// Override upper bound exponent: last sample is 10^max_exp
    #[arg(long, allow_hyphen_values = true)]
    pub max_exp: Option<f64>,

    /// Output format. text prints only the summary; csv/jsonl stream every sample.
    #[arg(long, value_enum, default_value_t = OutFmt::Text)]
    pub fmt: OutFmt,
}

pub fn run(args: SweepArgs) -> anyhow::Result<()> {
    let study = args.source.resolve(|s| {
        if let Some(n) = args.samples {
            s.log_samples = n;
        }
        if let Some(e) = args.min_exp {
            s.log_min_exp = e;
        }
        if let Some(e) = args.max_exp {
            s.log_max_exp = e;
        }
    })?;

    let sweep = normalized_sweep(study.log_min_exp, study.log_max_exp, study.log_samples as usize)?;
    let idx = sweep.crossover_indices();

    match args.fmt {
        OutFmt::Text => {
            println!("samples         = {}", sweep.samples.len());
            println!("domain          = 1e{}..=1e{}", study.log_min_exp, study.log_max_exp);
            if idx.is_empty() {
                println!("crossovers      = none at this sampling resolution");
            }
            for (n, &i) in idx.iter().enumerate() {
                let s = &sweep.samples[i];
                println!(
                    "crossover[{}]    = {:.8} (idx={}, {} better above)",
                    n + 1,
                    s.depth,
                    i,
                    s.better_format()
                );
            }
        }
        OutFmt::Csv => {
            println!("idx,depth,r16f_step,r16unorm_step,ratio,better");
            for (i, s) in sweep.samples.iter().enumerate() {
                println!(
                    "{},{:e},{:e},{:e},{},{}",
                    i,
                    s.depth,
                    s.fp_step,
                    s.unorm_step,
                    s.ratio,
                    s.better_format()
                );
            }
        }
        OutFmt::Jsonl => jsonl::write_precision_stdout(&sweep.samples),
    }

    if args.fmt != OutFmt::Text {
        let xs: Vec<String> = sweep.crossovers().iter().map(|x| format!("{x:.8}")).collect();
        eprintln!("crossovers      = [{}]", xs.join(", "));
    }
    Ok(())
}
