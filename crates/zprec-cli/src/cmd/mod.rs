// crates/zprec-cli/src/cmd/mod.rs

use clap::{Args, ValueEnum};
use zprec_core::study::format as study_format;
use zprec_core::Study;

use crate::io::study_file;

pub mod compare;
pub mod eye;
pub mod report;
pub mod study;
pub mod sweep;

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutFmt {
    /// Aligned human-readable lines
    Text,
    /// One header row, then one row per sample
    Csv,
    /// JSON lines, one object per sample
    Jsonl,
}

#[derive(Args, Debug)]
pub struct StudySource {
    /// Study path (.zps). If omitted, uses built-in default study.
    #[arg(long)]
    pub study: Option<String>,
}

impl StudySource {
    /// Load, let the caller apply run-only overrides, then validate.
    pub fn resolve(&self, overrides: impl FnOnce(&mut Study)) -> anyhow::Result<Study> {
        let mut study = study_file::load_or_default(self.study.as_deref())?;
        overrides(&mut study);
        let study = study_file::checked(study)?;

        eprintln!("study           = {}", self.study.as_deref().unwrap_or("<default>"));
        eprintln!("study_id        = {}", study_format::study_id_hex(&study));
        Ok(study)
    }
}
