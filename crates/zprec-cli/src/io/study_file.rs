// crates/zprec-cli/src/io/study_file.rs

use anyhow::{Context, Result};
use zprec_core::study::{defaults::default_study, format as study_format};
use zprec_core::validate::validate_study;
use zprec_core::Study;

/// Load a .zps study file and decode into a Study struct.
pub fn load_zps(path: &str) -> Result<Study> {
    let bytes = std::fs::read(path).with_context(|| format!("read study {path}"))?;
    let study = study_format::decode(&bytes).with_context(|| format!("decode study {path}"))?;
    Ok(study)
}

/// Save a Study as a .zps file.
pub fn save_zps(path: &str, study: &Study) -> Result<()> {
    let bytes = study_format::encode(study);
    std::fs::write(path, bytes).with_context(|| format!("write study {path}"))?;
    Ok(())
}

/// Study from `path`, or the built-in default when no path is given.
/// Not validated: callers apply their CLI overrides first, then [`checked`].
pub fn load_or_default(path: Option<&str>) -> Result<Study> {
    match path {
        Some(p) => load_zps(p),
        None => Ok(default_study()),
    }
}

pub fn checked(study: Study) -> Result<Study> {
    validate_study(&study).context("invalid study")?;
    Ok(study)
}
