use crate::error::{Result, ZpError};
use crate::projection::ProjectionParams;
use crate::study::format::MAX_LIST_LEN;
use crate::study::Study;

pub fn validate_study(s: &Study) -> Result<()> {
    // Every far plane must form a valid projection with the shared near plane.
    if s.far_planes.is_empty() {
        return Err(ZpError::Validation("at least one far plane is required".into()));
    }
    for &far in &s.far_planes {
        ProjectionParams::new(s.near, far)?;
    }

    // Log domain
    if !s.log_min_exp.is_finite() || !s.log_max_exp.is_finite() {
        return Err(ZpError::Validation("log exponents must be finite".into()));
    }
    if s.log_min_exp >= s.log_max_exp {
        return Err(ZpError::Validation("log_min_exp must be < log_max_exp".into()));
    }
    // Normalized depth lives in (0, 1].
    if s.log_max_exp > 0.0 {
        return Err(ZpError::Validation(format!(
            "log_max_exp must be <= 0 (depth <= 1), got {}",
            s.log_max_exp
        )));
    }

    // Sample counts: the crossover scan needs at least one pair.
    for (name, n) in [
        ("log_samples", s.log_samples),
        ("eye_samples", s.eye_samples),
        ("crossover_samples", s.crossover_samples),
    ] {
        if n < 2 {
            return Err(ZpError::Validation(format!("{name} must be >= 2, got {n}")));
        }
    }

    if !(s.ssao_range.is_finite() && s.ssao_range > 0.0) {
        return Err(ZpError::Validation(format!(
            "ssao_range must be a positive distance, got {}",
            s.ssao_range
        )));
    }
    if s.ssao_range <= s.near {
        return Err(ZpError::Validation(format!(
            "ssao_range must extend past the near plane (near={}, ssao_range={})",
            s.near, s.ssao_range
        )));
    }

    if let Some(bad) = s.key_depths.iter().find(|d| !(d.is_finite() && **d >= 0.0)) {
        return Err(ZpError::Validation(format!(
            "key depths must be finite and >= 0, got {bad}"
        )));
    }

    // The .zps layout stores list lengths as u16.
    for (name, len) in [("far_planes", s.far_planes.len()), ("key_depths", s.key_depths.len())] {
        if len > MAX_LIST_LEN {
            return Err(ZpError::Validation(format!(
                "{name} holds {len} entries, at most {MAX_LIST_LEN} fit in a study file"
            )));
        }
    }

    Ok(())
}
