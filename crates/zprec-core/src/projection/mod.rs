// crates/zprec-core/src/projection/mod.rs
//
// Reversed-Z perspective depth -> linear eye-space distance.
//
//   eye(ndc) = near * far / (far * ndc + near * (1 - ndc))
//
// ndc = 1 is the near plane, ndc = 0 the far plane.

use crate::error::{Result, ZpError};

/// Linear eye-space distance for a reversed-Z NDC depth in `[0, 1]`.
///
/// Requires `0 < near < far`. Any other plane pair still evaluates to a
/// number, but it has no geometric meaning; use [`ProjectionParams::new`] when
/// the planes come from user input.
#[inline]
pub fn linear_eye_depth(ndc_z: f64, near: f64, far: f64) -> f64 {
    near * far / (far * ndc_z + near * (1.0 - ndc_z))
}

/// Scale an eye-space distance into a `(0, 1]`-ish range by dividing by `far`.
///
/// This is a linear rescale, NOT the inverse of [`linear_eye_depth`]: feeding
/// the result back through the projection does not return the original NDC.
#[inline]
pub fn normalize_eye_depth(eye_z: f64, far: f64) -> f64 {
    eye_z / far
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProjectionParams {
    near: f64,
    far: f64,
}

impl ProjectionParams {
    pub fn new(near: f64, far: f64) -> Result<Self> {
        if !near.is_finite() || !far.is_finite() {
            return Err(ZpError::Validation(format!(
                "near/far must be finite (near={near}, far={far})"
            )));
        }
        if near <= 0.0 {
            return Err(ZpError::Validation(format!("near must be > 0, got {near}")));
        }
        if far <= near {
            return Err(ZpError::Validation(format!(
                "far must be > near (near={near}, far={far})"
            )));
        }
        Ok(Self { near, far })
    }

    #[inline]
    pub fn near(&self) -> f64 {
        self.near
    }

    #[inline]
    pub fn far(&self) -> f64 {
        self.far
    }

    #[inline]
    pub fn eye_depth(&self, ndc_z: f64) -> f64 {
        linear_eye_depth(ndc_z, self.near, self.far)
    }

    #[inline]
    pub fn normalize(&self, eye_z: f64) -> f64 {
        normalize_eye_depth(eye_z, self.far)
    }
}

impl TryFrom<(f64, f64)> for ProjectionParams {
    type Error = ZpError;

    fn try_from((near, far): (f64, f64)) -> Result<Self> {
        Self::new(near, far)
    }
}
