// crates/zprec-core/src/precision/mod.rs
//
// Format precision model (R16F vs R16Unorm)
//
// Analytic step sizes, not bit-exact half-float rounding:
//   R16F:     x == 0            -> 2^-24
//             floor(log2 x) < -14 -> 2^-24            (subnormal plateau)
//             otherwise         -> 2^(floor(log2 x) - 10)
//   R16Unorm: always 1/65535
//
// ratio(x) = unorm_step / fp_step; > 1 means R16F resolves finer at x.

/// Explicit mantissa bits of the half-precision layout.
pub const FP16_MANTISSA_BITS: i32 = 10;

/// Smallest normal binade exponent of the half-precision layout.
pub const FP16_MIN_NORMAL_EXP: i32 = -14;

/// Step size on the subnormal plateau: 2^(-14 - 10).
pub const FP16_SUBNORMAL_STEP: f64 = 1.0 / 16_777_216.0;

/// Quantization levels of a 16-bit unorm channel minus one.
pub const UNORM16_MAX: f64 = 65_535.0;

/// Uniform step of a 16-bit unorm channel.
pub const UNORM16_STEP: f64 = 1.0 / UNORM16_MAX;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DepthFormat {
    R16F,
    R16Unorm,
}

impl DepthFormat {
    pub fn label(self) -> &'static str {
        match self {
            DepthFormat::R16F => "R16F",
            DepthFormat::R16Unorm => "R16Unorm",
        }
    }

    #[inline]
    pub fn step(self, depth: f64) -> f64 {
        match self {
            DepthFormat::R16F => fp_precision_step(depth),
            DepthFormat::R16Unorm => unorm_precision_step(depth),
        }
    }
}

impl std::fmt::Display for DepthFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// `floor(log2(|x|))` for a positive normal `f64`, read from the exponent field.
///
/// Subnormal `f64` inputs report -1023, which is far below the half-float
/// plateau and therefore classifies the same way.
#[inline]
pub fn binade_exponent(x: f64) -> i32 {
    let biased = ((x.abs().to_bits() >> 52) & 0x7FF) as i32;
    biased - 1023
}

/// Distance between adjacent R16F values around normalized depth `x`.
///
/// Defined for every non-negative finite `x`. Negative inputs are outside the
/// depth domain; they are measured by magnitude.
pub fn fp_precision_step(x: f64) -> f64 {
    if x == 0.0 {
        return FP16_SUBNORMAL_STEP;
    }

    let exponent = binade_exponent(x);
    if exponent < FP16_MIN_NORMAL_EXP {
        return FP16_SUBNORMAL_STEP;
    }

    2f64.powi(exponent - FP16_MANTISSA_BITS)
}

/// Distance between adjacent R16Unorm values. Constant over the domain; the
/// argument only keeps the call shape symmetric with [`fp_precision_step`].
#[inline]
pub fn unorm_precision_step(_x: f64) -> f64 {
    UNORM16_STEP
}

/// R16Unorm step over R16F step at `x`.
#[inline]
pub fn precision_ratio(x: f64) -> f64 {
    unorm_precision_step(x) / fp_precision_step(x)
}

/// One evaluated point of the precision model.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PrecisionSample {
    pub depth: f64,
    pub fp_step: f64,
    pub unorm_step: f64,
    pub ratio: f64,
}

impl PrecisionSample {
    pub fn at(depth: f64) -> Self {
        let fp_step = fp_precision_step(depth);
        let unorm_step = unorm_precision_step(depth);
        Self {
            depth,
            fp_step,
            unorm_step,
            ratio: unorm_step / fp_step,
        }
    }

    /// The indifference point (ratio == 1) counts for R16Unorm.
    pub fn better_format(&self) -> DepthFormat {
        if self.ratio > 1.0 {
            DepthFormat::R16F
        } else {
            DepthFormat::R16Unorm
        }
    }
}
