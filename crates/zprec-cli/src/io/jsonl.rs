// crates/zprec-cli/src/io/jsonl.rs

use zprec_core::analysis::EyeSample;
use zprec_core::PrecisionSample;

/// Format: {"depth":X,"r16f_step":X,"r16unorm_step":X,"ratio":X,"better":"R16F"}
pub fn precision_line(s: &PrecisionSample) -> String {
    format!(
        "{{\"depth\":{:e},\"r16f_step\":{:e},\"r16unorm_step\":{:e},\"ratio\":{:e},\"better\":\"{}\"}}",
        s.depth,
        s.fp_step,
        s.unorm_step,
        s.ratio,
        s.better_format()
    )
}

/// Format: {"far":X,"ndc_z":X,"eye_z":X,"normalized":X,"ratio":X,"better":"R16F"}
pub fn eye_line(far: f64, s: &EyeSample) -> String {
    format!(
        "{{\"far\":{},\"ndc_z\":{},\"eye_z\":{},\"normalized\":{:e},\"ratio\":{:e},\"better\":\"{}\"}}",
        far,
        s.ndc_z,
        s.eye_z,
        s.precision.depth,
        s.precision.ratio,
        s.precision.better_format()
    )
}

pub fn write_precision_stdout(samples: &[PrecisionSample]) {
    for s in samples {
        println!("{}", precision_line(s));
    }
}

pub fn write_eye_stdout(far: f64, samples: &[EyeSample]) {
    for s in samples {
        println!("{}", eye_line(far, s));
    }
}
