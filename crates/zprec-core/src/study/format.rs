// crates/zprec-core/src/study/format.rs

use crate::error::{Result, ZpError};
use crate::study::Study;

const MAGIC: &[u8; 4] = b"ZPS1";

/// Longest far-plane / key-depth list the layout can hold.
pub const MAX_LIST_LEN: usize = u16::MAX as usize;

/// Binary-stable study layout (little-endian):
/// MAGIC[4]
/// version:u16
/// near:f64
/// log_min_exp:f64 log_max_exp:f64 log_samples:u32
/// eye_samples:u32 crossover_samples:u32
/// ssao_range:f64
/// far_len:u16   far_planes: repeated f64
/// keys_len:u16  key_depths: repeated f64
/// crc32:u32          (over everything before crc32)
/// blake3_16:[16]     (over everything before blake3)
///
/// Lists longer than [`MAX_LIST_LEN`] are rejected by `validate_study`; encode
/// only writes what the length prefix can describe.
pub fn encode(s: &Study) -> Vec<u8> {
    let mut b = Vec::with_capacity(128);
    b.extend_from_slice(MAGIC);

    b.extend_from_slice(&s.version.to_le_bytes());
    b.extend_from_slice(&s.near.to_le_bytes());

    b.extend_from_slice(&s.log_min_exp.to_le_bytes());
    b.extend_from_slice(&s.log_max_exp.to_le_bytes());
    b.extend_from_slice(&s.log_samples.to_le_bytes());

    b.extend_from_slice(&s.eye_samples.to_le_bytes());
    b.extend_from_slice(&s.crossover_samples.to_le_bytes());

    b.extend_from_slice(&s.ssao_range.to_le_bytes());

    write_f64_list(&mut b, &s.far_planes);
    write_f64_list(&mut b, &s.key_depths);

    let c = crc32(&b);
    b.extend_from_slice(&c.to_le_bytes());

    let h = blake3_16(&b);
    b.extend_from_slice(&h);

    b
}

pub fn decode(bytes: &[u8]) -> Result<Study> {
    let mut i = 0usize;
    if bytes.len() < 4 || &bytes[0..4] != MAGIC {
        return Err(ZpError::StudyFormat("bad magic".into()));
    }
    i += 4;

    let version = read_u16(bytes, &mut i)?;
    if version == 0 || version > super::defaults::STUDY_VERSION {
        return Err(ZpError::StudyFormat(format!("unsupported study version {version}")));
    }

    let near = read_f64(bytes, &mut i)?;

    let log_min_exp = read_f64(bytes, &mut i)?;
    let log_max_exp = read_f64(bytes, &mut i)?;
    let log_samples = read_u32(bytes, &mut i)?;

    let eye_samples = read_u32(bytes, &mut i)?;
    let crossover_samples = read_u32(bytes, &mut i)?;

    let ssao_range = read_f64(bytes, &mut i)?;

    let far_planes = read_f64_list(bytes, &mut i)?;
    let key_depths = read_f64_list(bytes, &mut i)?;

    // Verify crc32
    let crc_expected = read_u32(bytes, &mut i)?;
    let crc_actual = crc32(&bytes[0..(i - 4)]);
    if crc_expected != crc_actual {
        return Err(ZpError::StudyFormat("crc32 mismatch".into()));
    }

    // Verify blake3_16
    let h_expected: [u8; 16] = take(bytes, &mut i)?;
    let h_actual = blake3_16(&bytes[0..(i - 16)]);
    if h_expected != h_actual {
        return Err(ZpError::StudyFormat("blake3 mismatch".into()));
    }

    if i != bytes.len() {
        return Err(ZpError::StudyFormat(format!(
            "{} trailing bytes after study",
            bytes.len() - i
        )));
    }

    Ok(Study {
        version,
        near,
        far_planes,
        log_min_exp,
        log_max_exp,
        log_samples,
        eye_samples,
        crossover_samples,
        ssao_range,
        key_depths,
    })
}

/// A stable study identifier: the trailing blake3_16 that `encode()` appends.
pub fn study_id_16(s: &Study) -> [u8; 16] {
    let enc = encode(s);
    let mut out = [0u8; 16];
    out.copy_from_slice(&enc[enc.len() - 16..]);
    out
}

pub fn study_id_hex(s: &Study) -> String {
    hex16(&study_id_16(s))
}

fn hex16(id: &[u8; 16]) -> String {
    id.iter().map(|b| format!("{b:02x}")).collect()
}

/// Integrity check stored right after the payload.
fn crc32(bytes: &[u8]) -> u32 {
    crc32fast::hash(bytes)
}

/// First 16 bytes of the blake3 digest; doubles as the study id.
fn blake3_16(bytes: &[u8]) -> [u8; 16] {
    let mut out = [0u8; 16];
    out.copy_from_slice(&blake3::hash(bytes).as_bytes()[..16]);
    out
}

fn write_f64_list(b: &mut Vec<u8>, values: &[f64]) {
    let len = values.len().min(MAX_LIST_LEN) as u16;
    b.extend_from_slice(&len.to_le_bytes());
    for v in values.iter().take(len as usize) {
        b.extend_from_slice(&v.to_le_bytes());
    }
}

fn read_f64_list(bytes: &[u8], i: &mut usize) -> Result<Vec<f64>> {
    let len = read_u16(bytes, i)? as usize;
    let mut out = Vec::with_capacity(len);
    for _ in 0..len {
        out.push(read_f64(bytes, i)?);
    }
    Ok(out)
}

fn take<const N: usize>(bytes: &[u8], i: &mut usize) -> Result<[u8; N]> {
    let end = *i + N;
    let chunk: [u8; N] = bytes
        .get(*i..end)
        .and_then(|s| s.try_into().ok())
        .ok_or_else(|| ZpError::StudyFormat("unexpected eof".into()))?;
    *i = end;
    Ok(chunk)
}

fn read_u16(bytes: &[u8], i: &mut usize) -> Result<u16> {
    take(bytes, i).map(u16::from_le_bytes)
}

fn read_u32(bytes: &[u8], i: &mut usize) -> Result<u32> {
    take(bytes, i).map(u32::from_le_bytes)
}

fn read_f64(bytes: &[u8], i: &mut usize) -> Result<f64> {
    take(bytes, i).map(f64::from_le_bytes)
}
