// crates/zprec-core/tests/study_format.rs

use zprec_core::error::ZpError;
use zprec_core::study::{defaults::default_study, format};
use zprec_core::validate::validate_study;

#[test]
fn default_study_is_valid() {
    validate_study(&default_study()).unwrap();
}

#[test]
fn decode_restores_custom_study() {
    let mut s = default_study();
    s.near = 0.05;
    s.far_planes = vec![30.0, 5000.0];
    s.key_depths = vec![0.0, 0.25];
    s.ssao_range = 4.5;

    let back = format::decode(&format::encode(&s)).unwrap();
    assert_eq!(back, s);
}

#[test]
fn corrupted_payload_is_rejected() {
    let mut bytes = format::encode(&default_study());
    // Flip a bit inside the near plane.
    bytes[8] ^= 0x01;
    match format::decode(&bytes) {
        Err(ZpError::StudyFormat(msg)) => assert!(msg.contains("crc32"), "{msg}"),
        other => panic!("expected crc32 mismatch, got {other:?}"),
    }
}

#[test]
fn truncated_and_foreign_bytes_are_rejected() {
    let bytes = format::encode(&default_study());
    assert!(format::decode(&bytes[..bytes.len() - 1]).is_err());
    assert!(format::decode(b"ABCD....").is_err());
    assert!(format::decode(&[]).is_err());

    let mut padded = bytes.clone();
    padded.push(0);
    assert!(format::decode(&padded).is_err());
}

#[test]
fn validation_catches_bad_planes_and_domains() {
    let mut s = default_study();
    s.far_planes = vec![50.0, 0.05];
    assert!(validate_study(&s).is_err());

    let mut s = default_study();
    s.far_planes.clear();
    assert!(validate_study(&s).is_err());

    let mut s = default_study();
    s.log_min_exp = 0.0;
    assert!(validate_study(&s).is_err());

    let mut s = default_study();
    s.crossover_samples = 1;
    assert!(validate_study(&s).is_err());

    let mut s = default_study();
    s.ssao_range = 0.0;
    assert!(validate_study(&s).is_err());

    let mut s = default_study();
    s.key_depths.push(-0.5);
    assert!(validate_study(&s).is_err());
}

#[test]
fn oversized_lists_fail_validation_instead_of_truncating() {
    let mut s = default_study();
    s.key_depths = vec![0.25; format::MAX_LIST_LEN + 1];
    match validate_study(&s) {
        Err(ZpError::Validation(msg)) => assert!(msg.contains("key_depths"), "{msg}"),
        other => panic!("expected validation error, got {other:?}"),
    }

    // At the limit the study survives the file format unchanged.
    s.key_depths.truncate(format::MAX_LIST_LEN);
    validate_study(&s).unwrap();
    let back = format::decode(&format::encode(&s)).unwrap();
    assert_eq!(back.key_depths.len(), format::MAX_LIST_LEN);

    let mut s = default_study();
    s.far_planes = vec![500.0; format::MAX_LIST_LEN + 1];
    assert!(validate_study(&s).is_err());
}

#[test]
fn normalized_domain_cannot_exceed_one() {
    let mut s = default_study();
    s.log_max_exp = 1.0;
    assert!(validate_study(&s).is_err());

    s.log_max_exp = 0.0;
    validate_study(&s).unwrap();
}

#[test]
fn ssao_range_must_reach_past_near_plane() {
    let mut s = default_study();
    s.near = 1.0;
    s.ssao_range = 0.5;
    assert!(validate_study(&s).is_err());

    s.ssao_range = 1.5;
    validate_study(&s).unwrap();
}
