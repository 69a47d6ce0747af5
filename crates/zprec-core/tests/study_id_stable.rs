use zprec_core::study;

#[test]
fn study_id_changes_when_far_planes_change() {
    let s0 = study::defaults::default_study();
    let id0 = study::format::study_id_16(&s0);

    let mut s1 = study::defaults::default_study();
    s1.far_planes.push(5000.0);
    let id1 = study::format::study_id_16(&s1);

    assert_ne!(id0, id1, "study_id must change when far planes change");
}

#[test]
fn study_id_changes_when_sample_count_changes() {
    let s0 = study::defaults::default_study();
    let mut s1 = study::defaults::default_study();
    s1.crossover_samples += 1;
    assert_ne!(study::format::study_id_hex(&s0), study::format::study_id_hex(&s1));
}

#[test]
fn study_id_is_stable_for_same_study() {
    let s = study::defaults::default_study();
    let a = study::format::study_id_16(&s);
    let b = study::format::study_id_16(&s);
    assert_eq!(a, b);
    assert_eq!(study::format::study_id_hex(&s).len(), 32);
}
