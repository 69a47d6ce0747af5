// crates/zprec-core/tests/crossover_scan.rs

use zprec_core::analysis::normalized_sweep;
use zprec_core::crossover::{find_crossover_indices, find_crossovers};
use zprec_core::precision::precision_ratio;
use zprec_core::sampling::logspace;

#[test]
fn single_crossover_on_log_unit_interval() {
    let xs = logspace(-8.0, 0.0, 1000);
    let ratios: Vec<f64> = xs.iter().map(|&x| precision_ratio(x)).collect();

    let found = find_crossovers(&xs, &ratios).unwrap();
    assert_eq!(found.len(), 1, "expected exactly one crossover, got {found:?}");

    // True flip is at 2^-5; the scan reports the first sample above it.
    let x = found[0];
    assert!(x >= 0.03125, "crossover {x} below the binade edge");
    let step = 10f64.powf(8.0 / 999.0);
    assert!(x < 0.03125 * step, "crossover {x} more than one sample past 2^-5");
    assert!((x - 0.0318).abs() < 0.0005, "crossover {x} not near 0.0318");

    // R16F better below, R16Unorm better above.
    let i = find_crossover_indices(&ratios)[0];
    assert!(ratios[i - 1] > 1.0);
    assert!(ratios[i] < 1.0);
}

#[test]
fn normalized_sweep_agrees_with_manual_scan() {
    let sweep = normalized_sweep(-8.0, 0.0, 1000).unwrap();
    assert_eq!(sweep.samples.len(), 1000);
    assert_eq!(sweep.crossover_indices(), vec![812]);

    let xs = logspace(-8.0, 0.0, 1000);
    let ratios: Vec<f64> = xs.iter().map(|&x| precision_ratio(x)).collect();
    assert_eq!(sweep.crossovers(), find_crossovers(&xs, &ratios).unwrap());
}

#[test]
fn monotonic_ratio_has_no_crossover() {
    let domain: Vec<f64> = (0..50).map(|i| i as f64).collect();
    let above: Vec<f64> = (0..50).map(|i| 100.0 - i as f64).collect();
    let below: Vec<f64> = (0..50).map(|i| 0.9 - i as f64 * 0.01).collect();

    assert!(find_crossovers(&domain, &above).unwrap().is_empty());
    assert!(find_crossovers(&domain, &below).unwrap().is_empty());
    assert!(find_crossovers(&[], &[]).unwrap().is_empty());
}

#[test]
fn monotonic_falling_through_one_crosses_once() {
    let domain: Vec<f64> = (0..10).map(|i| i as f64 * 0.1).collect();
    let ratios = [4.0, 3.0, 2.5, 1.5, 1.2, 0.8, 0.6, 0.5, 0.2, 0.1];
    assert_eq!(find_crossovers(&domain, &ratios).unwrap(), vec![0.5]);
}

#[test]
fn tie_sample_is_attributed_to_later_index() {
    let domain = [10.0, 20.0, 30.0, 40.0];

    // Exactly on 1 between opposite sides: one crossing, on the far side of the tie.
    assert_eq!(find_crossovers(&domain, &[2.0, 1.0, 0.5, 0.25]).unwrap(), vec![30.0]);
    assert_eq!(find_crossovers(&domain, &[0.5, 1.0, 1.0, 2.0]).unwrap(), vec![40.0]);

    // Touching 1 and returning is not a crossing.
    assert!(find_crossovers(&domain, &[2.0, 1.0, 2.0, 3.0]).unwrap().is_empty());

    // All ties.
    assert!(find_crossovers(&domain, &[1.0; 4]).unwrap().is_empty());
}

#[test]
fn reports_every_flip_in_order() {
    let domain = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
    let ratios = [2.0, 0.5, 0.5, 3.0, 0.1, 0.1];
    assert_eq!(find_crossover_indices(&ratios), vec![1, 3, 4]);
    assert_eq!(find_crossovers(&domain, &ratios).unwrap(), vec![2.0, 4.0, 5.0]);
}

#[test]
fn length_mismatch_is_rejected() {
    assert!(find_crossovers(&[1.0, 2.0], &[2.0]).is_err());
}

#[test]
fn scan_is_idempotent() {
    let xs = logspace(-8.0, 0.0, 1000);
    let ratios: Vec<f64> = xs.iter().map(|&x| precision_ratio(x)).collect();
    let a = find_crossovers(&xs, &ratios).unwrap();
    let b = find_crossovers(&xs, &ratios).unwrap();
    assert_eq!(a, b);
}
