//! Integration tests for the elimination kernels and the blocked driver.

use pretty_assertions::assert_eq;
use proptest::prelude::*;
use sparsefact_core::prelude::*;
use std::str::FromStr;

/// Column-major `[[4, 2, 2], [2, 5, 3], [2, 3, 6]]`.
fn small_spd() -> Vec<f64> {
    vec![4.0, 2.0, 2.0, 2.0, 5.0, 3.0, 2.0, 3.0, 6.0]
}

#[test]
fn test_cholesky_trailing_update() {
    let mut data = small_spd();
    let l = [1.0, 0.5, 0.5];

    ApplyCholesky::invoke(&mut data, 3, 1, 3, &l);

    assert_eq!(data, vec![4.0, 2.0, 2.0, 2.0, 4.75, 2.75, 2.0, 3.0, 5.75]);
}

#[test]
fn test_ldl_trailing_update_scales_by_pivot() {
    let mut data = small_spd();
    let l = [1.0, 0.5, 0.5];

    ApplyLdl::invoke(&mut data, 3, 1, 3, &l, 0);

    assert_eq!(data, vec![4.0, 2.0, 2.0, 2.0, 4.0, 2.0, 2.0, 3.0, 5.0]);
}

#[test]
fn test_empty_range_is_noop() {
    let mut data = small_spd();
    ApplyCholesky::invoke(&mut data, 3, 2, 2, &[1.0, 1.0, 1.0]);
    ApplyLdl::invoke(&mut data, 3, 3, 1, &[1.0, 1.0, 1.0], 0);
    assert_eq!(data, small_spd());
}

#[test]
fn test_complex_cholesky_uses_conjugate() {
    let c = Complex64::new;
    // Hermitian 2x2 with off-diagonal 1 + i
    let mut data = vec![c(2.0, 0.0), c(1.0, 1.0), c(1.0, -1.0), c(3.0, 0.0)];
    let l = [c(1.0, 0.0), c(0.5, 0.5)];

    ApplyCholesky::invoke(&mut data, 2, 1, 2, &l);

    // 3 - (0.5 + 0.5i)(0.5 - 0.5i) = 2.5
    assert_eq!(data[3], c(2.5, 0.0));
    assert_eq!(data[2], c(1.0, -1.0));
}

#[test]
fn test_decimal_kernels_are_exact() {
    let d = |s: &str| BigDecimal::from_str(s).unwrap();
    let buffer = || -> Vec<BigDecimal> {
        ["4", "2", "2", "2", "5", "3", "2", "3", "6"].iter().map(|s| d(s)).collect()
    };
    let l = [d("1"), d("0.5"), d("0.5")];

    let mut cholesky = buffer();
    ApplyCholesky::invoke(&mut cholesky, 3, 1, 3, &l);
    assert_eq!(cholesky[4], d("4.75"));
    assert_eq!(cholesky[5], d("2.75"));
    assert_eq!(cholesky[8], d("5.75"));

    let mut ldl = buffer();
    ApplyLdl::invoke(&mut ldl, 3, 1, 3, &l, 0);
    assert_eq!(ldl[4], d("4"));
    assert_eq!(ldl[8], d("5"));
}

#[test]
fn test_ldl_pivot_read_before_update() {
    // The pivot sits inside the updated range; it must be read once beforehand
    let mut data = small_spd();
    let l = [0.5, 0.5, 0.5];
    let pivot = ApplyLdl::pivot_at(&data, 3, 1);
    assert_eq!(*pivot.pivot(), 5.0);

    ApplyLdl::invoke(&mut data, 3, 1, 3, &l, 1);

    // Column 1: 5 - 5 * 0.25, then column 2 still scales by the original 5
    assert_eq!(data[4], 3.75);
    assert_eq!(data[8], 4.75);
}

fn buffer(n: usize, seed: u64) -> Vec<f64> {
    (0..n * n)
        .map(|k| ((k as u64 * 2654435761 + seed) % 97) as f64 / 13.0 - 3.0)
        .collect()
}

proptest! {
    #[test]
    fn prop_blocking_never_changes_results(
        n in 1usize..40,
        first in 0usize..40,
        seed in 0u64..1000,
        parallel in any::<bool>(),
    ) {
        let first = first % n;
        let l: Vec<f64> = (0..n).map(|i| 1.0 / (1.0 + (i as f64) + seed as f64)).collect();

        let mut expected_cholesky = buffer(n, seed);
        ApplyCholesky::invoke(&mut expected_cholesky, n, first, n, &l);
        let mut expected_ldl = buffer(n, seed);
        ApplyLdl::invoke(&mut expected_ldl, n, first, n, &l, 0);

        for threshold in [1usize, 2, 128] {
            let config = KernelThresholds::builder()
                .cholesky(threshold)
                .ldl(threshold)
                .parallel(parallel)
                .build();
            let driver = BlockedElimination::new(config);

            let mut cholesky = buffer(n, seed);
            driver.cholesky(&mut cholesky, n, first, n, &l);
            prop_assert_eq!(&cholesky, &expected_cholesky);

            let mut ldl = buffer(n, seed);
            driver.ldl(&mut ldl, n, first, n, &l, 0);
            prop_assert_eq!(&ldl, &expected_ldl);
        }
    }
}
