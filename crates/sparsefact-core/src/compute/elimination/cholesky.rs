//! Cholesky-style panel update.

use super::{axpy, update_columns, PanelKernel};
use crate::{config::thresholds::KernelThresholds, core::types::Element};

/// Rank-1 trailing update of a Cholesky factorization step.
///
/// The multiplier vector is already normalized, so each column `j` is reduced
/// by `conj(l[j]) * l` over rows `j..structure`. Conjugation makes the update
/// Hermitian for complex panels and is a no-op otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ApplyCholesky;

impl ApplyCholesky {
    /// Default column threshold for splitting across tasks.
    pub const DEFAULT_THRESHOLD: usize = 128;

    /// Updates columns `[first_column, column_limit)` of `data` in place.
    ///
    /// `data` is column-major with leading dimension `structure`.
    ///
    /// # Panics
    ///
    /// Panics if a column lies outside `data` or `multipliers` is shorter
    /// than `structure`.
    ///
    /// # Example
    ///
    /// ```
    /// use sparsefact_core::compute::elimination::ApplyCholesky;
    ///
    /// // [[4, 2], [2, 5]] with l = [2, 1]
    /// let mut data = vec![4.0, 2.0, 2.0, 5.0];
    /// ApplyCholesky::invoke(&mut data, 2, 1, 2, &[2.0, 1.0]);
    /// assert_eq!(data[3], 4.0);
    /// ```
    pub fn invoke<T: Element>(
        data: &mut [T],
        structure: usize,
        first_column: usize,
        column_limit: usize,
        multipliers: &[T],
    ) {
        update_columns(&ApplyCholesky, data, structure, first_column, column_limit, multipliers);
    }
}

impl<T: Element> PanelKernel<T> for ApplyCholesky {
    fn threshold(&self, thresholds: &KernelThresholds) -> usize {
        thresholds.cholesky
    }

    #[inline]
    fn update_column(&self, column: &mut [T], j: usize, multipliers: &[T]) {
        let scale = -multipliers[j].conjugate();
        let structure = column.len();
        axpy(column, &scale, multipliers, j, structure);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::{BigDecimal, Complex64};
    use approx::assert_relative_eq;
    use std::str::FromStr;

    #[test]
    fn test_first_step_of_factorization() {
        // [[4, 2, 2], [2, 5, 3], [2, 3, 6]], column 0 normalized by sqrt(4)
        let mut data = vec![4.0, 2.0, 2.0, 2.0, 5.0, 3.0, 2.0, 3.0, 6.0];
        let l = [2.0, 1.0, 1.0];

        ApplyCholesky::invoke(&mut data, 3, 1, 3, &l);

        // Trailing Schur complement [[4, 2], [2, 5]], lower part only
        assert_relative_eq!(data[4], 4.0);
        assert_relative_eq!(data[5], 2.0);
        assert_relative_eq!(data[8], 5.0);
        // Rows above the diagonal of each column are untouched
        assert_eq!(data[3], 2.0);
        assert_eq!(data[6], 2.0);
        assert_eq!(data[7], 3.0);
    }

    #[test]
    fn test_empty_column_range() {
        let mut data = vec![1.0, 2.0, 3.0, 4.0];
        ApplyCholesky::invoke(&mut data, 2, 1, 1, &[1.0, 1.0]);
        assert_eq!(data, vec![1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn test_complex_update_is_hermitian() {
        // [[4, 1+i], [1-i, 3]] column-major
        let mut data = vec![
            Complex64::new(4.0, 0.0),
            Complex64::new(1.0, -1.0),
            Complex64::new(1.0, 1.0),
            Complex64::new(3.0, 0.0),
        ];
        let l = [Complex64::new(2.0, 0.0), Complex64::new(0.5, -0.5)];

        ApplyCholesky::invoke(&mut data, 2, 1, 2, &l);

        // 3 - |l[1]|^2 stays real
        assert_relative_eq!(data[3].re, 2.5);
        assert_relative_eq!(data[3].im, 0.0);
    }

    #[test]
    fn test_decimal_update() {
        let d = |s: &str| BigDecimal::from_str(s).unwrap();
        let mut data = vec![d("4"), d("2"), d("2"), d("5")];
        let l = [d("1"), d("0.5")];

        ApplyCholesky::invoke(&mut data, 2, 1, 2, &l);

        assert_eq!(data[3], d("4.75"));
        assert_eq!(data[2], d("2"));
    }

    #[test]
    fn test_threshold_lookup() {
        let thresholds = KernelThresholds::default();
        assert_eq!(
            PanelKernel::<f64>::threshold(&ApplyCholesky, &thresholds),
            ApplyCholesky::DEFAULT_THRESHOLD
        );
    }
}
