//! Scaled vector addition.

use crate::core::types::Element;

/// `y[i] += alpha * x[i]` for every `i` in `first..limit`.
///
/// # Panics
///
/// Panics if either slice is shorter than `limit`.
#[inline]
pub fn axpy<T: Element>(y: &mut [T], alpha: &T, x: &[T], first: usize, limit: usize) {
    for (yi, xi) in y[first..limit].iter_mut().zip(&x[first..limit]) {
        *yi = yi.clone() + alpha.clone() * xi.clone();
    }
}
