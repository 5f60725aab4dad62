//! Read-only gaussian smoothing of a density field.
//!
//! Separable convolution: one 1-D pass along x, one along y.  The kernel is
//! truncated at 4σ (radius `round(4σ)`) and normalized; boundaries reflect
//! about the edge (`d c b a | a b c d | d c b a`), which keeps the field's
//! total mass unchanged.  Intended for display-side smoothing of path
//! density — the accumulated counts themselves are never mutated.

use crate::density::DensityField;

/// Return a smoothed copy of `field`.  `sigma <= 0` returns an unsmoothed
/// clone.
pub fn gaussian_blur(field: &DensityField, sigma: f64) -> DensityField {
    if sigma <= 0.0 || field.data.is_empty() {
        return field.clone();
    }

    let kernel = build_kernel(sigma);
    let width = field.width;
    let height = field.height;

    // Pass 1: along x.
    let mut horizontal = vec![0.0f64; width * height];
    for y in 0..height {
        for x in 0..width {
            horizontal[y * width + x] = convolve_at(
                |i| field.data[y * width + reflect(i, width)],
                x,
                &kernel,
            );
        }
    }

    // Pass 2: along y.
    let mut data = vec![0.0f64; width * height];
    for y in 0..height {
        for x in 0..width {
            data[y * width + x] = convolve_at(
                |i| horizontal[reflect(i, height) * width + x],
                y,
                &kernel,
            );
        }
    }

    DensityField { width, height, data }
}

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Normalized half-kernel-symmetric weights for offsets `-r..=r`.
fn build_kernel(sigma: f64) -> Vec<f64> {
    let radius = (4.0 * sigma + 0.5) as usize;
    let mut weights: Vec<f64> = (0..=2 * radius)
        .map(|i| {
            let d = i as f64 - radius as f64;
            (-0.5 * (d / sigma).powi(2)).exp()
        })
        .collect();
    let total: f64 = weights.iter().sum();
    for w in &mut weights {
        *w /= total;
    }
    weights
}

fn convolve_at(sample: impl Fn(isize) -> f64, center: usize, kernel: &[f64]) -> f64 {
    let radius = (kernel.len() / 2) as isize;
    kernel
        .iter()
        .enumerate()
        .map(|(k, &w)| w * sample(center as isize + k as isize - radius))
        .sum()
}

/// Reflect an index into `[0, n)` about the array edges.
fn reflect(mut i: isize, n: usize) -> usize {
    let n = n as isize;
    loop {
        if i < 0 {
            i = -i - 1;
        } else if i >= n {
            i = 2 * n - i - 1;
        } else {
            return i as usize;
        }
    }
}
