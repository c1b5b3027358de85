//! Radiation patterns of line sources and antenna arrays
//!
//! Patterns are evaluated in the normalized wavenumber domain
//! beta = cos(theta) (the "spectral" domain of the aperture), where a
//! continuous line source has the sinc closed form and a uniform array the
//! Dirichlet closed form. Everything is normalized: lengths and spacings
//! are in wavelengths, the pattern peak is 1 (0 dB).

use ndarray::Array2;

use crate::error::{DspError, Result};

/// Normalized sinc, sin(pi x) / (pi x)
pub fn sinc(x: f64) -> f64 {
    if x == 0.0 {
        return 1.0;
    }
    let arg = std::f64::consts::PI * x;
    arg.sin() / arg
}

/// Dirichlet kernel (periodic sinc): sin(n x / 2) / (n sin(x / 2))
///
/// `n` is the number of array elements and must be >= 1; at multiples of
/// 2*pi the kernel attains its extremal values +-1 (sign alternating with
/// the period index for even `n`).
///
/// # Panics
/// Panics if `n == 0`.
pub fn diric(x: f64, n: usize) -> f64 {
    assert!(n > 0, "Dirichlet kernel needs at least one element");

    let half = x / 2.0;
    let denom = half.sin();
    if denom.abs() < 1e-12 {
        // At x = 2*pi*k the limit is cos(pi k (n-1)) = (-1)^(k (n-1))
        let k = (x / (2.0 * std::f64::consts::PI)).round() as i64;
        return if (k * (n as i64 - 1)) % 2 == 0 { 1.0 } else { -1.0 };
    }
    (n as f64 * half).sin() / (n as f64 * denom)
}

/// Uniform grid of normalized wavenumbers [-span, span], inclusive
///
/// Spans beyond 1 show the invisible region next to the visible one.
pub fn wavenumber_axis(span: f64, points: usize) -> Result<Vec<f64>> {
    if !(span > 0.0) {
        return Err(DspError::invalid("span", "wavenumber span must be > 0"));
    }
    if points < 2 {
        return Err(DspError::invalid("points", "axis needs at least two points"));
    }

    let step = 2.0 * span / (points - 1) as f64;
    Ok((0..points).map(|i| -span + i as f64 * step).collect())
}

/// Space factor of a uniform continuous line source
///
/// # Arguments
/// * `length` - Source length in wavelengths (> 0)
/// * `beta` - Normalized wavenumbers to evaluate at
///
/// # Returns
/// Linear pattern values, peak 1 at broadside
pub fn line_source_pattern(length: f64, beta: &[f64]) -> Result<Vec<f64>> {
    if !(length > 0.0) {
        return Err(DspError::invalid("length", "source length must be > 0"));
    }
    Ok(beta.iter().map(|&b| sinc(length * b)).collect())
}

/// Convert a linear pattern to dB, clamped below at `floor_db`
pub fn pattern_db(pattern: &[f64], floor_db: f64) -> Vec<f64> {
    pattern
        .iter()
        .map(|&v| {
            if v == 0.0 {
                floor_db
            } else {
                (20.0 * v.abs().log10()).max(floor_db)
            }
        })
        .collect()
}

/// Restrict a pattern to the visible region |beta| <= 1 and map the axis to
/// the physical angle theta = acos(beta)
///
/// # Returns
/// Parallel vectors (theta in radians, pattern values), ordered along the
/// input axis
pub fn visible_region(beta: &[f64], pattern: &[f64]) -> Result<(Vec<f64>, Vec<f64>)> {
    if beta.len() != pattern.len() {
        return Err(DspError::invalid(
            "pattern",
            "axis and pattern lengths must match",
        ));
    }

    let mut theta = Vec::new();
    let mut values = Vec::new();
    for (&b, &v) in beta.iter().zip(pattern.iter()) {
        if b.abs() <= 1.0 {
            theta.push(b.acos());
            values.push(v);
        }
    }
    Ok((theta, values))
}

/// Uniform linear array of isotropic elements
#[derive(Debug, Clone)]
pub struct LinearArray {
    /// Number of elements
    elements: usize,

    /// Element spacing in wavelengths
    spacing: f64,

    /// Steering angle theta_0 in degrees; 90 is broadside
    steering_deg: f64,
}

impl LinearArray {
    /// Create a broadside array
    ///
    /// # Arguments
    /// * `elements` - Number of elements (>= 1)
    /// * `spacing` - Element spacing in wavelengths (> 0); spacings above
    ///   one half violate the Nyquist criterion and alias grating lobes
    ///   into the visible region
    pub fn new(elements: usize, spacing: f64) -> Result<Self> {
        if elements == 0 {
            return Err(DspError::invalid("elements", "array needs at least one element"));
        }
        if !(spacing > 0.0) {
            return Err(DspError::invalid("spacing", "element spacing must be > 0"));
        }
        Ok(Self {
            elements,
            spacing,
            steering_deg: 90.0,
        })
    }

    /// Steer the main beam to `theta0` degrees (measured from the array
    /// axis) by applying the progressive phase shift alpha = -cos(theta0)
    pub fn steered_to(mut self, theta0_deg: f64) -> Self {
        self.steering_deg = theta0_deg;
        self
    }

    /// Total array length in wavelengths
    pub fn length(&self) -> f64 {
        self.elements as f64 * self.spacing
    }

    /// Array factor over the normalized wavenumber axis, linear scale
    pub fn pattern(&self, beta: &[f64]) -> Vec<f64> {
        let alpha = -self.steering_deg.to_radians().cos();
        beta.iter()
            .map(|&b| {
                let psi = 2.0 * std::f64::consts::PI * (b + alpha) * self.spacing;
                diric(psi, self.elements)
            })
            .collect()
    }

    /// Array factor in dB, clamped at `floor_db`
    pub fn pattern_db(&self, beta: &[f64], floor_db: f64) -> Vec<f64> {
        pattern_db(&self.pattern(beta), floor_db)
    }
}

/// Rectangular planar array as a product of two linear arrays
#[derive(Debug, Clone)]
pub struct PlanarArray {
    /// Elements along x
    x_elements: usize,

    /// Elements along y
    y_elements: usize,

    /// Spacing along x in wavelengths
    dx: f64,

    /// Spacing along y in wavelengths
    dy: f64,

    /// Steering elevation theta_0 in degrees from broadside
    theta0_deg: f64,

    /// Steering azimuth phi_0 in degrees
    phi0_deg: f64,
}

impl PlanarArray {
    /// Create a broadside planar array on a rectangular grid
    pub fn new(x_elements: usize, y_elements: usize, dx: f64, dy: f64) -> Result<Self> {
        if x_elements == 0 || y_elements == 0 {
            return Err(DspError::invalid(
                "elements",
                "array needs at least one element per axis",
            ));
        }
        if !(dx > 0.0) || !(dy > 0.0) {
            return Err(DspError::invalid("spacing", "element spacing must be > 0"));
        }
        Ok(Self {
            x_elements,
            y_elements,
            dx,
            dy,
            theta0_deg: 0.0,
            phi0_deg: 0.0,
        })
    }

    /// Steer the beam to elevation `theta0` (from broadside) and azimuth
    /// `phi0`, both in degrees
    pub fn steered_to(mut self, theta0_deg: f64, phi0_deg: f64) -> Self {
        self.theta0_deg = theta0_deg;
        self.phi0_deg = phi0_deg;
        self
    }

    /// 2D array factor over the (beta_x, beta_y) grid
    ///
    /// # Returns
    /// Linear pattern with shape `(beta_y.len(), beta_x.len())`, the
    /// separable product of the two linear factors
    pub fn pattern(&self, beta_x: &[f64], beta_y: &[f64]) -> Array2<f64> {
        let theta0 = self.theta0_deg.to_radians();
        let phi0 = self.phi0_deg.to_radians();
        let alpha_x = -theta0.sin() * phi0.cos();
        let alpha_y = -theta0.sin() * phi0.sin();

        let af_x: Vec<f64> = beta_x
            .iter()
            .map(|&b| {
                let psi = 2.0 * std::f64::consts::PI * (b + alpha_x) * self.dx;
                diric(psi, self.x_elements)
            })
            .collect();
        let af_y: Vec<f64> = beta_y
            .iter()
            .map(|&b| {
                let psi = 2.0 * std::f64::consts::PI * (b + alpha_y) * self.dy;
                diric(psi, self.y_elements)
            })
            .collect();

        Array2::from_shape_fn((beta_y.len(), beta_x.len()), |(i, j)| af_y[i] * af_x[j])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn sinc_basics() {
        assert_eq!(sinc(0.0), 1.0);
        assert!(sinc(1.0).abs() < 1e-12);
        assert!(sinc(2.0).abs() < 1e-12);
        assert!((sinc(0.5) - 2.0 / PI).abs() < 1e-12);
    }

    #[test]
    fn diric_peaks_and_zeros() {
        // Unity at the origin for any element count
        for n in 1..8 {
            assert!((diric(0.0, n) - 1.0).abs() < 1e-12);
        }

        // First null of an n-element array at x = 2*pi/n
        let n = 8;
        assert!(diric(2.0 * PI / n as f64, n).abs() < 1e-12);

        // Periodic extremum at 2*pi: +1 for odd n, -1 for even n
        assert!((diric(2.0 * PI, 5) - 1.0).abs() < 1e-12);
        assert!((diric(2.0 * PI, 4) + 1.0).abs() < 1e-12);
    }

    #[test]
    fn diric_limit_matches_neighborhood() {
        let n = 6;
        let at_limit = diric(2.0 * PI, n);
        let nearby = diric(2.0 * PI + 1e-7, n);
        assert!((at_limit - nearby).abs() < 1e-5);
    }

    #[test]
    fn wavenumber_axis_is_symmetric_inclusive() {
        let beta = wavenumber_axis(3.0, 1201).unwrap();
        assert_eq!(beta.len(), 1201);
        assert!((beta[0] + 3.0).abs() < 1e-12);
        assert!((beta[1200] - 3.0).abs() < 1e-12);
        assert!(beta[600].abs() < 1e-12);
    }

    #[test]
    fn longer_sources_have_narrower_beams() {
        let beta = wavenumber_axis(1.0, 2001).unwrap();

        let half_power = |length: f64| {
            let pattern = line_source_pattern(length, &beta).unwrap();
            pattern.iter().filter(|v| v.abs() > 0.707).count()
        };

        assert!(half_power(10.0) < half_power(5.0));
        assert!(half_power(5.0) < half_power(2.0));
    }

    #[test]
    fn broadside_array_peaks_at_zero_db() {
        let array = LinearArray::new(12, 0.5).unwrap();
        let beta = wavenumber_axis(1.0, 801).unwrap();
        let db = array.pattern_db(&beta, -40.0);

        let max = db.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        assert!(max.abs() < 1e-9);

        // Peak sits at broadside (beta = 0)
        let peak_idx = db
            .iter()
            .enumerate()
            .max_by(|(_, a), (_, b)| a.partial_cmp(b).unwrap())
            .unwrap()
            .0;
        assert!(beta[peak_idx].abs() < 1e-9);
    }

    #[test]
    fn steering_moves_the_peak_to_cos_theta0() {
        let array = LinearArray::new(20, 0.5).unwrap().steered_to(45.0);
        let beta = wavenumber_axis(1.0, 4001).unwrap();
        let pattern = array.pattern(&beta);

        let peak_idx = pattern
            .iter()
            .map(|v| v.abs())
            .enumerate()
            .max_by(|(_, a), (_, b)| a.partial_cmp(b).unwrap())
            .unwrap()
            .0;

        // AF peaks where beta + alpha = 0, i.e. beta = cos(theta0)
        let expected = 45.0f64.to_radians().cos();
        assert!((beta[peak_idx] - expected).abs() < 1e-3);
    }

    #[test]
    fn wide_spacing_brings_grating_lobes_into_visible_region() {
        // Fixed 6-wavelength aperture: 12 elements meet the
        // half-wavelength criterion, 4 do not
        let beta = wavenumber_axis(1.0, 4001).unwrap();

        let nyquist = LinearArray::new(12, 0.5).unwrap();
        let sparse = LinearArray::new(4, 1.5).unwrap();

        let count_lobes = |pattern: &[f64]| {
            pattern
                .iter()
                .filter(|v| v.abs() > 0.99)
                .count()
        };

        assert!(count_lobes(&sparse.pattern(&beta)) > count_lobes(&nyquist.pattern(&beta)));
    }

    #[test]
    fn visible_region_maps_endpoints_to_poles() {
        let beta = wavenumber_axis(3.0, 13).unwrap();
        let pattern = vec![1.0; 13];
        let (theta, values) = visible_region(&beta, &pattern).unwrap();

        assert_eq!(theta.len(), values.len());
        assert!(theta.len() < beta.len());
        assert!((theta.first().unwrap() - PI).abs() < 1e-9);
        assert!(theta.last().unwrap().abs() < 1e-9);
    }

    #[test]
    fn planar_pattern_is_separable_product() {
        let array = PlanarArray::new(10, 5, 0.5, 0.5).unwrap();
        let beta_x = wavenumber_axis(1.0, 21).unwrap();
        let beta_y = wavenumber_axis(1.0, 11).unwrap();

        let grid = array.pattern(&beta_x, &beta_y);
        assert_eq!(grid.shape(), &[11, 21]);

        // Broadside peak at the grid center
        assert!((grid[[5, 10]] - 1.0).abs() < 1e-9);

        let x_cut = LinearArray::new(10, 0.5).unwrap().pattern(&beta_x);
        let y_cut = LinearArray::new(5, 0.5).unwrap().pattern(&beta_y);
        for (j, &fx) in x_cut.iter().enumerate() {
            for (i, &fy) in y_cut.iter().enumerate() {
                assert!((grid[[i, j]] - fx * fy).abs() < 1e-12);
            }
        }
    }

    #[test]
    fn pattern_db_clamps_at_floor() {
        let db = pattern_db(&[1.0, 0.1, 0.0], -30.0);
        assert!((db[0] - 0.0).abs() < 1e-12);
        assert!((db[1] + 20.0).abs() < 1e-9);
        assert_eq!(db[2], -30.0);
    }

    #[test]
    fn degenerate_geometry_is_rejected() {
        assert!(LinearArray::new(0, 0.5).is_err());
        assert!(LinearArray::new(8, 0.0).is_err());
        assert!(PlanarArray::new(0, 5, 0.5, 0.5).is_err());
        assert!(PlanarArray::new(4, 4, 0.5, -0.5).is_err());
        assert!(line_source_pattern(0.0, &[0.0]).is_err());
        assert!(wavenumber_axis(0.0, 100).is_err());
        assert!(wavenumber_axis(1.0, 1).is_err());
        assert!(visible_region(&[0.0, 0.5], &[1.0]).is_err());
    }
}
