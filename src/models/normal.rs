//! Standard normal distribution primitives
//!
//! Both functions are pure and total over finite inputs; NaN propagates.
//! The CDF goes through statrs, whose erfc-based evaluation is stable for
//! large |x| where a naive series expansion would not be.

use statrs::distribution::{ContinuousCDF, Normal};
use std::f64::consts::PI;

/// Standard normal CDF
pub fn norm_cdf(x: f64) -> f64 {
    let normal = Normal::new(0.0, 1.0).unwrap();
    normal.cdf(x)
}

/// Standard normal PDF
pub fn norm_pdf(x: f64) -> f64 {
    (-0.5 * x * x).exp() / (2.0 * PI).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;
    use statrs::distribution::Continuous;

    #[test]
    fn test_norm_cdf() {
        assert!((norm_cdf(0.0) - 0.5).abs() < 1e-12);
        assert!((norm_cdf(1.0) - 0.8413447460685429).abs() < 1e-10);
        assert!((norm_cdf(1.96) - 0.9750021048517796).abs() < 1e-10);
        assert!((norm_cdf(-2.5) - 0.006209665325776159).abs() < 1e-10);
    }

    #[test]
    fn test_norm_cdf_symmetry() {
        for x in [0.3, 1.7, 4.2, 9.5] {
            assert!((norm_cdf(x) + norm_cdf(-x) - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn test_norm_cdf_tails() {
        // Stable in the tails of the practical d1/d2 range
        assert!(norm_cdf(-10.0) >= 0.0);
        assert!(norm_cdf(-10.0) < 1e-20);
        assert!(norm_cdf(10.0) > 1.0 - 1e-20);
    }

    #[test]
    fn test_norm_pdf() {
        assert!((norm_pdf(0.0) - 0.3989422804014327).abs() < 1e-12);
        assert!((norm_pdf(1.0) - 0.24197072451914337).abs() < 1e-12);
        // symmetric
        assert_eq!(norm_pdf(1.3), norm_pdf(-1.3));
        // underflows to zero for large |x|
        assert_eq!(norm_pdf(-60.0), 0.0);
    }

    #[test]
    fn test_nan_propagates() {
        assert!(norm_cdf(f64::NAN).is_nan());
        assert!(norm_pdf(f64::NAN).is_nan());
    }

    #[test]
    fn test_pdf_matches_statrs() {
        let normal = Normal::new(0.0, 1.0).unwrap();
        for x in [-3.0, -0.5, 0.0, 0.5, 3.0] {
            assert!((norm_pdf(x) - normal.pdf(x)).abs() < 1e-14);
        }
    }
}
