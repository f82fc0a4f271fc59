//! Core numeric traits.
//!
//! Generic code in the model layer is written against [`Float`] so that
//! correlation and loading construction works for `f32` and `f64` alike.
//!
//! ## Important
//! Models are injected through generic parameters, not `Box<dyn Trait>`,
//! so every model/product pairing is checked at compile time.

/// Generic floating-point trait for numeric computations.
///
/// Re-export of `num_traits::Float`, implemented by `f64` and `f32`.
///
/// # Type Safety
/// All implementing types must support:
/// - Arithmetic operations (+, -, *, /)
/// - Comparisons (PartialOrd)
/// - Mathematical functions (exp, ln, sqrt, etc.)
/// - Copy and Clone semantics
///
/// # Examples
/// ```
/// use pricer_core::traits::Float;
///
/// fn compute_discount<T: Float>(rate: T, time: T) -> T {
///     (-rate * time).exp()
/// }
///
/// let discount_f64: f64 = compute_discount(0.05, 1.0);
/// assert!((discount_f64 - 0.951229).abs() < 1e-5);
/// ```
pub use num_traits::Float;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_float_trait_with_f64() {
        // Test that f64 satisfies Float trait
        fn generic_sqrt<T: Float>(x: T) -> T {
            x.sqrt()
        }

        let result = generic_sqrt(4.0_f64);
        assert_eq!(result, 2.0);
    }

    #[test]
    fn test_float_trait_arithmetic() {
        // Test arithmetic operations through Float trait
        fn generic_quadratic<T: Float>(a: T, b: T, c: T, x: T) -> T {
            a * x * x + b * x + c
        }

        let result = generic_quadratic(2.0_f64, 3.0, 1.0, 5.0);
        assert_eq!(result, 66.0); // 2*25 + 3*5 + 1 = 66
    }

    #[test]
    fn test_float_trait_mathematical_functions() {
        // Test mathematical functions
        fn generic_exp<T: Float>(x: T) -> T {
            x.exp()
        }

        let result = generic_exp(0.0_f64);
        assert_eq!(result, 1.0);

        let result2 = generic_exp(1.0_f64);
        assert!((result2 - std::f64::consts::E).abs() < 1e-10);
    }
}
