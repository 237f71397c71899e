//! Property tests for the arithmetic service.

use proptest::prelude::*;

use calculator::{CalcError, Calculator};

/// Distance from `x` to the next representable double away from zero.
fn ulp(x: f64) -> f64 {
    let x = x.abs();
    f64::from_bits(x.to_bits() + 1) - x
}

proptest! {
    #[test]
    fn add_is_commutative(a in any::<i32>(), b in any::<i32>()) {
        let calc = Calculator::new();
        prop_assert_eq!(calc.add(a, b), calc.add(b, a));
    }

    #[test]
    fn subtract_inverts_add(a in any::<i32>(), b in any::<i32>()) {
        // Exact even across overflow, since both operations wrap.
        let calc = Calculator::new();
        prop_assert_eq!(calc.subtract(calc.add(a, b), b), a);
    }

    #[test]
    fn multiply_is_commutative(a in any::<i32>(), b in any::<i32>()) {
        let calc = Calculator::new();
        prop_assert_eq!(calc.multiply(a, b), calc.multiply(b, a));
    }

    #[test]
    fn divide_round_trips_within_one_ulp(
        a in any::<i32>(),
        b in any::<i32>().prop_filter("non-zero divisor", |b| *b != 0),
    ) {
        let calc = Calculator::new();
        let quotient = calc.divide(a, b).unwrap();
        let back = quotient * f64::from(b);
        let a = f64::from(a);
        if a == 0.0 {
            prop_assert_eq!(back, 0.0);
        } else {
            prop_assert!(
                (back - a).abs() <= ulp(a),
                "{} * {} = {} (expected {} within {})", quotient, b, back, a, ulp(a)
            );
        }
    }

    #[test]
    fn ulp_of_small_integers(n in 1..=(1i32 << 20)) {
        // Integers below 2^52 are spaced 1.0 apart at most.
        prop_assert!(ulp(f64::from(n)) <= 1.0);
        prop_assert!(ulp(f64::from(n)) > 0.0);
    }

    #[test]
    fn divide_by_zero_always_fails(a in any::<i32>()) {
        let calc = Calculator::new();
        prop_assert_eq!(calc.divide(a, 0), Err(CalcError::DivisionByZero));
    }

    #[test]
    fn divide_matches_native_float_division(
        a in any::<i32>(),
        b in any::<i32>().prop_filter("non-zero divisor", |b| *b != 0),
    ) {
        let calc = Calculator::new();
        prop_assert_eq!(calc.divide(a, b), Ok(a as f64 / b as f64));
    }
}
