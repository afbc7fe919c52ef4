//! Tests for money types

use proptest::prelude::*;
use rust_decimal_macros::dec;

use core_kernel::{Currency, Money, MoneyError};

#[test]
fn test_zero_is_zero() {
    assert!(Money::zero(Currency::EUR).is_zero());
    assert!(!Money::new(dec!(0.01), Currency::EUR).is_zero());
}

#[test]
fn test_negative_amounts() {
    let refund = Money::new(dec!(-50.00), Currency::USD);
    assert!(refund.is_negative());
    assert!(!Money::zero(Currency::USD).is_negative());
}

#[test]
fn test_add_and_sub_same_currency() {
    let a = Money::new(dec!(120.50), Currency::USD);
    let b = Money::new(dec!(29.50), Currency::USD);

    assert_eq!(a + b, Money::new(dec!(150.00), Currency::USD));
    assert_eq!(a - b, Money::new(dec!(91.00), Currency::USD));
}

#[test]
fn test_sum_rejects_mixed_currencies() {
    let amounts = vec![
        Money::new(dec!(100), Currency::USD),
        Money::new(dec!(100), Currency::EUR),
    ];
    assert!(matches!(
        Money::sum(&amounts, Currency::USD),
        Err(MoneyError::CurrencyMismatch(_, _))
    ));
}

#[test]
fn test_sum_of_empty_iterator_is_zero() {
    let total = Money::sum(&[], Currency::GBP).unwrap();
    assert_eq!(total, Money::zero(Currency::GBP));
}

#[test]
fn test_serde_round_trip() {
    let m = Money::new(dec!(99.99), Currency::CAD);
    let json = serde_json::to_string(&m).unwrap();
    let back: Money = serde_json::from_str(&json).unwrap();
    assert_eq!(m, back);
    assert!(json.contains("\"CAD\""));
}

proptest! {
    #[test]
    fn prop_checked_add_is_commutative(a in -1_000_000i64..1_000_000, b in -1_000_000i64..1_000_000) {
        let x = Money::from_minor(a, Currency::USD);
        let y = Money::from_minor(b, Currency::USD);
        prop_assert_eq!(x.checked_add(&y).unwrap(), y.checked_add(&x).unwrap());
    }

    #[test]
    fn prop_from_minor_preserves_value(minor in -1_000_000i64..1_000_000) {
        let m = Money::from_minor(minor, Currency::USD);
        let cents = m.amount() * rust_decimal::Decimal::new(100, 0);
        prop_assert_eq!(cents, rust_decimal::Decimal::new(minor, 0));
    }
}
