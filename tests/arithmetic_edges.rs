use calclog::ops::{ArithmeticOp, OperationError};
use rust_decimal::Decimal;

fn dec(text: &str) -> Decimal {
    text.parse().unwrap()
}

#[test]
fn division_by_zero_is_rejected() {
    assert_eq!(
        ArithmeticOp::Division.apply(dec("5"), Decimal::ZERO),
        Err(OperationError::DivisionByZero)
    );
}

#[test]
fn zeroth_root_is_rejected() {
    assert_eq!(
        ArithmeticOp::Root.apply(dec("9"), Decimal::ZERO),
        Err(OperationError::ZerothRoot)
    );
    // the degree guard applies before the radicand sign is inspected
    assert_eq!(
        ArithmeticOp::Root.apply(dec("-9"), Decimal::ZERO),
        Err(OperationError::ZerothRoot)
    );
}

#[test]
fn root_of_a_negative_number_is_rejected() {
    assert_eq!(
        ArithmeticOp::Root.apply(dec("-9"), dec("2")),
        Err(OperationError::RootOfNegative)
    );
}

#[test]
fn root_of_zero_with_a_negative_degree_is_rejected() {
    assert_eq!(
        ArithmeticOp::Root.apply(Decimal::ZERO, dec("-2")),
        Err(OperationError::ZeroToNegativePower)
    );
    // same expression through the power path fails identically
    assert_eq!(
        ArithmeticOp::Power.apply(Decimal::ZERO, dec("-2")),
        Err(OperationError::ZeroToNegativePower)
    );
    // neither zero radicands nor negative degrees are rejected on their own
    assert_eq!(
        ArithmeticOp::Root.apply(Decimal::ZERO, dec("3")),
        Ok(Decimal::ZERO)
    );
    assert_eq!(ArithmeticOp::Root.apply(dec("4"), dec("-2")), Ok(dec("0.5")));
}

#[test]
fn zero_to_a_negative_power_is_rejected() {
    assert_eq!(
        ArithmeticOp::Power.apply(Decimal::ZERO, dec("-2")),
        Err(OperationError::ZeroToNegativePower)
    );
    assert_eq!(
        ArithmeticOp::Power.apply(Decimal::ZERO, dec("-0.5")),
        Err(OperationError::ZeroToNegativePower)
    );
}

#[test]
fn zero_to_the_zeroth_power_is_one() {
    assert_eq!(
        ArithmeticOp::Power.apply(Decimal::ZERO, Decimal::ZERO),
        Ok(Decimal::ONE)
    );
}

#[test]
fn negative_integral_exponents_stay_exact() {
    assert_eq!(
        ArithmeticOp::Power.apply(dec("2"), dec("-2")),
        Ok(dec("0.25"))
    );
}

#[test]
fn fractional_power_of_a_negative_base_is_unrepresentable() {
    assert_eq!(
        ArithmeticOp::Power.apply(dec("-8"), dec("0.5")),
        Err(OperationError::Unrepresentable)
    );
}

#[test]
fn overflow_is_unrepresentable() {
    assert_eq!(
        ArithmeticOp::Addition.apply(Decimal::MAX, Decimal::MAX),
        Err(OperationError::Unrepresentable)
    );
    assert_eq!(
        ArithmeticOp::Subtraction.apply(Decimal::MIN, Decimal::MAX),
        Err(OperationError::Unrepresentable)
    );
    assert_eq!(
        ArithmeticOp::Multiplication.apply(Decimal::MAX, dec("2")),
        Err(OperationError::Unrepresentable)
    );
    assert_eq!(
        ArithmeticOp::Power.apply(dec("10"), dec("30")),
        Err(OperationError::Unrepresentable)
    );
}
