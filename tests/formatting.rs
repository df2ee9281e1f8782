// ============================================================================
// Formatting Integration Tests
// Rendering verbs with width, precision and flags
// ============================================================================

use decimal_goalseek::prelude::*;

fn dec(s: &str) -> DecimalValue {
    s.parse().unwrap()
}

#[test]
fn test_default_verb() {
    assert_eq!(format!("{}", DecimalValue::from_cents(123)), "1.23");
    assert_eq!(format!("{}", DecimalValue::new(50)), "50.00");
    assert_eq!(format!("{}", DecimalValue::from_scaled(42, -2)), "4200");
    assert_eq!(format!("{}", DecimalValue::zero()), "0");
}

#[test]
fn test_plain_verb() {
    assert_eq!(DecimalValue::from_scaled(2345, -6).plain().to_string(), "2.345e+9");
    assert_eq!(DecimalValue::from_scaled(3, 9).plain().to_string(), "3e-9");
    assert_eq!(DecimalValue::from_cents(-808).plain().to_string(), "-8.08");
}

#[test]
fn test_precision_quantizes() {
    assert_eq!(format!("{:.2}", DecimalValue::new(5678)), "5678.00");
    assert_eq!(format!("{:.2}", DecimalValue::from_scaled(12, 4)), "0.00");
    assert_eq!(format!("{:.0}", dec("2.5")), "2");
    assert_eq!(format!("{:.0}", dec("3.5")), "4");
}

#[test]
fn test_width_and_alignment() {
    let third = DecimalValue::from_integer(7)
        .checked_div(&DecimalValue::from_integer(3))
        .unwrap();

    assert_eq!(format!("{:5.2}", third), " 2.33");
    assert_eq!(format!("{:<10.0}", DecimalValue::from_cents(-80808)), "-808      ");
    assert_eq!(format!("{:>8}", DecimalValue::from_cents(-123)), "   -1.23");
    assert_eq!(format!("{:08.2}", DecimalValue::from_cents(-123)), "-0001.23");
    assert_eq!(format!("{:+}", DecimalValue::from_cents(150)), "+1.50");
}

#[test]
fn test_percent_verb() {
    assert_eq!(format!("{:.2}", DecimalValue::permille(25).as_percent()), "2.50%");
    assert_eq!(format!("{:10.2}", DecimalValue::one().as_percent()), "    100.00%");
    assert_eq!(format!("{:.2}", DecimalValue::from_integer(1010).as_percent()), "101000.00%");
    assert_eq!(DecimalValue::basis_points(125).as_percent().to_string(), "1.2500%");
}

#[test]
fn test_undefined_renders_nan() {
    let nan = DecimalValue::one()
        .checked_div(&DecimalValue::zero())
        .unwrap_or_else(|_| DecimalValue::undefined());

    assert_eq!(nan.to_string(), "NaN");
    assert_eq!(nan.plain().to_string(), "NaN");
    assert_eq!(format!("{:>6.2}", nan), "   NaN");
}

#[test]
fn test_rounded_results_render_at_their_precision() {
    let (x, found) = goal_seek(
        DecimalValue::zero(),
        DecimalValue::from_integer(2),
        DecimalValue::from_integer(2),
        5,
        |x: &DecimalValue| x * x,
    );

    assert!(found);
    assert_eq!(x.to_string(), "1.4142");
    assert_eq!(format!("{:.2}", x), "1.41");
}
