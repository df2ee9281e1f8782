// ============================================================================
// Goal Seek Usage Example
// ============================================================================

use decimal_goalseek::prelude::*;
use std::sync::Arc;

fn main() {
    println!("=== Decimal Goal Seek Example ===\n");

    // Decimal arithmetic keeps scales and never touches floating point
    let price = DecimalValue::new(1250);
    let tax = DecimalValue::percent(27);
    let gross = &price + &(&price * &tax);
    println!("Net {} + {} tax = {}", price, tax.as_percent(), gross);
    println!("Gross to 2 places: {:.2}", gross);

    let third = DecimalValue::one()
        .checked_div(&DecimalValue::from_integer(3))
        .unwrap_or_default();
    println!("1/3 = {}", third);
    println!("1/3 to 3 significant figures: {}\n", third.round(3, RoundingMode::NearestEven));

    // Which monthly rate pays off 10000 in 24 installments of 470?
    let principal = DecimalValue::new(10_000);
    let installment = DecimalValue::new(470);
    let payment = move |rate: &DecimalValue| {
        // principal * r / (1 - (1 + r)^-24)
        let discount = rate.add_int(1).pow_int(24);
        let annuity = (&discount - &DecimalValue::one())
            .checked_div(&(&discount * rate))
            .unwrap_or_else(|_| DecimalValue::undefined());
        principal
            .checked_div(&annuity)
            .unwrap_or_else(|_| DecimalValue::undefined())
    };

    let solver = EquationSolverBuilder::new()
        .rounding(RoundingMode::NearestAway)
        .event_handler(Arc::new(LoggingEventHandler))
        .build()
        .unwrap_or_default();

    let solution = solver.solve(
        DecimalValue::basis_points(1),
        DecimalValue::percent(10),
        installment,
        4,
        payment,
    );
    println!(
        "Monthly rate: {:.4} ({:?}, {} evaluations)",
        solution.value.as_percent(),
        solution.status,
        solution.evaluations
    );

    // Searching outwards from a guess when no domain is known
    let (x, found) = goal_seek_from(
        DecimalValue::new(1),
        DecimalValue::from_integer(11),
        2,
        |x: &DecimalValue| (x * x).add_int(2),
    );
    println!("x^2 + 2 = 11 from 1.00: {} (found: {})", x, found);

    let (x, found) = goal_seek_from(DecimalValue::new(1), DecimalValue::from_integer(-1), 3, |x: &DecimalValue| x * x);
    println!("x^2 = -1 from 1.00: {} (found: {})", x, found);

    println!("\n=== Example Complete ===");
}
