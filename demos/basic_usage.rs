// ============================================================================
// Basic Usage Example
// ============================================================================

use binary_calculator::prelude::*;
use std::sync::Arc;

fn main() {
    println!("=== Binary Calculator Example ===\n");

    // Engine calls
    println!("101 + 11   = {}", add("101", "11").unwrap());
    println!("11 - 101   = {}", subtract("11", "101").unwrap());
    println!("1 << 3     = {}", left_shift("1", 3).unwrap());
    println!("NOT 101    = {}", bitwise_not("101").unwrap());
    match divide("101", "0") {
        Ok(result) => println!("101 ÷ 0    = {}", result),
        Err(e) => println!("101 ÷ 0    -> {}", e),
    }

    println!("\nConverting 255:");
    for (radix, rendered) in convert_from_decimal(255).iter() {
        println!("  {:<12} {}", radix, rendered);
    }

    // A keypad session with a recording handler
    let handler = Arc::new(RecordingEventHandler::new());
    let mut calc = CalculatorBuilder::new()
        .prefers_dark(true)
        .initial_mode(CalculatorMode::Bitwise)
        .build(handler.clone());

    println!("\nSession in {} mode, {} theme", calc.mode(), calc.theme());

    for digit in [Bit::One, Bit::One, Bit::Zero, Bit::Zero] {
        calc.press_digit(digit);
    }
    calc.select_operation(Operation::Xor);
    if let Some(pending) = calc.state().pending_expression() {
        println!("Pending: {}", pending);
    }
    for digit in [Bit::One, Bit::Zero, Bit::One, Bit::Zero] {
        calc.press_digit(digit);
    }
    calc.equals();
    println!("Result:  {}", calc.display());

    calc.change_mode(CalculatorMode::Conversion);
    calc.set_conversion_input("1A3F");
    calc.select_conversion_base(Radix::Hexadecimal);
    calc.convert();
    if let Some(Ok(record)) = &calc.conversion().result {
        println!("\n1A3F (hex) = {} (dec) = {} (bin)", record.decimal, record.binary);
    }

    calc.toggle_theme();

    println!("\n=== {} events recorded ===", handler.len());
    for event in handler.events() {
        println!("{:?}", event);
    }
}
