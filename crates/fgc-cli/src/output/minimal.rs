use serde_json::Value;

use super::scalar_text;

/// Print just the key answer: the covered amount of a simulation, or the
/// number of rows of a report.
pub fn print_minimal(value: &Value) {
    let result = value
        .as_object()
        .and_then(|m| m.get("result"))
        .unwrap_or(value);

    if let Some(covered) = result.get("covered_amount") {
        println!("{}", scalar_text(covered));
        return;
    }
    if let Some(count) = value.get("summary").and_then(|s| s.get("simulations")) {
        println!("{}", scalar_text(count));
        return;
    }
    println!("{}", scalar_text(result));
}
