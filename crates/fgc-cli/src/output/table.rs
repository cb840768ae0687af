use fgc_core::currency::format_currency;
use rust_decimal::Decimal;
use serde_json::{Map, Value};
use std::str::FromStr;
use tabled::{builder::Builder, Table};

use super::{scalar_text, MONEY_FIELDS};

/// Format output as tables using the tabled crate.
pub fn print_table(value: &Value, symbol: &str) {
    let Value::Object(map) = value else {
        println!("{}", scalar_text(value));
        return;
    };

    if let Some(Value::Object(result)) = map.get("result") {
        println!("{}", field_table(result, symbol));
        print_envelope_notes(map);
    } else if let Some(Value::Array(rows)) = map.get("results") {
        println!("{}", rows_table(rows, symbol));
        if let Some(Value::Object(summary)) = map.get("summary") {
            println!("\n{}", field_table(summary, symbol));
        }
        if let Some(Value::String(source)) = map.get("source") {
            println!("\nSource: {}", source);
        }
    } else {
        println!("{}", field_table(map, symbol));
    }
}

fn print_envelope_notes(envelope: &Map<String, Value>) {
    if let Some(Value::Array(warnings)) = envelope.get("warnings") {
        if !warnings.is_empty() {
            println!("\nWarnings:");
            for w in warnings.iter().filter_map(Value::as_str) {
                println!("  - {}", w);
            }
        }
    }

    if let Some(Value::String(meth)) = envelope.get("methodology") {
        println!("\nMethodology: {}", meth);
    }

    if let Some(Value::String(path)) = envelope.get("exported_to") {
        println!("Simulation saved to '{}'", path);
    }
}

fn field_table(map: &Map<String, Value>, symbol: &str) -> Table {
    let mut builder = Builder::default();
    builder.push_record(["Field", "Value"]);
    for (key, val) in map {
        builder.push_record([key.clone(), display_value(key, val, symbol)]);
    }
    builder.build()
}

fn rows_table(rows: &[Value], symbol: &str) -> String {
    let Some(Value::Object(first)) = rows.first() else {
        return "(empty)".to_string();
    };
    let headers: Vec<String> = first.keys().cloned().collect();
    let mut builder = Builder::default();
    builder.push_record(headers.clone());
    for row in rows {
        let cells: Vec<String> = headers
            .iter()
            .map(|h| {
                row.get(h.as_str())
                    .map(|v| display_value(h, v, symbol))
                    .unwrap_or_default()
            })
            .collect();
        builder.push_record(cells);
    }
    builder.build().to_string()
}

/// Money fields become `R$ 1,234.56`; everything else prints as-is.
fn display_value(key: &str, value: &Value, symbol: &str) -> String {
    if MONEY_FIELDS.contains(&key) {
        let raw = scalar_text(value);
        if let Ok(amount) = Decimal::from_str(&raw) {
            return format_currency(amount, symbol);
        }
    }
    scalar_text(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_money_fields_formatted() {
        assert_eq!(
            display_value("covered_amount", &json!("250000"), "R$"),
            "R$ 250,000.00"
        );
        assert_eq!(display_value("coverage_ratio", &json!("0.833333"), "R$"), "0.833333");
        assert_eq!(display_value("simulations", &json!(3), "R$"), "3");
    }

    #[test]
    fn test_empty_rows() {
        assert_eq!(rows_table(&[], "R$"), "(empty)");
    }

    #[test]
    fn test_rows_table_contains_values() {
        let rows = vec![json!({"application_type": "CDB", "amount": "300000"})];
        let text = rows_table(&rows, "R$");
        assert!(text.contains("CDB"));
        assert!(text.contains("R$ 300,000.00"));
    }
}
