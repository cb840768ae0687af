use colored::Colorize;
use fgc_core::chart::{ChartBar, GuaranteeChart};
use fgc_core::currency::format_currency;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

/// Width in terminal cells of a bar that reaches the top of the y-axis.
const BAR_WIDTH: usize = 40;

/// Render the covered/uncovered comparison as horizontal terminal bars.
pub fn render_chart(chart: &GuaranteeChart, symbol: &str) -> String {
    let label_width = chart
        .bars
        .iter()
        .map(|b| b.label.chars().count())
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    out.push_str(&format!("{}\n", chart.title.bold()));
    for bar in &chart.bars {
        let cells = bar_cells(chart, bar);
        let (r, g, b) = hex_to_rgb(&bar.color);
        out.push_str(&format!(
            "{:<width$} │{} {}\n",
            bar.label,
            "█".repeat(cells).truecolor(r, g, b),
            format_currency(bar.value, symbol),
            width = label_width,
        ));
    }
    out.push_str(&format!(
        "{:<width$} └ {} (axis max {})\n",
        "",
        chart.y_label,
        format_currency(chart.y_max, symbol),
        width = label_width,
    ));
    out
}

fn bar_cells(chart: &GuaranteeChart, bar: &ChartBar) -> usize {
    let scaled = chart.bar_fraction(bar) * Decimal::from(BAR_WIDTH);
    let cells = scaled.round().to_usize().unwrap_or(0);
    // Any non-zero amount gets at least one cell.
    if cells == 0 && bar.value > Decimal::ZERO {
        1
    } else {
        cells
    }
}

fn hex_to_rgb(hex: &str) -> (u8, u8, u8) {
    let digits = hex.trim_start_matches('#');
    let channel = |i: usize| {
        digits
            .get(i..i + 2)
            .and_then(|c| u8::from_str_radix(c, 16).ok())
            .unwrap_or(0)
    };
    (channel(0), channel(2), channel(4))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_hex_colours() {
        assert_eq!(hex_to_rgb("#4CAF50"), (0x4C, 0xAF, 0x50));
        assert_eq!(hex_to_rgb("F44336"), (0xF4, 0x43, 0x36));
        assert_eq!(hex_to_rgb("#xyz"), (0, 0, 0));
    }

    #[test]
    fn test_bar_lengths_follow_axis() {
        let chart = GuaranteeChart::from_amounts(dec!(300000), dec!(250000));
        // y_max = 330000
        assert_eq!(bar_cells(&chart, &chart.bars[0]), 30);
        assert_eq!(bar_cells(&chart, &chart.bars[1]), 6);
    }

    #[test]
    fn test_tiny_uncovered_part_still_visible() {
        let chart = GuaranteeChart::from_amounts(dec!(250000.01), dec!(250000));
        assert_eq!(bar_cells(&chart, &chart.bars[1]), 1);
    }

    #[test]
    fn test_render_contains_values() {
        let chart = GuaranteeChart::from_amounts(dec!(300000), dec!(250000));
        let text = render_chart(&chart, "R$");
        assert!(text.contains("Garantia FGC"));
        assert!(text.contains("R$ 250,000.00"));
        assert!(text.contains("R$ 50,000.00"));
    }
}
