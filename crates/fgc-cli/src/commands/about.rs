use fgc_core::about::about_text;
use fgc_core::currency::format_currency;
use fgc_core::{ApplicationType, InstitutionType};

use crate::settings::Settings;

/// Print the guarantee fund explanation and the accepted selections.
pub fn run_about(settings: &Settings) {
    println!("{}\n", about_text(&settings.coverage));

    let institutions: Vec<String> = InstitutionType::ALL
        .iter()
        .map(|t| format!("{} ({})", t.name(), t.label()))
        .collect();
    let applications: Vec<String> = ApplicationType::ALL
        .iter()
        .map(|t| format!("{} ({})", t.name(), t.label()))
        .collect();

    println!("Institution types: {}", institutions.join(", "));
    println!("Application types: {}", applications.join(", "));
    println!(
        "Configured ceiling: {}",
        format_currency(settings.coverage.coverage_ceiling, &settings.coverage.currency_symbol)
    );
}
