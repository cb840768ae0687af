use crate::config::CoverageConfig;
use crate::currency::format_currency;

/// Short explanation of the deposit guarantee fund, using the configured ceiling.
pub fn about_text(config: &CoverageConfig) -> String {
    format!(
        "What is the FGC?\n\
         The Fundo Garantidor de Créditos (FGC) protects part of the money that \
         individuals and companies hold at financial institutions if the \
         institution fails.\n\n\
         Who is covered?\n\
         - Individuals and companies holding covered products.\n\n\
         Covered products:\n\
         - CDB, LCI, LCA, savings and current accounts, among others.\n\n\
         Coverage limit:\n\
         - Up to {} per CPF/CNPJ per financial institution.",
        format_currency(config.coverage_ceiling, &config.currency_symbol)
    )
}
