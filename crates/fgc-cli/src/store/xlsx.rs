use fgc_core::currency::SPREADSHEET_CURRENCY_FORMAT;
use fgc_core::report::{ReportStore, REPORT_HEADERS};
use fgc_core::{ApplicationType, FgcError, FgcResult, InstitutionType, Money, ReportRecord};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::{debug, info};
use umya_spreadsheet::structs::{HorizontalAlignmentValues, VerticalAlignmentValues};
use umya_spreadsheet::{Border, PatternValues, Spreadsheet, Worksheet};

const COLUMNS: [&str; 5] = ["A", "B", "C", "D", "E"];
const HEADER_FILL_ARGB: &str = "FFB7DEE8";
const COLUMN_WIDTH: f64 = 26.0;
/// Spreadsheet numbers are doubles; 15 significant digits survive a save and reload.
const MAX_EXACT_MANTISSA: u128 = 1_000_000_000_000_000;

/// Report store backed by a single-sheet `.xlsx` workbook.
///
/// Every save rewrites the whole workbook: header row, all data rows, then
/// styling.
#[derive(Debug, Clone)]
pub struct XlsxReportStore {
    path: PathBuf,
}

impl XlsxReportStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        XlsxReportStore { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn failure(&self, reason: impl std::fmt::Display) -> FgcError {
        FgcError::persistence(self.path.display().to_string(), reason)
    }

    fn read_rows(&self, sheet: &Worksheet) -> FgcResult<Vec<ReportRecord>> {
        let mut rows = Vec::new();
        for row in 2..=sheet.get_highest_row() {
            let cells: Vec<String> = COLUMNS
                .iter()
                .map(|col| sheet.get_value(format!("{col}{row}").as_str()).trim().to_string())
                .collect();
            if cells.iter().all(String::is_empty) {
                continue;
            }
            let record = parse_row(&cells)
                .map_err(|reason| self.failure(format!("row {row}: {reason}")))?;
            rows.push(record);
        }
        Ok(rows)
    }

    fn write_book(&self, records: &[ReportRecord]) -> FgcResult<()> {
        let mut book = umya_spreadsheet::new_file();
        let sheet = book
            .get_sheet_mut(&0)
            .ok_or_else(|| self.failure("new workbook has no sheet"))?;

        for (col, header) in COLUMNS.iter().zip(REPORT_HEADERS) {
            sheet.get_cell_mut(format!("{col}1").as_str()).set_value(header);
        }
        for (i, record) in records.iter().enumerate() {
            let row = i + 2;
            sheet
                .get_cell_mut(format!("A{row}").as_str())
                .set_value(record.application_type.label());
            sheet
                .get_cell_mut(format!("B{row}").as_str())
                .set_value(record.institution_type.label());
            let amounts = [record.amount, record.covered_amount, record.uncovered_amount];
            for (col, value) in COLUMNS[2..].iter().zip(amounts) {
                sheet
                    .get_cell_mut(format!("{col}{row}").as_str())
                    .set_value_number(money_to_f64(value));
            }
        }

        style_sheet(sheet, records.len());
        umya_spreadsheet::writer::xlsx::write(&book, &self.path).map_err(|e| self.failure(e))
    }
}

impl ReportStore for XlsxReportStore {
    fn load_existing(&self) -> FgcResult<Vec<ReportRecord>> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "no existing report, starting fresh");
            return Ok(Vec::new());
        }
        let book: Spreadsheet =
            umya_spreadsheet::reader::xlsx::read(&self.path).map_err(|e| self.failure(e))?;
        let sheet = book
            .get_sheet(&0)
            .ok_or_else(|| self.failure("workbook has no sheets"))?;
        let rows = self.read_rows(sheet)?;
        debug!(path = %self.path.display(), rows = rows.len(), "loaded existing report");
        Ok(rows)
    }

    fn append_and_save(&mut self, records: &[ReportRecord]) -> FgcResult<()> {
        for r in records {
            for value in [r.amount, r.covered_amount, r.uncovered_amount] {
                if !stored_exactly(value) {
                    return Err(self.failure(format!(
                        "{value} has more than 15 significant digits and cannot be stored exactly"
                    )));
                }
            }
        }
        let mut all = self.load_existing()?;
        all.extend_from_slice(records);
        self.write_book(&all)?;
        info!(
            path = %self.path.display(),
            appended = records.len(),
            total = all.len(),
            "report saved"
        );
        Ok(())
    }
}

fn style_sheet(sheet: &mut Worksheet, data_rows: usize) {
    for col in COLUMNS {
        sheet.get_column_dimension_mut(col).set_width(COLUMN_WIDTH);

        let style = sheet.get_style_mut(format!("{col}1").as_str());
        style.get_font_mut().set_bold(true);
        let fill = style.get_fill_mut().get_pattern_fill_mut();
        fill.set_pattern_type(PatternValues::Solid);
        fill.get_foreground_color_mut().set_argb(HEADER_FILL_ARGB);
        let align = style.get_alignment_mut();
        align.set_horizontal(HorizontalAlignmentValues::Center);
        align.set_vertical(VerticalAlignmentValues::Center);
    }

    for row in 2..data_rows + 2 {
        for col in &COLUMNS[2..] {
            let style = sheet.get_style_mut(format!("{col}{row}").as_str());
            style
                .get_number_format_mut()
                .set_format_code(SPREADSHEET_CURRENCY_FORMAT);
            style
                .get_alignment_mut()
                .set_horizontal(HorizontalAlignmentValues::Right);
            let borders = style.get_borders_mut();
            borders.get_left_border_mut().set_border_style(Border::BORDER_THIN);
            borders.get_right_border_mut().set_border_style(Border::BORDER_THIN);
            borders.get_top_border_mut().set_border_style(Border::BORDER_THIN);
            borders.get_bottom_border_mut().set_border_style(Border::BORDER_THIN);
        }
    }
}

fn stored_exactly(value: Money) -> bool {
    value.normalize().mantissa().unsigned_abs() < MAX_EXACT_MANTISSA
}

fn money_to_f64(value: Money) -> f64 {
    value.to_f64().unwrap_or_default()
}

fn parse_money(raw: &str) -> Result<Money, String> {
    Decimal::from_str(raw)
        .or_else(|_| Decimal::from_scientific(raw))
        .map(|d| d.normalize())
        .map_err(|_| format!("'{raw}' is not a number"))
}

fn parse_row(cells: &[String]) -> Result<ReportRecord, String> {
    let application_type = ApplicationType::from_str(&cells[0]).map_err(|e| e.to_string())?;
    let institution_type = InstitutionType::from_str(&cells[1]).map_err(|e| e.to_string())?;
    let amount = parse_money(&cells[2])?;
    let covered_amount = parse_money(&cells[3])?;
    let uncovered_amount = if cells[4].is_empty() {
        amount
            .checked_sub(covered_amount)
            .ok_or_else(|| format!("'{}' minus '{}' overflows", cells[2], cells[3]))?
            .max(Decimal::ZERO)
    } else {
        parse_money(&cells[4])?
    };
    Ok(ReportRecord {
        application_type,
        institution_type,
        amount,
        covered_amount,
        uncovered_amount,
    })
}
