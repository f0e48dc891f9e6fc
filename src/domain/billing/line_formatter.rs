use chrono::NaiveDate;

use crate::domain::billing::csv_format::{CsvLineFormat, LineFormat};
use crate::domain::billing::report_line::BillingReportLine;
use crate::domain::billing::utils::id::ServiceBaseName;
use crate::error::Result;

pub const REPORT_HEADERS: [&str; 7] = ["ID", "User", "Project", "Resource Type", "Shape", "Product", "Cost"];

const ISO_DATE: &str = "%Y-%m-%d";

/// Renders report pieces as delimited text lines.
///
/// Absent values become empty cells. Escaping is left to the [`LineFormat`].
#[derive(Debug, Clone, Default)]
pub struct LineFormatter<F: LineFormat = CsvLineFormat> {
    format: F,
}

impl<F: LineFormat> LineFormatter<F> {
    pub fn new(format: F) -> Self {
        LineFormatter { format }
    }

    /// Single quoted cell naming the deployment and the reporting period.
    pub fn first_line(&self, sbn: &ServiceBaseName, from: Option<NaiveDate>, to: Option<NaiveDate>) -> Result<String> {
        let summary = format!("Service base name: {}. Available reporting period from: {} to: {}", sbn, iso_or_empty(from), iso_or_empty(to));
        self.format.format_quoted_line(&[summary])
    }

    pub fn header(&self) -> Result<String> {
        let headers: Vec<String> = REPORT_HEADERS.iter().map(|h| h.to_string()).collect();
        self.format.format_line(&headers)
    }

    pub fn print_line(&self, line: &BillingReportLine) -> Result<String> {
        let fields = vec![
            line.resource_id.to_string(),
            line.user.clone(),
            line.project.clone(),
            line.resource_type.name().to_string(),
            line.shape.clone().unwrap_or_default(),
            line.product.clone().unwrap_or_default(),
            line.cost.map(format_decimal).unwrap_or_default(),
        ];
        self.format.format_line(&fields)
    }

    /// Empty cells under every column but the last, which holds `Total: {value} {currency}`.
    pub fn total_line(&self, total: Option<f64>, currency: Option<&str>) -> Result<String> {
        let mut fields = vec![String::new(); REPORT_HEADERS.len() - 1];
        fields.push(format!("Total: {} {}", total.map(format_decimal).unwrap_or_default(), currency.unwrap_or_default()));
        self.format.format_line(&fields)
    }
}

fn iso_or_empty(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format(ISO_DATE).to_string()).unwrap_or_default()
}

/// Whole amounts keep one decimal place (`3.0`), everything else prints in
/// its shortest exact form without exponent.
pub fn format_decimal(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{:.1}", value)
    } else {
        format!("{}", value)
    }
}
