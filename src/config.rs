use chrono::NaiveDate;

use crate::api::report_config_dto::ReportConfigDto;
use crate::domain::billing::csv_format::{CsvLineFormat, SEPARATOR};
use crate::domain::billing::utils::id::ServiceBaseName;
use crate::error::{Error, Result};

/// Validated settings of one report run.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportConfig {
    pub service_base_name: ServiceBaseName,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
    pub delimiter: char,
    pub currency: Option<String>,
}

impl ReportConfig {
    pub fn new(service_base_name: impl Into<String>) -> Result<Self> {
        ReportConfig::try_from(ReportConfigDto { service_base_name: Some(service_base_name.into()), ..ReportConfigDto::default() })
    }

    pub fn line_format(&self) -> Result<CsvLineFormat> {
        CsvLineFormat::new(self.delimiter)
    }
}

/// Fills every key that is set in `overrides` into `base`.
pub fn merge(base: ReportConfigDto, overrides: ReportConfigDto) -> ReportConfigDto {
    ReportConfigDto {
        service_base_name: overrides.service_base_name.or(base.service_base_name),
        from: overrides.from.or(base.from),
        to: overrides.to.or(base.to),
        delimiter: overrides.delimiter.or(base.delimiter),
        currency: overrides.currency.or(base.currency),
    }
}

pub fn parse_date(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|source| Error::InvalidDate { value: value.to_string(), source })
}

fn parse_optional_date(value: Option<String>) -> Result<Option<NaiveDate>> {
    match value.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(date) => parse_date(date).map(Some),
    }
}

impl TryFrom<ReportConfigDto> for ReportConfig {
    type Error = Error;

    fn try_from(dto: ReportConfigDto) -> Result<Self> {
        let service_base_name = dto
            .service_base_name
            .filter(|sbn| !sbn.trim().is_empty())
            .ok_or_else(|| Error::InvalidConfig("serviceBaseName is required".to_string()))?;

        let from = parse_optional_date(dto.from)?;
        let to = parse_optional_date(dto.to)?;
        if let (Some(from), Some(to)) = (from, to) {
            if from > to {
                return Err(Error::InvalidConfig(format!("reporting period starts ({}) after it ends ({})", from, to)));
            }
        }

        let delimiter = dto.delimiter.unwrap_or(SEPARATOR);
        // Rejects delimiters the CSV writer cannot use.
        CsvLineFormat::new(delimiter)?;

        Ok(ReportConfig {
            service_base_name: ServiceBaseName::new(service_base_name),
            from,
            to,
            delimiter,
            currency: dto.currency.filter(|c| !c.trim().is_empty()),
        })
    }
}
