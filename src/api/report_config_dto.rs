use serde::Deserialize;

/// Report settings as stored in a JSON config file. Every key is optional so
/// command line flags can fill the gaps.
#[derive(Debug, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct ReportConfigDto {
    pub service_base_name: Option<String>,
    /// `YYYY-MM-DD`
    pub from: Option<String>,
    /// `YYYY-MM-DD`
    pub to: Option<String>,
    pub delimiter: Option<char>,
    /// Used when the billing feed does not name a currency.
    pub currency: Option<String>,
}
