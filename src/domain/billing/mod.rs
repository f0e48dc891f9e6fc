pub mod billing_feed;
pub mod csv_format;
pub mod data_engine;
pub mod entity;
pub mod identity;
pub mod line_formatter;
pub mod reconciliation;
pub mod report;
pub mod report_line;
pub mod report_line_builder;
pub mod resource_type;
pub mod status;
pub mod utils;
