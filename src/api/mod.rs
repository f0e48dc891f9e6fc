pub mod billing_feed_dto;
pub mod report_config_dto;
pub mod snapshot_dto;
