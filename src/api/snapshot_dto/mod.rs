pub mod exploratory_dto;
pub mod infrastructure_dto;
pub mod snapshot_dto;
