pub mod cloud_compute;
pub mod commands;
pub mod error;
pub mod fake;
pub mod models;
pub mod report;

pub mod test_utils;
