pub mod api_error;
pub mod api_utils;
pub mod config;
pub mod file_utils;
pub mod icons;
