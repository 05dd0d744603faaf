pub mod api_error;
pub mod api_utils;
pub mod components;
pub mod config;
pub mod export;
pub mod http;
pub mod icons;
pub mod number_format;
pub mod univer;
