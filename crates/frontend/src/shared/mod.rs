pub mod api_error;
pub mod api_utils;
pub mod components;
pub mod config;
pub mod confirm;
pub mod crud;
pub mod date_utils;
pub mod icons;
pub mod modal;
pub mod notification;
pub mod page_frame;
pub mod page_standard;
