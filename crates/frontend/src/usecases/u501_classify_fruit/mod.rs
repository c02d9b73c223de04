pub mod api;
pub mod state;
pub mod view;
