//! Generic list/dialog machinery for REST resources.
//!
//! A screen is a [`CrudListViewModel`] over a [`contracts::domain::common::Resource`]
//! plus the columns and form fields specific to that resource.

pub mod api;
pub mod state;
pub mod view;
pub mod view_model;

pub use state::{CrudListState, DialogMode, HttpMethod, Mutation, RowKey};
pub use view::{CrudDialog, CrudPageHeader, CrudTableBody, RowActions};
pub use view_model::CrudListViewModel;
