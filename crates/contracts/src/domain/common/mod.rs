//! Common types and traits for all REST resources

pub mod form_field;
pub mod resource;

// Re-exports
pub use resource::{EntityId, ListSource, Resource, ResourceMessages};
