//! Wire types shared between the Fruit Checker web client and its REST backend.
//!
//! Nothing in this crate touches the browser, so everything here is testable on
//! the host with a plain `cargo test`.

pub mod domain;
pub mod shared;
pub mod system;
pub mod usecases;
