pub mod a001_store;
pub mod a002_sale;
pub mod a003_inventory;
pub mod a004_supplier;
pub mod common;
