pub mod catalog;
pub mod data_import;
