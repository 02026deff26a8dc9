//! Domain types and validation rules shared by the store adapter and the
//! HTTP layer. Nothing in here performs I/O.

pub mod error;
pub mod form;
pub mod project;
pub mod types;
pub mod upload;
