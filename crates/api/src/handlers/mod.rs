pub mod form;
pub mod project;
pub mod upload;
