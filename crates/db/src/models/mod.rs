pub mod form;
pub mod project;
