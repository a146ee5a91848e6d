pub mod form;
pub mod number;
