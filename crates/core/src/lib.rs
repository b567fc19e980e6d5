pub mod models;
pub mod payload;
pub mod validation;
