pub mod footer;
pub mod input;
