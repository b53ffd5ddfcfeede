pub mod candidates;
pub mod handler;
pub mod output;

pub use handler::run;
