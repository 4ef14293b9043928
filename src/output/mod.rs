pub mod args;
pub mod errors;
pub mod report;
