pub mod args;
pub mod codec;
pub mod commands;
pub mod config;
pub mod error;
pub mod harness;
pub mod output;
pub mod schema;
pub mod settings;
pub mod storage;
pub mod visuals;
