pub mod config;
pub mod linker;
pub mod matcher;
