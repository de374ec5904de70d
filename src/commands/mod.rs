//! Command implementations for mydeps CLI

pub mod completions;
pub mod ensure;
pub mod generate;
pub mod helpers;
pub mod install;
pub mod run;
pub mod uninstall;
pub mod version;
