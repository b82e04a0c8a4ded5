mod config_errors;

pub use config_errors::*;
