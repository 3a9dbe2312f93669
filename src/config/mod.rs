//! JSON configuration files consumed by the command-line tools.
pub mod shift;
