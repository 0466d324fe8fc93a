//! Utilities sub-module: data formatters.

pub mod data_formatters;
