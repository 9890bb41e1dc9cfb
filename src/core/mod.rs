//! Core module for the vbam module combiner
//!
//! This module contains the combine algorithm and its supporting types.

pub mod combiner;
mod types;

pub use combiner::{combine, combine_default, combine_with_events, combine_with_stats};
pub use types::*;
