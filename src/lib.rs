pub mod config;
pub mod core;
pub mod utils;

// Re-export key items for convenience
pub use crate::config::{CombineConfig, DEFAULT_MODULE_NAME};
pub use crate::core::{
    CombineEvent, CombineStats, combine, combine_default, combine_with_events,
    combine_with_stats,
};
pub use crate::utils::lines::LineKind;
