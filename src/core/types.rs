//! Core types shared across vbam modules

/// Events emitted while combining modules
#[derive(Debug, Clone)]
pub enum CombineEvent {
    /// Combining has started
    StartCombining,
    /// Total number of lines after flattening all modules
    LinesJoined(usize),
    /// Number of Option directives collected (before deduplication)
    OptionsCollected(usize),
    /// Combining complete with message
    Complete(String),
}

/// Summary of one combine invocation
#[derive(Debug, Clone)]
pub struct CombineStats {
    /// Number of input module texts
    pub modules: usize,
    /// Declared names stripped from the inputs, in encounter order
    pub discarded_names: Vec<String>,
    /// Distinct Option directives kept in the output
    pub options_kept: usize,
    /// Total lines in the combined output
    pub output_lines: usize,
}

impl CombineStats {
    pub fn new(modules: usize) -> Self {
        Self {
            modules,
            discarded_names: Vec::new(),
            options_kept: 0,
            output_lines: 0,
        }
    }
}
