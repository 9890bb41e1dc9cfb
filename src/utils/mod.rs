//! Utility modules for the vbam module combiner

pub mod lines;
