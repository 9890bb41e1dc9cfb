//! Combine BASIC-family source modules into a single module
//!
//! Takes an ordered sequence of module source texts and produces one
//! combined text: a synthesized `Attribute VB_Name` declaration for the new
//! module, the deduplicated Option directives, then every ordinary line in
//! its original relative order. The input names are discarded. Differing
//! Option directives across modules are all kept; whether the merged result
//! is semantically coherent is the caller's concern.

use std::collections::HashSet;

use crossbeam_channel::Sender;

use crate::config::DEFAULT_MODULE_NAME;
use crate::core::{CombineEvent, CombineStats};
use crate::utils::lines;

/// Notify helper for optional sender
fn notify(tx: &Option<Sender<CombineEvent>>, event: CombineEvent) {
    if let Some(tx) = tx {
        let _ = tx.send(event);
    }
}

/// Combine module texts into a single module named `output_name`.
///
/// The name is substituted verbatim into the synthesized declaration; no
/// escaping is applied, so a name carrying a double quote yields output
/// that is not well-formed VBA (see `CombineConfig::validate`).
pub fn combine<S: AsRef<str>>(module_texts: &[S], output_name: &str) -> String {
    combine_with_events(module_texts, output_name, None).0
}

/// Combine module texts under the default module name, `combinedModule`.
pub fn combine_default<S: AsRef<str>>(module_texts: &[S]) -> String {
    combine(module_texts, DEFAULT_MODULE_NAME)
}

/// Combine module texts and report what was kept and what was stripped.
pub fn combine_with_stats<S: AsRef<str>>(
    module_texts: &[S],
    output_name: &str,
) -> (String, CombineStats) {
    combine_with_events(module_texts, output_name, None)
}

/// Combine module texts, emitting progress events to an optional channel.
///
/// This is the full algorithm; the other entry points are thin wrappers.
/// Output is identical regardless of whether a sender is attached.
pub fn combine_with_events<S: AsRef<str>>(
    module_texts: &[S],
    output_name: &str,
    tx: Option<Sender<CombineEvent>>,
) -> (String, CombineStats) {
    notify(&tx, CombineEvent::StartCombining);

    let mut stats = CombineStats::new(module_texts.len());

    // Flatten all modules into one ordered line sequence. Empty and
    // whitespace-only module texts contribute no lines at all.
    let texts: Vec<&str> = module_texts
        .iter()
        .map(AsRef::as_ref)
        .filter(|text| !text.trim().is_empty())
        .collect();
    let joined = texts.join("\n");
    let all_lines: Vec<&str> = if joined.is_empty() {
        Vec::new()
    } else {
        joined.split('\n').collect()
    };

    notify(&tx, CombineEvent::LinesJoined(all_lines.len()));

    // Strip every module's own name declaration, wherever it appears
    let mut remaining: Vec<&str> = Vec::with_capacity(all_lines.len());
    for line in all_lines {
        if lines::is_attribute_name_line(line) {
            if let Some(name) = lines::module_name(line) {
                stats.discarded_names.push(name.to_string());
            }
        } else {
            remaining.push(line);
        }
    }

    // Collect every Option directive in order, keeping its original casing
    // (only the outer whitespace is stripped)
    let collected: Vec<&str> = remaining
        .iter()
        .map(|line| line.trim())
        .filter(|trimmed| lines::is_option_line(trimmed))
        .collect();

    notify(&tx, CombineEvent::OptionsCollected(collected.len()));

    // Remove every Option directive from the body; they move to the top
    remaining.retain(|line| !collected.contains(&line.trim()));

    // Deduplicate by exact text, first occurrence wins
    let mut seen: HashSet<&str> = HashSet::with_capacity(collected.len());
    let mut options: Vec<&str> = Vec::new();
    for option in collected {
        if seen.insert(option) {
            options.push(option);
        }
    }

    // New declaration first, directives next, then the body
    let header = lines::attribute_name_line(output_name);
    let mut output: Vec<&str> = Vec::with_capacity(1 + options.len() + remaining.len());
    output.push(header.as_str());
    output.extend(options.iter().copied());
    output.extend(remaining.iter().copied());

    stats.options_kept = options.len();
    stats.output_lines = output.len();

    let combined = output.join("\n");

    notify(
        &tx,
        CombineEvent::Complete(format!(
            "Combined {} modules into {:?}",
            stats.modules, output_name
        )),
    );

    (combined, stats)
}
