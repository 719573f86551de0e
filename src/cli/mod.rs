//! Console front end: validated prompts and the numbered menu.

/// Prompt-and-validate helpers over generic readers and writers.
pub mod input;
/// Menu loop and action dispatch.
pub mod menu;
