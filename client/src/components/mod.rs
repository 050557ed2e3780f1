//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render page chrome and interaction surfaces while reading
//! shared state from Leptos context providers or page-owned signals.

pub mod diagram_panel;
pub mod layout;
pub mod markdown_view;
pub mod qa_block;
pub mod sections_panel;
pub mod toolbar;
