//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate pure text processing and browser/environment
//! concerns from page and component logic to improve reuse and testability.

pub mod markup;
pub mod persistence;
