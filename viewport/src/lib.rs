//! # viewport
//!
//! Pure pan/zoom camera math for the concept-map surface. The client crate
//! applies the resulting CSS transform to the rendered diagram; nothing in
//! here touches the DOM, so the whole crate is unit-testable on any target.

pub mod camera;
