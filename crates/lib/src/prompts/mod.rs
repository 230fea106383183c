//! # Prompt Template Modules
//!
//! The fixed templates sent to the generation service and the helpers that
//! fill them in.

pub mod core;
pub mod tasks;
