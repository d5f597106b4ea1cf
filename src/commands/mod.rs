//! Command implementations for the extpack CLI

pub mod completions;
pub mod helpers;
pub mod package;
pub mod plan;
pub mod version;
