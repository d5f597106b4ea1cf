//! Domain models for extpack
//!
//! Plain values describing what is being packaged: the kind of extension, its
//! name and group, and the `(source, destination)` pairs produced for it.
//! Nothing here touches the filesystem.

pub mod extension;
pub mod kind;
pub mod mapping;

pub use extension::ExtensionDescriptor;
pub use kind::ExtensionKind;
pub use mapping::MappingEntry;
