//! Data model for a single audit run
//!
//! # Components
//!
//! - `Link`: One extracted hyperlink together with its classification
//! - `LinkDictionary`: Links grouped by container name, in insertion order

mod dictionary;
mod link;

// Re-export main types
pub use dictionary::LinkDictionary;
pub use link::Link;
