//! HTTP clients for the external collaborators.
//!
//! Each client owns its wire types and decodes responses at the boundary;
//! the rest of the crate works with plain structs and `Result`s.

pub mod intent;
pub mod metadata;
pub mod search_index;
pub mod vision;
