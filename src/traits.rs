//! Trait definitions

mod element;
mod indexing;

pub use element::{ElementFamily, NodalElement};
pub use indexing::{SimplexIndexing, TensorIndexing};
