pub mod indexer;
pub mod labels;
