pub mod keywords;
pub mod normalize;
