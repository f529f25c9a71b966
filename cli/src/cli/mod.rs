pub mod creators;
pub mod favorites;
pub mod feed;
