pub mod categories;
pub mod normalize;
pub mod show;
