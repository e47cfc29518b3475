mod map;
pub use map::map;

pub mod validate;
