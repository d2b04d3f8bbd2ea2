pub mod rod;
pub mod vec2;

pub use rod::Rod;
pub use vec2::Vec2;
