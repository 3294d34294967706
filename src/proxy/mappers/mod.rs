// Mappers module - upstream shapes to site shapes

pub mod instagram;

pub use instagram::to_photo_feed;
