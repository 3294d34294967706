pub mod photo;
pub mod token;

pub use photo::*;
pub use token::*;
