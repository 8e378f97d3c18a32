mod mapping;
mod owner;

pub use mapping::*;
pub use owner::*;
