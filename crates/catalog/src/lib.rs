mod builtin;
mod catalog;
mod definition;
mod error;
mod instance;

pub use catalog::*;
pub use definition::*;
pub use error::*;
pub use instance::*;
