mod color;
mod ingredient;
mod mode;
mod reaction;
mod taste;

pub use color::*;
pub use ingredient::*;
pub use mode::*;
pub use reaction::*;
pub use taste::*;
