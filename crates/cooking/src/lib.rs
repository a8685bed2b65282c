mod error;
mod events;
mod report;
mod session;
mod soup;
mod state;
mod timer;

pub use error::*;
pub use events::*;
pub use report::*;
pub use session::*;
pub use soup::*;
pub use state::*;
pub use timer::*;
