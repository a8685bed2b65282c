mod error;
mod evaluator;
mod feedback;
mod orchestrator;
mod panel;
mod preference;
mod strategy;
mod summary;
mod taster;

pub use error::*;
pub use evaluator::*;
pub use feedback::*;
pub use orchestrator::*;
pub use panel::*;
pub use preference::*;
pub use strategy::*;
pub use summary::*;
pub use taster::*;
