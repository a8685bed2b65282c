pub mod config;
pub mod observability;
pub mod report;
pub mod scenario;

pub use config::Config;
pub use scenario::{RejectedStep, Scenario, ScenarioOutcome, Step};
