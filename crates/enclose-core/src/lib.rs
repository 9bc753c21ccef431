mod calculator;
mod counter;
mod demo;
mod scope;

pub use calculator::Calculator;
pub use counter::make_counter;
pub use demo::{all, run_all, run_named, Demo, DemoError};
pub use scope::make_reporter;
