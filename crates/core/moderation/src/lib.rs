#[macro_use]
extern crate log;

mod engine;
mod executor;
mod resolver;

pub use engine::*;
pub use executor::*;
pub use resolver::*;
