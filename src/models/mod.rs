pub mod equipment;

pub use equipment::*;
