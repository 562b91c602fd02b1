//! Configuration models

pub mod generation;
pub mod license;
pub mod output;

pub use generation::*;
pub use license::*;
pub use output::*;
