pub mod concurrent;
pub mod sequential;
pub mod strategy;
pub mod types;

pub use concurrent::*;
pub use sequential::*;
pub use strategy::*;
pub use types::*;
