//! Database abstraction layer

pub mod traits;

pub use traits::{Connector, Queryer};
