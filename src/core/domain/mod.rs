//! Domain types.

mod parameter;

pub use parameter::{Parameter, ParameterType};
