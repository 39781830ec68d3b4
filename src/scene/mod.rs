//! Request boundary model consumed by the engine.

pub mod request;
