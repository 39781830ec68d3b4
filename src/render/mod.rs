//! Canvas compositor: scoped drawing surface, text shaping, PNG encoding.

pub mod backend;
pub(crate) mod encode;
pub mod font;
pub mod surface;
pub mod text;
