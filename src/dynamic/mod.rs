//! The self-describing codec (§4.5): a second, schema-free pipeline that
//! discovers a value's wire form from its runtime kind rather than from a
//! declared [`crate::structure::Structure`].

mod constructor;
mod decode;
mod encode;

pub use decode::{decode, unpack};
pub use encode::{encode, pack};
