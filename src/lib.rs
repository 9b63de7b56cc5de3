#![deny(missing_debug_implementations)]

//! A binary serialization library over a fixed primitive catalog, with two
//! independent codecs sharing that catalog:
//!
//! - the schema-driven [`structure`] codec, where a declared
//!   [`structure::Structure`] packs/unpacks a named aggregate as an
//!   untagged, positional sequence of fields, with single-inheritance
//!   field composition;
//! - the self-describing [`dynamic`] codec, where the wire form is
//!   discovered from the runtime kind of a [`value::Value`] and recovered
//!   from a one-byte constructor tag on decode, no schema required.
//!
//! Both codecs draw on the same [`primitive`] catalog (fixed- and
//! variable-width integers, IEEE-754 binaries and decimals, UUIDs, IP
//! addresses, dates and times, byte strings and text) and the same
//! [`kind::Kind`] contract: `name`, `size`, `pack`, `unpack`.
//!
//! # Quick start
//!
//! ```rust
//! use binarize::{Kind, Value};
//! use binarize::primitive::UINT16;
//!
//! let bytes = binarize::kind::encode(&UINT16, &Value::UInt(258)).unwrap();
//! assert_eq!(bytes, vec![0x01, 0x02]);
//! assert_eq!(binarize::kind::decode(&UINT16, &bytes).unwrap(), Value::UInt(258));
//! ```
//!
//! ```rust
//! use binarize::structure::Structure;
//! use binarize::primitive::{UINT8, STRING};
//! use binarize::Value;
//!
//! let definition = Structure::builder()
//!     .field("id", UINT8)
//!     .field("label", STRING)
//!     .freeze();
//! let instance = definition
//!     .instantiate(vec![Value::UInt(7), Value::from("hi")])
//!     .unwrap();
//! let bytes = instance.encode().unwrap();
//! ```
//!
//! ```rust
//! use binarize::{dynamic, Value};
//! use indexmap::IndexMap;
//!
//! let mut map = IndexMap::new();
//! map.insert(Value::from("compact"), Value::Bool(true));
//! let bytes = dynamic::encode(&Value::Map(map)).unwrap();
//! let decoded = dynamic::decode(&bytes).unwrap();
//! ```

pub mod dynamic;
pub mod enum_type;
pub mod error;
pub mod field;
pub mod kind;
pub mod primitive;
pub mod structure;
pub mod value;

pub use enum_type::EnumType;
pub use error::{Error, Result};
pub use field::Field;
pub use kind::Kind;
pub use structure::{Structure, StructureInstance};
pub use value::Value;
