//! A named slot inside a [`crate::structure::Structure`] (§3 "Field").
//!
//! Per-field options (a `BYTES` field's `size`/`fill`, say) are expressed by
//! handing the field a primitive already derived with those options
//! (`STRING.derive(...)`) rather than by threading a second options map
//! through `Field` itself — `Primitive::derive` already owns that
//! bookkeeping, so a field only ever needs a name and a `Kind`.

use std::sync::Arc;

use crate::error::Result;
use crate::kind::Kind;
use crate::value::Value;

/// The type a field is bound to: either a primitive (optionally
/// parameterized) or a nested aggregate (`Structure`/`EnumType`, both of
/// which already implement [`Kind`]).
#[derive(Clone)]
pub struct FieldKind(Arc<dyn Kind + Send + Sync>);

impl FieldKind {
    /// Wraps any [`Kind`] implementation for use as a field's type.
    pub fn new(kind: impl Kind + Send + Sync + 'static) -> Self {
        FieldKind(Arc::new(kind))
    }
}

impl Kind for FieldKind {
    fn name(&self) -> &str {
        self.0.name()
    }

    fn size(&self) -> Option<usize> {
        self.0.size()
    }

    fn pack(&self, value: &Value, out: &mut Vec<u8>) -> Result<()> {
        self.0.pack(value, out)
    }

    fn unpack(&self, data: &[u8], offset: usize) -> Result<(usize, Value)> {
        self.0.unpack(data, offset)
    }
}

impl std::fmt::Debug for FieldKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FieldKind")
            .field("name", &self.0.name())
            .finish()
    }
}

/// A declared field: a name bound to a [`FieldKind`] (§3 "Field").
#[derive(Debug, Clone)]
pub struct Field {
    name: String,
    kind: FieldKind,
}

impl Field {
    /// Declares a field.
    pub fn new(name: impl Into<String>, kind: impl Kind + Send + Sync + 'static) -> Self {
        Field {
            name: name.into(),
            kind: FieldKind::new(kind),
        }
    }

    /// Rebinds this field to a new name, keeping its type — used when a
    /// subclass's own declarations supply a bare `Type` under a name already
    /// present in the base's field list (§4.4 step 3).
    pub fn renamed(&self, name: impl Into<String>) -> Self {
        Field {
            name: name.into(),
            kind: self.kind.clone(),
        }
    }

    /// The field's wire-order name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The field's fixed wire size, if its type has one.
    pub fn size(&self) -> Option<usize> {
        self.kind.size()
    }

    /// Appends the field's wire encoding of `value` to `out`.
    pub fn pack(&self, value: &Value, out: &mut Vec<u8>) -> Result<()> {
        self.kind.pack(value, out)
    }

    /// Reads this field's value starting at `offset`.
    pub fn unpack(&self, data: &[u8], offset: usize) -> Result<(usize, Value)> {
        self.kind.unpack(data, offset)
    }
}
