//! The structure engine (§4.4): composes named fields, in declaration
//! order, into an aggregate [`Kind`].

use indexmap::IndexMap;

use crate::error::{Error, Result};
use crate::field::Field;
use crate::kind::Kind;
use crate::value::Value;

/// A frozen structure definition: an ordered `name -> Field` mapping
/// (§3 "Structure definition").
///
/// `IndexMap::insert` on an already-present key updates the value in place
/// without moving it to the end — which is exactly the override-in-place
/// semantics §4.4 step 2 asks for when a subclass redeclares a base field.
#[derive(Debug, Clone)]
pub struct Structure {
    fields: IndexMap<String, Field>,
}

impl Structure {
    /// Starts a definition with no inherited fields.
    pub fn builder() -> StructureBuilder {
        StructureBuilder {
            fields: IndexMap::new(),
        }
    }

    /// Starts a definition whose field list begins with `base`'s fields, in
    /// `base`'s declaration order (§4.4 step 1). Later declarations that
    /// reuse a name override that field in place.
    pub fn extending(base: &Structure) -> StructureBuilder {
        StructureBuilder {
            fields: base.fields.clone(),
        }
    }

    /// Declared field names, in wire order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// Number of declared fields.
    pub fn arity(&self) -> usize {
        self.fields.len()
    }

    fn field_at(&self, index: usize) -> Option<&Field> {
        self.fields.get_index(index).map(|(_, field)| field)
    }

    /// Builds an instance from positional values, bound to [`Structure::names`]
    /// in order (§4.4 "Construct"). Extra values fail with `arity-mismatch`;
    /// missing trailing fields are left unset (permitted until `encode`).
    pub fn instantiate(&self, values: Vec<Value>) -> Result<StructureInstance> {
        if values.len() > self.fields.len() {
            return Err(Error::ArityMismatch {
                expected: self.fields.len(),
                got: values.len(),
            });
        }
        let mut slots: Vec<Option<Value>> = values.into_iter().map(Some).collect();
        slots.resize_with(self.fields.len(), || None);
        Ok(StructureInstance {
            definition: self.clone(),
            slots,
        })
    }

    /// Builds an instance with every field unset.
    pub fn empty_instance(&self) -> StructureInstance {
        StructureInstance {
            definition: self.clone(),
            slots: vec![None; self.fields.len()],
        }
    }
}

impl Kind for Structure {
    fn name(&self) -> &str {
        "STRUCTURE"
    }

    fn size(&self) -> Option<usize> {
        let mut total = 0usize;
        for field in self.fields.values() {
            total += field.size()?;
        }
        Some(total)
    }

    fn pack(&self, value: &Value, out: &mut Vec<u8>) -> Result<()> {
        match value {
            Value::Seq(values) if values.len() == self.fields.len() => {
                for (field, value) in self.fields.values().zip(values) {
                    field.pack(value, out)?;
                }
                Ok(())
            }
            other => Err(Error::InvalidValue(other.kind_name())),
        }
    }

    fn unpack(&self, data: &[u8], offset: usize) -> Result<(usize, Value)> {
        let mut pointer = offset;
        let mut values = Vec::with_capacity(self.fields.len());
        for field in self.fields.values() {
            let (next, value) = field.unpack(data, pointer)?;
            pointer = next;
            values.push(value);
        }
        Ok((pointer, Value::Seq(values)))
    }
}

/// Accumulates field declarations before [`StructureBuilder::freeze`].
#[derive(Debug)]
pub struct StructureBuilder {
    fields: IndexMap<String, Field>,
}

impl StructureBuilder {
    /// Declares (or overrides, in place) a field. Re-declaring an inherited
    /// name keeps that field's original wire position (§4.4 step 2).
    pub fn field(mut self, name: impl Into<String>, kind: impl Kind + Send + Sync + 'static) -> Self {
        let name = name.into();
        self.fields.insert(name.clone(), Field::new(name, kind));
        self
    }

    /// Freezes the declaration into an immutable [`Structure`].
    pub fn freeze(self) -> Structure {
        Structure {
            fields: self.fields,
        }
    }
}

/// A constructed value of some [`Structure`]: a positional slot per
/// declared field, settable and readable by name or index (§3 "Structure
/// instance").
#[derive(Debug, Clone)]
pub struct StructureInstance {
    definition: Structure,
    slots: Vec<Option<Value>>,
}

impl StructureInstance {
    /// Reads a field by name.
    pub fn get(&self, name: &str) -> Option<&Value> {
        let index = self.definition.fields.get_index_of(name)?;
        self.slots[index].as_ref()
    }

    /// Reads a field by its declared position.
    pub fn get_index(&self, index: usize) -> Option<&Value> {
        self.slots.get(index).and_then(|v| v.as_ref())
    }

    /// Assigns a field by name. No validation is performed here — an
    /// invalid or missing value only fails at [`StructureInstance::encode`]
    /// (§3 "Structure instance" invariant).
    pub fn set(&mut self, name: &str, value: Value) -> Result<()> {
        let index = self
            .definition
            .fields
            .get_index_of(name)
            .ok_or_else(|| Error::MissingField(name.to_string()))?;
        self.slots[index] = Some(value);
        Ok(())
    }

    /// The structure definition this instance was constructed from.
    pub fn definition(&self) -> &Structure {
        &self.definition
    }

    /// Encodes every field in declared order, failing with `missing-field`
    /// if any slot was never assigned (§4.4 "Encode").
    pub fn encode(&self) -> Result<Vec<u8>> {
        let mut out = Vec::with_capacity(self.definition.size().unwrap_or(16));
        for (index, field) in self.definition.fields.values().enumerate() {
            let value = self.slots[index]
                .as_ref()
                .ok_or_else(|| Error::MissingField(field.name().to_string()))?;
            field.pack(value, &mut out)?;
        }
        Ok(out)
    }

    /// Decodes an instance of `definition` from `data` starting at `offset`
    /// (§4.4 "Decode").
    pub fn decode(definition: &Structure, data: &[u8], offset: usize) -> Result<(usize, Self)> {
        let mut pointer = offset;
        let mut slots = Vec::with_capacity(definition.fields.len());
        for field in definition.fields.values() {
            let (next, value) = field.unpack(data, pointer)?;
            pointer = next;
            slots.push(Some(value));
        }
        Ok((
            pointer,
            StructureInstance {
                definition: definition.clone(),
                slots,
            },
        ))
    }
}
