//! Integration tests for the schema-driven structure engine (§4.4),
//! including composition of a `Structure` as a nested field and an
//! `EnumType` field.

use binarize::enum_type::EnumType;
use binarize::primitive::{PrimitiveOptions, BYTES, STRING, UINT16, UINT32, UINT8};
use binarize::structure::Structure;
use binarize::Value;

fn point() -> Structure {
    Structure::builder()
        .field("x", UINT16)
        .field("y", UINT16)
        .freeze()
}

#[test]
fn a_structure_can_nest_another_structure_as_a_field() {
    let line = Structure::builder()
        .field("start", point())
        .field("end", point())
        .freeze();

    let instance = line
        .instantiate(vec![
            Value::Seq(vec![Value::UInt(1), Value::UInt(2)]),
            Value::Seq(vec![Value::UInt(3), Value::UInt(4)]),
        ])
        .unwrap();
    let bytes = instance.encode().unwrap();
    assert_eq!(bytes.len(), 8);

    let (consumed, decoded) =
        binarize::structure::StructureInstance::decode(&line, &bytes, 0).unwrap();
    assert_eq!(consumed, 8);
    assert_eq!(
        decoded.get("start"),
        Some(&Value::Seq(vec![Value::UInt(1), Value::UInt(2)]))
    );
}

#[test]
fn a_structure_can_hold_an_enum_field() {
    let suit = EnumType::new(vec![
        "clubs".into(),
        "diamonds".into(),
        "hearts".into(),
        "spades".into(),
    ])
    .unwrap();
    let card = Structure::builder()
        .field("rank", UINT8)
        .field("suit", suit)
        .freeze();

    let instance = card
        .instantiate(vec![Value::UInt(12), Value::Str("hearts".into())])
        .unwrap();
    let bytes = instance.encode().unwrap();
    assert_eq!(bytes, vec![0x0c, 0x02]);

    let (_, decoded) = binarize::structure::StructureInstance::decode(&card, &bytes, 0).unwrap();
    assert_eq!(decoded.get("suit"), Some(&Value::Str("hearts".into())));
}

#[test]
fn deep_inheritance_chain_preserves_position_and_final_types() {
    let base = Structure::builder()
        .field("header", UINT32)
        .field("flags", UINT8)
        .freeze();
    let middle = Structure::extending(&base)
        .field("payload", BYTES.derive(PrimitiveOptions { size: Some(4), fill: Some(Some(0)) }))
        .freeze();
    let leaf = Structure::extending(&middle)
        .field("flags", STRING.derive(PrimitiveOptions { size: Some(2), fill: Some(Some(b' ')) }))
        .field("checksum", UINT16)
        .freeze();

    let names: Vec<&str> = leaf.names().collect();
    assert_eq!(names, vec!["header", "flags", "payload", "checksum"]);
    assert_eq!(leaf.size(), Some(4 + 2 + 4 + 2));

    let instance = leaf
        .instantiate(vec![
            Value::UInt(0xdeadbeef),
            Value::from("ok"),
            Value::Bytes(vec![1, 2, 3, 4]),
            Value::UInt(7),
        ])
        .unwrap();
    let bytes = instance.encode().unwrap();
    let (consumed, decoded) = binarize::structure::StructureInstance::decode(&leaf, &bytes, 0).unwrap();
    assert_eq!(consumed, bytes.len());
    assert_eq!(decoded.get("flags"), Some(&Value::from("ok")));
    assert_eq!(decoded.get("checksum"), Some(&Value::UInt(7)));
}
