// Author: Dustin Pilgrim
// License: MIT

#[cfg(test)]
use super::*;
use crate::error::ResolutionErrorKind;

#[test]
fn test_type_codes() {
    assert_eq!(ParameterValue::from(true).type_code(), Discriminant::Bool);
    assert_eq!(ParameterValue::from(2).type_code(), Discriminant::Int);
    assert_eq!(ParameterValue::from(3.0).type_code(), Discriminant::Real);
    assert_eq!(ParameterValue::from("some").type_code(), Discriminant::String);
    assert_eq!(ParameterValue::from(Tuple::new()).type_code(), Discriminant::Tuple);
    assert_eq!(ParameterValue::from(Dictionary::new()).type_code(), Discriminant::Dict);

    assert!(Discriminant::Real.is_scalar());
    assert!(Discriminant::Dict.is_collection());
    assert!(!Discriminant::Tuple.is_scalar());
}

#[test]
fn test_scalar_accessors() {
    assert_eq!(ParameterValue::Bool(true).as_bool().unwrap(), true);
    assert_eq!(ParameterValue::Int(-7).as_int().unwrap(), -7);
    assert_eq!(*ParameterValue::Real(3.5).as_real().unwrap(), 3.5);
    assert_eq!(ParameterValue::from("some").as_str().unwrap(), "some");
}

#[test]
fn test_no_implicit_coercion() {
    let int = ParameterValue::Int(2);
    match int.as_real().unwrap_err() {
        ParamError::TypeMismatch { expected, found, code, .. } => {
            assert_eq!(expected, Discriminant::Real);
            assert_eq!(found, Discriminant::Int);
            assert_eq!(code, Some(401));
        }
        other => panic!("Expected TypeMismatch, got {:?}", other),
    }

    let real = ParameterValue::Real(2.0);
    assert!(matches!(real.as_int(), Err(ParamError::TypeMismatch { .. })));
    assert!(matches!(real.as_str(), Err(ParamError::TypeMismatch { .. })));
    assert!(matches!(ParameterValue::Int(1).as_bool(), Err(ParamError::TypeMismatch { .. })));
}

#[test]
fn test_extract() {
    let v = ParameterValue::from("some");
    let s: &str = v.extract().unwrap();
    assert_eq!(s, "some");
    assert_eq!(v.extract::<String>().unwrap(), "some".to_string());
    assert!(v.extract::<bool>().is_err());

    let n = ParameterValue::Int(300);
    assert_eq!(n.extract::<u16>().unwrap(), 300);
    assert_eq!(n.extract::<usize>().unwrap(), 300);
    assert!(n.extract::<f64>().is_err());
}

#[test]
fn test_extract_out_of_range() {
    let n = ParameterValue::Int(-1);
    match n.extract::<u32>().unwrap_err() {
        ParamError::OutOfRange { value, target, code, .. } => {
            assert_eq!(value, -1);
            assert_eq!(target, "u32");
            assert_eq!(code, Some(402));
        }
        other => panic!("Expected OutOfRange, got {:?}", other),
    }

    let big = ParameterValue::Int(i64::from(i32::MAX) + 1);
    assert!(matches!(big.extract::<i32>(), Err(ParamError::OutOfRange { .. })));
}

#[test]
fn test_dictionary_insert_replaces() {
    let mut d = Dictionary::new();
    assert!(d.insert("one", true).is_none());
    let old = d.insert("one", 1);
    assert_eq!(old, Some(ParameterValue::Bool(true)));
    assert_eq!(d.len(), 1);
    assert_eq!(d.get("one"), Some(&ParameterValue::Int(1)));
    assert!(d.get("two").is_none());
}

#[test]
fn test_dictionary_keys_keep_insertion_order() {
    let d = Dictionary::new().with("zeta", 1).with("alpha", 2).with("mid", 3);
    assert_eq!(d.keys().collect::<Vec<_>>(), vec!["zeta", "alpha", "mid"]);

    let mut d = d;
    d.remove("alpha");
    assert_eq!(d.keys().collect::<Vec<_>>(), vec!["zeta", "mid"]);
}

#[test]
fn test_dictionary_equality_ignores_order() {
    let a = Dictionary::new().with("x", 1).with("y", 2);
    let b: Dictionary = vec![("y", 2), ("x", 1)].into_iter().collect();
    assert_eq!(a, b);
}

#[test]
fn test_tuple_sparse_indices() {
    let t: Tuple = vec![(42, "some"), (1, "first"), (12, "mid")].into_iter().collect();
    assert_eq!(t.len(), 3);
    assert_eq!(t.indices().collect::<Vec<_>>(), vec![1, 12, 42]);
    assert!(t.contains(12));
    assert!(!t.contains(2));
    assert!(t.get(0).is_none());
}

#[test]
fn test_tuple_insert_replaces() {
    let mut t = Tuple::new().with(3, 1.5);
    let old = t.insert(3, "x");
    assert_eq!(old, Some(ParameterValue::Real(1.5)));
    assert_eq!(t.remove(3), Some(ParameterValue::from("x")));
    assert!(t.is_empty());
}

#[test]
fn test_child_lookup() {
    let root = ParameterValue::from(
        Dictionary::new().with("list", Tuple::new().with(2, true)),
    );

    let list = root.child(&Segment::Key("list".into())).unwrap();
    assert_eq!(list.type_code(), Discriminant::Tuple);
    assert_eq!(list.child(&Segment::Index(2)).unwrap().as_bool().unwrap(), true);

    let err = root.child(&Segment::Key("missing".into())).unwrap_err();
    assert_eq!(err.kind, ResolutionErrorKind::KeyNotFound);

    let err = list.child(&Segment::Index(5)).unwrap_err();
    assert_eq!(err.kind, ResolutionErrorKind::IndexNotFound);

    let err = root.child(&Segment::Index(0)).unwrap_err();
    assert_eq!(err.kind, ResolutionErrorKind::NotATuple);
    assert_eq!(err.found, Discriminant::Dict);

    let err = list.child(&Segment::Key("x".into())).unwrap_err();
    assert_eq!(err.kind, ResolutionErrorKind::NotADict);
    assert_eq!(err.found, Discriminant::Tuple);
}

#[test]
fn test_child_mut_replaces_leaf() {
    let mut root = ParameterValue::from(Dictionary::new().with("port", 80));
    *root.child_mut(&Segment::Key("port".into())).unwrap() = ParameterValue::Int(8080);
    assert_eq!(root.as_dict().unwrap().get("port"), Some(&ParameterValue::Int(8080)));

    let mut leaf = ParameterValue::Real(1.0);
    let err = leaf.child_mut(&Segment::Key("x".into())).unwrap_err();
    assert_eq!(err.kind, ResolutionErrorKind::NotADict);
    assert_eq!(err.found, Discriminant::Real);
}
