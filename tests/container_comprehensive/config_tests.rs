//! Configuration tests
//!
//! Containers built from TOML config files must behave exactly like
//! containers built from the equivalent options.

use std::fs;

use tempfile::TempDir;

use crate::test_utils::*;
use typed_arrays::keyed;

fn write_config(dir: &TempDir, body: &str) -> ContainerConfig {
    let path = dir.path().join("container.toml");
    fs::write(&path, body).unwrap();
    ContainerConfig::from_file(&path).unwrap()
}

#[test]
fn test_typed_set_from_file() {
    let dir = TempDir::new().unwrap();
    let config = write_config(&dir, "kind = \"set\"\nitem_type = \"int\"\n");
    let mut s = Set::from_config(&config, keyed(vec![Value::Int(1), Value::Int(2)])).unwrap();

    assert_eq!(s.item_type(), Some(&ItemType::Basic(ValueType::Int)));
    assert_eq!(s.add("x").unwrap_err().kind(), ErrorKind::ValueType);
    s.add(3).unwrap();
    assert_eq!(s.size(), 3);
}

#[test]
fn test_construction_validates_against_config() {
    let dir = TempDir::new().unwrap();
    let config = write_config(&dir, "kind = \"set\"\nitem_type = \"string\"\n");
    let err = Set::from_config(&config, keyed(vec![Value::from("a"), Value::Int(2)])).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ValueType);
}

#[test]
fn test_read_only_map_from_file() {
    let dir = TempDir::new().unwrap();
    let config = write_config(&dir, "kind = \"map\"\nread_only = true\n");
    let mut m = Map::from_config(&config, vec![(Key::from("a"), Value::Int(1))]).unwrap();
    assert!(m.is_read_only());
    assert_eq!(m.put("b", 2).unwrap_err().kind(), ErrorKind::Mutation);
    assert_eq!(m.get("a").unwrap(), Some(Value::Int(1)));
}

#[test]
fn test_kind_mismatch_rejected() {
    let dir = TempDir::new().unwrap();
    let config = write_config(&dir, "kind = \"map\"\n");
    let err = Set::from_config(&config, Vec::new()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Argument);
}

#[test]
fn test_tuple_cannot_be_writable() {
    let err = ContainerConfig::from_toml_str("kind = \"tuple\"\nread_only = false\n").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Argument);
}

#[test]
fn test_strict_calc_policy_from_file() {
    let dir = TempDir::new().unwrap();
    let config = write_config(&dir, "kind = \"any\"\ncalc_policy = \"strict\"\n");
    let a = Container::from_config(&config, keyed(vec![Value::Int(1), Value::from("x")])).unwrap();
    assert_eq!(a.calc_policy(), CalcPolicy::Strict);
    assert_eq!(a.sum(false).unwrap_err().kind(), ErrorKind::Operation);
    assert_eq!(a.sum(true).unwrap().value, Some(Value::Int(1)));
}

#[test]
fn test_nulls_follow_kind_default() {
    let set_config = ContainerConfig::from_toml_str("kind = \"set\"\n").unwrap();
    let any_config = ContainerConfig::from_toml_str("kind = \"any\"\n").unwrap();
    assert!(!set_config.options().unwrap().allow_nulls);
    assert!(any_config.options().unwrap().allow_nulls);

    let err = Container::from_config(&set_config, keyed(vec![Value::Null])).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NullValue);
}

#[test]
fn test_default_toml_parses() {
    let config = ContainerConfig::from_toml_str(ContainerConfig::default_toml()).unwrap();
    assert_eq!(config.kind, Kind::Any);
    assert_eq!(config.calc_policy, CalcPolicy::Skip);
}

#[test]
fn test_config_round_trip() {
    let mut config = ContainerConfig::for_kind(Kind::Set);
    config.item_type = Some("float".to_string());
    config.locale = Some("en_US".to_string());
    let text = config.to_toml_string().unwrap();
    let parsed = ContainerConfig::from_toml_str(&text).unwrap();
    assert_eq!(parsed, config);
}

#[test]
fn test_missing_file_is_argument_error() {
    let dir = TempDir::new().unwrap();
    let err = ContainerConfig::from_file(&dir.path().join("absent.toml")).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Argument);
}
