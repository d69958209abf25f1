use super::*;
use serde_json::json;

fn face() -> Value {
    json!({
        "fatness": 0.5,
        "body": { "color": "#AABBCC", "size": 1.0, "id": "body" },
        "mouth": { "id": "mouth3", "flip": true },
        "teamColors": ["#111111", "#222222", "#333333"],
    })
}

#[test]
fn parse_rejects_empty_segments() {
    assert!(DottedPath::parse("").is_err());
    assert!(DottedPath::parse("body..color").is_err());
    assert!(DottedPath::parse(".body").is_err());
    let p: DottedPath = "body.color".parse().unwrap();
    assert_eq!(p.segments(), ["body", "color"]);
    assert_eq!(p.head(), "body");
    assert_eq!(p.to_string(), "body.color");
}

#[test]
fn get_walks_nested_objects() {
    let f = face();
    assert_eq!(get_path(&f, "body.color"), Some(&json!("#AABBCC")));
    assert_eq!(get_path(&f, "fatness"), Some(&json!(0.5)));
    assert_eq!(get_path(&f, "mouth.flip"), Some(&json!(true)));
    assert_eq!(get_path(&f, "teamColors.2"), Some(&json!("#333333")));
}

#[test]
fn get_fails_closed_on_missing_segments() {
    let f = face();
    assert_eq!(get_path(&f, "hair.color"), None);
    assert_eq!(get_path(&f, "body.color.extra"), None);
    assert_eq!(get_path(&f, "teamColors.9"), None);
    assert_eq!(get_path(&f, "a..b"), None);
}

#[test]
fn set_replaces_and_inserts_leaf() {
    let mut f = face();
    assert!(set_path(&mut f, "body.color", json!("#000000")));
    assert!(set_path(&mut f, "body.newField", json!(3)));
    assert!(set_path(&mut f, "teamColors.0", json!("#ffffff")));
    assert_eq!(f["body"]["color"], json!("#000000"));
    assert_eq!(f["body"]["newField"], json!(3));
    assert_eq!(f["teamColors"][0], json!("#ffffff"));
}

#[test]
fn set_is_noop_when_intermediate_missing() {
    let mut f = face();
    let before = f.clone();
    assert!(!set_path(&mut f, "hair.color", json!("#123456")));
    assert!(!set_path(&mut f, "fatness.deep", json!(1)));
    assert!(!set_path(&mut f, "teamColors.7", json!("#123456")));
    assert_eq!(f, before);
}

#[test]
fn get_mut_allows_in_place_edit() {
    let mut f = face();
    let p = DottedPath::parse("body.size").unwrap();
    *p.get_mut(&mut f).unwrap() = json!(1.2);
    assert_eq!(p.get(&f), Some(&json!(1.2)));
}
