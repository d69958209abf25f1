use super::*;

#[test]
fn builtin_lists_tattoo_none_first() {
    let c = ShapeCatalog::builtin();
    assert_eq!(c.variants("tattoo").first().map(String::as_str), Some("none"));
    assert!(c.validate().is_ok());
    assert!(c.categories().any(|k| k == "mouth"));
}

#[test]
fn unknown_category_is_empty() {
    let c = ShapeCatalog::builtin();
    assert!(c.variants("wings").is_empty());
}

#[test]
fn json_catalog_parses_and_validates() {
    let c = ShapeCatalog::from_json_str(r#"{"eye": ["eye1", "eye2"], "tattoo": ["none"]}"#)
        .unwrap();
    assert_eq!(c.variants("eye"), ["eye1", "eye2"]);

    let err = ShapeCatalog::from_json_str(r#"{"eye": []}"#).unwrap_err();
    assert!(err.to_string().contains("validation error:"));
    assert!(ShapeCatalog::from_json_str("[1]").is_err());
}
