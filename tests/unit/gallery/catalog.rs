use super::*;

#[test]
fn builtin_catalog_is_valid_and_ordered() {
    let c = Catalog::builtin().unwrap();
    assert_eq!(c.len(), 28);
    let keys: Vec<String> = c.controls().iter().map(|d| d.key.to_string()).collect();
    assert_eq!(keys[0], "body.color");
    assert_eq!(keys[1], "body.size");
    assert_eq!(keys[2], "tattoo.id");
    assert_eq!(keys.last().map(String::as_str), Some("teamColors"));
    assert!(c.controls()[0].initially_selected);
    assert!(c.controls().iter().skip(1).all(|d| !d.initially_selected));
}

#[test]
fn builtin_flip_keys_are_paired_with_svgs() {
    let c = Catalog::builtin().unwrap();
    let flips: Vec<(String, String)> = c
        .controls()
        .iter()
        .filter_map(|d| match &d.kind {
            ControlKind::Svgs {
                flip_key: Some(f), ..
            } => Some((d.key.to_string(), f.to_string())),
            _ => None,
        })
        .collect();
    assert_eq!(
        flips,
        vec![
            ("mouth.id".to_string(), "mouth.flip".to_string()),
            ("hair.id".to_string(), "hair.flip".to_string()),
            ("nose.id".to_string(), "nose.flip".to_string()),
        ]
    );
}

#[test]
fn duplicate_keys_are_rejected() {
    let c = Catalog::builtin().unwrap();
    let mut controls = c.controls().to_vec();
    controls.push(controls[0].clone());
    let err = Catalog::new(controls).unwrap_err();
    assert!(err.to_string().contains("duplicate control key"));
}

#[test]
fn colors_palette_entries_must_match_count() {
    let decl = ControlDeclaration {
        key: DottedPath::parse("teamColors").unwrap(),
        display_text: "Team Colors".to_string(),
        initially_selected: false,
        kind: ControlKind::Colors {
            color_format: ColorFormat::Hex,
            color_count: 3,
            palette: vec![vec!["#000000".to_string(); 2]],
        },
    };
    assert!(Catalog::new(vec![decl]).is_err());
}

#[test]
fn declarations_serialize_with_selection_type_tag() {
    let c = Catalog::builtin().unwrap();
    let v = serde_json::to_value(&c.controls()[6]).unwrap();
    assert_eq!(v["key"], "mouth.id");
    assert_eq!(v["selectionType"], "svgs");
    assert_eq!(v["flipKey"], "mouth.flip");
    let back: ControlDeclaration = serde_json::from_value(v).unwrap();
    assert_eq!(back, c.controls()[6]);
    assert_eq!(back.kind.selection_type(), SelectionType::Svgs);
    assert_eq!(c.controls()[15].kind.color_format(), Some(ColorFormat::Rgba));
}
