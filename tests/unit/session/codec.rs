use super::*;
use serde_json::json;

fn face() -> FaceConfig {
    FaceConfig::from_value(json!({
        "fatness": 0.5,
        "body": { "id": "body", "color": "#AABBCC", "size": 1.04 },
        "tattoo": { "id": "stars" },
    }))
    .unwrap()
}

fn fallback(_: &ShuffleOptions) -> FaceConfig {
    FaceConfig::from_value(json!({ "generated": true })).unwrap()
}

fn opener() -> Option<OpenerHandle> {
    Some(OpenerHandle::new("parent-window"))
}

#[test]
fn encode_is_plain_base64_json() {
    let f = face();
    let encoded = encode_face(&f);
    let raw = STANDARD.decode(&encoded).unwrap();
    let v: serde_json::Value = serde_json::from_slice(&raw).unwrap();
    assert_eq!(v, *f.as_value());
    assert_eq!(decode_face(&encoded).unwrap(), f);
}

#[test]
fn fragment_prefix_follows_linkage() {
    let f = face();
    let linkage = SessionLinkage {
        parent_key: 5,
        opener: OpenerHandle::new("p"),
    };
    assert_eq!(encode_fragment(&f, None), encode_face(&f));
    assert_eq!(
        encode_fragment(&f, Some(&linkage)),
        format!("5,{}", encode_face(&f))
    );
}

#[test]
fn empty_fragment_means_no_session() {
    assert!(decode_fragment("", opener()).unwrap().is_none());
    let loaded = load_session("#", None, &fallback, &ShuffleOptions::default());
    assert!(!loaded.restored);
    assert_eq!(loaded.face.get_dotted("generated"), Some(&json!(true)));
}

#[test]
fn two_parts_with_opener_establish_linkage() {
    let f = face();
    let fragment = format!("5,{}", encode_face(&f));
    let (decoded, linkage) = decode_fragment(&fragment, opener()).unwrap().unwrap();
    assert_eq!(decoded, f);
    let linkage = linkage.unwrap();
    assert_eq!(linkage.parent_key, 5);
    assert_eq!(linkage.opener, OpenerHandle::new("parent-window"));
}

#[test]
fn two_parts_without_opener_decode_whole_text_and_fall_back() {
    let fragment = format!("5,{}", encode_face(&face()));
    assert!(decode_fragment(&fragment, None).is_err());

    let loaded = load_session(&fragment, None, &fallback, &ShuffleOptions::default());
    assert!(!loaded.restored);
    assert!(loaded.linkage.is_none());
    assert_eq!(loaded.face.get_dotted("generated"), Some(&json!(true)));
}

#[test]
fn malformed_payloads_fall_back_to_generator() {
    for bad in ["%%%", "bm90IGpzb24=", "WzEsMl0=", "abc,def,ghi"] {
        let loaded = load_session(bad, opener(), &fallback, &ShuffleOptions::default());
        assert!(!loaded.restored, "fragment {bad}");
        assert!(loaded.linkage.is_none());
        assert_eq!(loaded.face.get_dotted("tattoo.id"), Some(&json!("none")));
    }
}

#[test]
fn non_numeric_parent_key_keeps_face_without_linkage() {
    let fragment = format!("abc,{}", encode_face(&face()));
    let (decoded, linkage) = decode_fragment(&fragment, opener()).unwrap().unwrap();
    assert_eq!(decoded, face());
    assert!(linkage.is_none());

    let shuffle = ShuffleOptions::default();
    let loaded = load_session(&format!("#{fragment}"), opener(), &fallback, &shuffle);
    assert!(loaded.restored);
    assert!(loaded.linkage.is_none());
    assert_eq!(loaded.face, face());
}

#[test]
fn parent_key_takes_leading_integer() {
    assert_eq!(parse_parent_key("12"), Some(12));
    assert_eq!(parse_parent_key(" -7 "), Some(-7));
    assert_eq!(parse_parent_key("42px"), Some(42));
    assert_eq!(parse_parent_key("+3"), Some(3));
    assert_eq!(parse_parent_key("x1"), None);
    assert_eq!(parse_parent_key("-"), None);
    assert_eq!(parse_parent_key(""), None);
}

#[test]
fn slider_floats_survive_round_trip() {
    let face = FaceConfig::from_value(json!({ "body": { "size": 964784.8519088485 } })).unwrap();
    assert_eq!(decode_face(&encode_face(&face)).unwrap(), face);
}

#[test]
fn legacy_payload_gets_tattoo_backfill() {
    let legacy = FaceConfig::from_value(json!({
        "fatness": 0.2,
        "hair": { "id": "short", "color": "#272421" },
    }))
    .unwrap();
    let loaded = load_session(
        &format!("#{}", encode_face(&legacy)),
        None,
        &fallback,
        &ShuffleOptions::default(),
    );
    assert!(loaded.restored);
    assert_eq!(loaded.face.get_dotted("tattoo"), Some(&json!({ "id": "none" })));
    assert_eq!(loaded.face.get_dotted("hair"), legacy.get_dotted("hair"));
    assert_eq!(loaded.face.get_dotted("fatness"), Some(&json!(0.2)));
}

#[test]
fn strip_delimiter_handles_both_forms() {
    assert_eq!(strip_fragment_delimiter("#abc"), "abc");
    assert_eq!(strip_fragment_delimiter("abc"), "abc");
    assert_eq!(strip_fragment_delimiter(""), "");
}
