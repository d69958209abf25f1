use super::*;

#[test]
fn memory_host_replaces_fragment_and_keeps_history() {
    let mut host = MemoryHost::new("#start");
    assert_eq!(host.fragment(), "#start");
    assert!(host.writes().is_empty());

    host.replace_fragment("a");
    host.replace_fragment("b");
    assert_eq!(host.fragment(), "b");
    assert_eq!(host.writes(), ["a", "b"]);
}

#[test]
fn opener_is_only_present_when_attached() {
    assert!(MemoryHost::new("").opener().is_none());
    let host = MemoryHost::new("").with_opener(OpenerHandle::new("parent"));
    assert_eq!(host.opener().map(|o| o.as_str().to_string()), Some("parent".to_string()));
}
