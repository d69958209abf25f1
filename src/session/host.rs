/// Opaque reference to the window that opened this editor.
///
/// The host decides what the identifier means (a window name, a message-port id, ...). It is
/// retained for messaging code that reports edits back to the parent.
#[derive(Clone, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct OpenerHandle(String);

impl OpenerHandle {
    /// Wrap a host-defined window identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The identifier.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Page environment the session reads from and writes to.
pub trait Host {
    /// Current URL fragment, with or without the leading `#`.
    fn fragment(&self) -> String;

    /// Reference to the opener window, if the page was opened by another window.
    fn opener(&self) -> Option<OpenerHandle>;

    /// Replace the URL fragment without adding a navigable history entry.
    fn replace_fragment(&mut self, fragment: &str);
}

/// In-memory [`Host`] that records every fragment replacement.
///
/// The write history is never pruned: one entry per face change. It suits tests and one-shot
/// tools such as the CLI; a long-lived embedding should implement [`Host`] over its real page.
#[derive(Clone, Debug, Default)]
pub struct MemoryHost {
    fragment: String,
    opener: Option<OpenerHandle>,
    writes: Vec<String>,
}

impl MemoryHost {
    /// Host whose page starts with `fragment` and no opener.
    pub fn new(fragment: impl Into<String>) -> Self {
        Self {
            fragment: fragment.into(),
            opener: None,
            writes: Vec::new(),
        }
    }

    /// Attach an opener reference.
    pub fn with_opener(mut self, opener: OpenerHandle) -> Self {
        self.opener = Some(opener);
        self
    }

    /// Every fragment written so far, oldest first. The last entry is the current fragment.
    pub fn writes(&self) -> &[String] {
        &self.writes
    }
}

impl Host for MemoryHost {
    fn fragment(&self) -> String {
        self.fragment.clone()
    }

    fn opener(&self) -> Option<OpenerHandle> {
        self.opener.clone()
    }

    fn replace_fragment(&mut self, fragment: &str) {
        self.fragment = fragment.to_string();
        self.writes.push(fragment.to_string());
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/host.rs"]
mod tests;
