//! Speaker → token mapping.
//!
//! `SpeakerTokenSet` is rebuilt from scratch every time the transcript
//! changes. `reconcile` carries over the tokens of speakers that are still
//! present and assigns palette defaults to new ones; speakers that vanished
//! are dropped together with any custom token they had.

pub mod assignment;
pub mod palette;

pub use assignment::TokenAssignment;
pub use palette::Palette;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// One speaker and the token that replaces their name in headers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpeakerToken {
    /// Speaker label as it appears in the transcript (trimmed).
    pub name: String,
    /// Replacement text. Not validated: empty or duplicate tokens are allowed.
    pub token: String,
}

impl SpeakerToken {
    pub fn new(name: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            token: token.into(),
        }
    }
}

/// Ordered speaker tokens, keyed by name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SpeakerTokenSet {
    entries: Vec<SpeakerToken>,
}

impl SpeakerTokenSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the set for a freshly extracted name list.
    ///
    /// Names already in `self` keep their token. Every other name gets
    /// `palette.token_for(i)` where `i` is its index in `names`.
    pub fn reconcile(&self, names: &[String], palette: &Palette) -> Self {
        let previous: HashMap<&str, &str> = self
            .entries
            .iter()
            .map(|e| (e.name.as_str(), e.token.as_str()))
            .collect();

        let mut entries = Vec::with_capacity(names.len());
        for (position, name) in names.iter().enumerate() {
            if entries.iter().any(|e: &SpeakerToken| &e.name == name) {
                continue;
            }
            let token = match previous.get(name.as_str()) {
                Some(token) => (*token).to_string(),
                None => palette.token_for(position).to_string(),
            };
            entries.push(SpeakerToken::new(name.clone(), token));
        }
        Self { entries }
    }

    /// Replace the token of `name`. Returns `false` if the speaker is unknown.
    pub fn set_token(&mut self, name: &str, token: impl Into<String>) -> bool {
        match self.entries.iter_mut().find(|e| e.name == name) {
            Some(entry) => {
                entry.token = token.into();
                true
            }
            None => false,
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.name == name)
            .map(|e| e.token.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.name.as_str())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SpeakerToken> {
        self.entries.iter()
    }

    pub fn as_slice(&self) -> &[SpeakerToken] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a SpeakerTokenSet {
    type Item = &'a SpeakerToken;
    type IntoIter = std::slice::Iter<'a, SpeakerToken>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn palette() -> Palette {
        Palette::new(["A", "B", "C"]).expect("non-empty palette")
    }

    #[test]
    fn new_names_get_palette_tokens_by_position() {
        let set = SpeakerTokenSet::new().reconcile(&names(&["x", "y"]), &palette());
        assert_eq!(set.get("x"), Some("A"));
        assert_eq!(set.get("y"), Some("B"));
    }

    #[test]
    fn palette_cycles_modulo_its_length() {
        let set = SpeakerTokenSet::new().reconcile(&names(&["a", "b", "c", "d", "e"]), &palette());
        let tokens: Vec<&str> = set.iter().map(|e| e.token.as_str()).collect();
        assert_eq!(tokens, vec!["A", "B", "C", "A", "B"]);
    }

    #[test]
    fn existing_tokens_are_carried_over() {
        let mut set = SpeakerTokenSet::new().reconcile(&names(&["x", "y"]), &palette());
        assert!(set.set_token("y", "custom"));

        let next = set.reconcile(&names(&["w", "x", "y"]), &palette());
        assert_eq!(next.get("w"), Some("A"));
        assert_eq!(next.get("x"), Some("A"));
        assert_eq!(next.get("y"), Some("custom"));
        assert_eq!(next.names().collect::<Vec<_>>(), vec!["w", "x", "y"]);
    }

    #[test]
    fn vanished_names_are_dropped_and_lose_custom_tokens() {
        let mut set = SpeakerTokenSet::new().reconcile(&names(&["x", "y"]), &palette());
        set.set_token("y", "custom");

        let without_y = set.reconcile(&names(&["x"]), &palette());
        assert!(!without_y.contains("y"));

        let back = without_y.reconcile(&names(&["x", "y"]), &palette());
        assert_eq!(back.get("y"), Some("B"));
    }

    #[test]
    fn set_token_on_unknown_name_is_rejected() {
        let mut set = SpeakerTokenSet::new();
        assert!(!set.set_token("ghost", "👻"));
        assert!(set.is_empty());
    }

    #[test]
    fn serializes_as_a_plain_list() {
        let set = SpeakerTokenSet::new().reconcile(&names(&["x"]), &palette());
        let json = serde_json::to_value(&set).expect("serialize token set");
        assert_eq!(json[0]["name"], "x");
        assert_eq!(json[0]["token"], "A");
    }
}
