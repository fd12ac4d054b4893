//! Enharmonic annotations for unusual spellings.
//!
//! Purely informational: nothing here changes what a chord transposes to.

use crate::pitch::canonical_key;
use serde::Serialize;

/// Input spellings that are legal but rarely written, with their common name
const THEORETICAL_SPELLINGS: &[(&str, &str)] = &[
    ("E#", "E sharp (E#) is enharmonic to F."),
    ("B#", "B sharp (B#) is enharmonic to C."),
    ("Fb", "F flat (Fb) is enharmonic to E."),
    ("Cb", "C flat (Cb) is enharmonic to B."),
];

/// Double accidentals: (spelling, what it sounds like, description)
const DOUBLE_ACCIDENTALS: &[(&str, &str, &str)] = &[
    ("C##", "D", "C double sharp"),
    ("D##", "E", "D double sharp"),
    ("E##", "F#", "E double sharp"),
    ("F##", "G", "F double sharp"),
    ("G##", "A", "G double sharp"),
    ("A##", "B", "A double sharp"),
    ("B##", "C#", "B double sharp"),
    ("Cbb", "Bb", "C double flat"),
    ("Dbb", "C", "D double flat"),
    ("Ebb", "D", "E double flat"),
    ("Fbb", "Eb", "F double flat"),
    ("Gbb", "F", "G double flat"),
    ("Abb", "G", "A double flat"),
    ("Bbb", "A", "B double flat"),
];

/// Deduplicated notes, kept in the order they were first added
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Annotations(Vec<String>);

impl Annotations {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a note. Returns false if it was already present.
    pub fn insert(&mut self, note: String) -> bool {
        if self.0.contains(&note) {
            return false;
        }
        self.0.push(note);
        true
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Record a note if the root written in the input is a theoretical or
/// double-accidental spelling.
pub fn note_input_root(root: &str, notes: &mut Annotations) {
    let Some(key) = canonical_key(root) else {
        return;
    };

    if let Some((_, detail)) = THEORETICAL_SPELLINGS.iter().find(|(name, _)| *name == key) {
        notes.insert(format!("Original note '{}': {}", key, detail));
    } else if let Some((_, sounds_like, detail)) =
        DOUBLE_ACCIDENTALS.iter().find(|(name, _, _)| *name == key)
    {
        notes.insert(format!(
            "Original note '{}': {} sounds like {}.",
            key, detail, sounds_like
        ));
    }
}

/// Record a note if a transposed root is a double-accidental spelling.
///
/// The canonical output table never produces one, so this only fires if the
/// output spelling rules change.
pub fn note_output_root(root: &str, notes: &mut Annotations) {
    if let Some((name, sounds_like, detail)) =
        DOUBLE_ACCIDENTALS.iter().find(|(name, _, _)| *name == root)
    {
        notes.insert(format!(
            "Transposed note '{}': {}. It sounds like {}.",
            name, detail, sounds_like
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theoretical_input_root() {
        let mut notes = Annotations::new();
        note_input_root("E#", &mut notes);
        assert_eq!(notes.len(), 1);
        let note = notes.iter().next().unwrap();
        assert!(note.contains("E#"));
        assert!(note.contains("enharmonic to F"));
    }

    #[test]
    fn test_lowercase_input_uses_table_spelling() {
        let mut notes = Annotations::new();
        note_input_root("cb", &mut notes);
        assert_eq!(
            notes.iter().next(),
            Some("Original note 'Cb': C flat (Cb) is enharmonic to B.")
        );
    }

    #[test]
    fn test_double_accidental_input_root() {
        let mut notes = Annotations::new();
        note_input_root("C##", &mut notes);
        assert_eq!(
            notes.iter().next(),
            Some("Original note 'C##': C double sharp sounds like D.")
        );
    }

    #[test]
    fn test_ordinary_spellings_produce_nothing() {
        let mut notes = Annotations::new();
        for root in ["C", "F#", "Bb", "H"] {
            note_input_root(root, &mut notes);
            note_output_root(root, &mut notes);
        }
        assert!(notes.is_empty());
    }

    #[test]
    fn test_output_double_accidental() {
        let mut notes = Annotations::new();
        note_output_root("Fbb", &mut notes);
        assert_eq!(
            notes.iter().next(),
            Some("Transposed note 'Fbb': F double flat. It sounds like Eb.")
        );
    }

    #[test]
    fn test_notes_are_deduplicated_in_order() {
        let mut notes = Annotations::new();
        note_input_root("Fb", &mut notes);
        note_input_root("E#", &mut notes);
        note_input_root("Fb", &mut notes);
        let all: Vec<&str> = notes.iter().collect();
        assert_eq!(all.len(), 2);
        assert!(all[0].starts_with("Original note 'Fb'"));
        assert!(all[1].starts_with("Original note 'E#'"));
    }
}
