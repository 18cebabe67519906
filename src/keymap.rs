//! Keymaps: the bindings of one interaction context and their display state.
//!
//! A [`Keymap`] is an ordered list of [`Entry`] values. Each entry wraps a
//! [`key::Binding`] with the state the help views need: whether the binding is
//! *essential* (shown on the single-line summary), whether it is currently
//! *visible*, and an optional *temporary description* that replaces the
//! binding's own description until the keymap is reset.
//!
//! Insertion order is display order: it fixes the left-to-right order of the
//! essential line and the row-major order of the full grid.
//!
//! # Addressing entries
//!
//! Every lookup accepts any [`EntryKey`]:
//!
//! - the [`key::Binding`] itself (matched by its label),
//! - the label as a `&str`,
//! - the [`EntryId`] handle returned by [`Keymap::add_binding`].
//!
//! Labels are indexed, so lookups do not scan the entry list.
//!
//! ```rust
//! use bubblehelp::key::Binding;
//! use bubblehelp::keymap::Keymap;
//! use crossterm::event::KeyCode;
//!
//! let esc = Binding::new(vec![KeyCode::Esc]).with_help("esc", "back");
//! let enter = Binding::new(vec![KeyCode::Enter]).with_help("enter", "submit");
//!
//! let mut keymap = Keymap::new(2).unwrap();
//! keymap.add_binding(esc.clone(), true).unwrap();
//! let enter_id = keymap.add_binding(enter, false).unwrap();
//!
//! keymap.set_visible(&esc, false);
//! keymap.set_temporary_description(&enter_id, "confirm");
//!
//! assert!(!keymap.is_visible("esc"));
//! assert_eq!(keymap.description("enter"), Some("confirm"));
//!
//! keymap.reset();
//! assert!(keymap.is_visible(&esc));
//! assert_eq!(keymap.description(&enter_id), Some("submit"));
//! ```

use crate::error::{Error, Result};
use crate::key;
use crate::layout;
use crate::style::Styles;
use std::collections::HashMap;
use std::num::NonZeroUsize;

/// Opaque handle to an entry, returned by [`Keymap::add_binding`].
///
/// Handles are positions in the keymap that issued them and are meaningless
/// for any other keymap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntryId(usize);

/// One binding's display state within a keymap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    binding: key::Binding,
    essential: bool,
    visible: bool,
    temporary: Option<String>,
}

impl Entry {
    fn new(binding: key::Binding, essential: bool) -> Self {
        Self {
            binding,
            essential,
            visible: true,
            temporary: None,
        }
    }

    /// The wrapped binding.
    pub fn binding(&self) -> &key::Binding {
        &self.binding
    }

    /// The binding label.
    pub fn label(&self) -> &str {
        self.binding.label()
    }

    /// Whether the entry belongs on the essential line.
    pub fn essential(&self) -> bool {
        self.essential
    }

    /// Whether the entry is currently shown.
    pub fn visible(&self) -> bool {
        self.visible
    }

    /// The temporary description, if one is set.
    pub fn temporary_description(&self) -> Option<&str> {
        self.temporary.as_deref()
    }

    /// The description to render: the temporary one if set, else the
    /// binding's own.
    pub fn description(&self) -> &str {
        self.temporary
            .as_deref()
            .unwrap_or(&self.binding.help().desc)
    }

    fn reset(&mut self) {
        self.visible = true;
        self.temporary = None;
    }
}

/// Something that can locate an entry in a keymap.
pub trait EntryKey {
    /// Returns the entry position, if the keymap holds it.
    fn locate(&self, keymap: &Keymap) -> Option<usize>;
}

impl EntryKey for EntryId {
    fn locate(&self, keymap: &Keymap) -> Option<usize> {
        (self.0 < keymap.entries.len()).then_some(self.0)
    }
}

impl EntryKey for str {
    fn locate(&self, keymap: &Keymap) -> Option<usize> {
        keymap.index.get(self).copied()
    }
}

impl EntryKey for String {
    fn locate(&self, keymap: &Keymap) -> Option<usize> {
        self.as_str().locate(keymap)
    }
}

impl EntryKey for key::Binding {
    fn locate(&self, keymap: &Keymap) -> Option<usize> {
        self.label().locate(keymap)
    }
}

/// The bindings of one context, with per-context layout and styling.
#[derive(Debug, Clone)]
pub struct Keymap {
    entries: Vec<Entry>,
    index: HashMap<String, usize>,
    columns: NonZeroUsize,
    /// Styles used when rendering this keymap.
    pub styles: Styles,
}

impl Keymap {
    /// Creates an empty keymap whose full grid targets `columns` columns.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidColumnCount`] when `columns` is zero.
    pub fn new(columns: usize) -> Result<Self> {
        Self::with_styles(columns, Styles::default())
    }

    /// Creates an empty keymap with the given styles.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidColumnCount`] when `columns` is zero.
    pub fn with_styles(columns: usize, styles: Styles) -> Result<Self> {
        let columns = NonZeroUsize::new(columns).ok_or(Error::InvalidColumnCount(columns))?;
        Ok(Self {
            entries: Vec::new(),
            index: HashMap::new(),
            columns,
            styles,
        })
    }

    /// Appends a binding. It starts visible and without a temporary
    /// description.
    ///
    /// # Errors
    ///
    /// [`Error::DuplicateBinding`] when a binding with the same label is
    /// already present.
    pub fn add_binding(&mut self, binding: key::Binding, essential: bool) -> Result<EntryId> {
        if self.index.contains_key(binding.label()) {
            return Err(Error::DuplicateBinding {
                label: binding.label().to_string(),
            });
        }
        let id = self.entries.len();
        self.index.insert(binding.label().to_string(), id);
        self.entries.push(Entry::new(binding, essential));
        Ok(EntryId(id))
    }

    /// Builder form of [`Keymap::add_binding`].
    ///
    /// # Errors
    ///
    /// [`Error::DuplicateBinding`] when a binding with the same label is
    /// already present.
    pub fn with_binding(mut self, binding: key::Binding, essential: bool) -> Result<Self> {
        self.add_binding(binding, essential)?;
        Ok(self)
    }

    /// The target column count of the full grid.
    pub fn columns(&self) -> NonZeroUsize {
        self.columns
    }

    /// Changes the target column count of the full grid.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidColumnCount`] when `columns` is zero; the keymap is
    /// left unchanged.
    pub fn set_columns(&mut self, columns: usize) -> Result<()> {
        self.columns = NonZeroUsize::new(columns).ok_or(Error::InvalidColumnCount(columns))?;
        Ok(())
    }

    /// All entries in insertion order.
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the keymap has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Looks up an entry.
    pub fn entry<K: EntryKey + ?Sized>(&self, key: &K) -> Option<&Entry> {
        key.locate(self).map(|i| &self.entries[i])
    }

    fn entry_mut<K: EntryKey + ?Sized>(&mut self, key: &K) -> Option<&mut Entry> {
        match key.locate(self) {
            Some(i) => Some(&mut self.entries[i]),
            None => {
                tracing::trace!("keymap: no entry for lookup, ignoring");
                None
            }
        }
    }

    /// Permanently changes the description of a binding. Survives
    /// [`Keymap::reset`]. Unknown keys are ignored.
    pub fn set_permanent_description<K: EntryKey + ?Sized>(
        &mut self,
        key: &K,
        desc: impl Into<String>,
    ) {
        if let Some(entry) = self.entry_mut(key) {
            let label = entry.binding.label().to_string();
            entry.binding.set_help(label, desc);
        }
    }

    /// Temporarily overrides the description of a binding until the next
    /// reset. An empty string removes the override. Unknown keys are
    /// ignored.
    pub fn set_temporary_description<K: EntryKey + ?Sized>(
        &mut self,
        key: &K,
        desc: impl Into<String>,
    ) {
        if let Some(entry) = self.entry_mut(key) {
            let desc = desc.into();
            entry.temporary = (!desc.is_empty()).then_some(desc);
        }
    }

    /// Shows or hides a binding until the next reset. Unknown keys are
    /// ignored.
    pub fn set_visible<K: EntryKey + ?Sized>(&mut self, key: &K, visible: bool) {
        if let Some(entry) = self.entry_mut(key) {
            entry.visible = visible;
        }
    }

    /// Whether a binding is shown. A binding the keymap does not hold is
    /// never shown, so this returns `false` for unknown keys.
    pub fn is_visible<K: EntryKey + ?Sized>(&self, key: &K) -> bool {
        self.entry(key).is_some_and(Entry::visible)
    }

    /// The effective description of a binding.
    pub fn description<K: EntryKey + ?Sized>(&self, key: &K) -> Option<&str> {
        self.entry(key).map(Entry::description)
    }

    /// Makes every entry visible again and drops every temporary
    /// description.
    pub fn reset(&mut self) {
        self.entries.iter_mut().for_each(Entry::reset);
    }

    /// Visible entries, in insertion order.
    pub fn visible_entries(&self) -> Vec<&Entry> {
        self.entries.iter().filter(|e| e.visible).collect()
    }

    /// Visible essential entries, in insertion order.
    pub fn visible_essential_entries(&self) -> Vec<&Entry> {
        self.entries
            .iter()
            .filter(|e| e.essential && e.visible)
            .collect()
    }

    /// Renders the essential line. See [`layout::view_essential`].
    pub fn view_essential(&self, width: usize) -> String {
        layout::view_essential(self, width)
    }

    /// Renders the full grid. See [`layout::view_full`].
    pub fn view_full(&self, width: usize) -> String {
        layout::view_full(self, width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyCode;

    fn binding(label: &str, desc: &str) -> key::Binding {
        key::Binding::new(vec![KeyCode::Char(label.chars().next().unwrap_or(' '))])
            .with_help(label, desc)
    }

    fn sample() -> Keymap {
        Keymap::new(2)
            .and_then(|k| k.with_binding(binding("s", "switch context"), true))
            .and_then(|k| k.with_binding(binding("esc", "quit"), false))
            .and_then(|k| k.with_binding(binding("h", "help"), true))
            .expect("valid keymap")
    }

    fn labels(entries: &[&Entry]) -> Vec<String> {
        entries.iter().map(|e| e.label().to_string()).collect()
    }

    #[test]
    fn test_zero_columns_rejected() {
        assert_eq!(Keymap::new(0).unwrap_err(), Error::InvalidColumnCount(0));
        let mut keymap = sample();
        assert!(keymap.set_columns(0).is_err());
        assert_eq!(keymap.columns().get(), 2);
        keymap.set_columns(3).unwrap();
        assert_eq!(keymap.columns().get(), 3);
    }

    #[test]
    fn test_duplicate_label_rejected() {
        let mut keymap = sample();
        let err = keymap.add_binding(binding("esc", "other"), true).unwrap_err();
        assert_eq!(
            err,
            Error::DuplicateBinding {
                label: "esc".to_string()
            }
        );
        assert_eq!(keymap.len(), 3);
    }

    #[test]
    fn test_new_entries_start_visible() {
        let keymap = sample();
        assert!(keymap.entries().iter().all(|e| e.visible()));
        assert!(keymap
            .entries()
            .iter()
            .all(|e| e.temporary_description().is_none()));
    }

    #[test]
    fn test_lookup_by_binding_label_and_id() {
        let mut keymap = Keymap::new(1).unwrap();
        let enter = binding("enter", "submit");
        let id = keymap.add_binding(enter.clone(), true).unwrap();

        assert_eq!(keymap.entry(&enter).map(Entry::label), Some("enter"));
        assert_eq!(keymap.entry("enter").map(Entry::label), Some("enter"));
        assert_eq!(keymap.entry(&id).map(Entry::label), Some("enter"));
        assert!(keymap.entry(&EntryId(7)).is_none());
    }

    #[test]
    fn test_unknown_key_is_not_visible() {
        let mut keymap = sample();
        assert!(!keymap.is_visible("ctrl+z"));
        keymap.set_visible("ctrl+z", true);
        assert!(!keymap.is_visible("ctrl+z"));
    }

    #[test]
    fn test_temporary_description_round_trip() {
        let mut keymap = sample();
        keymap.set_temporary_description("s", "X");
        assert_eq!(keymap.description("s"), Some("X"));
        keymap.set_temporary_description("s", "");
        assert_eq!(keymap.description("s"), Some("switch context"));
        assert!(keymap.entry("s").unwrap().temporary_description().is_none());
    }

    #[test]
    fn test_permanent_description_survives_reset() {
        let mut keymap = sample();
        keymap.set_permanent_description("h", "toggle help");
        keymap.set_temporary_description("h", "temporary");
        keymap.reset();
        assert_eq!(keymap.description("h"), Some("toggle help"));
        assert_eq!(keymap.entry("h").unwrap().label(), "h");
    }

    #[test]
    fn test_reset_restores_defaults() {
        let mut keymap = sample();
        keymap.set_visible("s", false);
        keymap.set_visible("esc", false);
        keymap.set_temporary_description("h", "later");

        keymap.reset();
        for entry in keymap.entries() {
            assert!(entry.visible());
            assert_eq!(entry.description(), entry.binding().help().desc);
        }

        let before = keymap.entries().to_vec();
        keymap.reset();
        assert_eq!(keymap.entries(), before.as_slice());
    }

    #[test]
    fn test_essential_entries_are_a_subsequence() {
        let mut keymap = sample();
        assert_eq!(labels(&keymap.visible_entries()), ["s", "esc", "h"]);
        assert_eq!(labels(&keymap.visible_essential_entries()), ["s", "h"]);

        keymap.set_visible("s", false);
        assert_eq!(labels(&keymap.visible_entries()), ["esc", "h"]);
        assert_eq!(labels(&keymap.visible_essential_entries()), ["h"]);

        let all = labels(&keymap.visible_entries());
        let essential = labels(&keymap.visible_essential_entries());
        let mut it = all.iter();
        assert!(essential.iter().all(|l| it.any(|a| a == l)));
    }

    #[test]
    fn test_essential_flag_is_fixed() {
        let mut keymap = sample();
        keymap.set_visible("esc", false);
        keymap.reset();
        assert!(!keymap.entry("esc").unwrap().essential());
        assert!(keymap.entry("s").unwrap().essential());
    }
}
