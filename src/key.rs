//! Key bindings: what triggers an action and how it is described in help.
//!
//! A [`Binding`] pairs the key presses that trigger an action with a [`Help`]
//! entry. The help key (for example `"ctrl+s"` or `"↑/k"`) doubles as the
//! binding's *label*: keymaps use it to identify the binding, so it must be
//! unique within one keymap.
//!
//! ```rust
//! use bubblehelp::key::{self, Binding};
//! use bubbletea_rs::KeyMsg;
//! use crossterm::event::{KeyCode, KeyModifiers};
//!
//! let save = Binding::new(vec![(KeyCode::Char('s'), KeyModifiers::CONTROL)])
//!     .with_help("ctrl+s", "save");
//! let quit = key::new_binding(vec![
//!     key::with_keys(vec![KeyCode::Char('q'), KeyCode::Esc]),
//!     key::with_help("q", "quit"),
//! ]);
//!
//! let msg = KeyMsg {
//!     key: KeyCode::Esc,
//!     modifiers: KeyModifiers::NONE,
//! };
//! assert!(quit.matches(&msg));
//! assert!(!save.matches(&msg));
//! assert!(key::matches(&msg, &[&save, &quit]));
//! ```

use bubbletea_rs::KeyMsg;
use crossterm::event::{KeyCode, KeyModifiers};

/// A single key press: a key code plus the modifiers held with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyPress {
    /// The key itself.
    pub code: KeyCode,
    /// Modifiers that must be held.
    pub mods: KeyModifiers,
}

impl From<KeyCode> for KeyPress {
    fn from(code: KeyCode) -> Self {
        Self {
            code,
            mods: KeyModifiers::NONE,
        }
    }
}

impl From<(KeyCode, KeyModifiers)> for KeyPress {
    fn from((code, mods): (KeyCode, KeyModifiers)) -> Self {
        Self { code, mods }
    }
}

impl KeyPress {
    /// Reports whether a key message is this key press.
    ///
    /// Shift is ignored for character keys because terminals already fold
    /// it into the character (`'G'` arrives as `Char('G')` with or without
    /// the SHIFT flag, depending on the platform).
    pub fn matches(&self, msg: &KeyMsg) -> bool {
        if self.code != msg.key {
            return false;
        }
        match self.code {
            KeyCode::Char(_) => {
                self.mods.difference(KeyModifiers::SHIFT)
                    == msg.modifiers.difference(KeyModifiers::SHIFT)
            }
            _ => self.mods == msg.modifiers,
        }
    }
}

/// The help text attached to a binding.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Help {
    /// The key as shown to the user, e.g. `"enter"`. Also the binding label.
    pub key: String,
    /// What the key does, e.g. `"submit"`.
    pub desc: String,
}

/// A key binding: trigger keys plus help text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Binding {
    keys: Vec<KeyPress>,
    help: Help,
}

impl Binding {
    /// Creates a binding triggered by any of `keys`, with empty help.
    pub fn new<K: Into<KeyPress>>(keys: Vec<K>) -> Self {
        Self {
            keys: keys.into_iter().map(Into::into).collect(),
            help: Help::default(),
        }
    }

    /// Sets the help key and description.
    pub fn with_help(mut self, key: impl Into<String>, desc: impl Into<String>) -> Self {
        self.set_help(key, desc);
        self
    }

    /// Replaces the help key and description in place.
    pub fn set_help(&mut self, key: impl Into<String>, desc: impl Into<String>) {
        self.help = Help {
            key: key.into(),
            desc: desc.into(),
        };
    }

    /// Replaces the trigger keys.
    pub fn set_keys<K: Into<KeyPress>>(&mut self, keys: Vec<K>) {
        self.keys = keys.into_iter().map(Into::into).collect();
    }

    /// The trigger keys.
    pub fn keys(&self) -> &[KeyPress] {
        &self.keys
    }

    /// The help entry.
    pub fn help(&self) -> &Help {
        &self.help
    }

    /// The binding label, i.e. its help key.
    pub fn label(&self) -> &str {
        &self.help.key
    }

    /// Reports whether the key message triggers this binding.
    pub fn matches(&self, msg: &KeyMsg) -> bool {
        self.keys.iter().any(|k| k.matches(msg))
    }
}

/// A functional option applied by [`new_binding`].
pub type BindingOpt = Box<dyn FnOnce(&mut Binding)>;

/// Builds a binding from a list of options.
pub fn new_binding(opts: Vec<BindingOpt>) -> Binding {
    let mut binding = Binding::default();
    for opt in opts {
        opt(&mut binding);
    }
    binding
}

/// Option setting the trigger keys.
pub fn with_keys<K: Into<KeyPress> + 'static>(keys: Vec<K>) -> BindingOpt {
    Box::new(move |b: &mut Binding| b.set_keys(keys))
}

/// Option setting the help key and description.
pub fn with_help(key: impl Into<String>, desc: impl Into<String>) -> BindingOpt {
    let key = key.into();
    let desc = desc.into();
    Box::new(move |b: &mut Binding| b.set_help(key, desc))
}

/// Reports whether the key message triggers any of the bindings.
pub fn matches(msg: &KeyMsg, bindings: &[&Binding]) -> bool {
    bindings.iter().any(|b| b.matches(msg))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn msg(key: KeyCode, modifiers: KeyModifiers) -> KeyMsg {
        KeyMsg { key, modifiers }
    }

    #[test]
    fn test_binding_matches_any_of_its_keys() {
        let up = Binding::new(vec![KeyCode::Up, KeyCode::Char('k')]).with_help("↑/k", "up");
        assert!(up.matches(&msg(KeyCode::Up, KeyModifiers::NONE)));
        assert!(up.matches(&msg(KeyCode::Char('k'), KeyModifiers::NONE)));
        assert!(!up.matches(&msg(KeyCode::Down, KeyModifiers::NONE)));
    }

    #[test]
    fn test_modifiers_must_match() {
        let save = Binding::new(vec![(KeyCode::Char('s'), KeyModifiers::CONTROL)]);
        assert!(save.matches(&msg(KeyCode::Char('s'), KeyModifiers::CONTROL)));
        assert!(!save.matches(&msg(KeyCode::Char('s'), KeyModifiers::NONE)));

        let tab = Binding::new(vec![KeyCode::Tab]);
        assert!(!tab.matches(&msg(KeyCode::Tab, KeyModifiers::SHIFT)));
    }

    #[test]
    fn test_shift_is_ignored_for_characters() {
        let bottom = Binding::new(vec![KeyCode::Char('G')]);
        assert!(bottom.matches(&msg(KeyCode::Char('G'), KeyModifiers::SHIFT)));
        assert!(bottom.matches(&msg(KeyCode::Char('G'), KeyModifiers::NONE)));
        assert!(!bottom.matches(&msg(KeyCode::Char('G'), KeyModifiers::CONTROL)));
    }

    #[test]
    fn test_options_builder() {
        let b = new_binding(vec![
            with_keys(vec![KeyCode::Enter]),
            with_help("enter", "submit"),
        ]);
        assert_eq!(b.label(), "enter");
        assert_eq!(b.help().desc, "submit");
        assert_eq!(b.keys(), &[KeyPress::from(KeyCode::Enter)]);
    }

    #[test]
    fn test_set_help_keeps_keys() {
        let mut b = Binding::new(vec![KeyCode::Esc]).with_help("esc", "back");
        b.set_help("esc", "quit");
        assert_eq!(b.help().desc, "quit");
        assert_eq!(b.keys().len(), 1);
    }
}
