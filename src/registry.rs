//! The context registry: which keymaps exist and which one is active.
//!
//! An application usually has several interaction modes (a list, a form, a
//! confirmation dialog...), each with its own keys. Register one [`Keymap`]
//! per mode, switch between them as the mode changes, and render the help of
//! whichever is active with [`Registry::view`].
//!
//! Switching away from a context resets its keymap, so bindings hidden or
//! re-described while the context was active come back in their default
//! state the next time it is entered.
//!
//! The registry is a plain value owned by the application model. It is not
//! synchronised; wrap it in a lock if it must be shared across threads.
//!
//! # Example
//!
//! ```rust
//! use bubblehelp::key::Binding;
//! use bubblehelp::registry::{ContextId, Registry};
//! use crossterm::event::KeyCode;
//!
//! let esc = Binding::new(vec![KeyCode::Esc]).with_help("esc", "back");
//! let enter = Binding::new(vec![KeyCode::Enter]).with_help("enter", "submit");
//!
//! let mut registry: Registry = Registry::new();
//! let form = registry
//!     .new_keymap(2)
//!     .and_then(|k| k.with_binding(esc.clone(), true))
//!     .and_then(|k| k.with_binding(enter.clone(), true))
//!     .unwrap();
//! registry.register("form".into(), form);
//! registry.switch_to("form".into());
//!
//! registry.set_visible(&esc, false);
//! assert!(!registry.is_visible(&esc));
//!
//! registry.show_full = true;
//! let help = registry.view(0);
//! assert!(help.contains("submit"));
//!
//! // Leaving the context resets it.
//! registry.switch_to(ContextId::from("list"));
//! assert!(registry.get(&"form".into()).unwrap().is_visible(&esc));
//! assert!(!registry.show_full);
//! ```

use crate::error::{Error, Result};
use crate::key;
use crate::keymap::{EntryKey, Keymap};
use crate::layout;
use crate::style::Styles;
use bubbletea_rs::KeyMsg;
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

/// What [`Registry::view`] returns when no registered context is active.
pub const UNKNOWN_CONTEXT_VIEW: &str = "ERROR : UNKNOWN KEYMAP CONTEXT";

/// The default context identifier: a name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ContextId(String);

impl ContextId {
    /// Creates an identifier.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// The identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ContextId {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for ContextId {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl fmt::Display for ContextId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Keymaps by context, plus the active and previously active context.
///
/// `Id` is any identifier type; applications with a fixed set of modes
/// typically use an enum.
#[derive(Debug, Clone)]
pub struct Registry<Id = ContextId> {
    contexts: HashMap<Id, Keymap>,
    active: Option<Id>,
    previous: Option<Id>,
    default_style: Styles,
    /// Render the full grid instead of the essential line. Every context
    /// switch turns it back off.
    pub show_full: bool,
}

impl<Id> Default for Registry<Id> {
    fn default() -> Self {
        Self {
            contexts: HashMap::new(),
            active: None,
            previous: None,
            default_style: Styles::default(),
            show_full: false,
        }
    }
}

impl<Id> Registry<Id>
where
    Id: Eq + Hash + Clone + fmt::Debug,
{
    /// Creates an empty registry with the default style and no active
    /// context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Drops every registered keymap and returns the registry to its
    /// freshly created state, default style included.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// The style given to keymaps created by [`Registry::new_keymap`].
    pub fn default_style(&self) -> &Styles {
        &self.default_style
    }

    /// Changes the style given to keymaps created from now on. Keymaps that
    /// already exist keep theirs.
    pub fn set_default_style(&mut self, styles: Styles) {
        self.default_style = styles;
    }

    /// Creates an empty keymap using the registry's default style.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidColumnCount`] when `columns` is zero.
    pub fn new_keymap(&self, columns: usize) -> Result<Keymap> {
        Keymap::with_styles(columns, self.default_style.clone())
    }

    /// Registers a keymap under `id`, replacing (and returning) any keymap
    /// already registered there.
    pub fn register(&mut self, id: Id, keymap: Keymap) -> Option<Keymap> {
        let replaced = self.contexts.insert(id, keymap);
        if replaced.is_some() {
            tracing::debug!("bubblehelp: replaced an already registered context");
        }
        replaced
    }

    /// Registers a keymap under `id` unless the id is taken.
    ///
    /// # Errors
    ///
    /// [`Error::DuplicateContext`] when `id` is already registered; the
    /// registry is left unchanged.
    pub fn try_register(&mut self, id: Id, keymap: Keymap) -> Result<()> {
        if self.contexts.contains_key(&id) {
            return Err(Error::DuplicateContext(format!("{id:?}")));
        }
        self.contexts.insert(id, keymap);
        Ok(())
    }

    /// Removes a context. If it was active, the active id goes stale and
    /// [`Registry::current`] returns `None` until the next switch.
    pub fn unregister(&mut self, id: &Id) -> Option<Keymap> {
        self.contexts.remove(id)
    }

    /// Whether `id` is registered.
    pub fn contains(&self, id: &Id) -> bool {
        self.contexts.contains_key(id)
    }

    /// The keymap registered under `id`.
    pub fn get(&self, id: &Id) -> Option<&Keymap> {
        self.contexts.get(id)
    }

    /// The keymap registered under `id`, mutably.
    pub fn get_mut(&mut self, id: &Id) -> Option<&mut Keymap> {
        self.contexts.get_mut(id)
    }

    /// The active context id, registered or not.
    pub fn active_id(&self) -> Option<&Id> {
        self.active.as_ref()
    }

    /// The context that was active before the last switch.
    pub fn previous_id(&self) -> Option<&Id> {
        self.previous.as_ref()
    }

    /// The keymap of the active context.
    pub fn current(&self) -> Option<&Keymap> {
        self.active.as_ref().and_then(|id| self.contexts.get(id))
    }

    /// The keymap of the active context, mutably.
    pub fn current_mut(&mut self) -> Option<&mut Keymap> {
        match self.active.as_ref() {
            Some(id) => self.contexts.get_mut(id),
            None => None,
        }
    }

    /// Makes `id` the active context.
    ///
    /// The keymap being left is reset first. An unregistered `id` is logged
    /// and activated anyway; rendering then reports an unknown context until
    /// a registered one is activated.
    pub fn switch_to(&mut self, id: Id) {
        if !self.contexts.contains_key(&id) {
            tracing::warn!(context = ?id, "bubblehelp: context not found");
        }
        self.activate(Some(id));
    }

    /// Goes back to the context that was active before the last switch.
    pub fn switch_to_previous(&mut self) {
        match self.previous.clone() {
            Some(id) => self.switch_to(id),
            None => {
                tracing::warn!("bubblehelp: no previous context");
                self.activate(None);
            }
        }
    }

    fn activate(&mut self, next: Option<Id>) {
        if let Some(keymap) = self.current_mut() {
            keymap.reset();
        }
        tracing::debug!(from = ?self.active, to = ?next, "bubblehelp: switching context");
        self.previous = std::mem::replace(&mut self.active, next);
        self.show_full = false;
    }

    /// Flips between the essential line and the full grid.
    pub fn toggle_show_full(&mut self) {
        self.show_full = !self.show_full;
    }

    /// Temporarily re-describes a binding of the active context. An empty
    /// string restores the permanent description.
    pub fn set_temporary_description<K: EntryKey + ?Sized>(
        &mut self,
        key: &K,
        desc: impl Into<String>,
    ) {
        if let Some(keymap) = self.current_mut() {
            keymap.set_temporary_description(key, desc);
        }
    }

    /// Shows or hides a binding of the active context.
    pub fn set_visible<K: EntryKey + ?Sized>(&mut self, key: &K, visible: bool) {
        if let Some(keymap) = self.current_mut() {
            keymap.set_visible(key, visible);
        }
    }

    /// Whether a binding of the active context is shown. `false` without an
    /// active context or when the binding is not part of it.
    pub fn is_visible<K: EntryKey + ?Sized>(&self, key: &K) -> bool {
        self.current().is_some_and(|k| k.is_visible(key))
    }

    /// Whether a key message triggers `binding` *and* the binding is shown in
    /// the active context. Hidden bindings are inactive.
    pub fn triggered(&self, msg: &KeyMsg, binding: &key::Binding) -> bool {
        binding.matches(msg) && self.is_visible(binding)
    }

    /// Renders the help of the active context: the full grid when
    /// [`Registry::show_full`] is set, the essential line otherwise.
    /// Returns [`UNKNOWN_CONTEXT_VIEW`] when no registered context is active.
    pub fn view(&self, width: usize) -> String {
        match self.current() {
            None => UNKNOWN_CONTEXT_VIEW.to_string(),
            Some(keymap) if self.show_full => layout::view_full(keymap, width),
            Some(keymap) => layout::view_essential(keymap, width),
        }
    }
}
