#![warn(missing_docs)]
#![doc(html_root_url = "https://docs.rs/bubblehelp-rs/")]

//! # bubblehelp
//!
//! Contextual key binding help for [bubbletea-rs](https://github.com/joshka/bubbletea-rs)
//! applications.
//!
//! Applications rarely have a single set of keys: a list, a search box and a
//! confirmation dialog each accept different input. bubblehelp keeps one
//! [`Keymap`] per interaction *context* in a [`Registry`], tracks which
//! bindings are currently visible and how they are described, and renders
//! the active context either as a compact one-line summary or as a full
//! multi-column grid.
//!
//! ## Features
//!
//! - **Contexts**: register a keymap per mode and switch between them; the
//!   context being left is reset automatically
//! - **Essential bindings**: mark the few keys that belong on the one-line
//!   summary; the full grid shows everything that is visible
//! - **Runtime state**: hide keys or give them a temporary description while
//!   a context is active
//! - **Balanced grid**: the full view spreads bindings over a target number
//!   of columns and never strands a single binding in the last column
//! - **Styling**: every rendered piece has its own lipgloss style
//!
//! ## Quick Start
//!
//! ```rust
//! use bubblehelp::prelude::*;
//! use crossterm::event::KeyCode;
//!
//! let quit = Binding::new(vec![KeyCode::Char('q')]).with_help("q", "quit");
//! let help = Binding::new(vec![KeyCode::Char('?')]).with_help("?", "more");
//! let open = Binding::new(vec![KeyCode::Enter]).with_help("enter", "open");
//!
//! let mut registry: Registry = Registry::new();
//! let browse = registry
//!     .new_keymap(2)
//!     .and_then(|k| k.with_binding(quit.clone(), true))
//!     .and_then(|k| k.with_binding(help.clone(), true))
//!     .and_then(|k| k.with_binding(open.clone(), false))
//!     .expect("valid keymap");
//!
//! registry.register("browse".into(), browse);
//! registry.switch_to("browse".into());
//!
//! // One line with `q` and `?`, centred in 80 columns.
//! let short = registry.view(80);
//! assert!(short.contains("quit"));
//! assert!(!short.contains("open"));
//!
//! // The full grid lists every visible binding.
//! registry.toggle_show_full();
//! assert!(registry.view(80).contains("open"));
//! ```
//!
//! ## Integration with bubbletea-rs
//!
//! The registry lives in the application model. Key handlers check
//! [`Registry::triggered`] so hidden bindings stay inert, and `view` appends
//! the help below the content:
//!
//! ```rust
//! use bubblehelp::prelude::*;
//! use bubbletea_rs::{KeyMsg, Msg};
//!
//! struct App {
//!     help: Registry,
//!     toggle: Binding,
//! }
//!
//! impl App {
//!     fn update(&mut self, msg: Msg) {
//!         if let Some(key) = msg.downcast_ref::<KeyMsg>() {
//!             if self.help.triggered(key, &self.toggle) {
//!                 self.help.toggle_show_full();
//!             }
//!         }
//!     }
//!
//!     fn view(&self) -> String {
//!         format!("content\n\n{}", self.help.view(80))
//!     }
//! }
//! ```

pub mod error;
pub mod key;
pub mod keymap;
pub mod layout;
pub mod registry;
pub mod style;

pub use error::{Error, Result};
pub use key::{matches, new_binding, with_help, with_keys, Binding, Help as KeyHelp, KeyPress};
pub use keymap::{Entry, EntryId, EntryKey, Keymap};
pub use layout::{plan_columns, view_essential, view_full};
pub use registry::{ContextId, Registry, UNKNOWN_CONTEXT_VIEW};
pub use style::Styles;

/// Prelude module for convenient imports.
///
/// ```rust
/// use bubblehelp::prelude::*;
///
/// let registry: Registry = Registry::new();
/// assert!(registry.current().is_none());
/// ```
pub mod prelude {
    pub use crate::error::Error;
    pub use crate::key::{Binding, KeyPress};
    pub use crate::keymap::{Entry, EntryId, EntryKey, Keymap};
    pub use crate::layout::{view_essential, view_full};
    pub use crate::registry::{ContextId, Registry, UNKNOWN_CONTEXT_VIEW};
    pub use crate::style::Styles;
}
