//! Two help contexts and the keys that move between them.
//!
//! - `s` switches from the start context to the next one
//! - `enter` (next context) hides or shows `esc`
//! - `esc` goes back to the start context, or quits from it
//! - `h` toggles the full help grid

use bubblehelp::prelude::*;
use bubbletea_rs::{quit, Cmd, KeyMsg, Model, Msg, Program, WindowSizeMsg};
use crossterm::event::KeyCode;
use std::fmt;

const HELP_WIDTH: usize = 120;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Mode {
    Start,
    Next,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Start => f.write_str("start"),
            Mode::Next => f.write_str("next"),
        }
    }
}

struct Keys {
    esc: Binding,
    s: Binding,
    h: Binding,
    enter: Binding,
}

impl Default for Keys {
    fn default() -> Self {
        Self {
            esc: Binding::new(vec![KeyCode::Esc]).with_help("esc", "back"),
            s: Binding::new(vec![KeyCode::Char('s')]).with_help("s", "s key"),
            h: Binding::new(vec![KeyCode::Char('h')]).with_help("h", "help"),
            enter: Binding::new(vec![KeyCode::Enter]).with_help("enter", "submit"),
        }
    }
}

fn contexts(keys: &Keys) -> Result<Registry<Mode>, Error> {
    let mut help = Registry::new();

    let mut start = help.new_keymap(2)?;
    start.add_binding(keys.s.clone(), true)?;
    start.set_permanent_description(&keys.s, "switch context");
    start.add_binding(keys.esc.clone(), false)?;
    start.set_permanent_description(&keys.esc, "quit");
    start.add_binding(keys.h.clone(), true)?;
    help.register(Mode::Start, start);

    let mut next = help.new_keymap(2)?;
    next.add_binding(keys.esc.clone(), true)?;
    next.add_binding(keys.enter.clone(), true)?;
    next.set_permanent_description(&keys.enter, "hide/show esc key");
    next.add_binding(keys.h.clone(), true)?;
    help.register(Mode::Next, next);

    help.switch_to(Mode::Start);
    Ok(help)
}

struct App {
    keys: Keys,
    help: Registry<Mode>,
    width: u16,
}

impl Model for App {
    fn init() -> (Self, Option<Cmd>) {
        let keys = Keys::default();
        // `main` already built the same registry once and bailed out on error.
        let help = contexts(&keys).unwrap_or_default();
        (
            Self {
                keys,
                help,
                width: 0,
            },
            None,
        )
    }

    fn update(&mut self, msg: Msg) -> Option<Cmd> {
        if let Some(size) = msg.downcast_ref::<WindowSizeMsg>() {
            self.width = size.width;
            return None;
        }

        let key = msg.downcast_ref::<KeyMsg>()?;
        if self.help.triggered(key, &self.keys.s) {
            self.help.switch_to(Mode::Next);
        } else if self.help.triggered(key, &self.keys.enter) {
            let shown = self.help.is_visible(&self.keys.esc);
            self.help.set_visible(&self.keys.esc, !shown);
        } else if self.help.triggered(key, &self.keys.esc) {
            if self.help.active_id() == Some(&Mode::Start) {
                return Some(quit());
            }
            self.help.switch_to(Mode::Start);
        } else if self.keys.h.matches(key) {
            self.help.toggle_show_full();
        }
        None
    }

    fn view(&self) -> String {
        let context = self
            .help
            .active_id()
            .map(Mode::to_string)
            .unwrap_or_default();
        let width = match self.width {
            0 => HELP_WIDTH,
            w => usize::from(w).min(HELP_WIDTH),
        };
        format!(
            "bubblehelp demo\nCurrent context : {}\n\n{}",
            context,
            self.help.view(width)
        )
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    contexts(&Keys::default())?;

    let program = Program::<App>::builder().alt_screen(true).build()?;
    program.run().await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contexts_build_and_start_in_start() {
        let keys = Keys::default();
        let help = contexts(&keys).expect("contexts build");
        assert_eq!(help.active_id(), Some(&Mode::Start));
        assert!(help.contains(&Mode::Next));
        assert_eq!(
            help.current().and_then(|k| k.description(&keys.esc)),
            Some("quit")
        );
    }
}
