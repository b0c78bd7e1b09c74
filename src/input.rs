//! Keyboard shortcuts and the handoff poll timer.

use crate::prelude::*;

/// Everything a key can trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    OpenFile,
    IncreaseAlpha,
    DecreaseAlpha,
    PickBackground,
    PickForeground,
    ToggleHelp,
    ToggleTopmost,
    IncreaseAlphaStep,
    DecreaseAlphaStep,
    GrowWindow,
    ShrinkWindow,
    NextPage,
    PreviousPage,
}

const CTRL_SHIFT: Modifiers = Modifiers {
    alt: false,
    ctrl: true,
    shift: true,
    mac_cmd: false,
    command: false,
};

/// Window-wide shortcuts. Ctrl is also satisfied by Cmd on macOS.
const SHORTCUTS: &[(Modifiers, Key, Action)] = &[
    (CTRL_SHIFT, Key::ArrowUp, Action::IncreaseAlphaStep),
    (CTRL_SHIFT, Key::ArrowDown, Action::DecreaseAlphaStep),
    (Modifiers::CTRL, Key::O, Action::OpenFile),
    (Modifiers::CTRL, Key::ArrowUp, Action::IncreaseAlpha),
    (Modifiers::CTRL, Key::ArrowDown, Action::DecreaseAlpha),
    (Modifiers::CTRL, Key::B, Action::PickBackground),
    (Modifiers::CTRL, Key::F, Action::PickForeground),
    (Modifiers::CTRL, Key::H, Action::ToggleHelp),
    (Modifiers::CTRL, Key::T, Action::ToggleTopmost),
    (Modifiers::CTRL, Key::Plus, Action::GrowWindow),
    (Modifiers::CTRL, Key::Equals, Action::GrowWindow),
    (Modifiers::CTRL, Key::Minus, Action::ShrinkWindow),
];

/// Keys that only apply while the text area has focus.
const PAGE_KEYS: &[(Key, Action)] = &[
    (Key::Space, Action::NextPage),
    (Key::R, Action::PreviousPage),
];

/// Exact chord match: Shift and Ctrl must be held iff the pattern asks for
/// them, Alt never.
fn chord_matches(pressed: Modifiers, pattern: Modifiers) -> bool {
    !pressed.alt
        && pressed.shift == pattern.shift
        && (pressed.ctrl || pressed.command || pressed.mac_cmd) == pattern.ctrl
}

fn lookup(key: Key, modifiers: Modifiers, text_focused: bool) -> Option<Action> {
    let shortcut = SHORTCUTS
        .iter()
        .find(|(pattern, k, _)| *k == key && chord_matches(modifiers, *pattern))
        .map(|&(_, _, action)| action);
    if shortcut.is_some() || !text_focused || !chord_matches(modifiers, Modifiers::NONE) {
        return shortcut;
    }
    PAGE_KEYS
        .iter()
        .find(|(k, _)| *k == key)
        .map(|&(_, action)| action)
}

/// Consume this frame's shortcut presses and map them to actions, one per
/// press, in the order the keys arrived. Unmatched events are left alone.
pub fn read_shortcuts(input: &mut egui::InputState, text_focused: bool) -> Vec<Action> {
    let mut actions = Vec::new();
    input.events.retain(|event| {
        let egui::Event::Key {
            key,
            pressed: true,
            modifiers,
            ..
        } = event
        else {
            return true;
        };
        match lookup(*key, *modifiers, text_focused) {
            Some(action) => {
                actions.push(action);
                false
            }
            None => true,
        }
    });
    actions
}

/// Fires at a fixed period; drives the handoff queue drain.
#[derive(Debug, Clone)]
pub struct PollTimer {
    period: Duration,
    last_tick: Instant,
}

impl Default for PollTimer {
    fn default() -> Self {
        Self::new(Duration::from_millis(POLL_INTERVAL_MS))
    }
}

impl PollTimer {
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            last_tick: Instant::now(),
        }
    }

    /// True once per period.
    pub fn due(&mut self, now: Instant) -> bool {
        if now.saturating_duration_since(self.last_tick) >= self.period {
            self.last_tick = now;
            true
        } else {
            false
        }
    }

    /// Time left until the next tick.
    pub fn remaining(&self, now: Instant) -> Duration {
        self.period
            .saturating_sub(now.saturating_duration_since(self.last_tick))
    }
}
