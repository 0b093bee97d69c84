//! Global keyboard shortcuts
//!
//! Shortcuts are checked before any view-specific key handling. Each one is
//! registered with `subscribe` and removed with `unsubscribe`, so the owner
//! decides exactly how long a binding stays live.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Action fired by a global shortcut
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShortcutAction {
    /// Show or hide the search overlay
    ToggleOverlay,
}

/// Handle returned by `Shortcuts::subscribe`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// A key plus the modifiers that may trigger it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyBinding {
    pub key: char,
    /// At least one of these modifiers must be held
    pub any_of: KeyModifiers,
}

impl KeyBinding {
    /// Ctrl+K or Cmd+K
    pub const fn command_k() -> Self {
        Self {
            key: 'k',
            any_of: KeyModifiers::CONTROL.union(KeyModifiers::SUPER),
        }
    }

    pub fn matches(&self, event: &KeyEvent) -> bool {
        let KeyCode::Char(c) = event.code else {
            return false;
        };
        if !c.eq_ignore_ascii_case(&self.key) {
            return false;
        }
        if !event.modifiers.intersects(self.any_of) {
            return false;
        }
        // Alt changes the chord; Shift only changes case
        let extra = event.modifiers - self.any_of - KeyModifiers::SHIFT;
        extra.is_empty()
    }
}

#[derive(Debug)]
struct Subscription {
    id: SubscriptionId,
    binding: KeyBinding,
    action: ShortcutAction,
}

/// Registry of live global shortcuts
#[derive(Debug, Default)]
pub struct Shortcuts {
    subscriptions: Vec<Subscription>,
    next_id: u64,
}

impl Shortcuts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, binding: KeyBinding, action: ShortcutAction) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.subscriptions.push(Subscription { id, binding, action });
        id
    }

    /// Remove a subscription. Returns false if it was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscriptions.len();
        self.subscriptions.retain(|s| s.id != id);
        self.subscriptions.len() != before
    }

    /// Find the action bound to this key event, if any
    pub fn dispatch(&self, event: &KeyEvent) -> Option<ShortcutAction> {
        self.subscriptions
            .iter()
            .find(|s| s.binding.matches(event))
            .map(|s| s.action)
    }

    pub fn len(&self) -> usize {
        self.subscriptions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subscriptions.is_empty()
    }
}
