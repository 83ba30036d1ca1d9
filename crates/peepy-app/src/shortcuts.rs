//! Modifier hints shown next to overlay elements.

use peepy_core::gesture::{ActionPolicy, GestureAction};
use peepy_core::input::Modifiers;

/// A modifier-key hint for a gesture.
#[derive(Debug, Clone)]
pub struct GestureHint {
    pub modifiers: Modifiers,
    pub action: GestureAction,
    pub description: &'static str,
}

impl GestureHint {
    pub const fn new(modifiers: Modifiers, action: GestureAction, description: &'static str) -> Self {
        Self {
            modifiers,
            action,
            description,
        }
    }

    /// Format the modifier combination for display (e.g., "Alt+Drag").
    pub fn format(&self) -> String {
        let mut parts = Vec::new();
        if self.modifiers.ctrl {
            parts.push("Ctrl");
        }
        if self.modifiers.alt {
            parts.push("Alt");
        }
        if self.modifiers.shift {
            parts.push("Shift");
        }
        parts.push("Drag");
        parts.join("+")
    }
}

/// Registry of gesture hints.
pub struct HintRegistry;

impl HintRegistry {
    pub fn all() -> Vec<GestureHint> {
        vec![
            GestureHint::new(Modifiers::NONE, GestureAction::Move, "Move element"),
            GestureHint::new(Modifiers::alt(), GestureAction::Rotate, "Rotate around center"),
            GestureHint::new(Modifiers::shift(), GestureAction::Scale, "Scale from center"),
        ]
    }

    /// One-line tooltip for an element.
    pub fn tooltip() -> String {
        "Hold Alt to rotate • Hold Shift to scale".to_string()
    }

    /// Print all hints to console.
    pub fn print_all() {
        println!("\n=== Gestures ===");
        for hint in Self::all() {
            println!("  {:20} {}", hint.format(), hint.description);
        }
        println!();
    }

    /// Check every hint against what `policy` actually does.
    pub fn matches_policy(policy: &ActionPolicy) -> bool {
        Self::all()
            .iter()
            .all(|hint| policy.choose(&hint.modifiers) == hint.action)
    }
}
