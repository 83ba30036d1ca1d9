//! Gesture interpreter: pointer input plus modifiers to move/rotate/scale.

use crate::elements::{ElementId, ElementPatch, ElementStore, OverlayElement};
use crate::input::Modifiers;
use crate::transform;
use kurbo::Point;
use serde::{Deserialize, Serialize};

/// Transform applied while a gesture is live.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GestureAction {
    Move,
    Rotate,
    Scale,
}

/// Predicate over the modifier keys held at pointer-down.
pub type ModifierPredicate = fn(&Modifiers) -> bool;

/// Ordered modifier rules choosing a gesture action. First match wins.
#[derive(Debug, Clone)]
pub struct ActionPolicy {
    rules: Vec<(ModifierPredicate, GestureAction)>,
    fallback: GestureAction,
}

impl Default for ActionPolicy {
    /// Alt rotates, otherwise Shift scales, otherwise move.
    fn default() -> Self {
        Self::new(GestureAction::Move)
            .with_rule(|m| m.alt, GestureAction::Rotate)
            .with_rule(|m| m.shift, GestureAction::Scale)
    }
}

impl ActionPolicy {
    /// A policy with no rules that always yields `fallback`.
    pub fn new(fallback: GestureAction) -> Self {
        Self {
            rules: Vec::new(),
            fallback,
        }
    }

    /// Append a rule with lower priority than every existing one.
    pub fn with_rule(mut self, predicate: ModifierPredicate, action: GestureAction) -> Self {
        self.rules.push((predicate, action));
        self
    }

    pub fn choose(&self, modifiers: &Modifiers) -> GestureAction {
        self.rules
            .iter()
            .find(|(predicate, _)| predicate(modifiers))
            .map(|&(_, action)| action)
            .unwrap_or(self.fallback)
    }
}

/// Record of the gesture in progress.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureSession {
    pub target: ElementId,
    pub action: GestureAction,
    /// Pointer angle around the element center at pointer-down, in radians.
    pub start_angle: f64,
    /// Pointer distance from the element center at pointer-down.
    pub start_distance: f64,
}

/// Owns the single live gesture session, if any.
#[derive(Debug, Clone, Default)]
pub struct GestureInterpreter {
    session: Option<GestureSession>,
    policy: ActionPolicy,
}

impl GestureInterpreter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(policy: ActionPolicy) -> Self {
        Self {
            session: None,
            policy,
        }
    }

    /// Start a gesture on `element`. A live session is ended first.
    pub fn begin(&mut self, pointer: Point, element: &OverlayElement, modifiers: Modifiers) -> GestureAction {
        if let Some(previous) = self.session {
            log::debug!("Ending gesture on {} before starting a new one", previous.target);
            self.end();
        }

        let center = element.center();
        let action = self.policy.choose(&modifiers);
        let session = GestureSession {
            target: element.id(),
            action,
            start_angle: transform::angle(center, pointer),
            start_distance: transform::distance(center, pointer),
        };
        log::debug!("Begin {:?} gesture on {}", action, session.target);
        self.session = Some(session);
        action
    }

    /// Apply the live gesture for a new pointer position.
    ///
    /// Returns `true` if an element was updated.
    pub fn update(&mut self, pointer: Point, store: &mut ElementStore) -> bool {
        let Some(session) = self.session else {
            return false;
        };
        let Some(element) = store.get(session.target) else {
            return false;
        };

        let center = element.center();
        let patch = match session.action {
            GestureAction::Move => ElementPatch::position(transform::move_position(pointer)),
            GestureAction::Rotate => ElementPatch::rotation(transform::rotate(
                element.rotation_degrees,
                center,
                pointer,
                session.start_angle,
            )),
            GestureAction::Scale => {
                match transform::scale(center, pointer, session.start_distance) {
                    Some(scale) => ElementPatch::scale(scale),
                    None => return false,
                }
            }
        };
        store.update(session.target, patch)
    }

    /// Clear the live session. Does nothing when idle.
    pub fn end(&mut self) {
        if let Some(session) = self.session.take() {
            log::debug!("End {:?} gesture on {}", session.action, session.target);
        }
    }

    pub fn session(&self) -> Option<&GestureSession> {
        self.session.as_ref()
    }

    pub fn is_active(&self) -> bool {
        self.session.is_some()
    }

    /// The element currently selected by a gesture.
    pub fn selected(&self) -> Option<ElementId> {
        self.session.map(|s| s.target)
    }

    pub fn policy(&self) -> &ActionPolicy {
        &self.policy
    }
}
