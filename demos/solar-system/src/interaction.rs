//! Hover / selection state machine.
//!
//! All interaction flows through [`reduce`], a pure transition function over
//! [`InteractionState`]. Display text is derived from the state with a fixed
//! priority: selection, then hover, then the idle title.

use serde::{Deserialize, Serialize};

use crate::bodies::PlanetId;

pub const MIN_SPEED: f32 = 0.0;
pub const MAX_SPEED: f32 = 5.0;
pub const DEFAULT_SPEED: f32 = 1.0;

pub const IDLE_TITLE: &str = "Solar System";
pub const IDLE_SUBTEXT: &str = "Click a planet to focus";
pub const HOVER_SUBTEXT: &str = "Click to focus";
pub const LOCKED_SUBTEXT: &str = "LOCKED";

/// Process-wide interaction state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InteractionState {
    pub hovered: Option<PlanetId>,
    pub selected: Option<PlanetId>,
    pub speed_multiplier: f32,
}

impl Default for InteractionState {
    fn default() -> Self {
        Self {
            hovered: None,
            selected: None,
            speed_multiplier: DEFAULT_SPEED,
        }
    }
}

/// Everything that can change interaction state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Action {
    /// Pointer entered a planet.
    Enter(PlanetId),
    /// Pointer left whatever it was over.
    Leave,
    ClickPlanet(PlanetId),
    ClickBackground,
    Unlock,
    SetSpeed(f32),
}

/// Coarse view of the state, as a named machine state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Hovering(PlanetId),
    Selected(PlanetId),
    SelectedAndHovering(PlanetId, PlanetId),
}

/// Clamp a requested multiplier into `[MIN_SPEED, MAX_SPEED]`.
/// NaN yields `None` and the caller keeps the current value.
pub fn clamp_speed(value: f32) -> Option<f32> {
    if value.is_nan() {
        None
    } else {
        Some(value.clamp(MIN_SPEED, MAX_SPEED))
    }
}

/// Apply one action. Total over every state and action.
pub fn reduce(state: InteractionState, action: Action) -> InteractionState {
    match action {
        Action::Enter(p) => InteractionState { hovered: Some(p), ..state },
        Action::Leave => InteractionState { hovered: None, ..state },
        Action::ClickPlanet(p) => InteractionState { selected: Some(p), ..state },
        Action::ClickBackground | Action::Unlock => InteractionState { selected: None, ..state },
        Action::SetSpeed(v) => match clamp_speed(v) {
            Some(speed_multiplier) => InteractionState { speed_multiplier, ..state },
            None => {
                log::warn!("speed {v} rejected; keeping {}", state.speed_multiplier);
                state
            }
        },
    }
}

impl InteractionState {
    pub fn phase(&self) -> Phase {
        match (self.selected, self.hovered) {
            (None, None) => Phase::Idle,
            (None, Some(h)) => Phase::Hovering(h),
            (Some(s), None) => Phase::Selected(s),
            (Some(s), Some(h)) => Phase::SelectedAndHovering(s, h),
        }
    }

    /// Title and subtitle for the overlay.
    pub fn display_text(&self) -> (&'static str, &'static str) {
        if let Some(selected) = self.selected {
            (selected.name(), LOCKED_SUBTEXT)
        } else if let Some(hovered) = self.hovered {
            (hovered.name(), HOVER_SUBTEXT)
        } else {
            (IDLE_TITLE, IDLE_SUBTEXT)
        }
    }

    pub fn selection_active(&self) -> bool {
        self.selected.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bodies::planet_by_name;

    fn planet(name: &str) -> PlanetId {
        planet_by_name(name).unwrap()
    }

    fn run(actions: &[Action]) -> InteractionState {
        actions.iter().fold(InteractionState::default(), |s, a| reduce(s, *a))
    }

    #[test]
    fn starts_idle() {
        let state = InteractionState::default();
        assert_eq!(state.phase(), Phase::Idle);
        assert_eq!(state.speed_multiplier, 1.0);
        assert_eq!(state.display_text(), ("Solar System", "Click a planet to focus"));
    }

    #[test]
    fn hover_and_unhover() {
        let jupiter = planet("Jupiter");
        let state = run(&[Action::Enter(jupiter)]);
        assert_eq!(state.phase(), Phase::Hovering(jupiter));
        assert_eq!(state.display_text(), ("Jupiter", "Click to focus"));

        let state = reduce(state, Action::Leave);
        assert_eq!(state.phase(), Phase::Idle);
        assert_eq!(state.display_text(), ("Solar System", "Click a planet to focus"));
    }

    #[test]
    fn selection_overrides_hover() {
        let earth = planet("Earth");
        for hover in std::iter::once(None).chain(crate::bodies::PlanetId::all().map(Some)) {
            let state = InteractionState { hovered: hover, selected: Some(earth), speed_multiplier: 1.0 };
            assert_eq!(state.display_text(), ("Earth", "LOCKED"));
        }
    }

    #[test]
    fn click_keeps_hover_and_overwrites_selection() {
        let (earth, mars) = (planet("Earth"), planet("Mars"));
        let state = run(&[Action::Enter(mars), Action::ClickPlanet(earth)]);
        assert_eq!(state.phase(), Phase::SelectedAndHovering(earth, mars));

        let state = reduce(state, Action::ClickPlanet(mars));
        assert_eq!(state.selected, Some(mars));
        assert_eq!(state.hovered, Some(mars));
    }

    #[test]
    fn reclick_is_idempotent() {
        let earth = planet("Earth");
        let state = run(&[Action::ClickPlanet(earth)]);
        assert_eq!(reduce(state, Action::ClickPlanet(earth)), state);
    }

    #[test]
    fn background_click_clears_selection_only() {
        let (earth, venus) = (planet("Earth"), planet("Venus"));
        let state = run(&[Action::Enter(venus), Action::ClickPlanet(earth), Action::ClickBackground]);
        assert_eq!(state.phase(), Phase::Hovering(venus));
    }

    #[test]
    fn unlock_round_trip() {
        let (earth, saturn) = (planet("Earth"), planet("Saturn"));
        let hovering = run(&[Action::Enter(saturn)]);
        let unlocked = reduce(reduce(hovering, Action::ClickPlanet(earth)), Action::Unlock);
        assert_eq!(unlocked, hovering);

        let unlocked = run(&[Action::ClickPlanet(earth), Action::Unlock]);
        assert_eq!(unlocked.phase(), Phase::Idle);
    }

    #[test]
    fn lock_then_hover_then_unlock_reveals_hover() {
        let (earth, mars) = (planet("Earth"), planet("Mars"));
        let state = run(&[Action::ClickPlanet(earth)]);
        assert_eq!(state.display_text(), ("Earth", "LOCKED"));
        let state = reduce(state, Action::Enter(mars));
        assert_eq!(state.display_text(), ("Earth", "LOCKED"));
        let state = reduce(state, Action::Unlock);
        assert_eq!(state.display_text(), ("Mars", "Click to focus"));
    }

    #[test]
    fn speed_is_clamped() {
        assert_eq!(run(&[Action::SetSpeed(-1.0)]).speed_multiplier, 0.0);
        assert_eq!(run(&[Action::SetSpeed(9.0)]).speed_multiplier, 5.0);
        assert_eq!(run(&[Action::SetSpeed(2.5)]).speed_multiplier, 2.5);
        assert_eq!(run(&[Action::SetSpeed(f32::INFINITY)]).speed_multiplier, 5.0);
        assert_eq!(run(&[Action::SetSpeed(f32::NEG_INFINITY)]).speed_multiplier, 0.0);
    }

    #[test]
    fn nan_speed_is_ignored() {
        let state = run(&[Action::SetSpeed(3.0), Action::SetSpeed(f32::NAN)]);
        assert_eq!(state.speed_multiplier, 3.0);
    }

    #[test]
    fn speed_never_touches_hover_or_selection() {
        let (earth, mars) = (planet("Earth"), planet("Mars"));
        let before = run(&[Action::Enter(mars), Action::ClickPlanet(earth)]);
        let after = reduce(before, Action::SetSpeed(4.0));
        assert_eq!((after.hovered, after.selected), (before.hovered, before.selected));
    }

    #[test]
    fn state_serializes_to_json() {
        let state = run(&[Action::ClickPlanet(planet("Earth"))]);
        let json = serde_json::to_string(&state).unwrap();
        assert_eq!(json, r#"{"hovered":null,"selected":2,"speed_multiplier":1.0}"#);
        let back: InteractionState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, state);
    }
}
