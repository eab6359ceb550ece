//! UI overlay projection.
//!
//! The host renders controls from an [`OverlayView`] snapshot and sends
//! commands back as custom input events. UI commands never travel through the
//! scene's pointer path, so slider drags and the unlock button cannot register
//! as background clicks.

use serde::Serialize;

use crate::interaction::{InteractionState, MAX_SPEED, MIN_SPEED};

/// `a` = requested multiplier.
pub const CMD_SET_SPEED: u32 = 1;
pub const CMD_UNLOCK: u32 = 2;

pub const SPEED_STEP: f32 = 0.1;
pub const UNLOCK_LABEL: &str = "UNLOCK VIEW";

/// Speed slider bounds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SliderRange {
    pub min: f32,
    pub max: f32,
    pub step: f32,
}

/// Everything the host needs to draw the overlay.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OverlayView {
    pub display_text: &'static str,
    pub sub_text: &'static str,
    pub speed_multiplier: f32,
    pub speed_label: String,
    pub speed_range: SliderRange,
    pub selection_active: bool,
    /// Present only while a planet is selected.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unlock_label: Option<&'static str>,
}

impl OverlayView {
    pub fn from_state(state: &InteractionState) -> Self {
        let (display_text, sub_text) = state.display_text();
        let selection_active = state.selection_active();
        Self {
            display_text,
            sub_text,
            speed_multiplier: state.speed_multiplier,
            speed_label: speed_label(state.speed_multiplier),
            speed_range: SliderRange { min: MIN_SPEED, max: MAX_SPEED, step: SPEED_STEP },
            selection_active,
            unlock_label: selection_active.then_some(UNLOCK_LABEL),
        }
    }
}

pub fn speed_label(multiplier: f32) -> String {
    format!("Orbit Speed: {multiplier:.1}x")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bodies::planet_by_name;

    #[test]
    fn idle_view() {
        let view = OverlayView::from_state(&InteractionState::default());
        assert_eq!(view.display_text, "Solar System");
        assert_eq!(view.sub_text, "Click a planet to focus");
        assert_eq!(view.speed_label, "Orbit Speed: 1.0x");
        assert!(!view.selection_active);
        assert_eq!(view.unlock_label, None);
    }

    #[test]
    fn locked_view_shows_unlock() {
        let state = InteractionState {
            selected: planet_by_name("Saturn"),
            hovered: planet_by_name("Venus"),
            speed_multiplier: 0.25,
        };
        let view = OverlayView::from_state(&state);
        assert_eq!((view.display_text, view.sub_text), ("Saturn", "LOCKED"));
        assert_eq!(view.unlock_label, Some("UNLOCK VIEW"));
        assert!(view.selection_active);
    }

    #[test]
    fn speed_label_has_one_decimal() {
        assert_eq!(speed_label(0.0), "Orbit Speed: 0.0x");
        assert_eq!(speed_label(2.34), "Orbit Speed: 2.3x");
        assert_eq!(speed_label(5.0), "Orbit Speed: 5.0x");
    }

    #[test]
    fn json_shape() {
        let view = OverlayView::from_state(&InteractionState::default());
        let json: serde_json::Value = serde_json::to_value(&view).unwrap();
        assert_eq!(json["display_text"], "Solar System");
        assert_eq!(json["selection_active"], false);
        assert_eq!(json["speed_range"]["max"], 5.0);
        assert!(json.get("unlock_label").is_none());
    }
}
