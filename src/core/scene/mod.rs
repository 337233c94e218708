//=========================================================================
// Scene System
//=========================================================================
//
// Scene identity, lifecycle state, suppression, and the tracking registry.
//
// Architecture:
//   SceneRegistry
//     ├─ states: HashMap<SceneId, SceneState>
//     ├─ suppressed: SuppressionSet
//     ├─ handlers: HashMap<SceneId, PhaseHandlers>
//     └─ bindings: ActionBindings
//
// Flow:
//   request_open()/request_dismiss() → host action → phase report → settle
//
//=========================================================================

//=== Module Declarations =================================================

mod registry;
mod state;
mod suppression;

//=== Public API ==========================================================

pub use registry::SceneRegistry;
pub use state::{ScenePhase, SceneState};
pub use suppression::{EventMask, SuppressionSet};

//=== SceneId =============================================================

/// Raw token of the reserved identifier naming the immersive overlay
/// surface.
pub const OVERLAY_SCENE_TOKEN: &str = "immersive-overlay";

/// Opaque identifier for a window scene or the overlay surface.
///
/// Identity is the string token: two `SceneId`s built from the same token
/// are the same scene. The token itself is host-defined and never
/// interpreted, except for the one reserved overlay token.
///
/// # Example
///
/// ```rust
/// use scenekit::SceneId;
///
/// let settings = SceneId::new("settings");
/// assert_eq!(settings, SceneId::new("settings"));
/// assert!(!settings.is_overlay());
/// assert!(SceneId::overlay().is_overlay());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SceneId(String);

impl SceneId {
    /// Creates an identifier from a host-defined token.
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Returns the identifier for the immersive overlay surface.
    pub fn overlay() -> Self {
        Self(OVERLAY_SCENE_TOKEN.to_owned())
    }

    /// Returns `true` when this identifier names the overlay surface.
    pub fn is_overlay(&self) -> bool {
        self.0 == OVERLAY_SCENE_TOKEN
    }

    /// Returns the raw token, as passed to host actions.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for SceneId {
    fn from(token: &str) -> Self {
        Self::new(token)
    }
}

impl From<String> for SceneId {
    fn from(token: String) -> Self {
        Self(token)
    }
}

impl std::fmt::Display for SceneId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
