//=========================================================================
// Core
//
// All scene-tracking logic lives here: identity, lifecycle state, event
// suppression, host action bindings, and the registry that ties them
// together.
//
// Responsibilities:
// - Track per-scene lifecycle state and the overlay's own lifecycle
// - Gate lifecycle callbacks through per-scene suppression masks
// - Drive the host's open/dismiss actions and the overlay toggle protocol
//
// Notes:
// Everything runs on the host's single UI context; the registry takes
// &mut self and holds no locks. Host integration is injected through
// ActionBindings and the view-lifecycle report entry points.
//
//=========================================================================

//=== Submodules ==========================================================

pub mod bindings;
pub mod overlay;
pub mod scene;

//=== Public API ==========================================================

pub use bindings::ActionBindings;
pub use overlay::{OverlayOutcome, OverlayState};
pub use scene::{
    EventMask, SceneId, ScenePhase, SceneRegistry, SceneState, SuppressionSet,
    OVERLAY_SCENE_TOKEN,
};
