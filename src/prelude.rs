//=========================================================================
// Prelude
//=========================================================================
//
// Convenience module that re-exports commonly used types.
//
// Usage:
//   use scenekit::prelude::*;
//
//=========================================================================

//=== Public API ==========================================================

// Registry
pub use crate::core::scene::{SceneRegistry, OVERLAY_SCENE_TOKEN};

// Scene vocabulary
pub use crate::core::scene::{EventMask, SceneId, ScenePhase, SceneState};

// Overlay lifecycle
pub use crate::core::overlay::{OverlayOutcome, OverlayState};

// Host integration
pub use crate::core::bindings::ActionBindings;
