//=========================================================================
// Scenekit — Library Root
//
// This crate defines the public API surface of scenekit: a state-tracking
// layer for a GUI application's window scenes and its single immersive
// overlay surface.
//
// Responsibilities:
// - Expose the tracking registry (`SceneRegistry`) and its data types
// - Keep host integration injectable (action bindings, lifecycle reports)
// - Provide a single source of truth for scene lifecycle and suppression
//
// Typical usage:
// ```no_run
// use scenekit::{SceneId, SceneRegistry};
//
// let mut registry = SceneRegistry::new();
// registry.bind_open_window(|token| { /* host opens the window */ });
// registry.request_open(&SceneId::new("settings"));
// ```
//
//=========================================================================

//--- Public Modules ------------------------------------------------------
//
// `core` contains all tracking logic (scene state, suppression, overlay
// protocol). It is exposed publicly, but typical host code only needs the
// top-level re-exports below.
//
pub mod core;

pub mod prelude;

//--- Public Exports ------------------------------------------------------
//
// Re-exports the registry and its vocabulary types at the crate root so
// hosts can `use scenekit::SceneRegistry;` without knowing the internal
// module structure.
//
pub use crate::core::{
    ActionBindings, EventMask, OverlayOutcome, OverlayState, SceneId,
    ScenePhase, SceneRegistry, SceneState, OVERLAY_SCENE_TOKEN,
};
