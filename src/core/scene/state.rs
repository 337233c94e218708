//=========================================================================
// Scene State
//=========================================================================
//
// Lifecycle state for a tracked scene, plus the host-reported phase.
//
// State flow:
//   Closed → (request_open) → Opening → (phase Active) → Opened
//   Opened → (request_dismiss) → Closing → (phase Background) → Closed
//
//=========================================================================

//=== SceneState ==========================================================

/// Lifecycle state of a tracked scene.
///
/// Untracked identifiers query as [`Closed`](SceneState::Closed), which is
/// why this is the `Default` variant. An explicit `Closed` entry and an
/// absent entry answer queries identically but are distinct in the map:
/// queries never materialize entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SceneState {
    /// An open request was issued; the host has not yet reported the scene
    /// as active.
    Opening,

    /// The scene is on screen.
    Opened,

    /// A dismiss request was issued; the host has not yet reported the
    /// scene as gone.
    Closing,

    /// The scene is not on screen.
    #[default]
    Closed,
}

//=== ScenePhase ==========================================================

/// Phase transition reported by the host view system for a tracked scene.
///
/// Only `Active` and `Background` drive state: they settle a scene to
/// [`SceneState::Opened`] / [`SceneState::Closed`]. `Inactive` and
/// `Unknown` are received but ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScenePhase {
    /// Scene is frontmost and receiving events.
    Active,

    /// Scene left the screen.
    Background,

    /// Scene is visible but not receiving events (e.g. interrupted).
    Inactive,

    /// Phase the host could not classify.
    Unknown,
}

//=========================================================================
// Unit Tests
//=========================================================================
