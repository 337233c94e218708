//=========================================================================
// Overlay Lifecycle
//=========================================================================
//
// Lifecycle value for the single immersive overlay surface, and the
// outcome of the host's suspending overlay-open action.
//
// The overlay has its own three-state lifecycle, separate from the
// per-scene four-state tracking, because the host surface reports its own
// appear/disappear independent of the call that requested it.
//
//=========================================================================

//=== OverlayState ========================================================

/// Lifecycle of the immersive overlay surface.
///
/// Transitions happen only through [`SceneRegistry::toggle_overlay`] and
/// the view-lifecycle reports; `InTransition` is the soft lock that keeps
/// at most one host transition in flight.
///
/// [`SceneRegistry::toggle_overlay`]: crate::SceneRegistry::toggle_overlay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverlayState {
    /// The overlay is not presented.
    #[default]
    Closed,

    /// An open or dismiss call to the host is in flight; further toggles
    /// are dropped until the host reports appear/disappear.
    InTransition,

    /// The overlay is presented. Reached only via the "appeared" report,
    /// never set optimistically by the toggle protocol.
    Open,
}

//=== OverlayOutcome ======================================================

/// Result of the host's suspending overlay-open action.
///
/// Everything except `Opened` is handled uniformly by the toggle protocol
/// (revert to closed); the variants differ only in the diagnostic logged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayOutcome {
    /// The host accepted the open; an "appeared" report will follow.
    Opened,

    /// The user dismissed the host's presentation flow.
    UserCancelled,

    /// The host failed to present the overlay.
    Error,

    /// The host returned a result this crate does not recognize.
    Unknown,
}
