//=========================================================================
// Action Bindings
//=========================================================================
//
// Host-provided action handles the registry drives.
//
// Four independently-optional bindings: open-window, dismiss-window,
// open-overlay, dismiss-overlay. Each starts unset; registry operations
// that need an unset binding are silent no-ops. Configuration order is a
// caller responsibility and is not reported at this layer.
//
// The closures are not required to be Send: the registry lives on the
// host's UI context and all calls happen there.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use super::overlay::OverlayOutcome;

//=== Action Handle Types =================================================

/// Fire-and-forget window open action. Receives the raw scene token.
pub type OpenWindowAction = Box<dyn FnMut(&str)>;

/// Fire-and-forget window dismiss action. Receives the raw scene token.
pub type DismissWindowAction = Box<dyn FnMut(&str)>;

/// Suspending overlay open action. Receives the raw overlay token and
/// reports how the presentation attempt ended.
pub type OpenOverlayAction = Box<dyn FnMut(&str) -> OverlayOutcome>;

/// Suspending overlay dismiss action. Completion is the only signal.
pub type DismissOverlayAction = Box<dyn FnMut()>;

//=== ActionBindings ======================================================

/// The four host action handles, each unset until explicitly bound.
#[derive(Default)]
pub struct ActionBindings {
    pub(crate) open_window: Option<OpenWindowAction>,
    pub(crate) dismiss_window: Option<DismissWindowAction>,
    pub(crate) open_overlay: Option<OpenOverlayAction>,
    pub(crate) dismiss_overlay: Option<DismissOverlayAction>,
}

impl ActionBindings {
    /// Creates bindings with all four handles unset.
    pub fn new() -> Self {
        Self::default()
    }

    //--- Configuration ----------------------------------------------------

    /// Binds the window open action, replacing any previous binding.
    pub fn bind_open_window(&mut self, action: impl FnMut(&str) + 'static) {
        self.open_window = Some(Box::new(action));
    }

    /// Binds the window dismiss action, replacing any previous binding.
    pub fn bind_dismiss_window(&mut self, action: impl FnMut(&str) + 'static) {
        self.dismiss_window = Some(Box::new(action));
    }

    /// Binds the overlay open action, replacing any previous binding.
    pub fn bind_open_overlay(
        &mut self,
        action: impl FnMut(&str) -> OverlayOutcome + 'static,
    ) {
        self.open_overlay = Some(Box::new(action));
    }

    /// Binds the overlay dismiss action, replacing any previous binding.
    pub fn bind_dismiss_overlay(&mut self, action: impl FnMut() + 'static) {
        self.dismiss_overlay = Some(Box::new(action));
    }

    //--- Probes -----------------------------------------------------------

    /// Returns `true` when both overlay handles are bound.
    ///
    /// The toggle protocol requires both, since either direction may be
    /// needed depending on the current overlay state.
    pub(crate) fn overlay_configured(&self) -> bool {
        self.open_overlay.is_some() && self.dismiss_overlay.is_some()
    }
}

impl std::fmt::Debug for ActionBindings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ActionBindings")
            .field("open_window", &self.open_window.is_some())
            .field("dismiss_window", &self.dismiss_window.is_some())
            .field("open_overlay", &self.open_overlay.is_some())
            .field("dismiss_overlay", &self.dismiss_overlay.is_some())
            .finish()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
