//=========================================================================
// Scene Registry
//=========================================================================
//
// Single source of truth for scene lifecycle state, overlay transitions,
// and event suppression.
//
// Scenes are tracked lazily: entries appear on the first open/dismiss
// request or explicit set and live for the registry's lifetime. The
// registry drives the host's window and overlay actions but never awaits
// window results; settlement arrives through the view-lifecycle reports.
//
// The registry is an explicitly constructed object. The host's composition
// root owns the single instance and passes it by reference.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::HashMap;

use log::{debug, warn};

//=== Internal Dependencies ===============================================

use crate::core::bindings::ActionBindings;
use crate::core::overlay::{OverlayOutcome, OverlayState};
use super::suppression::{EventMask, SuppressionSet};
use super::{SceneId, ScenePhase, SceneState, OVERLAY_SCENE_TOKEN};

//=== PhaseHandlers =======================================================

/// Lifecycle callbacks registered for one tracked scene.
struct PhaseHandlers {
    on_open: Box<dyn FnMut()>,
    on_dismiss: Box<dyn FnMut()>,
}

//=== SceneRegistry =======================================================

/// Tracks scene lifecycle state and drives host open/dismiss actions.
///
/// All mutation happens through `&mut self` on the host's UI context;
/// there is no internal locking. The overlay's `InTransition` value is the
/// only concurrency guard the design needs: a toggle arriving while a host
/// transition is in flight is dropped, not queued.
///
/// # Example
///
/// ```rust
/// use scenekit::{SceneId, SceneRegistry, SceneState};
///
/// let mut registry = SceneRegistry::new();
/// registry.bind_open_window(|token| println!("host opens {token}"));
///
/// let settings = SceneId::new("settings");
/// registry.request_open(&settings);
/// assert_eq!(registry.state(&settings), SceneState::Opening);
/// ```
pub struct SceneRegistry {
    states: HashMap<SceneId, SceneState>,
    suppressed: SuppressionSet,
    handlers: HashMap<SceneId, PhaseHandlers>,
    bindings: ActionBindings,
    overlay_state: OverlayState,
}

impl SceneRegistry {
    //--- Construction -----------------------------------------------------

    /// Creates a registry with no tracked scenes and all bindings unset.
    ///
    /// Bind the host actions before issuing requests; operations that need
    /// an unset binding are silent no-ops.
    pub fn new() -> Self {
        Self {
            states: HashMap::new(),
            suppressed: SuppressionSet::new(),
            handlers: HashMap::new(),
            bindings: ActionBindings::new(),
            overlay_state: OverlayState::Closed,
        }
    }

    //--- Binding Configuration --------------------------------------------

    /// Binds the host's window open action.
    pub fn bind_open_window(&mut self, action: impl FnMut(&str) + 'static) {
        self.bindings.bind_open_window(action);
    }

    /// Binds the host's window dismiss action.
    pub fn bind_dismiss_window(&mut self, action: impl FnMut(&str) + 'static) {
        self.bindings.bind_dismiss_window(action);
    }

    /// Binds the host's suspending overlay open action.
    pub fn bind_open_overlay(
        &mut self,
        action: impl FnMut(&str) -> OverlayOutcome + 'static,
    ) {
        self.bindings.bind_open_overlay(action);
    }

    /// Binds the host's suspending overlay dismiss action.
    pub fn bind_dismiss_overlay(&mut self, action: impl FnMut() + 'static) {
        self.bindings.bind_dismiss_overlay(action);
    }

    //--- State Query ------------------------------------------------------

    /// Returns the tracked state, or [`SceneState::Closed`] for scenes
    /// never referenced. Never creates an entry.
    pub fn state(&self, id: &SceneId) -> SceneState {
        self.states.get(id).copied().unwrap_or_default()
    }

    /// Unconditionally overwrites a scene's state, creating the entry if
    /// absent.
    pub fn set_state(&mut self, state: SceneState, id: &SceneId) {
        self.states.insert(id.clone(), state);
    }

    /// Returns the overlay surface's current lifecycle value.
    pub fn overlay_state(&self) -> OverlayState {
        self.overlay_state
    }

    //--- Suppression Control ----------------------------------------------

    /// Suppresses the given event classes for a scene (union semantics).
    pub fn suppress(&mut self, mask: EventMask, id: &SceneId) {
        self.suppressed.suppress(mask, id);
    }

    /// Lifts suppression of the given event classes for a scene.
    pub fn unsuppress(&mut self, mask: EventMask, id: &SceneId) {
        self.suppressed.unsuppress(mask, id);
    }

    /// Lifts all suppression for a scene.
    pub fn unsuppress_all(&mut self, id: &SceneId) {
        self.suppressed.unsuppress(EventMask::all(), id);
    }

    /// Returns `true` iff every event class in `mask` is suppressed for
    /// the scene. Scenes with no suppression entry report `false`.
    pub fn is_suppressed(&self, mask: EventMask, id: &SceneId) -> bool {
        self.suppressed.is_suppressed(mask, id)
    }

    //--- Window Open Protocol ---------------------------------------------

    /// Requests the host to open a window scene.
    ///
    /// Only a scene that is fully closed or actively closing may be
    /// (re)opened: a `Closing` scene is eagerly reopenable so rapid
    /// close/open toggles need not wait for the host's close to settle. An
    /// `Opening` or `Opened` scene makes this a no-op, preventing
    /// duplicate open requests.
    ///
    /// Fire-and-forget: the registry marks the scene `Opening` and moves
    /// on; settlement to `Opened` arrives via [`report_phase`].
    ///
    /// [`report_phase`]: Self::report_phase
    pub fn request_open(&mut self, id: &SceneId) {
        let Some(action) = self.bindings.open_window.as_mut() else {
            return;
        };

        match self.states.get(id).copied().unwrap_or_default() {
            SceneState::Opening | SceneState::Opened => {
                debug!("Open request for {} ignored: already open or in flight", id);
            }
            SceneState::Closing | SceneState::Closed => {
                debug!("Opening scene {}", id);
                self.states.insert(id.clone(), SceneState::Opening);
                action(id.as_str());
            }
        }
    }

    //--- Window Dismiss Protocol ------------------------------------------

    /// Requests the host to dismiss a window scene.
    ///
    /// Always attempted, regardless of tracked state: the scene is marked
    /// `Closing` (creating the entry for an untracked identifier) and the
    /// host dismiss action is invoked. Dismissing a window that is not
    /// actually open is the host's safe no-op, per its contract.
    pub fn request_dismiss(&mut self, id: &SceneId) {
        let Some(action) = self.bindings.dismiss_window.as_mut() else {
            return;
        };

        debug!("Closing scene {}", id);
        self.states.insert(id.clone(), SceneState::Closing);
        action(id.as_str());
    }

    //--- Overlay Toggle Protocol ------------------------------------------

    /// Toggles the immersive overlay surface.
    ///
    /// Requires both overlay bindings; either unset makes this a silent
    /// no-op. From `Closed` the host open action is invoked and its
    /// outcome consumed: success settles later via
    /// [`report_overlay_appeared`], while cancellation, error, and
    /// unrecognized outcomes all revert to `Closed`. From `Open` the host
    /// dismiss action is invoked and settlement arrives via
    /// [`report_overlay_disappeared`].
    ///
    /// `OverlayState` becomes `InTransition` *before* the suspending host
    /// call, so any caller running during the suspension observes it and
    /// gets dropped here — at most one host transition is ever in flight.
    ///
    /// [`report_overlay_appeared`]: Self::report_overlay_appeared
    /// [`report_overlay_disappeared`]: Self::report_overlay_disappeared
    pub fn toggle_overlay(&mut self) {
        if !self.bindings.overlay_configured() {
            return;
        }

        match self.overlay_state {
            OverlayState::InTransition => {
                debug!("Overlay toggle dropped: a transition is already in flight");
            }

            OverlayState::Open => {
                debug!("Dismissing overlay");
                self.states.insert(SceneId::overlay(), SceneState::Closing);
                self.overlay_state = OverlayState::InTransition;

                if let Some(dismiss) = self.bindings.dismiss_overlay.as_mut() {
                    dismiss();
                }
                // Settlement to Closed arrives via the "disappeared" report.
            }

            OverlayState::Closed => {
                debug!("Opening overlay");
                self.states.insert(SceneId::overlay(), SceneState::Opening);
                self.overlay_state = OverlayState::InTransition;

                let Some(open) = self.bindings.open_overlay.as_mut() else {
                    return;
                };
                match open(OVERLAY_SCENE_TOKEN) {
                    OverlayOutcome::Opened => {
                        // Settlement to Open arrives via the "appeared"
                        // report; never set optimistically here.
                    }
                    outcome => {
                        warn!(
                            "Overlay open did not complete ({:?}); reverting to closed",
                            outcome
                        );
                        self.overlay_state = OverlayState::Closed;
                        self.states.insert(SceneId::overlay(), SceneState::Closed);
                    }
                }
            }
        }
    }

    //--- View-Lifecycle Reports -------------------------------------------

    /// Reports that the host presented the overlay surface.
    ///
    /// The only path by which the overlay reaches `Open`. Also settles the
    /// reserved identifier's scene state to `Opened`, keeping the two
    /// fields in lockstep.
    pub fn report_overlay_appeared(&mut self) {
        debug!("Overlay appeared");
        self.overlay_state = OverlayState::Open;
        self.states.insert(SceneId::overlay(), SceneState::Opened);
    }

    /// Reports that the host removed the overlay surface.
    pub fn report_overlay_disappeared(&mut self) {
        debug!("Overlay disappeared");
        self.overlay_state = OverlayState::Closed;
        self.states.insert(SceneId::overlay(), SceneState::Closed);
    }

    /// Registers lifecycle callbacks for a scene.
    ///
    /// `on_open` fires when a phase report settles the scene to `Opened`,
    /// `on_dismiss` when it settles to `Closed` — each subject to the
    /// scene's suppression mask at fire time. Re-tracking an identifier
    /// replaces its previous handlers.
    pub fn track(
        &mut self,
        id: SceneId,
        on_open: impl FnMut() + 'static,
        on_dismiss: impl FnMut() + 'static,
    ) {
        if self.handlers.contains_key(&id) {
            debug!("Scene {} was already tracked; handlers replaced", id);
        }
        self.handlers.insert(
            id,
            PhaseHandlers {
                on_open: Box::new(on_open),
                on_dismiss: Box::new(on_dismiss),
            },
        );
    }

    /// Reports a host phase transition for a tracked scene.
    ///
    /// `Active` settles the scene to `Opened` and fires `on_open`;
    /// `Background` settles it to `Closed` and fires `on_dismiss`.
    /// `Inactive` and `Unknown` change nothing. A suppressed event class
    /// still settles the state — suppression gates the callback only.
    pub fn report_phase(&mut self, id: &SceneId, phase: ScenePhase) {
        match phase {
            ScenePhase::Active => {
                self.states.insert(id.clone(), SceneState::Opened);
                self.fire(EventMask::OPEN, id);
            }
            ScenePhase::Background => {
                self.states.insert(id.clone(), SceneState::Closed);
                self.fire(EventMask::DISMISS, id);
            }
            ScenePhase::Inactive | ScenePhase::Unknown => {
                debug!("Phase report {:?} for {} ignored", phase, id);
            }
        }
    }

    //--- Internal Helpers -------------------------------------------------

    fn fire(&mut self, event: EventMask, id: &SceneId) {
        if self.suppressed.is_suppressed(event, id) {
            debug!("{:?} callback for {} suppressed", event, id);
            return;
        }

        let Some(handlers) = self.handlers.get_mut(id) else {
            return;
        };
        let handler = if event == EventMask::OPEN {
            &mut handlers.on_open
        } else {
            &mut handlers.on_dismiss
        };
        handler();
    }
}

impl Default for SceneRegistry {
    fn default() -> Self {
        Self::new()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
