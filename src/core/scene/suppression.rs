//=========================================================================
// Event Suppression
//=========================================================================
//
// Per-scene suppression of lifecycle callbacks.
//
// Architecture:
//   EventMask (bitflags) → SuppressionSet (HashMap<SceneId, EventMask>)
//
// Invariant: stored masks are never empty. A subtraction that empties an
// entry removes it, so absence and "nothing suppressed" stay the same
// observable fact.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::HashMap;

use bitflags::bitflags;

//=== Internal Dependencies ===============================================

use super::SceneId;

//=== EventMask ===========================================================

bitflags! {
    /// Lifecycle event classes a scene's callbacks can be suppressed for.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct EventMask: u8 {
        /// The `on_open` callback fired when a scene settles to opened.
        const OPEN = 1 << 0;

        /// The `on_dismiss` callback fired when a scene settles to closed.
        const DISMISS = 1 << 1;
    }
}

//=== SuppressionSet ======================================================

/// Tracks which lifecycle event classes are suppressed per scene.
///
/// Union on [`suppress`](Self::suppress), difference on
/// [`unsuppress`](Self::unsuppress). Scenes with no entry have nothing
/// suppressed.
#[derive(Debug, Default)]
pub struct SuppressionSet {
    masks: HashMap<SceneId, EventMask>,
}

impl SuppressionSet {
    /// Creates an empty suppression set.
    pub fn new() -> Self {
        Self { masks: HashMap::new() }
    }

    //--- Mutation ---------------------------------------------------------

    /// Unions `mask` into the scene's suppression entry, creating it if
    /// absent.
    pub fn suppress(&mut self, mask: EventMask, id: &SceneId) {
        if mask.is_empty() {
            return;
        }
        self.masks
            .entry(id.clone())
            .and_modify(|m| *m |= mask)
            .or_insert(mask);
    }

    /// Subtracts `mask` from the scene's suppression entry.
    ///
    /// Removes the entry entirely if it becomes empty. No-op when the scene
    /// has no entry.
    pub fn unsuppress(&mut self, mask: EventMask, id: &SceneId) {
        if let Some(current) = self.masks.get_mut(id) {
            *current -= mask;
            if current.is_empty() {
                self.masks.remove(id);
            }
        }
    }

    //--- Queries ----------------------------------------------------------

    /// Returns `true` iff every bit of `mask` is suppressed for the scene.
    ///
    /// A partial overlap does not satisfy the check. Scenes with no entry
    /// report `false` for any non-empty mask.
    pub fn is_suppressed(&self, mask: EventMask, id: &SceneId) -> bool {
        match self.masks.get(id) {
            Some(current) => current.contains(mask),
            None => false,
        }
    }

    /// Returns the number of scenes with at least one suppressed event.
    pub fn len(&self) -> usize {
        self.masks.len()
    }

    /// Returns `true` if no scene has anything suppressed.
    pub fn is_empty(&self) -> bool {
        self.masks.is_empty()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
