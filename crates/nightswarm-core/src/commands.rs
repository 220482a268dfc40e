//! Player commands sent from the input collaborator to the game director.
//!
//! Commands are queued and processed at the next tick boundary.

use serde::{Deserialize, Serialize};

/// All possible player actions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    // --- Menu navigation ---
    /// Move the menu cursor up (wrapping).
    MenuUp,
    /// Move the menu cursor down (wrapping).
    MenuDown,
    /// Decrease the hovered value (settings sliders).
    MenuLeft,
    /// Increase the hovered value (settings sliders).
    MenuRight,
    /// Activate the hovered menu entry.
    Select,
    /// Leave the current screen (ESC).
    Back,
    /// Dismiss the death screen (SPACE).
    Continue,

    // --- In-session control ---
    /// Set the player's movement input. Magnitude is ignored; the
    /// movement system normalizes.
    SetMoveDirection { x: f32, y: f32 },
    /// Hold or release the trigger. Sessions start with it held.
    SetFiring { firing: bool },

    // --- Application ---
    /// Stop the director (window close / main-menu Quit).
    Quit,
}
