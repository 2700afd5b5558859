// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use thiserror::Error;

use crate::config::SourceKind;

/// Error type for input configuration and listener binding.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InputError {
    /// The host could not attach listeners for a source.
    #[error("failed to bind {kind} listeners: {reason}")]
    BindFailed {
        /// Source whose listeners failed to attach.
        kind: SourceKind,
        /// Host-provided description.
        reason: String,
    },
    /// `attach` was called on a router that is already attached.
    #[error("input router already attached")]
    AlreadyAttached,
    /// Gamepad deadzone outside `[0, 1)`.
    #[error("gamepad deadzone must be in [0, 1), got {0}")]
    InvalidDeadzone(f64),
}
