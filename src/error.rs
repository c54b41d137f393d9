// SPDX-License-Identifier: MPL-2.0
use std::fmt;

/// Errors surfaced by the lightbox component.
///
/// The component accepts almost any input (including an empty image list) and
/// degrades gracefully instead of failing; the variants below cover the two
/// genuinely unsupported paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The controller cannot be reconstructed from serialized state; there is
    /// no defined restoration path for its view hierarchy.
    PersistedState,

    /// A transition animator was requested before the controller wired the
    /// transition manager with live scroll geometry.
    TransitionNotWired,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::PersistedState => {
                write!(f, "restoring a lightbox from persisted state is unsupported")
            }
            Error::TransitionNotWired => {
                write!(
                    f,
                    "transition animators queried before the scroll surface was wired"
                )
            }
        }
    }
}

impl std::error::Error for Error {}

pub type Result<T> = std::result::Result<T, Error>;
