// Copyright 2026 the Cosmos Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Reasons a plane operation was skipped.

use crate::types::MatterId;

/// Why a placement or resize did not happen.
///
/// The plain operations ([`Plane::move_to`](crate::Plane::move_to),
/// [`Plane::resize`](crate::Plane::resize)) absorb these silently; their
/// `try_` counterparts report them.
#[derive(Clone, Copy, Debug, PartialEq, thiserror::Error)]
pub enum PlaneError {
    /// The id is stale or was minted by another plane.
    #[error("{0:?} is not bound to this plane")]
    NotBound(MatterId),
    /// The matter is hidden by the plane's current mode.
    #[error("{0:?} is masked by the current mode")]
    Masked(MatterId),
    /// The matter does not declare a resize anchor.
    #[error("{0:?} is not resizable")]
    NotResizable(MatterId),
    /// Sizes must be strictly positive.
    #[error("invalid size {width}x{height}")]
    InvalidSize {
        /// Requested width.
        width: f64,
        /// Requested height.
        height: f64,
    },
}
