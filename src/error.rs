// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2026 Rivetgen Developers

//! Crate error type

use thiserror::Error;

/// Errors from rivet construction and geometry operations.
#[derive(Debug, Clone, Error)]
pub enum Error {
    /// A geometric or physical parameter was zero or negative.
    #[error("{name} must be positive, got {value}")]
    NonPositiveDimension {
        /// Parameter name as it appears in the constructor.
        name: &'static str,
        /// The offending value.
        value: f64,
    },

    /// A closed contour needs at least three points.
    #[error("contour needs at least 3 points, got {0}")]
    DegenerateContour(usize),

    /// Revolution axis has zero length.
    #[error("revolution axis is zero")]
    ZeroAxis,

    /// Revolution angle is invalid (must be in (0, 2π]).
    #[error("invalid revolution angle: {0} radians")]
    InvalidAngle(f64),

    /// In-plane normal is parallel to the revolution axis.
    #[error("in-plane normal is parallel to the revolution axis")]
    ParallelNormal,

    /// A profile vertex lies on the negative side of the revolution axis.
    #[error("profile crosses the revolution axis")]
    AxisCrossing,

    /// Cutting a contour produced no revolvable profile.
    #[error("cut produced no revolvable profile")]
    EmptyProfile,
}
