// Copyright 2025 the Annulus Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors returned when building a chart.

use core::fmt;

use crate::config::ConfigError;
use crate::segment::SegmentError;

/// Errors returned by [`crate::Doughnut::new`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ChartError {
    /// The configuration failed validation.
    Config(ConfigError),
    /// A segment in the initial data was rejected.
    Segment {
        /// Position of the offending record in the input.
        index: usize,
        /// The underlying segment error.
        err: SegmentError,
    },
}

impl fmt::Display for ChartError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(err) => write!(f, "invalid chart configuration: {err}"),
            Self::Segment { index, err } => write!(f, "invalid segment at {index}: {err}"),
        }
    }
}

impl core::error::Error for ChartError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::Config(err) => Some(err),
            Self::Segment { err, .. } => Some(err),
        }
    }
}

impl From<ConfigError> for ChartError {
    fn from(err: ConfigError) -> Self {
        Self::Config(err)
    }
}
