// Copyright 2025 the Annulus Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Stepped, eased animations.
//!
//! An [`Animation`] only counts frames; it does not own a clock. The host's frame scheduler
//! asks the chart for one frame at a time (see `Doughnut::tick`), and the chart asks its
//! animation for the next [`Progress`]. Step `k` of `N` yields `easing(k / N)`, so the final
//! frame always lands on progress `1`.

use crate::easing::Easing;

/// What a running animation is for, reported back on completion.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AnimationKind {
    /// A load, structural or resize render.
    Render,
    /// The short transition that precedes a tooltip render.
    Tooltip,
}

/// One frame's position within an animation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Progress {
    /// 1-based step index.
    pub step: u32,
    /// Total number of steps.
    pub steps: u32,
    /// `step / steps`.
    pub linear: f64,
    /// `easing(step / steps)`, the value handed to the draw step.
    pub eased: f64,
}

impl Progress {
    /// A single full-progress frame.
    pub const FULL: Self = Self {
        step: 1,
        steps: 1,
        linear: 1.0,
        eased: 1.0,
    };

    /// Whether this is the last frame of its animation.
    pub fn is_final(&self) -> bool {
        self.step >= self.steps
    }
}

/// The explicit end-of-animation signal.
///
/// Exactly one `Completion` is produced per animation, after the draw step of its final
/// frame has returned. Superseded animations never complete.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Completion {
    /// The animation that finished.
    pub kind: AnimationKind,
}

/// Result of asking a chart for its next frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TickOutcome {
    /// Nothing is animating; no frame was drawn.
    Idle,
    /// A frame was drawn and more remain.
    Frame(Progress),
    /// The final frame was drawn.
    Finished(Progress, Completion),
}

impl TickOutcome {
    /// The completion signal, if this tick produced one.
    pub fn completion(&self) -> Option<Completion> {
        match self {
            Self::Finished(_, c) => Some(*c),
            _ => None,
        }
    }
}

/// A fixed-length eased progression.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Animation {
    /// Purpose of the animation.
    pub kind: AnimationKind,
    steps: u32,
    easing: Easing,
    current: u32,
}

impl Animation {
    /// Creates an animation of `steps` frames (at least one).
    pub fn new(kind: AnimationKind, steps: u32, easing: Easing) -> Self {
        Self {
            kind,
            steps: steps.max(1),
            easing,
            current: 0,
        }
    }

    /// Total number of frames.
    pub fn steps(&self) -> u32 {
        self.steps
    }

    /// Frames already produced.
    pub fn elapsed(&self) -> u32 {
        self.current
    }

    /// Whether every frame has been produced.
    pub fn is_finished(&self) -> bool {
        self.current >= self.steps
    }

    /// Advances to the next frame.
    pub fn advance(&mut self) -> Option<Progress> {
        if self.is_finished() {
            return None;
        }
        self.current += 1;
        let linear = f64::from(self.current) / f64::from(self.steps);
        Some(Progress {
            step: self.current,
            steps: self.steps,
            linear,
            eased: self.easing.apply(linear),
        })
    }
}
