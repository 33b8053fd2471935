// Copyright 2025 the Annulus Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The chart instance.
//!
//! [`Doughnut`] owns the ordered segment store, the cached total, the radial layout, the hover
//! subset and at most one running animation. All mutation and drawing happen through
//! `&mut self`, so a draw step can never observe a half-applied hover update and cannot call
//! back into a mutating operation.
//!
//! ## Frame driving
//!
//! Eased renders do not draw anything when they are requested. The host calls
//! [`Doughnut::tick`] once per frame; each tick draws exactly one frame and reports either
//! progress or the animation's [`Completion`]. Requesting a new animation while one is running
//! replaces it: the newest request wins and the superseded one never completes.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::{Point, Size};
use log::{debug, trace};

use crate::animation::{Animation, AnimationKind, Completion, TickOutcome};
use crate::arc::ArcFactory;
use crate::backend::Backend;
use crate::config::{DoughnutConfig, TOOLTIP_TRANSITION_STEPS, TooltipContext};
use crate::easing::Easing;
use crate::error::ChartError;
use crate::hover::{self, ActiveSet, PointerEvent};
use crate::layout::{self, RadialLayout, TOP_ANGLE};
use crate::legend::{Legend, LegendItem};
use crate::segment::{ArcGeometry, Segment, SegmentData, SegmentError, SegmentId, Transition};
use crate::tooltip::{self, Dataset, SingleTooltip, TooltipPhase};

/// An animated doughnut (or pie) chart drawing into a backend `B`.
#[derive(Debug)]
pub struct Doughnut<B> {
    config: DoughnutConfig,
    size: Size,
    canvas_origin: Point,
    backend: B,
    segments: Vec<Segment>,
    datasets: Vec<Dataset>,
    total: f64,
    layout: RadialLayout,
    arcs: ArcFactory,
    loaded: bool,
    active: ActiveSet,
    animation: Option<Animation>,
    tooltip_subject: ActiveSet,
    next_id: u64,
}

impl<B: Backend> Doughnut<B> {
    /// Builds a chart from initial data and starts its load render.
    ///
    /// Segments are inserted silently and rendered once at the end. With animation enabled the
    /// load render is eased and the chart stays [`TooltipPhase::Suppressed`] until it finishes.
    pub fn new(
        config: DoughnutConfig,
        size: Size,
        data: impl IntoIterator<Item = SegmentData>,
        backend: B,
    ) -> Result<Self, ChartError> {
        config.validate()?;
        let data: Vec<SegmentData> = data.into_iter().collect();
        let layout = RadialLayout::arrange(size, &config);
        let mut chart = Self {
            config,
            size,
            canvas_origin: Point::ZERO,
            backend,
            segments: Vec::with_capacity(data.len()),
            datasets: Vec::new(),
            total: 0.0,
            layout,
            arcs: ArcFactory::new(layout.center),
            loaded: false,
            active: ActiveSet::new(),
            animation: None,
            tooltip_subject: ActiveSet::new(),
            next_id: 0,
        };
        chart.set_total_from(data.iter().map(|d| d.value));
        for (index, d) in data.into_iter().enumerate() {
            chart
                .add_segment(d, None, true)
                .map_err(|err| ChartError::Segment { index, err })?;
        }
        debug!(
            "{} chart with {} segments, total {}",
            chart.config.kind.name(),
            chart.segments.len(),
            chart.total
        );
        chart.render(false);
        Ok(chart)
    }

    /// Inserts a segment at `at_index` (clamped; `None` appends).
    ///
    /// The new segment starts at the top angle. With `animate_rotate` it starts with zero
    /// sweep, with `animate_scale` with zero radii, so the next eased render grows it in.
    /// Unless `silent`, the chart reflows and runs a full [`Doughnut::update`].
    pub fn add_segment(
        &mut self,
        data: SegmentData,
        at_index: Option<usize>,
        silent: bool,
    ) -> Result<SegmentId, SegmentError> {
        let index = at_index.map_or(self.segments.len(), |i| i.min(self.segments.len()));
        let scale_in = self.config.animate_scale;
        let geometry = ArcGeometry {
            circumference: if self.config.animate_rotate {
                0.0
            } else {
                self.circumference_for(data.value)
            },
            outer_radius: if scale_in { 0.0 } else { self.layout.outer_radius },
            inner_radius: if scale_in { 0.0 } else { self.layout.inner_radius },
        };
        let id = SegmentId(self.next_id);
        let segment = Segment::new(
            id,
            data,
            geometry,
            self.config.segment_stroke_color,
            self.config.segment_stroke_width,
            self.config.segment_show_stroke,
        )?;
        self.next_id += 1;
        self.segments.insert(index, segment);
        debug!("added segment {id:?} at {index} (silent: {silent})");
        if !silent {
            self.reflow();
            self.update();
        }
        Ok(id)
    }

    /// Removes the segment at `at_index`, or the last one when the index is `None` or out of
    /// range, then reflows and updates.
    ///
    /// Removing a hovered segment drops it from the active subset and hides any custom
    /// tooltip overlay.
    ///
    /// Returns `None` (and does nothing) when the chart has no segments.
    pub fn remove_segment(&mut self, at_index: Option<usize>) -> Option<Segment> {
        let last = self.segments.len().checked_sub(1)?;
        let index = at_index.filter(|i| *i <= last).unwrap_or(last);
        let removed = self.segments.remove(index);
        let was_active = self.active.contains(&removed.id);
        self.active.retain(|id| *id != removed.id);
        self.tooltip_subject.retain(|id| *id != removed.id);
        if was_active {
            self.backend.hide_custom();
        }
        debug!("removed segment {:?} from {index}", removed.id);
        self.reflow();
        self.update();
        Some(removed)
    }

    /// Recomputes the total, drops hover tints into the saved baseline's colors, snapshots
    /// every segment and starts a render.
    ///
    /// Call this after changing segment values or colors through
    /// [`Doughnut::segments_mut`].
    pub fn update(&mut self) -> Option<Completion> {
        self.recompute_total();
        let active = &self.active;
        for segment in &mut self.segments {
            if active.contains(&segment.id) {
                segment.restore_fill();
            }
            segment.save();
        }
        self.render(false)
    }

    /// Renders the chart.
    ///
    /// With `reflow` set, or with animation disabled, this draws a single full-progress frame
    /// immediately and returns its completion. Otherwise it schedules an eased render and
    /// returns `None`; frames are produced by [`Doughnut::tick`].
    pub fn render(&mut self, reflow: bool) -> Option<Completion> {
        if reflow {
            self.reflow();
        }
        if self.config.animation && !reflow {
            self.start(Animation::new(
                AnimationKind::Render,
                self.config.animation_steps,
                self.config.animation_easing,
            ));
            None
        } else {
            self.stop();
            self.draw(1.0);
            Some(self.complete(AnimationKind::Render))
        }
    }

    /// Recomputes the center and resting radii and retargets every segment toward them.
    pub fn reflow(&mut self) {
        self.layout = RadialLayout::arrange(self.size, &self.config);
        self.arcs = ArcFactory::new(self.layout.center);
        for segment in &mut self.segments {
            segment.retarget_radii(self.layout.outer_radius, self.layout.inner_radius);
        }
        debug!(
            "reflow to {}x{}: outer radius {}, inner radius {}",
            self.size.width, self.size.height, self.layout.outer_radius, self.layout.inner_radius
        );
    }

    /// Changes the canvas size, drops any running animation and redraws immediately.
    pub fn resize(&mut self, size: Size) -> Option<Completion> {
        self.stop();
        self.size = size;
        self.render(true)
    }

    /// Drops the running animation, if any, without completing it.
    pub fn stop(&mut self) {
        if let Some(animation) = self.animation.take() {
            debug!(
                "stopped {:?} animation at frame {}/{}",
                animation.kind,
                animation.elapsed(),
                animation.steps()
            );
        }
    }

    /// Draws the next frame of the running animation.
    pub fn tick(&mut self) -> TickOutcome {
        let Some(animation) = self.animation.as_mut() else {
            return TickOutcome::Idle;
        };
        let kind = animation.kind;
        let Some(progress) = animation.advance() else {
            self.animation = None;
            return TickOutcome::Idle;
        };
        self.draw(progress.eased);
        if progress.is_final() {
            self.animation = None;
            TickOutcome::Finished(progress, self.complete(kind))
        } else {
            TickOutcome::Frame(progress)
        }
    }

    /// Ticks until the running animation completes.
    ///
    /// Returns `None` if nothing was animating.
    pub fn finish(&mut self) -> Option<Completion> {
        loop {
            match self.tick() {
                TickOutcome::Idle => return None,
                TickOutcome::Frame(_) => {}
                TickOutcome::Finished(_, completion) => return Some(completion),
            }
        }
    }

    /// Draws one frame at `progress` in `[0, 1]`.
    ///
    /// Hovered segments grow toward `outer_radius + extra_thickness * progress`; the others
    /// sit at the resting outer radius. When nothing is hovered, every segment also moves
    /// its sweep and radii from its saved baseline toward the current layout. Afterwards the
    /// angular chain is rebuilt from [`TOP_ANGLE`]. Interpolation always starts from the
    /// baseline, so drawing the same progress twice yields the same frame.
    pub fn draw(&mut self, progress: f64) {
        self.backend.clear(self.size);
        let layout = self.layout;
        let grown = layout.outer_radius + self.config.extra_thickness * progress;
        let settle = self.active.is_empty();
        let total = self.total;

        for i in 0..self.segments.len() {
            let segment = &mut self.segments[i];
            if segment.is_highlighted() {
                segment.transition(
                    Transition {
                        outer_radius: Some(grown),
                        ..Transition::default()
                    },
                    progress,
                );
            } else {
                segment.geometry.outer_radius = layout.outer_radius;
            }
            if settle {
                segment.transition(
                    Transition {
                        circumference: Some(layout::circumference_for(segment.value, total)),
                        outer_radius: Some(layout.outer_radius),
                        inner_radius: Some(layout.inner_radius),
                    },
                    progress,
                );
            }
            if i == 0 {
                segment.start_angle = TOP_ANGLE;
            }
            segment.close_span();
            self.backend.draw_sector(&self.arcs.shape(segment));

            let end = segment.end_angle;
            if let Some(next) = self.segments.get_mut(i + 1) {
                next.start_angle = end;
            }
        }
    }

    /// Feeds a pointer event through hover correlation and the tooltip state machine.
    ///
    /// Returns `true` if a tooltip transition was started.
    pub fn handle_pointer(&mut self, event: PointerEvent) -> bool {
        if !self.config.show_tooltips {
            return false;
        }
        let active = match event.position() {
            Some(client) => self.segments_at_event(client),
            None => ActiveSet::new(),
        };
        hover::apply_highlight(&mut self.segments, &active);
        self.show_tooltip(active, false)
    }

    /// Segments under a pointer given in client coordinates, in store order.
    pub fn segments_at_event(&self, client: Point) -> ActiveSet {
        let point = hover::to_canvas(client, self.canvas_origin);
        let hits = hover::segments_at_point(&self.arcs, &self.segments, point);
        trace!("pointer at {point:?} hits {hits:?}");
        hits
    }

    /// Makes `elements` the active subset and schedules the tooltip transition.
    ///
    /// Ignored before the first render completes, and when `elements` equals the current
    /// subset unless `force_redraw` is set. Returns `true` if a transition was started.
    pub fn show_tooltip(&mut self, elements: ActiveSet, force_redraw: bool) -> bool {
        if !self.loaded {
            trace!("hover ignored before the first render completed");
            return false;
        }
        if !force_redraw && !hover::is_changed(&self.active, &elements) {
            return false;
        }
        self.active = elements.clone();
        self.tooltip_subject = elements;
        self.start(Animation::new(
            AnimationKind::Tooltip,
            TOOLTIP_TRANSITION_STEPS,
            Easing::Linear,
        ));
        true
    }

    fn start(&mut self, animation: Animation) {
        debug!("{:?} animation: {} steps", animation.kind, animation.steps());
        if let Some(previous) = self.animation.replace(animation) {
            debug!(
                "superseded {:?} animation at frame {}/{}",
                previous.kind,
                previous.elapsed(),
                previous.steps()
            );
        }
    }

    fn complete(&mut self, kind: AnimationKind) -> Completion {
        match kind {
            AnimationKind::Render => {
                if !self.loaded {
                    debug!("first render complete; tooltips enabled");
                }
                self.loaded = true;
                let resting = self.layout.outer_radius;
                for segment in &mut self.segments {
                    segment.commit_geometry(resting);
                }
            }
            AnimationKind::Tooltip => {
                let subject = core::mem::take(&mut self.tooltip_subject);
                self.render_tooltips(&subject);
            }
        }
        Completion { kind }
    }

    fn render_tooltips(&mut self, subject: &[SegmentId]) {
        self.backend.hide_custom();
        let Some(&first) = subject.first() else {
            return;
        };

        if self.datasets.len() > 1 {
            let title = self.segment(first).and_then(|s| s.label.clone());
            let combined = tooltip::multi_tooltip(
                &self.datasets,
                first,
                title,
                self.size.width / 2.0,
                self.config.multi_tooltip_formatter,
            );
            match combined {
                Some(t) => self.backend.draw_multi_tooltip(&t, &self.config.tooltip),
                None => debug!("no dataset has a value for {first:?}; combined tooltip skipped"),
            }
            return;
        }

        for id in subject {
            let Some(segment) = self.segments.iter().find(|s| s.id == *id) else {
                continue;
            };
            let text = (self.config.tooltip_formatter)(TooltipContext {
                label: segment.label.as_deref(),
                value: segment.value,
            });
            let t = SingleTooltip {
                anchor: self.arcs.shape(segment).tooltip_anchor(),
                text,
            };
            self.backend.draw_tooltip(&t, &self.config.tooltip);
        }
    }
}

impl<B> Doughnut<B> {
    /// `total = Σ |value|` over the current segments.
    pub fn recompute_total(&mut self) {
        self.total = layout::total_of(self.segments.iter().map(|s| s.value));
    }

    /// `total = Σ |value|` over an arbitrary collection of values.
    pub fn set_total_from(&mut self, values: impl IntoIterator<Item = f64>) {
        self.total = layout::total_of(values);
    }

    /// Angular extent of `value` under the cached total; zero when the total is zero.
    pub fn circumference_for(&self, value: f64) -> f64 {
        layout::circumference_for(value, self.total)
    }

    /// The cached total.
    pub fn total(&self) -> f64 {
        self.total
    }

    /// Segments in store order.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Mutable segment access for value and color edits; follow up with `update`.
    pub fn segments_mut(&mut self) -> &mut [Segment] {
        &mut self.segments
    }

    /// The segment with the given id.
    pub fn segment(&self, id: SegmentId) -> Option<&Segment> {
        self.segments.iter().find(|s| s.id == id)
    }

    /// Current layout (center and resting radii).
    pub fn layout(&self) -> &RadialLayout {
        &self.layout
    }

    /// Canvas size.
    pub fn size(&self) -> Size {
        self.size
    }

    /// The configuration.
    pub fn config(&self) -> &DoughnutConfig {
        &self.config
    }

    /// Whether the first render has completed.
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Whether an animation is pending or running.
    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// The current hover subset.
    pub fn active_elements(&self) -> &[SegmentId] {
        &self.active
    }

    /// Tooltip state.
    pub fn phase(&self) -> TooltipPhase {
        if !self.loaded {
            TooltipPhase::Suppressed
        } else if self.active.is_empty() {
            TooltipPhase::Idle
        } else {
            TooltipPhase::Hovering
        }
    }

    /// Sets the canvas' top-left corner in client coordinates.
    pub fn set_canvas_origin(&mut self, origin: Point) {
        self.canvas_origin = origin;
    }

    /// Replaces the datasets consulted for combined tooltips.
    ///
    /// With fewer than two datasets, every active segment gets its own tooltip.
    pub fn set_datasets(&mut self, datasets: Vec<Dataset>) {
        self.datasets = datasets;
    }

    /// Datasets consulted for combined tooltips.
    pub fn datasets(&self) -> &[Dataset] {
        &self.datasets
    }

    /// Describes this chart's segments as a dataset.
    pub fn segments_dataset(&self, label: Option<String>) -> Dataset {
        Dataset::from_segments(label, &self.arcs, &self.segments)
    }

    /// Legend items in segment order, plus the chart name and template.
    pub fn legend(&self) -> Legend {
        Legend {
            name: self.config.kind.name(),
            template: self.config.legend_template.clone(),
            items: self.segments.iter().map(LegendItem::from).collect(),
        }
    }

    /// The backend.
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// The backend, mutably.
    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    /// Consumes the chart, returning its backend.
    pub fn into_backend(self) -> B {
        self.backend
    }
}
