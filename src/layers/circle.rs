//! A circle overlay with a geographic center and a radius in meters.
//!
//! The overlay is shared between the thread that edits it and the thread that
//! renders it. All fields live in one immutable [`CircleState`] snapshot; writers
//! replace the snapshot as a whole, and [`Circle::draw`] works from a single
//! snapshot so it never sees a half-applied update.

use crate::{
    core::geo::{GeoPoint, Point},
    layers::style::Paint,
    traits::{CoordinateTransform, DrawSurface},
    MapError, Result,
};
use std::sync::{Arc, PoisonError, RwLock};

/// One consistent view of a [`Circle`].
#[derive(Debug, Clone, PartialEq)]
pub struct CircleState {
    pub center: Option<GeoPoint>,
    /// Radius in meters, never negative
    pub radius: f32,
    pub fill: Option<Paint>,
    pub stroke: Option<Paint>,
}

fn check_radius(radius: f32) -> Result<()> {
    if radius.is_nan() || radius < 0.0 {
        return Err(MapError::invalid(format!(
            "radius must not be negative: {radius}"
        )));
    }
    Ok(())
}

#[derive(Debug)]
pub struct Circle {
    state: RwLock<Arc<CircleState>>,
}

impl Circle {
    pub fn new(
        center: Option<GeoPoint>,
        radius: f32,
        fill: Option<Paint>,
        stroke: Option<Paint>,
    ) -> Result<Self> {
        check_radius(radius)?;
        Ok(Self {
            state: RwLock::new(Arc::new(CircleState {
                center,
                radius,
                fill,
                stroke,
            })),
        })
    }

    /// The current state. The returned snapshot is unaffected by later updates.
    pub fn snapshot(&self) -> Arc<CircleState> {
        // Snapshots are swapped whole, so a poisoned lock still guards a consistent value.
        let guard = self.state.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&guard)
    }

    pub fn center(&self) -> Option<GeoPoint> {
        self.snapshot().center
    }

    pub fn radius(&self) -> f32 {
        self.snapshot().radius
    }

    pub fn fill(&self) -> Option<Paint> {
        self.snapshot().fill.clone()
    }

    pub fn stroke(&self) -> Option<Paint> {
        self.snapshot().stroke.clone()
    }

    pub fn set_center(&self, center: Option<GeoPoint>) {
        self.update(|state| state.center = center);
    }

    pub fn set_radius(&self, radius: f32) -> Result<()> {
        check_radius(radius)?;
        self.update(|state| state.radius = radius);
        Ok(())
    }

    pub fn set_fill(&self, fill: Option<Paint>) {
        self.update(|state| state.fill = fill);
    }

    pub fn set_stroke(&self, stroke: Option<Paint>) {
        self.update(|state| state.stroke = stroke);
    }

    /// Replaces the whole state at once.
    pub fn replace(&self, state: CircleState) -> Result<()> {
        check_radius(state.radius)?;
        self.update(|current| *current = state);
        Ok(())
    }

    fn update(&self, apply: impl FnOnce(&mut CircleState)) {
        let mut guard = self.state.write().unwrap_or_else(PoisonError::into_inner);
        let mut next = CircleState::clone(&guard);
        apply(&mut next);
        log::debug!("circle updated: {next:?}");
        *guard = Arc::new(next);
    }

    /// Draws the circle onto `surface`, whose top-left corner sits at `canvas_origin`
    /// on the world pixel canvas.
    ///
    /// Returns `Ok(false)` without drawing when there is no center or no paint.
    /// The outline is drawn before the fill.
    pub fn draw<P>(
        &self,
        projection: &P,
        zoom_level: i8,
        canvas_origin: Point,
        surface: &mut dyn DrawSurface,
    ) -> Result<bool>
    where
        P: CoordinateTransform + ?Sized,
    {
        let state = self.snapshot();
        let Some(center) = state.center else {
            return Ok(false);
        };
        if state.stroke.is_none() && state.fill.is_none() {
            return Ok(false);
        }

        let pixel = projection
            .project(&center, zoom_level)?
            .offset_from(&canvas_origin);
        let radius = projection.meters_to_pixels(
            f64::from(state.radius),
            center.latitude(),
            zoom_level,
        )?;

        let (x, y, radius) = (pixel.x as f32, pixel.y as f32, radius as f32);
        if let Some(stroke) = &state.stroke {
            surface.draw_circle(x, y, radius, stroke);
        }
        if let Some(fill) = &state.fill {
            surface.draw_circle(x, y, radius, fill);
        }
        Ok(true)
    }
}
