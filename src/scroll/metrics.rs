//! Geometry snapshot of the landing page and the values derived from it.

use crate::config;

/// Heights of the two intro sections, hero first.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IntroSections {
    pub hero: f64,
    pub services: f64,
}

/// Everything the controller needs to know about the current layout.
///
/// `sections` is `None` when the hero or the services section is missing
/// from the page; the snap values are then left as they were.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Layout {
    pub container_height: f64,
    pub viewport_height: f64,
    pub viewport_width: f64,
    pub sections: Option<IntroSections>,
}

impl Layout {
    pub fn max_scroll(&self) -> f64 {
        (self.container_height - self.viewport_height).max(0.0)
    }

    pub fn is_narrow(&self) -> bool {
        config::is_narrow(self.viewport_width)
    }

    /// Offset of the hero/services boundary. Narrow layouts lose the height
    /// of the sticky header.
    pub fn first_boundary(&self) -> Option<f64> {
        let sections = self.sections?;
        if self.is_narrow() {
            Some((sections.hero - config::STICKY_HEADER_OFFSET).max(0.0))
        } else {
            Some(sections.hero)
        }
    }

    pub fn snap_threshold(&self) -> Option<f64> {
        let sections = self.sections?;
        self.first_boundary().map(|boundary| boundary + sections.services)
    }

    pub fn snap_points(&self) -> Option<SnapPoints> {
        self.first_boundary().map(|boundary| SnapPoints::new(vec![0.0, boundary]))
    }
}

/// Ordered, non-decreasing offsets the intro zone settles on.
#[derive(Clone, Debug, PartialEq)]
pub struct SnapPoints(Vec<f64>);

impl SnapPoints {
    pub fn new(mut points: Vec<f64>) -> Self {
        if points.is_empty() {
            points.push(0.0);
        }
        points.sort_by(f64::total_cmp);
        Self(points)
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    pub fn last(&self) -> f64 {
        self.0.last().copied().unwrap_or(0.0)
    }
}

impl Default for SnapPoints {
    fn default() -> Self {
        Self(vec![0.0])
    }
}
