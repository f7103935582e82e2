//! Scroll-position to UI-state derivation over a cached layout snapshot.
//!
//! The model never touches live layout: the web frontend rebuilds the section
//! cache at startup and after a debounced resize, and the per-frame handler
//! derives all scroll-driven state from the cache alone.

use crate::constants::{HEADER_SCROLL_THRESHOLD, NAV_PROBE_OFFSET, PARALLAX_FACTOR};

/// Snapshot of one navigable section's vertical extent, in document order.
#[derive(Clone, Debug, PartialEq)]
pub struct SectionBounds {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

/// State derived from a single scroll position.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ScrollState {
    pub header_scrolled: bool,
    pub parallax_offset: f64,
    /// Index into the section cache, or `None` when no section contains the
    /// probe line (previously active nav links are then cleared).
    pub active_section: Option<usize>,
}

#[derive(Debug, Default)]
pub struct ScrollModel {
    sections: Vec<SectionBounds>,
    header_height: f64,
}

impl ScrollModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_sections(&mut self, sections: Vec<SectionBounds>) {
        self.sections = sections;
    }

    pub fn set_header_height(&mut self, height: f64) {
        self.header_height = height;
    }

    pub fn header_height(&self) -> f64 {
        self.header_height
    }

    pub fn sections(&self) -> &[SectionBounds] {
        &self.sections
    }

    pub fn section_id(&self, index: usize) -> Option<&str> {
        self.sections.get(index).map(|s| s.id.as_str())
    }

    /// Derive every piece of scroll-driven UI state for `scroll_y`.
    pub fn derive(&self, scroll_y: f64) -> ScrollState {
        ScrollState {
            header_scrolled: scroll_y > HEADER_SCROLL_THRESHOLD,
            parallax_offset: scroll_y * PARALLAX_FACTOR,
            active_section: self.active_section(scroll_y),
        }
    }

    /// First section (document order) whose half-open range `[top, top+height)`
    /// contains the probe line `scroll_y + NAV_PROBE_OFFSET`.
    pub fn active_section(&self, scroll_y: f64) -> Option<usize> {
        let probe = scroll_y + NAV_PROBE_OFFSET;
        self.sections
            .iter()
            .position(|s| probe >= s.top && probe < s.top + s.height)
    }
}
