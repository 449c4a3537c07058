use crate::foundation::core::{Entry, EntryList};

/// Largest radius a window is built with; larger requests are clamped to it.
pub const MAX_WINDOW_RADIUS: usize = 4096;

/// One renderable row: `offset` rows away from the pointer, showing entry `index`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct WindowSlot {
    pub offset: i64,
    pub index: usize,
}

/// Bounded slice of the list handed to the renderer for one frame.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
pub struct VisibleWindow {
    /// Entry under the pointer.
    pub reference_index: usize,
    /// Sub-row offset in `[0, 1)` for smooth scrolling.
    pub fraction: f64,
    /// `2 * radius + 1` slots ordered by offset, or empty for an empty list.
    pub slots: Vec<WindowSlot>,
}

impl VisibleWindow {
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Resolve slots against `entries`. Slots past the end of a shorter list are skipped.
    pub fn entries<'a>(
        &'a self,
        entries: &'a EntryList,
    ) -> impl Iterator<Item = (WindowSlot, &'a Entry)> + 'a {
        self.slots
            .iter()
            .filter_map(move |s| entries.get(s.index).map(|e| (*s, e)))
    }
}

/// Window of `2 * window_radius + 1` entry indices centered on the entry under the pointer,
/// wrapping at both ends of the list. Short lists repeat indices. `window_radius` is capped at
/// [`MAX_WINDOW_RADIUS`].
pub fn visible_window(position: f64, total_items: usize, window_radius: usize) -> VisibleWindow {
    let mut out = VisibleWindow::default();
    visible_window_into(position, total_items, window_radius, &mut out);
    out
}

/// Same as [`visible_window`], reusing `out`'s allocation. Used by the frame loop.
pub fn visible_window_into(
    position: f64,
    total_items: usize,
    window_radius: usize,
    out: &mut VisibleWindow,
) {
    out.slots.clear();
    if total_items == 0 {
        out.reference_index = 0;
        out.fraction = 0.0;
        return;
    }

    let position = if position.is_finite() { position } else { 0.0 };
    let whole = position.floor();
    let total = total_items as f64;
    let reference = (whole.rem_euclid(total) as usize).min(total_items - 1);

    out.reference_index = reference;
    out.fraction = position - whole;

    let radius = window_radius.min(MAX_WINDOW_RADIUS);
    let n = total_items as i64;
    let r = radius as i64;
    out.slots.reserve(2 * radius + 1);
    for offset in -r..=r {
        let index = (reference as i64 + offset).rem_euclid(n) as usize;
        out.slots.push(WindowSlot { offset, index });
    }
}

#[cfg(test)]
#[path = "../../tests/unit/spin/window.rs"]
mod tests;
