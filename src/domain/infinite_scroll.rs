//! Infinite scroll geometry.
//!
//! A wheel appears to scroll forever by repeating its items many times and
//! quietly moving the offset back towards the middle of the repeated content.
//!
//! Terminology:
//! - An *item* is a unique value on the wheel (e.g. minute 37).
//! - A *row* is a physical row of the list. Each item maps to many rows.
//! - A *block* is one full run of items `0..n`; infinite mode stacks 1001.
//! - The *primary block* is the middle block, the target of re-centering.
//!
//! With 3 items (A, B, C) and 3 blocks the rows read A B C | A B C | A B C;
//! block 1 is primary and with 40-unit rows item A's primary offset is 120.
//!
//! All functions here are pure and short-circuit to neutral values when the
//! wheel has no items.

use serde::{Deserialize, Serialize};

/// Number of blocks stacked in infinite mode. Odd, so a middle block exists.
pub const INFINITE_BLOCKS: usize = 1001;

/// Whether a wheel repeats its items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScrollMode {
    Finite,
    Infinite,
}

impl ScrollMode {
    pub fn blocks(self) -> usize {
        match self {
            ScrollMode::Finite => 1,
            ScrollMode::Infinite => INFINITE_BLOCKS,
        }
    }
}

/// Which way the content settled relative to where the drag was released.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollDirection {
    /// The chosen row's centre lies above the released centre.
    Up,
    /// The chosen row's centre lies at or below the released centre.
    Down,
}

/// Result of snapping a released drag onto a row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Snap {
    pub row: usize,
    pub item: usize,
    /// Offset that puts `row` exactly in the visible centre.
    pub offset: f64,
    pub direction: ScrollDirection,
}

/// Row layout of one wheel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollGeometry {
    item_count: usize,
    mode: ScrollMode,
    row_height: f64,
}

impl ScrollGeometry {
    pub fn new(item_count: usize, mode: ScrollMode, row_height: f64) -> Self {
        Self {
            item_count,
            mode,
            row_height,
        }
    }

    // ===== Queries =====

    /// Number of distinct items on the wheel.
    pub fn item_count(&self) -> usize {
        self.item_count
    }

    /// Whether the item sequence repeats.
    pub fn mode(&self) -> ScrollMode {
        self.mode
    }

    /// Height of one row in points.
    pub fn row_height(&self) -> f64 {
        self.row_height
    }

    /// Number of repetitions of the item sequence: 1 when finite.
    pub fn blocks(&self) -> usize {
        self.mode.blocks()
    }

    /// Physical rows: items times blocks.
    pub fn total_rows(&self) -> usize {
        self.item_count * self.blocks()
    }

    /// Height of one full pass through the items.
    pub fn block_height(&self) -> f64 {
        self.item_count as f64 * self.row_height
    }

    /// The middle block, where the wheel rests between gestures.
    pub fn primary_block_index(&self) -> usize {
        self.blocks() / 2
    }

    fn is_degenerate(&self) -> bool {
        self.item_count == 0 || !(self.row_height > 0.0)
    }

    /// Maps a row to its item. Returns 0 for an empty wheel.
    pub fn item_at(&self, row: usize) -> usize {
        if self.item_count == 0 {
            return 0;
        }
        row % self.item_count
    }

    /// Row containing `offset`, clamped to the valid rows.
    pub fn row_at_offset(&self, offset: f64) -> Option<usize> {
        let last_row = self.total_rows().checked_sub(1)?;
        if self.is_degenerate() {
            return None;
        }
        let row = (offset / self.row_height).floor().clamp(0.0, last_row as f64);
        Some(row as usize)
    }

    /// Offset that centres `row` in a viewport of `visible_height`.
    pub fn offset_centering_row(&self, row: usize, visible_height: f64) -> f64 {
        (row as f64 + 0.5) * self.row_height - visible_height * 0.5
    }

    /// Distance from the visible centre to the centre of `row`.
    pub fn row_offset_from_center(&self, row: usize, offset: f64, visible_height: f64) -> f64 {
        let center = offset + visible_height * 0.5;
        (row as f64 + 0.5) * self.row_height - center
    }

    // ===== Operations =====

    /// Snaps a proposed resting offset so the row nearest the visible centre
    /// ends up exactly centred.
    ///
    /// Returns `None` when the wheel has no rows.
    pub fn snap(&self, proposed_offset: f64, visible_height: f64) -> Option<Snap> {
        let last_row = self.total_rows().checked_sub(1)?;
        if self.is_degenerate() {
            return None;
        }

        let half_height = visible_height * 0.5;
        let center = proposed_offset + half_height;
        let row = (center / self.row_height).clamp(0.0, last_row as f64).floor() as usize;

        let offset = (row as f64 + 0.5) * self.row_height - half_height;
        let direction = if offset < proposed_offset {
            ScrollDirection::Up
        } else {
            ScrollDirection::Down
        };

        Some(Snap {
            row,
            item: self.item_at(row),
            offset,
            direction,
        })
    }

    /// Moves `offset` to the same position within the primary block.
    ///
    /// Every block shows identical content, so the move is invisible. Finite
    /// and empty wheels are left alone. Applying it twice gives the same
    /// result as applying it once.
    pub fn primary_offset(&self, offset: f64) -> f64 {
        if self.mode == ScrollMode::Finite || self.is_degenerate() {
            return offset;
        }
        let block_height = self.block_height();
        let primary_start = self.primary_block_index() as f64 * block_height;
        // rem_euclid rounds tiny negative offsets up to the divisor itself
        let within_block = offset.rem_euclid(block_height);
        let moved = primary_start + within_block;
        if within_block >= block_height || moved >= primary_start + block_height {
            primary_start
        } else {
            moved
        }
    }

    /// Among the blocks around `target`, the offset at which `item` starts
    /// that is closest to `target`. Ties go to the earlier block; 0.0 when no
    /// candidate block exists.
    pub fn closest_offset_for_item(&self, item: usize, target: f64) -> f64 {
        if self.is_degenerate() {
            return 0.0;
        }

        let block_height = self.block_height();
        let item_offset = item as f64 * self.row_height;
        let target_block = (target / block_height).floor() as i64;
        let blocks = self.blocks() as i64;

        (target_block - 1..=target_block + 1)
            .filter(|block| *block >= 0 && *block < blocks)
            .map(|block| block as f64 * block_height + item_offset)
            .fold(None, |best: Option<f64>, candidate| match best {
                Some(b) if (b - target).abs() <= (candidate - target).abs() => Some(b),
                _ => Some(candidate),
            })
            .unwrap_or(0.0)
    }

    /// Offset that centres `item` given the widget's current offset.
    ///
    /// Finite wheels use the item's only row. Infinite wheels first re-center
    /// into the primary block and then pick the nearest copy of the item so
    /// an animated move takes the short way round.
    pub fn offset_centering_item(&self, item: usize, current_offset: f64, visible_height: f64) -> f64 {
        if self.mode == ScrollMode::Finite {
            return self.offset_centering_row(item, visible_height);
        }
        if self.is_degenerate() {
            return 0.0;
        }

        let half_row = self.row_height * 0.5;
        let half_height = visible_height * 0.5;
        let alignment = self.primary_offset(current_offset) + half_height - half_row;

        self.closest_offset_for_item(item, alignment) + half_row - half_height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-6;

    fn infinite(items: usize, row_height: f64) -> ScrollGeometry {
        ScrollGeometry::new(items, ScrollMode::Infinite, row_height)
    }

    #[test]
    fn test_item_at_wraps_every_row() {
        let geometry = infinite(7, 30.0);
        for row in 0..geometry.total_rows() {
            assert_eq!(geometry.item_at(row), row % 7);
        }
    }

    #[test]
    fn test_block_sizes() {
        let geometry = infinite(3, 40.0);
        assert_eq!(geometry.total_rows(), 3003);
        assert_eq!(geometry.block_height(), 120.0);
        assert_eq!(geometry.primary_block_index(), 500);

        let finite = ScrollGeometry::new(2, ScrollMode::Finite, 44.0);
        assert_eq!(finite.total_rows(), 2);
        assert_eq!(finite.primary_block_index(), 0);
    }

    #[test]
    fn test_empty_wheel_short_circuits() {
        let geometry = infinite(0, 40.0);
        assert_eq!(geometry.item_at(12), 0);
        assert_eq!(geometry.snap(100.0, 200.0), None);
        assert_eq!(geometry.primary_offset(123.0), 123.0);
        assert_eq!(geometry.closest_offset_for_item(1, 500.0), 0.0);
        assert_eq!(geometry.offset_centering_item(1, 500.0, 200.0), 0.0);
        assert_eq!(geometry.row_at_offset(10.0), None);
    }

    #[test]
    fn test_snap_centres_chosen_row() {
        let geometry = infinite(60, 44.0);
        for proposed in [0.0, 13.7, 1000.25, 55_555.5, 2_000_000.0] {
            let snap = geometry.snap(proposed, 220.0).unwrap();
            let centre_row = (snap.offset + 110.0) / 44.0;
            assert!((centre_row - (snap.row as f64 + 0.5)).abs() < EPS);
            assert_eq!(snap.item, snap.row % 60);
        }
    }

    #[test]
    fn test_snap_clamps_to_last_row() {
        let geometry = ScrollGeometry::new(2, ScrollMode::Finite, 44.0);
        let snap = geometry.snap(10_000.0, 200.0).unwrap();
        assert_eq!(snap.row, 1);
        assert_eq!(snap.direction, ScrollDirection::Up);

        let snap = geometry.snap(-500.0, 200.0).unwrap();
        assert_eq!(snap.row, 0);
        assert_eq!(snap.direction, ScrollDirection::Down);
    }

    #[test]
    fn test_snap_direction() {
        let geometry = infinite(10, 40.0);
        // centre at 150 -> row 3 (centre 140): content nudged up
        let snap = geometry.snap(50.0, 200.0).unwrap();
        assert_eq!(snap.row, 3);
        assert_eq!(snap.offset, 40.0);
        assert_eq!(snap.direction, ScrollDirection::Up);
    }

    #[test]
    fn test_primary_offset_is_idempotent() {
        let geometry = infinite(60, 44.0);
        for offset in [0.0, 1.5, 2639.9, 123_456.789, -88.0, 2_640_000.0] {
            let once = geometry.primary_offset(offset);
            let twice = geometry.primary_offset(once);
            assert_eq!(once, twice);

            let block = (once / geometry.block_height()).floor() as usize;
            assert_eq!(block, geometry.primary_block_index());
        }
    }

    #[test]
    fn test_primary_offset_of_tiny_negative_offsets() {
        let geometry = infinite(3, 40.0);
        let primary_start = 500.0 * 120.0;
        for offset in [-1e-15, -1e-17, -3e-15, 120.0 - 1e-13, -120.0 - 1e-14] {
            let once = geometry.primary_offset(offset);
            assert!(once >= primary_start && once < primary_start + 120.0, "{} -> {}", offset, once);
            assert_eq!(geometry.primary_offset(once), once);
        }
    }

    #[test]
    fn test_primary_offset_keeps_position_within_block() {
        let geometry = infinite(3, 40.0);
        let moved = geometry.primary_offset(250.0);
        assert!((moved - (500.0 * 120.0 + 10.0)).abs() < EPS);
    }

    #[test]
    fn test_finite_primary_offset_is_noop() {
        let geometry = ScrollGeometry::new(12, ScrollMode::Finite, 40.0);
        assert_eq!(geometry.primary_offset(333.0), 333.0);
    }

    #[test]
    fn test_closest_offset_picks_nearest_block() {
        let geometry = infinite(3, 40.0);
        // target in block 500; item 1 starts at 40 within each block
        assert_eq!(geometry.closest_offset_for_item(1, 60_080.0), 60_040.0);
        // item 0 near the end of block 500 is closer in block 501
        assert_eq!(geometry.closest_offset_for_item(0, 60_110.0), 60_120.0);
    }

    #[test]
    fn test_closest_offset_respects_first_block() {
        let geometry = infinite(3, 40.0);
        assert_eq!(geometry.closest_offset_for_item(2, 0.0), 80.0);
    }

    #[test]
    fn test_centre_item_in_infinite_mode() {
        let geometry = infinite(3, 40.0);
        let offset = geometry.offset_centering_item(1, 0.0, 200.0);
        assert!((offset - 59_960.0).abs() < EPS);

        let centre_row = ((offset + 100.0) / 40.0).floor() as usize;
        assert_eq!(centre_row % 3, 1);
        assert_eq!(centre_row / 3, geometry.primary_block_index());
    }

    #[test]
    fn test_centre_item_in_finite_mode() {
        let geometry = ScrollGeometry::new(2, ScrollMode::Finite, 44.0);
        assert_eq!(geometry.offset_centering_item(1, 0.0, 220.0), 1.5 * 44.0 - 110.0);
    }

    #[test]
    fn test_row_offset_from_center() {
        let geometry = infinite(10, 40.0);
        assert_eq!(geometry.row_offset_from_center(3, 40.0, 200.0), 0.0);
        assert_eq!(geometry.row_offset_from_center(4, 40.0, 200.0), 40.0);
    }
}
