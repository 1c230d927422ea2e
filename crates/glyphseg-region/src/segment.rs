//! Connected-component region segmentation
//!
//! Discovers maximal 8-connected sets of rule-matching pixels and emits
//! their bounding rectangles. The traversal is breadth-first over an
//! explicit queue with a visited bitmap; recursion would blow the call
//! stack on large contiguous regions such as solid backgrounds.

use glyphseg_color::RuleSet;
use glyphseg_core::{Raster, Rect};
use std::collections::VecDeque;

/// 8-connected neighbor offsets. Diagonal touches merge components,
/// which keeps broken glyph strokes whole.
const NEIGHBORS: [(i64, i64); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Size filter for discovered components.
///
/// Components narrower than `min_width` or shorter than `min_height`
/// are discarded as noise. The defaults drop isolated specks while
/// keeping 2x2 glyph fragments.
#[derive(Debug, Clone, Copy)]
pub struct SegmentOptions {
    /// Minimum bounding-box width in pixels
    pub min_width: u32,
    /// Minimum bounding-box height in pixels
    pub min_height: u32,
}

impl Default for SegmentOptions {
    fn default() -> Self {
        Self {
            min_width: 2,
            min_height: 2,
        }
    }
}

/// Segment a raster into the bounding rectangles of its 8-connected
/// rule-matching components.
///
/// Components are emitted in the order their seed pixel is first
/// encountered by the row-major scan (top-to-bottom, left-to-right).
/// Downstream heuristics such as inferring a grid origin from the
/// first region depend on this ordering, so it is part of the
/// contract, not an accident of the implementation.
///
/// Runs in O(W*H) time with an O(W*H) visited bitmap; every pixel is
/// tested against the rule set exactly once. An empty rule set or an
/// all-non-matching raster yields an empty list.
pub fn segment(raster: &Raster, rules: &RuleSet, options: &SegmentOptions) -> Vec<Rect> {
    if rules.is_empty() {
        return Vec::new();
    }

    let w = raster.width() as usize;
    let h = raster.height() as usize;
    let pixels = raster.pixels();

    let mut visited = vec![false; w * h];
    let mut queue: VecDeque<usize> = VecDeque::new();
    let mut regions = Vec::new();

    for seed in 0..pixels.len() {
        if visited[seed] {
            continue;
        }
        // Cheap rejection: mark and move on without touching the queue
        if !rules.matches(pixels[seed]) {
            visited[seed] = true;
            continue;
        }

        visited[seed] = true;
        queue.push_back(seed);

        let mut min_x = seed % w;
        let mut max_x = min_x;
        let mut min_y = seed / w;
        let mut max_y = min_y;

        while let Some(index) = queue.pop_front() {
            let cx = index % w;
            let cy = index / w;
            min_x = min_x.min(cx);
            max_x = max_x.max(cx);
            min_y = min_y.min(cy);
            max_y = max_y.max(cy);

            for (dx, dy) in NEIGHBORS {
                let nx = cx as i64 + dx;
                let ny = cy as i64 + dy;
                if nx < 0 || ny < 0 || nx >= w as i64 || ny >= h as i64 {
                    continue;
                }
                let neighbor = (ny as usize) * w + nx as usize;
                if visited[neighbor] {
                    continue;
                }
                // Mark even non-matching neighbors so they are never
                // re-tested; only matching ones extend the component
                visited[neighbor] = true;
                if rules.matches(pixels[neighbor]) {
                    queue.push_back(neighbor);
                }
            }
        }

        let region_w = max_x - min_x + 1;
        let region_h = max_y - min_y + 1;
        if region_w >= options.min_width as usize && region_h >= options.min_height as usize {
            regions.push(Rect::new(
                min_x as i32,
                min_y as i32,
                (max_x + 1) as i32,
                (max_y + 1) as i32,
            ));
        }
    }

    regions
}

#[cfg(test)]
mod tests {
    use super::*;
    use glyphseg_core::RasterMut;
    use glyphseg_core::pixel::OPAQUE_WHITE;

    /// Build a raster with white pixels at the given coordinates on a
    /// black background.
    fn raster_with_white(w: u32, h: u32, points: &[(u32, u32)]) -> Raster {
        let mut rm = RasterMut::new(w, h).unwrap();
        rm.fill(glyphseg_core::pixel::OPAQUE_BLACK);
        for &(x, y) in points {
            rm.set_pixel(x, y, OPAQUE_WHITE);
        }
        rm.into()
    }

    fn white_rules() -> RuleSet {
        RuleSet::match_white()
    }

    #[test]
    fn test_single_block() {
        // A 4x3 block of matching pixels yields exactly one region with
        // that bounding box
        let points: Vec<_> = (2..6).flat_map(|x| (5..8).map(move |y| (x, y))).collect();
        let raster = raster_with_white(20, 20, &points);

        let regions = segment(&raster, &white_rules(), &SegmentOptions::default());
        assert_eq!(regions.len(), 1);
        assert_eq!(regions[0], Rect::new(2, 5, 6, 8));
        assert_eq!(regions[0].width(), 4);
        assert_eq!(regions[0].height(), 3);
    }

    #[test]
    fn test_separated_clusters_are_disjoint() {
        // Two 2x2 clusters with a one-pixel gap and no diagonal path
        let raster = raster_with_white(
            20,
            10,
            &[(2, 2), (3, 2), (2, 3), (3, 3), (10, 2), (11, 2), (10, 3), (11, 3)],
        );

        let regions = segment(&raster, &white_rules(), &SegmentOptions::default());
        assert_eq!(regions.len(), 2);
        assert_eq!(regions[0], Rect::new(2, 2, 4, 4));
        assert_eq!(regions[1], Rect::new(10, 2, 12, 4));
    }

    #[test]
    fn test_diagonal_touch_merges() {
        // Two 2x2 clusters touching only at one diagonal corner must
        // merge under 8-connectivity
        let raster = raster_with_white(
            10,
            10,
            &[(2, 2), (3, 2), (2, 3), (3, 3), (4, 4), (5, 4), (4, 5), (5, 5)],
        );

        let regions = segment(&raster, &white_rules(), &SegmentOptions::default());
        assert_eq!(regions.len(), 1);
        assert_eq!(regions[0], Rect::new(2, 2, 6, 6));
    }

    #[test]
    fn test_size_filter_drops_noise() {
        // A single pixel and a 1-wide vertical stroke both fail the
        // default 2x2 filter; the 2x2 block survives
        let raster = raster_with_white(
            20,
            20,
            &[(1, 1), (10, 1), (10, 2), (10, 3), (15, 15), (16, 15), (15, 16), (16, 16)],
        );

        let regions = segment(&raster, &white_rules(), &SegmentOptions::default());
        assert_eq!(regions.len(), 1);
        assert_eq!(regions[0], Rect::new(15, 15, 17, 17));

        // Relaxing the filter keeps all three components
        let all = segment(
            &raster,
            &white_rules(),
            &SegmentOptions {
                min_width: 1,
                min_height: 1,
            },
        );
        assert_eq!(all.len(), 3);
    }

    #[test]
    fn test_emission_order_is_raster_scan() {
        // Seeds are encountered top-to-bottom, left-to-right
        let raster = raster_with_white(
            30,
            30,
            &[
                // Component seeded at (20, 1)
                (20, 1), (21, 1), (20, 2), (21, 2),
                // Component seeded at (2, 5)
                (2, 5), (3, 5), (2, 6), (3, 6),
                // Component seeded at (10, 20)
                (10, 20), (11, 20), (10, 21), (11, 21),
            ],
        );

        let regions = segment(&raster, &white_rules(), &SegmentOptions::default());
        let seeds: Vec<_> = regions.iter().map(|r| (r.left, r.top)).collect();
        assert_eq!(seeds, vec![(20, 1), (2, 5), (10, 20)]);

        // Stable across repeated runs on identical input
        let again = segment(&raster, &white_rules(), &SegmentOptions::default());
        assert_eq!(regions, again);
    }

    #[test]
    fn test_no_matches_yields_empty() {
        let raster = raster_with_white(10, 10, &[]);
        assert!(segment(&raster, &white_rules(), &SegmentOptions::default()).is_empty());
    }

    #[test]
    fn test_empty_rule_set_yields_empty() {
        let raster = raster_with_white(10, 10, &[(2, 2), (3, 3)]);
        let empty = RuleSet::compile(&[]);
        assert!(segment(&raster, &empty, &SegmentOptions::default()).is_empty());
    }

    #[test]
    fn test_solid_raster_is_one_region() {
        // A fully matching raster exercises the queue on its largest
        // possible component
        let mut rm = RasterMut::new(64, 48).unwrap();
        rm.fill(OPAQUE_WHITE);
        let raster: Raster = rm.into();

        let regions = segment(&raster, &white_rules(), &SegmentOptions::default());
        assert_eq!(regions.len(), 1);
        assert_eq!(regions[0], Rect::new(0, 0, 64, 48));
    }
}
