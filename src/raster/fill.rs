//! 4-connected flood fill.
//!
//! All variants set every unset pixel reachable from the seed through
//! edge-sharing unset pixels, and nothing else. They differ only in how the
//! pending work is held:
//!
//! - [`flood_fill_iterative`]: FIFO queue, neighbours visited right, down,
//!   left, up.
//! - [`flood_fill_recursive`]: call-stack recursion, neighbours visited
//!   below, right, above, left. Recursion depth grows with the region size,
//!   so very large regions can exhaust the thread stack.
//! - [`flood_fill_depth_first`]: the recursive traversal driven by an explicit
//!   `Vec` stack. Same visiting order as the recursive variant, no depth limit.
//!
//! Every variant marks a pixel at the moment it is discovered, before it is
//! queued or descended into. Marking at dequeue time instead would let two
//! neighbours queue the same pixel before either processes it.
//!
//! Seeds that are already set or outside the buffer are a no-op.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::canvas::PixelBuffer;

/// Neighbour order of the queue-based fill: right, down, left, up.
const QUEUE_ORDER: [(i32, i32); 4] = [(1, 0), (0, 1), (-1, 0), (0, -1)];

/// Neighbour order of the recursive fill: below, right, above, left.
const RECURSION_ORDER: [(i32, i32); 4] = [(0, 1), (1, 0), (0, -1), (-1, 0)];

/// A pixel waiting in the iterative fill's queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WaitingPixel {
    /// X coordinate.
    pub x: i32,
    /// Y coordinate.
    pub y: i32,
}

/// Summary of a single fill call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FillStats {
    /// Number of pixels set by the call.
    pub filled: usize,
    /// Largest amount of pending work at any moment: queue length, stack
    /// length or recursion depth depending on the variant.
    pub peak_pending: usize,
}

impl FillStats {
    fn record(&mut self, pending: usize) {
        self.filled += 1;
        self.peak_pending = self.peak_pending.max(pending);
    }
}

/// How the recursive fill tool descends into a region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RecursionMode {
    /// Real function recursion.
    #[default]
    Native,
    /// The same traversal on a heap-allocated stack.
    ExplicitStack,
}

/// The fill variants, for callers that pick one at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FillAlgorithm {
    /// [`flood_fill_iterative`].
    Iterative,
    /// [`flood_fill_recursive`].
    Recursive,
    /// [`flood_fill_depth_first`].
    DepthFirst,
}

impl FillAlgorithm {
    /// Every variant.
    pub const ALL: [Self; 3] = [Self::Iterative, Self::Recursive, Self::DepthFirst];

    /// Run this variant.
    pub fn run<B: PixelBuffer + ?Sized>(self, buf: &mut B, x: i32, y: i32) -> FillStats {
        match self {
            Self::Iterative => flood_fill_iterative(buf, x, y),
            Self::Recursive => flood_fill_recursive(buf, x, y),
            Self::DepthFirst => flood_fill_depth_first(buf, x, y),
        }
    }
}

/// Returns `true` if `(x, y)` is inside the buffer and unset.
#[inline]
fn is_fillable<B: PixelBuffer + ?Sized>(buf: &B, x: i32, y: i32) -> bool {
    buf.contains(x, y) && !buf.get_pixel(x, y)
}

/// Fill the 4-connected unset region containing `(x, y)` using a FIFO queue.
///
/// # Example
///
/// ```
/// use raster_tools::canvas::Canvas;
/// use raster_tools::raster::flood_fill_iterative;
///
/// let mut canvas = Canvas::from_rows(&["#####", "#...#", "#####"]).unwrap();
/// let stats = flood_fill_iterative(&mut canvas, 2, 1);
/// assert_eq!(stats.filled, 3);
/// assert_eq!(canvas.count_set(), 15);
/// ```
pub fn flood_fill_iterative<B: PixelBuffer + ?Sized>(buf: &mut B, x: i32, y: i32) -> FillStats {
    flood_fill_iterative_with(buf, x, y, |_, _| {})
}

/// [`flood_fill_iterative`] with a hook called for every pixel pushed onto
/// the queue, in push order.
pub fn flood_fill_iterative_with<B, F>(buf: &mut B, x: i32, y: i32, mut on_enqueue: F) -> FillStats
where
    B: PixelBuffer + ?Sized,
    F: FnMut(i32, i32),
{
    let mut stats = FillStats::default();
    let mut queue: VecDeque<WaitingPixel> = VecDeque::new();

    if is_fillable(buf, x, y) {
        buf.set_pixel(x, y);
        queue.push_back(WaitingPixel { x, y });
        on_enqueue(x, y);
        stats.record(queue.len());
    }

    while let Some(&current) = queue.front() {
        for (dx, dy) in QUEUE_ORDER {
            let (nx, ny) = (current.x + dx, current.y + dy);
            if is_fillable(buf, nx, ny) {
                buf.set_pixel(nx, ny);
                queue.push_back(WaitingPixel { x: nx, y: ny });
                on_enqueue(nx, ny);
                stats.record(queue.len());
            }
        }

        queue.pop_front();
    }

    crate::debug!(
        "fill",
        "iterative fill from ({x}, {y}): {} pixels, peak queue {}",
        stats.filled,
        stats.peak_pending
    );
    stats
}

/// Fill the 4-connected unset region containing `(x, y)` by recursion.
///
/// Recursion depth can reach the number of pixels in the region.
pub fn flood_fill_recursive<B: PixelBuffer + ?Sized>(buf: &mut B, x: i32, y: i32) -> FillStats {
    let mut stats = FillStats::default();

    if is_fillable(buf, x, y) {
        fill_from(buf, x, y, 1, &mut stats);
    }

    crate::debug!(
        "fill",
        "recursive fill from ({x}, {y}): {} pixels, depth {}",
        stats.filled,
        stats.peak_pending
    );
    stats
}

/// Set `(x, y)` and descend into each fillable neighbour.
fn fill_from<B: PixelBuffer + ?Sized>(
    buf: &mut B,
    x: i32,
    y: i32,
    depth: usize,
    stats: &mut FillStats,
) {
    buf.set_pixel(x, y);
    stats.record(depth);

    for (dx, dy) in RECURSION_ORDER {
        if is_fillable(buf, x + dx, y + dy) {
            fill_from(buf, x + dx, y + dy, depth + 1, stats);
        }
    }
}

/// A suspended call of the recursive traversal.
#[derive(Debug, Clone, Copy)]
struct Frame {
    x: i32,
    y: i32,
    /// Index into [`RECURSION_ORDER`] of the next neighbour to try.
    next: usize,
}

/// Fill the 4-connected unset region containing `(x, y)` depth-first with an
/// explicit stack.
///
/// Pixels are set in exactly the order [`flood_fill_recursive`] sets them.
pub fn flood_fill_depth_first<B: PixelBuffer + ?Sized>(buf: &mut B, x: i32, y: i32) -> FillStats {
    let mut stats = FillStats::default();
    let mut stack: Vec<Frame> = Vec::new();

    if is_fillable(buf, x, y) {
        buf.set_pixel(x, y);
        stack.push(Frame { x, y, next: 0 });
        stats.record(stack.len());
    }

    while let Some(frame) = stack.last_mut() {
        let Some(&(dx, dy)) = RECURSION_ORDER.get(frame.next) else {
            stack.pop();
            continue;
        };
        frame.next += 1;

        let (nx, ny) = (frame.x + dx, frame.y + dy);
        if is_fillable(buf, nx, ny) {
            buf.set_pixel(nx, ny);
            stack.push(Frame { x: nx, y: ny, next: 0 });
            stats.record(stack.len());
        }
    }

    crate::debug!(
        "fill",
        "depth-first fill from ({x}, {y}): {} pixels, peak stack {}",
        stats.filled,
        stats.peak_pending
    );
    stats
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::canvas::Canvas;
    use proptest::prelude::*;
    use std::collections::{HashMap, HashSet};

    /// A random canvas of walls plus an in-bounds seed.
    fn arb_scene() -> impl Strategy<Value = (Canvas, i32, i32)> {
        (1i32..24, 1i32..24).prop_flat_map(|(w, h)| {
            (
                prop::collection::vec(prop::bool::weighted(0.35), (w * h) as usize),
                0..w,
                0..h,
            )
                .prop_map(move |(cells, sx, sy)| {
                    let mut canvas = Canvas::new(w, h).expect("positive dimensions");
                    for (i, wall) in cells.into_iter().enumerate() {
                        if wall {
                            canvas.set_pixel(i as i32 % w, i as i32 / w);
                        }
                    }
                    (canvas, sx, sy)
                })
        })
    }

    /// Reference reachability: unset pixels 4-connected to the seed.
    fn reachable(canvas: &Canvas, sx: i32, sy: i32) -> HashSet<(i32, i32)> {
        let mut seen = HashSet::new();
        if canvas.get_pixel(sx, sy) {
            return seen;
        }
        let mut todo = vec![(sx, sy)];
        seen.insert((sx, sy));
        while let Some((x, y)) = todo.pop() {
            for (nx, ny) in [(x + 1, y), (x - 1, y), (x, y + 1), (x, y - 1)] {
                if canvas.contains(nx, ny) && !canvas.get_pixel(nx, ny) && seen.insert((nx, ny)) {
                    todo.push((nx, ny));
                }
            }
        }
        seen
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(300))]

        /// All variants leave identical canvases.
        #[test]
        fn prop_variants_agree((canvas, sx, sy) in arb_scene()) {
            let mut iterative = canvas.clone();
            let mut recursive = canvas.clone();
            let mut depth_first = canvas;

            let a = flood_fill_iterative(&mut iterative, sx, sy);
            let b = flood_fill_recursive(&mut recursive, sx, sy);
            let c = flood_fill_depth_first(&mut depth_first, sx, sy);

            prop_assert_eq!(&iterative, &recursive);
            prop_assert_eq!(&iterative, &depth_first);
            prop_assert_eq!(a.filled, b.filled);
            prop_assert_eq!(b, c);
        }

        /// Exactly the reachable region becomes set.
        #[test]
        fn prop_fills_exactly_reachable((canvas, sx, sy) in arb_scene()) {
            let expected = reachable(&canvas, sx, sy);
            let before: HashSet<_> = canvas.set_points().into_iter().collect();

            let mut filled = canvas;
            let stats = flood_fill_iterative(&mut filled, sx, sy);
            let after: HashSet<_> = filled.set_points().into_iter().collect();
            let added: HashSet<_> = after.difference(&before).copied().collect();

            prop_assert_eq!(stats.filled, expected.len());
            prop_assert_eq!(added, expected);
        }

        /// No coordinate is queued twice within one call.
        #[test]
        fn prop_enqueue_at_most_once((mut canvas, sx, sy) in arb_scene()) {
            let mut counts: HashMap<(i32, i32), usize> = HashMap::new();
            let area = canvas.pixel_count();

            let stats = flood_fill_iterative_with(&mut canvas, sx, sy, |x, y| {
                *counts.entry((x, y)).or_default() += 1;
            });

            prop_assert!(counts.values().all(|&c| c == 1));
            prop_assert_eq!(counts.len(), stats.filled);
            prop_assert!(stats.peak_pending <= area);
        }

        /// Filling an already filled region changes nothing.
        #[test]
        fn prop_idempotent((mut canvas, sx, sy) in arb_scene()) {
            for algorithm in FillAlgorithm::ALL {
                algorithm.run(&mut canvas, sx, sy);
                let snapshot = canvas.clone();

                prop_assert_eq!(algorithm.run(&mut canvas, sx, sy).filled, 0);
                prop_assert_eq!(&canvas, &snapshot);
            }
        }
    }
}
