//! Raster Property Tests
//!
//! End-to-end checks of the line and fill tools through the public API:
//! concrete pixel sets, enclosure, idempotence and cross-variant equivalence.
//!
//! Run: cargo test --test raster_properties_test

#![allow(clippy::unwrap_used, missing_docs)]

use proptest::prelude::*;
use raster_tools::prelude::*;
use raster_tools::raster::flood_fill_iterative_with;
use std::collections::{HashMap, HashSet};

// ============================================================================
// LINE RASTERIZER
// ============================================================================

#[test]
fn line_gentle_slope_pixels() {
    let mut canvas = Canvas::new(5, 3).unwrap();
    draw_line(&mut canvas, 0, 0, 4, 2);

    assert_eq!(canvas.set_points(), vec![(0, 0), (1, 1), (2, 1), (3, 2), (4, 2)]);
}

#[test]
fn line_steep_slope_pixels() {
    let mut canvas = Canvas::new(3, 5).unwrap();
    draw_line(&mut canvas, 0, 0, 2, 4);

    // set_points is row-major, which for this line is also path order
    assert_eq!(canvas.set_points(), vec![(0, 0), (1, 1), (1, 2), (2, 3), (2, 4)]);
}

#[test]
fn line_tool_through_editor_is_order_independent() {
    let mut forward = Canvas::new(40, 30).unwrap();
    let mut backward = Canvas::new(40, 30).unwrap();

    Editor::new(&mut forward).drag(3, 25, 37, 2).unwrap();
    Editor::new(&mut backward).drag(37, 2, 3, 25).unwrap();

    assert_eq!(forward, backward);
    assert_eq!(forward.count_set(), 35);
}

// ============================================================================
// FILL TOOLS
// ============================================================================

/// A 20x12 canvas with a closed 8x5 room whose inside is 6x3.
fn room() -> Canvas {
    let mut canvas = Canvas::new(20, 12).unwrap();
    Rect::new(4, 3, 8, 5).draw(&mut canvas);
    canvas
}

#[test]
fn fills_stay_inside_enclosed_rectangle() {
    let interior = Rect::new(5, 4, 6, 3);

    for algorithm in FillAlgorithm::ALL {
        for seed_y in interior.y..interior.y + interior.height {
            for seed_x in interior.x..interior.x + interior.width {
                let mut canvas = room();
                let before: HashSet<_> = canvas.set_points().into_iter().collect();

                let stats = algorithm.run(&mut canvas, seed_x, seed_y);

                let added: Vec<_> = canvas
                    .set_points()
                    .into_iter()
                    .filter(|p| !before.contains(p))
                    .collect();
                assert_eq!(stats.filled, 18, "{algorithm:?} from ({seed_x}, {seed_y})");
                assert_eq!(added.len(), 18);
                assert!(added.iter().all(|&p| interior.contains(Point::from(p))));
            }
        }
    }
}

#[test]
fn fill_tools_idempotent_through_editor() {
    for kind in [ToolKind::IterativeFill, ToolKind::RecursiveFill] {
        let mut canvas = room();
        let mut editor = Editor::with_tools(&mut canvas, kind, RecursionMode::Native);

        editor.click(0, 0).unwrap();
        let once = editor.canvas().clone();
        editor.click(0, 0).unwrap();

        assert_eq!(editor.canvas(), &once, "{kind}");
        assert_eq!(once.count_set(), 240 - 18, "{kind}");
    }
}

#[test]
fn iterative_fill_enqueues_each_pixel_once_on_open_canvas() {
    let mut canvas = Canvas::new(48, 48).unwrap();
    let mut counts: HashMap<(i32, i32), u32> = HashMap::new();

    flood_fill_iterative_with(&mut canvas, 20, 31, |x, y| {
        *counts.entry((x, y)).or_default() += 1;
    });

    assert_eq!(counts.len(), 48 * 48);
    let max = counts.values().copied().max().unwrap();
    assert_eq!(max, 1, "a pixel was enqueued {max} times");
}

#[test]
fn recursive_fill_handles_a_long_corridor() {
    // A serpentine corridor makes the recursion as deep as the region is large
    let rows: Vec<String> = (0..31)
        .map(|y| match y % 4 {
            1 => format!("{}.", "#".repeat(31)),
            3 => format!(".{}", "#".repeat(31)),
            _ => ".".repeat(32),
        })
        .collect();
    let canvas = Canvas::from_rows(&rows).unwrap();

    let mut recursive = canvas.clone();
    let mut iterative = canvas.clone();
    let deep = flood_fill_recursive(&mut recursive, 0, 0);
    flood_fill_iterative(&mut iterative, 0, 0);

    assert_eq!(recursive, iterative);
    assert_eq!(recursive.count_set(), 32 * 31);
    // 16 open rows of 32 plus 15 single-cell links, all on one path
    assert_eq!(deep.peak_pending, 16 * 32 + 15);
}

// ============================================================================
// PROPERTY TESTS
// ============================================================================

/// Random walls drawn as lines, plus a seed.
fn arb_line_scene() -> impl Strategy<Value = (Vec<(i32, i32, i32, i32)>, i32, i32)> {
    (
        prop::collection::vec((0i32..32, 0i32..24, 0i32..32, 0i32..24), 0..8),
        0i32..32,
        0i32..24,
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Every fill variant agrees on regions carved out by lines.
    #[test]
    fn prop_fill_variants_agree_on_line_drawings((walls, sx, sy) in arb_line_scene()) {
        let mut base = Canvas::new(32, 24).unwrap();
        for (x0, y0, x1, y1) in walls {
            draw_line(&mut base, x0, y0, x1, y1);
        }

        let results: Vec<Canvas> = FillAlgorithm::ALL
            .into_iter()
            .map(|algorithm| {
                let mut canvas = base.clone();
                algorithm.run(&mut canvas, sx, sy);
                canvas
            })
            .collect();

        prop_assert_eq!(&results[0], &results[1]);
        prop_assert_eq!(&results[0], &results[2]);
    }

    /// A line always sets max(|dx|, |dy|) + 1 pixels on a large enough canvas.
    #[test]
    fn prop_line_pixel_count(x0 in 0i32..64, y0 in 0i32..64, x1 in 0i32..64, y1 in 0i32..64) {
        let mut canvas = Canvas::new(64, 64).unwrap();
        draw_line(&mut canvas, x0, y0, x1, y1);

        let expected = (x1 - x0).abs().max((y1 - y0).abs()) as usize + 1;
        prop_assert_eq!(canvas.count_set(), expected);
        prop_assert_eq!(canvas.count_set(), Line::from_coords(x0, y0, x1, y1).pixel_len());
    }
}
