//! Sweep of container and content sizes through both fit modes.
//!
//! Each placement is checked against the properties a letterboxed meme
//! canvas depends on: the image keeps its aspect ratio, one axis is filled
//! exactly, the other is centered, and (for `Contain`, or any square canvas)
//! nothing spills outside. Placements are also rasterized onto a coarse grid
//! so that off-center bars show up as asymmetric fill counts.

use memefit::*;

const SIZES: &[f64] = &[1.0, 3.0, 17.0, 50.0, 99.5, 100.0, 200.0, 333.0, 400.0, 1024.0, 4000.0];

fn rel_close(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-9 * a.abs().max(b.abs()).max(1.0)
}

fn each_pair(mut f: impl FnMut(Dimensions, Dimensions)) {
    for &cw in SIZES {
        for &ch in SIZES {
            for &w in SIZES {
                for &h in SIZES {
                    f(Dimensions::new(cw, ch), Dimensions::new(w, h));
                }
            }
        }
    }
}

// ---- Rasterization ----

/// Count canvas cells covered by the placement, per side of the center line.
///
/// Returns (left, right, top, bottom) counts of uncovered cells on a
/// `cells × cells` grid sampled at cell centers.
fn bar_cells(container: Dimensions, p: Placement, cells: u32) -> (u32, u32, u32, u32) {
    let (mut left, mut right, mut top, mut bottom) = (0, 0, 0, 0);
    for j in 0..cells {
        for i in 0..cells {
            let x = (i as f64 + 0.5) * container.width / cells as f64;
            let y = (j as f64 + 0.5) * container.height / cells as f64;
            let covered = x >= p.start_x && x < p.right() && y >= p.start_y && y < p.bottom();
            if covered {
                continue;
            }
            if x < p.start_x {
                left += 1;
            } else if x >= p.right() {
                right += 1;
            }
            if y < p.start_y {
                top += 1;
            } else if y >= p.bottom() {
                bottom += 1;
            }
        }
    }
    (left, right, top, bottom)
}

// ── Shared properties ───────────────────────────────────────────────────

#[test]
fn aspect_ratio_preserved_in_both_modes() {
    for mode in [FitMode::Classic, FitMode::Contain] {
        let fitter = Fit::new(mode);
        each_pair(|container, content| {
            let p = fitter.compute(container, content).unwrap();
            assert!(
                rel_close(p.aspect_ratio(), content.aspect_ratio()),
                "{mode:?} {container:?} {content:?} -> {p:?}"
            );
        });
    }
}

#[test]
fn one_axis_filled_other_centered() {
    for mode in [FitMode::Classic, FitMode::Contain] {
        let fitter = Fit::new(mode);
        each_pair(|container, content| {
            let p = fitter.compute(container, content).unwrap();
            let fills_width = p.width == container.width && p.start_x == 0.0;
            let fills_height = p.height == container.height && p.start_y == 0.0;
            assert!(
                fills_width || fills_height,
                "{mode:?} {container:?} {content:?} -> {p:?}"
            );
            if fills_width {
                assert!(rel_close(p.start_y, (container.height - p.height) / 2.0));
            } else {
                assert!(rel_close(p.start_x, (container.width - p.width) / 2.0));
            }
        });
    }
}

// ── Contain ─────────────────────────────────────────────────────────────

#[test]
fn contain_never_spills() {
    let fitter = Fit::new(FitMode::Contain);
    each_pair(|container, content| {
        let p = fitter.compute(container, content).unwrap();
        assert!(p.is_within(container), "{container:?} {content:?} -> {p:?}");
        assert_eq!(p.overflow(container), (0.0, 0.0));
    });
}

#[test]
fn contain_is_idempotent() {
    let fitter = Fit::new(FitMode::Contain);
    each_pair(|container, content| {
        let first = fitter.compute(container, content).unwrap();
        let again = fitter
            .compute(container, Dimensions::new(first.width, first.height))
            .unwrap();
        assert!(rel_close(first.width, again.width));
        assert!(rel_close(first.height, again.height));
        assert!(rel_close(first.start_x, again.start_x));
        assert!(rel_close(first.start_y, again.start_y));
    });
}

// ── Classic ─────────────────────────────────────────────────────────────

#[test]
fn classic_contains_on_square_canvas() {
    for &side in SIZES {
        let container = Dimensions::new(side, side);
        for &w in SIZES {
            for &h in SIZES {
                let p = fit(side, side, w, h).unwrap();
                assert!(p.is_within(container), "{side} {w}x{h} -> {p:?}");
            }
        }
    }
}

#[test]
fn classic_matches_contain_on_square_canvas() {
    for &side in SIZES {
        let container = Dimensions::new(side, side);
        for &w in SIZES {
            for &h in SIZES {
                let content = Dimensions::new(w, h);
                let classic = Fit::new(FitMode::Classic).compute(container, content).unwrap();
                let contain = Fit::new(FitMode::Contain).compute(container, content).unwrap();
                assert!(rel_close(classic.width, contain.width));
                assert!(rel_close(classic.height, contain.height));
            }
        }
    }
}

#[test]
fn classic_spill_is_reported() {
    // Square content on a wide canvas fills the width and spills vertically.
    let container = Dimensions::new(400.0, 200.0);
    let p = fit(400.0, 200.0, 50.0, 50.0).unwrap();
    assert_eq!(p, Placement::new(400.0, 400.0, 0.0, -100.0));
    assert!(!p.is_within(container));
    assert_eq!(p.overflow(container), (0.0, 200.0));
}

// ── Rasterized centering ────────────────────────────────────────────────

#[test]
fn bars_are_symmetric() {
    let container = Dimensions::new(400.0, 400.0);
    for (w, h) in [(100.0, 200.0), (800.0, 600.0), (1000.0, 500.0), (300.0, 900.0)] {
        let p = fit(400.0, 400.0, w, h).unwrap();
        let (left, right, top, bottom) = bar_cells(container, p, 40);
        assert_eq!(left, right, "{w}x{h} -> {p:?}");
        assert_eq!(top, bottom, "{w}x{h} -> {p:?}");
        // Bars only ever appear on one axis.
        assert!(left == 0 || top == 0);
    }
}

#[test]
fn square_content_has_no_bars() {
    let container = Dimensions::new(400.0, 400.0);
    let p = fit(400.0, 400.0, 64.0, 64.0).unwrap();
    assert_eq!(bar_cells(container, p, 40), (0, 0, 0, 0));
}

// ── Errors ──────────────────────────────────────────────────────────────

#[test]
fn non_positive_inputs_rejected() {
    for bad in [0.0, -1.0, f64::NAN, f64::INFINITY] {
        assert!(fit(bad, 400.0, 10.0, 10.0).is_err());
        assert!(fit(400.0, bad, 10.0, 10.0).is_err());
        assert!(fit(400.0, 400.0, bad, 10.0).is_err());
        assert!(fit(400.0, 400.0, 10.0, bad).is_err());
    }
}
