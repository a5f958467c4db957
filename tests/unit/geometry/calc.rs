use super::*;
use crate::foundation::core::Container;

const RED: Rgba8 = Rgba8::new(255, 0, 0, 255);

fn env(width: f64, height: f64) -> HostEnv {
    HostEnv::new(Container::new(width, height), RED)
}

fn cfg(steps: usize, selected: usize) -> Configuration {
    let mut c = Configuration::default()
        .with_steps(steps)
        .with_selected_step(selected);
    c.indicator_size = 10.0;
    c.zoom_selected = false;
    c
}

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn centers_are_increasing_and_evenly_spaced() {
    let c = cfg(5, 0);
    let g = Geometry::new(&c, env(200.0, 20.0));
    assert!(approx(g.gap(), 37.5));

    let xs: Vec<f64> = (0..5).map(|i| g.indicator_center(i).x).collect();
    assert!(approx(xs[0], 5.0));
    for w in xs.windows(2) {
        assert!(w[1] > w[0]);
        assert!(approx(w[1] - w[0], 47.5));
    }
    for i in 0..5 {
        assert!(approx(g.indicator_center(i).y, 10.0));
    }
}

#[test]
fn last_dot_touches_the_right_edge() {
    let c = cfg(4, 0);
    let g = Geometry::new(&c, env(120.0, 20.0));
    assert!(approx(g.indicator_rect(3).x1, 120.0));
    assert!(approx(g.indicator_rect(0).x0, 0.0));
}

#[test]
fn out_of_range_center_is_origin() {
    let c = cfg(3, 0);
    let g = Geometry::new(&c, env(100.0, 20.0));
    assert_eq!(g.indicator_center(3), Point::ORIGIN);
}

#[test]
fn single_step_is_a_centered_dot() {
    let c = cfg(1, 0);
    let g = Geometry::new(&c, env(100.0, 20.0));
    assert_eq!(g.gap(), 0.0);
    assert_eq!(g.indicator_center(0), Point::new(50.0, 10.0));
    assert!(approx(g.indicator_diameter(0), 10.0));
}

#[test]
fn continuous_sizes_follow_stepped_state() {
    let c = cfg(5, 2);
    let g = Geometry::new(&c, env(200.0, 20.0));
    for i in 0..=2 {
        assert!(approx(g.indicator_diameter(i), 10.0), "step {i}");
    }
    for i in 3..5 {
        assert!(approx(g.indicator_diameter(i), 6.0), "step {i}");
    }
}

#[test]
fn zoom_selected_boosts_only_the_selection_in_continuous_mode() {
    let mut c = cfg(5, 2);
    c.zoom_selected = true;
    let g = Geometry::new(&c, env(200.0, 20.0));
    assert!(approx(g.indicator_diameter(2), 14.0));
    assert!(approx(g.indicator_diameter(1), 10.0));

    c.continuous_steps = false;
    let g = Geometry::new(&c, env(200.0, 20.0));
    assert!(approx(g.indicator_diameter(2), 10.0));
    assert!(approx(g.indicator_diameter(1), 6.0));
}

#[test]
fn zoom_effect_falls_off_with_distance() {
    let mut c = cfg(7, 0);
    c.zoom_effect = true;
    c.zoom_selected = true;
    let g = Geometry::new(&c, env(300.0, 20.0));
    let coeff = (1.0 - 0.6) / 3.0;

    let mut prev = f64::INFINITY;
    for i in 0..7 {
        let expected = 10.0 * (1.0 - coeff * (i as f64).min(3.0));
        let got = g.indicator_diameter(i);
        assert!(approx(got, expected), "step {i}: {got} vs {expected}");
        assert!(got <= prev);
        prev = got;
    }
    assert!(approx(g.indicator_diameter(0), 10.0));
    assert!(approx(g.indicator_diameter(6), 6.0));
}

#[test]
fn discrete_mode_highlights_only_the_selection() {
    let mut c = cfg(4, 2);
    c.continuous_steps = false;
    let g = Geometry::new(&c, env(100.0, 20.0));
    assert!(!g.is_stepped(0));
    assert!(!g.is_stepped(1));
    assert!(g.is_stepped(2));
    assert!(!g.is_stepped(3));
}

#[test]
fn fill_unstepped_scenario() {
    let c = cfg(3, 0);
    let g = Geometry::new(&c, env(100.0, 20.0));

    assert_eq!(g.indicator_fill(0), RED);
    assert!(approx(g.indicator_diameter(0), 10.0));
    for i in 1..3 {
        assert_eq!(g.indicator_fill(i), RED.with_alpha(0.3));
        assert_eq!(g.indicator_fill(i).a, 77);
        assert!(approx(g.indicator_diameter(i), 6.0));
        assert_eq!(g.indicator_stroke_width(i), 0.0);
    }
}

#[test]
fn unfilled_steps_are_outlined() {
    let mut c = cfg(3, 0);
    c.fill_unstepped = false;
    c.step_width = 2.0;
    let g = Geometry::new(&c, env(100.0, 20.0));

    assert_eq!(g.indicator_stroke_width(0), 0.0);
    assert!(approx(g.indicator_stroke_width(1), 1.2));
    assert_eq!(g.indicator_fill(1), Rgba8::TRANSPARENT);
    assert_eq!(g.indicator_stroke_color(), RED.with_alpha(0.3));
}

#[test]
fn indicator_size_is_clamped_to_container_height() {
    let mut c = cfg(2, 0);
    c.indicator_size = 50.0;
    let g = Geometry::new(&c, env(100.0, 8.0));
    assert!(approx(g.indicator_diameter(0), 8.0));
}

#[test]
fn continuous_track_segments() {
    let mut c = cfg(3, 1);
    c.line_width = 2.0;
    let g = Geometry::new(&c, env(100.0, 20.0));

    let r0 = g.line_rect(0);
    assert!(approx(r0.x0, 9.8));
    assert!(approx(r0.x1, 45.4));
    assert!(approx(r0.y0, 9.0));
    assert!(approx(r0.y1, 11.0));
    assert_eq!(g.line_fill(0), RED);

    let r1 = g.line_rect(1);
    assert!(approx(r1.height(), 1.2));
    assert!(approx(r1.x0, 54.88));
    assert!(approx(r1.x1, 92.24));
    assert!(approx(r1.y0, 9.4));
    assert_eq!(g.line_fill(1), RED.with_alpha(0.3));
}

#[test]
fn line_inset_trims_both_ends() {
    let mut c = cfg(3, 1);
    c.line_width = 2.0;
    let plain = Geometry::new(&c, env(100.0, 20.0)).line_rect(0);
    c.line_inset = 4.0;
    let inset = Geometry::new(&c, env(100.0, 20.0)).line_rect(0);
    assert!(approx(inset.x0 - plain.x0, 2.0));
    assert!(approx(plain.width() - inset.width(), 4.0));
}

#[test]
fn discrete_track_is_uniform() {
    let mut c = cfg(4, 1);
    c.continuous_steps = false;
    c.line_width = 2.0;
    let g = Geometry::new(&c, env(100.0, 20.0));
    for gap in 0..3 {
        assert!(approx(g.line_height(gap), 2.0));
        assert_eq!(g.line_fill(gap), RED.with_alpha(0.3));
    }
}

#[test]
fn geometry_is_deterministic() {
    let c = cfg(6, 3);
    let a = Geometry::new(&c, env(180.0, 24.0));
    let b = Geometry::new(&c, env(180.0, 24.0));
    for i in 0..6 {
        assert_eq!(a.indicator_rect(i), b.indicator_rect(i));
        assert_eq!(a.indicator_fill(i), b.indicator_fill(i));
    }
}

#[test]
fn zoom_effect_is_symmetric_around_selection() {
    let mut c = cfg(7, 3);
    c.zoom_effect = true;
    let g = Geometry::new(&c, env(300.0, 20.0));
    let sizes: Vec<f64> = (0..7).map(|i| g.indicator_diameter(i)).collect();

    for (got, expected) in sizes.iter().zip([6.0, 7.0 + 1.0 / 3.0, 8.0 + 2.0 / 3.0, 10.0]) {
        assert!(approx(*got, expected), "{got} vs {expected}");
    }
    for i in 0..3 {
        assert!(approx(sizes[i], sizes[6 - i]), "step {i} vs {}", 6 - i);
        assert!(sizes[i] < sizes[i + 1]);
    }
    assert!(sizes.iter().all(|&s| s <= sizes[3]));
}
