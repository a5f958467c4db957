use super::*;
use crate::{
    animation::{ease::Ease, transition::requests_for},
    config::model::Configuration,
    foundation::core::{Container, HostEnv},
    model::shapes::compute_shape_set,
};

const RED: Rgba8 = Rgba8::new(255, 0, 0, 255);

fn backend() -> CpuBackend {
    CpuBackend::new(RenderSettings {
        width: 60,
        height: 20,
        clear_rgba: Some([255, 255, 255, 255]),
    })
    .unwrap()
}

fn shapes(selected: usize) -> ShapeSet {
    let mut c = Configuration::default()
        .with_steps(3)
        .with_selected_step(selected);
    c.indicator_size = 10.0;
    compute_shape_set(&c, HostEnv::new(Container::new(60.0, 20.0), RED))
}

#[test]
fn oversized_surface_is_rejected() {
    let err = CpuBackend::new(RenderSettings {
        width: 70_000,
        height: 10,
        clear_rgba: None,
    })
    .err()
    .unwrap();
    assert!(err.to_string().contains("exceeds u16"));
}

#[test]
fn renders_dots_over_clear_color() {
    let mut b = backend();
    b.draw(&shapes(0)).unwrap();
    let frame = b.render_frame().unwrap();
    assert_eq!((frame.width, frame.height), (60, 20));
    assert!(!frame.premultiplied);

    assert_eq!(frame.pixel(5, 10), Some([255, 0, 0, 255]));
    assert_eq!(frame.pixel(17, 10), Some([255, 255, 255, 255]));

    let faint = frame.pixel(30, 10).unwrap();
    assert_eq!(faint[0], 255);
    assert!(faint[1] < 255 && faint[1] > 0);
}

#[test]
fn transitions_play_back_on_the_backend_clock() {
    let mut b = backend();
    b.draw(&shapes(0)).unwrap();
    for req in requests_for(&shapes(2), 0.3, Ease::EASE_OUT) {
        b.animate(&req).unwrap();
    }
    assert!(b.is_animating());

    let start = b.render_frame().unwrap();
    assert_eq!(start.pixel(55, 15), Some([255, 255, 255, 255]));

    assert!(!b.advance(0.3));
    let end = b.render_frame().unwrap();
    assert_eq!(end.pixel(55, 15), Some([255, 0, 0, 255]));
}

#[test]
fn unknown_slots_are_ignored() {
    let mut b = backend();
    b.draw(&shapes(0)).unwrap();
    let mut reqs = requests_for(&shapes(0), 0.3, Ease::Linear);
    for r in &mut reqs {
        r.slot = crate::model::shapes::ShapeSlot::Line(0);
    }
    for r in &reqs {
        b.animate(r).unwrap();
    }
    assert!(!b.is_animating());
}
