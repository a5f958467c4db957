use super::*;

#[test]
fn scalar_and_point_hit_endpoints() {
    assert_eq!(<f64 as Lerp>::lerp(&2.0, &6.0, 0.0), 2.0);
    assert_eq!(<f64 as Lerp>::lerp(&2.0, &6.0, 0.5), 4.0);
    assert_eq!(
        <Point as Lerp>::lerp(&Point::new(0.0, 0.0), &Point::new(10.0, -4.0), 0.25),
        Point::new(2.5, -1.0)
    );
}

#[test]
fn rect_interpolates_each_edge() {
    let a = Rect::new(0.0, 0.0, 10.0, 10.0);
    let b = Rect::new(10.0, 2.0, 30.0, 6.0);
    assert_eq!(Rect::lerp(&a, &b, 0.5), Rect::new(5.0, 1.0, 20.0, 8.0));
}

#[test]
fn color_fades_through_alpha() {
    let a = Rgba8::new(0, 0, 255, 0);
    let b = Rgba8::new(0, 0, 255, 255);
    assert_eq!(Rgba8::lerp(&a, &b, 0.5), Rgba8::new(0, 0, 255, 128));
    assert_eq!(Rgba8::lerp(&a, &b, 1.0), b);
}
