use super::*;

#[test]
fn container_floors_bad_extents() {
    let c = Container::new(-4.0, f64::NAN);
    assert_eq!(c.width, 0.0);
    assert_eq!(c.height, 0.0);
    assert_eq!(Container::new(100.0, 20.0).mid_y(), 10.0);
}

#[test]
fn with_alpha_replaces_rather_than_multiplies() {
    let half = Rgba8::new(10, 20, 30, 128);
    assert_eq!(half.with_alpha(1.0).a, 255);
    assert_eq!(half.with_alpha(0.3).a, 77);
    assert_eq!(half.with_alpha(2.0).a, 255);
    assert_eq!(half.with_alpha(-1.0).a, 0);
    assert_eq!(half.with_alpha(0.3).r, 10);
}

#[test]
fn parse_hex_accepts_short_long_and_alpha_forms() {
    assert_eq!(
        Rgba8::parse_hex("#f0a").unwrap(),
        Rgba8::new(255, 0, 170, 255)
    );
    assert_eq!(
        Rgba8::parse_hex("ff3366").unwrap(),
        Rgba8::new(255, 51, 102, 255)
    );
    assert_eq!(
        Rgba8::parse_hex("#ff336680").unwrap(),
        Rgba8::new(255, 51, 102, 128)
    );
}

#[test]
fn parse_hex_rejects_garbage() {
    assert!(Rgba8::parse_hex("#12").is_err());
    assert!(Rgba8::parse_hex("#gg0000").is_err());
    assert!(Rgba8::parse_hex("").is_err());
}

#[test]
fn premul_scales_channels_by_alpha() {
    assert_eq!(Rgba8::new(255, 255, 255, 0).to_premul(), [0, 0, 0, 0]);
    assert_eq!(Rgba8::new(200, 100, 0, 255).to_premul(), [200, 100, 0, 255]);
    assert_eq!(Rgba8::new(255, 0, 0, 128).to_premul(), [128, 0, 0, 128]);
}
