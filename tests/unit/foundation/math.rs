use super::*;

const EPS: f64 = 1e-12;

fn approx(a: Vec3, b: Vec3) -> bool {
    (a.x - b.x).abs() < EPS && (a.y - b.y).abs() < EPS && (a.z - b.z).abs() < EPS
}

#[test]
fn quarter_turns_move_forward_to_expected_axes() {
    let (s, c) = std::f64::consts::FRAC_PI_2.sin_cos();
    assert!(approx(Vec3::FORWARD.rotate_y(s, c), Vec3::new(1.0, 0.0, 0.0)));
    assert!(approx(Vec3::FORWARD.rotate_x(s, c), Vec3::new(0.0, -1.0, 0.0)));
    assert!(approx(Vec3::FORWARD.rotate_x(-s, c), Vec3::new(0.0, 1.0, 0.0)));
}

#[test]
fn rotations_preserve_length() {
    let v = Vec3::new(0.3, -0.7, 1.0);
    let (s, c) = 0.83_f64.sin_cos();
    assert!((v.rotate_x(s, c).rotate_y(s, c).length() - v.length()).abs() < EPS);
}

#[test]
fn wrap_stays_in_half_open_range() {
    assert_eq!(wrap(0.0, 4.0), 0.0);
    assert_eq!(wrap(4.0, 4.0), 0.0);
    assert!((wrap(-0.25, 4.0) - 3.75).abs() < EPS);
    assert!((wrap(9.5, 4.0) - 1.5).abs() < EPS);
    let tiny = wrap(-1e-18, 4.0);
    assert!((0.0..4.0).contains(&tiny));
}

#[test]
fn round_to_u8_saturates() {
    assert_eq!(round_to_u8(-3.0), 0);
    assert_eq!(round_to_u8(127.5), 128);
    assert_eq!(round_to_u8(300.0), 255);
    assert_eq!(lerp(10.0, 20.0, 0.25), 12.5);
}
