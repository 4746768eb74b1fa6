use crate::constants::{TEXT_PITCH_AMPLITUDE, TEXT_PITCH_FREQUENCY, TEXT_YAW_RATE};
use glam::{EulerRot, Mat4, Quat, Vec3};

/// Idle rotation of the text entry after `elapsed_sec` seconds, as
/// `(pitch, yaw)` in radians.
#[inline]
pub fn text_idle_rotation(elapsed_sec: f32) -> (f32, f32) {
    let yaw = elapsed_sec * TEXT_YAW_RATE;
    let pitch = (elapsed_sec * TEXT_PITCH_FREQUENCY).sin() * TEXT_PITCH_AMPLITUDE;
    (pitch, yaw)
}

/// Translation * rotation (Euler XYZ) * uniform scale.
#[inline]
pub fn trs(translation: Vec3, euler_xyz: Vec3, scale: f32) -> Mat4 {
    let rotation = Quat::from_euler(EulerRot::XYZ, euler_xyz.x, euler_xyz.y, euler_xyz.z);
    Mat4::from_scale_rotation_translation(Vec3::splat(scale), rotation, translation)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_rest() {
        assert_eq!(text_idle_rotation(0.0), (0.0, 0.0));
    }

    #[test]
    fn yaw_is_linear_and_pitch_is_bounded() {
        for i in 0..200 {
            let t = i as f32 * 0.37;
            let (pitch, yaw) = text_idle_rotation(t);
            assert!((yaw - 0.5 * t).abs() < 1e-4);
            assert!(pitch.abs() <= TEXT_PITCH_AMPLITUDE + 1e-6);
        }
    }

    #[test]
    fn trs_applies_scale_then_translation() {
        let m = trs(Vec3::new(1.0, 2.0, 3.0), Vec3::ZERO, 2.0);
        let p = m.transform_point3(Vec3::new(1.0, 0.0, 0.0));
        assert!((p - Vec3::new(3.0, 2.0, 3.0)).length() < 1e-6);
    }
}
