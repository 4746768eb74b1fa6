//! Orbit camera: spherical coordinates around a target point.
//!
//! Azimuth `theta` is measured around +Y from +Z, polar `phi` from +Y.

use crate::constants::*;
use glam::{Mat4, Vec3};
use std::f32::consts::{PI, TAU};

/// Right-handed perspective camera.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}

#[derive(Clone, Debug)]
pub struct OrbitCamera {
    pub target: Vec3,
    pub radius: f32,
    pub theta: f32,
    pub phi: f32,
    pub auto_rotate: bool,
    pub auto_rotate_speed: f32,
    pub fovy_radians: f32,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self::looking_from(camera_start_vec3(), Vec3::ZERO)
    }
}

impl OrbitCamera {
    pub fn looking_from(eye: Vec3, target: Vec3) -> Self {
        let offset = eye - target;
        let radius = offset.length().max(ORBIT_MIN_DISTANCE);
        let theta = offset.x.atan2(offset.z);
        let phi = (offset.y / radius).clamp(-1.0, 1.0).acos();
        Self {
            target,
            radius,
            theta,
            phi,
            auto_rotate: true,
            auto_rotate_speed: ORBIT_AUTO_ROTATE_SPEED,
            fovy_radians: CAMERA_FOV_DEG.to_radians(),
        }
    }

    pub fn eye(&self) -> Vec3 {
        let sin_phi = self.phi.sin();
        self.target
            + self.radius
                * Vec3::new(
                    sin_phi * self.theta.sin(),
                    self.phi.cos(),
                    sin_phi * self.theta.cos(),
                )
    }

    pub fn camera(&self, aspect: f32) -> Camera {
        Camera {
            eye: self.eye(),
            target: self.target,
            up: Vec3::Y,
            aspect: aspect.max(1e-3),
            fovy_radians: self.fovy_radians,
            znear: CAMERA_NEAR,
            zfar: CAMERA_FAR,
        }
    }

    /// Advance auto-rotation. A speed of 1.0 is one full turn per minute.
    pub fn update(&mut self, dt_sec: f32) {
        if self.auto_rotate && dt_sec > 0.0 {
            self.theta -= TAU / 60.0 * self.auto_rotate_speed * dt_sec;
            self.theta = self.theta.rem_euclid(TAU);
        }
    }

    /// Rotate by a pointer drag of `(dx, dy)` pixels on a viewport
    /// `viewport_height` pixels tall.
    pub fn rotate_by_pixels(&mut self, dx: f32, dy: f32, viewport_height: f32) {
        let h = viewport_height.max(1.0);
        self.theta -= TAU * dx / h * ORBIT_ROTATE_SPEED;
        self.phi -= TAU * dy / h * ORBIT_ROTATE_SPEED;
        self.phi = self.phi.clamp(ORBIT_POLAR_EPSILON, PI - ORBIT_POLAR_EPSILON);
    }

    /// Move the target so the scene follows the pointer.
    pub fn pan_by_pixels(&mut self, dx: f32, dy: f32, viewport_height: f32) {
        let h = viewport_height.max(1.0);
        let world_per_px = 2.0 * self.radius * (self.fovy_radians * 0.5).tan() / h;
        let forward = (self.target - self.eye()).normalize_or_zero();
        let right = forward.cross(Vec3::Y).normalize_or_zero();
        let up = right.cross(forward).normalize_or_zero();
        self.target += (-dx * right + dy * up) * world_per_px;
    }

    /// Wheel zoom: positive `notches` move the camera away.
    pub fn zoom(&mut self, notches: f32) {
        let factor = ORBIT_ZOOM_STEP.powf(-notches);
        self.radius = (self.radius * factor).clamp(ORBIT_MIN_DISTANCE, ORBIT_MAX_DISTANCE);
    }
}
