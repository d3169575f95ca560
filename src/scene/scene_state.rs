use glamx::{Mat3, Mat4, Pose3, Quat, Vec3};
use std::fmt;

/// Everything a scene owns between two frames.
///
/// One `SceneState` exists per displayed scene. Its driver passes it by
/// mutable reference to the scene's controller hooks.
#[derive(Clone)]
pub struct SceneState {
    label: String,
    pose: Pose3,
    frame: u64,
}

impl SceneState {
    /// A scene named `label` whose mesh sits at the origin, unrotated.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            pose: Pose3::IDENTITY,
            frame: 0,
        }
    }

    /// Moves the mesh to `position`.
    pub fn with_position(mut self, position: Vec3) -> Self {
        self.pose.translation = position;
        self
    }

    /// The scene name, typically the id of the canvas it renders to.
    #[inline]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The mesh pose.
    #[inline]
    pub fn pose(&self) -> Pose3 {
        self.pose
    }

    /// The mesh orientation.
    #[inline]
    pub fn rotation(&self) -> Quat {
        self.pose.rotation
    }

    /// The mesh position.
    #[inline]
    pub fn position(&self) -> Vec3 {
        self.pose.translation
    }

    /// Replaces the mesh orientation.
    #[inline]
    pub fn set_rotation(&mut self, rotation: Quat) {
        self.pose.rotation = rotation;
    }

    /// Replaces the mesh orientation with the one encoded by a rotation matrix.
    #[inline]
    pub fn set_rotation_matrix(&mut self, rotation: Mat3) {
        self.pose.rotation = Quat::from_mat3(&rotation);
    }

    /// Replaces the mesh position.
    #[inline]
    pub fn set_position(&mut self, position: Vec3) {
        self.pose.translation = position;
    }

    /// The model matrix to hand to a renderer.
    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_rotation_translation(self.pose.rotation, self.pose.translation)
    }

    /// Number of frames this scene has been advanced by.
    #[inline]
    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub(crate) fn advance_frame(&mut self) {
        self.frame += 1;
    }
}

impl fmt::Debug for SceneState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SceneState")
            .field("label", &self.label)
            .field("rotation", &self.pose.rotation)
            .field("translation", &self.pose.translation)
            .field("frame", &self.frame)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::{euler_matrix, Degrees};

    #[test]
    fn starts_at_identity() {
        let s = SceneState::new("three1");
        assert_eq!(s.label(), "three1");
        assert_eq!(s.rotation(), Quat::IDENTITY);
        assert_eq!(s.position(), Vec3::ZERO);
        assert_eq!(s.frame(), 0);
        assert!(s.model_matrix().abs_diff_eq(Mat4::IDENTITY, 1.0e-7));
    }

    #[test]
    fn rotation_matrix_round_trips() {
        let mut s = SceneState::new("euler");
        let m = euler_matrix(Degrees(10.0), Degrees(20.0), Degrees(30.0));
        s.set_rotation_matrix(m);
        assert!(Mat3::from_quat(s.rotation()).abs_diff_eq(m, 1.0e-5));
    }

    #[test]
    fn model_matrix_places_the_mesh() {
        let mut s = SceneState::new("cube").with_position(Vec3::new(1.0, 2.0, 3.0));
        s.set_rotation(Quat::from_rotation_z(std::f32::consts::FRAC_PI_2));
        let p = s.model_matrix().transform_point3(Vec3::X);
        assert!(p.abs_diff_eq(Vec3::new(1.0, 3.0, 3.0), 1.0e-6));
    }
}
