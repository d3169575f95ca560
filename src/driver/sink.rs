use crate::scene::SceneState;
use bytemuck::{Pod, Zeroable};

/// Receives each scene once its orientation has been updated for the frame.
///
/// This is the rendering boundary: an implementation copies the pose into its
/// own mesh representation and draws.
pub trait FrameSink {
    /// Presents `scene` for the current frame.
    fn present(&mut self, scene: &SceneState);
}

/// Model matrix of a scene, laid out for a GPU uniform buffer.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct ModelUniform {
    /// Column-major 4x4 model matrix.
    pub model: [[f32; 4]; 4],
}

impl ModelUniform {
    /// Snapshot of the scene's current model matrix.
    pub fn from_scene(scene: &SceneState) -> Self {
        Self {
            model: scene.model_matrix().to_cols_array_2d(),
        }
    }

    /// Raw bytes, ready for upload.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }
}

/// Keeps the latest [`ModelUniform`] of every presented scene, by label.
#[derive(Clone, Debug, Default)]
pub struct UniformSink {
    uniforms: Vec<(String, ModelUniform)>,
}

impl UniformSink {
    /// An empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// The latest uniform presented for `label`.
    pub fn get(&self, label: &str) -> Option<&ModelUniform> {
        self.uniforms
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, u)| u)
    }

    /// Number of distinct scenes presented so far.
    pub fn len(&self) -> usize {
        self.uniforms.len()
    }

    /// Whether nothing was presented yet.
    pub fn is_empty(&self) -> bool {
        self.uniforms.is_empty()
    }
}

impl FrameSink for UniformSink {
    fn present(&mut self, scene: &SceneState) {
        let uniform = ModelUniform::from_scene(scene);
        match self.uniforms.iter_mut().find(|(l, _)| l == scene.label()) {
            Some((_, u)) => *u = uniform,
            None => self.uniforms.push((scene.label().to_string(), uniform)),
        }
    }
}
