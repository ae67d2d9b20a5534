//! Vertex types for 2D line rendering

use bytemuck::{Pod, Zeroable};
use glam::Vec2;

/// Line-list vertex with position and color, laid out for direct upload
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct LineVertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl LineVertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }

    #[inline]
    pub fn at(p: Vec2, color: [f32; 4]) -> Self {
        Self::new(p.x, p.y, color)
    }
}

/// Colors for game elements
pub mod colors {
    pub const WHITE: [f32; 4] = [1.0, 1.0, 1.0, 1.0];

    /// White with the given opacity
    #[inline]
    pub fn faded(alpha: f32) -> [f32; 4] {
        [1.0, 1.0, 1.0, alpha.clamp(0.0, 1.0)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_layout() {
        assert_eq!(std::mem::size_of::<LineVertex>(), 24);
        let verts = [LineVertex::new(1.0, 2.0, colors::WHITE); 2];
        let bytes: &[u8] = bytemuck::cast_slice(&verts);
        assert_eq!(bytes.len(), 48);
    }

    #[test]
    fn test_faded_clamps() {
        assert_eq!(colors::faded(1.5)[3], 1.0);
        assert_eq!(colors::faded(-0.2)[3], 0.0);
    }
}
