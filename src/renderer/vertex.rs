//! Vertex types for textured 2D quads

use bytemuck::{Pod, Zeroable};

use super::Rect;
use crate::consts::{SCREEN_HEIGHT, SCREEN_WIDTH};

/// Vertices per sprite quad (two triangles)
pub const QUAD_VERTICES: usize = 6;

/// 2D vertex with clip-space position and texture coordinate
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct SpriteVertex {
    pub position: [f32; 2],
    pub uv: [f32; 2],
}

impl SpriteVertex {
    pub const fn new(x: f32, y: f32, u: f32, v: f32) -> Self {
        Self {
            position: [x, y],
            uv: [u, v],
        }
    }

    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<SpriteVertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x2,
                },
                wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 2]>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x2,
                },
            ],
        }
    }
}

/// Convert screen pixels (origin top-left, y down) to normalized device coordinates
pub fn screen_to_ndc(x: f64, y: f64) -> [f32; 2] {
    [
        (x / SCREEN_WIDTH as f64 * 2.0 - 1.0) as f32,
        (1.0 - y / SCREEN_HEIGHT as f64 * 2.0) as f32,
    ]
}

/// Build the two triangles covering `dest`, or the whole screen when `None`.
///
/// `rotation` is in degrees, clockwise on screen, about the rectangle's centre.
/// `mirror` flips the texture horizontally.
pub fn sprite_quad(dest: Option<Rect>, rotation: f64, mirror: bool) -> [SpriteVertex; QUAD_VERTICES] {
    let rect = dest.unwrap_or(Rect::new(0, 0, SCREEN_WIDTH, SCREEN_HEIGHT));
    let (x, y) = (rect.x as f64, rect.y as f64);
    let (w, h) = (rect.w as f64, rect.h as f64);
    let (cx, cy) = (x + w / 2.0, y + h / 2.0);
    let (sin, cos) = rotation.to_radians().sin_cos();

    let (u0, u1) = if mirror { (1.0, 0.0) } else { (0.0, 1.0) };
    let corners = [
        (x, y, u0, 0.0),
        (x + w, y, u1, 0.0),
        (x + w, y + h, u1, 1.0),
        (x, y + h, u0, 1.0),
    ];

    // With y pointing down this matrix turns clockwise on screen
    let verts = corners.map(|(px, py, u, v)| {
        let (dx, dy) = (px - cx, py - cy);
        let rx = cx + dx * cos - dy * sin;
        let ry = cy + dx * sin + dy * cos;
        let [nx, ny] = screen_to_ndc(rx, ry);
        SpriteVertex::new(nx, ny, u, v)
    });

    [verts[0], verts[1], verts[2], verts[0], verts[2], verts[3]]
}
