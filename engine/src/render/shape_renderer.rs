//! Shape Renderer
//!
//! Turns a recorded [`DrawList`] into triangles and draws them in a single
//! render pass. Lines become thin quads, rectangles become two triangles, and
//! the frame's clear command becomes the pass load colour. No depth testing,
//! no uniforms: vertices are converted to NDC on the CPU.

use glam::Vec2;

use super::color::Color;
use super::gpu_context::GpuContext;
use super::surface::{DrawCommand, DrawList, Rect};

/// WGSL source of the flat-colour shape pipeline.
pub const SHAPE_SHADER_SOURCE: &str = include_str!("../../../shaders/shapes.wgsl");

/// Line thickness in pixels.
pub const DEFAULT_LINE_WIDTH: f32 = 1.0;

const INITIAL_VERTEX_BUFFER_SIZE: u64 = 64 * 1024;
const INITIAL_INDEX_BUFFER_SIZE: u64 = 16 * 1024;

/// Vertex for shape rendering (NDC position, colour)
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ShapeVertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

static_assertions::assert_eq_size!(ShapeVertex, [u8; 24]);

/// Triangle mesh built from one frame's draw commands.
#[derive(Debug, Clone, Default)]
pub struct ShapeMesh {
    pub vertices: Vec<ShapeVertex>,
    pub indices: Vec<u32>,
    /// Colour of the last clear in the frame, if any
    pub clear_color: Option<Color>,
    width: f32,
    height: f32,
    linear_colors: bool,
}

impl ShapeMesh {
    /// Create an empty mesh for a `width` x `height` pixel target.
    ///
    /// `linear_colors` selects linear output for sRGB targets; otherwise
    /// colours are written sRGB-encoded as given.
    pub fn new(width: u32, height: u32, linear_colors: bool) -> Self {
        Self {
            vertices: Vec::new(),
            indices: Vec::new(),
            clear_color: None,
            width: width.max(1) as f32,
            height: height.max(1) as f32,
            linear_colors,
        }
    }

    /// Tessellate every command of a draw list.
    pub fn from_draw_list(
        list: &DrawList,
        width: u32,
        height: u32,
        line_width: f32,
        linear_colors: bool,
    ) -> Self {
        let mut mesh = Self::new(width, height, linear_colors);
        for command in list.commands() {
            match *command {
                DrawCommand::Clear(color) => {
                    mesh.vertices.clear();
                    mesh.indices.clear();
                    mesh.clear_color = Some(color);
                }
                DrawCommand::Line { from, to, color } => mesh.add_line(from, to, line_width, color),
                DrawCommand::FilledRect { rect, color } => mesh.add_rect(rect, color),
            }
        }
        mesh
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Add an axis-aligned filled rectangle.
    pub fn add_rect(&mut self, rect: Rect, color: Color) {
        let min = rect.min;
        let max = rect.max();
        self.add_quad(
            [min, Vec2::new(max.x, min.y), max, Vec2::new(min.x, max.y)],
            color,
        );
    }

    /// Add a line segment as a quad `thickness` pixels wide.
    pub fn add_line(&mut self, from: Vec2, to: Vec2, thickness: f32, color: Color) {
        let dir = (to - from).try_normalize().unwrap_or(Vec2::X);
        let normal = dir.perp() * (thickness * 0.5);
        self.add_quad([from + normal, to + normal, to - normal, from - normal], color);
    }

    fn add_quad(&mut self, corners: [Vec2; 4], color: Color) {
        let base = self.vertices.len() as u32;
        let color = if self.linear_colors {
            color.to_linear()
        } else {
            color.to_f32_array()
        };

        for corner in corners {
            self.vertices.push(ShapeVertex {
                position: Self::screen_to_ndc(corner, self.width, self.height),
                color,
            });
        }

        self.indices
            .extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }

    /// Convert screen coordinates (origin top-left, y down) to NDC.
    pub fn screen_to_ndc(p: Vec2, width: f32, height: f32) -> [f32; 2] {
        [(p.x / width) * 2.0 - 1.0, 1.0 - (p.y / height) * 2.0]
    }
}

/// Draws [`DrawList`]s to the window surface.
pub struct ShapeRenderer {
    pipeline: wgpu::RenderPipeline,
    vertex_buffer: wgpu::Buffer,
    vertex_capacity: u64,
    index_buffer: wgpu::Buffer,
    index_capacity: u64,
    line_width: f32,
}

impl ShapeRenderer {
    pub fn new(gpu: &GpuContext) -> Self {
        let shader = gpu
            .device
            .create_shader_module(wgpu::ShaderModuleDescriptor {
                label: Some("Shape Shader"),
                source: wgpu::ShaderSource::Wgsl(SHAPE_SHADER_SOURCE.into()),
            });

        let pipeline_layout = gpu
            .device
            .create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
                label: Some("Shape Pipeline Layout"),
                bind_group_layouts: &[],
                push_constant_ranges: &[],
            });

        let pipeline = gpu
            .device
            .create_render_pipeline(&wgpu::RenderPipelineDescriptor {
                label: Some("Shape Pipeline"),
                layout: Some(&pipeline_layout),
                vertex: wgpu::VertexState {
                    module: &shader,
                    entry_point: Some("vs_main"),
                    buffers: &[wgpu::VertexBufferLayout {
                        array_stride: std::mem::size_of::<ShapeVertex>() as u64,
                        step_mode: wgpu::VertexStepMode::Vertex,
                        attributes: &[
                            wgpu::VertexAttribute {
                                format: wgpu::VertexFormat::Float32x2,
                                offset: 0,
                                shader_location: 0,
                            },
                            wgpu::VertexAttribute {
                                format: wgpu::VertexFormat::Float32x4,
                                offset: 8,
                                shader_location: 1,
                            },
                        ],
                    }],
                    compilation_options: Default::default(),
                },
                fragment: Some(wgpu::FragmentState {
                    module: &shader,
                    entry_point: Some("fs_main"),
                    targets: &[Some(wgpu::ColorTargetState {
                        format: gpu.format(),
                        blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                        write_mask: wgpu::ColorWrites::ALL,
                    })],
                    compilation_options: Default::default(),
                }),
                primitive: wgpu::PrimitiveState {
                    topology: wgpu::PrimitiveTopology::TriangleList,
                    strip_index_format: None,
                    front_face: wgpu::FrontFace::Ccw,
                    cull_mode: None, // Line quads come in either winding
                    polygon_mode: wgpu::PolygonMode::Fill,
                    unclipped_depth: false,
                    conservative: false,
                },
                depth_stencil: None,
                multisample: wgpu::MultisampleState::default(),
                multiview: None,
                cache: None,
            });

        Self {
            pipeline,
            vertex_buffer: gpu.create_streaming_buffer(
                "Shape Vertex Buffer",
                INITIAL_VERTEX_BUFFER_SIZE,
                wgpu::BufferUsages::VERTEX,
            ),
            vertex_capacity: INITIAL_VERTEX_BUFFER_SIZE,
            index_buffer: gpu.create_streaming_buffer(
                "Shape Index Buffer",
                INITIAL_INDEX_BUFFER_SIZE,
                wgpu::BufferUsages::INDEX,
            ),
            index_capacity: INITIAL_INDEX_BUFFER_SIZE,
            line_width: DEFAULT_LINE_WIDTH,
        }
    }

    /// Set the thickness used for line commands (pixels).
    pub fn set_line_width(&mut self, width: f32) {
        self.line_width = width.max(0.5);
    }

    /// Draw one frame and present it.
    pub fn render(&mut self, gpu: &GpuContext, list: &DrawList) -> Result<(), wgpu::SurfaceError> {
        let frame = gpu.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let (width, height) = gpu.dimensions();
        let linear = gpu.format().is_srgb();
        let mesh = ShapeMesh::from_draw_list(list, width, height, self.line_width, linear);

        if !mesh.is_empty() {
            self.ensure_capacity(gpu, &mesh);
            gpu.queue
                .write_buffer(&self.vertex_buffer, 0, bytemuck::cast_slice(&mesh.vertices));
            gpu.queue
                .write_buffer(&self.index_buffer, 0, bytemuck::cast_slice(&mesh.indices));
        }

        let clear = mesh.clear_color.unwrap_or(Color::BLACK);
        let load_color = if linear {
            clear.to_wgpu()
        } else {
            let [r, g, b, a] = clear.to_f32_array();
            wgpu::Color {
                r: r as f64,
                g: g as f64,
                b: b as f64,
                a: a as f64,
            }
        };

        let mut encoder = gpu
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Shape Encoder"),
            });

        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Shape Render Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(load_color),
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            if !mesh.is_empty() {
                render_pass.set_pipeline(&self.pipeline);
                render_pass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
                render_pass.set_index_buffer(self.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
                render_pass.draw_indexed(0..mesh.indices.len() as u32, 0, 0..1);
            }
        }

        gpu.queue.submit(std::iter::once(encoder.finish()));
        frame.present();
        Ok(())
    }

    /// Grow the dynamic buffers if this frame's mesh does not fit.
    fn ensure_capacity(&mut self, gpu: &GpuContext, mesh: &ShapeMesh) {
        let vertex_bytes = std::mem::size_of_val(mesh.vertices.as_slice()) as u64;
        if vertex_bytes > self.vertex_capacity {
            self.vertex_capacity = vertex_bytes.next_power_of_two();
            self.vertex_buffer = gpu.create_streaming_buffer(
                "Shape Vertex Buffer",
                self.vertex_capacity,
                wgpu::BufferUsages::VERTEX,
            );
            log::debug!("shape vertex buffer grown to {} bytes", self.vertex_capacity);
        }

        let index_bytes = std::mem::size_of_val(mesh.indices.as_slice()) as u64;
        if index_bytes > self.index_capacity {
            self.index_capacity = index_bytes.next_power_of_two();
            self.index_buffer = gpu.create_streaming_buffer(
                "Shape Index Buffer",
                self.index_capacity,
                wgpu::BufferUsages::INDEX,
            );
            log::debug!("shape index buffer grown to {} bytes", self.index_capacity);
        }
    }
}
