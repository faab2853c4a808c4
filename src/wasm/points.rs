use glam::Mat4;
use js_sys::Float32Array;
use web_sys::{WebGl2RenderingContext as GL, WebGlBuffer, WebGlVertexArrayObject};

use super::shaders::{
    ShaderProgram, ATTR_COLOR, ATTR_POSITION, ATTR_SIZE, ATTR_VELOCITY, DRIFT_VERT, GLOW_FRAG,
    RIGID_VERT, TWINKLE_VERT, WRAP_VERT,
};
use crate::error::GalaxyError;
use crate::particles::PointBuffers;

/// Vertex-stage behaviour of a layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Motion {
    Twinkle,
    Drift,
    Wrap,
    Rigid,
}

/// Fragment falloff `alpha = (strength / d - offset) * opacity`.
#[derive(Debug, Clone, Copy)]
pub struct Glow {
    pub strength: f32,
    pub offset: f32,
    pub opacity: f32,
}

pub const STAR_GLOW: Glow = Glow { strength: 0.05, offset: 0.1, opacity: 1.0 };
pub const MOVING_STAR_GLOW: Glow = Glow { strength: 0.05, offset: 0.1, opacity: 0.8 };
pub const NEBULA_GLOW: Glow = Glow { strength: 0.15, offset: 0.3, opacity: 0.3 };

/// One program per [`Motion`], shared by every layer using it.
pub struct Programs {
    twinkle: ShaderProgram,
    drift: ShaderProgram,
    wrap: ShaderProgram,
    rigid: ShaderProgram,
}

impl Programs {
    pub fn new(gl: &GL) -> Result<Self, GalaxyError> {
        Ok(Self {
            twinkle: ShaderProgram::new(gl, TWINKLE_VERT, GLOW_FRAG)?,
            drift: ShaderProgram::new(gl, DRIFT_VERT, GLOW_FRAG)?,
            wrap: ShaderProgram::new(gl, WRAP_VERT, GLOW_FRAG)?,
            rigid: ShaderProgram::new(gl, RIGID_VERT, GLOW_FRAG)?,
        })
    }

    pub fn get(&self, motion: Motion) -> &ShaderProgram {
        match motion {
            Motion::Twinkle => &self.twinkle,
            Motion::Drift => &self.drift,
            Motion::Wrap => &self.wrap,
            Motion::Rigid => &self.rigid,
        }
    }
}

/// Per-frame values every layer needs.
pub struct FrameUniforms {
    pub view: Mat4,
    pub projection: Mat4,
    pub time: f32,
}

/// A particle system resident on the GPU.
pub struct PointLayer {
    vao: WebGlVertexArrayObject,
    positions: WebGlBuffer,
    count: i32,
    pub motion: Motion,
    pub glow: Glow,
    /// y-axis spin rate; zero for static layers.
    pub spin: f32,
    pub half_extent: f32,
}

impl PointLayer {
    pub fn upload(
        gl: &GL,
        points: &PointBuffers,
        velocities: Option<&[f32]>,
        motion: Motion,
        glow: Glow,
    ) -> Result<Self, GalaxyError> {
        Self::upload_with_usage(gl, points, velocities, motion, glow, GL::STATIC_DRAW)
    }

    /// Like [`PointLayer::upload`], with positions expected to change every frame.
    pub fn upload_dynamic(
        gl: &GL,
        points: &PointBuffers,
        motion: Motion,
        glow: Glow,
    ) -> Result<Self, GalaxyError> {
        Self::upload_with_usage(gl, points, None, motion, glow, GL::DYNAMIC_DRAW)
    }

    fn upload_with_usage(
        gl: &GL,
        points: &PointBuffers,
        velocities: Option<&[f32]>,
        motion: Motion,
        glow: Glow,
        position_usage: u32,
    ) -> Result<Self, GalaxyError> {
        let vao = gl
            .create_vertex_array()
            .ok_or(GalaxyError::Resource("vertex array"))?;
        gl.bind_vertex_array(Some(&vao));

        let positions = attribute(gl, ATTR_POSITION, 3, &points.positions, position_usage)?;
        attribute(gl, ATTR_COLOR, 3, &points.colors, GL::STATIC_DRAW)?;
        attribute(gl, ATTR_SIZE, 1, &points.sizes, GL::STATIC_DRAW)?;
        match velocities {
            Some(v) => {
                attribute(gl, ATTR_VELOCITY, 3, v, GL::STATIC_DRAW)?;
            }
            None => gl.vertex_attrib3f(ATTR_VELOCITY, 0.0, 0.0, 0.0),
        }

        gl.bind_vertex_array(None);

        Ok(Self {
            vao,
            positions,
            count: points.len() as i32,
            motion,
            glow,
            spin: 0.0,
            half_extent: 0.0,
        })
    }

    pub fn with_spin(mut self, spin: f32) -> Self {
        self.spin = spin;
        self
    }

    pub fn with_half_extent(mut self, half_extent: f32) -> Self {
        self.half_extent = half_extent;
        self
    }

    /// Re-upload positions moved on the CPU.
    pub fn write_positions(&self, gl: &GL, positions: &[f32]) {
        gl.bind_buffer(GL::ARRAY_BUFFER, Some(&self.positions));
        let array = Float32Array::from(positions);
        gl.buffer_sub_data_with_i32_and_array_buffer_view(GL::ARRAY_BUFFER, 0, &array);
    }

    pub fn draw(&self, gl: &GL, programs: &Programs, frame: &FrameUniforms) {
        let p = programs.get(self.motion);
        let model = Mat4::from_rotation_y(frame.time * self.spin);

        gl.use_program(Some(&p.program));
        gl.uniform_matrix4fv_with_f32_array(p.model.as_ref(), false, &model.to_cols_array());
        gl.uniform_matrix4fv_with_f32_array(p.view.as_ref(), false, &frame.view.to_cols_array());
        gl.uniform_matrix4fv_with_f32_array(
            p.projection.as_ref(),
            false,
            &frame.projection.to_cols_array(),
        );
        gl.uniform1f(p.time.as_ref(), frame.time);
        gl.uniform1f(p.half_extent.as_ref(), self.half_extent);
        gl.uniform2f(p.falloff.as_ref(), self.glow.strength, self.glow.offset);
        gl.uniform1f(p.opacity.as_ref(), self.glow.opacity);

        gl.bind_vertex_array(Some(&self.vao));
        gl.draw_arrays(GL::POINTS, 0, self.count);
        gl.bind_vertex_array(None);
    }
}

fn attribute(
    gl: &GL,
    location: u32,
    components: i32,
    data: &[f32],
    usage: u32,
) -> Result<WebGlBuffer, GalaxyError> {
    let buffer = gl.create_buffer().ok_or(GalaxyError::Resource("buffer"))?;
    gl.bind_buffer(GL::ARRAY_BUFFER, Some(&buffer));
    let array = Float32Array::from(data);
    gl.buffer_data_with_array_buffer_view(GL::ARRAY_BUFFER, &array, usage);
    gl.enable_vertex_attrib_array(location);
    gl.vertex_attrib_pointer_with_i32(location, components, GL::FLOAT, false, 0, 0);
    Ok(buffer)
}
