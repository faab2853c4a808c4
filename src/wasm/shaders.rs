//! GLSL ES 3.00 sources for the point-sprite layers.
//!
//! All vertex stages share the attribute layout below and differ only in how
//! they displace a particle before projection.

use wasm_bindgen::JsValue;
use web_sys::{WebGl2RenderingContext as GL, WebGlProgram, WebGlShader, WebGlUniformLocation};

use crate::error::GalaxyError;

pub const ATTR_POSITION: u32 = 0;
pub const ATTR_COLOR: u32 = 1;
pub const ATTR_SIZE: u32 = 2;
pub const ATTR_VELOCITY: u32 = 3;

macro_rules! point_vertex {
    ($body:literal) => {
        concat!(
            "#version 300 es\n",
            "layout(location = 0) in vec3 a_position;\n",
            "layout(location = 1) in vec3 a_color;\n",
            "layout(location = 2) in float a_size;\n",
            "layout(location = 3) in vec3 a_velocity;\n",
            "uniform mat4 u_model;\n",
            "uniform mat4 u_view;\n",
            "uniform mat4 u_projection;\n",
            "uniform float u_time;\n",
            "uniform float u_half_extent;\n",
            "out vec3 v_color;\n",
            "void main() {\n",
            "    v_color = a_color;\n",
            $body,
            "    gl_PointSize = a_size * (300.0 / -mv.z);\n",
            "    gl_Position = u_projection * mv;\n",
            "}\n"
        )
    };
}

/// Small sinusoidal wobble in view space.
pub const TWINKLE_VERT: &str = point_vertex!(
    "    vec4 mv = u_view * u_model * vec4(a_position, 1.0);
    mv.x += sin(u_time * 0.5 + a_position.x * 0.01) * 0.1;
    mv.y += cos(u_time * 0.3 + a_position.y * 0.01) * 0.1;
"
);

/// Slower, wider wobble for the nebula.
pub const DRIFT_VERT: &str = point_vertex!(
    "    vec4 mv = u_view * u_model * vec4(a_position, 1.0);
    mv.x += sin(u_time * 0.2 + a_position.x * 0.005) * 0.5;
    mv.z += cos(u_time * 0.15 + a_position.z * 0.005) * 0.5;
"
);

/// Linear motion wrapped into the cube `[-h, h)^3`.
pub const WRAP_VERT: &str = point_vertex!(
    "    vec3 pos = a_position + a_velocity * u_time;
    pos = mod(pos + u_half_extent, 2.0 * u_half_extent) - u_half_extent;
    vec4 mv = u_view * u_model * vec4(pos, 1.0);
"
);

/// No displacement; motion comes from the model matrix or buffer updates.
pub const RIGID_VERT: &str = point_vertex!(
    "    vec4 mv = u_view * u_model * vec4(a_position, 1.0);
"
);

/// Soft radial glow: `alpha = (k / d - c) * opacity`.
pub const GLOW_FRAG: &str = "#version 300 es
precision mediump float;
uniform vec2 u_falloff;
uniform float u_opacity;
in vec3 v_color;
out vec4 out_color;
void main() {
    float d = max(distance(gl_PointCoord, vec2(0.5)), 1e-4);
    float strength = u_falloff.x / d - u_falloff.y;
    out_color = vec4(v_color, clamp(strength * u_opacity, 0.0, 1.0));
}
";

/// A linked program with its uniform slots looked up once.
pub struct ShaderProgram {
    pub program: WebGlProgram,
    pub model: Option<WebGlUniformLocation>,
    pub view: Option<WebGlUniformLocation>,
    pub projection: Option<WebGlUniformLocation>,
    pub time: Option<WebGlUniformLocation>,
    pub half_extent: Option<WebGlUniformLocation>,
    pub falloff: Option<WebGlUniformLocation>,
    pub opacity: Option<WebGlUniformLocation>,
}

impl ShaderProgram {
    pub fn new(gl: &GL, vertex: &str, fragment: &str) -> Result<Self, GalaxyError> {
        let vs = compile_shader(gl, GL::VERTEX_SHADER, vertex)?;
        let fs = compile_shader(gl, GL::FRAGMENT_SHADER, fragment)?;
        let program = link_program(gl, &vs, &fs)?;
        gl.delete_shader(Some(&vs));
        gl.delete_shader(Some(&fs));

        let uniform = |name: &str| gl.get_uniform_location(&program, name);
        Ok(Self {
            model: uniform("u_model"),
            view: uniform("u_view"),
            projection: uniform("u_projection"),
            time: uniform("u_time"),
            half_extent: uniform("u_half_extent"),
            falloff: uniform("u_falloff"),
            opacity: uniform("u_opacity"),
            program,
        })
    }
}

fn compile_shader(gl: &GL, kind: u32, source: &str) -> Result<WebGlShader, GalaxyError> {
    let shader = gl.create_shader(kind).ok_or(GalaxyError::Resource("shader"))?;
    gl.shader_source(&shader, source);
    gl.compile_shader(&shader);

    if status(gl.get_shader_parameter(&shader, GL::COMPILE_STATUS)) {
        Ok(shader)
    } else {
        let info = gl.get_shader_info_log(&shader).unwrap_or_default();
        log::error!("shader compile failed: {info}");
        gl.delete_shader(Some(&shader));
        Err(GalaxyError::ShaderCompile(info))
    }
}

fn link_program(gl: &GL, vs: &WebGlShader, fs: &WebGlShader) -> Result<WebGlProgram, GalaxyError> {
    let program = gl.create_program().ok_or(GalaxyError::Resource("program"))?;
    gl.attach_shader(&program, vs);
    gl.attach_shader(&program, fs);
    gl.link_program(&program);

    if status(gl.get_program_parameter(&program, GL::LINK_STATUS)) {
        Ok(program)
    } else {
        let info = gl.get_program_info_log(&program).unwrap_or_default();
        log::error!("program link failed: {info}");
        gl.delete_program(Some(&program));
        Err(GalaxyError::ProgramLink(info))
    }
}

fn status(value: JsValue) -> bool {
    value.as_bool().unwrap_or(false)
}
