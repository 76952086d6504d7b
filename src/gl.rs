use glow::HasContext;

use crate::backend::{ShaderBackend, ShaderStage};

fn stage_type(stage: ShaderStage) -> u32 {
    match stage {
        ShaderStage::Vertex => glow::VERTEX_SHADER,
        ShaderStage::Fragment => glow::FRAGMENT_SHADER,
    }
}

// The context must be current on the calling thread for every call below.
impl ShaderBackend for glow::Context {
    type Stage = <glow::Context as HasContext>::Shader;
    type Program = <glow::Context as HasContext>::Program;

    fn create_stage(&self, stage: ShaderStage) -> Result<Self::Stage, String> {
        unsafe { self.create_shader(stage_type(stage)) }
    }

    fn stage_source(&self, stage: Self::Stage, source: &str) {
        unsafe { self.shader_source(stage, source) }
    }

    fn compile_stage(&self, stage: Self::Stage) {
        unsafe { self.compile_shader(stage) }
    }

    fn compile_status(&self, stage: Self::Stage) -> bool {
        unsafe { self.get_shader_compile_status(stage) }
    }

    fn compile_log(&self, stage: Self::Stage) -> String {
        unsafe { self.get_shader_info_log(stage) }
    }

    fn delete_stage(&self, stage: Self::Stage) {
        unsafe { self.delete_shader(stage) }
    }

    fn create_program(&self) -> Result<Self::Program, String> {
        unsafe { HasContext::create_program(self) }
    }

    fn attach_stage(&self, program: Self::Program, stage: Self::Stage) {
        unsafe { self.attach_shader(program, stage) }
    }

    fn link_program(&self, program: Self::Program) {
        unsafe { HasContext::link_program(self, program) }
    }

    fn link_status(&self, program: Self::Program) -> bool {
        unsafe { self.get_program_link_status(program) }
    }

    fn link_log(&self, program: Self::Program) -> String {
        unsafe { self.get_program_info_log(program) }
    }

    fn delete_program(&self, program: Self::Program) {
        unsafe { HasContext::delete_program(self, program) }
    }
}
