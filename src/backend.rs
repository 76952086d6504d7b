#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

/// Compiler backend the loader drives. Implemented for [`glow::Context`];
/// tests drive the loader through a recording fake instead.
///
/// Handles are plain copyable values. Deleting a handle and using it again
/// afterwards is a caller bug, same as in the underlying API.
pub trait ShaderBackend {
    type Stage: Copy;
    type Program: Copy;

    fn create_stage(&self, stage: ShaderStage) -> Result<Self::Stage, String>;
    fn stage_source(&self, stage: Self::Stage, source: &str);
    fn compile_stage(&self, stage: Self::Stage);
    fn compile_status(&self, stage: Self::Stage) -> bool;
    /// Compile log of a live stage. Meaningful after a failed compile.
    fn compile_log(&self, stage: Self::Stage) -> String;
    fn delete_stage(&self, stage: Self::Stage);

    fn create_program(&self) -> Result<Self::Program, String>;
    fn attach_stage(&self, program: Self::Program, stage: Self::Stage);
    fn link_program(&self, program: Self::Program);
    fn link_status(&self, program: Self::Program) -> bool;
    /// Link log of a live program. Meaningful after a failed link.
    fn link_log(&self, program: Self::Program) -> String;
    fn delete_program(&self, program: Self::Program);
}
