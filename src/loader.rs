use std::fs;
use std::path::Path;

use tracing::debug;

use crate::backend::{ShaderBackend, ShaderStage};

#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum LoadError {
    #[error("vertex shader not found: {0}")]
    VertexNotFound(std::io::Error),

    #[error("fragment shader not found: {0}")]
    FragmentNotFound(std::io::Error),

    #[error("vertex shader error:\n{0}")]
    CompileVertexFailed(String),

    #[error("fragment shader error:\n{0}")]
    CompileFragmentFailed(String),

    #[error("program link error:\n{0}")]
    LinkageFailed(String),
}

// Deletes the stage when the guard falls, on every exit path. Stages are
// deleted even after a successful link; the program keeps its own copy of
// the compiled code.
struct StageGuard<'a, B: ShaderBackend> {
    backend: &'a B,
    stage: B::Stage,
}

impl<B: ShaderBackend> StageGuard<'_, B> {
    fn raw(&self) -> B::Stage {
        self.stage
    }
}

impl<B: ShaderBackend> Drop for StageGuard<'_, B> {
    fn drop(&mut self) {
        self.backend.delete_stage(self.stage);
    }
}

struct ProgramGuard<'a, B: ShaderBackend> {
    backend: &'a B,
    program: B::Program,
}

impl<B: ShaderBackend> ProgramGuard<'_, B> {
    fn raw(&self) -> B::Program {
        self.program
    }

    fn release(self) -> B::Program {
        let program = self.program;
        std::mem::forget(self);
        program
    }
}

impl<B: ShaderBackend> Drop for ProgramGuard<'_, B> {
    fn drop(&mut self) {
        self.backend.delete_program(self.program);
    }
}

fn compile<'a, B: ShaderBackend>(
    backend: &'a B,
    stage: ShaderStage,
    source: &str,
) -> Result<StageGuard<'a, B>, String> {
    let handle = backend.create_stage(stage)?;
    let guard = StageGuard {
        backend,
        stage: handle,
    };

    backend.stage_source(guard.raw(), source);
    backend.compile_stage(guard.raw());

    if !backend.compile_status(guard.raw()) {
        // Capture the log while the stage is still alive; the guard deletes
        // it as soon as this returns.
        return Err(backend.compile_log(guard.raw()));
    }

    Ok(guard)
}

/// Compiles both stages from in-memory source and links them into a program.
///
/// Exactly one of `Ok` or one `LoadError` variant comes back per call, and
/// no stage object survives the call on any path.
pub fn link_program_from_source<B: ShaderBackend>(
    backend: &B,
    vertex_src: &str,
    fragment_src: &str,
) -> Result<B::Program, LoadError> {
    let vertex = compile(backend, ShaderStage::Vertex, vertex_src)
        .map_err(LoadError::CompileVertexFailed)?;
    let fragment = compile(backend, ShaderStage::Fragment, fragment_src)
        .map_err(LoadError::CompileFragmentFailed)?;

    let program = ProgramGuard {
        backend,
        program: backend.create_program().map_err(LoadError::LinkageFailed)?,
    };

    backend.attach_stage(program.raw(), vertex.raw());
    backend.attach_stage(program.raw(), fragment.raw());
    backend.link_program(program.raw());

    if !backend.link_status(program.raw()) {
        return Err(LoadError::LinkageFailed(backend.link_log(program.raw())));
    }

    Ok(program.release())
}

/// Reads vertex and fragment source files and builds a linked program.
///
/// The vertex file is read first; a missing vertex file is reported before
/// the fragment path is ever touched.
pub fn load_program<B: ShaderBackend>(
    backend: &B,
    vertex_path: impl AsRef<Path>,
    fragment_path: impl AsRef<Path>,
) -> Result<B::Program, LoadError> {
    let vertex_path = vertex_path.as_ref();
    let fragment_path = fragment_path.as_ref();

    let vertex_src = fs::read_to_string(vertex_path).map_err(LoadError::VertexNotFound)?;
    let fragment_src = fs::read_to_string(fragment_path).map_err(LoadError::FragmentNotFound)?;

    debug!(
        vertex = %vertex_path.display(),
        fragment = %fragment_path.display(),
        "compiling shader program"
    );

    link_program_from_source(backend, &vertex_src, &fragment_src)
}
