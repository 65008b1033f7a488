pub mod blueprint;
pub mod common;
pub mod plan;

pub use blueprint::{
    Blueprint, FileStencil, ProjectFiles, RenderContext, RenderedFile, StencilContent,
};
pub use common::{FileMode, RelativePath};
pub use plan::{
    CommandSpec, GeneratorSpec, PackageManager, ProjectName, ProjectSpec, SetupPlan, SetupStep,
};
