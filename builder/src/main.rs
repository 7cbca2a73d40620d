use anyhow::Context;
use spirv_builder::{MetadataPrintout, SpirvBuilder};
use std::env;
use std::path::{Path, PathBuf};

/// Compiles the grid shader crate to a SPIR-V module. Pass an output path
/// to copy the `.spv` there, otherwise the build artifact is left in place.
fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let shader_crate = Path::new(env!("CARGO_MANIFEST_DIR")).join("../shader/shader");
    log::info!("compiling {}", shader_crate.display());

    let compile_result = SpirvBuilder::new(shader_crate, "spirv-unknown-vulkan1.1")
        .print_metadata(MetadataPrintout::None)
        .build()?;
    log::info!("entry points: {:?}", compile_result.entry_points);

    let module = compile_result.module.unwrap_single();
    match env::args_os().nth(1).map(PathBuf::from) {
        Some(out) => {
            std::fs::copy(module, &out)
                .with_context(|| format!("copying shader module to {}", out.display()))?;
            log::info!("shader module written to {}", out.display());
        }
        None => log::info!("shader module at {}", module.display()),
    }
    Ok(())
}
