use vergen::EmitBuilder;

// Emits build and git metadata picked up by the startup log line.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    EmitBuilder::builder()
        .all_build() // VERGEN_BUILD_TIMESTAMP etc.
        .all_git() // VERGEN_GIT_SHA etc. (defaults are emitted outside a git checkout)
        .emit()?;

    Ok(())
}
