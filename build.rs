//! Build script: embeds the git commit hash for `--version`.
//!
//! Emits `VERGEN_GIT_SHA` with a graceful "unknown" fallback so builds from
//! a source tarball (no `.git`) still succeed.

use vergen_gitcl::{Emitter, GitclBuilder};

fn main() {
    let emit_result = match GitclBuilder::default().sha(true).build() {
        Ok(git) => Emitter::default()
            .add_instructions(&git)
            .and_then(|emitter| emitter.emit()),
        Err(e) => {
            eprintln!("cargo:warning=Failed to configure git info: {}", e);
            println!("cargo:rustc-env=VERGEN_GIT_SHA=unknown");
            return;
        }
    };

    if let Err(e) = emit_result {
        eprintln!("cargo:warning=Failed to get git info: {}", e);
        println!("cargo:rustc-env=VERGEN_GIT_SHA=unknown");
    }
}
