//! Places the workspace `config.toml` next to the built binary so that
//! `cargo run` picks up local overrides (remote addresses, JWT secret).

use std::env;
use std::fs;
use std::path::Path;

fn main() {
    println!("cargo:rerun-if-changed=../../config.toml");

    let out_dir = env::var("OUT_DIR").expect("OUT_DIR is set by cargo");
    let profile = env::var("PROFILE").expect("PROFILE is set by cargo");

    // OUT_DIR is target/<profile>/build/backend-<hash>/out
    let Some(target_dir) = Path::new(&out_dir)
        .ancestors()
        .find(|p| p.ends_with(&profile))
    else {
        println!("cargo:warning=target/{} not found, config.toml not copied", profile);
        return;
    };

    let workspace_root = Path::new(env!("CARGO_MANIFEST_DIR")).join("../..");
    let source = workspace_root.join("config.toml");
    if !source.exists() {
        return;
    }

    let dest = target_dir.join("config.toml");
    match fs::copy(&source, &dest) {
        Ok(_) => println!("cargo:warning=Copied config.toml to {}", dest.display()),
        Err(e) => println!("cargo:warning=Failed to copy config.toml: {}", e),
    }
}
