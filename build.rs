use std::env;
use std::fs;
use std::path::Path;

fn main() {
    let crate_dir = match env::var("CARGO_MANIFEST_DIR") {
        Ok(dir) => dir,
        Err(_) => {
            println!("cargo:warning=CARGO_MANIFEST_DIR not set; skipping bufxor.h");
            return;
        }
    };

    // C header for the host runtime binding
    let header_path = Path::new(&crate_dir).join("include/bufxor.h");
    if let Some(parent) = header_path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            println!("cargo:warning=Failed to create include/ directory: {}", e);
        }
    }

    match cbindgen::generate(&crate_dir) {
        Ok(bindings) => {
            if !bindings.write_to_file(&header_path) {
                println!("cargo:info=bufxor.h unchanged");
            }
        }
        Err(e) => println!("cargo:warning=cbindgen generation failed: {}", e),
    }

    println!("cargo:rerun-if-changed=src/");
    println!("cargo:rerun-if-changed=cbindgen.toml");
    println!("cargo:rerun-if-changed=build.rs");
}
