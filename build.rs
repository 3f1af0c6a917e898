use std::env;

fn main() {
    // Regenerate the C header whenever the exported surface changes.
    println!("cargo:rerun-if-changed=src/api/mod.rs");
    println!("cargo:rerun-if-changed=src/ffi.rs");
    println!("cargo:rerun-if-changed=cbindgen.toml");

    let crate_dir = env::var("CARGO_MANIFEST_DIR").unwrap();
    cbindgen::generate(&crate_dir)
        .expect("unable to generate blehost.h")
        .write_to_file("blehost.h");
}
