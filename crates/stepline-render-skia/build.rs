// File: crates/stepline-render-skia/build.rs
// Summary: Links the Windows registry API that Skia's font manager and ICU data lookup call into.

fn main() {
    if std::env::var("CARGO_CFG_TARGET_OS").as_deref() == Ok("windows") {
        println!("cargo:rustc-link-lib=advapi32");
    }
    println!("cargo:rerun-if-changed=build.rs");
}
