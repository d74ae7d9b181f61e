use chrono::Datelike;

fn main() {
    let now = chrono::Utc::now();

    // Footer copyright year, fixed at build so server and client render the same text
    println!("cargo:rustc-env=BUILD_YEAR={}", now.year());

    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=blog");
}
