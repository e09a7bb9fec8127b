fn main() {
    let now = chrono::Utc::now();

    // Build timestamp and year for use in env! macro
    println!("cargo:rustc-env=BUILD_TIME={}", now.to_rfc3339());
    println!("cargo:rustc-env=BUILD_YEAR={}", now.format("%Y"));

    // Rerun if build.rs changes
    println!("cargo:rerun-if-changed=build.rs");
}
