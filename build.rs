fn main() {
    // Shown in the site footer
    let built_on = chrono::Utc::now().format("%Y-%m-%d").to_string();
    println!("cargo:rustc-env=BUILD_TIME={built_on}");

    // Content is embedded, so a content edit must rebuild the crate
    println!("cargo:rerun-if-changed=content");
    println!("cargo:rerun-if-changed=build.rs");
}
