//! Build-script helper that regenerates the destinations aggregate.
//!
//! Reads `navgen.toml` from the crate being built, applies env overrides,
//! and writes both artifacts. Must be used inside a function returning a
//! `Result` whose error converts from `navgen::Error`.
#[macro_export]
macro_rules! build {
    () => {
        $crate::build_script(::std::path::Path::new(env!("CARGO_MANIFEST_DIR")))?
    };
    ($dir:expr) => {
        $crate::build_script(::std::path::Path::new($dir))?
    };
}
