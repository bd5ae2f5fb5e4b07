#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
//! Greenbox demo wasm entry point and native stub fallback.

#[cfg(not(target_arch = "wasm32"))]
const NATIVE_NOTICE: &str = "greenbox-ui mounts its demo (a select-all checkbox group, a disabled checkbox and a modal) in the browser only.\n\
Build it for wasm32 with `trunk build`; run `cargo test` for the native widget logic.\n";

#[cfg(target_arch = "wasm32")]
fn main() -> Result<(), std::io::Error> {
    greenbox_ui::run_app();
    Ok(())
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> Result<(), std::io::Error> {
    use std::io::{self, Write};

    io::stderr().lock().write_all(NATIVE_NOTICE.as_bytes())
}
