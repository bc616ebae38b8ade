//! Parser fuzz target: feed arbitrary bytes to the source-string parser.
//! The parser must not panic; it should return Ok(VideoSource) or
//! Err(ParseError). A successful parse is additionally pushed through the
//! backend resolvers, which must not panic either.
//! Build with: cargo fuzz run parser_fuzz (requires nightly and cargo fuzz).

#![cfg_attr(fuzzing, no_main)]

#[cfg(fuzzing)]
use libfuzzer_sys::fuzz_target;

#[cfg(fuzzing)]
fuzz_target!(|data: &[u8]| {
    let s = match std::str::from_utf8(data) {
        Ok(x) => x,
        Err(_) => return,
    };
    if let Ok(vs) = vidsource::parse(s) {
        let _ = vidsource::BackendConfig::resolve(&vs);
        let _ = vs.to_string();
    }
    let _ = vidsource::unescape(s);
});

#[cfg(not(fuzzing))]
fn main() {
    eprintln!("Build with: cargo fuzz run parser_fuzz");
}
