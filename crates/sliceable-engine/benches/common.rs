// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_mixed_text(repeats: usize) -> String {
    let base = "Fòô Bàř ascii text 🦀 ñandú ";
    base.repeat(repeats)
}
