// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_markdown_content(size: usize) -> String {
    let base = "# Title\n\nParagraph with some content.\n\n- Bullet point\n- Another item\n\n```rust\nfn example() {}\n```\n\n";
    base.repeat(size)
}

/// Documents made of column blocks, each spread over several fragments.
#[allow(dead_code)]
pub fn generate_column_blocks(blocks: usize) -> String {
    let block = "[begin]2\n\nLeft paragraph with some text.\n\n- a list\n- in the left column\n\n[col]\nRight column\nover two lines\n[col]3\nThird column\n[end] wrap\n\n";
    block.repeat(blocks)
}
