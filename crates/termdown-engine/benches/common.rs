// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_markdown_content(size: usize) -> String {
    let base = "# Title\n\n## Section\n\nParagraph with **bold**, *italic*, `code` and a [link](https://example.com).\n\n- Bullet point\n- Another item\n\n1. First\n2. Second\n\n> A quote spanning\n> two lines\n\n| Col | Num |\n|:----|----:|\n| a   |   1 |\n| b   |   2 |\n\n```rust\nfn example() {\n    println!(\"Hello\");\n}\n```\n\n<!-- comment -->\n\n---\n\n";
    base.repeat(size)
}

#[allow(dead_code)]
pub fn generate_inline_heavy(size: usize) -> String {
    let line = "Text with **bold *nested* words**, __more__, _soft_, `x`, ![img](i.png) and [a](b). ";
    line.repeat(size)
}
