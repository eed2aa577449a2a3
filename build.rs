//! Build script to embed the default secret words
//!
//! Validates `data/words.txt` and generates a const array from it, so a bad
//! entry fails the build instead of being skipped at runtime.

use std::collections::HashSet;
use std::env;
use std::fmt::Write;
use std::fs;
use std::path::Path;

const WORD_LIST: &str = "data/words.txt";

fn main() {
    let out_dir = env::var("OUT_DIR").expect("OUT_DIR is set by cargo");

    let words = read_words(WORD_LIST);
    let source = render_word_list(
        &words,
        "DEFAULT_WORDS",
        "Built-in secret words used when no word list file is given",
    );

    let output_path = Path::new(&out_dir).join("default_words.rs");
    fs::write(&output_path, source)
        .unwrap_or_else(|e| panic!("Failed to write {}: {e}", output_path.display()));

    println!("cargo:rerun-if-changed={WORD_LIST}");
}

/// Lowercased, de-duplicated words in file order; blank lines and `#` comments ignored
fn read_words(input_path: &str) -> Vec<String> {
    let content = fs::read_to_string(input_path)
        .unwrap_or_else(|e| panic!("Failed to read {input_path}: {e}"));

    let mut seen = HashSet::new();
    let mut words = Vec::new();

    for (number, line) in content.lines().enumerate() {
        let word = line.trim();
        if word.is_empty() || word.starts_with('#') {
            continue;
        }
        assert!(
            word.bytes().all(|c| c.is_ascii_alphabetic()),
            "{input_path}:{}: '{word}' is not a plain ASCII word",
            number + 1
        );

        let word = word.to_ascii_lowercase();
        if seen.insert(word.clone()) {
            words.push(word);
        }
    }

    assert!(!words.is_empty(), "{input_path} has no words");
    words
}

fn render_word_list(words: &[String], const_name: &str, doc_comment: &str) -> String {
    let mut out = String::new();

    // Writing to a String cannot fail
    let _ = writeln!(out, "// Generated from `{WORD_LIST}`\n");
    let _ = writeln!(out, "/// {doc_comment}");
    let _ = writeln!(out, "pub const {const_name}: &[&str] = &[");
    for word in words {
        let _ = writeln!(out, "    {word:?},");
    }
    let _ = writeln!(out, "];\n");
    let _ = writeln!(out, "/// Number of words in `{const_name}`");
    let _ = writeln!(
        out,
        "pub const {const_name}_COUNT: usize = {};",
        words.len()
    );

    out
}
