//! Example: line-level LCS between two short texts.
//!
//! Run with:
//! `cargo run --example lcs`

use lcs_dp::{CancelToken, Lcs};
use std::time::Duration;

fn main() {
    let old = "fn main() {\n    let x = 1;\n    println!(\"{x}\");\n}\n";
    let new = "fn main() {\n    let x = 2;\n    let y = x + 1;\n    println!(\"{x}\");\n}\n";

    let a: Vec<&str> = old.lines().collect();
    let b: Vec<&str> = new.lines().collect();

    let lcs = Lcs::new(&a, &b);
    let token = CancelToken::with_timeout(Duration::from_secs(1));

    match lcs.try_index_pairs(&token) {
        Ok(pairs) => {
            println!("LCS length: {}", pairs.len());
            for pair in pairs {
                println!("  {:>2} ~ {:>2}  {}", pair.left, pair.right, a[pair.left]);
            }
        }
        Err(err) => eprintln!("gave up: {err}"),
    }

    let chars_a: Vec<char> = "ACCGGTCGAGTGCGCGGAAGCCGGCCGAA".chars().collect();
    let chars_b: Vec<char> = "GTCGTTCGGAATGCCGTTGCTCTGTAAA".chars().collect();
    let dna = Lcs::new(&chars_a, &chars_b);
    let lcs_str: String = dna.values().iter().copied().collect();
    println!("DNA LCS ({}): {lcs_str}", dna.length());
}
