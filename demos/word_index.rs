//! Interactive word index over a text file.
//!
//! Every whitespace-separated word of the file is inserted in order, then
//! commands are read from stdin, one per line:
//!
//! ```text
//! add WORD | remove WORD | contains WORD | find WORD | findall WORD
//! print | size | clear | exit
//! ```
//!
//! Run with `cargo run --example word_index -- path/to/file.txt`. Set
//! `RUST_LOG=positional_radix=debug` to watch the trie at work.
use std::env;
use std::error::Error;
use std::fs;
use std::io::{self, BufRead, Write};

use positional_radix::PositionalTrie;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let path = env::args()
        .nth(1)
        .ok_or("usage: word_index <file>")?;
    let text = fs::read_to_string(&path)?;

    println!("Original file:");
    for line in text.lines() {
        println!("    {}", line);
    }

    let mut trie: PositionalTrie<String> = text.split_whitespace().collect();
    println!("Indexed {} words.", trie.len());

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    for line in stdin.lock().lines() {
        let line = line?;
        let mut parts = line.split_whitespace();
        let command = match parts.next() {
            Some(command) => command,
            None => continue,
        };
        let word = parts.next();

        match (command, word) {
            ("add", Some(word)) => {
                let position = trie.push(word)?;
                writeln!(stdout, "{}", position)?;
            }
            ("remove", Some(word)) => {
                let msg = if trie.remove(word) {
                    "Word removed."
                } else {
                    "Word not found."
                };
                writeln!(stdout, "{}", msg)?;
            }
            ("contains", Some(word)) => {
                let msg = if trie.contains(word) { "Yes." } else { "No." };
                writeln!(stdout, "{}", msg)?;
            }
            ("find", Some(word)) => match trie.find(word) {
                Some(position) => writeln!(stdout, "{}", position)?,
                None => writeln!(stdout, "Not found")?,
            },
            ("findall", Some(word)) => match trie.find_all(word) {
                Some(positions) => {
                    let positions: Vec<String> =
                        positions.iter().map(|p| p.to_string()).collect();
                    writeln!(stdout, "{}", positions.join(", "))?;
                }
                None => writeln!(stdout, "Not found")?,
            },
            ("print", None) => {
                if trie.is_empty() {
                    writeln!(stdout, "Empty.")?;
                } else {
                    writeln!(stdout, "{}", trie)?;
                }
            }
            ("size", None) => writeln!(stdout, "Size: {}", trie.len())?,
            ("clear", None) => trie.clear(),
            ("exit", None) => break,
            _ => writeln!(stdout, "Input invalid.")?,
        }
        stdout.flush()?;
    }

    Ok(())
}
