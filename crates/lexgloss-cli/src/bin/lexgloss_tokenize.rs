// lexgloss-tokenize: Tokenize text from stdin.
//
// Reads text from stdin and prints the word tokens the annotator would
// look at, with their byte offsets.
//
// Usage:
//   lexgloss-tokenize [OPTIONS]
//
// Options:
//   --all                   Also print the text between words
//   -h, --help              Print help

use std::io::{self, Read, Write};

use lexgloss_en::tokenizer;

fn escape(text: &str) -> String {
    text.replace('\n', "\\n")
        .replace('\r', "\\r")
        .replace('\t', "\\t")
}

fn main() {
    lexgloss_cli::init_logging();

    let args: Vec<String> = std::env::args().skip(1).collect();

    if lexgloss_cli::wants_help(&args) {
        println!("lexgloss-tokenize: Tokenize text into annotatable words.");
        println!();
        println!("Usage: lexgloss-tokenize [OPTIONS]");
        println!();
        println!("Reads text from stdin, prints tokens with byte offsets:");
        println!("  WORD  [start..end]: <text>");
        println!("  TEXT  [start..end]: <text>   (with --all)");
        println!();
        println!("Options:");
        println!("  --all                   Also print the text between words");
        println!("  -h, --help              Print this help");
        return;
    }

    let show_all = args.iter().any(|a| a == "--all");

    let mut input = String::new();
    io::stdin()
        .read_to_string(&mut input)
        .unwrap_or_else(|e| lexgloss_cli::fatal(&format!("failed to read stdin: {e}")));

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    let mut pos = 0;
    for segment in tokenizer::segments(&input) {
        if show_all && !segment.before.is_empty() {
            let end = pos + segment.before.len();
            let _ = writeln!(out, "TEXT  [{pos:>4}..{end:>4}]: {}", escape(segment.before));
        }
        pos += segment.before.len();
        if let Some(word) = segment.word {
            let _ = writeln!(out, "WORD  [{:>4}..{:>4}]: {}", word.start, word.end, word.text);
            pos = word.end;
        }
    }
}
