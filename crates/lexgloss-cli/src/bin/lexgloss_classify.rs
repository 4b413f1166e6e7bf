// lexgloss-classify: Classify words from stdin against the known vocabulary.
//
// Reads words from stdin (one per line). Output format:
//   K: word              (known, or skipped as too short / numeric)
//   U: word<TAB>tooltip  (unknown, with the gloss it would get)
//
// Usage:
//   lexgloss-classify [-d DATA_PATH] [OPTIONS] [WORD...]
//
// Options:
//   -d, --data-path PATH   Directory containing baseline.txt and glosses.json
//   -r, --rule              Show the suffix rule that made a word known
//   -h, --help              Print help

use std::io::{self, BufRead, Write};

use lexgloss_core::enums::Classification;
use lexgloss_en::Annotator;

fn classify_word(annotator: &Annotator, word: &str, show_rule: bool, out: &mut impl Write) {
    match annotator.classify(word) {
        Classification::Unknown => {
            let _ = writeln!(out, "U: {word}\t{}", annotator.glosses().lookup(word).tooltip());
        }
        Classification::Known if show_rule => match annotator.vocabulary().matching_rule(word) {
            Some(rule) => {
                let _ = writeln!(out, "K: {word}\t({})", rule.name);
            }
            None => {
                let _ = writeln!(out, "K: {word}");
            }
        },
        _ => {
            let _ = writeln!(out, "K: {word}");
        }
    }
}

fn main() {
    lexgloss_cli::init_logging();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (data_path, args) = lexgloss_cli::parse_data_path(&args);

    if lexgloss_cli::wants_help(&args) {
        println!("lexgloss-classify: Classify words against the known vocabulary.");
        println!();
        println!("Usage: lexgloss-classify [-d DATA_PATH] [OPTIONS] [WORD...]");
        println!();
        println!("If WORD arguments are given, classifies each word.");
        println!("Otherwise reads words from stdin (one per line). Prints:");
        println!("  K: word              (known)");
        println!("  U: word<TAB>tooltip  (unknown)");
        println!();
        println!("Options:");
        println!("  -d, --data-path PATH   Directory containing baseline.txt and glosses.json");
        println!("  -r, --rule              Show the suffix rule that made a word known");
        println!("  -h, --help              Print this help");
        return;
    }

    let show_rule = args.iter().any(|a| a == "-r" || a == "--rule");
    let words: Vec<&String> = args.iter().filter(|a| !a.starts_with('-')).collect();

    let annotator = lexgloss_cli::load_annotator(data_path.as_deref())
        .unwrap_or_else(|e| lexgloss_cli::fatal(&e));

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    if words.is_empty() {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let line = match line {
                Ok(l) => l,
                Err(e) => {
                    eprintln!("error reading stdin: {e}");
                    break;
                }
            };
            let word = line.trim();
            if word.is_empty() {
                continue;
            }
            classify_word(&annotator, word, show_rule, &mut out);
        }
    } else {
        for word in words {
            classify_word(&annotator, word, show_rule, &mut out);
        }
    }
}
