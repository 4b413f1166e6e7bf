// lexgloss-annotate: Mark unfamiliar words in HTML chapters.
//
// Rewrites each FILE in place, wrapping the first occurrence of every word
// outside the known vocabulary in a tooltip span. Files that fail to parse
// are reported and left untouched.
//
// Usage:
//   lexgloss-annotate [-d DATA_PATH] [OPTIONS] FILE...
//
// Options:
//   -d, --data-path PATH   Directory containing baseline.txt and glosses.json
//   --stdout                Print the annotated documents instead of rewriting
//   --insert-style          Add a style element when the document has none
//   -h, --help              Print help

use std::io::{self, Write};

fn main() {
    lexgloss_cli::init_logging();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (data_path, args) = lexgloss_cli::parse_data_path(&args);

    if lexgloss_cli::wants_help(&args) {
        println!("lexgloss-annotate: Mark unfamiliar words in HTML chapters.");
        println!();
        println!("Usage: lexgloss-annotate [-d DATA_PATH] [OPTIONS] FILE...");
        println!();
        println!("Each FILE is rewritten in place.");
        println!();
        println!("Options:");
        println!("  -d, --data-path PATH   Directory containing baseline.txt and glosses.json");
        println!("  --stdout                Print the annotated documents instead of rewriting");
        println!("  --insert-style          Add a style element when the document has none");
        println!("  -h, --help              Print this help");
        return;
    }

    let to_stdout = args.iter().any(|a| a == "--stdout");
    let insert_style = args.iter().any(|a| a == "--insert-style");
    let files: Vec<&String> = args.iter().filter(|a| !a.starts_with('-')).collect();
    if files.is_empty() {
        lexgloss_cli::fatal("no input files (see --help)");
    }

    let mut annotator = lexgloss_cli::load_annotator(data_path.as_deref())
        .unwrap_or_else(|e| lexgloss_cli::fatal(&e));
    annotator.set_insert_style(insert_style);

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    let mut failures = 0;

    for file in files {
        let result = if to_stdout {
            std::fs::read_to_string(file)
                .map_err(|e| format!("failed to read {file}: {e}"))
                .and_then(|html| annotator.annotate_html(&html).map_err(|e| format!("{file}: {e}")))
                .map(|annotated| {
                    let _ = out.write_all(annotated.html.as_bytes());
                    annotated.report
                })
        } else {
            annotator.annotate_file(file).map_err(|e| e.to_string())
        };

        match result {
            Ok(report) => eprintln!("{file}: {} words marked", report.marked),
            Err(e) => {
                eprintln!("error: {e}");
                failures += 1;
            }
        }
    }

    let _ = out.flush();
    if failures > 0 {
        std::process::exit(1);
    }
}
