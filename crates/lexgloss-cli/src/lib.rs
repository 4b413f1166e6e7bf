// lexgloss-cli: shared utilities for CLI tools.

use std::path::{Path, PathBuf};
use std::process;

use lexgloss_en::{Annotator, AnnotatorOptions, GlossLookup, KnownVocabulary};

/// Data directory name under the home directory.
const HOME_SUBDIR: &str = ".lexgloss";

/// Baseline vocabulary file name.
const BASELINE_TXT: &str = "baseline.txt";

/// Gloss dictionary file name.
const GLOSSES_JSON: &str = "glosses.json";

/// Search for data files and create an Annotator.
///
/// Search order:
/// 1. `data_path` argument (if provided)
/// 2. `LEXGLOSS_DATA_PATH` environment variable
/// 3. `~/.lexgloss`
/// 4. Current working directory
///
/// The first directory holding `baseline.txt` wins; its `glosses.json` is
/// used when present, the built-in gloss dictionary otherwise. With no data
/// directory found the built-in tables are used, unless `data_path` was
/// given explicitly.
pub fn load_annotator(data_path: Option<&str>) -> Result<Annotator, String> {
    let search_paths = build_search_paths(data_path);

    for dir in &search_paths {
        if dir.join(BASELINE_TXT).is_file() {
            return load_from_dir(dir);
        }
    }

    if let Some(explicit) = data_path {
        return Err(format!("could not find {BASELINE_TXT} in {explicit}"));
    }

    log::debug!(
        "no data directory found in {} locations, using built-in tables",
        search_paths.len()
    );
    Annotator::builtin().map_err(|e| format!("failed to load built-in tables: {e}"))
}

fn load_from_dir(dir: &Path) -> Result<Annotator, String> {
    let baseline_path = dir.join(BASELINE_TXT);
    let text = read(&baseline_path)?;
    let vocabulary = KnownVocabulary::parse(&text)
        .map_err(|e| format!("{}: {e}", baseline_path.display()))?;

    let glosses_path = dir.join(GLOSSES_JSON);
    let glosses = if glosses_path.is_file() {
        GlossLookup::from_json(&read(&glosses_path)?)
            .map_err(|e| format!("{}: {e}", glosses_path.display()))?
    } else {
        GlossLookup::builtin().map_err(|e| format!("failed to load built-in glosses: {e}"))?
    };

    log::debug!(
        "loaded {} base forms and {} glosses from {}",
        vocabulary.len(),
        glosses.len(),
        dir.display()
    );
    Ok(Annotator::new(vocabulary, glosses, AnnotatorOptions::default()))
}

fn read(path: &Path) -> Result<String, String> {
    std::fs::read_to_string(path).map_err(|e| format!("failed to read {}: {}", path.display(), e))
}

/// Build the list of directories to search for data files.
fn build_search_paths(data_path: Option<&str>) -> Vec<PathBuf> {
    let mut paths = Vec::new();

    if let Some(p) = data_path {
        paths.push(PathBuf::from(p));
        return paths;
    }

    if let Ok(env_path) = std::env::var("LEXGLOSS_DATA_PATH") {
        paths.push(PathBuf::from(env_path));
    }

    if let Some(home) = home_dir() {
        paths.push(home.join(HOME_SUBDIR));
    }

    if let Ok(cwd) = std::env::current_dir() {
        paths.push(cwd);
    }

    paths
}

/// Get the user's home directory.
fn home_dir() -> Option<PathBuf> {
    std::env::var("HOME").ok().map(PathBuf::from)
}

/// Parse a `--data-path=PATH` or `-d PATH` argument from command line args.
///
/// Returns `(data_path, remaining_args)`.
pub fn parse_data_path(args: &[String]) -> (Option<String>, Vec<String>) {
    let mut data_path = None;
    let mut remaining = Vec::new();
    let mut skip_next = false;

    for (i, arg) in args.iter().enumerate() {
        if skip_next {
            skip_next = false;
            continue;
        }
        if let Some(val) = arg.strip_prefix("--data-path=") {
            data_path = Some(val.to_string());
        } else if arg == "--data-path" || arg == "-d" {
            match args.get(i + 1) {
                Some(val) => {
                    data_path = Some(val.clone());
                    skip_next = true;
                }
                None => fatal(&format!("{arg} requires a value")),
            }
        } else {
            remaining.push(arg.clone());
        }
    }

    (data_path, remaining)
}

/// Print an error message and exit with code 1.
pub fn fatal(msg: &str) -> ! {
    eprintln!("error: {msg}");
    process::exit(1);
}

/// Check if `--help` or `-h` is in the args.
pub fn wants_help(args: &[String]) -> bool {
    args.iter().any(|a| a == "--help" || a == "-h")
}

/// Set up logging for a CLI tool. `RUST_LOG` overrides the default level.
pub fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
}
