use std::path::Path;

/// Classified process invocation: option tokens and positional file paths.
///
/// A normal launch contributes one leading entry (the binary itself, whatever
/// it is named). A launch through a recognized wrapper contributes two: the
/// wrapper plus the program it was told to run. Everything after those is
/// either a flag (leading `-`) or a candidate file path; relative order is
/// preserved within each partition.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StartupArguments {
    pub flags: Vec<String>,
    pub paths: Vec<String>,
}

/// Basename prefix of wrappers that pass the target program as the second
/// argv entry, the way cargo subcommand shims do.
const WRAPPER_PREFIX: &str = "cargo";

impl StartupArguments {
    pub fn classify<I>(argv: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let argv: Vec<String> = argv.into_iter().collect();
        let Some(first) = argv.first() else {
            return Self::default();
        };

        let skip = if basename(first).starts_with(WRAPPER_PREFIX) {
            2.min(argv.len())
        } else {
            1
        };

        let mut flags = Vec::new();
        let mut paths = Vec::new();
        for token in &argv[skip..] {
            if token.starts_with('-') {
                flags.push(token.clone());
            } else {
                paths.push(token.clone());
            }
        }

        Self { flags, paths }
    }
}

fn basename(arg: &str) -> &str {
    Path::new(arg)
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or(arg)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn argv(tokens: &[&str]) -> Vec<String> {
        tokens.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_direct_launch_skips_binary_only() {
        let args = StartupArguments::classify(argv(&["/usr/bin/seapig", "notes.md", "-v"]));
        assert_eq!(args.paths, vec!["notes.md"]);
        assert_eq!(args.flags, vec!["-v"]);
    }

    #[test]
    fn test_renamed_binary_keeps_every_file_argument() {
        // A symlinked or renamed binary is still a one-entry launch.
        let args = StartupArguments::classify(argv(&["/usr/local/bin/mdedit", "a.md", "b.md"]));
        assert_eq!(args.paths, vec!["a.md", "b.md"]);
        assert!(args.flags.is_empty());
    }

    #[test]
    fn test_wrapper_launch_skips_two_entries() {
        let args = StartupArguments::classify(argv(&[
            "/usr/bin/cargo-seapig",
            "seapig",
            "--debug",
            "a.md",
            "b.txt",
        ]));
        assert_eq!(args.flags, vec!["--debug"]);
        assert_eq!(args.paths, vec!["a.md", "b.txt"]);
    }

    #[test]
    fn test_order_preserved_within_partitions() {
        let args = StartupArguments::classify(argv(&["seapig", "a.md", "-x", "b.md", "-y"]));
        assert_eq!(args.paths, vec!["a.md", "b.md"]);
        assert_eq!(args.flags, vec!["-x", "-y"]);
    }

    #[test]
    fn test_empty_input_yields_empty_partitions() {
        assert_eq!(StartupArguments::classify(Vec::new()), StartupArguments::default());
    }

    #[test]
    fn test_wrapper_with_no_further_arguments() {
        let args = StartupArguments::classify(argv(&["/usr/bin/cargo-seapig", "seapig"]));
        assert!(args.flags.is_empty());
        assert!(args.paths.is_empty());
    }

    #[test]
    fn test_wrapper_alone() {
        let args = StartupArguments::classify(argv(&["cargo"]));
        assert!(args.flags.is_empty());
        assert!(args.paths.is_empty());
    }
}
