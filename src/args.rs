use std::io::{self, Write};

use argparse::{ArgumentParser, Store, StoreTrue};

use super::discover::MATCH_ALL;

const DEFAULT_DIR: &str = "src";
const DEFAULT_OUTPUT_FILE: &str = "Merged.kt";

#[derive(Debug, PartialEq)]
pub struct Args {
    pub dir: String,
    pub extension_filter: String,
    pub output: String,
    pub skip_test_files: bool,
    pub verbose: bool,
}

impl Args {
    pub fn new() -> Self {
        Args{
            dir: DEFAULT_DIR.to_owned(),
            extension_filter: MATCH_ALL.to_owned(),
            output: DEFAULT_OUTPUT_FILE.to_owned(),
            skip_test_files: false,
            verbose: false,
        }
    }

    // Parse CLI arguments. This may exit.
    pub fn parse() -> Self {
        let argv = std::env::args().collect();
        match Self::parse_from(argv, &mut io::stdout(), &mut io::stderr()) {
            Ok(args) => args,
            Err(code) => std::process::exit(code),
        }
    }

    // `argv` includes the program name. On `--help` the usage text goes to
    // `stdout` and Err(0) is returned; bad input gives a non-zero code.
    pub fn parse_from(
        argv: Vec<String>,
        stdout: &mut dyn Write,
        stderr: &mut dyn Write,
    ) -> Result<Self, i32> {
        let mut args = Args::new();

        {
            let mut ap = ArgumentParser::new();
            ap.set_description("Merge the source files of a project into a single file");
            ap.refer(&mut args.dir).add_option(
                &["-d", "--dir"],
                Store,
                "source code directory");
            ap.refer(&mut args.extension_filter).add_option(
                &["-f", "--file"],
                Store,
                "only process files with this extension (* for all files)");
            ap.refer(&mut args.output).add_option(
                &["-o", "--output"],
                Store,
                "write merged code into this file");
            ap.refer(&mut args.skip_test_files).add_option(
                &["-t", "--skip-tests"],
                StoreTrue,
                "skip files with test in name (ignore case)");
            ap.refer(&mut args.verbose).add_option(
                &["-v", "--verbose"],
                StoreTrue,
                "log every file as it is processed");
            ap.parse(argv, stdout, stderr)?;
        }

        Ok(args)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn parse(argv: &[&str]) -> (Result<Args, i32>, String) {
        let mut argv_owned = vec!["mergkol".to_string()];
        argv_owned.extend(argv.iter().map(|s| s.to_string()));
        let mut stdout = Vec::new();
        let mut stderr = Vec::new();
        let result = Args::parse_from(argv_owned, &mut stdout, &mut stderr);
        (result, String::from_utf8(stdout).unwrap())
    }

    #[test]
    fn test_defaults() {
        let (result, _) = parse(&[]);
        let args = result.unwrap();
        assert_eq!("src", args.dir);
        assert_eq!("*", args.extension_filter);
        assert_eq!("Merged.kt", args.output);
        assert!(!args.skip_test_files);
        assert!(!args.verbose);
    }

    #[test]
    fn test_all_options() {
        let (result, _) = parse(&["--dir", "app/src", "-f", ".kt", "-o", "out/All.kt", "-t", "-v"]);
        assert_eq!(
            Args{
                dir: "app/src".to_string(),
                extension_filter: ".kt".to_string(),
                output: "out/All.kt".to_string(),
                skip_test_files: true,
                verbose: true,
            },
            result.unwrap()
        );
    }

    #[test]
    fn test_help_short_circuits() {
        let (result, stdout) = parse(&["--help"]);
        assert_eq!(Err(0), result);
        assert!(stdout.contains("--skip-tests"));
    }

    #[test]
    fn test_unknown_option() {
        let (result, _) = parse(&["--bogus"]);
        assert!(matches!(result, Err(code) if code != 0));
    }
}
