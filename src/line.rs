// mod line

const IMPORT_KEYWORD: &str = "import";
const PACKAGE_KEYWORD: &str = "package";

/// What a single line of source contributes to a parsed file.
#[derive(Debug, PartialEq)]
pub enum LineKind<'a> {
    // The whole line, keyword included
    Import(&'a str),
    // Just the package name
    Package(&'a str),
    Blank,
    // The whole line, indentation included
    Code(&'a str),
}

// Classification only looks at the start of the (untrimmed) line, so an
// indented import is treated as code. First match wins.
pub fn classify(line: &str) -> LineKind<'_> {
    if line.starts_with(IMPORT_KEYWORD) {
        LineKind::Import(line)
    } else if let Some(rest) = line.strip_prefix(PACKAGE_KEYWORD) {
        LineKind::Package(rest.trim())
    } else if line.trim().is_empty() {
        LineKind::Blank
    } else {
        LineKind::Code(line)
    }
}

/// Returns what an import line refers to, e.g. `java.util.*` for
/// `import java.util.*`.
pub fn import_target(import_line: &str) -> &str {
    import_line
        .strip_prefix(IMPORT_KEYWORD)
        .unwrap_or(import_line)
        .trim()
}
