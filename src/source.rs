use std::fs::File;
use std::io::{self, BufRead, Write};
use std::path::Path;

use super::error::{MergeError, Result};
use super::line::{classify, LineKind};


// Output always uses CRLF, whatever the host platform.
const LINE_ENDING: &str = "\r\n";

/// A source file reduced to the parts that matter when flattening a project:
/// its package, its imports, and every other non-blank line.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SourceFile {
    pub name: String,
    pub package: Option<String>,
    pub imports: Vec<String>,
    pub code: Vec<String>,
}

impl SourceFile {
    pub fn parse<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let read_error = |source: io::Error| MergeError::Read {
            path: path.to_owned(),
            source,
        };

        let f = File::open(path).map_err(read_error)?;
        let mut reader = io::BufReader::new(f);

        let mut file = SourceFile {
            name: path.display().to_string(),
            ..SourceFile::default()
        };
        let mut buf = Vec::new();
        loop {
            buf.clear();
            if reader.read_until(b'\n', &mut buf).map_err(read_error)? == 0 {
                break;
            }
            // Bytes that are not valid UTF-8 are replaced rather than
            // failing the file.
            let line = String::from_utf8_lossy(trim_line_ending(&buf));
            match classify(&line) {
                LineKind::Import(text) => file.imports.push(text.to_owned()),
                // A later package line replaces an earlier one
                LineKind::Package(name) => file.package = Some(name.to_owned()),
                LineKind::Blank => {}
                LineKind::Code(text) => file.code.push(text.to_owned()),
            }
        }

        Ok(file)
    }

    /// Imports first, then a single blank line, then the code. An existing
    /// file at `path` is overwritten.
    pub fn write_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let write_error = |source: io::Error| MergeError::Write {
            path: path.to_owned(),
            source,
        };

        let f = File::create(path).map_err(write_error)?;
        let mut writer = io::BufWriter::new(f);
        self.write_to(&mut writer).map_err(write_error)?;
        writer.flush().map_err(write_error)
    }

    pub fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        for line in self.imports.iter() {
            write!(out, "{}{}", line, LINE_ENDING)?;
        }
        write!(out, "{}", LINE_ENDING)?;
        for line in self.code.iter() {
            write!(out, "{}{}", line, LINE_ENDING)?;
        }
        Ok(())
    }
}

fn trim_line_ending(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}
