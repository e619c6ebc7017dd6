use itertools::Itertools;

use super::line::import_target;
use super::source::SourceFile;

/// Flattens `files` into one file. Code is concatenated in the order given.
/// Imports are deduplicated and any import of one of the merged packages is
/// dropped. The merged file has no name and no package.
///
/// The order of the merged imports is not guaranteed.
pub fn merge(files: Vec<SourceFile>) -> SourceFile {
    let mut imports = Vec::new();
    let mut code = Vec::new();
    let mut packages = Vec::new();

    for file in files {
        if let Some(package) = file.package {
            if !package.is_empty() {
                packages.push(package);
            }
        }
        imports.extend(file.imports);
        code.extend(file.code);
    }

    let mut imports = dedup_imports(imports);
    for package in packages.iter() {
        imports = remove_package_imports(imports, package);
    }

    SourceFile {
        imports,
        code,
        ..SourceFile::default()
    }
}

pub fn dedup_imports(imports: Vec<String>) -> Vec<String> {
    imports.into_iter().unique().collect()
}

// This is a plain prefix test on the import target: package `foo` also removes
// `import foobar.Baz`.
pub fn remove_package_imports(imports: Vec<String>, package: &str) -> Vec<String> {
    imports
        .into_iter()
        .filter(|import| !import_target(import).starts_with(package))
        .collect()
}
