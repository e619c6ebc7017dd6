use std::path::PathBuf;

// Fixture tree checked in next to Cargo.toml:
//   Main.kt, MainTest.kt, NoKotlin.java, TestMain.kt, test_pkg/Foo.kt
pub fn testdata_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("testdata")
}

pub fn testdata_file(relative: &str) -> PathBuf {
    testdata_dir().join(relative)
}
