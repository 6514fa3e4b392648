use std::fs;
use std::path::{Path, PathBuf};

const INPUT_MARKER: &str = "=== INPUT ===";
const OUTPUT_MARKER: &str = "=== OUTPUT ===";

/// Compares `render(path, source)` against `<input>.snap` for every `*.expr` file in `dir`.
///
/// A missing golden file is written and the test fails so it can be reviewed.
/// Run with `BLESS=1` to rewrite every golden file from the current output.
pub fn run_golden_dir<F>(test_name: &str, dir: &Path, mut render: F)
where
    F: FnMut(&Path, &str) -> String,
{
    let mut inputs: Vec<PathBuf> = fs::read_dir(dir)
        .unwrap_or_else(|e| panic!("failed to read test dir {:?}: {}", dir, e))
        .filter_map(|ent| ent.ok().map(|e| e.path()))
        .filter(|p| p.extension().is_some_and(|ext| ext == "expr"))
        .collect();
    inputs.sort();
    assert!(!inputs.is_empty(), "no *.expr inputs in {:?}", dir);

    let bless = std::env::var_os("BLESS").is_some();

    for input in inputs {
        let source = fs::read_to_string(&input)
            .unwrap_or_else(|e| panic!("failed to read {:?}: {}", input, e));
        let actual = normalize_output(&render(&input, &source));
        let golden_path = input.with_extension("snap");

        if bless {
            write_golden(&golden_path, &source, &actual);
            continue;
        }

        let Ok(golden) = fs::read_to_string(&golden_path) else {
            write_golden(&golden_path, &source, &actual);
            panic!(
                "generated missing golden file {:?}; review it, then re-run `cargo test {}`",
                golden_path, test_name
            );
        };

        assert_eq!(
            normalize_output(output_section(&golden)),
            actual,
            "golden mismatch for {:?}\nTo update: BLESS=1 cargo test {}",
            input,
            test_name
        );
    }
}

fn write_golden(path: &Path, source: &str, output: &str) {
    let mut contents = format!("{INPUT_MARKER}\n{source}");
    if !contents.ends_with('\n') {
        contents.push('\n');
    }
    contents.push_str(OUTPUT_MARKER);
    contents.push('\n');
    contents.push_str(output);

    fs::write(path, contents)
        .unwrap_or_else(|e| panic!("failed to write golden file {:?}: {}", path, e));
}

fn output_section(contents: &str) -> &str {
    match contents.split_once(OUTPUT_MARKER) {
        Some((_, rest)) => rest
            .strip_prefix("\r\n")
            .or_else(|| rest.strip_prefix('\n'))
            .unwrap_or(rest),
        None => contents,
    }
}

// Only trailing whitespace is normalized; every line ends with '\n'.
fn normalize_output(s: &str) -> String {
    s.lines().map(|line| format!("{}\n", line.trim_end())).collect()
}
