use std::{fs, path::Path};

use clex::{interpreter::evaluator::core::Interpreter, run};
use walkdir::WalkDir;

const EXPECT: &str = "// expect: ";
const ERROR: &str = "// error: ";

#[test]
fn script_fixtures_match_expectations() {
    let root = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/scripts");
    let mut count = 0;

    for entry in
        WalkDir::new(&root).sort_by_file_name()
                           .into_iter()
                           .filter_map(Result::ok)
                           .filter(|e| e.path().extension().is_some_and(|ext| ext == "lox"))
    {
        count += 1;
        check_script(entry.path());
    }

    assert!(count > 0, "No scripts found in {}", root.display());
}

/// Runs one fixture and compares its output and diagnostics with the
/// `// expect:` and `// error:` comments it contains.
fn check_script(path: &Path) {
    let source =
        fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

    let expected_output = comments_after(&source, EXPECT);
    let expected_errors = comments_after(&source, ERROR);

    let mut interpreter = Interpreter::new(Vec::new());
    let errors = match run(&source, &mut interpreter) {
        Ok(()) => Vec::new(),
        Err(e) => e.to_string().lines().map(str::to_string).collect(),
    };
    let output = String::from_utf8(interpreter.into_output()).expect("print output is UTF-8");

    assert_eq!(output.lines().collect::<Vec<_>>(),
               expected_output,
               "output of {path:?}");
    assert_eq!(errors, expected_errors, "errors of {path:?}");
}

fn comments_after<'a>(source: &'a str, marker: &str) -> Vec<&'a str> {
    source.lines()
          .filter_map(|line| line.find(marker).map(|at| &line[at + marker.len()..]))
          .collect()
}
