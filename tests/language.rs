use clex::{
    error::{Error, RuntimeError},
    interpreter::evaluator::core::Interpreter,
    run,
};

fn output_of(src: &str) -> String {
    let mut interpreter = Interpreter::new(Vec::new());
    if let Err(e) = run(src, &mut interpreter) {
        panic!("Script failed: {e}");
    }
    String::from_utf8(interpreter.into_output()).expect("print output is UTF-8")
}

fn assert_prints(src: &str, expected: &[&str]) {
    let output = output_of(src);
    assert_eq!(output.lines().collect::<Vec<_>>(), expected, "script:\n{src}");
}

fn run_error(src: &str) -> Error {
    let mut interpreter = Interpreter::new(Vec::new());
    match run(src, &mut interpreter) {
        Ok(()) => panic!("Script succeeded but was expected to fail"),
        Err(e) => e,
    }
}

fn assert_runtime_error(src: &str, message: &str, line: usize) {
    match run_error(src) {
        Error::Runtime(e) => {
            assert_eq!(e.to_string(), message);
            assert_eq!(e.line(), line);
        },
        Error::Static(errors) => panic!("Expected a runtime error, got {errors:?}"),
    }
}

#[test]
fn arithmetic_precedence_and_associativity() {
    assert_prints("print 1 + 2 * 3;", &["7"]);
    assert_prints("print (1 + 2) * 3;", &["9"]);
    assert_prints("print 1 - 2 - 3;", &["-4"]);
    assert_prints("print 8 / 2 / 2;", &["2"]);
    assert_prints("print 10 / 4;", &["2.5"]);
    assert_prints("print -3 + 1;", &["-2"]);
    assert_prints("print --3;", &["3"]);
}

#[test]
fn division_by_zero_follows_ieee() {
    assert_prints("print 1 / 0;", &["inf"]);
    assert_prints("print -1 / 0;", &["-inf"]);
    assert_prints("print 0 / 0;", &["NaN"]);
}

#[test]
fn printed_text_forms() {
    assert_prints("print nil; print true; print false; print 3.0; print 2.5; print \"x\";",
                  &["nil", "true", "false", "3", "2.5", "x"]);
}

#[test]
fn string_concatenation() {
    assert_prints("print \"foo\" + \"bar\";", &["foobar"]);
    assert_prints("var a = \"a\"; var b = a + a; print b + a;", &["aaa"]);
}

#[test]
fn truthiness() {
    assert_prints("print !nil; print !false; print !true; print !0; print !\"\"; print !!\"x\";",
                  &["true", "true", "false", "false", "false", "true"]);
}

#[test]
fn equality_across_types() {
    assert_prints("print 1 == \"1\";", &["false"]);
    assert_prints("print \"a\" == \"a\";", &["true"]);
    assert_prints("print \"a\" != \"b\";", &["true"]);
    assert_prints("print nil == nil;", &["true"]);
    assert_prints("print nil == false;", &["false"]);
    assert_prints("print true == true;", &["true"]);
    assert_prints("print 0 / 0 == 0 / 0;", &["true"]);
}

#[test]
fn comparisons() {
    assert_prints("print 1 < 2; print 2 <= 2; print 3 > 4; print 3 >= 3;",
                  &["true", "true", "false", "true"]);
    assert_prints("print 1 < 2 == true;", &["true"]);
}

#[test]
fn uninitialized_variable_is_nil() {
    assert_prints("var a; print a;", &["nil"]);
}

#[test]
fn redeclaring_a_variable_overwrites_it() {
    assert_prints("var a = 1; var a = 2; print a;", &["2"]);
}

#[test]
fn assignment_overwrites_existing_binding() {
    assert_prints("var a = 1; a = 2; print a; a = a + 1; print a;", &["2", "3"]);
}

#[test]
fn assignment_is_an_expression() {
    assert_prints("var a; var b; a = b = 3; print a; print b;", &["3", "3"]);
    assert_prints("var a = 1; print a = 2; print a;", &["2", "2"]);
}

#[test]
fn block_assigns_to_enclosing_variable() {
    assert_prints("var x = 1; { x = 2; } print x;", &["2"]);
    assert_prints("var x = 1; { { x = x + 10; } } print x;", &["11"]);
}

#[test]
fn block_shadowing() {
    assert_prints("var a = \"outer\"; { var a = \"inner\"; print a; } print a;",
                  &["inner", "outer"]);
}

#[test]
fn nested_blocks_see_all_enclosing_scopes() {
    assert_prints("var a = 1; { var b = 2; { var c = 3; print a + b + c; } }", &["6"]);
}

#[test]
fn block_locals_are_discarded() {
    assert_runtime_error("{ var y = 1; }\nprint y;", "Undefined variable 'y'.", 2);
}

#[test]
fn undefined_variable_read_and_write() {
    assert_runtime_error("print z;", "Undefined variable 'z'.", 1);
    assert_runtime_error("z = 1;", "Undefined variable 'z'.", 1);
}

#[test]
fn operand_type_errors() {
    assert_runtime_error("print -\"a\";", "Operand must be a number.", 1);
    assert_runtime_error("print 1 + \"a\";",
                         "Operands must be two numbers or two strings.",
                         1);
    assert_runtime_error("print nil + nil;",
                         "Operands must be two numbers or two strings.",
                         1);
    assert_runtime_error("print \"a\" < 1;", "Operands must be two numbers.", 1);
    assert_runtime_error("print 2 * nil;", "Operands must be two numbers.", 1);
    assert_runtime_error("print true - 1;", "Operands must be two numbers.", 1);
}

#[test]
fn runtime_error_reports_operator_line() {
    assert_runtime_error("var a = 1;\n\nprint a\n+\n\"x\";",
                         "Operands must be two numbers or two strings.",
                         4);
}

#[test]
fn runtime_error_display_format() {
    let error = run_error("print -nil;");
    assert_eq!(error.to_string(), "Operand must be a number.\n[line] 1]");
    assert_eq!(error.exit_code(), 70);
}

#[test]
fn runtime_error_stops_remaining_statements() {
    let mut interpreter = Interpreter::new(Vec::new());
    let result = run("print 1; print -nil; print 2;", &mut interpreter);

    assert!(matches!(result,
                     Err(Error::Runtime(RuntimeError::ExpectedNumber { line: 1 }))));
    assert_eq!(interpreter.output(), b"1\n");
}

#[test]
fn scope_is_restored_after_runtime_error() {
    let mut interpreter = Interpreter::new(Vec::new());

    assert!(run("var x = 1; { var x = 2; { print -\"a\"; } }", &mut interpreter).is_err());
    assert_eq!(interpreter.environment().depth(), 1);

    run("print x;", &mut interpreter).unwrap();
    assert_eq!(interpreter.output(), b"1\n");
}

#[test]
fn static_errors_prevent_evaluation() {
    let mut interpreter = Interpreter::new(Vec::new());
    let error = run("print 1;\nprint 2 +;", &mut interpreter).unwrap_err();

    assert_eq!(error.exit_code(), 65);
    assert_eq!(error.to_string(), "[line 2] Error at ';': Expect expression.");
    assert!(interpreter.output().is_empty());
}

#[test]
fn lexical_errors_prevent_evaluation() {
    let mut interpreter = Interpreter::new(Vec::new());
    let error = run("print 1; @", &mut interpreter).unwrap_err();

    assert!(matches!(error, Error::Static(_)));
    assert!(interpreter.output().is_empty());
}

#[test]
fn globals_persist_across_runs() {
    let mut interpreter = Interpreter::new(Vec::new());

    run("var count = 1;", &mut interpreter).unwrap();
    run("count = count + 1;", &mut interpreter).unwrap();
    assert!(run("print missing;", &mut interpreter).is_err());
    run("print count;", &mut interpreter).unwrap();

    assert_eq!(interpreter.output(), b"2\n");
}

#[test]
fn multiline_strings_advance_the_line_count() {
    assert_prints("print \"a\nb\";", &["a", "b"]);
    assert_runtime_error("\"a\nb\"; print -nil;", "Operand must be a number.", 2);
}

#[test]
fn comments_and_whitespace_are_ignored() {
    assert_prints("// leading comment\r\n\tprint 1; // trailing\n// print 2;", &["1"]);
}

#[test]
fn empty_program_does_nothing() {
    assert_prints("", &[]);
    assert_prints("// only a comment", &[]);
}
