use clex::{
    ast::{BinaryOperator, Expr, LiteralValue, Statement},
    error::{Diagnostics, ParseError},
    interpreter::{
        lexer::scan,
        parser::core::{MAX_NESTING, parse},
    },
    parse_source,
};

/// Parses `src` and prints every statement in prefix form.
fn printed(src: &str) -> Vec<String> {
    match parse_source(src) {
        Ok(statements) => statements.iter().map(ToString::to_string).collect(),
        Err(errors) => panic!("Parse failed: {errors:?}"),
    }
}

fn error_lines(src: &str) -> Vec<String> {
    match parse_source(src) {
        Ok(statements) => panic!("Parse succeeded but was expected to fail: {statements:?}"),
        Err(errors) => errors.iter().map(ToString::to_string).collect(),
    }
}

/// Parses with recovery, returning both the surviving statements and the
/// diagnostics.
fn parse_with_recovery(src: &str) -> (Vec<String>, Vec<ParseError>) {
    let mut diagnostics = Diagnostics::new();
    let tokens = scan(src, &mut diagnostics);
    let statements = parse(&tokens, &mut diagnostics);

    (statements.iter().map(ToString::to_string).collect(), diagnostics.errors().to_vec())
}

#[test]
fn precedence_tree() {
    let statements = parse_source("1 + 2 * 3;").unwrap();
    let number = |n: f64| Box::new(Expr::Literal { value: LiteralValue::Number(n),
                                                   line:  1, });

    assert_eq!(statements,
               [Statement::Expression { expr: Expr::Binary { left:  number(1.0),
                                                             op:    BinaryOperator::Add,
                                                             right:
                                                                 Box::new(Expr::Binary {
                                                                     left:  number(2.0),
                                                                     op:    BinaryOperator::Mul,
                                                                     right: number(3.0),
                                                                     line:  1,
                                                                 }),
                                                             line:  1, },
                                        line: 1, }]);
}

#[test]
fn binary_levels_are_left_associative() {
    assert_eq!(printed("1 - 2 - 3;"), ["(expr (- (- 1 2) 3))"]);
    assert_eq!(printed("8 / 4 * 2;"), ["(expr (* (/ 8 4) 2))"]);
    assert_eq!(printed("1 < 2 < 3;"), ["(expr (< (< 1 2) 3))"]);
    assert_eq!(printed("a == b != c;"), ["(expr (!= (== a b) c))"]);
}

#[test]
fn precedence_levels() {
    assert_eq!(printed("1 + 2 * 3 - 4 / 5;"), ["(expr (- (+ 1 (* 2 3)) (/ 4 5)))"]);
    assert_eq!(printed("1 < 2 == true;"), ["(expr (== (< 1 2) true))"]);
    assert_eq!(printed("-1 * 2;"), ["(expr (* (- 1) 2))"]);
}

#[test]
fn unary_nests_to_the_right() {
    assert_eq!(printed("!!true;"), ["(expr (! (! true)))"]);
    assert_eq!(printed("-(-1);"), ["(expr (- (group (- 1))))"]);
}

#[test]
fn grouping_overrides_precedence() {
    assert_eq!(printed("(1 + 2) * 3;"), ["(expr (* (group (+ 1 2)) 3))"]);
}

#[test]
fn literals() {
    assert_eq!(printed("nil; true; false; 1.5; \"s\";"),
               ["(expr nil)", "(expr true)", "(expr false)", "(expr 1.5)", "(expr \"s\")"]);
}

#[test]
fn assignment_is_right_associative() {
    assert_eq!(printed("a = b = 1;"), ["(expr (= a (= b 1)))"]);
    assert_eq!(printed("a = 1 + 2;"), ["(expr (= a (+ 1 2)))"]);
}

#[test]
fn declarations_and_statements() {
    assert_eq!(printed("var x; var y = \"s\"; print x;"),
               ["(var x)", "(var y \"s\")", "(print x)"]);
}

#[test]
fn blocks() {
    assert_eq!(printed("{ var a = 1; print a; }"), ["(block (var a 1) (print a))"]);
    assert_eq!(printed("{ { } }"), ["(block (block))"]);
}

#[test]
fn statement_lines() {
    let statements = parse_source("\nvar a = 1;\n\nprint a;").unwrap();
    assert!(matches!(statements[0], Statement::VarDeclaration { line: 2, .. }));
    assert!(matches!(statements[1], Statement::Print { line: 4, .. }));
}

#[test]
fn missing_semicolons() {
    assert_eq!(error_lines("print 1"),
               ["[line 1] Error at end: Expect ';' after value."]);
    assert_eq!(error_lines("var x = 1"),
               ["[line 1] Error at end: Expect ';' after variable declaration."]);
    assert_eq!(error_lines("1 + 2 3;"),
               ["[line 1] Error at '3': Expect ';' after expression."]);
}

#[test]
fn missing_variable_name() {
    assert_eq!(error_lines("var 1 = 2;"),
               ["[line 1] Error at '1': Expect variable name."]);
}

#[test]
fn missing_expression() {
    assert_eq!(error_lines("1 + ;"), ["[line 1] Error at ';': Expect expression."]);
    assert_eq!(error_lines("print"), ["[line 1] Error at end: Expect expression."]);
}

#[test]
fn missing_closing_delimiters() {
    assert_eq!(error_lines("(1 + 2;"),
               ["[line 1] Error at ';': Expect ')' after expression."]);
    assert_eq!(error_lines("{ print 1;"),
               ["[line 1] Error at end: Expect '}' after block."]);
}

#[test]
fn invalid_assignment_target() {
    assert_eq!(error_lines("1 + 2 = 3;"),
               ["[line 1] Error at '=': Invalid assignment target."]);
    assert_eq!(error_lines("var a;\n(a) = 1;"),
               ["[line 2] Error at '=': Invalid assignment target."]);
}

#[test]
fn nesting_up_to_the_limit_parses() {
    let groups = format!("print {}1{};", "(".repeat(MAX_NESTING), ")".repeat(MAX_NESTING));
    assert!(parse_source(&groups).is_ok());

    let negations = format!("print {}1;", "-".repeat(MAX_NESTING));
    assert!(parse_source(&negations).is_ok());
}

#[test]
fn nesting_past_the_limit_is_reported() {
    let (statements, errors) =
        parse_with_recovery(&format!("print {}1;\nprint 2;", "-".repeat(10_000)));
    assert_eq!(statements, ["(print 2)"]);
    assert_eq!(errors.iter().map(ToString::to_string).collect::<Vec<_>>(),
               ["[line 1] Error at '-': Too much nesting."]);

    let deep = MAX_NESTING + 1;
    assert_eq!(error_lines(&format!("{}1{};", "(".repeat(deep), ")".repeat(deep))),
               ["[line 1] Error at '(': Too much nesting."]);
    assert_eq!(error_lines(&format!("{}1;", "a = ".repeat(deep))),
               ["[line 1] Error at '=': Too much nesting."]);
    assert_eq!(error_lines(&format!("{}{}", "{".repeat(deep), "}".repeat(deep)))[0],
               "[line 1] Error at '{': Too much nesting.");
}

#[test]
fn independent_errors_are_all_reported() {
    assert_eq!(error_lines("print ;\nvar = 2;\nprint 3;"),
               ["[line 1] Error at ';': Expect expression.",
                "[line 2] Error at '=': Expect variable name."]);
}

#[test]
fn recovery_resumes_at_statement_keyword() {
    let (statements, errors) = parse_with_recovery("1 + 2 3 print 4;");

    assert_eq!(statements, ["(print 4)"]);
    assert_eq!(errors.len(), 1);
}

#[test]
fn recovery_resumes_after_semicolon() {
    let (statements, errors) = parse_with_recovery("var = 1; print 2;");

    assert_eq!(statements, ["(print 2)"]);
    assert_eq!(errors.len(), 1);
}

#[test]
fn failed_declaration_inside_block_is_dropped() {
    let (statements, errors) = parse_with_recovery("{ var = 1; print 2; }");

    assert_eq!(statements, ["(block (print 2))"]);
    assert_eq!(errors.len(), 1);
}

#[test]
fn lexical_and_syntax_errors_in_one_pass() {
    assert_eq!(error_lines("print \"oops;"),
               ["[line 1] Error: Unterminated string.",
                "[line 1] Error at end: Expect expression."]);
}

#[test]
fn error_at_end_is_not_consumed() {
    let (statements, errors) = parse_with_recovery("print 1 +");

    assert!(statements.is_empty());
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].line(), 1);
}
