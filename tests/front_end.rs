use bpp::{
    ast::{BinaryOperator, Expr, ForLoop, Statement},
    error::{Error, LexError, ParseError},
    execute,
    interpreter::{
        lexer::{Keyword, Position, Token, tokenize},
        parser::core::{MAX_NESTING_DEPTH, parse_program},
    },
    run, run_with_report,
};

fn tokens_of(src: &str) -> Vec<Token> {
    tokenize(src).unwrap_or_else(|e| panic!("Lexing failed: {e}"))
                 .into_iter()
                 .map(|(token, _)| token)
                 .collect()
}

fn parse(src: &str) -> Vec<Statement> {
    let tokens = tokenize(src).unwrap_or_else(|e| panic!("Lexing failed: {e}"));
    parse_program(&tokens).unwrap_or_else(|e| panic!("Parsing failed: {e}"))
                          .statements
}

fn parse_error(src: &str) -> ParseError {
    match execute(src) {
        Err(Error::Parse(e)) => e,
        other => panic!("Expected a parse error, got {other:?}"),
    }
}

fn var(name: &str) -> Expr {
    Expr::Variable(name.to_string())
}

#[test]
fn operators_use_one_character_lookahead() {
    assert_eq!(tokens_of("= == > >= < <="),
               vec![Token::Assign,
                    Token::EqualEqual,
                    Token::Greater,
                    Token::GreaterEqual,
                    Token::Less,
                    Token::LessEqual,
                    Token::Eof]);
    assert_eq!(tokens_of("a=>=b"),
               vec![Token::Ident("a".into()),
                    Token::Assign,
                    Token::GreaterEqual,
                    Token::Ident("b".into()),
                    Token::Eof]);
}

#[test]
fn keywords_are_reclassified() {
    assert_eq!(tokens_of("dhori dekhao jodi nahole nahole-jodi ghuri dhorix"),
               vec![Token::Keyword(Keyword::Dhori),
                    Token::Keyword(Keyword::Dekhao),
                    Token::Keyword(Keyword::Jodi),
                    Token::Keyword(Keyword::Nahole),
                    Token::Keyword(Keyword::NaholeJodi),
                    Token::Keyword(Keyword::Ghuri),
                    Token::Ident("dhorix".into()),
                    Token::Eof]);
}

#[test]
fn identifiers_swallow_hyphens_and_digits() {
    assert_eq!(tokens_of("a-b x1 12ab"),
               vec![Token::Ident("a-b".into()),
                    Token::Ident("x1".into()),
                    Token::Number(12),
                    Token::Ident("ab".into()),
                    Token::Eof]);
}

#[test]
fn positions_are_one_based() {
    let tokens = tokenize("dhori x = 5;\n  dekhao x;").unwrap();
    let positions: Vec<(usize, usize)> =
        tokens.iter().map(|(_, p)| (p.line, p.column)).collect();

    assert_eq!(positions,
               vec![(1, 1), (1, 7), (1, 9), (1, 11), (1, 12), (2, 3), (2, 10), (2, 11), (2, 12)]);
}

#[test]
fn eof_sits_at_end_of_input() {
    assert_eq!(tokenize("").unwrap(),
               vec![(Token::Eof, Position { line: 1, column: 1 })]);
    assert_eq!(tokenize("x\n\n").unwrap().last(),
               Some(&(Token::Eof, Position { line: 3, column: 1 })));
}

#[test]
fn unexpected_character_is_reported_with_position() {
    assert_eq!(tokenize("dhori x = 1;\ndekhao x % 2;"),
               Err(LexError::UnexpectedCharacter { character: '%',
                                                   position:  Position { line:   2,
                                                                         column: 10, }, }));
    assert_eq!(execute("dekhao @;").unwrap_err().to_string(),
               "Unexpected character: '@' at line 1, col 8");
}

#[test]
fn oversized_literal_is_a_lex_error() {
    assert!(matches!(tokenize("dekhao 99999999999999999999;"),
                     Err(LexError::LiteralTooLarge { .. })));
}

#[test]
fn unicode_whitespace_is_skipped() {
    assert_eq!(tokens_of("dekhao\u{a0}1;"),
               vec![Token::Keyword(Keyword::Dekhao),
                    Token::Number(1),
                    Token::Semi,
                    Token::Eof]);
}

#[test]
fn unary_minus_is_desugared() {
    assert_eq!(parse("dekhao -x;"),
               vec![Statement::Print { value: Expr::binary(Expr::Number(0),
                                                           BinaryOperator::Sub,
                                                           var("x")) }]);
}

#[test]
fn subtraction_folds_left() {
    let expected = Expr::binary(Expr::binary(Expr::Number(10), BinaryOperator::Sub, Expr::Number(3)),
                                BinaryOperator::Sub,
                                Expr::Number(2));

    assert_eq!(parse("dekhao 10 - 3 - 2;"),
               vec![Statement::Print { value: expected }]);
}

#[test]
fn comparison_binds_loosest() {
    let expected = Expr::binary(Expr::binary(var("a"), BinaryOperator::Add, Expr::Number(1)),
                                BinaryOperator::GreaterEqual,
                                Expr::binary(var("b"), BinaryOperator::Mul, Expr::Number(2)));

    assert_eq!(parse("dekhao a + 1 >= b * 2;"),
               vec![Statement::Print { value: expected }]);
}

#[test]
fn loop_header_shape() {
    let expected =
        Statement::For(ForLoop { init:      Box::new(Statement::VariableDeclaration { name:  "i".into(),
                                                                                     value: Expr::Number(0), }),
                                 condition: Expr::binary(var("i"), BinaryOperator::Less, Expr::Number(3)),
                                 update:    Box::new(Statement::Assignment { name:  "i".into(),
                                                                             value:
                                                                                 Expr::binary(var("i"),
                                                                                              BinaryOperator::Add,
                                                                                              Expr::Number(1)), }),
                                 body:      vec![] });

    assert_eq!(parse("ghuri (dhori i = 0; i < 3; i = i + 1) { }"), vec![expected]);
}

#[test]
fn if_without_else() {
    assert_eq!(parse("jodi 1 { dekhao 2; }"),
               vec![Statement::If { condition:   Expr::Number(1),
                                    then_branch: vec![Statement::Print { value: Expr::Number(2) }],
                                    else_branch: None, }]);
    assert_eq!(parse("jodi 1 { } nahole { }"),
               vec![Statement::If { condition:   Expr::Number(1),
                                    then_branch: vec![],
                                    else_branch: Some(vec![]), }]);
}

#[test]
fn missing_semicolon_reports_expected_and_found() {
    assert_eq!(parse_error("dekhao 1"),
               ParseError::Expected { expected: "';'".to_string(),
                                      found:    Token::Eof,
                                      position: Position { line: 1, column: 9 }, });
}

#[test]
fn loop_update_rejects_semicolon() {
    assert!(matches!(parse_error("ghuri (dhori i = 0; i < 3; i = i + 1;) { }"),
                     ParseError::Expected { found: Token::Semi, .. }));
}

#[test]
fn loop_init_must_be_a_declaration() {
    assert!(matches!(parse_error("ghuri (i = 0; i < 3; i = i + 1) { }"),
                     ParseError::Expected { found: Token::Ident(_), .. }));
}

#[test]
fn else_if_fails_as_unknown_statement() {
    assert_eq!(parse_error("jodi 1 { } nahole-jodi 1 { }"),
               ParseError::UnknownStatement { token:    Token::Keyword(Keyword::NaholeJodi),
                                              position: Position { line: 1, column: 12 }, });
}

#[test]
fn unknown_statement_and_unexpected_token() {
    assert!(matches!(parse_error("5;"),
                     ParseError::UnknownStatement { token: Token::Number(5), .. }));
    assert!(matches!(parse_error("dekhao ;"),
                     ParseError::UnexpectedToken { token: Token::Semi, .. }));
    assert!(matches!(parse_error("jodi 1 { dekhao 1;"),
                     ParseError::UnknownStatement { token: Token::Eof, .. }));
}

#[test]
fn parse_errors_stop_before_evaluation() {
    let report = run_with_report("dekhao 1; dekhao 2");

    assert!(!report.outcome.success);
    assert!(!report.lines.iter().any(|line| line == "1"));
    assert!(!report.lines.iter().any(|line| line.starts_with("[PHASE 3]")));
}

#[test]
fn report_transcript_on_success() {
    let report = run_with_report("dhori x = 2;\ndekhao x * 3;");

    assert_eq!(report.lines,
               vec!["[PHASE 1] Lexical Analysis...",
                    "Tokenization successful. 11 tokens generated.",
                    "",
                    "[PHASE 2] Syntax Analysis (Parsing)...",
                    "Parsing successful. AST generated.",
                    "",
                    "[PHASE 3] Semantic Analysis & Interpretation...",
                    "",
                    "Program Output:",
                    "------------------------------",
                    "6",
                    "------------------------------",
                    "",
                    "Execution successful."]);
    assert_eq!(report.outcome.output_lines, vec!["6"]);
}

#[test]
fn report_transcript_on_failure() {
    let report = run_with_report("dekhao 1 / 0;");

    assert_eq!(report.lines.last().map(String::as_str),
               Some("ERROR: Runtime error: division by zero"));
    assert!(report.outcome.output_lines.is_empty());
    assert_eq!(report.to_string().lines().count(), report.lines.len());

    let report = run_with_report("dekhao #;");
    assert_eq!(report.lines,
               vec!["[PHASE 1] Lexical Analysis...",
                    "ERROR: Unexpected character: '#' at line 1, col 8"]);
}

fn nested(open: &str, inner: &str, close: &str, depth: usize) -> String {
    format!("{}{inner}{}", open.repeat(depth), close.repeat(depth))
}

#[test]
fn long_operator_chains_evaluate() {
    let sum = format!("dekhao {};", vec!["1"; 100_000].join(" + "));
    assert_eq!(execute(&sum).unwrap(), vec!["100000"]);

    let product = format!("dekhao 3 * {} - 2;", vec!["1"; 100_000].join(" * "));
    assert_eq!(execute(&product).unwrap(), vec!["1"]);
}

#[test]
fn nesting_up_to_the_limit_is_accepted() {
    let parens = format!("dekhao {};", nested("(", "5", ")", MAX_NESTING_DEPTH));
    assert_eq!(execute(&parens).unwrap(), vec!["5"]);

    let minus = format!("dekhao {}5;", "-".repeat(MAX_NESTING_DEPTH));
    assert_eq!(execute(&minus).unwrap(), vec!["5"]);

    let blocks = nested("jodi 1 { ", "dekhao 7; ", "} ", MAX_NESTING_DEPTH);
    assert_eq!(execute(&blocks).unwrap(), vec!["7"]);
}

#[test]
fn nesting_past_the_limit_is_a_parse_error() {
    assert_eq!(parse_error(&format!("dekhao {};", nested("(", "1", ")", MAX_NESTING_DEPTH + 1))),
               ParseError::NestingTooDeep { position: Position { line:   1,
                                                                 column: 8 + MAX_NESTING_DEPTH, }, });
    assert!(matches!(parse_error(&format!("dekhao {}1;", "-".repeat(MAX_NESTING_DEPTH + 1))),
                     ParseError::NestingTooDeep { .. }));
    assert!(matches!(parse_error(&nested("jodi 1 { ", "", "} ", MAX_NESTING_DEPTH + 1)),
                     ParseError::NestingTooDeep { .. }));
}

#[test]
fn huge_nesting_fails_instead_of_aborting() {
    let outcome = run(&format!("dekhao {};", nested("(", "1", ")", 100_000)));
    assert!(!outcome.success);
    assert_eq!(outcome.error_message.as_deref(),
               Some("Error on line 1, column 264: Nesting is too deep."));

    assert!(!run(&format!("dekhao {}1;", "-".repeat(100_000))).success);
    assert!(!run(&nested("jodi 1 { ", "dekhao 1; ", "} ", 5_000)).success);
    assert!(!run(&nested("ghuri (dhori i = 0; i < 1; i = i + 1) { ", "", "} ", 5_000)).success);
}
