use seals::{
    Expr, LexError, ParseError, Session, Token, Value,
    ast::{ArithmeticOperator, UnaryOperator},
    evaluate, parse, tokenize,
};

fn tree(src: &str) -> Expr {
    parse(&tokenize(src).unwrap()).unwrap_or_else(|e| panic!("{src:?} failed to parse: {e}"))
}

fn num(n: f64) -> Expr {
    Expr::NumberLiteral(n)
}

fn var(name: &str) -> Expr {
    Expr::Variable(name.to_string())
}

#[test]
fn tokens_carry_columns_and_end_with_eof() {
    let tokens = tokenize("x <= 10").unwrap();

    assert_eq!(tokens,
               vec![(Token::Identifier("x".to_string()), 1),
                    (Token::LessEqual, 3),
                    (Token::Number("10".to_string()), 6),
                    (Token::Eof, 8)]);
}

#[test]
fn empty_source_is_just_eof() {
    assert_eq!(tokenize("").unwrap(), vec![(Token::Eof, 1)]);
    assert_eq!(tokenize("   // note").unwrap(), vec![(Token::Eof, 11)]);
}

#[test]
fn operator_spellings_share_tokens() {
    let kinds = |src: &str| {
        tokenize(src).unwrap()
                      .into_iter()
                      .map(|(token, _)| token)
                      .collect::<Vec<_>>()
    };

    assert_eq!(kinds("and && &"), vec![Token::And, Token::And, Token::And, Token::Eof]);
    assert_eq!(kinds("or || |"), vec![Token::Or, Token::Or, Token::Or, Token::Eof]);
    assert_eq!(kinds("not ! !="), vec![Token::Not, Token::Not, Token::BangEqual, Token::Eof]);
    assert_eq!(kinds("= == <"), vec![Token::Equals, Token::EqualEqual, Token::Less, Token::Eof]);
}

#[test]
fn keywords_are_whole_words_only() {
    let tokens = tokenize("letter android").unwrap();

    assert_eq!(tokens[0].0, Token::Identifier("letter".to_string()));
    assert_eq!(tokens[1].0, Token::Identifier("android".to_string()));
}

#[test]
fn true_and_false_lex_as_identifiers() {
    let tokens = tokenize("true false").unwrap();

    assert_eq!(tokens[0].0, Token::Identifier("true".to_string()));
    assert_eq!(tokens[1].0, Token::Identifier("false".to_string()));
}

#[test]
fn malformed_numbers_lex_then_fail_to_parse() {
    let tokens = tokenize("1..2").unwrap();
    assert_eq!(tokens[0].0, Token::Number("1..2".to_string()));

    assert_eq!(parse(&tokens).unwrap_err(),
               ParseError::InvalidNumber { literal: "1..2".to_string(),
                                           column:  1, });
}

#[test]
fn unicode_identifiers_and_columns() {
    let tokens = tokenize("é + ñ_1").unwrap();

    assert_eq!(tokens,
               vec![(Token::Identifier("é".to_string()), 1),
                    (Token::Plus, 3),
                    (Token::Identifier("ñ_1".to_string()), 5),
                    (Token::Eof, 8)]);
}

#[test]
fn unrecognized_character_reports_column() {
    let err = tokenize("1 + $").unwrap_err();

    assert_eq!(err,
               LexError::UnrecognizedCharacter { character: '$',
                                                 column:    5, });
    assert_eq!(err.to_string(), "Error at column 5: Unrecognized character '$'.");
}

#[test]
fn binary_levels_fold_left() {
    assert_eq!(tree("1 - 2 - 3"),
               Expr::binary(ArithmeticOperator::Sub,
                            Expr::binary(ArithmeticOperator::Sub, num(1.0), num(2.0)),
                            num(3.0)));
    assert_eq!(tree("a or b and c").to_string(), "(a or (b and c))");
    assert_eq!(tree("a == b < c + d * e ^ f").to_string(), "(a == (b < (c + (d * (e ^ f)))))");
}

#[test]
fn unary_operators_nest() {
    assert_eq!(tree("not -x"),
               Expr::unary(UnaryOperator::Not, Expr::unary(UnaryOperator::Negate, var("x"))));
}

#[test]
fn calls_and_let_bindings() {
    assert_eq!(tree("max(1, y)"),
               Expr::Call { name:      "max".to_string(),
                            arguments: vec![num(1.0), var("y")], });
    assert_eq!(tree("f()"),
               Expr::Call { name:      "f".to_string(),
                            arguments: vec![], });
    assert_eq!(tree("let v = 'hi'"),
               Expr::Assign { name:  "v".to_string(),
                              value: Box::new(Expr::StringLiteral("hi".to_string())), });
}

#[test]
fn parse_keeps_only_the_last_statement() {
    assert_eq!(tree("let a = 1; let b = 2; a"), var("a"));
}

#[test]
fn parse_error_messages_name_the_column() {
    let err = parse(&tokenize("(1 + 2").unwrap()).unwrap_err();
    assert_eq!(err, ParseError::ExpectedClosingParen { column: 7 });

    let err = parse(&tokenize("2 * ,").unwrap()).unwrap_err();
    assert_eq!(err.to_string(), "Error at column 5: Expected expression, found ','.");

    let err = parse(&tokenize("").unwrap()).unwrap_err();
    assert_eq!(err.to_string(), "Error at column 1: Unexpected end of input.");
}

#[test]
fn nesting_stops_at_the_depth_limit() {
    let deepest = format!("{}1{}", "(".repeat(127), ")".repeat(127));
    assert_eq!(tree(&deepest), num(1.0));

    let groups = format!("{}1{}", "(".repeat(1000), ")".repeat(1000));
    assert_eq!(parse(&tokenize(&groups).unwrap()).unwrap_err(),
               ParseError::TooDeep { column: 128 });

    let negations = format!("{}1", "-".repeat(1000));
    assert_eq!(parse(&tokenize(&negations).unwrap()).unwrap_err(),
               ParseError::TooDeep { column: 128 });

    let calls = format!("{}x{}", "abs(".repeat(1000), ")".repeat(1000));
    assert!(matches!(parse(&tokenize(&calls).unwrap()).unwrap_err(),
                     ParseError::TooDeep { .. }));
}

#[test]
fn long_operator_chains_stop_at_the_depth_limit() {
    let longest = vec!["1"; 128].join("+");
    assert_eq!(tree(&longest).height(), 128);

    let chain = vec!["1"; 10_000].join("+");
    let err = parse(&tokenize(&chain).unwrap()).unwrap_err();

    assert_eq!(err, ParseError::TooDeep { column: 256 });
    assert_eq!(err.to_string(), "Error at column 256: Expression is nested too deeply.");
}

#[test]
fn chain_height_counts_nested_operands() {
    // the group is two levels tall, leaving room for 126 folds
    let chain = format!("(1*1)+{}", vec!["1"; 126].join("+"));
    assert_eq!(tree(&chain).height(), 128);

    let chain = format!("(1*1)+{}", vec!["1"; 127].join("+"));
    assert!(matches!(parse(&tokenize(&chain).unwrap()).unwrap_err(),
                     ParseError::TooDeep { .. }));
}

#[test]
fn evaluate_hand_built_trees() {
    let mut session = Session::new();
    let assign = Expr::Assign { name:  "n".to_string(),
                                value: Box::new(Expr::binary(ArithmeticOperator::Pow,
                                                             num(2.0),
                                                             num(5.0))), };

    assert_eq!(evaluate(&assign, &mut session).unwrap(), Value::Number(32.0));
    assert_eq!(evaluate(&var("N"), &mut session).unwrap(), Value::Number(32.0));
    assert_eq!(evaluate(&Expr::BooleanLiteral(false), &mut session).unwrap(),
               Value::Boolean(false));
}

#[test]
fn evaluate_does_not_touch_other_sessions() {
    let mut first = Session::new();
    let mut second = Session::new();

    evaluate(&tree("let only_here = 1"), &mut first).unwrap();

    assert!(evaluate(&var("only_here"), &mut second).is_err());
    assert!(first.environment.contains("ONLY_HERE"));
}
