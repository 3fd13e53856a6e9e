#[cfg(test)]
/// Parser unit tests.
///
/// These cover acceptance of each grammar form, the lookahead disambiguation rules, and the single-verdict
/// reporting contract.
mod tests {
    use super::*;

    fn parse_str(source: &str) -> (Result<(), SyntaxError>, Vec<Diagnostic>) {
        let buffer = SourceBuffer::new(source).unwrap();
        let mut diagnostics: Vec<Diagnostic> = Vec::new();
        let result = check(&buffer, &mut diagnostics);
        (result, diagnostics)
    }

    fn accepts(source: &str) -> bool {
        parse_str(source).0.is_ok()
    }

    fn reject(source: &str) -> SyntaxError {
        parse_str(source)
            .0
            .expect_err(&format!("expected a syntax error for {source:?}"))
    }

    #[test]
    fn test_reference_program_is_accepted() {
        let (result, diagnostics) = parse_str("int main(){int x;while(x<10){x=x+1;}return x;}");
        assert!(result.is_ok());
        assert_eq!(diagnostics, vec![Diagnostic::info("parser has no errors")]);
    }

    #[test]
    fn test_missing_semicolon_points_at_closing_brace() {
        let (result, diagnostics) = parse_str("int main(){int x;while(x<10){x=x+1;}return x}");
        let err = result.unwrap_err();
        assert_eq!((err.image.as_str(), err.line, err.column), ("}", 1, 45));
        assert_eq!(err.expected, "';' expected");
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(
            diagnostics[0].message,
            "syntax error: wrong token '}' at 1:45; ';' expected"
        );
    }

    #[test]
    fn test_empty_program_is_accepted() {
        assert!(accepts(""));
        assert!(accepts("  // nothing here\n/* at all */\n"));
    }

    #[test]
    fn test_main_detected_by_second_token() {
        assert!(accepts("int main(){}"));
        assert!(accepts("int x; int main(){} int y;"));
        // `main` is reserved, so it can never be a declarator name.
        assert_eq!(reject("int main;").expected, "'(' expected");
        assert_eq!(reject("long main(){}").expected, "'int' keyword expected before 'main'");
    }

    #[test]
    fn test_user_typed_declaration_needs_two_identifiers() {
        assert!(accepts("int main(){ Foo bar; bar = 1; }"));
        assert!(accepts("int main(){ Foo bar, baz = 2; }"));
        let err = reject("int main(){ bar 1; }");
        assert_eq!(err.expected, "'=' expected");
        assert_eq!(err.image, "1");
    }

    #[test]
    fn test_top_level_declarations() {
        assert!(accepts("int a, b = 3, c[10];"));
        assert!(accepts("char c; short s; short int t; long l; long int m;"));
        assert!(accepts("Point p;"));
        assert!(accepts("int;"));
        assert_eq!(reject("int a[x];").expected, "octal, decimal or hex constant expected");
        assert_eq!(reject("int a b;").expected, "';' expected");
        assert_eq!(reject("5;").expected, "data type or 'class' keyword expected");
        assert_eq!(reject("while;").expected, "data type or 'class' keyword expected");
        assert_eq!(reject("int a").expected, "';' expected");
    }

    #[test]
    fn test_trailing_int_only_after_short_and_long() {
        assert!(accepts("short int x;"));
        assert_eq!(reject("char int x;").expected, "identifier expected");
    }

    #[test]
    fn test_class_declarations() {
        assert!(accepts("class Point { int x; int y; };"));
        assert!(accepts("class Empty {};"));
        assert!(accepts("class Outer { class Inner { char c; }; Inner i; };"));
        assert!(accepts("int main(){ class Local { long n; }; Local l; }"));
        assert_eq!(reject("class Point { int x; }").expected, "';' expected");
        assert_eq!(reject("class { int x; };").expected, "identifier expected");
        assert_eq!(reject("class P int x; };").expected, "'{' expected");
        assert_eq!(reject("class P { x = 1; };").expected, "identifier expected");

        let err = reject("class P { int x;");
        assert_eq!(err.expected, "'}' expected");
        assert_eq!(err.image, "");
    }

    #[test]
    fn test_statements() {
        assert!(accepts("int main(){ ; ; }"));
        assert!(accepts("int main(){ { { x = 1; } } }"));
        assert!(accepts("int main(){ while (x) while (y) x = x - 1; }"));
        assert!(accepts("int main(){ while (i < 10) { i = i + 1; } }"));
        assert!(accepts("int main(){ a[1].b.c[i + 1] = 0x1F; }"));
        assert!(accepts("int main(){ return (a + b) * 07; }"));
        assert_eq!(reject("int main(){ 5; }").expected, "';' expected");
        assert_eq!(reject("int main(){ return; }").expected, "octal, decimal or hex constant expected");
        assert_eq!(reject("int main(){ while x) ; }").expected, "'(' expected");
        assert_eq!(reject("int main(){ while (x ; }").expected, "')' expected");
        assert_eq!(reject("int main(){ a[1 = 2; }").expected, "']' expected");
        assert_eq!(reject("int main(){ a. = 2; }").expected, "identifier expected");
    }

    #[test]
    fn test_unclosed_block() {
        let err = reject("int main(){ x = 1;");
        assert_eq!(err.expected, "'}' expected");
        assert_eq!((err.line, err.column), (1, 19));
    }

    #[test]
    fn test_main_header_errors() {
        assert_eq!(reject("int main{}").expected, "'(' expected");
        assert_eq!(reject("int main(x){}").expected, "')' expected");
        assert_eq!(reject("int main() x = 1;").expected, "'{' expected");
    }

    #[test]
    fn test_expression_forms() {
        for expr in [
            "1",
            "a == b != c",
            "a < b <= c > d >= e",
            "a << 2 >> 1",
            "-a + +b - c",
            "a * b / c % d",
            "++a",
            "--a[0]",
            "a++",
            "a.b--",
            "((a))",
            "-(a + 1) * 0xff",
        ] {
            let source = format!("int main(){{ x = {expr}; }}");
            assert!(accepts(&source), "rejected expression {expr:?}");
        }
    }

    #[test]
    fn test_prefix_applies_once() {
        assert_eq!(reject("int main(){ x = - -a; }").expected, "octal, decimal or hex constant expected");
        assert_eq!(reject("int main(){ x = a++ ++; }").expected, "';' expected");
    }

    #[test]
    fn test_lexical_errors_do_not_fail_the_parse_alone() {
        let (result, diagnostics) = parse_str("int main(){ @ ; }");
        // `@` becomes an error token, which the statement rule rejects.
        assert_eq!(result.unwrap_err().expected, "';' expected");
        let messages: Vec<_> = diagnostics.iter().map(|d| d.message.as_str()).collect();
        assert_eq!(
            messages,
            [
                "token not found for char '@'",
                "syntax error: wrong token '@' at 1:13; ';' expected"
            ]
        );

        let (result, diagnostics) = parse_str("int main(){ x = 1; } /* trailing");
        assert!(result.is_err());
        assert_eq!(diagnostics[0].message, "unclosed multiline comment");
    }

    #[test]
    fn test_backtracking_reports_lexical_anomaly_once() {
        // The block-item lookahead reads `x @` twice before the statement rule consumes it.
        let (result, diagnostics) = parse_str("int main(){ x @ 1; }");
        assert!(result.is_err());
        let lexical = diagnostics
            .iter()
            .filter(|d| d.message.starts_with("token not found"))
            .count();
        assert_eq!(lexical, 1);
        assert_eq!(diagnostics.len(), 2);
    }

    #[test]
    fn test_exactly_one_verdict() {
        let (_, diagnostics) = parse_str("int main(){ x = ; y = ; }");
        let syntax: Vec<_> = diagnostics
            .iter()
            .filter(|d| d.message.starts_with("syntax error"))
            .collect();
        assert_eq!(syntax.len(), 1);
        assert!(!diagnostics.iter().any(|d| !d.is_error()));
    }

    #[test]
    fn test_nesting_limit() {
        let buffer = SourceBuffer::new("int main(){ x = ((((1)))); }").unwrap();
        let mut diagnostics: Vec<Diagnostic> = Vec::new();
        let limits = Limits::default().with_max_nesting(4);
        let err = check_with_limits(&buffer, &mut diagnostics, &limits).unwrap_err();
        assert_eq!(err.expected, "nesting is too deep");
        assert_eq!((err.image.as_str(), err.column), ("1", 21));

        let mut diagnostics: Vec<Diagnostic> = Vec::new();
        let limits = Limits::default().with_max_nesting(5);
        assert!(check_with_limits(&buffer, &mut diagnostics, &limits).is_ok());
    }

    #[test]
    fn test_deep_nesting_is_rejected_not_overflowed() {
        let source = format!("int main(){{ x = {}1{}; }}", "(".repeat(1000), ")".repeat(1000));
        assert_eq!(reject(&source).expected, "nesting is too deep");
    }

    #[test]
    fn test_error_span_covers_token() {
        let err = reject("int main(){\n  int x;\n  return x\n}");
        assert_eq!((err.line, err.column), (4, 1));
        assert_eq!(err.span, (32, 1).into());
    }

    #[test]
    fn test_parser_can_be_driven_directly() {
        let buffer = SourceBuffer::new("int x = 1;").unwrap();
        let mut diagnostics: Vec<Diagnostic> = Vec::new();
        let mut parser = Parser::new(&buffer, &mut diagnostics);
        assert!(parser.parse_program().is_ok());
        assert_eq!(diagnostics.len(), 1);
    }
}
