pub mod parser;

pub use parser::Parser;

#[cfg(test)]
mod tests {
    use super::*;
    use jfmt_lexer::Lexer;
    use jfmt_syntax::ast::*;
    use jfmt_syntax::error::Error;

    fn parse_expr_str(input: &str) -> Expr {
        let mut lexer = Lexer::new(input);
        let tokens = lexer.tokenize().expect("Lexing should succeed");
        let mut parser = Parser::new(tokens);
        parser.parse_expr().expect("Parsing should succeed")
    }

    fn parse_stmt_str(input: &str) -> Stmt {
        let mut lexer = Lexer::new(input);
        let tokens = lexer.tokenize().expect("Lexing should succeed");
        let mut parser = Parser::new(tokens);
        parser.parse_stmt().expect("Parsing should succeed")
    }

    fn parse_class_str(input: &str) -> ClassDecl {
        let mut lexer = Lexer::new(input);
        let tokens = lexer.tokenize().expect("Lexing should succeed");
        let mut parser = Parser::new(tokens);
        parser.parse_class().expect("Parsing should succeed")
    }

    fn class_error(input: &str) -> Error {
        let mut lexer = Lexer::new(input);
        let tokens = lexer.tokenize().expect("Lexing should succeed");
        let mut parser = Parser::new(tokens);
        parser.parse_class().expect_err("Parsing should fail")
    }

    #[test]
    fn test_literal_expressions() {
        assert!(matches!(parse_expr_str("42"), Expr::Literal(Literal::Number(n)) if n == "42"));
        assert!(matches!(parse_expr_str("\"hi\""), Expr::Literal(Literal::Str(s)) if s == "hi"));
        assert!(matches!(parse_expr_str("'c'"), Expr::Literal(Literal::Char(c)) if c == "c"));
        assert!(matches!(parse_expr_str("true"), Expr::Literal(Literal::Bool(true))));
        assert!(matches!(parse_expr_str("null"), Expr::Literal(Literal::Null)));
    }

    #[test]
    fn test_identifier_expressions() {
        assert!(matches!(parse_expr_str("count"), Expr::Ident(s) if s == "count"));
        assert!(matches!(parse_expr_str("this.count"), Expr::Ident(s) if s == "this.count"));
    }

    #[test]
    fn test_operator_precedence() {
        match parse_expr_str("a + b * c") {
            Expr::Binary { op: BinaryOp::Add, rhs, .. } => {
                assert!(matches!(*rhs, Expr::Binary { op: BinaryOp::Mul, .. }));
            }
            other => panic!("Expected addition, got {:?}", other),
        }
        assert!(matches!(
            parse_expr_str("a < b && c || d"),
            Expr::Binary { op: BinaryOp::Or, .. }
        ));
        // left associative
        match parse_expr_str("a - b - c") {
            Expr::Binary { lhs, .. } => {
                assert!(matches!(*lhs, Expr::Binary { op: BinaryOp::Sub, .. }));
            }
            other => panic!("Expected subtraction, got {:?}", other),
        }
    }

    #[test]
    fn test_not_and_parentheses() {
        match parse_expr_str("!(a == b)") {
            Expr::Not(inner) => assert!(matches!(*inner, Expr::Paren(_))),
            other => panic!("Expected Not, got {:?}", other),
        }
        assert!(matches!(
            parse_expr_str("!a && b"),
            Expr::Binary { op: BinaryOp::And, .. }
        ));
    }

    #[test]
    fn test_call_expressions() {
        match parse_expr_str("max(a, 1, size())") {
            Expr::Call(CallExpr::Plain { name, params }) => {
                assert_eq!(name, "max");
                assert_eq!(params.len(), 3);
                assert!(matches!(&params[2], Param::Call(CallExpr::Plain { .. })));
            }
            other => panic!("Expected plain call, got {:?}", other),
        }
        match parse_expr_str("grid[i][j + 1]") {
            Expr::Call(CallExpr::Index { name, indices }) => {
                assert_eq!(name, "grid");
                assert_eq!(indices.len(), 2);
            }
            other => panic!("Expected index, got {:?}", other),
        }
        match parse_expr_str("this.items.get(0).size()") {
            Expr::Call(CallExpr::Chain { receiver, calls }) => {
                assert_eq!(receiver, "this.items");
                let names: Vec<_> = calls.iter().map(|c| c.name.as_str()).collect();
                assert_eq!(names, ["get", "size"]);
            }
            other => panic!("Expected chain, got {:?}", other),
        }
    }

    #[test]
    fn test_statements() {
        assert!(matches!(parse_stmt_str("int x;"), Stmt::Local(LocalVar { init: None, .. })));
        assert!(matches!(
            parse_stmt_str("final Box b = new Box(1);"),
            Stmt::Local(LocalVar { is_final: true, init: Some(Init::New(NewExpr::Object { .. })), .. })
        ));
        assert!(matches!(
            parse_stmt_str("int[][] m = new int[3][4];"),
            Stmt::Local(LocalVar { dims: 2, init: Some(Init::New(NewExpr::Array { .. })), .. })
        ));
        assert!(matches!(
            parse_stmt_str("this.x = x;"),
            Stmt::Assign { target: Target::Name(n), .. } if n == "this.x"
        ));
        assert!(matches!(
            parse_stmt_str("a[0] = 1;"),
            Stmt::Assign { target: Target::Index { .. }, .. }
        ));
        assert!(matches!(parse_stmt_str("list.add(x);"), Stmt::Call(CallExpr::Chain { .. })));
        assert!(matches!(parse_stmt_str("return;"), Stmt::Return(None)));
        assert!(matches!(parse_stmt_str("return x + 1;"), Stmt::Return(Some(_))));
        assert!(matches!(parse_stmt_str("break;"), Stmt::Break));
        assert!(matches!(parse_stmt_str("continue;"), Stmt::Continue));
        assert!(matches!(
            parse_stmt_str("if (a) { } else { }"),
            Stmt::If { else_body: Some(ref e), .. } if e.is_empty()
        ));
        assert!(matches!(
            parse_stmt_str("while (i < n) { i = i + 1; }"),
            Stmt::While { ref body, .. } if body.len() == 1
        ));
    }

    #[test]
    fn test_class_structure() {
        let class = parse_class_str(
            "public final class Box extends Base implements A, B {
                private int x;
                int[][] grid;
                Box(final int x) { super(x, 2); this.x = x; }
                public int get() { return x; }
            }",
        );
        assert_eq!(class.access, Some(Access::Public));
        assert!(class.is_final);
        assert_eq!(class.extends, Some(Type::Named("Base".into())));
        assert_eq!(class.implements.len(), 2);
        assert_eq!(class.fields.len(), 2);
        assert_eq!(class.fields[1].dims, 2);
        assert_eq!(class.constructors.len(), 1);
        let ctor = &class.constructors[0];
        assert!(ctor.args[0].is_final);
        assert_eq!(ctor.super_call.as_ref().map(Vec::len), Some(2));
        assert_eq!(ctor.body.len(), 1);
        assert_eq!(class.functions[0].return_type, Type::Primitive(Primitive::Int));
    }

    #[test]
    fn test_members_in_any_order() {
        let class = parse_class_str("class A { void f() { } int x; A() { } }");
        assert_eq!(class.fields.len(), 1);
        assert_eq!(class.constructors.len(), 1);
        assert_eq!(class.functions.len(), 1);
    }

    #[test]
    fn test_syntax_errors() {
        let e = class_error("class A { void f() { return 1; }");
        assert!(e.is_syntax());
        assert!(e.msg.contains("end of input"), "{}", e.msg);

        let e = class_error("class A { B() { } }");
        assert!(e.msg.contains("does not match class 'A'"));
        assert_eq!((e.line, e.col), (Some(1), Some(11)));

        let e = class_error("class A { public A() { } }");
        assert!(e.msg.contains("Constructors cannot have modifiers"));

        let e = class_error("class A { } class B { }");
        assert!(e.msg.contains("end of input after the class body"));

        let e = class_error("class A { void f() { g(a + b); } }");
        assert!(e.msg.contains("Expected ',' or ')'"));

        let e = class_error("class A { void f() { x = 1 } }");
        assert_eq!(e.msg, "Expected ';', found '}'");

        let e = class_error("class A { void f() { super(); } }");
        assert!(e.msg.contains("first statement of a constructor"));
    }
}
