//! AST (abstract syntax tree) types for single-class compilation units.
//!
//! Every node is owned by its parent and the [`ClassDecl`] is the root. The
//! tree is built once by the parser and only read afterwards.

/// Access modifier on a class, field or function.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Public,
    Private,
    Protected,
}

impl Access {
    pub fn as_str(self) -> &'static str {
        match self {
            Access::Public => "public",
            Access::Private => "private",
            Access::Protected => "protected",
        }
    }
}

/// Built-in type keywords.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Primitive {
    Boolean,
    Byte,
    Char,
    Short,
    Int,
    Long,
    Float,
    Double,
    Void,
}

impl Primitive {
    pub fn as_str(self) -> &'static str {
        match self {
            Primitive::Boolean => "boolean",
            Primitive::Byte => "byte",
            Primitive::Char => "char",
            Primitive::Short => "short",
            Primitive::Int => "int",
            Primitive::Long => "long",
            Primitive::Float => "float",
            Primitive::Double => "double",
            Primitive::Void => "void",
        }
    }

    pub fn from_keyword(word: &str) -> Option<Self> {
        let p = match word {
            "boolean" => Primitive::Boolean,
            "byte" => Primitive::Byte,
            "char" => Primitive::Char,
            "short" => Primitive::Short,
            "int" => Primitive::Int,
            "long" => Primitive::Long,
            "float" => Primitive::Float,
            "double" => Primitive::Double,
            "void" => Primitive::Void,
            _ => return None,
        };
        Some(p)
    }
}

/// A type reference: either a primitive keyword or a class name.
#[derive(Debug, Clone, PartialEq)]
pub enum Type {
    Primitive(Primitive),
    Named(String),
}

impl Type {
    /// Source spelling of the type.
    pub fn name(&self) -> &str {
        match self {
            Type::Primitive(p) => p.as_str(),
            Type::Named(n) => n.as_str(),
        }
    }
}

/// Binary operators, in the order of the lexer's longest-match table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Rem,
    Eq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,
    And,
    Or,
}

impl BinaryOp {
    pub fn as_str(self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
            BinaryOp::Rem => "%",
            BinaryOp::Eq => "==",
            BinaryOp::Ne => "!=",
            BinaryOp::Lt => "<",
            BinaryOp::Le => "<=",
            BinaryOp::Gt => ">",
            BinaryOp::Ge => ">=",
            BinaryOp::And => "&&",
            BinaryOp::Or => "||",
        }
    }

    /// Binding strength used by the parser; higher binds tighter.
    pub fn precedence(self) -> u8 {
        match self {
            BinaryOp::Or => 1,
            BinaryOp::And => 2,
            BinaryOp::Eq | BinaryOp::Ne => 3,
            BinaryOp::Lt | BinaryOp::Le | BinaryOp::Gt | BinaryOp::Ge => 4,
            BinaryOp::Add | BinaryOp::Sub => 5,
            BinaryOp::Mul | BinaryOp::Div | BinaryOp::Rem => 6,
        }
    }
}

/// Literal values, kept in their source spelling.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    Number(String),
    /// String body without quotes
    Str(String),
    /// Char body without quotes
    Char(String),
    Bool(bool),
    Null,
}

/// Expressions. Parentheses from the source are kept as [`Expr::Paren`] nodes.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// Possibly dotted name (`x`, `this.x`)
    Ident(String),
    Literal(Literal),
    Not(Box<Expr>),
    Binary {
        op: BinaryOp,
        lhs: Box<Expr>,
        rhs: Box<Expr>,
    },
    Paren(Box<Expr>),
    Call(CallExpr),
}

/// A call-parameter: only names, literals and nested calls are allowed.
#[derive(Debug, Clone, PartialEq)]
pub enum Param {
    Ident(String),
    Literal(Literal),
    Call(CallExpr),
}

/// One `.name(params)` link of a chained call.
#[derive(Debug, Clone, PartialEq)]
pub struct MethodCall {
    pub name: String,
    pub params: Vec<Param>,
}

/// Call-like expressions.
#[derive(Debug, Clone, PartialEq)]
pub enum CallExpr {
    /// `name(params)`
    Plain { name: String, params: Vec<Param> },
    /// `name[expr][expr]...`, at least one index
    Index { name: String, indices: Vec<Expr> },
    /// `receiver.call(...).call(...)`, at least one call
    Chain {
        receiver: String,
        calls: Vec<MethodCall>,
    },
}

/// `new` construction on the right-hand side of a declaration or assignment.
#[derive(Debug, Clone, PartialEq)]
pub enum NewExpr {
    /// `new Type(params)`
    Object { ty: Type, params: Vec<Param> },
    /// `new Type[expr]...`, at least one dimension
    Array { ty: Type, dims: Vec<Expr> },
}

/// Right-hand side of `=`.
#[derive(Debug, Clone, PartialEq)]
pub enum Init {
    Expr(Expr),
    New(NewExpr),
}

/// Left-hand side of an assignment.
#[derive(Debug, Clone, PartialEq)]
pub enum Target {
    Name(String),
    Index { name: String, indices: Vec<Expr> },
}

/// Local variable declaration inside a block.
#[derive(Debug, Clone, PartialEq)]
pub struct LocalVar {
    pub is_final: bool,
    pub ty: Type,
    /// Number of `[]` pairs after the type
    pub dims: usize,
    pub name: String,
    pub init: Option<Init>,
}

/// Statements.
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    Local(LocalVar),
    Assign { target: Target, value: Init },
    Break,
    Continue,
    Call(CallExpr),
    Return(Option<Expr>),
    If {
        cond: Expr,
        then_body: Vec<Stmt>,
        /// `None` when the source had no `else`; an empty block is `Some(vec![])`
        else_body: Option<Vec<Stmt>>,
    },
    While { cond: Expr, body: Vec<Stmt> },
}

/// Formal parameter of a constructor or function.
#[derive(Debug, Clone, PartialEq)]
pub struct Argument {
    pub is_final: bool,
    pub ty: Type,
    pub dims: usize,
    pub name: String,
}

/// Member variable.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub access: Option<Access>,
    pub is_final: bool,
    pub ty: Type,
    /// One per `[]` pair written after the type
    pub dims: usize,
    pub name: String,
}

/// Constructor; `name` always equals the enclosing class name.
#[derive(Debug, Clone, PartialEq)]
pub struct Constructor {
    pub name: String,
    pub args: Vec<Argument>,
    /// Parameters of an explicit leading `super(...)` call
    pub super_call: Option<Vec<Param>>,
    pub body: Vec<Stmt>,
}

/// Method definition.
#[derive(Debug, Clone, PartialEq)]
pub struct Function {
    pub access: Option<Access>,
    pub is_final: bool,
    pub return_type: Type,
    pub name: String,
    pub args: Vec<Argument>,
    pub body: Vec<Stmt>,
}

/// The compilation unit: exactly one class.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassDecl {
    pub access: Option<Access>,
    pub is_final: bool,
    pub name: String,
    pub extends: Option<Type>,
    /// Empty when there is no `implements` clause
    pub implements: Vec<Type>,
    pub fields: Vec<Field>,
    pub constructors: Vec<Constructor>,
    pub functions: Vec<Function>,
}
