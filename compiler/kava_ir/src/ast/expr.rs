use crate::{Name, Span};

use super::{AnnotationId, Block, ExprId, TypeDeclId, TypeRefId};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Expr {
    pub kind: ExprKind,
    pub span: Span,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ExprKind {
    /// Literal kept with its exact source spelling.
    Literal { kind: LiteralKind, text: Name },
    /// Simple or dotted name whose meaning needs binding to resolve.
    Name(Vec<Name>),
    /// `this` or `Outer.this`.
    This { qualifier: Vec<Name> },
    /// `super` or `Outer.super`, only as a receiver.
    Super { qualifier: Vec<Name> },
    FieldAccess { receiver: ExprId, name: Name },
    MethodCall {
        receiver: Option<ExprId>,
        type_args: Vec<TypeRefId>,
        name: Name,
        args: Vec<ExprId>,
    },
    /// `new T(args)`, optionally `outer.new T(args)` and an anonymous body.
    New {
        outer: Option<ExprId>,
        ty: TypeRefId,
        args: Vec<ExprId>,
        body: Option<TypeDeclId>,
    },
    /// `new int[n][]` or `new int[]{1, 2}`.
    NewArray {
        element: TypeRefId,
        dims: Vec<Option<ExprId>>,
        init: Option<ExprId>,
    },
    ArrayInit(Vec<ExprId>),
    ArrayAccess { array: ExprId, index: ExprId },
    Unary { op: UnaryOp, operand: ExprId },
    Postfix { op: PostfixOp, operand: ExprId },
    Binary { op: BinaryOp, left: ExprId, right: ExprId },
    Assign { op: AssignOp, target: ExprId, value: ExprId },
    Conditional {
        cond: ExprId,
        then_expr: ExprId,
        else_expr: ExprId,
    },
    InstanceOf { expr: ExprId, ty: TypeRefId },
    Cast { ty: TypeRefId, expr: ExprId },
    Lambda { params: Vec<LambdaParam>, body: LambdaBody },
    /// `target::name`; constructor references use the name `new`.
    MethodRef { target: ExprId, name: Name },
    ClassLiteral(TypeRefId),
    /// A type used in expression position, e.g. the target of `int[]::new`.
    TypeExpr(TypeRefId),
    Paren(ExprId),
    /// Annotation used as an annotation member value.
    Annotation(AnnotationId),
    /// A value was required but nothing parseable was found.
    Missing,
    /// Placeholder for the name under the completion caret.
    Assist { receiver: Option<ExprId> },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum LiteralKind {
    Int,
    Float,
    Char,
    String,
    True,
    False,
    Null,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum UnaryOp {
    Plus,
    Minus,
    Not,
    BitNot,
    PreInc,
    PreDec,
}

impl UnaryOp {
    pub fn as_str(self) -> &'static str {
        match self {
            UnaryOp::Plus => "+",
            UnaryOp::Minus => "-",
            UnaryOp::Not => "!",
            UnaryOp::BitNot => "~",
            UnaryOp::PreInc => "++",
            UnaryOp::PreDec => "--",
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PostfixOp {
    Inc,
    Dec,
}

impl PostfixOp {
    pub fn as_str(self) -> &'static str {
        match self {
            PostfixOp::Inc => "++",
            PostfixOp::Dec => "--",
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum BinaryOp {
    Or,
    And,
    BitOr,
    BitXor,
    BitAnd,
    Eq,
    NotEq,
    Lt,
    Gt,
    LtEq,
    GtEq,
    Shl,
    Shr,
    UShr,
    Add,
    Sub,
    Mul,
    Div,
    Rem,
}

impl BinaryOp {
    pub fn as_str(self) -> &'static str {
        match self {
            BinaryOp::Or => "||",
            BinaryOp::And => "&&",
            BinaryOp::BitOr => "|",
            BinaryOp::BitXor => "^",
            BinaryOp::BitAnd => "&",
            BinaryOp::Eq => "==",
            BinaryOp::NotEq => "!=",
            BinaryOp::Lt => "<",
            BinaryOp::Gt => ">",
            BinaryOp::LtEq => "<=",
            BinaryOp::GtEq => ">=",
            BinaryOp::Shl => "<<",
            BinaryOp::Shr => ">>",
            BinaryOp::UShr => ">>>",
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
            BinaryOp::Rem => "%",
        }
    }

    /// Binding power; higher binds tighter. `instanceof` sits at the
    /// relational level and is handled by the parser separately.
    pub fn precedence(self) -> u8 {
        match self {
            BinaryOp::Or => 1,
            BinaryOp::And => 2,
            BinaryOp::BitOr => 3,
            BinaryOp::BitXor => 4,
            BinaryOp::BitAnd => 5,
            BinaryOp::Eq | BinaryOp::NotEq => 6,
            BinaryOp::Lt | BinaryOp::Gt | BinaryOp::LtEq | BinaryOp::GtEq => 7,
            BinaryOp::Shl | BinaryOp::Shr | BinaryOp::UShr => 8,
            BinaryOp::Add | BinaryOp::Sub => 9,
            BinaryOp::Mul | BinaryOp::Div | BinaryOp::Rem => 10,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum AssignOp {
    Assign,
    Add,
    Sub,
    Mul,
    Div,
    Rem,
    And,
    Or,
    Xor,
    Shl,
    Shr,
    UShr,
}

impl AssignOp {
    pub fn as_str(self) -> &'static str {
        match self {
            AssignOp::Assign => "=",
            AssignOp::Add => "+=",
            AssignOp::Sub => "-=",
            AssignOp::Mul => "*=",
            AssignOp::Div => "/=",
            AssignOp::Rem => "%=",
            AssignOp::And => "&=",
            AssignOp::Or => "|=",
            AssignOp::Xor => "^=",
            AssignOp::Shl => "<<=",
            AssignOp::Shr => ">>=",
            AssignOp::UShr => ">>>=",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LambdaParam {
    pub ty: Option<TypeRefId>,
    pub name: Name,
    pub span: Span,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LambdaBody {
    Expr(ExprId),
    Block(Block),
}
