//! Error context for "while parsing X" messages.

/// What was being parsed when an error occurred.
///
/// Distinct from `ParseContext`, the flag set that changes how the grammar
/// behaves. This one only feeds error messages.
///
/// ```text
/// self.in_error_context(ErrorContext::Annotation, |p| p.parse_annotation_args(..))
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorContext {
    // Declarations
    PackageDecl,
    ImportDecl,
    TypeHeader,
    TypeBody,
    EnumConstant,
    FieldDecl,
    MethodHeader,
    ParameterList,
    MethodBody,

    // Annotations and types
    Annotation,
    AnnotationArgs,
    TypeRef,
    TypeArgs,
    TypeParams,

    // Statements and expressions
    Block,
    Statement,
    LocalVar,
    Expression,
    ArgumentList,
    ArrayInitializer,
    Lambda,
}

impl ErrorContext {
    /// Phrase suitable for "while parsing {description}".
    pub fn description(self) -> &'static str {
        match self {
            Self::PackageDecl => "a package declaration",
            Self::ImportDecl => "an import declaration",
            Self::TypeHeader => "a type declaration header",
            Self::TypeBody => "a type body",
            Self::EnumConstant => "an enum constant",
            Self::FieldDecl => "a field declaration",
            Self::MethodHeader => "a method header",
            Self::ParameterList => "a parameter list",
            Self::MethodBody => "a method body",
            Self::Annotation => "an annotation",
            Self::AnnotationArgs => "annotation arguments",
            Self::TypeRef => "a type",
            Self::TypeArgs => "type arguments",
            Self::TypeParams => "type parameters",
            Self::Block => "a block",
            Self::Statement => "a statement",
            Self::LocalVar => "a local variable declaration",
            Self::Expression => "an expression",
            Self::ArgumentList => "an argument list",
            Self::ArrayInitializer => "an array initializer",
            Self::Lambda => "a lambda expression",
        }
    }

    /// Label text used on diagnostics: "while parsing {description}".
    pub fn label(self) -> String {
        format!("while parsing {}", self.description())
    }
}
