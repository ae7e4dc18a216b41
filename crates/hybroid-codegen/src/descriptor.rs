//! Runtime type descriptors emitted into Hybroid's walker.
//!
//! Every construct the generator can emit is a variant here; rendering is a
//! plain [`Display`](std::fmt::Display) over the tree.

use std::fmt;

/// Basic type kinds understood by `NewBasicType`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BasicKind {
    Bool,
    Number,
    List,
    Text,
}

impl BasicKind {
    fn ast_name(self) -> &'static str {
        match self {
            BasicKind::Bool => "Bool",
            BasicKind::Number => "Number",
            BasicKind::List => "List",
            BasicKind::Text => "Text",
        }
    }
}

/// Resource environments for path-typed arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathEnv {
    Mesh,
    Sound,
}

impl PathEnv {
    fn ast_name(self) -> &'static str {
        match self {
            PathEnv::Mesh => "MeshEnv",
            PathEnv::Sound => "SoundEnv",
        }
    }
}

/// Boxed value kinds used for struct fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Bool,
    Number,
    Fixed,
    String,
}

impl ValueKind {
    fn type_name(self) -> &'static str {
        match self {
            ValueKind::Bool => "BoolVal",
            ValueKind::Number => "NumberVal",
            ValueKind::Fixed => "FixedVal",
            ValueKind::String => "StringVal",
        }
    }
}

/// A Go expression constructing a walker type or value.
#[derive(Debug, Clone, PartialEq)]
pub enum Descriptor {
    RawEntity,
    Basic(BasicKind),
    FixedPoint,
    EnumType { library: String, name: String },
    EnumValue { library: String, name: String },
    Wrapper { outer: Box<Descriptor>, inner: Box<Descriptor> },
    Path(PathEnv),
    FunctionType { params: Vec<Descriptor>, returns: Vec<Descriptor> },
    Struct(Vec<(String, Descriptor)>),
    Value(ValueKind),
    Closure { params: Vec<Descriptor> },
    Function { params: Vec<Descriptor>, returns: Vec<Descriptor> },
}

impl Descriptor {
    pub fn enum_type(library: &str, name: &str) -> Self {
        Descriptor::EnumType {
            library: library.to_string(),
            name: name.to_string(),
        }
    }

    pub fn enum_value(library: &str, name: &str) -> Self {
        Descriptor::EnumValue {
            library: library.to_string(),
            name: name.to_string(),
        }
    }

    /// The entity-collection wrapper returned by entity queries.
    pub fn entity_list() -> Self {
        Descriptor::Wrapper {
            outer: Box::new(Descriptor::Basic(BasicKind::List)),
            inner: Box::new(Descriptor::RawEntity),
        }
    }
}

fn join(items: &[Descriptor]) -> String {
    items
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

impl fmt::Display for Descriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Descriptor::RawEntity => write!(f, "&RawEntityType{{}}"),
            Descriptor::Basic(kind) => write!(f, "NewBasicType(ast.{})", kind.ast_name()),
            Descriptor::FixedPoint => write!(f, "NewFixedPointType()"),
            Descriptor::EnumType { library, name } => {
                write!(f, "NewEnumType(\"{library}\", \"{name}\")")
            }
            Descriptor::EnumValue { library, name } => {
                write!(f, "NewEnumVal(\"{library}\", \"{name}\", true)")
            }
            Descriptor::Wrapper { outer, inner } => write!(f, "NewWrapperType({outer}, {inner})"),
            Descriptor::Path(env) => write!(f, "NewPathType(ast.{})", env.ast_name()),
            Descriptor::FunctionType { params, returns } => write!(
                f,
                "NewFunctionType([]Type{{{}}}, []Type{{{}}})",
                join(params),
                join(returns)
            ),
            Descriptor::Struct(fields) => {
                let fields = fields
                    .iter()
                    .map(|(name, value)| format!("{{Name: \"{name}\", Value: {value}}}"))
                    .collect::<Vec<_>>()
                    .join(", ");
                write!(f, "NewStructType([]*VariableVal{{{fields}}}, true)")
            }
            Descriptor::Value(kind) => write!(f, "&{}{{}}", kind.type_name()),
            Descriptor::Closure { params } => {
                write!(f, "&FunctionVal{{Params: []Type{{{}}}}}", join(params))
            }
            Descriptor::Function { params, returns } => {
                write!(f, "NewFunction({})", join(params))?;
                if !returns.is_empty() {
                    write!(f, ".WithReturns({})", join(returns))?;
                }
                Ok(())
            }
        }
    }
}
