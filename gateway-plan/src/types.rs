use std::fmt;

use apollo_compiler::Name;
use apollo_compiler::Schema;
use apollo_compiler::ast::Type;
use apollo_compiler::schema::ExtendedType;
use serde::Serialize;

use crate::error::UnsupportedTypeError;
use crate::join_spec::ID_SCALAR_NAME;

/// Federation schemas only ever wrap a named type in a single list. Anything deeper is rejected.
const MAX_LIST_DEPTH: usize = 1;

/// Rendered name used for custom scalars, whose values are passed through untouched.
pub(crate) const OPAQUE_SCALAR_RENDERING: &str = "serde_json::Value";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum BaseKind {
    Scalar,
    Object,
    Enum,
}

/// Scalars with a fixed rendering. Everything else is a custom scalar.
// Primitives are taken from scalars: https://spec.graphql.org/draft/#sec-Scalars
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ScalarType {
    Int,
    Float,
    Boolean,
    Id,
    String,
    Custom(Name),
}

impl ScalarType {
    pub fn from_name(name: &Name) -> Self {
        match name.as_str() {
            "Int" => Self::Int,
            "Float" => Self::Float,
            "Boolean" => Self::Boolean,
            "ID" => Self::Id,
            "String" => Self::String,
            _ => Self::Custom(name.clone()),
        }
    }

    fn rendered(&self) -> &str {
        match self {
            Self::Int => "i32",
            Self::Float => "f64",
            Self::Boolean => "bool",
            Self::Id | Self::String => "String",
            Self::Custom(_) => OPAQUE_SCALAR_RENDERING,
        }
    }
}

/// The normalized shape of a field's type reference.
///
/// Only the wrapping depths seen in federation schemas are representable: a named type,
/// optionally non-null, optionally inside one list which may itself be non-null.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TypeDescriptor {
    pub base_kind: BaseKind,
    pub base_name: Name,
    pub element_nullable: bool,
    pub is_list: bool,
    pub list_nullable: bool,
}

impl TypeDescriptor {
    /// Resolves a type reference against `schema`.
    ///
    /// Fails on list-of-list references and on base types that are not a scalar, an object or an
    /// enum, instead of guessing a shape.
    pub fn resolve(schema: &Schema, ty: &Type) -> Result<Self, UnsupportedTypeError> {
        let shape = Shape::of(ty, 0).map_err(|reason| unsupported(ty, reason))?;
        let base_kind = match schema.types.get(shape.name) {
            Some(ExtendedType::Scalar(_)) => BaseKind::Scalar,
            Some(ExtendedType::Object(_)) => BaseKind::Object,
            Some(ExtendedType::Enum(_)) => BaseKind::Enum,
            Some(ExtendedType::Interface(_)) => {
                return Err(unsupported(ty, "interface types are not supported"));
            }
            Some(ExtendedType::Union(_)) => {
                return Err(unsupported(ty, "union types are not supported"));
            }
            Some(ExtendedType::InputObject(_)) => {
                return Err(unsupported(ty, "input object types are not supported"));
            }
            None => return Err(unsupported(ty, "the named type is not defined")),
        };
        Ok(Self {
            base_kind,
            base_name: shape.name.clone(),
            element_nullable: shape.element_nullable,
            is_list: shape.is_list,
            list_nullable: shape.list_nullable,
        })
    }

    /// The type as declared, with every nullable position wrapped in `Option`.
    ///
    /// `[Mission!]` renders as `Option<Vec<Mission>>`.
    pub fn rendered(&self) -> String {
        let element = self.rendered_element();
        if self.is_list {
            let list = format!("Vec<{element}>");
            if self.list_nullable {
                format!("Option<{list}>")
            } else {
                list
            }
        } else if self.element_nullable {
            format!("Option<{element}>")
        } else {
            element
        }
    }

    /// The type with its outermost position forced to non-null.
    ///
    /// `[Mission!]` renders as `Vec<Mission>`, `String` as `String`.
    pub fn non_null_rendered(&self) -> String {
        let element = self.rendered_element();
        if self.is_list {
            format!("Vec<{element}>")
        } else {
            element
        }
    }

    /// The GraphQL name of the base type with all wrapping stripped.
    pub fn basic_name(&self) -> &Name {
        &self.base_name
    }

    pub fn is_scalar(&self) -> bool {
        self.base_kind == BaseKind::Scalar
    }

    pub fn is_list(&self) -> bool {
        self.is_list
    }

    /// Whether this is a single (non-list) object.
    pub fn is_object(&self) -> bool {
        self.base_kind == BaseKind::Object && !self.is_list
    }

    pub fn is_id(&self) -> bool {
        self.is_scalar() && self.base_name == ID_SCALAR_NAME
    }

    fn rendered_element(&self) -> String {
        let base = match self.base_kind {
            BaseKind::Scalar => ScalarType::from_name(&self.base_name).rendered().to_owned(),
            BaseKind::Enum => "String".to_owned(),
            BaseKind::Object => self.base_name.to_string(),
        };
        if self.is_list && self.element_nullable {
            format!("Option<{base}>")
        } else {
            base
        }
    }
}

impl fmt::Display for TypeDescriptor {
    /// Prints the GraphQL form of the reference, e.g. `[Mission!]!`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let bang = |nullable: bool| if nullable { "" } else { "!" };
        if self.is_list {
            write!(
                f,
                "[{}{}]{}",
                self.base_name,
                bang(self.element_nullable),
                bang(self.list_nullable)
            )
        } else {
            write!(f, "{}{}", self.base_name, bang(self.element_nullable))
        }
    }
}

impl Serialize for TypeDescriptor {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.rendered())
    }
}

/// Wrapping collected while descending a type reference.
struct Shape<'ty> {
    name: &'ty Name,
    element_nullable: bool,
    is_list: bool,
    list_nullable: bool,
}

impl<'ty> Shape<'ty> {
    fn of(ty: &'ty Type, list_depth: usize) -> Result<Self, &'static str> {
        match ty {
            Type::Named(name) => Ok(Self::named(name, true)),
            Type::NonNullNamed(name) => Ok(Self::named(name, false)),
            Type::List(inner) | Type::NonNullList(inner) => {
                if list_depth >= MAX_LIST_DEPTH {
                    return Err("nested lists are not supported");
                }
                let element = Self::of(inner, list_depth + 1)?;
                Ok(Self {
                    is_list: true,
                    list_nullable: matches!(ty, Type::List(_)),
                    ..element
                })
            }
        }
    }

    fn named(name: &'ty Name, nullable: bool) -> Self {
        Self {
            name,
            element_nullable: nullable,
            is_list: false,
            list_nullable: false,
        }
    }
}

fn unsupported(ty: &Type, reason: &'static str) -> UnsupportedTypeError {
    UnsupportedTypeError {
        ty: ty.to_string(),
        reason,
    }
}
