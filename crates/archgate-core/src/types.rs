use serde::{Deserialize, Serialize};

/// Kind of a declared type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeKind {
    Class,
    Interface,
}

impl TypeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TypeKind::Class => "class",
            TypeKind::Interface => "interface",
        }
    }
}

impl std::fmt::Display for TypeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Visibility of a declared type. Anything that is not public is `NonPublic`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Visibility {
    Public,
    NonPublic,
}

impl Visibility {
    pub fn as_str(&self) -> &'static str {
        match self {
            Visibility::Public => "public",
            Visibility::NonPublic => "non_public",
        }
    }
}

impl std::fmt::Display for Visibility {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind of a declared member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MemberKind {
    Property,
    Method,
    Field,
    Constructor,
}

impl MemberKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MemberKind::Property => "property",
            MemberKind::Method => "method",
            MemberKind::Field => "field",
            MemberKind::Constructor => "constructor",
        }
    }
}

impl std::fmt::Display for MemberKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A reference to a type by identity.
///
/// `arguments` holds generic parameter bindings: `GenericRepository<Item>` is a
/// reference to `GenericRepository` with one argument referencing `Item`.
/// References the snapshot cannot resolve must be marked `external`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TypeRef {
    pub name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub arguments: Vec<TypeRef>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub external: bool,
}

impl TypeRef {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            arguments: vec![],
            external: false,
        }
    }

    /// A reference to a type outside the analyzed unit.
    pub fn external(name: impl Into<String>) -> Self {
        Self {
            external: true,
            ..Self::new(name)
        }
    }

    pub fn with_argument(mut self, argument: TypeRef) -> Self {
        self.arguments.push(argument);
        self
    }

    pub fn is_generic_instantiation(&self) -> bool {
        !self.arguments.is_empty()
    }

    pub fn simple_name(&self) -> &str {
        crate::simple_name_of(&self.name)
    }
}

impl std::fmt::Display for TypeRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)?;
        if !self.arguments.is_empty() {
            f.write_str("<")?;
            for (i, arg) in self.arguments.iter().enumerate() {
                if i > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "{arg}")?;
            }
            f.write_str(">")?;
        }
        Ok(())
    }
}

/// A declared member of a type. `types` lists every type referenced by the
/// member's signature (field type, property type, parameter and return types).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    pub name: String,
    pub kind: MemberKind,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub types: Vec<TypeRef>,
}

impl Member {
    pub fn new(kind: MemberKind, name: impl Into<String>, types: Vec<TypeRef>) -> Self {
        Self {
            name: name.into(),
            kind,
            types,
        }
    }

    pub fn property(name: impl Into<String>, ty: TypeRef) -> Self {
        Self::new(MemberKind::Property, name, vec![ty])
    }

    pub fn field(name: impl Into<String>, ty: TypeRef) -> Self {
        Self::new(MemberKind::Field, name, vec![ty])
    }

    pub fn method(name: impl Into<String>, types: Vec<TypeRef>) -> Self {
        Self::new(MemberKind::Method, name, types)
    }

    pub fn constructor(name: impl Into<String>, types: Vec<TypeRef>) -> Self {
        Self::new(MemberKind::Constructor, name, types)
    }
}

/// Static metadata for one declared type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeDescriptor {
    pub full_name: String,
    pub name: String,
    pub namespace: String,
    pub kind: TypeKind,
    pub visibility: Visibility,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_type: Option<TypeRef>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub interfaces: Vec<TypeRef>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub members: Vec<Member>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub annotations: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub generic_parameters: Vec<String>,
}

impl TypeDescriptor {
    /// A public type named `name` declared in `namespace`.
    pub fn new(kind: TypeKind, namespace: &str, name: &str) -> Self {
        let full_name = if namespace.is_empty() {
            name.to_string()
        } else {
            format!("{namespace}.{name}")
        };
        Self {
            full_name,
            name: name.to_string(),
            namespace: namespace.to_string(),
            kind,
            visibility: Visibility::Public,
            base_type: None,
            interfaces: vec![],
            members: vec![],
            annotations: vec![],
            generic_parameters: vec![],
        }
    }

    pub fn class(namespace: &str, name: &str) -> Self {
        Self::new(TypeKind::Class, namespace, name)
    }

    pub fn interface(namespace: &str, name: &str) -> Self {
        Self::new(TypeKind::Interface, namespace, name)
    }

    pub fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    pub fn with_base(mut self, base: TypeRef) -> Self {
        self.base_type = Some(base);
        self
    }

    pub fn implementing(mut self, interface: TypeRef) -> Self {
        self.interfaces.push(interface);
        self
    }

    pub fn with_member(mut self, member: Member) -> Self {
        self.members.push(member);
        self
    }

    pub fn with_annotation(mut self, annotation: impl Into<String>) -> Self {
        self.annotations.push(annotation.into());
        self
    }

    pub fn with_generic_parameters(mut self, parameters: &[&str]) -> Self {
        self.generic_parameters = parameters.iter().map(|p| p.to_string()).collect();
        self
    }

    pub fn is_class(&self) -> bool {
        self.kind == TypeKind::Class
    }

    pub fn is_interface(&self) -> bool {
        self.kind == TypeKind::Interface
    }

    pub fn is_public(&self) -> bool {
        self.visibility == Visibility::Public
    }

    pub fn generic_arity(&self) -> usize {
        self.generic_parameters.len()
    }

    pub fn is_generic_definition(&self) -> bool {
        !self.generic_parameters.is_empty()
    }

    /// True if `name` is one of this type's own generic parameters.
    pub fn is_generic_parameter(&self, name: &str) -> bool {
        self.generic_parameters.iter().any(|p| p == name)
    }

    /// Every type reference this descriptor declares, in declaration order:
    /// base type, interfaces, then member signatures.
    pub fn references(&self) -> impl Iterator<Item = &TypeRef> {
        self.base_type
            .iter()
            .chain(self.interfaces.iter())
            .chain(self.members.iter().flat_map(|m| m.types.iter()))
    }
}

/// Index of a descriptor within its catalog. Ordering is declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TypeId(pub u32);

impl TypeId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Errors raised while building or loading a catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Malformed metadata: {0}")]
    MalformedMetadata(String),

    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl From<serde_json::Error> for CatalogError {
    fn from(e: serde_json::Error) -> Self {
        CatalogError::MalformedMetadata(format!("invalid snapshot JSON: {e}"))
    }
}
