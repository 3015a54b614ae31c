use std::fmt;

use crate::kind::TypeKind;

/// A non-fatal condition encountered while walking a schema.
///
/// Diagnostics are collected on the snapshot and logged at WARN level as
/// they occur. The strict conversion mode promotes them to errors instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// A type definition whose kind has no snapshot form. The entry is
    /// dropped from the output.
    UnsupportedKind { type_name: String, kind: TypeKind },
    /// A field type with more than one level of list nesting. The snapshot
    /// keeps the innermost type name and the outer flags only.
    DeepNesting {
        type_name: String,
        field_name: String,
        ty: String,
    },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::UnsupportedKind { type_name, kind } => {
                write!(f, "skipping {kind} type `{type_name}`")
            }
            Diagnostic::DeepNesting {
                type_name,
                field_name,
                ty,
            } => {
                write!(
                    f,
                    "`{type_name}.{field_name}`: list nesting in `{ty}` exceeds one level; inner list wrappers are dropped"
                )
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Diagnostic;
    use crate::kind::TypeKind;
    use insta::assert_snapshot;

    #[test]
    fn it_renders_unsupported_kinds() {
        let diagnostic = Diagnostic::UnsupportedKind {
            type_name: "Node".to_string(),
            kind: TypeKind::Interface,
        };
        assert_snapshot!(diagnostic, @"skipping interface type `Node`");
    }

    #[test]
    fn it_renders_deep_nesting() {
        let diagnostic = Diagnostic::DeepNesting {
            type_name: "Grid".to_string(),
            field_name: "rows".to_string(),
            ty: "[[Int]]".to_string(),
        };
        assert_snapshot!(diagnostic, @"`Grid.rows`: list nesting in `[[Int]]` exceeds one level; inner list wrappers are dropped");
    }
}
