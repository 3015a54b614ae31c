use thiserror::Error;

use crate::diagnostics::Diagnostic;
use crate::kind::TypeKind;

/// Errors raised by the strict conversion mode.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SnapshotError {
    #[error("cannot snapshot {kind} type `{type_name}`")]
    UnsupportedKind { type_name: String, kind: TypeKind },

    #[error("field `{type_name}.{field_name}` has unsupported list nesting: `{ty}`")]
    DeepNesting {
        type_name: String,
        field_name: String,
        ty: String,
    },
}

impl From<Diagnostic> for SnapshotError {
    fn from(diagnostic: Diagnostic) -> Self {
        match diagnostic {
            Diagnostic::UnsupportedKind { type_name, kind } => {
                SnapshotError::UnsupportedKind { type_name, kind }
            }
            Diagnostic::DeepNesting {
                type_name,
                field_name,
                ty,
            } => SnapshotError::DeepNesting {
                type_name,
                field_name,
                ty,
            },
        }
    }
}
