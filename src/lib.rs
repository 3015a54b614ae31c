//! Conversion of GraphQL schemas into plain nested-data snapshots.
//!
//! The types in the schema are walked in declaration order, and every object
//! and enum type definition is converted into an owned, serializable
//! snapshot. Enums keep their value names, objects keep one entry per field
//! with the named type plus nullability and list flags, and every snapshot
//! carries the directive applications of its node as plain values. The
//! result serializes to a single JSON object keyed by type name, suitable
//! for diffing, code generation, or storage.
//!
//! Type definitions of any other kind (scalars, interfaces, unions, input
//! objects) have no snapshot form. The default conversion drops them and
//! records a [`Diagnostic`] for each, logged at WARN level; the strict
//! conversion returns the first such condition as a
//! [`SnapshotError`](error::SnapshotError) instead.

use apollo_compiler::Schema;
use apollo_compiler::schema::{EnumType, ExtendedType, ObjectType};
use indexmap::IndexMap;
use tracing::warn;

pub mod error;

mod diagnostics;
mod directives;
mod kind;
mod shape;
mod snapshot;

pub use diagnostics::Diagnostic;
pub use directives::{
    ArgumentMap, DirectiveMap, argument_map, directive_map, fields_with_directive,
};
pub use kind::TypeKind;
pub use shape::{FieldShape, normalize_scalar_name};
pub use snapshot::{FieldSnapshot, SchemaSnapshot, TypeSnapshot};

use error::SnapshotError;
use shape::exceeds_supported_nesting;

/// Knobs for the schema walk.
#[derive(Debug, Clone, Copy, Default)]
pub struct SnapshotOptions {
    /// Include built-in scalars and introspection types in the walk. By
    /// default they are skipped without a diagnostic.
    pub include_built_ins: bool,
    /// Rewrite well-known scalar names in field snapshots (`String` to
    /// `string`, `Int` to `number`, `Float` to `float`).
    pub normalize_scalar_names: bool,
}

/// Extension trait to allow converting a schema into a [`SchemaSnapshot`].
pub trait SnapshotExt {
    /// Convert every object and enum type into its snapshot. Type
    /// definitions of other kinds are dropped with a [`Diagnostic`]; the
    /// walk itself never fails.
    fn snapshot(&self, options: SnapshotOptions) -> SchemaSnapshot;

    /// Like [`snapshot`](SnapshotExt::snapshot), but the first condition
    /// that would produce a diagnostic is returned as an error instead.
    fn snapshot_strict(
        &self,
        options: SnapshotOptions,
    ) -> Result<SchemaSnapshot, SnapshotError>;
}

impl SnapshotExt for Schema {
    fn snapshot(&self, options: SnapshotOptions) -> SchemaSnapshot {
        let mut snapshot = SchemaSnapshot::default();
        for (type_name, extended_type) in &self.types {
            if extended_type.is_built_in() && !options.include_built_ins {
                continue;
            }
            match extended_type {
                ExtendedType::Enum(enum_type) => {
                    snapshot
                        .types
                        .insert(type_name.to_string(), enum_snapshot(enum_type));
                }
                ExtendedType::Object(object_type) => {
                    let converted =
                        object_snapshot(object_type, options, &mut snapshot.diagnostics);
                    snapshot.types.insert(type_name.to_string(), converted);
                }
                ExtendedType::Scalar(_)
                | ExtendedType::Interface(_)
                | ExtendedType::Union(_)
                | ExtendedType::InputObject(_) => {
                    report(
                        &mut snapshot.diagnostics,
                        Diagnostic::UnsupportedKind {
                            type_name: type_name.to_string(),
                            kind: TypeKind::from(extended_type),
                        },
                    );
                }
            }
        }
        snapshot
    }

    fn snapshot_strict(
        &self,
        options: SnapshotOptions,
    ) -> Result<SchemaSnapshot, SnapshotError> {
        let snapshot = self.snapshot(options);
        match snapshot.diagnostics.first() {
            Some(diagnostic) => Err(diagnostic.clone().into()),
            None => Ok(snapshot),
        }
    }
}

fn enum_snapshot(enum_type: &EnumType) -> TypeSnapshot {
    TypeSnapshot::Enum {
        fields: enum_type
            .values
            .keys()
            .map(|value| value.to_string())
            .collect(),
        directives: directive_map(enum_type.directives.iter().map(|component| &component.node)),
    }
}

fn object_snapshot(
    object_type: &ObjectType,
    options: SnapshotOptions,
    diagnostics: &mut Vec<Diagnostic>,
) -> TypeSnapshot {
    let mut fields = IndexMap::new();
    for (field_name, field) in &object_type.fields {
        if exceeds_supported_nesting(&field.ty) {
            report(
                diagnostics,
                Diagnostic::DeepNesting {
                    type_name: object_type.name.to_string(),
                    field_name: field_name.to_string(),
                    ty: field.ty.to_string(),
                },
            );
        }
        let shape = FieldShape::of(&field.ty);
        let type_name = if options.normalize_scalar_names {
            normalize_scalar_name(shape.type_name.as_str()).to_string()
        } else {
            shape.type_name.to_string()
        };
        fields.insert(
            field_name.to_string(),
            FieldSnapshot {
                type_name,
                directives: directive_map(field.directives.iter()),
                is_nullable: shape.is_nullable,
                is_list: shape.is_list,
            },
        );
    }
    TypeSnapshot::Object {
        fields,
        directives: directive_map(object_type.directives.iter().map(|component| &component.node)),
    }
}

fn report(diagnostics: &mut Vec<Diagnostic>, diagnostic: Diagnostic) {
    warn!("{diagnostic}");
    diagnostics.push(diagnostic);
}
