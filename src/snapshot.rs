use indexmap::IndexMap;
use serde::Serialize;

use crate::diagnostics::Diagnostic;
use crate::directives::DirectiveMap;
use crate::kind::TypeKind;

/// Plain-data snapshot of a schema, keyed by type name in declaration order.
///
/// Serializes as a single JSON object whose keys are the type names.
/// Diagnostics collected during the walk ride along but are not serialized.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SchemaSnapshot {
    #[serde(flatten)]
    pub(crate) types: IndexMap<String, TypeSnapshot>,
    #[serde(skip)]
    pub(crate) diagnostics: Vec<Diagnostic>,
}

impl SchemaSnapshot {
    /// All snapshotted types, keyed by type name in declaration order.
    pub fn types(&self) -> &IndexMap<String, TypeSnapshot> {
        &self.types
    }

    /// Look up one type's snapshot by name.
    pub fn get(&self, type_name: &str) -> Option<&TypeSnapshot> {
        self.types.get(type_name)
    }

    /// Non-fatal conditions encountered during the walk, in encounter order.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

/// One converted type definition, tagged with its kind on the wire.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum TypeSnapshot {
    Enum {
        /// Value names in declaration order.
        fields: Vec<String>,
        directives: DirectiveMap,
    },
    Object {
        /// Field snapshots in declaration order.
        fields: IndexMap<String, FieldSnapshot>,
        directives: DirectiveMap,
    },
}

impl TypeSnapshot {
    pub fn kind(&self) -> TypeKind {
        match self {
            TypeSnapshot::Enum { .. } => TypeKind::Enum,
            TypeSnapshot::Object { .. } => TypeKind::Object,
        }
    }

    pub fn directives(&self) -> &DirectiveMap {
        match self {
            TypeSnapshot::Enum { directives, .. } | TypeSnapshot::Object { directives, .. } => {
                directives
            }
        }
    }
}

/// One converted field of an object type.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldSnapshot {
    #[serde(rename = "type")]
    pub type_name: String,
    pub directives: DirectiveMap,
    pub is_nullable: bool,
    pub is_list: bool,
}

#[cfg(test)]
mod tests {
    use super::{FieldSnapshot, SchemaSnapshot, TypeSnapshot};
    use crate::directives::DirectiveMap;
    use crate::kind::TypeKind;
    use indexmap::IndexMap;
    use serde_json::json;

    #[test]
    fn it_serializes_as_one_object_keyed_by_type_name() {
        let mut fields = IndexMap::new();
        fields.insert(
            "color".to_string(),
            FieldSnapshot {
                type_name: "Color".to_string(),
                directives: DirectiveMap::new(),
                is_nullable: false,
                is_list: false,
            },
        );

        let mut types = IndexMap::new();
        types.insert(
            "Color".to_string(),
            TypeSnapshot::Enum {
                fields: vec!["RED".to_string()],
                directives: DirectiveMap::new(),
            },
        );
        types.insert(
            "Widget".to_string(),
            TypeSnapshot::Object {
                fields,
                directives: DirectiveMap::new(),
            },
        );

        let snapshot = SchemaSnapshot {
            types,
            diagnostics: Vec::new(),
        };

        assert_eq!(
            json!({
                "Color": {"type": "Enum", "fields": ["RED"], "directives": {}},
                "Widget": {
                    "type": "Object",
                    "fields": {
                        "color": {
                            "type": "Color",
                            "directives": {},
                            "isNullable": false,
                            "isList": false
                        }
                    },
                    "directives": {}
                }
            }),
            serde_json::to_value(&snapshot).expect("snapshot serializes"),
        );
    }

    #[test]
    fn it_reports_the_kind_of_each_snapshot() {
        let snapshot = TypeSnapshot::Enum {
            fields: Vec::new(),
            directives: DirectiveMap::new(),
        };

        assert_eq!(TypeKind::Enum, snapshot.kind());
        assert!(snapshot.directives().is_empty());
    }
}
