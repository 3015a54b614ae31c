use apollo_compiler::Name;
use apollo_compiler::Node;
use apollo_compiler::ast::{Directive, FieldDefinition, Value};
use apollo_compiler::schema::Component;
use indexmap::IndexMap;

/// Directive name to extracted arguments, in declaration order.
pub type DirectiveMap = IndexMap<String, ArgumentMap>;

/// Argument name to literal value, in declaration order.
pub type ArgumentMap = IndexMap<String, serde_json::Value>;

/// Collect directive applications into a [`DirectiveMap`].
///
/// Takes directive nodes in declaration order; field-level lists yield them
/// directly, type-level component lists join by mapping components to their
/// nodes. When the same directive is applied more than once, the last
/// application wins while the name keeps its first position.
pub fn directive_map<'a, I>(directives: I) -> DirectiveMap
where
    I: IntoIterator<Item = &'a Node<Directive>>,
{
    let mut map = DirectiveMap::new();
    for directive in directives {
        map.insert(directive.name.to_string(), argument_map(directive));
    }
    map
}

/// Extract a single directive's arguments as plain values.
/// A directive applied without arguments yields an empty map.
pub fn argument_map(directive: &Directive) -> ArgumentMap {
    directive
        .arguments
        .iter()
        .map(|argument| (argument.name.to_string(), literal_value(&argument.value)))
        .collect()
}

fn literal_value(value: &Value) -> serde_json::Value {
    match value {
        Value::Null => serde_json::Value::Null,
        Value::Boolean(boolean) => (*boolean).into(),
        Value::String(text) => text.as_str().into(),
        Value::Enum(name) => name.as_str().into(),
        // Lexical forms that do not fit a JSON number are kept as strings
        Value::Int(int) => int
            .as_str()
            .parse::<i64>()
            .map(serde_json::Value::from)
            .unwrap_or_else(|_| int.as_str().into()),
        Value::Float(float) => float
            .try_to_f64()
            .ok()
            .and_then(serde_json::Number::from_f64)
            .map(serde_json::Value::Number)
            .unwrap_or_else(|| float.as_str().into()),
        Value::Variable(name) => format!("${name}").into(),
        Value::List(items) => items.iter().map(|item| literal_value(item)).collect(),
        Value::Object(fields) => fields
            .iter()
            .map(|(name, value)| (name.to_string(), literal_value(value)))
            .collect(),
    }
}

/// Iterate the fields of an object's field map that carry the named directive.
pub fn fields_with_directive<'a>(
    name: &'a str,
    fields: &'a apollo_compiler::collections::IndexMap<Name, Component<FieldDefinition>>,
) -> impl Iterator<Item = (&'a Name, &'a Component<FieldDefinition>)> + 'a {
    fields.iter().filter(move |(_, field)| {
        field
            .directives
            .iter()
            .any(|directive| directive.name.as_str() == name)
    })
}
