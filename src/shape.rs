use apollo_compiler::Name;
use apollo_compiler::schema::Type;

/// A field type reduced to its named type plus nullability and list flags.
///
/// Wrapper order is not preserved. `[Widget!]` and `[Widget]` both come out
/// as a nullable list of `Widget`, matching how the flags are reported in
/// [`FieldSnapshot`](crate::FieldSnapshot).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldShape {
    pub type_name: Name,
    pub is_nullable: bool,
    pub is_list: bool,
}

impl FieldShape {
    pub fn of(ty: &Type) -> Self {
        Self {
            type_name: ty.inner_named_type().clone(),
            is_nullable: !ty.is_non_null(),
            is_list: ty.is_list(),
        }
    }
}

/// True for list types whose element type is itself a list, such as `[[Int]]`.
/// Those lose their inner wrappers when reduced to a [`FieldShape`].
pub(crate) fn exceeds_supported_nesting(ty: &Type) -> bool {
    match ty {
        Type::List(inner) | Type::NonNullList(inner) => inner.is_list(),
        Type::Named(_) | Type::NonNullNamed(_) => false,
    }
}

/// Map the spellings of built-in scalars to their plain-data counterparts.
/// `String` becomes `string`, `Int` becomes `number`, `Float` becomes `float`.
/// Everything else, including `Boolean` and `ID`, passes through unchanged.
pub fn normalize_scalar_name(name: &str) -> &str {
    match name {
        "String" => "string",
        "Int" => "number",
        "Float" => "float",
        _ => name,
    }
}
