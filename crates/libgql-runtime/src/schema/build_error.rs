/// A configuration error detected while constructing a [`Schema`]
/// (crate::Schema).
///
/// Type factories never fail; they capture their error and schema
/// construction surfaces the first one found. A schema that failed to
/// build is unusable.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum SchemaBuildError {
    #[error("Schema must define a Query root type.")]
    MissingQueryType,

    #[error("{owner} must be named.")]
    MissingName { owner: String },

    #[error(
        "Name \"{name}\" is invalid: names must match /^[_A-Za-z][_A-Za-z0-9]*$/."
    )]
    InvalidName { name: String },

    #[error(
        "Name \"{name}\" must not begin with \"__\", which is reserved by \
         GraphQL introspection."
    )]
    ReservedName { name: String },

    #[error("Schema must contain unique named types but contains multiple types named \"{type_name}\".")]
    DuplicateTypeName { type_name: String },

    #[error("Unknown type \"{type_name}\" referenced from {referenced_from}.")]
    UnknownType {
        type_name: String,
        referenced_from: String,
    },

    #[error("Non-null type cannot wrap another non-null type at {location}.")]
    NonNullWrapsNonNull { location: String },

    #[error("{type_name} fields must be an object with field names as keys or a thunk which returns such an object; it defines no fields.")]
    EmptyFields { type_name: String },

    #[error("The type of {location} must be an output type, but \"{type_name}\" is an input type.")]
    NotOutputType {
        location: String,
        type_name: String,
    },

    #[error("The type of {location} must be an input type, but \"{type_name}\" is an output type.")]
    NotInputType {
        location: String,
        type_name: String,
    },

    #[error("Query root type must be an Object type, but \"{type_name}\" is not.")]
    QueryTypeMustBeObject { type_name: String },

    #[error("{operation} root type must be an Object type, but \"{type_name}\" is not.")]
    RootTypeMustBeObject {
        operation: String,
        type_name: String,
    },

    #[error("\"{object}\" expects \"{interface}\" to be an Interface type.")]
    ImplementsNonInterface { object: String, interface: String },

    #[error("\"{interface}\" expects field \"{field}\" but \"{object}\" does not provide it.")]
    MissingInterfaceField {
        object: String,
        interface: String,
        field: String,
    },

    #[error("\"{interface}.{field}\" expects type \"{expected}\" but \"{object}.{field}\" provides type \"{actual}\".")]
    IncompatibleInterfaceFieldType {
        object: String,
        interface: String,
        field: String,
        expected: String,
        actual: String,
    },

    #[error("\"{interface}.{field}\" expects argument \"{argument}\" but \"{object}.{field}\" does not provide it.")]
    MissingInterfaceFieldArgument {
        object: String,
        interface: String,
        field: String,
        argument: String,
    },

    #[error("\"{interface}.{field}({argument}:)\" expects type \"{expected}\" but \"{object}.{field}({argument}:)\" provides type \"{actual}\".")]
    IncompatibleInterfaceFieldArgument {
        object: String,
        interface: String,
        field: String,
        argument: String,
        expected: String,
        actual: String,
    },

    #[error("\"{object}.{field}({argument}:)\" is of required type \"{arg_type}\" but is not provided by interface \"{interface}.{field}\".")]
    ExtraRequiredArgument {
        object: String,
        interface: String,
        field: String,
        argument: String,
        arg_type: String,
    },

    #[error("Union \"{union_name}\" may only include Object types, but \"{member}\" is not one.")]
    UnionMemberNotObject { union_name: String, member: String },

    #[error("Union \"{union_name}\" defines no member types.")]
    EmptyUnion { union_name: String },

    #[error(
        "Union \"{union_name}\" does not provide a \"resolve_type\" function \
         and member type \"{member}\" does not provide an \"is_type_of\" \
         function. There is no way to determine at runtime which union member \
         a value belongs to."
    )]
    UnresolvableUnionMember { union_name: String, member: String },

    #[error("Enum \"{type_name}\" defines no values.")]
    EmptyEnum { type_name: String },

    #[error("Enum \"{type_name}\" maps multiple value names to the internal value {value}.")]
    DuplicateEnumValue { type_name: String, value: String },

    #[error("Directive \"{directive_name}\" must provide at least one location.")]
    DirectiveWithoutLocations { directive_name: String },

    #[error("Schema must contain uniquely named directives but contains multiple directives named \"{directive_name}\".")]
    DuplicateDirectiveName { directive_name: String },
}

/// The GraphQL name grammar: `/^[_A-Za-z][_A-Za-z0-9]*$/`.
pub(crate) fn is_valid_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first == '_' || first.is_ascii_alphabetic() => {
            chars.all(|ch| ch == '_' || ch.is_ascii_alphanumeric())
        }
        _ => false,
    }
}

pub(crate) fn valid_name_error(name: &str) -> Option<SchemaBuildError> {
    if is_valid_name(name) {
        None
    } else {
        Some(SchemaBuildError::InvalidName {
            name: name.to_string(),
        })
    }
}

/// Name validation for configuration factories: a name must be present and
/// well-formed. Reserved `__` prefixes are checked later, at schema
/// registration, because the introspection overlay legitimately uses them.
pub(crate) fn name_config_error(
    name: &str,
    owner: &'static str,
) -> Option<SchemaBuildError> {
    if name.is_empty() {
        return Some(SchemaBuildError::MissingName {
            owner: owner.to_string(),
        });
    }
    valid_name_error(name)
}
