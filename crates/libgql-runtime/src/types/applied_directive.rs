/// Directive metadata applied to a schema element.
///
/// Applied directives are pure metadata: recorded next to the types,
/// fields, arguments, and enum values they annotate, and surfaced only
/// through the extended introspection. They never influence validation or
/// execution.
#[derive(Clone, Debug, PartialEq)]
pub struct AppliedDirective {
    pub name: String,
    pub args: Vec<DirectiveArgument>,
}

impl AppliedDirective {
    pub fn new(
        name: impl Into<String>,
        args: impl IntoIterator<Item = DirectiveArgument>,
    ) -> Self {
        Self {
            name: name.into(),
            args: args.into_iter().collect(),
        }
    }
}

/// One named argument value on an [`AppliedDirective`].
#[derive(Clone, Debug, PartialEq)]
pub struct DirectiveArgument {
    pub name: String,
    pub value: serde_json::Value,
}

impl DirectiveArgument {
    pub fn new(name: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}
