use crate::resolver::ResolverFn;
use crate::types::AppliedDirective;
use crate::types::TypeRef;
use indexmap::IndexMap;

/// The ordered field table of an object or interface type. Keys are field
/// names; introspection and response assembly preserve this order.
pub type Fields = IndexMap<String, FieldDef>;

/// One output field definition.
#[derive(Clone)]
pub struct FieldDef {
    pub description: Option<String>,
    pub field_type: TypeRef,
    pub args: IndexMap<String, ArgumentDef>,
    pub resolver: Option<ResolverFn>,
    pub deprecation_reason: Option<String>,
    pub applied_directives: Vec<AppliedDirective>,
}

impl FieldDef {
    pub fn new(field_type: impl Into<TypeRef>) -> Self {
        Self {
            description: None,
            field_type: field_type.into(),
            args: IndexMap::new(),
            resolver: None,
            deprecation_reason: None,
            applied_directives: vec![],
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn arg(mut self, name: impl Into<String>, arg: ArgumentDef) -> Self {
        self.args.insert(name.into(), arg);
        self
    }

    pub fn resolver(
        mut self,
        resolver: impl Fn(crate::resolver::ResolveParams<'_>)
            -> Result<crate::resolver::Resolved, crate::resolver::FieldError>
            + Send
            + Sync
            + 'static,
    ) -> Self {
        self.resolver = Some(std::sync::Arc::new(resolver));
        self
    }

    pub fn deprecated(mut self, reason: impl Into<String>) -> Self {
        self.deprecation_reason = Some(reason.into());
        self
    }

    pub fn applied_directive(mut self, directive: AppliedDirective) -> Self {
        self.applied_directives.push(directive);
        self
    }

    pub fn is_deprecated(&self) -> bool {
        self.deprecation_reason.is_some()
    }
}

impl std::fmt::Debug for FieldDef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FieldDef")
            .field("field_type", &self.field_type)
            .field("args", &self.args)
            .field("has_resolver", &self.resolver.is_some())
            .field("deprecation_reason", &self.deprecation_reason)
            .finish_non_exhaustive()
    }
}

/// One argument definition on a field or directive.
#[derive(Clone, Debug)]
pub struct ArgumentDef {
    pub description: Option<String>,
    pub arg_type: TypeRef,
    pub default_value: Option<serde_json::Value>,
    pub applied_directives: Vec<AppliedDirective>,
}

impl ArgumentDef {
    pub fn new(arg_type: impl Into<TypeRef>) -> Self {
        Self {
            description: None,
            arg_type: arg_type.into(),
            default_value: None,
            applied_directives: vec![],
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn default_value(mut self, value: impl Into<serde_json::Value>) -> Self {
        self.default_value = Some(value.into());
        self
    }

    pub fn applied_directive(mut self, directive: AppliedDirective) -> Self {
        self.applied_directives.push(directive);
        self
    }

    /// Required means non-null type with no default.
    pub fn is_required(&self) -> bool {
        self.arg_type.is_non_null() && self.default_value.is_none()
    }
}
