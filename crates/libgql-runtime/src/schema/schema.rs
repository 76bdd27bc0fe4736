use crate::schema::SchemaBuildError;
use crate::schema::SchemaBuilder;
use crate::types::AppliedDirective;
use crate::types::Directive;
use crate::types::GraphQLType;
use crate::types::TypeRef;
use indexmap::IndexMap;
use std::collections::HashMap;
use std::sync::Arc;

/// Configuration for [`Schema::new`].
#[derive(Default)]
pub struct SchemaConfig {
    /// The Query root type. Required; must be an object type.
    pub query: Option<GraphQLType>,
    pub mutation: Option<GraphQLType>,
    pub subscription: Option<GraphQLType>,
    /// Extra types not reachable from the roots (e.g. object types only
    /// referenced by name, or interface implementers never named
    /// directly).
    pub types: Vec<GraphQLType>,
    /// Custom directive definitions. Providing any replaces the default
    /// set's customs; `include`, `skip`, and `deprecated` are always
    /// compiled in.
    pub directives: Vec<Arc<Directive>>,
    /// Applied-directive metadata attached to the schema itself.
    pub applied_directives: Vec<AppliedDirective>,
}

/// A fully validated, immutable GraphQL schema.
///
/// Construction walks every reachable type, materializes lazy tables, and
/// checks the type-system invariants; the first problem found aborts with a
/// [`SchemaBuildError`]. A finalized schema is read-only, cheap to clone,
/// and safe to share across concurrent executions.
#[derive(Clone, Debug)]
pub struct Schema {
    inner: Arc<SchemaInner>,
}

#[derive(Debug)]
pub(crate) struct SchemaInner {
    pub(crate) query_type: GraphQLType,
    pub(crate) mutation_type: Option<GraphQLType>,
    pub(crate) subscription_type: Option<GraphQLType>,
    /// Name -> type, in registration order.
    pub(crate) types: IndexMap<String, GraphQLType>,
    pub(crate) directives: Vec<Arc<Directive>>,
    /// Abstract type name -> concrete object type names.
    pub(crate) possible_types: HashMap<String, Vec<String>>,
    pub(crate) applied_directives: Vec<AppliedDirective>,
}

impl Schema {
    pub fn new(config: SchemaConfig) -> Result<Schema, SchemaBuildError> {
        let inner = SchemaBuilder::new(config).build()?;
        log::debug!(
            "schema built: {} types, {} directives",
            inner.types.len(),
            inner.directives.len(),
        );
        Ok(Schema {
            inner: Arc::new(inner),
        })
    }

    /// The Query root operation type.
    pub fn query_type(&self) -> &GraphQLType {
        &self.inner.query_type
    }

    /// The Mutation root operation type, when one was configured.
    pub fn mutation_type(&self) -> Option<&GraphQLType> {
        self.inner.mutation_type.as_ref()
    }

    /// The Subscription root operation type, when one was configured.
    pub fn subscription_type(&self) -> Option<&GraphQLType> {
        self.inner.subscription_type.as_ref()
    }

    /// All named types, including built-ins and the introspection overlay,
    /// in registration order.
    pub fn types(&self) -> &IndexMap<String, GraphQLType> {
        &self.inner.types
    }

    pub fn type_named(&self, name: &str) -> Option<&GraphQLType> {
        self.inner.types.get(name)
    }

    /// All directive definitions, including the compiled-in set.
    pub fn directives(&self) -> &[Arc<Directive>] {
        &self.inner.directives
    }

    pub fn directive_named(&self, name: &str) -> Option<&Arc<Directive>> {
        self.inner
            .directives
            .iter()
            .find(|directive| directive.name() == name)
    }

    /// The concrete object types an abstract type may resolve to.
    pub fn possible_types(&self, abstract_name: &str) -> Vec<&GraphQLType> {
        self.inner
            .possible_types
            .get(abstract_name)
            .map(|names| {
                names
                    .iter()
                    .filter_map(|name| self.type_named(name))
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn is_possible_type(&self, abstract_name: &str, object_name: &str) -> bool {
        self.inner
            .possible_types
            .get(abstract_name)
            .is_some_and(|names| names.iter().any(|name| name == object_name))
    }

    /// Applied-directive metadata attached to the schema itself.
    pub fn applied_directives(&self) -> &[AppliedDirective] {
        &self.inner.applied_directives
    }

    /// Whether `sub` may be used where `sup` is expected: equal types,
    /// covariant wrappers, or a concrete/abstract possible-type
    /// relationship.
    pub fn is_subtype_of(&self, sub: &TypeRef, sup: &TypeRef) -> bool {
        match (sub, sup) {
            (TypeRef::NonNull(sub_inner), TypeRef::NonNull(sup_inner)) => {
                self.is_subtype_of(sub_inner, sup_inner)
            }
            // A non-null value satisfies a nullable position.
            (TypeRef::NonNull(sub_inner), _) => self.is_subtype_of(sub_inner, sup),
            (_, TypeRef::NonNull(_)) => false,
            (TypeRef::List(sub_inner), TypeRef::List(sup_inner)) => {
                self.is_subtype_of(sub_inner, sup_inner)
            }
            (TypeRef::List(_), _) | (_, TypeRef::List(_)) => false,
            (sub, sup) => {
                let sub_name = sub.innermost_name();
                let sup_name = sup.innermost_name();
                sub_name == sup_name || self.is_possible_type(sup_name, sub_name)
            }
        }
    }

    /// Whether two composite types could describe the same runtime object
    /// (used to decide if a fragment can ever apply).
    pub fn do_types_overlap(&self, a: &GraphQLType, b: &GraphQLType) -> bool {
        if a.name() == b.name() {
            return true;
        }
        match (a.is_abstract_type(), b.is_abstract_type()) {
            (true, true) => self.possible_types(a.name()).iter().any(|possible| {
                self.is_possible_type(b.name(), possible.name())
            }),
            (true, false) => self.is_possible_type(a.name(), b.name()),
            (false, true) => self.is_possible_type(b.name(), a.name()),
            (false, false) => false,
        }
    }
}
