use crate::error::GraphQLError;
use crate::schema::Schema;
use crate::types::GraphQLType;
use crate::types::TypeRef;
use crate::validation::TypeInfo;
use libgql_parser::ast;
use libgql_parser::Span;
use std::collections::HashMap;
use std::collections::HashSet;

/// Shared state of one validation walk: the schema, the document's
/// fragment table, the [`TypeInfo`] shadow stacks, and the error sink.
pub(crate) struct ValidationContext<'a> {
    pub(crate) schema: &'a Schema,
    pub(crate) document: &'a ast::Document,
    pub(crate) fragments: HashMap<&'a str, &'a ast::FragmentDefinition>,
    pub(crate) type_info: TypeInfo,
    errors: Vec<GraphQLError>,
}

impl<'a> ValidationContext<'a> {
    pub(crate) fn new(schema: &'a Schema, document: &'a ast::Document) -> Self {
        Self {
            schema,
            document,
            fragments: document
                .fragments()
                .map(|frag| (frag.name.as_str(), frag))
                .collect(),
            type_info: TypeInfo::new(),
            errors: vec![],
        }
    }

    pub(crate) fn report_error(&mut self, message: impl Into<String>, spans: &[Span]) {
        self.errors.push(GraphQLError::at_spans(
            message,
            spans,
            &self.document.source,
        ));
    }

    pub(crate) fn fragment(&self, name: &str) -> Option<&'a ast::FragmentDefinition> {
        self.fragments.get(name).copied()
    }

    pub(crate) fn into_errors(self) -> Vec<GraphQLError> {
        self.errors
    }

    // =========================================================================
    // Variable usages
    // =========================================================================

    /// Variable usages of `operation` itself plus every fragment reachable
    /// through its spreads.
    pub(crate) fn recursive_variable_usages(
        &self,
        operation: &'a ast::OperationDefinition,
    ) -> Vec<VariableUsage> {
        let mut usages = vec![];
        let mut visited = HashSet::new();
        let root_type = match operation.kind {
            ast::OperationKind::Query => Some(self.schema.query_type()),
            ast::OperationKind::Mutation => self.schema.mutation_type(),
            ast::OperationKind::Subscription => self.schema.subscription_type(),
        };
        self.collect_set_usages(
            &operation.selection_set,
            root_type.cloned(),
            &mut usages,
            &mut visited,
        );
        for directive in &operation.directives {
            self.collect_directive_usages(directive, &mut usages);
        }
        usages
    }

    fn collect_set_usages(
        &self,
        selection_set: &'a ast::SelectionSet,
        parent_type: Option<GraphQLType>,
        usages: &mut Vec<VariableUsage>,
        visited: &mut HashSet<&'a str>,
    ) {
        for selection in &selection_set.selections {
            match selection {
                ast::Selection::Field(field) => {
                    let field_def = parent_type
                        .as_ref()
                        .and_then(GraphQLType::fields)
                        .and_then(|fields| fields.get(field.name.as_str()));
                    for argument in &field.arguments {
                        let arg_def = field_def
                            .and_then(|def| def.args.get(argument.name.as_str()));
                        self.collect_value_usages(
                            &argument.value,
                            arg_def.map(|def| def.arg_type.clone()),
                            arg_def.is_some_and(|def| def.default_value.is_some()),
                            usages,
                        );
                    }
                    for directive in &field.directives {
                        self.collect_directive_usages(directive, usages);
                    }
                    if let Some(nested) = &field.selection_set {
                        let nested_type = field_def.and_then(|def| {
                            def.field_type.innermost_type(self.schema).cloned()
                        });
                        self.collect_set_usages(nested, nested_type, usages, visited);
                    }
                }
                ast::Selection::FragmentSpread(spread) => {
                    for directive in &spread.directives {
                        self.collect_directive_usages(directive, usages);
                    }
                    let name = spread.name.as_str();
                    if visited.insert(name) {
                        if let Some(fragment) = self.fragment(name) {
                            let condition_type = self
                                .schema
                                .type_named(fragment.type_condition.as_str())
                                .cloned();
                            self.collect_set_usages(
                                &fragment.selection_set,
                                condition_type,
                                usages,
                                visited,
                            );
                        }
                    }
                }
                ast::Selection::InlineFragment(inline) => {
                    for directive in &inline.directives {
                        self.collect_directive_usages(directive, usages);
                    }
                    let condition_type = match &inline.type_condition {
                        Some(condition) => {
                            self.schema.type_named(condition.as_str()).cloned()
                        }
                        None => parent_type.clone(),
                    };
                    self.collect_set_usages(
                        &inline.selection_set,
                        condition_type,
                        usages,
                        visited,
                    );
                }
            }
        }
    }

    fn collect_directive_usages(
        &self,
        directive: &ast::DirectiveAnnotation,
        usages: &mut Vec<VariableUsage>,
    ) {
        let directive_def = self.schema.directive_named(directive.name.as_str());
        for argument in &directive.arguments {
            let arg_def = directive_def
                .and_then(|def| def.args().get(argument.name.as_str()));
            self.collect_value_usages(
                &argument.value,
                arg_def.map(|def| def.arg_type.clone()),
                arg_def.is_some_and(|def| def.default_value.is_some()),
                usages,
            );
        }
    }

    fn collect_value_usages(
        &self,
        value: &ast::Value,
        expected_type: Option<TypeRef>,
        has_location_default: bool,
        usages: &mut Vec<VariableUsage>,
    ) {
        match value {
            ast::Value::Variable(name) => usages.push(VariableUsage {
                name: name.as_str().to_string(),
                span: name.span,
                input_type: expected_type,
                has_location_default,
            }),
            ast::Value::List(list) => {
                let item_type = expected_type.as_ref().and_then(|ty| {
                    match ty.nullable() {
                        TypeRef::List(inner) => Some((**inner).clone()),
                        _ => None,
                    }
                });
                for item in &list.values {
                    self.collect_value_usages(item, item_type.clone(), false, usages);
                }
            }
            ast::Value::Object(object) => {
                let input_object = expected_type
                    .as_ref()
                    .and_then(|ty| ty.innermost_type(self.schema))
                    .and_then(GraphQLType::as_input_object)
                    .cloned();
                for field in &object.fields {
                    let field_def = input_object
                        .as_ref()
                        .and_then(|io| io.fields().get(field.name.as_str()).cloned());
                    self.collect_value_usages(
                        &field.value,
                        field_def.as_ref().map(|def| def.input_type.clone()),
                        field_def
                            .as_ref()
                            .is_some_and(|def| def.default_value.is_some()),
                        usages,
                    );
                }
            }
            _ => (),
        }
    }
}

/// One occurrence of `$variable` in an operation, with the input type the
/// position expects.
#[derive(Clone, Debug)]
pub(crate) struct VariableUsage {
    pub(crate) name: String,
    pub(crate) span: Span,
    pub(crate) input_type: Option<TypeRef>,
    /// Whether the argument/input-field position declares a default value
    /// (which relaxes `NonNull` positions for nullable variables).
    pub(crate) has_location_default: bool,
}

/// Variable definitions are checked against usage positions with this
/// June-2018 allowance: a nullable variable with a default may flow into a
/// non-null position, as may any variable into a position with a location
/// default.
pub(crate) fn allowed_variable_usage(
    schema: &Schema,
    var_type: &TypeRef,
    var_has_default: bool,
    location_type: &TypeRef,
    location_has_default: bool,
) -> bool {
    if location_type.is_non_null() && !var_type.is_non_null() {
        if !var_has_default && !location_has_default {
            return false;
        }
        return schema.is_subtype_of(var_type, location_type.nullable());
    }
    schema.is_subtype_of(var_type, location_type)
}
