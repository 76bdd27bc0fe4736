//! Schema construction: transitive type collection, lazy-table
//! materialization, and type-system invariant checks.

use crate::introspection;
use crate::schema::schema::SchemaInner;
use crate::schema::valid_name_error;
use crate::schema::SchemaBuildError;
use crate::schema::SchemaConfig;
use crate::types::specified_directives;
use crate::types::Directive;
use crate::types::GraphQLType;
use crate::types::TypeRef;
use indexmap::IndexMap;
use std::collections::HashMap;
use std::sync::Arc;

type Result<T> = std::result::Result<T, SchemaBuildError>;

pub(crate) struct SchemaBuilder {
    config: SchemaConfig,
    types: IndexMap<String, GraphQLType>,
    /// Named (lazy) references seen during the walk, with a description of
    /// the referencing position for error messages.
    named_refs: Vec<(String, String)>,
    /// Abstract type name -> concrete object names, in registration order.
    possible_types: HashMap<String, Vec<String>>,
}

impl SchemaBuilder {
    pub(crate) fn new(config: SchemaConfig) -> Self {
        Self {
            config,
            types: IndexMap::new(),
            named_refs: vec![],
            possible_types: HashMap::new(),
        }
    }

    pub(crate) fn build(mut self) -> Result<SchemaInner> {
        let query_type = self
            .config
            .query
            .take()
            .ok_or(SchemaBuildError::MissingQueryType)?;
        if query_type.as_object().is_none() {
            return Err(SchemaBuildError::QueryTypeMustBeObject {
                type_name: query_type.name().to_string(),
            });
        }
        let mutation_type = self.config.mutation.take();
        let subscription_type = self.config.subscription.take();
        for (operation, root) in [
            ("Mutation", mutation_type.as_ref()),
            ("Subscription", subscription_type.as_ref()),
        ] {
            if let Some(root) = root {
                if root.as_object().is_none() {
                    return Err(SchemaBuildError::RootTypeMustBeObject {
                        operation: operation.to_string(),
                        type_name: root.name().to_string(),
                    });
                }
            }
        }

        let directives = merge_directives(std::mem::take(&mut self.config.directives));
        for directive in &directives {
            if let Some(err) = directive.config_error() {
                return Err(err.clone());
            }
        }
        {
            let mut seen = vec![];
            for directive in &directives {
                if seen.contains(&directive.name()) {
                    return Err(SchemaBuildError::DuplicateDirectiveName {
                        directive_name: directive.name().to_string(),
                    });
                }
                seen.push(directive.name());
            }
        }

        // Transitive collection, starting from the roots, the extra
        // configured types, the directives' argument types, and the
        // introspection overlay.
        let mut worklist: Vec<(GraphQLType, String)> = vec![];
        worklist.push((query_type.clone(), "the Query root".to_string()));
        if let Some(mutation) = &mutation_type {
            worklist.push((mutation.clone(), "the Mutation root".to_string()));
        }
        if let Some(subscription) = &subscription_type {
            worklist.push((subscription.clone(), "the Subscription root".to_string()));
        }
        for extra in std::mem::take(&mut self.config.types) {
            worklist.push((extra, "the configured type list".to_string()));
        }
        for directive in &directives {
            for (arg_name, arg) in directive.args() {
                self.walk_type_ref(
                    &arg.arg_type,
                    format!("@{}({arg_name}:)", directive.name()),
                    &mut worklist,
                )?;
            }
        }
        for meta in introspection::meta_types() {
            worklist.push((meta, "the introspection overlay".to_string()));
        }

        // Breadth-first so user types register (and list in introspection)
        // before the overlay's transitive references.
        while !worklist.is_empty() {
            let (ty, referenced_from) = worklist.remove(0);
            self.register(ty, referenced_from, &mut worklist)?;
        }

        // Every lazy name must now resolve.
        for (name, referenced_from) in std::mem::take(&mut self.named_refs) {
            if !self.types.contains_key(name.as_str()) {
                return Err(SchemaBuildError::UnknownType {
                    type_name: name,
                    referenced_from,
                });
            }
        }

        self.index_possible_types()?;
        self.validate_types()?;

        Ok(SchemaInner {
            query_type,
            mutation_type,
            subscription_type,
            types: self.types,
            directives,
            possible_types: self.possible_types,
            applied_directives: std::mem::take(&mut self.config.applied_directives),
        })
    }

    /// Adds one type to the table (a name collision between two distinct
    /// type values is an error) and queues every type it references.
    fn register(
        &mut self,
        ty: GraphQLType,
        referenced_from: String,
        worklist: &mut Vec<(GraphQLType, String)>,
    ) -> Result<()> {
        if let Some(existing) = self.types.get(ty.name()) {
            if existing.ptr_eq(&ty) {
                return Ok(());
            }
            return Err(SchemaBuildError::DuplicateTypeName {
                type_name: ty.name().to_string(),
            });
        }
        if let Some(err) = ty.config_error() {
            return Err(err.clone());
        }
        if ty.name().starts_with("__")
            && !introspection::is_introspection_type_name(ty.name())
        {
            return Err(SchemaBuildError::ReservedName {
                name: ty.name().to_string(),
            });
        }
        log::trace!("registering type {} (referenced from {})", ty.name(), referenced_from);
        self.types.insert(ty.name().to_string(), ty.clone());

        match &ty {
            GraphQLType::Object(object) => {
                for (field_name, field) in object.fields() {
                    let location = format!("{}.{}", object.name(), field_name);
                    self.walk_type_ref(&field.field_type, location.clone(), worklist)?;
                    for (arg_name, arg) in &field.args {
                        self.walk_type_ref(
                            &arg.arg_type,
                            format!("{location}({arg_name}:)"),
                            worklist,
                        )?;
                    }
                }
                for interface_ref in object.interfaces() {
                    self.walk_type_ref(
                        interface_ref,
                        format!("interfaces of \"{}\"", object.name()),
                        worklist,
                    )?;
                }
            }
            GraphQLType::Interface(interface) => {
                for (field_name, field) in interface.fields() {
                    let location = format!("{}.{}", interface.name(), field_name);
                    self.walk_type_ref(&field.field_type, location.clone(), worklist)?;
                    for (arg_name, arg) in &field.args {
                        self.walk_type_ref(
                            &arg.arg_type,
                            format!("{location}({arg_name}:)"),
                            worklist,
                        )?;
                    }
                }
            }
            GraphQLType::Union(union_type) => {
                for member_ref in union_type.member_types() {
                    self.walk_type_ref(
                        member_ref,
                        format!("members of union \"{}\"", union_type.name()),
                        worklist,
                    )?;
                }
            }
            GraphQLType::InputObject(input_object) => {
                for (field_name, field) in input_object.fields() {
                    self.walk_type_ref(
                        &field.input_type,
                        format!("{}.{}", input_object.name(), field_name),
                        worklist,
                    )?;
                }
            }
            GraphQLType::Scalar(_) | GraphQLType::Enum(_) => (),
        }
        Ok(())
    }

    /// Unwraps a reference, rejecting `NonNull` directly inside `NonNull`,
    /// queueing embedded type values, and recording lazy names for the
    /// post-walk resolution check.
    fn walk_type_ref(
        &mut self,
        type_ref: &TypeRef,
        location: String,
        worklist: &mut Vec<(GraphQLType, String)>,
    ) -> Result<()> {
        match type_ref {
            TypeRef::Direct(ty) => {
                worklist.push((ty.clone(), location));
                Ok(())
            }
            TypeRef::Named(name) => {
                self.named_refs.push((name.clone(), location));
                Ok(())
            }
            TypeRef::List(inner) => self.walk_type_ref(inner, location, worklist),
            TypeRef::NonNull(inner) => {
                if inner.is_non_null() {
                    return Err(SchemaBuildError::NonNullWrapsNonNull { location });
                }
                self.walk_type_ref(inner, location, worklist)
            }
        }
    }

    /// Builds the abstract-type index: interface -> implementers (in
    /// registration order), union -> members (in declaration order).
    fn index_possible_types(&mut self) -> Result<()> {
        for ty in self.types.values() {
            match ty {
                GraphQLType::Object(object) => {
                    for interface_ref in object.interfaces() {
                        let interface_name = interface_ref.innermost_name();
                        match self.types.get(interface_name) {
                            Some(GraphQLType::Interface(_)) => (),
                            _ => {
                                return Err(SchemaBuildError::ImplementsNonInterface {
                                    object: object.name().to_string(),
                                    interface: interface_name.to_string(),
                                });
                            }
                        }
                        self.possible_types
                            .entry(interface_name.to_string())
                            .or_default()
                            .push(object.name().to_string());
                    }
                }
                GraphQLType::Union(union_type) => {
                    let mut members = vec![];
                    for member_ref in union_type.member_types() {
                        let member_name = member_ref.innermost_name();
                        match self.types.get(member_name) {
                            Some(GraphQLType::Object(_)) => (),
                            _ => {
                                return Err(SchemaBuildError::UnionMemberNotObject {
                                    union_name: union_type.name().to_string(),
                                    member: member_name.to_string(),
                                });
                            }
                        }
                        members.push(member_name.to_string());
                    }
                    if members.is_empty() {
                        return Err(SchemaBuildError::EmptyUnion {
                            union_name: union_type.name().to_string(),
                        });
                    }
                    self.possible_types
                        .insert(union_type.name().to_string(), members);
                }
                _ => (),
            }
        }
        Ok(())
    }

    fn validate_types(&self) -> Result<()> {
        for ty in self.types.values() {
            let is_meta = ty.name().starts_with("__");
            match ty {
                GraphQLType::Object(object) => {
                    self.validate_field_table(ty, is_meta)?;
                    for interface_ref in object.interfaces() {
                        self.validate_implementation(ty, interface_ref)?;
                    }
                }
                GraphQLType::Interface(_) => {
                    self.validate_field_table(ty, is_meta)?;
                }
                GraphQLType::Union(union_type) => {
                    // Abstract resolution must be possible at runtime.
                    if union_type.resolve_type().is_none() {
                        for member_name in &self.possible_types[union_type.name()] {
                            let member = &self.types[member_name.as_str()];
                            let resolvable = member
                                .as_object()
                                .is_some_and(|object| object.is_type_of().is_some());
                            if !resolvable {
                                return Err(
                                    SchemaBuildError::UnresolvableUnionMember {
                                        union_name: union_type.name().to_string(),
                                        member: member_name.clone(),
                                    },
                                );
                            }
                        }
                    }
                }
                GraphQLType::Enum(enum_type) => {
                    if enum_type.values().is_empty() {
                        return Err(SchemaBuildError::EmptyEnum {
                            type_name: enum_type.name().to_string(),
                        });
                    }
                }
                GraphQLType::InputObject(input_object) => {
                    for (field_name, field) in input_object.fields() {
                        let location =
                            format!("{}.{}", input_object.name(), field_name);
                        self.check_member_name(field_name, is_meta)?;
                        self.check_input_position(&field.input_type, &location)?;
                    }
                }
                GraphQLType::Scalar(_) => (),
            }
        }
        Ok(())
    }

    /// Shared object/interface field-table checks: at least one field,
    /// valid member names, output field types, input argument types.
    fn validate_field_table(&self, ty: &GraphQLType, is_meta: bool) -> Result<()> {
        let fields = ty.fields().expect("only called for objects and interfaces");
        if fields.is_empty() {
            return Err(SchemaBuildError::EmptyFields {
                type_name: ty.name().to_string(),
            });
        }
        for (field_name, field) in fields {
            let location = format!("{}.{}", ty.name(), field_name);
            self.check_member_name(field_name, is_meta)?;
            self.check_output_position(&field.field_type, &location)?;
            for (arg_name, arg) in &field.args {
                self.check_member_name(arg_name, is_meta)?;
                self.check_input_position(
                    &arg.arg_type,
                    &format!("{location}({arg_name}:)"),
                )?;
            }
        }
        Ok(())
    }

    fn check_member_name(&self, name: &str, is_meta: bool) -> Result<()> {
        if let Some(err) = valid_name_error(name) {
            return Err(err);
        }
        if !is_meta && name.starts_with("__") {
            return Err(SchemaBuildError::ReservedName {
                name: name.to_string(),
            });
        }
        Ok(())
    }

    fn check_output_position(&self, type_ref: &TypeRef, location: &str) -> Result<()> {
        let inner = self.resolve_innermost(type_ref, location)?;
        if !inner.is_output_type() {
            return Err(SchemaBuildError::NotOutputType {
                location: location.to_string(),
                type_name: inner.name().to_string(),
            });
        }
        Ok(())
    }

    fn check_input_position(&self, type_ref: &TypeRef, location: &str) -> Result<()> {
        let inner = self.resolve_innermost(type_ref, location)?;
        if !inner.is_input_type() {
            return Err(SchemaBuildError::NotInputType {
                location: location.to_string(),
                type_name: inner.name().to_string(),
            });
        }
        Ok(())
    }

    fn resolve_innermost<'a>(
        &'a self,
        type_ref: &'a TypeRef,
        location: &str,
    ) -> Result<&'a GraphQLType> {
        match type_ref {
            TypeRef::Direct(ty) => Ok(ty),
            TypeRef::Named(name) => self.types.get(name.as_str()).ok_or_else(|| {
                SchemaBuildError::UnknownType {
                    type_name: name.clone(),
                    referenced_from: location.to_string(),
                }
            }),
            TypeRef::List(inner) | TypeRef::NonNull(inner) => {
                self.resolve_innermost(inner, location)
            }
        }
    }

    /// Interface implementation checks: every interface field is present
    /// with a covariant type and invariant arguments; extra arguments on
    /// the object must not be required.
    fn validate_implementation(
        &self,
        object_type: &GraphQLType,
        interface_ref: &TypeRef,
    ) -> Result<()> {
        let object = object_type.as_object().expect("object side checked");
        let interface_name = interface_ref.innermost_name();
        let GraphQLType::Interface(interface) = &self.types[interface_name] else {
            unreachable!("checked during possible-type indexing");
        };

        for (field_name, interface_field) in interface.fields() {
            let Some(object_field) = object.fields().get(field_name) else {
                return Err(SchemaBuildError::MissingInterfaceField {
                    object: object.name().to_string(),
                    interface: interface.name().to_string(),
                    field: field_name.clone(),
                });
            };

            if !self.ref_is_subtype_of(
                &object_field.field_type,
                &interface_field.field_type,
            ) {
                return Err(SchemaBuildError::IncompatibleInterfaceFieldType {
                    object: object.name().to_string(),
                    interface: interface.name().to_string(),
                    field: field_name.clone(),
                    expected: interface_field.field_type.to_string(),
                    actual: object_field.field_type.to_string(),
                });
            }

            for (arg_name, interface_arg) in &interface_field.args {
                let Some(object_arg) = object_field.args.get(arg_name) else {
                    return Err(SchemaBuildError::MissingInterfaceFieldArgument {
                        object: object.name().to_string(),
                        interface: interface.name().to_string(),
                        field: field_name.clone(),
                        argument: arg_name.clone(),
                    });
                };
                // Argument types are invariant.
                if !object_arg.arg_type.is_equal(&interface_arg.arg_type) {
                    return Err(
                        SchemaBuildError::IncompatibleInterfaceFieldArgument {
                            object: object.name().to_string(),
                            interface: interface.name().to_string(),
                            field: field_name.clone(),
                            argument: arg_name.clone(),
                            expected: interface_arg.arg_type.to_string(),
                            actual: object_arg.arg_type.to_string(),
                        },
                    );
                }
            }

            for (arg_name, object_arg) in &object_field.args {
                if !interface_field.args.contains_key(arg_name)
                    && object_arg.is_required()
                {
                    return Err(SchemaBuildError::ExtraRequiredArgument {
                        object: object.name().to_string(),
                        interface: interface.name().to_string(),
                        field: field_name.clone(),
                        argument: arg_name.clone(),
                        arg_type: object_arg.arg_type.to_string(),
                    });
                }
            }
        }
        Ok(())
    }

    /// Covariance over the collected (pre-`Schema`) type table.
    fn ref_is_subtype_of(&self, sub: &TypeRef, sup: &TypeRef) -> bool {
        match (sub, sup) {
            (TypeRef::NonNull(sub_inner), TypeRef::NonNull(sup_inner)) => {
                self.ref_is_subtype_of(sub_inner, sup_inner)
            }
            (TypeRef::NonNull(sub_inner), _) => self.ref_is_subtype_of(sub_inner, sup),
            (_, TypeRef::NonNull(_)) => false,
            (TypeRef::List(sub_inner), TypeRef::List(sup_inner)) => {
                self.ref_is_subtype_of(sub_inner, sup_inner)
            }
            (TypeRef::List(_), _) | (_, TypeRef::List(_)) => false,
            (sub, sup) => {
                let sub_name = sub.innermost_name();
                let sup_name = sup.innermost_name();
                sub_name == sup_name
                    || self
                        .possible_types
                        .get(sup_name)
                        .is_some_and(|members| {
                            members.iter().any(|member| member == sub_name)
                        })
            }
        }
    }
}

/// The effective directive set: the caller's customs (or the specified set
/// when none are given), with `include`, `skip`, and `deprecated` always
/// compiled in.
fn merge_directives(custom: Vec<Arc<Directive>>) -> Vec<Arc<Directive>> {
    let mut directives = if custom.is_empty() {
        specified_directives()
    } else {
        custom
    };
    for required in [
        crate::types::include_directive(),
        crate::types::skip_directive(),
        crate::types::deprecated_directive(),
    ] {
        if !directives.iter().any(|d| d.name() == required.name()) {
            directives.push(required);
        }
    }
    directives
}
