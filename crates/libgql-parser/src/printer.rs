//! Canonical printing of AST nodes back to GraphQL source text.
//!
//! `parse(print_document(doc))` yields an AST equal to `doc` modulo spans.
//! The layout follows the reference printers: two-space indentation, one
//! blank line between top-level definitions.

use crate::ast;

/// Prints a whole document.
pub fn print_document(document: &ast::Document) -> String {
    let printed: Vec<String> = document
        .definitions
        .iter()
        .map(print_definition)
        .collect();
    printed.join("\n\n")
}

fn print_definition(definition: &ast::Definition) -> String {
    match definition {
        ast::Definition::Operation(op) => print_operation(op),
        ast::Definition::Fragment(frag) => print_fragment(frag),
        ast::Definition::TypeSystem(def) => print_type_system_definition(def),
    }
}

fn print_operation(op: &ast::OperationDefinition) -> String {
    let selections = print_selection_set(&op.selection_set, 0);

    // Anonymous queries with no variables or directives print in the
    // shorthand form.
    if op.kind == ast::OperationKind::Query
        && op.name.is_none()
        && op.variable_definitions.is_empty()
        && op.directives.is_empty()
    {
        return selections;
    }

    let mut out = op.kind.as_str().to_string();
    if let Some(name) = &op.name {
        out.push(' ');
        out.push_str(name.as_str());
    }
    if !op.variable_definitions.is_empty() {
        let defs: Vec<String> = op
            .variable_definitions
            .iter()
            .map(print_variable_definition)
            .collect();
        if op.name.is_none() {
            out.push(' ');
        }
        out.push_str(&format!("({})", defs.join(", ")));
    }
    out.push_str(&print_directives(&op.directives));
    out.push(' ');
    out.push_str(&selections);
    out
}

fn print_variable_definition(def: &ast::VariableDefinition) -> String {
    let mut out = format!("${}: {}", def.name.as_str(), def.type_annotation);
    if let Some(default) = &def.default_value {
        out.push_str(&format!(" = {}", print_value(default)));
    }
    out
}

fn print_fragment(frag: &ast::FragmentDefinition) -> String {
    format!(
        "fragment {} on {}{} {}",
        frag.name.as_str(),
        frag.type_condition.as_str(),
        print_directives(&frag.directives),
        print_selection_set(&frag.selection_set, 0),
    )
}

/// Prints a selection set at the given indentation depth.
pub fn print_selection_set(set: &ast::SelectionSet, depth: usize) -> String {
    let indent = "  ".repeat(depth + 1);
    let mut out = "{\n".to_string();
    for selection in &set.selections {
        out.push_str(&indent);
        out.push_str(&print_selection(selection, depth + 1));
        out.push('\n');
    }
    out.push_str(&"  ".repeat(depth));
    out.push('}');
    out
}

fn print_selection(selection: &ast::Selection, depth: usize) -> String {
    match selection {
        ast::Selection::Field(field) => {
            let mut out = String::new();
            if let Some(alias) = &field.alias {
                out.push_str(alias.as_str());
                out.push_str(": ");
            }
            out.push_str(field.name.as_str());
            out.push_str(&print_arguments(&field.arguments));
            out.push_str(&print_directives(&field.directives));
            if let Some(set) = &field.selection_set {
                out.push(' ');
                out.push_str(&print_selection_set(set, depth));
            }
            out
        }
        ast::Selection::FragmentSpread(spread) => format!(
            "...{}{}",
            spread.name.as_str(),
            print_directives(&spread.directives),
        ),
        ast::Selection::InlineFragment(inline) => {
            let mut out = "...".to_string();
            if let Some(condition) = &inline.type_condition {
                out.push_str(" on ");
                out.push_str(condition.as_str());
            }
            out.push_str(&print_directives(&inline.directives));
            out.push(' ');
            out.push_str(&print_selection_set(&inline.selection_set, depth));
            out
        }
    }
}

fn print_arguments(arguments: &[ast::Argument]) -> String {
    if arguments.is_empty() {
        return String::new();
    }
    let printed: Vec<String> = arguments
        .iter()
        .map(|arg| format!("{}: {}", arg.name.as_str(), print_value(&arg.value)))
        .collect();
    format!("({})", printed.join(", "))
}

fn print_directives(directives: &[ast::DirectiveAnnotation]) -> String {
    let mut out = String::new();
    for directive in directives {
        out.push_str(" @");
        out.push_str(directive.name.as_str());
        out.push_str(&print_arguments(&directive.arguments));
    }
    out
}

/// Prints a value literal.
pub fn print_value(value: &ast::Value) -> String {
    match value {
        ast::Value::Variable(name) => format!("${}", name.as_str()),
        ast::Value::Int { value, .. } => value.to_string(),
        ast::Value::Float { value, .. } => print_float(*value),
        ast::Value::String { value, block, .. } => {
            if *block {
                format!("\"\"\"{value}\"\"\"")
            } else {
                print_quoted_string(value)
            }
        }
        ast::Value::Boolean { value, .. } => value.to_string(),
        ast::Value::Null { .. } => "null".to_string(),
        ast::Value::Enum { value, .. } => value.clone(),
        ast::Value::List(list) => {
            let printed: Vec<String> = list.values.iter().map(print_value).collect();
            format!("[{}]", printed.join(", "))
        }
        ast::Value::Object(object) => {
            let printed: Vec<String> = object
                .fields
                .iter()
                .map(|field| {
                    format!("{}: {}", field.name.as_str(), print_value(&field.value))
                })
                .collect();
            format!("{{{}}}", printed.join(", "))
        }
    }
}

/// Prints a type annotation (`Name`, `[Inner]`, `Inner!`).
pub fn print_type_annotation(annotation: &ast::TypeAnnotation) -> String {
    annotation.to_string()
}

fn print_float(value: f64) -> String {
    // Keep the literal recognizable as a float after a round-trip.
    if value.fract() == 0.0 && value.is_finite() && value.abs() < 1e15 {
        format!("{value:.1}")
    } else {
        value.to_string()
    }
}

fn print_quoted_string(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for ch in value.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{0008}' => out.push_str("\\b"),
            '\u{000C}' => out.push_str("\\f"),
            ch if (ch as u32) < 0x20 => {
                out.push_str(&format!("\\u{:04X}", ch as u32));
            }
            ch => out.push(ch),
        }
    }
    out.push('"');
    out
}

// =============================================================================
// Type-system definitions
// =============================================================================

fn print_description(description: &Option<String>) -> String {
    match description {
        Some(text) => format!("{}\n", print_quoted_string(text)),
        None => String::new(),
    }
}

fn print_type_system_definition(def: &ast::TypeSystemDefinition) -> String {
    match def {
        ast::TypeSystemDefinition::Schema(schema_def) => {
            let mut out = "schema".to_string();
            out.push_str(&print_directives(&schema_def.directives));
            out.push_str(" {\n");
            for entry in &schema_def.operation_types {
                out.push_str(&format!(
                    "  {}: {}\n",
                    entry.operation.as_str(),
                    entry.named_type.as_str(),
                ));
            }
            out.push('}');
            out
        }
        ast::TypeSystemDefinition::Type(type_def) => print_type_definition(type_def),
        ast::TypeSystemDefinition::Directive(directive_def) => {
            let mut out = print_description(&directive_def.description);
            out.push_str(&format!("directive @{}", directive_def.name.as_str()));
            out.push_str(&print_input_value_definitions(
                &directive_def.arguments,
                "(",
                ")",
            ));
            out.push_str(" on ");
            let locations: Vec<&str> = directive_def
                .locations
                .iter()
                .map(ast::Name::as_str)
                .collect();
            out.push_str(&locations.join(" | "));
            out
        }
    }
}

fn print_type_definition(def: &ast::TypeDefinition) -> String {
    match def {
        ast::TypeDefinition::Scalar(scalar) => format!(
            "{}scalar {}{}",
            print_description(&scalar.description),
            scalar.name.as_str(),
            print_directives(&scalar.directives),
        ),
        ast::TypeDefinition::Object(object) => {
            let mut out = print_description(&object.description);
            out.push_str(&format!("type {}", object.name.as_str()));
            if !object.interfaces.is_empty() {
                let names: Vec<&str> =
                    object.interfaces.iter().map(ast::Name::as_str).collect();
                out.push_str(&format!(" implements {}", names.join(" & ")));
            }
            out.push_str(&print_directives(&object.directives));
            out.push_str(&print_field_definitions(&object.fields));
            out
        }
        ast::TypeDefinition::Interface(interface) => {
            let mut out = print_description(&interface.description);
            out.push_str(&format!("interface {}", interface.name.as_str()));
            out.push_str(&print_directives(&interface.directives));
            out.push_str(&print_field_definitions(&interface.fields));
            out
        }
        ast::TypeDefinition::Union(union_def) => {
            let mut out = print_description(&union_def.description);
            out.push_str(&format!("union {}", union_def.name.as_str()));
            out.push_str(&print_directives(&union_def.directives));
            if !union_def.members.is_empty() {
                let names: Vec<&str> =
                    union_def.members.iter().map(ast::Name::as_str).collect();
                out.push_str(&format!(" = {}", names.join(" | ")));
            }
            out
        }
        ast::TypeDefinition::Enum(enum_def) => {
            let mut out = print_description(&enum_def.description);
            out.push_str(&format!("enum {}", enum_def.name.as_str()));
            out.push_str(&print_directives(&enum_def.directives));
            out.push_str(" {\n");
            for value in &enum_def.values {
                out.push_str(&format!(
                    "  {}{}\n",
                    value.name.as_str(),
                    print_directives(&value.directives),
                ));
            }
            out.push('}');
            out
        }
        ast::TypeDefinition::InputObject(input_def) => {
            let mut out = print_description(&input_def.description);
            out.push_str(&format!("input {}", input_def.name.as_str()));
            out.push_str(&print_directives(&input_def.directives));
            out.push_str(&print_input_value_definitions(
                &input_def.fields,
                " {\n",
                "}",
            ));
            out
        }
    }
}

fn print_field_definitions(fields: &[ast::FieldDefinition]) -> String {
    if fields.is_empty() {
        return String::new();
    }
    let mut out = " {\n".to_string();
    for field in fields {
        out.push_str("  ");
        out.push_str(field.name.as_str());
        out.push_str(&print_input_value_definitions(&field.arguments, "(", ")"));
        out.push_str(&format!(": {}", field.field_type));
        out.push_str(&print_directives(&field.directives));
        out.push('\n');
    }
    out.push('}');
    out
}

fn print_input_value_definitions(
    defs: &[ast::InputValueDefinition],
    open: &str,
    close: &str,
) -> String {
    if defs.is_empty() {
        return String::new();
    }
    let multiline = open.contains('\n');
    let printed: Vec<String> = defs
        .iter()
        .map(|def| {
            let mut out = String::new();
            if multiline {
                out.push_str("  ");
            }
            out.push_str(&format!("{}: {}", def.name.as_str(), def.value_type));
            if let Some(default) = &def.default_value {
                out.push_str(&format!(" = {}", print_value(default)));
            }
            out.push_str(&print_directives(&def.directives));
            out
        })
        .collect();
    if multiline {
        format!("{}{}\n{}", open, printed.join("\n"), close)
    } else {
        format!("{}{}{}", open, printed.join(", "), close)
    }
}
