//! One module per specified validation rule (GraphQL spec §5).

mod arguments_of_correct_type;
mod executable_definitions;
mod fields_on_correct_type;
mod fragments_on_composite_types;
mod known_argument_names;
mod known_directives;
mod known_fragment_names;
mod known_type_names;
mod lone_anonymous_operation;
mod no_fragment_cycles;
mod no_undefined_variables;
mod no_unused_fragments;
mod no_unused_variables;
mod overlapping_fields_can_be_merged;
mod possible_fragment_spreads;
mod provided_non_null_arguments;
mod scalar_leafs;
mod unique_argument_names;
mod unique_directives_per_location;
mod unique_fragment_names;
mod unique_input_field_names;
mod unique_operation_names;
mod unique_variable_names;
mod values_of_correct_type;
mod variables_are_input_types;
mod variables_in_allowed_position;

use crate::validation::ValidationRule;

/// The full specified rule set, in the order the findings of a mixed
/// document read most naturally.
pub(crate) fn specified_rules() -> Vec<Box<dyn ValidationRule>> {
    vec![
        Box::new(executable_definitions::ExecutableDefinitions),
        Box::new(unique_operation_names::UniqueOperationNames::default()),
        Box::new(lone_anonymous_operation::LoneAnonymousOperation::default()),
        Box::new(unique_variable_names::UniqueVariableNames),
        Box::new(variables_are_input_types::VariablesAreInputTypes),
        Box::new(variables_in_allowed_position::VariablesInAllowedPosition::default()),
        Box::new(no_undefined_variables::NoUndefinedVariables::default()),
        Box::new(no_unused_variables::NoUnusedVariables::default()),
        Box::new(unique_fragment_names::UniqueFragmentNames::default()),
        Box::new(known_fragment_names::KnownFragmentNames),
        Box::new(no_unused_fragments::NoUnusedFragments),
        Box::new(possible_fragment_spreads::PossibleFragmentSpreads),
        Box::new(no_fragment_cycles::NoFragmentCycles::default()),
        Box::new(fragments_on_composite_types::FragmentsOnCompositeTypes),
        Box::new(known_type_names::KnownTypeNames),
        Box::new(known_directives::KnownDirectives),
        Box::new(unique_directives_per_location::UniqueDirectivesPerLocation),
        Box::new(known_argument_names::KnownArgumentNames),
        Box::new(unique_argument_names::UniqueArgumentNames),
        Box::new(arguments_of_correct_type::ArgumentsOfCorrectType),
        Box::new(provided_non_null_arguments::ProvidedNonNullArguments),
        Box::new(scalar_leafs::ScalarLeafs),
        Box::new(fields_on_correct_type::FieldsOnCorrectType),
        Box::new(
            overlapping_fields_can_be_merged::OverlappingFieldsCanBeMerged::default(),
        ),
        Box::new(values_of_correct_type::ValuesOfCorrectType),
        Box::new(unique_input_field_names::UniqueInputFieldNames),
    ]
}
