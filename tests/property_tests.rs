//! Property-based tests for the Quartz indentation frontend
//!
//! These tests use proptest to verify invariants across many randomly
//! generated inputs, catching edge cases that hand-written tests might miss.

use proptest::prelude::*;
use quartz::IndentError;
use quartz::indentation::{
    apply_indentation_algorithm, calculate_indent_levels, filter_code_lines, is_code, measure_leading_whitespaces,
};

// =============================================================================
// Generators
// =============================================================================

/// One step of a generated block structure.
#[derive(Debug, Clone, Copy)]
enum Step {
    Stay,
    Open(usize),
    Close(usize),
}

fn step() -> impl Strategy<Value = Step> {
    prop_oneof![
        Just(Step::Stay),
        (1usize..6).prop_map(Step::Open),
        (1usize..4).prop_map(Step::Close),
    ]
}

/// Build indentations and their intended levels from a well-nested block structure.
fn well_nested(base: usize, steps: &[Step]) -> (Vec<usize>, Vec<usize>) {
    let mut open = vec![base];
    let mut indentations = vec![base];
    let mut levels = vec![0];

    for step in steps {
        match *step {
            Step::Stay => {}
            Step::Open(width) => {
                let top = *open.last().unwrap();
                open.push(top + width);
            }
            Step::Close(count) => {
                let keep = open.len().saturating_sub(count).max(1);
                open.truncate(keep);
            }
        }
        indentations.push(*open.last().unwrap());
        levels.push(open.len() - 1);
    }

    (indentations, levels)
}

fn source_line() -> impl Strategy<Value = String> {
    "[ \t]{0,6}[@a-z ]{0,6}"
}

// =============================================================================
// Resolver properties
// =============================================================================

proptest! {
    /// Property: a constant indentation resolves to all zeros
    #[test]
    fn constant_indentation_is_flat(indent in 0usize..40, len in 0usize..30) {
        let input = vec![indent; len];
        prop_assert_eq!(calculate_indent_levels(&input), Ok(vec![0; len]));
    }

    /// Property: a fixed-step staircase up and back down mirrors its shape
    #[test]
    fn staircase_mirrors_shape(step in 1usize..8, height in 0usize..12) {
        let ascent: Vec<usize> = (0..=height).map(|i| i * step).collect();
        let input: Vec<usize> = ascent.iter().chain(ascent.iter().rev().skip(1)).copied().collect();
        let expected: Vec<usize> = input.iter().map(|indent| indent / step).collect();

        let levels = calculate_indent_levels(&input).unwrap();
        prop_assert_eq!(levels.last().copied(), Some(0));
        prop_assert_eq!(levels, expected);
    }

    /// Property: any well-nested structure resolves to exactly its nesting depth
    #[test]
    fn well_nested_structure_recovers_levels(base in 0usize..4, steps in prop::collection::vec(step(), 0..60)) {
        let (indentations, levels) = well_nested(base, &steps);
        prop_assert_eq!(calculate_indent_levels(&indentations), Ok(levels));
    }

    /// Property: successful output is parallel to the input, starts at 0 and never jumps by more than one level
    #[test]
    fn levels_are_parallel_and_step_by_one(input in prop::collection::vec(0usize..12, 0..40)) {
        if let Ok(levels) = calculate_indent_levels(&input) {
            prop_assert_eq!(levels.len(), input.len());
            if let Some(&first) = levels.first() {
                prop_assert_eq!(first, 0);
            }
            for pair in levels.windows(2) {
                prop_assert!(pair[1] <= pair[0] + 1);
            }
        }
    }

    /// Property: a dedent landing strictly inside the innermost block is rejected
    #[test]
    fn dedent_between_boundaries_fails(outer in 1usize..6, inner in 2usize..6, back in 1usize..6) {
        prop_assume!(back < inner);
        let input = [0, outer, outer + inner, outer + inner - back];
        prop_assert_eq!(
            calculate_indent_levels(&input),
            Err(IndentError::Inconsistent { index: 3, previous: outer + inner, current: outer + inner - back })
        );
    }

    /// Property: nothing may dedent below the first significant line
    #[test]
    fn dedent_below_first_line_fails(first in 1usize..10, deeper in 0usize..5, below in 1usize..10) {
        prop_assume!(below <= first);
        let mut input = vec![first];
        if deeper > 0 {
            input.push(first + deeper);
        }
        input.push(first - below);
        prop_assert!(calculate_indent_levels(&input).is_err());
    }
}

// =============================================================================
// Filter / measure / pipeline properties
// =============================================================================

proptest! {
    /// Property: a line is kept iff it has a non-whitespace character that is not `@`
    #[test]
    fn filter_keeps_exactly_code_lines(lines in prop::collection::vec(source_line(), 0..20)) {
        let filtered = filter_code_lines(&lines);
        let expected: Vec<&str> = lines
            .iter()
            .map(String::as_str)
            .filter(|line| line.trim_start().chars().next().is_some_and(|c| c != '@'))
            .collect();

        prop_assert!(filtered.iter().all(|line| is_code(line)));
        prop_assert_eq!(filtered, expected);
    }

    /// Property: measuring counts exactly the leading whitespace
    #[test]
    fn measure_counts_leading_whitespace(indent in "[ \t]{0,10}", body in "[a-z@][a-z ]{0,5}") {
        let line = format!("{indent}{body}");
        prop_assert_eq!(measure_leading_whitespaces(&[line]), Ok(vec![indent.chars().count()]));
    }

    /// Property: apply == resolve(measure(filter(x))) and is parallel to the filtered input
    #[test]
    fn apply_is_the_composition_of_stages(lines in prop::collection::vec(source_line(), 0..20)) {
        let filtered = filter_code_lines(&lines);
        let composed = measure_leading_whitespaces(&filtered).and_then(|m| calculate_indent_levels(&m));
        let applied = apply_indentation_algorithm(&lines);

        if let Ok(levels) = &applied {
            prop_assert_eq!(levels.len(), filtered.len());
        }
        prop_assert_eq!(applied, composed);
    }
}
