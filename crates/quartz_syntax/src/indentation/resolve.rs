//! Step 3: turn indentations into indent levels.
//!
//! The resolver walks the indentations once, left to right, keeping a stack of the *widths* by which each open block
//! deepened the indentation. A dedent pops widths until they add up to exactly the dedent distance; anything else is an
//! inconsistency.
//!
//! The stack is seeded with the raw indentation of the first line rather than a width. Popping that entry always means
//! unwinding one level more than is open, so it acts as a floor: no line may dedent below the first significant line.

use std::cmp::Ordering;

use crate::errors::IndentError;

/// Compute the indent level of every line from its indentation.
///
/// The first line is at level 0. A deeper line opens exactly one level, whatever the width of the step. A shallower
/// line closes as many levels as it takes for their widths to sum to the dedent distance.
///
/// # Errors
///
/// [`IndentError::Inconsistent`] for the first dedent that lands strictly between two open block boundaries or below
/// the first line (e.g. `[0, 2, 1]`). No partial result is produced.
pub fn calculate_indent_levels(indentations: &[usize]) -> Result<Vec<usize>, IndentError> {
    let Some(&first) = indentations.first() else {
        return Ok(Vec::new());
    };

    let mut levels = Vec::with_capacity(indentations.len());
    let mut stack = vec![first];
    let mut level = 0;
    levels.push(level);

    for (offset, pair) in indentations.windows(2).enumerate() {
        let (previous, current) = (pair[0], pair[1]);
        let index = offset + 1;

        match current.cmp(&previous) {
            Ordering::Equal => {}
            Ordering::Greater => {
                stack.push(current - previous);
                level += 1;
                tracing::trace!(index, width = current - previous, level, "indent");
            }
            Ordering::Less => {
                let unwound = unwind(&mut stack, previous - current)
                    .filter(|&unwound| unwound <= level)
                    .ok_or_else(|| {
                        tracing::debug!(index, previous, current, level, "rejected dedent");
                        IndentError::Inconsistent {
                            index,
                            previous,
                            current,
                        }
                    })?;
                level -= unwound;
                tracing::trace!(index, unwound, level, "dedent");
            }
        }
        levels.push(level);
    }

    Ok(levels)
}

/// Pop widths off `stack` until they sum to `distance`.
///
/// Returns the number of entries popped, or `None` if a width overshoots the remaining distance or the stack runs out
/// first.
fn unwind(stack: &mut Vec<usize>, distance: usize) -> Option<usize> {
    let mut remaining = distance;
    let mut popped = 0;

    while remaining > 0 {
        let width = stack.pop()?;
        popped += 1;
        remaining = remaining.checked_sub(width)?;
    }

    Some(popped)
}
