#![no_main]

use libfuzzer_sys::fuzz_target;
use quartz_syntax::indentation::calculate_indent_levels;

fuzz_target!(|data: &[u8]| {
    // Each byte is one line's indentation
    let indentations: Vec<usize> = data.iter().map(|&b| b as usize).collect();

    if let Ok(levels) = calculate_indent_levels(&indentations) {
        assert_eq!(levels.len(), indentations.len());
        for pair in levels.windows(2) {
            assert!(pair[1] <= pair[0] + 1);
        }
    }
});
