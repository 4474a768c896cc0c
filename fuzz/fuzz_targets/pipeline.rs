#![no_main]

use libfuzzer_sys::fuzz_target;
use quartz_syntax::IndentConfig;
use quartz_syntax::indentation::{analyze_source, apply_indentation_algorithm, filter_code_lines, split_lines};

fuzz_target!(|data: &[u8]| {
    // Convert bytes to UTF-8 string (ignore invalid UTF-8)
    if let Ok(source) = std::str::from_utf8(data) {
        let lines: Vec<&str> = split_lines(source).collect();
        let applied = apply_indentation_algorithm(&lines);

        if let Ok(levels) = &applied {
            assert_eq!(levels.len(), filter_code_lines(&lines).len());
        }
        // Located analysis must agree with the plain pipeline
        assert_eq!(analyze_source("fuzz.qz", source, &IndentConfig::default()).is_ok(), applied.is_ok());
    }
});
