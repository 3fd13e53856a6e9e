#![no_main]

use libfuzzer_sys::fuzz_target;
use minicpp_syntax::diagnostics::Diagnostic;
use minicpp_syntax::{parser, source::SourceBuffer};

fuzz_target!(|data: &[u8]| {
    // Convert bytes to UTF-8 string (ignore invalid UTF-8)
    if let Ok(s) = std::str::from_utf8(data) {
        // Over-length and sentinel-bearing inputs are rejected up front
        if let Ok(buffer) = SourceBuffer::new(s) {
            let mut diagnostics: Vec<Diagnostic> = Vec::new();
            let result = parser::check(&buffer, &mut diagnostics);
            let verdict = diagnostics.last().expect("a verdict is always reported");
            assert_eq!(result.is_ok(), !verdict.is_error());
        }
    }
});
