#![no_main]

use libfuzzer_sys::fuzz_target;
use minicpp_syntax::diagnostics::Diagnostic;
use minicpp_syntax::lexer::{self, TokenKind};
use minicpp_syntax::source::SourceBuffer;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(buffer) = SourceBuffer::new(s) {
            let mut diagnostics: Vec<Diagnostic> = Vec::new();
            let tokens = lexer::tokenize(&buffer, &mut diagnostics);
            // Forward progress: at most one token per character plus the end-marker
            assert!(tokens.len() <= buffer.len() - 1);
            assert_eq!(tokens.last().map(|t| t.kind), Some(TokenKind::End));
        }
    }
});
