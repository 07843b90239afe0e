//! Lexer
//!
//!     This module splits a single artifact line, as printed by `dependency:tree`, into raw
//!     field tokens. It knows nothing about which token is which field; that mapping happens
//!     in [building](crate::deptree::building) once the token count is known.
//!
//! Line Notation
//!
//!     An artifact line is a colon separated coordinate, optionally followed by free text:
//!
//!         com.acme:foo:jar:1.0:compile
//!         com.acme:foo:jar:tests:1.0:test
//!         com.bugsnag:bugsnag:jar:3.1.4:compile (version selected from constraint [3.0,4.0))
//!         (commons-logging:commons-logging:jar:1.1.1:compile - omitted for duplicate)
//!
//!     A leading parenthesis marks an omitted dependency. The trailing clause, when present,
//!     becomes a single description token.
//!
//! Why Not a Lexer Generator
//!
//!     Whether `-`, `(`, `)` and space are separators or content depends on where the scanner
//!     is (before a token, inside one, inside the description) and on whether the character
//!     ends the line. A four-state scanner over the characters expresses that directly, so
//!     the tokenizer is hand written.

pub mod tokenizer;

pub use tokenizer::{tokenize, ArtifactTokens, ScanState};
