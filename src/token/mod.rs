//! Lenient, line-oriented tokenization.
//!
//! Modules:
//! - `token_kind`  : `TokenType`, the role taxonomy shared by all languages.
//! - `token_types` : per-language tag tables mapping tags to roles.
//! - `token`       : `Token` (role + start column) and the `Tokenizer` trait.
//! - `scanner`     : a single pass scanner parameterized by a `Dialect`.
//!
//! The completion pipeline only ever sees per-line `Vec<Token>` lists, so a
//! host can plug in its own tokenizer as long as it speaks `Tokenizer`.
crate::reexport!(token_kind);
crate::reexport!(token_types);
crate::reexport!(token);
crate::reexport!(scanner);
