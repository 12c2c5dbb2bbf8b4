//! Navigable, doubly linked view over a tokenized document.
//!
//! - `range`        : `Position` (cursor) and `TokenRange`.
//! - `linked_token` : the `TokenChain` arena and `LinkedToken` handles.
//! - `builder`      : `LinkedTokenBuilder`, tokens + cursor -> chain.
crate::reexport!(range);
crate::reexport!(linked_token);
crate::reexport!(builder);
