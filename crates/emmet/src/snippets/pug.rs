//! Pug snippet overrides: the doctype is plain text in Pug.

pub(crate) const SNIPPETS: &[(&str, &str)] = &[("!!!", "{doctype html}")];
