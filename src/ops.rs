//! Process integration layer.
//!
//! Everything this program does is delegated to external programs: the `git`
//! binary, the configured editor, and the configured browser. [`process`]
//! defines the command-execution capability the rest of the crate is written
//! against, with a real shell-backed implementation and a recording fake for
//! tests.

pub mod process;
