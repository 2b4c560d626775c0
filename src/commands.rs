//! Menu command handlers.
//!
//! Each submodule implements the handlers behind one slice of the menu tree:
//!
//! - [`main_menu`]: the 13-entry top-level menu and its direct git passthroughs
//! - [`start`]: the start sub-menu (editor, browser, daily note)
//! - [`log`]: the log sub-menu (simple and verbose history views)
//! - [`commit`]: the commit-message prompt
//! - [`fetch`]: the fetch-then-status query
//! - [`status`]: the one-shot stash and change reports shown before the menu
//! - [`version`]: the version banner backed by git history queries

pub mod commit;
pub mod fetch;
pub mod log;
pub mod main_menu;
pub mod start;
pub mod status;
pub mod version;
