//! # ccommits
//!
//! Conventional-commits composer: a small full-screen terminal session that
//! assembles `type: emoji short\n\nlong` commit messages and hands them to
//! git. The `tui` module is the interactive layer, `git` the repository
//! collaborator, `catalog` the static change-type and gitmoji tables.

pub mod catalog;
pub mod git;
pub mod tui;
