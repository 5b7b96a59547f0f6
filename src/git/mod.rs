// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Git integration module.
//!
//! Read-only access to commit messages for the check command.

mod repo;

pub use repo::{get_commit_message, get_commit_range, Repository};
