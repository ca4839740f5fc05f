//! coding-mr - merge requests for CODING repositories
//!
//! Opens one merge request per destination branch through the CODING
//! open API and posts a markdown summary to a team chat webhook.
//!
//! The flow is strictly linear:
//! 1. [`repo`] - read the current branch and remote from the local checkout
//! 2. [`platform`] - derive the API base and resolve the repository id
//! 3. [`submit`] - plan and create the merge requests
//! 4. [`notify`] - announce the result

pub mod config;
pub mod error;
pub mod notify;
pub mod platform;
pub mod repo;
pub mod submit;
pub mod types;

pub use error::{Error, Result};
