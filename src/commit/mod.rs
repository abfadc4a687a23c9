// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Commit module: the commit input model and message splitting.

mod message;
mod model;

pub use message::{split_lines, ParsedMessage};
pub use model::{Commit, Identity, SHORT_SHA_LEN};
