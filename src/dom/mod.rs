// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! HTML document querying
//!
//! Parses with html5ever and flattens the tree into document-ordered
//! elements, which is all the page scanner needs.

mod document;
mod parser;

pub use document::{Document, Element};
pub use parser::parse_html;
