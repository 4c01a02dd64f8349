//! `mdfill_core` is the core library for [mdfill](https://github.com/ifiokjr/mdfill). It reads a markdown outline, turns its headings and definition lines into a flat map of placeholder keys, and fills `{key}` markers in a template with those values.
//!
//! ## Processing Pipeline
//!
//! ```text
//! Markdown outline
//!   → Line classifier (section heading, entry heading, definition, plain text)
//!   → Scanner (tracks the section prefix and the open entry, flushes values)
//!   → Value post-processor (list markers become bullets)
//!   → Placeholders (emphasis delimiters stripped, style guessed)
//!   → Filler (replaces `{key}` markers in the template)
//! ```
//!
//! ## Outline Syntax
//!
//! ```markdown
//! ## Contact
//!
//! ### Address
//! 1 Main Street
//! - Floor 2
//!
//! Phone
//! : 555 0100
//! ```
//!
//! produces `contact-address = "1 Main Street\n• Floor 2\n\nPhone"` and
//! `contact-phone = "555 0100"`. The `Phone` label line lands in the open
//! entry as well, because definitions never close an entry.
//!
//! ## Quick Start
//!
//! ```rust
//! use mdfill_core::Placeholders;
//! use mdfill_core::extract_outline;
//! use mdfill_core::fill_template;
//!
//! let map = extract_outline("## Intro\n### Title\n*Hello*\n");
//! let placeholders = Placeholders::from_outline(&map);
//! let result = fill_template("<h1>{intro-title}</h1>", &placeholders);
//!
//! assert_eq!(result.content, "<h1>Hello</h1>");
//! assert!(placeholders["intro-title"].style.italic);
//! ```

pub use config::*;
pub use emphasis::*;
pub use error::*;
pub use extractor::*;
pub use filler::*;
pub use line::*;
pub use placeholder::*;
pub use sanitize::*;
pub use value::*;

pub mod config;
mod emphasis;
mod error;
mod extractor;
mod filler;
mod line;
mod placeholder;
mod sanitize;
mod value;
