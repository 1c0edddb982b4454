//! Document Model - content tree for generated documents
//!
//! A document is an ordered list of content blocks (titles, headings,
//! paragraphs, list items, tables, page breaks, a table of contents)
//! together with the style sheet, numbering definitions and page setup
//! that give them their appearance. The tree is built once and handed to
//! a serializer; nothing here mutates after construction.

mod block;
mod document;
mod error;
mod outline;
mod paragraph;
mod run;
pub mod list;
pub mod section;
pub mod style;
pub mod table;

pub use block::*;
pub use document::*;
pub use error::*;
pub use list::*;
pub use outline::*;
pub use paragraph::*;
pub use run::*;
pub use section::*;
pub use style::*;
pub use table::*;
