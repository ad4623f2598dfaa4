//! # folio
//!
//! Converts digitized books supplied as single HTML documents into a
//! normalized, structured document model: title, author, ordered chapters,
//! ordered paragraphs.
//!
//! The interesting work is structural inference, not HTML parsing: the
//! input encodes a book's hierarchy only implicitly, through heading
//! levels, element order, and loosely formatted preformatted text. folio
//! recovers that hierarchy in four stages:
//!
//! 1. Locate a metadata block (`Title:` / `Author:` markers in `<pre>` or
//!    `<p>` blocks) to recover the bibliographic fields.
//! 2. Detect chapter boundaries from heading elements, ordered by source
//!    position.
//! 3. Partition the remaining content into per-chapter paragraph sequences.
//! 4. Validate the assembled structure for plausibility before trusting it.
//!
//! ## Quick Start
//!
//! ```
//! use folio::Normalizer;
//!
//! let html = "<pre>Title: Sample\nAuthor: A. Writer</pre>\n\
//!             <h1>Chapter One</h1><p>Hello.</p><p>World.</p>";
//! let book = Normalizer::new().normalize(html).unwrap();
//!
//! assert_eq!(book.title, "Sample");
//! assert_eq!(book.author, "A. Writer");
//! assert_eq!(book.chapters.len(), 1);
//! ```
//!
//! Documents that cannot be segmented are rejected with a typed
//! [`Failure`]: a missing author, no headings at all, and a structurally
//! implausible result each carry a distinct reason. A rejection is terminal
//! for its document (there is no partial output) but never for a batch run.

pub mod dom;
pub mod error;
pub mod metadata;
pub mod model;
pub mod normalize;
pub mod position;
pub mod segment;
pub mod text;
pub(crate) mod util;

#[cfg(feature = "cli")]
pub mod driver;

pub use error::{Error, Failure, FailureKind, Result};
pub use metadata::{Metadata, MetadataPatterns};
pub use model::{Book, DocNode, HeadingLevel};
pub use normalize::Normalizer;
pub use position::{LineIndex, SourcePosition};
