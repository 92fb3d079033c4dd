//! # Paperpath Router
//!
//! Classifies the segments of a catch-all study-resource URL
//! (`/punjab/9th/notes`, `/mdcat/physics-notes/2023`) into a structured
//! [`ResourceDescriptor`]:
//! - Province, class level and content type from a category [`Taxonomy`]
//! - Subject, chapter and year from a declarative [`PatternTable`]
//! - Everything else kept, in order, as additional info
//!
//! ## Matching
//!
//! Segments are compared through [`normalize`], which is case-insensitive
//! and folds `o-level`, `O-Level` and `oLevel` to the same key. Descriptor
//! fields always keep the raw segment text.
//!
//! The scan is greedy and never backtracks. Ties between category lists are
//! resolved by [`Category::CLASS_PRIORITY`], not by scoring.
//!
//! ## Example
//!
//! ```
//! use paperpath_router::{Category, ResourceClassifier};
//!
//! let classifier = ResourceClassifier::default();
//! let descriptor = classifier.classify(&["mdcat", "physics-notes", "2023"]).unwrap();
//!
//! assert_eq!(descriptor.category, Category::EntryTest);
//! assert_eq!(descriptor.class_level.as_deref(), Some("mdcat"));
//! assert_eq!(descriptor.subject.as_deref(), Some("physics-notes"));
//! assert_eq!(descriptor.year.as_deref(), Some("2023"));
//! ```

// ============================================================================
// Module Declarations
// ============================================================================

pub mod classify;
pub mod config;
mod descriptor;
mod error;
pub mod format;
pub mod lookup;
mod normalize;
pub mod path;
pub mod taxonomy;

// Re-export public types
pub use classify::pattern::{PatternTable, SegmentPattern, TailField};
pub use classify::{Resolution, ResourceClassifier};
pub use config::Config;
pub use descriptor::ResourceDescriptor;
pub use error::{ClassifyError, LookupError, ResolveError};
pub use format::{format_segment, Breadcrumb, Formatter};
pub use lookup::{DocumentLookup, MemoryLookup, ResourceQuery};
pub use normalize::normalize;
pub use path::{is_valid_path, normalize_path, split_segments, PathHierarchy};
pub use taxonomy::{Category, CategoryTable, Taxonomy, TermSet};
