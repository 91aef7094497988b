//! # gdrive-format
//!
//! Display formatting core of the gdrive CLI.
//!
//! Two renderers sit on top of a handful of pure conversions:
//! - [`list`]: many records as a column-aligned table.
//! - [`detail`]: one record as ordered `Key: value` lines.
//!
//! The conversions ([`truncate`], [`size`], [`datetime`], [`value`]) are
//! stateless and never fail. Renderers build their whole output in memory
//! and hand it to the destination in a single write.
//!
//! # Example
//!
//! ```rust
//! use gdrive_common::config::ListOptions;
//! use gdrive_format::list::list_to_string;
//!
//! let text = list_to_string(&[], &ListOptions::default());
//! assert_eq!(text, "Id   Name   Size   Created\n");
//! ```

pub mod datetime;
pub mod detail;
pub mod list;
pub mod size;
pub mod table;
pub mod truncate;
pub mod value;

pub use detail::render_detail;
pub use list::render_list;
