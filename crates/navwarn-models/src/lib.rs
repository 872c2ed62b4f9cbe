#![deny(missing_docs)]

//! # Navigational Warning Models
//!
//! Core data types for navigational-warning messages as they leave the
//! message-management back office. The graph is read-only input for the
//! S-124 dataset mapper: every reference is already resolved to its target
//! message and every localized description is loaded.
//!
//! ## Message hierarchy
//!
//! ```text
//! Message
//! ├── MessageDesc*            (title, vicinity per language)
//! ├── MessageSeries?
//! ├── MessagePart*            (ordered by index)
//! │   ├── MessagePartDesc*    (subject, details per language)
//! │   ├── DateInterval*
//! │   └── GeometryCollection?
//! ├── Area* / Chart* / Category* / MessageTag*
//! └── Reference*
//!     └── Message?            (the referenced warning)
//! ```
//!
//! ## Module layout
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`message`] | `Message`, `MessageSeries`, main/warning types and status |
//! | [`part`] | `MessagePart`, its descriptions and date intervals |
//! | [`reference`] | `Reference` and `ReferenceType` |
//! | [`catalog`] | `Area`, `Chart`, `Category` and `MessageTag` |
//! | [`localized`] | The `LocalizedDesc` / `Localized` traits shared by all descriptions |
//! | [`builder`] | Fluent `MessageBuilder` |

pub mod builder;
pub mod catalog;
pub mod error;
pub mod localized;
pub mod message;
pub mod part;
pub mod reference;

// Re-export all public types at crate root for convenience.
pub use builder::*;
pub use catalog::*;
pub use error::*;
pub use localized::*;
pub use message::*;
pub use part::*;
pub use reference::*;
