//! Reusable HTML components for page generation
//!
//! Maud component functions shared by the page generators: layout with
//! head metadata, navigation, record cards and stacks. Content level
//! components for markdown live in the `markdown` module.

pub mod card;
pub mod layout;
pub mod nav;
pub mod seo;
pub mod stack;
