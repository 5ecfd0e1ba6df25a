//! Presentational component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render markup from props and, for the header, session context.
//! Network calls belong to pages.

pub mod form_field;
pub mod header;
pub mod pagination;
pub mod perfume_list;
