//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the header, compose form, category sidebar, and fact
//! list while reading/writing shared state from Leptos context providers.

pub mod category_filters;
pub mod fact_list;
pub mod header;
pub mod new_fact_form;
