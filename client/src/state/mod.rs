//! Reactive application state held in `RwSignal` contexts.

pub mod facts;
pub mod form;
