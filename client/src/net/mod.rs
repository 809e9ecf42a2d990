//! Networking modules for the fact API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` wraps the server's JSON routes; the wire types themselves live in
//! the shared `facts` crate.

pub mod api;
