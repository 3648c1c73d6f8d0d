//! Pure helpers behind the page widgets.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser bindings in `web::widgets` do the DOM work; the decisions they
//! make live here so they can be tested without a document.

pub mod demo;
pub mod flash;
pub mod form;
pub mod password;
