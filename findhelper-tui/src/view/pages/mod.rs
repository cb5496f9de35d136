//! Page views.

pub mod form;
