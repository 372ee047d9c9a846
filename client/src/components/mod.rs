//! Form and result components of the predict page.

pub mod application_form;
pub mod result_panel;
