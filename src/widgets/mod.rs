// Page widgets: each one owns the state of a group of page elements.

pub mod color;
pub mod contact_form;
pub mod counter;
pub mod faq;
pub mod mouse;
pub mod tabs;
pub mod theme;
