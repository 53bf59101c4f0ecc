//! Domain logic - the version model and the string rules it is built on

pub mod dot_number;
pub mod part;
pub mod version;

pub use dot_number::{
    dot_component, parse_number, removing_trailing_dot_numbers, semver_increment,
    trailing_dot_numbers, TrailingNumbers,
};
pub use part::Part;
pub use version::{is_identifier_text, Version};
