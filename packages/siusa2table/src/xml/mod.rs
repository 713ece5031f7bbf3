//! XML utilities.

mod utils;

pub use utils::{
    find_child, find_child_with_attribute, find_children, get_tag_name, get_text, has_name,
    require_attribute, require_child, require_path,
};
