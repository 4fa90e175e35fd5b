pub mod scalar;
pub mod selector;

pub use scalar::{
    parse_bool, parse_path_list, parse_string_list, parse_test_size, parse_unsigned_int,
    parse_unsigned_long,
};
pub use selector::{is_class_or_method, tokenize};
