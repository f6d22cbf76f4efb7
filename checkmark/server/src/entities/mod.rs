pub mod prelude;

pub mod checkmark_item;
