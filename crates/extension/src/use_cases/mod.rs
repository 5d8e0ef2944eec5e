//! Use cases - the add-on's behaviour, written against ports only.

pub mod movement;
