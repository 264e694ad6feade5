mod glob;
pub mod ignore;
pub mod render;
pub mod walk;

pub use ignore::PatternSet;
pub use walk::{WalkOptions, print_tree};
