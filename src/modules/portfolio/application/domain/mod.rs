pub mod defaults;
pub mod entries;
pub mod sections;
