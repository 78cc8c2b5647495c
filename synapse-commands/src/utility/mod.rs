pub mod embeds;
pub mod help;
pub mod usage;
