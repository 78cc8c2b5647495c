/// Splitting long replies to fit Discord's message limit.
pub mod chunk;
/// Generic embed builders shared across commands.
pub mod embed;
/// Single source of truth for the message-command prefix.
pub const COMMAND_PREFIX: char = '!';
/// Mention parsing helpers.
pub mod mention;
