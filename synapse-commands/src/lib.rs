pub mod assistant;
pub mod utility;

use synapse_core::{Data, Error};

pub struct CommandMeta {
    pub name: &'static str,
    pub desc: &'static str,
    pub category: &'static str,
    pub usage: &'static str,
}

pub const COMMANDS: &[CommandMeta] = &[
    assistant::biotech::META,
    assistant::desci::META,
    assistant::medinfo::META,
    assistant::interpret::META,
    utility::help::META,
    utility::usage::META,
];

pub fn commands() -> Vec<poise::Command<Data, Error>> {
    vec![
        assistant::biotech::biotech(),
        assistant::desci::desci(),
        assistant::medinfo::medinfo(),
        assistant::interpret::interpret(),
        utility::help::help(),
        utility::usage::usage(),
    ]
}
