use crate::CommandMeta;

pub const HELP_FOOTER: &str =
    "Synapse shares general information only. Always consult a healthcare professional.";

pub fn unknown_category_message(wanted_category: &str, valid_categories: &[&str]) -> String {
    let valid = valid_categories
        .iter()
        .map(|category| display_category(category))
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "Unknown category: {}\nValid categories: {}",
        display_category(wanted_category),
        valid
    )
}

pub fn unknown_command_message(name: &str) -> String {
    format!("Unknown command: `{name}`. Try `!help` for the full list.")
}

/// Commands grouped under bold category headings, in the order given.
pub fn grouped_help_description(commands: &[&CommandMeta]) -> String {
    let mut out = String::new();
    let mut current_category: Option<&str> = None;

    for command in commands {
        if current_category != Some(command.category) {
            if !out.is_empty() {
                out.push('\n');
            }
            out.push_str(&format!("**{}**\n", display_category(command.category)));
            current_category = Some(command.category);
        }

        out.push_str(&format!(
            "`{}`: {} (`{}`)\n",
            command.name, command.desc, command.usage
        ));
    }

    if out.is_empty() {
        out.push_str("No commands available.");
    }

    out.trim_end().to_owned()
}

pub fn display_category(category: &str) -> String {
    let mut chars = category.chars();
    match chars.next() {
        Some(first) => format!("{}{}", first.to_uppercase(), chars.as_str()),
        None => String::new(),
    }
}
