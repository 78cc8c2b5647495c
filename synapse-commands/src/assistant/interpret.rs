use synapse_core::{Context, Error};

use crate::CommandMeta;
use crate::assistant::reply::answer_query;

pub const META: CommandMeta = CommandMeta {
    name: "interpret",
    desc: "Get help interpreting medical test results.",
    category: "medical",
    usage: "!interpret <test> <values>",
};

const FAILURE_MESSAGE: &str =
    "I encountered an error while interpreting the test results. Please try again later.";

#[derive(Clone, Copy, Debug, PartialEq, Eq, poise::ChoiceParameter)]
pub enum LabTest {
    #[name = "Complete Blood Count (CBC)"]
    Cbc,
    #[name = "Basic Metabolic Panel (BMP)"]
    Bmp,
    #[name = "Lipid Panel"]
    Lipid,
    #[name = "Liver Function Tests"]
    Liver,
    #[name = "Thyroid Function Tests"]
    Thyroid,
    #[name = "Other"]
    Other,
}

impl LabTest {
    /// Short identifier used inside the generated question.
    pub fn key(self) -> &'static str {
        match self {
            Self::Cbc => "cbc",
            Self::Bmp => "bmp",
            Self::Lipid => "lipid",
            Self::Liver => "liver",
            Self::Thyroid => "thyroid",
            Self::Other => "other",
        }
    }
}

pub fn interpret_query(test: LabTest, values: &str) -> String {
    format!(
        "Help me understand these {} test results: {}",
        test.key(),
        values.trim()
    )
}

#[poise::command(prefix_command, slash_command, category = "Medical")]
pub async fn interpret(
    ctx: Context<'_>,
    #[description = "The type of medical test"] test: LabTest,
    #[description = "The test values you want to understand (format: test:value, test:value)"]
    #[rest]
    values: String,
) -> Result<(), Error> {
    answer_query(ctx, &interpret_query(test, &values), FAILURE_MESSAGE).await
}

#[cfg(test)]
mod tests {
    use super::{LabTest, interpret_query};

    #[test]
    fn builds_the_interpretation_question() {
        assert_eq!(
            interpret_query(LabTest::Lipid, " LDL:130, HDL:45 "),
            "Help me understand these lipid test results: LDL:130, HDL:45"
        );
    }
}
