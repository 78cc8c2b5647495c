use std::{fs, path::Path};

use crate::intent::DomainFlags;
use crate::knowledge::{KnowledgeSection, KnowledgeStore};
use crate::topic::select_topic;

pub const DEFAULT_PERSONA_PATH: &str = "SYSTEM_PROMPT.md";

pub const DEFAULT_PERSONA_PROMPT: &str = r#"You are Synapse, an AI Doctor assistant with specialized knowledge about the BioTech computational biology platform and Decentralized Science (DeSci). Your role is to:
1. Answer general medical questions
2. Provide information about common medical conditions
3. Explain medical terminology and concepts
4. Discuss general treatment approaches
5. Provide health education and preventive advice
6. Share detailed information about BioTech and its capabilities when asked
7. Explain DeSci concepts and their importance for scientific research and AI

IMPORTANT: NEVER mention or respond with anything related to "BioFusion". The correct name is "BioTech" for all responses.

Always refer to yourself as "Synapse" when introducing yourself or when asked about your name.

About BioTech:
BioTech is an advanced research platform for computational biology, offering integrated tools for protein analysis, genomic sequencing, and drug discovery. It includes:

1. ProtGPS: A system for protein localization and structure analysis that predicts cellular localization, protein-protein interactions, structural features, and functional annotations.

2. Genomics Analysis Engine: Provides variant detection, expression analysis, pathway enrichment, and structural variant identification.

3. Interactive Visualization Framework: Renders molecular structures and cellular components in real-time 3D.

The platform is built on Next.js, React Three Fiber, and uses Mistral AI. It follows a structured funding roadmap with milestones at $1M (achieved), $2M, $3M, $4M, and $5M levels, each unlocking new capabilities.

BioTech is open source with code available at: https://github.com/BioTech-Ai
Website: https://www.biotech-synapse.xyz/
Twitter: https://x.com/BioTechAi_sol

About DeSci (Decentralized Science):
DeSci is a movement that aims to make scientific research more accessible, transparent, and collaborative by leveraging blockchain technology and decentralized networks. Key components include:

1. Decentralized Funding: Using blockchain and cryptocurrencies to create new funding models for scientific research.

2. Open Access and Data Sharing: Making scientific data, methods, and results freely available to all researchers and the public.

3. Incentive Alignment: Creating economic models that reward scientists for sharing data, reproducing studies, and collaborating.

DeSci has important synergies with AI development, as it can provide more diverse datasets for AI training, ensure transparency of AI models, and enable community governance of scientific AI applications.

Important guidelines:
- NEVER mention "BioFusion" in any response. Always use "BioTech" instead.
- Always include disclaimers when discussing medical information
- Never provide definitive medical diagnoses
- Recommend consulting healthcare professionals for personal medical advice
- Be accurate, helpful, and educational in your responses
- Keep responses concise and focused on medical topics, BioTech information, or DeSci concepts
- When discussing DeSci, mention relevant references from Binance Academy, Binance Research, or other provided sources"#;

/// Always the last thing in a system prompt.
pub const SANITIZATION_REMINDER: &str =
    "REMINDER: NEVER mention 'BioFusion' in your response. Always use 'BioTech' instead.";

/// Load the persona prompt from `path`, falling back to the built-in doctor
/// persona when the file is missing or blank.
pub fn load_persona_prompt(path: &Path) -> String {
    match fs::read_to_string(path) {
        Ok(value) if !value.trim().is_empty() => value,
        _ => DEFAULT_PERSONA_PROMPT.to_owned(),
    }
}

/// System prompt for a single request.
#[derive(Clone, Debug)]
pub struct PromptBundle<'a> {
    persona: &'a str,
    sections: Vec<KnowledgeSection>,
}

impl PromptBundle<'_> {
    pub fn sections(&self) -> &[KnowledgeSection] {
        &self.sections
    }

    /// Persona, each knowledge block, then the reminder.
    pub fn render(&self) -> String {
        let mut out = self.persona.to_owned();
        for section in &self.sections {
            out.push_str("\n\n");
            out.push_str(section.heading);
            out.push_str(":\n");
            out.push_str(&section.body);
        }
        out.push_str("\n\n");
        out.push_str(SANITIZATION_REMINDER);
        out
    }
}

#[derive(Clone, Debug)]
pub struct PromptComposer {
    persona: String,
    knowledge: KnowledgeStore,
}

impl PromptComposer {
    pub fn new(persona: impl Into<String>, knowledge: KnowledgeStore) -> Self {
        Self {
            persona: persona.into(),
            knowledge,
        }
    }

    /// Build the system prompt for `query`: at most one topic per active domain.
    pub fn compose(&self, flags: DomainFlags, query: &str) -> PromptBundle<'_> {
        let sections = flags
            .active()
            .flat_map(|domain| self.knowledge.sections(select_topic(domain, query)))
            .collect();

        PromptBundle {
            persona: &self.persona,
            sections,
        }
    }
}

impl Default for PromptComposer {
    fn default() -> Self {
        Self::new(DEFAULT_PERSONA_PROMPT, KnowledgeStore::builtin())
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::{
        DEFAULT_PERSONA_PROMPT, PromptComposer, SANITIZATION_REMINDER, load_persona_prompt,
    };
    use crate::intent::DomainFlags;

    #[test]
    fn protgps_query_gets_exactly_the_protgps_block() {
        let composer = PromptComposer::default();
        let query = "tell me about ProtGPS";
        let bundle = composer.compose(DomainFlags::detect(query), query);

        let headings: Vec<_> = bundle.sections().iter().map(|s| s.heading).collect();
        assert_eq!(headings, vec!["Detailed information about ProtGPS"]);

        let rendered = bundle.render();
        assert!(rendered.starts_with(DEFAULT_PERSONA_PROMPT));
        assert!(rendered.ends_with(SANITIZATION_REMINDER));
        assert!(!rendered.contains("General BioTech Overview"));
    }

    #[test]
    fn both_domains_append_in_order() {
        let composer = PromptComposer::default();
        let query = "How is DeSci relevant to the BioTech platform?";
        let bundle = composer.compose(DomainFlags::detect(query), query);

        let headings: Vec<_> = bundle.sections().iter().map(|s| s.heading).collect();
        assert_eq!(
            headings,
            vec![
                "General BioTech Overview",
                "Detailed information about DeSci's Relevance to BioTech",
            ]
        );
    }

    #[test]
    fn sub_keywords_do_not_combine() {
        let composer = PromptComposer::default();
        let query = "biotech funding milestones and future roadmap";
        let bundle = composer.compose(DomainFlags::detect(query), query);

        assert_eq!(bundle.sections().len(), 1);
        assert_eq!(
            bundle.sections()[0].heading,
            "Detailed information about Funding Milestones"
        );
    }

    #[test]
    fn reminder_is_always_appended() {
        let composer = PromptComposer::new("persona", Default::default());
        let bundle = composer.compose(DomainFlags::default(), "headache remedies");

        assert!(bundle.sections().is_empty());
        assert_eq!(bundle.render(), format!("persona\n\n{SANITIZATION_REMINDER}"));
    }

    #[test]
    fn rendered_blocks_use_heading_then_json() {
        let composer = PromptComposer::new("persona", Default::default());
        let query = "what is molecule dao?";
        let rendered = composer.compose(DomainFlags::detect(query), query).render();

        assert!(rendered.contains(
            "\n\nDetailed information about Decentralized Funding in DeSci:\n{\n  \"name\": \"Decentralized Funding\""
        ));
    }

    #[test]
    fn missing_persona_file_falls_back_to_default() {
        let persona = load_persona_prompt(Path::new("definitely/not/here/SYSTEM_PROMPT.md"));
        assert_eq!(persona, DEFAULT_PERSONA_PROMPT);
    }
}
