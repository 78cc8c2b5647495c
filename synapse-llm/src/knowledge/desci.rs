use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DesciKnowledge {
    pub overview: Overview,
    pub key_components: KeyComponents,
    #[serde(rename = "relationshipWithAI")]
    pub relationship_with_ai: RelationshipWithAi,
    #[serde(rename = "relevanceToBioTech")]
    pub relevance_to_biotech: RelevanceToBiotech,
    pub references: &'static [Reference],
}

#[derive(Debug, Serialize)]
pub struct Overview {
    pub name: &'static str,
    pub description: &'static str,
    pub importance: &'static str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyComponents {
    pub decentralized_funding: Component,
    pub open_access: Component,
    pub incentive_alignment: Component,
}

#[derive(Debug, Serialize)]
pub struct Component {
    pub name: &'static str,
    pub description: &'static str,
    pub examples: &'static [&'static str],
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RelationshipWithAi {
    pub synergies: &'static [&'static str],
    pub future_applications: &'static [&'static str],
}

#[derive(Debug, Serialize)]
pub struct RelevanceToBiotech {
    pub connections: &'static [&'static str],
}

#[derive(Debug, Serialize)]
pub struct Reference {
    pub title: &'static str,
    pub source: &'static str,
    pub url: &'static str,
}

pub static DESCI: DesciKnowledge = DesciKnowledge {
    overview: Overview {
        name: "DeSci (Decentralized Science)",
        description: "A movement that aims to make scientific research more accessible, transparent, and collaborative by leveraging blockchain technology and decentralized networks.",
        importance: "DeSci addresses key challenges in traditional scientific research including funding bottlenecks, limited access to research, data silos, and reproducibility issues.",
    },
    key_components: KeyComponents {
        decentralized_funding: Component {
            name: "Decentralized Funding",
            description: "Using blockchain and cryptocurrencies to create new funding models for scientific research.",
            examples: &[
                "Molecule DAO - Platform for funding biomedical research",
                "VitaDAO - Collective funding longevity research",
                "Research tokens and science NFTs",
            ],
        },
        open_access: Component {
            name: "Open Access and Data Sharing",
            description: "Making scientific data, methods, and results freely available to all researchers and the public.",
            examples: &[
                "Decentralized data storage solutions",
                "Open peer review systems",
                "Community-owned research databases",
            ],
        },
        incentive_alignment: Component {
            name: "Incentive Alignment",
            description: "Creating economic models that reward scientists for sharing data, reproducing studies, and collaborating.",
            examples: &[
                "Token-based incentives for peer review",
                "Reputation systems on blockchain",
                "Micropayments for data access and contributions",
            ],
        },
    },
    relationship_with_ai: RelationshipWithAi {
        synergies: &[
            "AI can analyze vast amounts of decentralized scientific data",
            "DeSci provides more diverse and accessible datasets for AI training",
            "Blockchain can ensure transparency and provenance of AI models",
            "Smart contracts can automate research collaborations between AI systems and human scientists",
            "Decentralized computing resources can power AI research more efficiently",
        ],
        future_applications: &[
            "AI-powered decentralized clinical trials",
            "Community-governed biomedical AI models",
            "Decentralized drug discovery platforms combining AI and blockchain",
            "Open-source AI tools for scientific research",
            "Tokenized AI models for scientific applications",
        ],
    },
    relevance_to_biotech: RelevanceToBiotech {
        connections: &[
            "BioTech's open-source approach aligns with DeSci principles",
            "Potential for integrating blockchain-based funding mechanisms into BioTech",
            "Opportunities for decentralized collaboration on protein analysis and genomics research",
            "Possible tokenization of BioTech's AI models and visualization tools",
            "Community governance potential for future development directions",
        ],
    },
    references: &[
        Reference {
            title: "What Is Decentralized Science (DeSci)?",
            source: "Binance Academy",
            url: "https://academy.binance.com/en/articles/what-is-decentralized-science-desci",
        },
        Reference {
            title: "From Challenges to Opportunities: How DeSci Reimagines Science",
            source: "Binance Research",
            url: "https://www.binance.com/en/research/analysis/from-challenges-to-opportunities-how-desci-reimagines-science/",
        },
        Reference {
            title: "Bio Protocol Twitter Post on DeSci",
            source: "Twitter/X",
            url: "https://x.com/bioprotocol/status/1856707895590846812",
        },
        Reference {
            title: "Molecule DAO Twitter Post",
            source: "Twitter/X",
            url: "https://x.com/Molecule_dao/status/1858169923220234300",
        },
    ],
};
