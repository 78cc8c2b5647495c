use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BiotechKnowledge {
    pub overview: Overview,
    pub core_technology: CoreTechnology,
    pub technical_architecture: TechnicalArchitecture,
    pub funding_milestones: &'static [FundingMilestone],
    pub future_directions: FutureDirections,
}

#[derive(Debug, Serialize)]
pub struct Overview {
    pub name: &'static str,
    pub description: &'static str,
    pub website: &'static str,
    pub github: &'static str,
    pub twitter: &'static str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CoreTechnology {
    #[serde(rename = "protGPS")]
    pub prot_gps: Component,
    pub genomics_engine: Component,
    pub visualization: Component,
}

#[derive(Debug, Serialize)]
pub struct Component {
    pub name: &'static str,
    pub description: &'static str,
    pub capabilities: &'static [&'static str],
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TechnicalArchitecture {
    pub frontend: &'static [&'static str],
    pub backend: &'static [&'static str],
    pub ai_models: &'static [&'static str],
}

#[derive(Debug, Serialize)]
pub struct FundingMilestone {
    pub level: &'static str,
    pub status: &'static str,
    pub features: &'static [&'static str],
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FutureDirections {
    pub ai_integration: &'static [&'static str],
    pub multi_omics: &'static [&'static str],
    pub clinical_applications: &'static [&'static str],
}

pub static BIOTECH: BiotechKnowledge = BiotechKnowledge {
    overview: Overview {
        name: "BioTech",
        description: "An advanced research platform for computational biology, offering an integrated platform for protein analysis, genomic sequencing, and drug discovery.",
        website: "https://www.biotech-synapse.xyz/",
        github: "https://github.com/BioTech-Ai",
        twitter: "https://x.com/BioTechAi_sol",
    },
    core_technology: CoreTechnology {
        prot_gps: Component {
            name: "ProtGPS",
            description: "Protein Localization and Structure Analysis system that utilizes deep learning models trained on extensive protein databases.",
            capabilities: &[
                "Cellular localization prediction with high accuracy",
                "Protein-protein interactions",
                "Structural features and domains analysis",
                "Functional annotations based on sequence patterns",
            ],
        },
        genomics_engine: Component {
            name: "Genomics Analysis Engine",
            description: "Advanced DNA and RNA sequence analysis module.",
            capabilities: &[
                "Variant detection and annotation",
                "Expression analysis and quantification",
                "Pathway enrichment analysis",
                "Structural variant identification",
            ],
        },
        visualization: Component {
            name: "Interactive Visualization Framework",
            description: "State-of-the-art visualization system that renders molecular structures and cellular components in real-time 3D.",
            capabilities: &[
                "Explore protein structures interactively",
                "Visualize cellular compartments and protein localization",
                "Observe molecular interactions in a spatial context",
                "Generate publication-ready visualizations",
            ],
        },
    },
    technical_architecture: TechnicalArchitecture {
        frontend: &[
            "Next.js for server-side rendering and optimal performance",
            "React Three Fiber for 3D visualizations",
            "Tailwind CSS for responsive design",
            "Framer Motion for fluid animations and transitions",
        ],
        backend: &[
            "Server-side API endpoints for data processing",
            "Integration with Mistral AI for advanced language model capabilities",
            "Serverless functions for scalable computation",
            "Secure data storage and management",
        ],
        ai_models: &[
            "Deep learning models for protein analysis",
            "Natural language processing for research data interpretation",
            "Computer vision algorithms for structural pattern recognition",
            "Reinforcement learning for optimization of analysis parameters",
        ],
    },
    funding_milestones: &[
        FundingMilestone {
            level: "$1 Million",
            status: "Achieved",
            features: &[
                "Core ProtGPS protein analysis engine",
                "Basic genomics analysis capabilities",
                "Fundamental 3D visualization framework",
                "Initial AI model training and deployment",
            ],
        },
        FundingMilestone {
            level: "$2 Million",
            status: "Planned",
            features: &[
                "Advanced cell culture analysis system",
                "Enhanced protein-protein interaction predictions",
                "Expanded genomic variant analysis",
                "Improved 3D visualization with cellular context",
            ],
        },
        FundingMilestone {
            level: "$3 Million",
            status: "Planned",
            features: &[
                "Virtual drug screening platform",
                "Toxicity prediction system",
                "Advanced cell imaging with AI analysis",
                "Comprehensive API for third-party integrations",
            ],
        },
        FundingMilestone {
            level: "$4 Million",
            status: "Planned",
            features: &[
                "Cancer cell detection and analysis system",
                "DNA repair mechanism analysis",
                "Multi-omics data integration",
                "Advanced pathway analysis and visualization",
            ],
        },
        FundingMilestone {
            level: "$5 Million",
            status: "Planned",
            features: &[
                "Comprehensive biomarker discovery platform",
                "Personalized medicine analysis tools",
                "Advanced drug development pipeline",
                "Global research collaboration network",
            ],
        },
    ],
    future_directions: FutureDirections {
        ai_integration: &[
            "Predict protein folding with higher accuracy",
            "Model complex cellular environments",
            "Simulate drug-target interactions in real-time",
            "Generate novel protein designs for specific functions",
        ],
        multi_omics: &[
            "Proteomics data analysis",
            "Metabolomics integration",
            "Epigenetic data correlation",
            "Systems biology approaches to data interpretation",
        ],
        clinical_applications: &[
            "Biomarker discovery for disease diagnosis",
            "Personalized treatment recommendation systems",
            "Drug repurposing for rare diseases",
            "Clinical trial design optimization",
        ],
    },
};
