use crate::models::{ClauseType, RiskLevel};

/// One risk tier: every pattern that matches adds `weight` to the clause score.
pub struct RiskTier {
    pub level: RiskLevel,
    pub weight: i32,
    pub patterns: &'static [(&'static str, &'static str)],
}

/// Tiers in evaluation order. Issues are reported in this order too.
pub const RISK_TIERS: &[RiskTier] = &[
    RiskTier {
        level: RiskLevel::High,
        weight: 3,
        patterns: &[
            (
                r"unlimited liability",
                "Unlimited liability exposes business to catastrophic risk",
            ),
            (
                r"indemnify.*for.*negligence",
                "Indemnifying for others' negligence is extremely risky",
            ),
            (
                r"penalty.*\d+%.*per month",
                "High penalty rates can be punitive",
            ),
            (
                r"sole discretion.*terminate",
                "Unilateral termination rights are unfair",
            ),
            (
                r"automatic renewal.*without notice",
                "Auto-renewal without notice creates lock-in",
            ),
            (
                r"jurisdiction.*foreign country",
                "Foreign jurisdiction increases legal costs",
            ),
            (
                r"assign.*without consent",
                "Assignment without consent may transfer obligations unfairly",
            ),
        ],
    },
    RiskTier {
        level: RiskLevel::Medium,
        weight: 2,
        patterns: &[
            (
                r"confidentiality.*indefinite",
                "Indefinite confidentiality may be unreasonable",
            ),
            (
                r"non-compete.*\d+ years",
                "Long non-compete periods may restrict business",
            ),
            (
                r"force majeure.*exclusive remedy",
                "Limited force majeure protection",
            ),
            (
                r"governing law.*another state",
                "Different state law increases complexity",
            ),
            (
                r"payment terms.*\d+ days",
                "Long payment terms affect cash flow",
            ),
            (r"warranty.*as is", "'As is' warranty provides no protection"),
        ],
    },
    RiskTier {
        level: RiskLevel::Low,
        weight: 1,
        patterns: &[
            (r"notice.*in writing", "Written notice requirement is standard"),
            (r"entire agreement", "Entire agreement clause is standard"),
            (r"severability", "Severability clause is protective"),
            (r"counterparts", "Counterparts clause is standard"),
        ],
    },
];

/// Score adjustment applied only to clauses of one type.
///
/// `base` is always added; when `trigger` matches, `on_trigger` is added as
/// well and the issue is reported.
pub struct TypeRule {
    pub clause_type: ClauseType,
    pub base: i32,
    pub trigger: &'static str,
    pub on_trigger: i32,
    pub issue: &'static str,
    pub level: RiskLevel,
    pub context: &'static str,
}

pub const TYPE_RULES: &[TypeRule] = &[
    TypeRule {
        clause_type: ClauseType::Indemnity,
        base: 2,
        trigger: r"indemnify.*all",
        on_trigger: 0,
        issue: "Broad 'all losses' indemnity may include indirect/consequential damages",
        level: RiskLevel::High,
        context: "Indemnity clause scope",
    },
    TypeRule {
        clause_type: ClauseType::Termination,
        base: 0,
        trigger: r"without cause",
        on_trigger: 3,
        issue: "'Without cause' termination provides no stability",
        level: RiskLevel::High,
        context: "Termination conditions",
    },
    TypeRule {
        clause_type: ClauseType::Jurisdiction,
        base: 0,
        trigger: r"\b(?:new delhi|delhi|mumbai|bangalore|bengaluru|chennai|kolkata|hyderabad|pune|ahmedabad|दिल्ली|मुंबई)\b",
        on_trigger: -1,
        issue: "Local Indian jurisdiction is preferable for SMEs",
        level: RiskLevel::Low,
        context: "Jurisdiction specification",
    },
];

/// Keyword (matched against the lowercased issue text) → SME-friendly mitigation.
pub const MITIGATIONS: &[(&str, &str)] = &[
    (
        "unlimited liability",
        "Suggest capping liability to contract value or insurance limits",
    ),
    (
        "negligence",
        "Suggest limiting indemnity to losses caused by your own negligence",
    ),
    (
        "penalty",
        "Suggest capping late-payment penalties at a reasonable rate (e.g. 1-2% per month)",
    ),
    (
        "unilateral termination",
        "Suggest requiring 'reasonable grounds' or mutual agreement",
    ),
    (
        "auto-renewal",
        "Suggest requiring 30-60 day notice before renewal",
    ),
    (
        "foreign jurisdiction",
        "Suggest local jurisdiction or neutral arbitration venue",
    ),
    (
        "assignment without consent",
        "Suggest requiring prior written consent for any assignment",
    ),
    (
        "indefinite confidentiality",
        "Suggest 2-5 year term after contract end",
    ),
    (
        "non-compete",
        "Suggest limiting non-compete to 1 year and your specific market",
    ),
    (
        "payment terms",
        "Suggest net 30-45 day payment terms",
    ),
    (
        "'all losses'",
        "Suggest excluding indirect and consequential damages from the indemnity",
    ),
    (
        "'without cause'",
        "Suggest mutual termination rights with at least 30 days' notice",
    ),
];
