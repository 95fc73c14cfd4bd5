use crate::models::ClauseType;

/// Classification rules in priority order: the first matching type wins, so
/// an indemnity clause that also mentions termination stays `Indemnity`.
///
/// Each entry holds case-insensitive regex fragments; a clause matches the
/// type when any fragment is found anywhere in it.
pub const CLAUSE_RULES: &[(ClauseType, &[&str])] = &[
    (ClauseType::Indemnity, &["indemnif", "hold harmless"]),
    (
        ClauseType::Confidentiality,
        &["confidential", r"\bnda\b", "non-disclosure"],
    ),
    (ClauseType::Termination, &["terminat", "expir", "cancel"]),
    (
        ClauseType::Jurisdiction,
        &["jurisdiction", "governing law", "venue"],
    ),
    (
        ClauseType::IntellectualProperty,
        &["intellectual property", r"\bip\b", "copyright", "patent"],
    ),
    (ClauseType::Warranties, &["warrant", "represent"]),
    (
        ClauseType::Liability,
        &["liability", "limitation of liability"],
    ),
    (ClauseType::Payment, &["payment", "fee", "consideration"]),
    (ClauseType::ForceMajeure, &["force majeure"]),
    (
        ClauseType::DisputeResolution,
        &["dispute", "arbitration", "mediation"],
    ),
];

/// Devanagari keywords checked against the raw clause by the multilingual
/// classifier, in the same priority order as [`CLAUSE_RULES`].
///
/// The English fragments are also run over the normalized text, which
/// already covers dictionary words like `दायित्व` → `liability`.
pub const HINDI_CLAUSE_RULES: &[(ClauseType, &[&str])] = &[
    (ClauseType::Indemnity, &["क्षतिपूर्ति", "हानिरहित"]),
    (
        ClauseType::Confidentiality,
        &["गोपनीय", "गोपनीयता", "प्रकटीकरण"],
    ),
    (ClauseType::Termination, &["समाप्ति", "समाप्त", "रद्द"]),
    (ClauseType::Jurisdiction, &["क्षेत्राधिकार", "शासी कानून"]),
    (
        ClauseType::IntellectualProperty,
        &["बौद्धिक संपदा", "कॉपीराइट", "पेटेंट"],
    ),
    (ClauseType::Warranties, &["वारंटी", "आश्वासन"]),
    (ClauseType::Liability, &["दायित्व", "देयता"]),
    (ClauseType::Payment, &["भुगतान", "शुल्क", "वेतन"]),
    (ClauseType::ForceMajeure, &["अप्रत्याशित घटना", "दैवीय आपदा"]),
    (ClauseType::DisputeResolution, &["विवाद", "मध्यस्थता"]),
];
