/// Hindi legal vocabulary and its English equivalents, applied in table order.
///
/// Multi-word phrases come before the single words they end with, so
/// `नहीं करेगा` is rewritten as a whole before `करेगा` can match inside it.
pub const LEGAL_TERMS: &[(&str, &str)] = &[
    // Phrases
    ("बौद्धिक संपदा", "intellectual property"),
    ("नहीं करेगा", "shall not"),
    ("नहीं करेगी", "shall not"),
    ("करना होगा", "must"),
    ("करना चाहिए", "should"),
    ("बनाए रखेगा", "shall maintain"),
    // Contract terms
    ("समझौता", "agreement"),
    ("अनुबंध", "contract"),
    ("नियम", "terms"),
    ("शर्तें", "conditions"),
    ("पक्ष", "party"),
    ("पक्षकार", "party"),
    ("कंपनी", "company"),
    ("फर्म", "firm"),
    ("संस्था", "organization"),
    ("रोजगारी", "employment"),
    // People and roles
    ("कर्मचारी", "employee"),
    ("व्यक्ति", "person"),
    ("निदेशक", "director"),
    ("प्रबंधक", "manager"),
    ("मालिक", "owner"),
    ("वरिष्ठ", "senior"),
    ("डेवलपर", "developer"),
    // Money
    ("भुगतान", "payment"),
    ("राशि", "amount"),
    ("दायित्व", "liability"),
    ("जिम्मेदारी", "responsibility"),
    ("ब्याज", "interest"),
    ("जुर्माना", "penalty"),
    ("मुआवजा", "compensation"),
    ("हर्जाना", "damages"),
    ("वेतन", "salary"),
    ("मासिक", "monthly"),
    // Legal terms
    ("अधिकार", "right"),
    ("कर्तव्य", "duty"),
    ("बाध्य", "obliged"),
    ("शर्त", "condition"),
    ("प्रावधान", "provision"),
    ("धारा", "clause"),
    ("अनुच्छेद", "section"),
    // Actions
    ("समाप्ति", "termination"),
    ("रद्द", "cancel"),
    ("समाप्त", "terminate"),
    ("विस्तार", "extension"),
    ("नवीनीकरण", "renewal"),
    ("कार्य", "work"),
    ("करेगा", "shall"),
    ("करेगी", "shall"),
    ("रखेगा", "shall maintain"),
    ("होगा", "shall be"),
    ("होगी", "shall be"),
    // Time
    ("अवधि", "period"),
    ("समय", "time"),
    ("मियाद", "term"),
    ("नोटिस", "notice"),
    ("सूचना", "notification"),
    ("अनिश्चित", "indefinite"),
    // Legal concepts
    ("कानून", "law"),
    ("न्यायालय", "court"),
    ("न्यायाधीश", "judge"),
    ("फैसला", "judgment"),
    ("आदेश", "order"),
    ("विधि", "act"),
    // Property and information
    ("संपत्ति", "property"),
    ("गोपनीय", "confidential"),
    ("गुप्त", "secret"),
    ("प्रकटीकरण", "disclosure"),
    ("गोपनीयता", "confidentiality"),
    ("जानकारी", "information"),
    // Numbers and quantities
    ("हज़ार", "thousand"),
    ("लाख", "lakh"),
    ("करोड़", "crore"),
    ("प्रतिशत", "percent"),
    ("फीसदी", "percent"),
    ("प्रतिमाह", "per month"),
    // Risk vocabulary
    ("एकतरफा", "unilateral"),
    ("विवेक", "discretion"),
    ("असीमित", "unlimited"),
    ("विदेशी", "foreign"),
    ("स्वचालित", "automatic"),
];

/// Devanagari digits in value order.
pub const HINDI_DIGITS: [char; 10] = ['०', '१', '२', '३', '४', '५', '६', '७', '८', '९'];
