//! Static country name → ISO code registry
//!
//! The bulletin prints country names in English; downstream consumers key
//! on ISO 3166-1 alpha-2 codes. This registry covers the EU member states
//! plus the non-EU countries that have appeared in bulletins. It is passed
//! to the extractor as an explicit collaborator rather than consulted as
//! module-global state.

/// Country name → ISO 3166-1 alpha-2 code
pub const COUNTRY_CODES: &[(&str, &str)] = &[
    ("Austria", "AT"),
    ("Belgium", "BE"),
    ("Bulgaria", "BG"),
    ("Croatia", "HR"),
    ("Cyprus", "CY"),
    ("Czech Republic", "CZ"),
    ("Czechia", "CZ"),
    ("Denmark", "DK"),
    ("Estonia", "EE"),
    ("Finland", "FI"),
    ("France", "FR"),
    ("Germany", "DE"),
    ("Greece", "GR"),
    ("Hungary", "HU"),
    ("Ireland", "IE"),
    ("Italy", "IT"),
    ("Latvia", "LV"),
    ("Lithuania", "LT"),
    ("Luxembourg", "LU"),
    ("Malta", "MT"),
    ("Netherlands", "NL"),
    ("Poland", "PL"),
    ("Portugal", "PT"),
    ("Romania", "RO"),
    ("Slovakia", "SK"),
    ("Slovenia", "SI"),
    ("Spain", "ES"),
    ("Sweden", "SE"),
    // Non-EU countries occasionally present in bulletins
    ("United Kingdom", "GB"),
    ("Norway", "NO"),
    ("Switzerland", "CH"),
    ("Iceland", "IS"),
    ("Ukraine", "UA"),
    ("Turkey", "TR"),
    ("Serbia", "RS"),
    ("Albania", "AL"),
    ("Bosnia and Herzegovina", "BA"),
    ("North Macedonia", "MK"),
    ("Montenegro", "ME"),
    ("Kosovo", "XK"),
];

/// ISO country code → ISO 4217 currency code
pub const COUNTRY_CURRENCIES: &[(&str, &str)] = &[
    ("AT", "EUR"),
    ("BE", "EUR"),
    ("BG", "BGN"),
    ("HR", "EUR"),
    ("CY", "EUR"),
    ("CZ", "CZK"),
    ("DK", "DKK"),
    ("EE", "EUR"),
    ("FI", "EUR"),
    ("FR", "EUR"),
    ("DE", "EUR"),
    ("GR", "EUR"),
    ("HU", "HUF"),
    ("IE", "EUR"),
    ("IT", "EUR"),
    ("LV", "EUR"),
    ("LT", "EUR"),
    ("LU", "EUR"),
    ("MT", "EUR"),
    ("NL", "EUR"),
    ("PL", "PLN"),
    ("PT", "EUR"),
    ("RO", "RON"),
    ("SK", "EUR"),
    ("SI", "EUR"),
    ("ES", "EUR"),
    ("SE", "SEK"),
    ("GB", "GBP"),
    ("NO", "NOK"),
    ("CH", "CHF"),
    ("IS", "ISK"),
    ("UA", "UAH"),
    ("TR", "TRY"),
    ("RS", "RSD"),
    ("AL", "ALL"),
    ("BA", "BAM"),
    ("MK", "MKD"),
    ("ME", "EUR"),
    ("XK", "EUR"),
];

/// Lookup collaborator for country codes and currencies
#[derive(Debug, Clone, Default)]
pub struct CountryRegistry;

impl CountryRegistry {
    pub fn new() -> Self {
        Self
    }

    /// Resolve a country name to its ISO code
    ///
    /// Tries an exact match first, then a case-insensitive match on the
    /// trimmed name. Unknown names resolve to None rather than an error.
    pub fn resolve_code(&self, name: &str) -> Option<&'static str> {
        if name.is_empty() {
            return None;
        }

        if let Some((_, code)) = COUNTRY_CODES.iter().find(|(n, _)| *n == name) {
            return Some(code);
        }

        let normalized = name.trim().to_lowercase();
        COUNTRY_CODES
            .iter()
            .find(|(n, _)| n.to_lowercase() == normalized)
            .map(|(_, code)| *code)
    }

    /// Currency for an ISO country code
    pub fn currency(&self, code: &str) -> Option<&'static str> {
        COUNTRY_CURRENCIES
            .iter()
            .find(|(c, _)| *c == code)
            .map(|(_, cur)| *cur)
    }

    /// All known (name, code) entries in registry order
    pub fn entries(&self) -> &'static [(&'static str, &'static str)] {
        COUNTRY_CODES
    }

    /// Number of known country names
    pub fn len(&self) -> usize {
        COUNTRY_CODES.len()
    }

    pub fn is_empty(&self) -> bool {
        COUNTRY_CODES.is_empty()
    }
}
