//! Dialing codes for the phone field's country picker.

use shared::CountryCode;

const COUNTRY_CODES: &[(&str, &str, &str)] = &[
    ("+1", "US", "United States"),
    ("+1", "CA", "Canada"),
    ("+44", "GB", "United Kingdom"),
    ("+33", "FR", "France"),
    ("+49", "DE", "Germany"),
    ("+39", "IT", "Italy"),
    ("+34", "ES", "Spain"),
    ("+31", "NL", "Netherlands"),
    ("+32", "BE", "Belgium"),
    ("+41", "CH", "Switzerland"),
    ("+43", "AT", "Austria"),
    ("+45", "DK", "Denmark"),
    ("+46", "SE", "Sweden"),
    ("+47", "NO", "Norway"),
    ("+358", "FI", "Finland"),
    ("+351", "PT", "Portugal"),
    ("+30", "GR", "Greece"),
    ("+48", "PL", "Poland"),
    ("+420", "CZ", "Czech Republic"),
    ("+36", "HU", "Hungary"),
    ("+7", "RU", "Russia"),
    ("+86", "CN", "China"),
    ("+81", "JP", "Japan"),
    ("+82", "KR", "South Korea"),
    ("+91", "IN", "India"),
    ("+61", "AU", "Australia"),
    ("+64", "NZ", "New Zealand"),
    ("+55", "BR", "Brazil"),
    ("+52", "MX", "Mexico"),
    ("+54", "AR", "Argentina"),
    ("+56", "CL", "Chile"),
    ("+57", "CO", "Colombia"),
    ("+51", "PE", "Peru"),
    ("+58", "VE", "Venezuela"),
    ("+27", "ZA", "South Africa"),
    ("+20", "EG", "Egypt"),
    ("+234", "NG", "Nigeria"),
    ("+254", "KE", "Kenya"),
    ("+971", "AE", "UAE"),
    ("+966", "SA", "Saudi Arabia"),
    ("+972", "IL", "Israel"),
    ("+90", "TR", "Turkey"),
    ("+98", "IR", "Iran"),
    ("+92", "PK", "Pakistan"),
    ("+880", "BD", "Bangladesh"),
    ("+94", "LK", "Sri Lanka"),
    ("+60", "MY", "Malaysia"),
    ("+65", "SG", "Singapore"),
    ("+66", "TH", "Thailand"),
    ("+84", "VN", "Vietnam"),
    ("+63", "PH", "Philippines"),
    ("+62", "ID", "Indonesia"),
];

#[derive(Clone)]
pub struct CountryService {
    countries: Vec<CountryCode>,
}

impl CountryService {
    pub fn new() -> Self {
        let countries = COUNTRY_CODES
            .iter()
            .map(|(code, country, name)| CountryCode {
                code: code.to_string(),
                country: country.to_string(),
                name: name.to_string(),
            })
            .collect();
        Self { countries }
    }

    pub fn list(&self) -> &[CountryCode] {
        &self.countries
    }

    /// Countries whose name contains the query (any case) or whose code contains it
    pub fn search(&self, query: &str) -> Vec<CountryCode> {
        let query = query.trim();
        let needle = query.to_lowercase();
        self.countries
            .iter()
            .filter(|country| country.name.to_lowercase().contains(&needle) || country.code.contains(query))
            .cloned()
            .collect()
    }
}

impl Default for CountryService {
    fn default() -> Self {
        Self::new()
    }
}
