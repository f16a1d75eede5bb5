//! Country dial codes offered by the phone field.

/// A selectable dial code and the country it belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DialCode {
    pub code: &'static str,
    pub country: &'static str,
}

impl DialCode {
    const fn new(code: &'static str, country: &'static str) -> Self {
        Self { code, country }
    }

    /// Looks up a dial code in [`DIAL_CODES`].
    ///
    /// Whitespace inside the code is ignored, so `"+ 44"` finds `+44`.
    #[must_use]
    pub fn lookup(code: &str) -> Option<&'static Self> {
        let wanted: String = code.chars().filter(|c| !c.is_whitespace()).collect();
        DIAL_CODES.iter().find(|d| d.code == wanted)
    }
}

impl std::fmt::Display for DialCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.code, self.country)
    }
}

/// Dial codes in display order.
pub const DIAL_CODES: &[DialCode] = &[
    DialCode::new("+1", "USA / Canada"),
    DialCode::new("+44", "United Kingdom"),
    DialCode::new("+90", "Turkey"),
    DialCode::new("+49", "Germany"),
    DialCode::new("+33", "France"),
    DialCode::new("+31", "Netherlands"),
    DialCode::new("+32", "Belgium"),
    DialCode::new("+41", "Switzerland"),
    DialCode::new("+43", "Austria"),
    DialCode::new("+34", "Spain"),
    DialCode::new("+39", "Italy"),
    DialCode::new("+46", "Sweden"),
    DialCode::new("+47", "Norway"),
    DialCode::new("+45", "Denmark"),
    DialCode::new("+358", "Finland"),
    DialCode::new("+48", "Poland"),
    DialCode::new("+7", "Russia"),
    DialCode::new("+971", "UAE"),
    DialCode::new("+966", "Saudi Arabia"),
    DialCode::new("+994", "Azerbaijan"),
    DialCode::new("+998", "Uzbekistan"),
    DialCode::new("+993", "Turkmenistan"),
    DialCode::new("+996", "Kyrgyzstan"),
    DialCode::new("+992", "Tajikistan"),
    DialCode::new("+374", "Armenia"),
    DialCode::new("+995", "Georgia"),
    DialCode::new("+98", "Iran"),
    DialCode::new("+964", "Iraq"),
    DialCode::new("+963", "Syria"),
    DialCode::new("+961", "Lebanon"),
    DialCode::new("+962", "Jordan"),
    DialCode::new("+972", "Israel"),
    DialCode::new("+20", "Egypt"),
    DialCode::new("+212", "Morocco"),
    DialCode::new("+213", "Algeria"),
];
