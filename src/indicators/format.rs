//! Display formatting for indicator values.
//!
//! Export tooling consumes these strings verbatim, so any formatting
//! change here shows up identically on dashboards and in PDFs.

use num_format::{Locale, ToFormattedString};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueFormat {
    /// Whole counts with thousands separators ("1,234").
    Count,
    /// One-decimal percentage ("66.7%").
    Percent,
    /// Two-decimal ratio or index ("4.25").
    Decimal,
    /// Road and path lengths ("12.5 km").
    Kilometers,
    /// Crop areas ("3.2 ha").
    Hectares,
    /// Priority ratings out of five ("4/5").
    Rating,
    /// Boolean facts mapped to 0/1 ("Yes"/"No").
    Flag,
}

impl ValueFormat {
    pub fn render(self, value: f64) -> String {
        match self {
            ValueFormat::Count => (value.round() as i64).to_formatted_string(&Locale::en),
            ValueFormat::Percent => format!("{:.1}%", value),
            ValueFormat::Decimal => format!("{:.2}", value),
            ValueFormat::Kilometers => format!("{:.1} km", value),
            ValueFormat::Hectares => format!("{:.1} ha", value),
            ValueFormat::Rating => format!("{:.0}/5", value),
            ValueFormat::Flag => {
                if value > 0.0 {
                    "Yes".to_string()
                } else {
                    "No".to_string()
                }
            }
        }
    }

    pub fn is_percentage(self) -> bool {
        matches!(self, ValueFormat::Percent)
    }
}
