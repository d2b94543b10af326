//! Output formatting utilities

use crate::cli::OutputFormat;
use crate::domain::{Campaign, Utm, UtmParameter};
use crate::error::Result;
use serde::Serialize;

#[derive(Serialize)]
struct UtmReport<'a> {
    address: &'a str,
    campaign: &'a Campaign,
}

/// Format a parsed UTM URL for display
pub fn format_utm(utm: &Utm, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => {
            let mut output = format!("{:<13}{}\n", "address", utm.url);
            output.push_str(&format_campaign(&utm.campaign));
            Ok(output)
        }
        OutputFormat::Toml => {
            let report = UtmReport {
                address: utm.url.as_str(),
                campaign: &utm.campaign,
            };
            Ok(toml::to_string_pretty(&report)?)
        }
    }
}

/// Present attributes of a campaign, one `key  value` per line
fn format_campaign(campaign: &Campaign) -> String {
    let mut output = String::new();
    for parameter in UtmParameter::ALL {
        if let Some(value) = campaign.get(parameter) {
            output.push_str(&format!("{:<13}{}\n", parameter, value));
        }
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Address;

    fn sample() -> Utm {
        Utm::new(
            Address::new("https://x.io/").unwrap(),
            Campaign::default()
                .with(UtmParameter::Source, Some("ads".to_string()))
                .with(UtmParameter::Content, Some("footer".to_string())),
        )
    }

    #[test]
    fn test_format_text() {
        let output = format_utm(&sample(), OutputFormat::Text).unwrap();
        assert_eq!(
            output,
            "address      https://x.io/\n\
             utm_source   ads\n\
             utm_content  footer\n"
        );
    }

    #[test]
    fn test_format_toml() {
        let output = format_utm(&sample(), OutputFormat::Toml).unwrap();
        assert!(output.contains("address = \"https://x.io/\""));
        assert!(output.contains("[campaign]"));
        assert!(output.contains("source = \"ads\""));
        assert!(!output.contains("medium"));
    }

    #[test]
    fn test_format_empty_campaign() {
        assert_eq!(format_campaign(&Campaign::default()), "");
    }
}
