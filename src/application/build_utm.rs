//! Build UTM URL use case

use crate::domain::{Address, Campaign, Utm};
use crate::error::Result;

/// Service for tagging an address with a campaign
pub struct BuildService;

impl BuildService {
    /// Validate the address and tag it with the campaign
    pub fn build(raw_address: &str, campaign: Campaign) -> Result<Utm> {
        let url = Address::new(raw_address)?;

        if campaign.is_empty() {
            tracing::warn!("no campaign attributes given for {}", url);
        }

        let utm = Utm::new(url, campaign);
        tracing::debug!(url = %utm, "built utm url");

        Ok(utm)
    }
}
