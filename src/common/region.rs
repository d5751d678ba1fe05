// Handles region things
#![forbid(unsafe_code)]
#![deny(missing_docs)]
use aws_config::meta::region::future;
use aws_config::meta::region::ProvideRegion;
use aws_types::region;
use std::env;
use tracing::debug;

/// The AWS region that the CloudWatch client is created in.
///
/// With no region set, the AWS SDK default provider chain decides.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Region {
    region: Option<region::Region>,
}

impl Region {
    /// Returns a `Region` taken from the environment, if one is set there.
    pub fn new() -> Self {
        // By default, we try to get a region from the environment, this might
        // be overridden later by the config file or CLI options.
        let possibilities = vec![
            env::var("AWS_REGION"),
            env::var("AWS_DEFAULT_REGION"),
        ];

        let region = possibilities
            .iter()
            .find_map(|region| region.as_ref().ok())
            .map(|region| region::Region::new(region.to_owned()));

        debug!("AWS_REGION in environment is: {:?}", region);

        Self {
            region: region,
        }
    }

    /// Returns the region name
    pub fn name(&self) -> &str {
        match &self.region {
            Some(region) => region.as_ref(),
            None         => "default",
        }
    }

    /// Returns `self` with the region replaced by `region`.
    pub fn set_region(mut self, region: &str) -> Self {
        debug!("Region set to: {:?}", region);

        let region = region::Region::new(region.to_string());
        self.region = Some(region);
        self
    }
}

impl ProvideRegion for Region {
    // Takes our region string and returns a proper AWS Region, this should
    // allow us to pass our Region into AWS SDK functions expecting an AWS
    // Region.
    fn region(&self) -> future::ProvideRegion {
        future::ProvideRegion::ready(self.region.to_owned())
    }
}
