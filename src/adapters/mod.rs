// Adapters layer: AWS SDK implementations of the domain ports. Compiled only
// for the Lambda binaries; tests exercise the core flows through fakes.

#[cfg(feature = "lambda")]
pub mod iam;
#[cfg(feature = "lambda")]
pub mod s3;
#[cfg(feature = "lambda")]
pub mod sqs;
#[cfg(feature = "lambda")]
pub mod sts;

#[cfg(feature = "lambda")]
use aws_config::{BehaviorVersion, SdkConfig};

#[cfg(feature = "lambda")]
use crate::config::BrokerConfig;

/// Load the shared SDK config, sourcing base credentials from the named local
/// profile when the config asks for one.
#[cfg(feature = "lambda")]
pub async fn load_shared_config(config: &BrokerConfig) -> SdkConfig {
    let loader = aws_config::defaults(BehaviorVersion::latest());
    match &config.local_profile {
        Some(profile) => loader.profile_name(profile).load().await,
        None => loader.load().await,
    }
}
