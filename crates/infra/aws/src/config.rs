use aws_config::SdkConfig;
use aws_config::meta::region::RegionProviderChain;
use aws_sdk_ec2::config::Region;

/// Resolves the SDK configuration from an optional named credentials profile
/// and an optional region override, falling back to the default provider
/// chain for both.
pub(super) async fn get_config(profile: Option<&str>, region: Option<&str>) -> SdkConfig {
    let region_provider = match region {
        Some(region) => {
            RegionProviderChain::first_try(Region::new(region.to_string())).or_default_provider()
        }
        None => RegionProviderChain::default_provider(),
    };

    let mut loader = aws_config::from_env().region(region_provider);
    if let Some(profile) = profile {
        loader = loader.profile_name(profile);
    }

    loader.load().await
}
