//! AWS Systems Manager Parameter Store backend.
//!
//! Uses AWS credentials from the environment (AWS_ACCESS_KEY_ID, etc.)
//! or from the default credential provider chain. Region, profile and
//! endpoint can be overridden from [`Config`], which also makes this
//! backend work against LocalStack:
//!
//! ```toml
//! region = "us-east-1"
//! endpoint_url = "http://localhost:4566"
//! ```

use aws_config::{BehaviorVersion, Region};
use aws_sdk_ssm::error::DisplayErrorContext;
use aws_sdk_ssm::primitives::DateTime as AwsDateTime;
use aws_sdk_ssm::types;
use chrono::{DateTime, Utc};
use tokio::runtime::Runtime;
use tracing::{debug, trace};

use super::{FetchedValue, MetadataPage, ParameterMetadata, ParameterStore};
use crate::core::config::Config;
use crate::core::domain::ParameterType;
use crate::error::{Result, StoreError};

/// Parameter Store accessed through the AWS SDK.
///
/// The SDK is async; this backend owns a single-threaded tokio runtime and
/// blocks on each request, so callers see plain synchronous calls.
pub struct AwsSsm {
    client: aws_sdk_ssm::Client,
    runtime: Runtime,
}

impl std::fmt::Debug for AwsSsm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AwsSsm").finish_non_exhaustive()
    }
}

impl AwsSsm {
    /// Load AWS configuration and build a client.
    ///
    /// No request is made here; credential problems surface on the first call.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Runtime` if the tokio runtime cannot be created.
    pub fn connect(config: &Config) -> Result<Self> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| StoreError::Runtime(e.to_string()))?;

        let sdk_config = runtime.block_on(async {
            let mut loader = aws_config::defaults(BehaviorVersion::latest());
            if let Some(region) = &config.region {
                loader = loader.region(Region::new(region.clone()));
            }
            if let Some(profile) = &config.profile {
                loader = loader.profile_name(profile);
            }
            if let Some(endpoint) = &config.endpoint_url {
                loader = loader.endpoint_url(endpoint);
            }
            loader.load().await
        });

        debug!(
            region = ?sdk_config.region(),
            endpoint = ?config.endpoint_url,
            "parameter store client ready"
        );

        Ok(Self {
            client: aws_sdk_ssm::Client::new(&sdk_config),
            runtime,
        })
    }
}

impl ParameterStore for AwsSsm {
    fn describe_page(&self, max_results: i32, next_token: Option<&str>) -> Result<MetadataPage> {
        trace!(max_results, has_token = next_token.is_some(), "describe parameters");

        let output = self
            .runtime
            .block_on(
                self.client
                    .describe_parameters()
                    .max_results(max_results)
                    .set_next_token(next_token.map(str::to_string))
                    .send(),
            )
            .map_err(request_error)?;

        let entries = output
            .parameters()
            .iter()
            .map(|meta| -> Result<ParameterMetadata> {
                let name = meta.name().ok_or_else(|| {
                    StoreError::InvalidResponse("parameter metadata without a name".into())
                })?;
                Ok(ParameterMetadata {
                    name: name.to_string(),
                    description: meta.description().map(str::to_string),
                    kind: parameter_type(meta.r#type()),
                    last_modified: meta.last_modified_date().and_then(to_utc),
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(MetadataPage {
            entries,
            next_token: output.next_token().map(str::to_string),
        })
    }

    fn get_parameter(&self, name: &str, with_decryption: bool) -> Result<FetchedValue> {
        trace!(name, with_decryption, "get parameter");

        let output = self
            .runtime
            .block_on(
                self.client
                    .get_parameter()
                    .name(name)
                    .with_decryption(with_decryption)
                    .send(),
            )
            .map_err(|e| {
                if e.as_service_error()
                    .is_some_and(|service| service.is_parameter_not_found())
                {
                    StoreError::ParameterNotFound
                } else {
                    request_error(e)
                }
            })?;

        let parameter = output
            .parameter()
            .ok_or_else(|| StoreError::InvalidResponse("no parameter returned".into()))?;
        fetched_value(parameter)
    }

    fn get_parameters(
        &self,
        names: &[String],
        with_decryption: bool,
    ) -> Result<Vec<FetchedValue>> {
        trace!(count = names.len(), with_decryption, "get parameters");

        let output = self
            .runtime
            .block_on(
                self.client
                    .get_parameters()
                    .set_names(Some(names.to_vec()))
                    .with_decryption(with_decryption)
                    .send(),
            )
            .map_err(request_error)?;

        if !output.invalid_parameters().is_empty() {
            debug!(
                missing = ?output.invalid_parameters(),
                "store returned no value for some names"
            );
        }

        output.parameters().iter().map(fetched_value).collect()
    }
}

/// Keep the SDK's full error chain; the message reaches the user as-is.
fn request_error<E: std::error::Error>(err: E) -> StoreError {
    StoreError::Request(DisplayErrorContext(&err).to_string())
}

fn fetched_value(parameter: &types::Parameter) -> Result<FetchedValue> {
    let name = parameter
        .name()
        .ok_or_else(|| StoreError::InvalidResponse("parameter without a name".into()))?;
    let value = parameter.value().ok_or_else(|| {
        StoreError::InvalidResponse(format!("parameter {} has no value", name))
    })?;

    Ok(FetchedValue {
        name: name.to_string(),
        value: value.to_string(),
        kind: parameter_type(parameter.r#type()),
        last_modified: parameter.last_modified_date().and_then(to_utc),
    })
}

fn parameter_type(kind: Option<&types::ParameterType>) -> ParameterType {
    match kind {
        Some(types::ParameterType::SecureString) => ParameterType::SecureString,
        Some(types::ParameterType::StringList) => ParameterType::StringList,
        _ => ParameterType::String,
    }
}

fn to_utc(at: &AwsDateTime) -> Option<DateTime<Utc>> {
    DateTime::from_timestamp(at.secs(), at.subsec_nanos())
}
