use crate::config::Config;
use crate::models::{
    error::AppError,
    simulation::{Region, SimulationResult},
};
use serde::{Deserialize, Serialize, de::DeserializeOwned};

// GRAPHQL DOCUMENTS
const REGIONS_QUERY: &str = "\
query Regions {
  regions {
    code
    name
    baseTariffPerKwh
  }
}";

const SIMULATE_QUERY: &str = "\
query SimulateSavings($regionCode: String!, $consumptionKwh: Float!) {
  simulateSavings(regionCode: $regionCode, consumptionKwh: $consumptionKwh) {
    region {
      code
      name
      baseTariffPerKwh
    }
    consumptionKwh
    currentMonthlyCost
    currentAnnualCost
    totalSuppliers
    availableSolutions {
      category
      bestSaving {
        supplier {
          id
          name
        }
        monthlySaving
        annualSaving
        savingPercent
      }
      suppliers {
        id
        name
        logoUrl
        offeredModes
        costPerKwhModeA
        costPerKwhModeB
        totalCustomers
        averageRating
      }
    }
  }
}";

// API CONFIGURATION
/// Configuration for the simulation backend client.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    endpoint: String,
}

impl ApiConfig {
    /// Creates a builder for constructing an `ApiConfig`.
    pub fn builder() -> ApiConfigBuilder {
        ApiConfigBuilder::default()
    }

    /// Returns the GraphQL endpoint configured for this client.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfigBuilder::default().build()
    }
}

// API CONFIGURATION BUILDER
/// Builder for constructing an `ApiConfig` with custom settings.
#[derive(Debug, Default)]
pub struct ApiConfigBuilder {
    endpoint: Option<String>,
}

impl ApiConfigBuilder {
    /// Sets a custom endpoint (primarily for testing).
    pub fn endpoint(mut self, url: impl Into<String>) -> Self {
        self.endpoint = Some(url.into());
        self
    }

    /// Builds the `ApiConfig`.
    pub fn build(self) -> ApiConfig {
        ApiConfig {
            endpoint: self
                .endpoint
                .unwrap_or_else(|| Config::GRAPHQL_ENDPOINT.to_string()),
        }
    }
}

// WIRE TYPES
#[derive(Serialize, Debug)]
struct GraphqlRequest<'a, V: Serialize> {
    query: &'a str,
    variables: V,
}

#[derive(Deserialize, Debug)]
struct GraphqlResponse<T> {
    data: Option<T>,
    #[serde(default)]
    errors: Vec<GraphqlError>,
}

#[derive(Deserialize, Debug)]
struct GraphqlError {
    message: String,
}

#[derive(Serialize, Debug)]
struct NoVariables {}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
struct SimulateVariables<'a> {
    region_code: &'a str,
    consumption_kwh: f64,
}

#[derive(Deserialize, Debug)]
struct RegionsData {
    regions: Vec<Region>,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct SimulateData {
    simulate_savings: Option<SimulationResult>,
}

/// Surfaces GraphQL-level errors carried in an HTTP 200 envelope.
fn unwrap_envelope<T>(envelope: GraphqlResponse<T>) -> Result<T, AppError> {
    if let Some(error) = envelope.errors.first() {
        return Err(AppError::QueryError(error.message.clone()));
    }
    envelope
        .data
        .ok_or_else(|| AppError::ApiError("Response contained no data".to_string()))
}

// SIMULATOR CLIENT
/// HTTP client for the energy savings GraphQL API.
pub struct SimulatorClient {
    http: reqwest::Client,
    config: ApiConfig,
}

impl SimulatorClient {
    /// Creates a new client with default configuration.
    pub fn new() -> Result<Self, AppError> {
        Self::with_config(ApiConfig::default())
    }

    /// Creates a new client with the specified configuration.
    pub fn with_config(config: ApiConfig) -> Result<Self, AppError> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| AppError::ConfigError(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self { http, config })
    }

    /// Returns a reference to the client's configuration.
    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Fetches the list of regions with their base tariffs.
    pub async fn fetch_regions(&self) -> Result<Vec<Region>, AppError> {
        let data: RegionsData = self.execute(REGIONS_QUERY, NoVariables {}).await?;
        Ok(data.regions)
    }

    /// Runs a savings simulation for one region and monthly consumption.
    ///
    /// The server answers `null` for an unknown region or a consumption it
    /// rejects; that is mapped to an error rather than an empty result.
    pub async fn simulate_savings(
        &self,
        region_code: &str,
        consumption_kwh: f64,
    ) -> Result<SimulationResult, AppError> {
        let variables = SimulateVariables {
            region_code,
            consumption_kwh,
        };

        let data: SimulateData = self.execute(SIMULATE_QUERY, variables).await?;
        data.simulate_savings.ok_or_else(|| {
            AppError::DataError(format!("No simulation available for region {region_code}"))
        })
    }

    /// Posts one GraphQL document and unwraps the response envelope.
    async fn execute<V, T>(&self, query: &'static str, variables: V) -> Result<T, AppError>
    where
        V: Serialize,
        T: DeserializeOwned,
    {
        let body = GraphqlRequest { query, variables };

        let response = self
            .http
            .post(self.config.endpoint())
            .json(&body)
            .send()
            .await
            .map_err(|e| self.classify_error(&e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(self.error_for_status(status, &body));
        }

        let envelope: GraphqlResponse<T> = response
            .json()
            .await
            .map_err(|e| AppError::ApiError(format!("Failed to parse response: {e}")))?;

        unwrap_envelope(envelope)
    }

    /// Converts a reqwest error into an appropriate AppError.
    fn classify_error(&self, error: &reqwest::Error) -> AppError {
        if error.is_timeout() {
            AppError::ApiError(format!("Request timeout: {error}"))
        } else if error.is_request() {
            AppError::ApiError(format!("Request error: {error}"))
        } else {
            AppError::ApiError(format!("Network error: {error}"))
        }
    }

    /// Creates an error based on HTTP status code.
    fn error_for_status(&self, status: reqwest::StatusCode, body: &str) -> AppError {
        match status.as_u16() {
            429 => AppError::RateLimited,
            401 | 403 => AppError::AuthError(format!("Authentication failed: {status}")),
            404 => AppError::NotFound(format!("Resource not found: {body}")),
            400..=499 => AppError::ApiError(format!("Client error {status}: {body}")),
            500..=599 => AppError::ApiError(format!("Server error {status}: {body}")),
            _ => AppError::ApiError(format!("Unexpected status {status}: {body}")),
        }
    }
}

// CONVENIENCE FUNCTIONS
/// Fetches the region list using default configuration.
pub async fn fetch_regions() -> Result<Vec<Region>, AppError> {
    SimulatorClient::new()?.fetch_regions().await
}

/// Runs a simulation using default configuration.
pub async fn simulate_savings(
    region_code: &str,
    consumption_kwh: f64,
) -> Result<SimulationResult, AppError> {
    SimulatorClient::new()?
        .simulate_savings(region_code, consumption_kwh)
        .await
}
