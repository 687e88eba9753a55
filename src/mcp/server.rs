//! Sizewise MCP Server Implementation
//!
//! Implements the MCP server with all Sizewise tools.

use std::sync::Arc;

use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{
    CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo,
};
use rmcp::{schemars, tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};
use serde::Deserialize;

use crate::tools::charts;
use crate::tools::convert::{self, ConvertError, ConvertRequest};
use crate::tools::status::StatusTracker;

/// Sizewise MCP Service
#[derive(Clone)]
pub struct SizewiseService {
    status_tracker: Arc<StatusTracker>,
    tool_router: ToolRouter<SizewiseService>,
}

impl SizewiseService {
    pub fn new() -> Self {
        Self {
            status_tracker: Arc::new(StatusTracker::new()),
            tool_router: Self::tool_router(),
        }
    }
}

impl Default for SizewiseService {
    fn default() -> Self {
        Self::new()
    }
}

/// Render a validation error as a tool result rather than a protocol failure
fn error_result(e: &ConvertError) -> Result<CallToolResult, McpError> {
    Ok(CallToolResult::success(vec![Content::text(error_json(e)?)]))
}

fn error_json(e: &ConvertError) -> Result<String, McpError> {
    serde_json::to_string_pretty(&serde_json::json!({ "error": e.to_string() }))
        .map_err(|e| McpError::internal_error(e.to_string(), None))
}

fn json_result<T: serde::Serialize>(value: &T) -> Result<CallToolResult, McpError> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| McpError::internal_error(format!("Serialization error: {}", e), None))?;
    Ok(CallToolResult::success(vec![Content::text(json)]))
}

// ============================================================================
// Parameter Structs
// ============================================================================

/// A measurement given either as a number or as raw form text
#[derive(Debug, Clone, Deserialize, schemars::JsonSchema)]
#[serde(untagged)]
pub enum RawMeasurement {
    Number(f64),
    Text(String),
}

impl RawMeasurement {
    fn into_raw(self) -> String {
        match self {
            RawMeasurement::Number(n) => n.to_string(),
            RawMeasurement::Text(s) => s,
        }
    }
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ConvertSizeParams {
    /// Gender: men or women
    pub gender: String,
    /// Category: tops, pants, dresses (women) or jackets (men)
    pub category: String,
    /// Unit of the measurements: in or cm (default in)
    #[serde(default = "default_unit")]
    pub unit: String,
    /// Chest or bust measurement
    pub chest: Option<RawMeasurement>,
    /// Waist measurement
    pub waist: Option<RawMeasurement>,
    /// Hips measurement
    pub hips: Option<RawMeasurement>,
    /// Brand keys to recommend sizes for (see list_brands)
    #[serde(default)]
    pub brands: Vec<String>,
}

impl ConvertSizeParams {
    fn into_request(self) -> ConvertRequest {
        ConvertRequest {
            gender: self.gender,
            category: self.category,
            unit: self.unit,
            chest: self.chest.map(RawMeasurement::into_raw),
            waist: self.waist.map(RawMeasurement::into_raw),
            hips: self.hips.map(RawMeasurement::into_raw),
            brands: self.brands,
        }
    }
}

fn default_unit() -> String { "in".to_string() }

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct GetSizeChartParams {
    /// Brand key (see list_brands)
    pub brand: String,
    /// Gender: men or women
    pub gender: String,
    /// Category: tops, pants, dresses or jackets
    pub category: String,
    /// Unit to show ranges in: in or cm (default in)
    #[serde(default = "default_unit")]
    pub unit: String,
}

// ============================================================================
// Tools
// ============================================================================

#[tool_router]
impl SizewiseService {
    // --- Status ---

    #[tool(description = "Get the current status of the Sizewise service including build info, chart counts, and process information")]
    fn sizewise_status(&self) -> Result<CallToolResult, McpError> {
        let status = self.status_tracker.get_status();
        json_result(&status)
    }

    #[tool(description = "Get step-by-step instructions for recommending clothing sizes. Call this before the first size conversion or when unsure how to read results.")]
    fn sizing_instructions(&self) -> Result<CallToolResult, McpError> {
        use crate::tools::status::SIZING_INSTRUCTIONS;
        Ok(CallToolResult::success(vec![Content::text(SIZING_INSTRUCTIONS)]))
    }

    // --- Sizing ---

    #[tool(description = "Recommend a clothing size for each selected brand from chest/bust, waist and hips measurements in inches or centimeters")]
    fn convert_size(&self, Parameters(p): Parameters<ConvertSizeParams>) -> Result<CallToolResult, McpError> {
        let request = p.into_request();
        match convert::convert_size(&request) {
            Ok(resp) => json_result(&resp),
            Err(e) => {
                tracing::info!("convert_size rejected: {}", e);
                error_result(&e)
            }
        }
    }

    // --- Charts ---

    #[tool(description = "List supported brands and the gender/category size charts each one has")]
    fn list_brands(&self) -> Result<CallToolResult, McpError> {
        json_result(&charts::list_brands())
    }

    #[tool(description = "Get one brand size chart with ranges in inches or centimeters")]
    fn get_size_chart(&self, Parameters(p): Parameters<GetSizeChartParams>) -> Result<CallToolResult, McpError> {
        match charts::get_size_chart(&p.brand, &p.gender, &p.category, &p.unit) {
            Ok(Some(chart)) => json_result(&chart),
            Ok(None) => json_result(&serde_json::json!({
                "error": "Size chart not found",
                "brand": p.brand,
                "gender": p.gender,
                "category": p.category,
            })),
            Err(e) => error_result(&e),
        }
    }
}

// ============================================================================
// Server Handler
// ============================================================================

#[tool_handler]
impl ServerHandler for SizewiseService {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::LATEST,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "sizewise".into(),
                version: crate::build_info::VERSION.into(),
                title: Some("Sizewise".into()),
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "Sizewise - clothing size recommendations from body measurements. \
                 IMPORTANT: Call sizing_instructions before the first conversion. \
                 Sizing: convert_size (gender, category, unit, chest/waist/hips, brands). \
                 Charts: list_brands, get_size_chart. \
                 Status: sizewise_status."
                    .into(),
            ),
        }
    }
}
