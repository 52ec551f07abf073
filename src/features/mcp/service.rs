use std::collections::HashMap;
use std::sync::Arc;

use jsonschema::JSONSchema;
use serde_json::{Value, json};

use crate::core::error::AppError;
use crate::features::dip::{
    DipClient, GetPersonArgs, PartyDistributionArgs, handle_get_party_distribution,
    handle_get_person,
};
use crate::features::mcp::dto::{
    CallToolParams, InitializeParams, JsonRpcError, JsonRpcErrorResponse, JsonRpcRequest,
    JsonRpcSuccess, ListToolsParams, ToolCallResult, ToolContent, ToolDefinition, ToolListResult,
};
use crate::features::mcp::schemas::build_tool_schemas;
use crate::features::utilities::{
    BinaryMathArgs, DateTimeService, MathService, handle_current_datetime, handle_math_add,
    handle_math_divide, handle_math_multiply, handle_math_subtract,
};

const JSON_RPC_VERSION: &str = "2.0";

pub struct McpService {
    dip_client: Arc<DipClient>,
    math_service: Arc<MathService>,
    datetime_service: Arc<DateTimeService>,
    tool_definitions: Vec<ToolDefinition>,
    validators: HashMap<String, JSONSchema>,
}

impl McpService {
    pub fn new(dip_client: Arc<DipClient>) -> Result<Self, AppError> {
        let (tool_definitions, input_schemas) = build_tool_schemas();

        let mut validators = HashMap::new();
        for (name, schema) in &input_schemas {
            let compiled = JSONSchema::compile(schema).map_err(|err| {
                AppError::internal(format!("invalid input schema for {name}: {err}"))
            })?;
            validators.insert(name.clone(), compiled);
        }

        Ok(Self {
            dip_client,
            math_service: Arc::new(MathService::new()),
            datetime_service: Arc::new(DateTimeService::new()),
            tool_definitions,
            validators,
        })
    }

    pub async fn handle_jsonrpc(
        &self,
        request: JsonRpcRequest,
        header_protocol_version: Option<String>,
    ) -> Result<Option<JsonRpcSuccess>, JsonRpcErrorResponse> {
        let request_id = request.id.clone().unwrap_or(Value::Null);

        if request.jsonrpc != JSON_RPC_VERSION {
            return Err(self.invalid_request_response(
                request_id,
                -32600,
                format!("unsupported jsonrpc version: {}", request.jsonrpc),
            ));
        }

        match request.method.as_str() {
            "initialize" => self
                .handle_initialize(request_id, request.params, header_protocol_version)
                .map(Some),
            "notifications/initialized" => Ok(None),
            "list_tools" | "tools/list" => {
                self.handle_list_tools(request_id, request.params).map(Some)
            }
            "call_tool" | "tools/call" => self
                .handle_call_tool(request_id, request.params)
                .await
                .map(Some),
            other => Err(self.invalid_request_response(
                request_id,
                -32601,
                format!("unknown method: {other}"),
            )),
        }
    }

    fn handle_initialize(
        &self,
        request_id: Value,
        params: Option<Value>,
        header_protocol_version: Option<String>,
    ) -> Result<JsonRpcSuccess, JsonRpcErrorResponse> {
        let params = match params {
            Some(value) => serde_json::from_value::<InitializeParams>(value).map_err(|err| {
                self.invalid_request_response(
                    request_id.clone(),
                    -32602,
                    format!("invalid initialize params: {err}"),
                )
            })?,
            None => {
                return Err(self.invalid_request_response(
                    request_id,
                    -32602,
                    "missing initialize params".to_string(),
                ));
            }
        };

        tracing::info!(
            client = %params.client_info.name,
            version = %params.client_info.version,
            "client initialized"
        );
        tracing::debug!(
            protocol = %params.protocol_version,
            header_protocol = ?header_protocol_version,
            capabilities = ?params.capabilities,
            "initialize payload"
        );

        let result = json!({
            "protocolVersion": params.protocol_version,
            "serverInfo": {
                "name": env!("CARGO_PKG_NAME"),
                "version": env!("CARGO_PKG_VERSION"),
            },
            "capabilities": {
                "tools": {
                    "listChanged": false
                }
            }
        });

        Ok(JsonRpcSuccess {
            jsonrpc: JSON_RPC_VERSION.to_string(),
            id: request_id,
            result,
        })
    }

    fn handle_list_tools(
        &self,
        request_id: Value,
        params: Option<Value>,
    ) -> Result<JsonRpcSuccess, JsonRpcErrorResponse> {
        if let Some(params) = params {
            serde_json::from_value::<ListToolsParams>(params).map_err(|err| {
                self.invalid_request_response(
                    request_id.clone(),
                    -32602,
                    format!("invalid list_tools params: {err}"),
                )
            })?;
        }

        let result = serde_json::to_value(ToolListResult {
            tools: self.tool_definitions.clone(),
            next_cursor: None,
        })
        .map_err(|err| {
            self.internal_error_response(
                request_id.clone(),
                format!("failed to serialize tools: {err}"),
            )
        })?;

        Ok(JsonRpcSuccess {
            jsonrpc: JSON_RPC_VERSION.to_string(),
            id: request_id,
            result,
        })
    }

    async fn handle_call_tool(
        &self,
        request_id: Value,
        params: Option<Value>,
    ) -> Result<JsonRpcSuccess, JsonRpcErrorResponse> {
        let params_value = params.ok_or_else(|| {
            self.invalid_request_response(
                request_id.clone(),
                -32602,
                "missing call_tool params".to_string(),
            )
        })?;

        let params = serde_json::from_value::<CallToolParams>(params_value).map_err(|err| {
            self.invalid_request_response(
                request_id.clone(),
                -32602,
                format!("invalid call_tool params: {err}"),
            )
        })?;

        self.validate_arguments(&request_id, &params.name, &params.arguments)?;

        let result_json = match params.name.as_str() {
            "dip.get_person" => {
                let args =
                    self.deserialize_arguments::<GetPersonArgs>(&request_id, params.arguments)?;
                handle_get_person(&self.dip_client, args)
                    .await
                    .map_err(|err| self.tool_failure_response(request_id.clone(), err))?
            }
            "dip.get_party_distribution" => {
                let args = self.deserialize_arguments::<PartyDistributionArgs>(
                    &request_id,
                    params.arguments,
                )?;
                handle_get_party_distribution(&self.dip_client, args)
                    .await
                    .map_err(|err| self.tool_failure_response(request_id.clone(), err))?
            }
            "math.add" => {
                let args =
                    self.deserialize_arguments::<BinaryMathArgs>(&request_id, params.arguments)?;
                let result = handle_math_add(&self.math_service, args)
                    .map_err(|err| self.tool_failure_response(request_id.clone(), err))?;
                self.serialize_result(&request_id, result)?
            }
            "math.subtract" => {
                let args =
                    self.deserialize_arguments::<BinaryMathArgs>(&request_id, params.arguments)?;
                let result = handle_math_subtract(&self.math_service, args)
                    .map_err(|err| self.tool_failure_response(request_id.clone(), err))?;
                self.serialize_result(&request_id, result)?
            }
            "math.multiply" => {
                let args =
                    self.deserialize_arguments::<BinaryMathArgs>(&request_id, params.arguments)?;
                let result = handle_math_multiply(&self.math_service, args)
                    .map_err(|err| self.tool_failure_response(request_id.clone(), err))?;
                self.serialize_result(&request_id, result)?
            }
            "math.divide" => {
                let args =
                    self.deserialize_arguments::<BinaryMathArgs>(&request_id, params.arguments)?;
                let result = handle_math_divide(&self.math_service, args)
                    .map_err(|err| self.tool_failure_response(request_id.clone(), err))?;
                self.serialize_result(&request_id, result)?
            }
            "utilities.current_datetime" => {
                self.serialize_result(&request_id, handle_current_datetime(&self.datetime_service))?
            }
            other => {
                return Err(self.invalid_request_response(
                    request_id,
                    -32601,
                    format!("unknown tool: {other}"),
                ));
            }
        };

        let text = serde_json::to_string_pretty(&result_json).map_err(|err| {
            self.internal_error_response(
                request_id.clone(),
                format!("failed to render tool result: {err}"),
            )
        })?;

        let result = serde_json::to_value(ToolCallResult {
            content: vec![ToolContent {
                kind: "text".to_string(),
                text,
            }],
            structured_content: Some(result_json),
            is_error: None,
        })
        .map_err(|err| {
            self.internal_error_response(
                request_id.clone(),
                format!("failed to serialize tool result: {err}"),
            )
        })?;

        Ok(JsonRpcSuccess {
            jsonrpc: JSON_RPC_VERSION.to_string(),
            id: request_id,
            result,
        })
    }

    fn validate_arguments(
        &self,
        id: &Value,
        tool_name: &str,
        arguments: &Value,
    ) -> Result<(), JsonRpcErrorResponse> {
        let Some(validator) = self.validators.get(tool_name) else {
            return Err(self.invalid_request_response(
                id.clone(),
                -32601,
                format!("unknown tool: {tool_name}"),
            ));
        };

        if let Err(errors) = validator.validate(arguments) {
            let details = errors
                .map(|error| error.to_string())
                .collect::<Vec<_>>()
                .join("; ");
            return Err(self.invalid_request_response(
                id.clone(),
                -32602,
                format!("invalid arguments for {tool_name}: {details}"),
            ));
        }

        Ok(())
    }

    fn deserialize_arguments<T>(&self, id: &Value, value: Value) -> Result<T, JsonRpcErrorResponse>
    where
        T: serde::de::DeserializeOwned,
    {
        serde_json::from_value::<T>(value).map_err(|err| {
            self.invalid_request_response(
                id.clone(),
                -32602,
                format!("invalid tool arguments: {err}"),
            )
        })
    }

    fn serialize_result<T>(&self, id: &Value, payload: T) -> Result<Value, JsonRpcErrorResponse>
    where
        T: serde::Serialize,
    {
        serde_json::to_value(payload).map_err(|err| {
            self.internal_error_response(
                id.clone(),
                format!("failed to serialize tool response: {err}"),
            )
        })
    }

    fn tool_failure_response(&self, id: Value, error: AppError) -> JsonRpcErrorResponse {
        let (code, message, data) = match error {
            AppError::BadRequest { message } => (-32602, message, None),
            AppError::Upstream { message, data } => (-32002, message, data),
            AppError::Configuration { message } | AppError::Internal { message } => {
                (-32000, message, None)
            }
        };

        JsonRpcErrorResponse {
            jsonrpc: JSON_RPC_VERSION.to_string(),
            id,
            error: JsonRpcError {
                code,
                message,
                data,
            },
        }
    }

    fn invalid_request_response(
        &self,
        id: Value,
        code: i32,
        message: String,
    ) -> JsonRpcErrorResponse {
        JsonRpcErrorResponse {
            jsonrpc: JSON_RPC_VERSION.to_string(),
            id,
            error: JsonRpcError {
                code,
                message,
                data: None,
            },
        }
    }

    fn internal_error_response(&self, id: Value, message: String) -> JsonRpcErrorResponse {
        JsonRpcErrorResponse {
            jsonrpc: JSON_RPC_VERSION.to_string(),
            id,
            error: JsonRpcError {
                code: -32000,
                message,
                data: None,
            },
        }
    }
}
