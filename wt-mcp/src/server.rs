use crate::tools::Tools;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::{debug, warn};
use wt_core::config::ServerConfig;

pub const SERVER_NAME: &str = "writing-tools-mcp";

const PROTOCOL_VERSIONS: [&str; 3] = ["2025-06-18", "2025-03-26", "2024-11-05"];

const PARSE_ERROR: i64 = -32700;
const INVALID_REQUEST: i64 = -32600;
const METHOD_NOT_FOUND: i64 = -32601;
const INVALID_PARAMS: i64 = -32602;

#[derive(Deserialize)]
struct Request {
    #[serde(default)]
    id: Option<Value>,
    #[serde(default)]
    method: Option<String>,
    #[serde(default)]
    params: Value,
}

pub struct Server {
    tools: Tools,
}

impl Server {
    pub fn new(config: ServerConfig) -> Self {
        Self { tools: Tools::new(config) }
    }

    /// Reply for one incoming message; `None` for notifications.
    pub fn handle(&self, msg: Value) -> Option<Value> {
        let req: Request = match serde_json::from_value(msg) {
            Ok(r) => r,
            Err(_) => return Some(error(Value::Null, INVALID_REQUEST, "Invalid request")),
        };
        let Some(id) = req.id else {
            debug!(method = req.method.as_deref().unwrap_or(""), "notification ignored");
            return None;
        };
        let Some(method) = req.method else {
            return Some(error(id, INVALID_REQUEST, "Invalid request"));
        };
        debug!(method = %method, %id, "recv");
        Some(match method.as_str() {
            "initialize" => self.initialize(id, &req.params),
            "ping" => ok(id, json!({})),
            "tools/list" => ok(id, json!({ "tools": self.tools.list() })),
            "tools/call" => self.call(id, &req.params),
            _ => error(id, METHOD_NOT_FOUND, "Method not found"),
        })
    }

    fn initialize(&self, id: Value, params: &Value) -> Value {
        let requested = params.get("protocolVersion").and_then(|v| v.as_str());
        let version = requested
            .filter(|v| PROTOCOL_VERSIONS.contains(v))
            .unwrap_or(PROTOCOL_VERSIONS[0]);
        ok(id, json!({
            "protocolVersion": version,
            "capabilities": { "tools": {} },
            "serverInfo": { "name": SERVER_NAME, "version": env!("CARGO_PKG_VERSION") }
        }))
    }

    fn call(&self, id: Value, params: &Value) -> Value {
        let Some(name) = params.get("name").and_then(|v| v.as_str()) else {
            return error(id, INVALID_PARAMS, "params.name is required");
        };
        let args = params.get("arguments").cloned().unwrap_or(Value::Null);
        match self.tools.call(name, &args) {
            None => error(id, INVALID_PARAMS, &format!("Unknown tool: {}", name)),
            Some(Ok(out)) => ok(id, json!({
                "content": [{ "type": "text", "text": out.text }],
                "structuredContent": out.structured,
            })),
            Some(Err(e)) => {
                warn!(tool = name, error = %e, "tool failed");
                ok(id, json!({
                    "content": [{ "type": "text", "text": e.to_string() }],
                    "isError": true,
                }))
            }
        }
    }
}

/// Reply to a frame whose body could not be parsed.
pub fn parse_error(e: &serde_json::Error) -> Value {
    error(Value::Null, PARSE_ERROR, &format!("Parse error: {}", e))
}

fn ok(id: Value, result: Value) -> Value {
    json!({ "jsonrpc": "2.0", "id": id, "result": result })
}

fn error(id: Value, code: i64, message: &str) -> Value {
    json!({ "jsonrpc": "2.0", "id": id, "error": { "code": code, "message": message } })
}
