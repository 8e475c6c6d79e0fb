use crate::args::{get_range, get_string};
use serde_json::{json, Value};
use wt_core::config::ServerConfig;
use wt_core::{classify_dialogue, count_characters, current_timestamp, range_label, AnalysisError, Result};

const SCHEMA_DRAFT: &str = "https://json-schema.org/draft/2020-12/schema";

const PATH_HELP: &str = "The file must exist and be readable by the server process.\nBoth absolute and relative paths are supported.\nRelative paths are resolved from the server process working directory (or WT_BASE_DIR when set).";

/// One tool result: the human-readable line and the structured fields,
/// both built from the same computed value.
#[derive(Debug, Clone, PartialEq)]
pub struct ToolOutput {
    pub text: String,
    pub structured: Value,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Tool {
    Timestamp,
    CountChars,
    CountCharsRange,
    DialogueRatio,
    DialogueRatioRange,
}

const ALL: [Tool; 5] = [
    Tool::Timestamp,
    Tool::CountChars,
    Tool::CountCharsRange,
    Tool::DialogueRatio,
    Tool::DialogueRatioRange,
];

impl Tool {
    fn suffix(self) -> &'static str {
        match self {
            Tool::Timestamp => "timestamp",
            Tool::CountChars => "count_chars",
            Tool::CountCharsRange => "count_chars_range",
            Tool::DialogueRatio => "dialogue_ratio",
            Tool::DialogueRatioRange => "dialogue_ratio_range",
        }
    }

    fn ranged(self) -> bool {
        matches!(self, Tool::CountCharsRange | Tool::DialogueRatioRange)
    }

    fn description(self, prefix: &str) -> String {
        match self {
            Tool::Timestamp => "Returns the current timestamp in YYYYMMDDHHMM format".to_string(),
            Tool::CountChars => format!(
                "Count UTF-8 characters in an entire text file (excluding line breaks).\nUse this tool when you need the total character count of a file.\n\nInput:\n- path: file path to a UTF-8 text file\n\nExample:\n{{\n  \"path\": \"novel.txt\"\n}}\n\n{PATH_HELP}\n\nFor counting a specific section or scene, use {prefix}count_chars_range."
            ),
            Tool::CountCharsRange => format!(
                "Count UTF-8 characters between start_line and end_line in a text file.\nUse this tool when you need character count of a specific section or scene.\n\nInput:\n- path: file path to a UTF-8 text file\n- start_line: starting line number (1-based)\n- end_line: ending line number (inclusive)\n\nExample:\n{{\n  \"path\": \"novel.txt\",\n  \"start_line\": 120,\n  \"end_line\": 180\n}}\n\n{PATH_HELP}\nLine numbers are 1-based and inclusive; if end_line exceeds file length, existing lines are counted."
            ),
            Tool::DialogueRatio => format!(
                "Analyze an entire text file and return dialogue/narration character counts and ratios.\nDialogue is text enclosed by Japanese quotes such as 「...」 and 『...』. Quote symbols and line breaks are excluded from counting.\n\nInput:\n- path: file path to a UTF-8 text file\n\nExample:\n{{\n  \"path\": \"novel.txt\"\n}}\n\nFor scene-level analysis by line range, use {prefix}dialogue_ratio_range."
            ),
            Tool::DialogueRatioRange => "Analyze dialogue/narration character counts and ratios between start_line and end_line in a text file.\nDialogue is text enclosed by Japanese quotes such as 「...」 and 『...』. Quote symbols and line breaks are excluded from counting.\n\nInput:\n- path: file path to a UTF-8 text file\n- start_line: starting line number (1-based)\n- end_line: ending line number (inclusive)\n\nExample:\n{\n  \"path\": \"novel.txt\",\n  \"start_line\": 120,\n  \"end_line\": 180\n}".to_string(),
        }
    }

    fn input_schema(self) -> Value {
        if self == Tool::Timestamp {
            return json!({
                "$schema": SCHEMA_DRAFT,
                "type": "object",
                "properties": {},
                "additionalProperties": false
            });
        }
        let mut props = json!({
            "path": {
                "type": "string",
                "description": "File path to a text file. The file must exist and be readable by the server process.",
                "minLength": 1
            }
        });
        let mut required = vec!["path"];
        if self.ranged() {
            props["start_line"] = json!({"type": "integer", "description": "Starting line number (1-based).", "minimum": 1});
            props["end_line"] = json!({"type": "integer", "description": "Ending line number (inclusive).", "minimum": 1});
            required.extend(["start_line", "end_line"]);
        }
        json!({
            "$schema": SCHEMA_DRAFT,
            "type": "object",
            "properties": props,
            "required": required,
            "additionalProperties": false
        })
    }

    fn accepts(self, key: &str) -> bool {
        match key {
            "path" => self != Tool::Timestamp,
            "start_line" | "end_line" => self.ranged(),
            _ => false,
        }
    }
}

pub struct Tools {
    config: ServerConfig,
}

impl Tools {
    pub fn new(config: ServerConfig) -> Self {
        Self { config }
    }

    pub fn list(&self) -> Vec<Value> {
        ALL.iter()
            .map(|t| {
                json!({
                    "name": format!("{}{}", self.config.tool_prefix, t.suffix()),
                    "description": t.description(&self.config.tool_prefix),
                    "inputSchema": t.input_schema(),
                })
            })
            .collect()
    }

    fn lookup(&self, name: &str) -> Option<Tool> {
        let suffix = name.strip_prefix(self.config.tool_prefix.as_str())?;
        ALL.into_iter().find(|t| t.suffix() == suffix)
    }

    /// `None` when no tool has that name.
    pub fn call(&self, name: &str, args: &Value) -> Option<Result<ToolOutput>> {
        let tool = self.lookup(name)?;
        Some(self.run(tool, args))
    }

    fn run(&self, tool: Tool, args: &Value) -> Result<ToolOutput> {
        let args = match args {
            Value::Null => args,
            Value::Object(m) => {
                if let Some(k) = m.keys().find(|k| !tool.accepts(k)) {
                    return Err(AnalysisError::validation(format!("unexpected argument: {}", k)));
                }
                args
            }
            _ => return Err(AnalysisError::validation("arguments must be an object")),
        };

        if tool == Tool::Timestamp {
            let ts = current_timestamp();
            return Ok(ToolOutput { structured: json!({ "timestamp": ts }), text: ts });
        }

        let path = get_string(args, "path")?;
        let range = if tool.ranged() { Some(get_range(args)?) } else { None };
        let resolved = self.config.resolve_path(path);

        match tool {
            Tool::CountChars | Tool::CountCharsRange => {
                let counted = count_characters(&resolved, range)?;
                Ok(ToolOutput {
                    text: counted.summary(path, range),
                    structured: counted.structured(path, range),
                })
            }
            _ => {
                let result = classify_dialogue(&resolved, range)?;
                let label = range_label(path, range);
                Ok(ToolOutput {
                    text: result.summary(&label),
                    structured: result.structured(&label, range.is_some()),
                })
            }
        }
    }
}
