// crates/ethica-server/src/cli/tool.rs
// Direct tool execution from CLI

use anyhow::Result;
use ethica::config::Settings;
use ethica::mcp::{EthicaServer, responses, thought_tool};
use serde_json::Value;

/// Split CLI input into the sequence of thoughts to submit
fn thoughts_from_args(args: &str) -> ethica::Result<Vec<Value>> {
    let value: Value = serde_json::from_str(args)?;
    Ok(match value {
        Value::Array(items) => items,
        other => vec![other],
    })
}

/// Submit each thought in order to a fresh engine and print every result.
///
/// Returns whether the last submission was accepted.
pub async fn run_tool(settings: &Settings, args: &str) -> Result<bool> {
    let thoughts = thoughts_from_args(args)?;
    let server = EthicaServer::new(settings);

    let mut last_accepted = true;
    for input in &thoughts {
        let result = server.submit(input).await;
        println!("{}", responses::to_text(&result));
        last_accepted = result.is_accepted();
    }
    Ok(last_accepted)
}

/// Print the tool definition as clients see it in tools/list
pub fn print_schema() -> Result<()> {
    println!("{}", serde_json::to_string_pretty(&thought_tool())?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quiet() -> Settings {
        Settings {
            thought_logging: false,
            ..Settings::default()
        }
    }

    #[test]
    fn test_single_object_is_one_thought() {
        let thoughts = thoughts_from_args(r#"{"thought": "x"}"#).unwrap();
        assert_eq!(thoughts.len(), 1);
    }

    #[test]
    fn test_array_is_many_thoughts() {
        let thoughts = thoughts_from_args(r#"[{"thought": "a"}, {"thought": "b"}]"#).unwrap();
        assert_eq!(thoughts.len(), 2);
    }

    #[test]
    fn test_invalid_json_errors() {
        let err = thoughts_from_args("{not json").unwrap_err();
        assert!(matches!(err, ethica::EthicaError::Json(_)));
    }

    #[tokio::test]
    async fn test_run_tool_reports_last_outcome() {
        let ok = r#"{"thought": "t", "thoughtNumber": 1, "totalThoughts": 1,
                     "ethicalPhase": "deontological", "nextThoughtNeeded": false}"#;
        assert!(run_tool(&quiet(), ok).await.unwrap());

        let bad_last = format!("[{}, {{\"thought\": \"t\"}}]", ok);
        assert!(!run_tool(&quiet(), &bad_last).await.unwrap());
    }
}
