//! JavaScript execution operations for CDP page session.

use serde_json::{json, Value};

use crate::cdp::error::CdpError;
use crate::cdp::protocol::{ExceptionDetails, PropertyDescriptor, RemoteObject};

use super::core::PageSession;

impl PageSession {
    /// Evaluate a JavaScript expression and return its JSON value.
    pub async fn evaluate(&self, expression: &str) -> Result<Value, CdpError> {
        let result = self
            .call(
                "Runtime.evaluate",
                Some(json!({
                    "expression": expression,
                    "returnByValue": true,
                    "awaitPromise": true,
                })),
            )
            .await?;

        check_exception(&result)?;
        Ok(result["result"]["value"].clone())
    }

    /// Evaluate JavaScript and return a remote object handle in `group`.
    ///
    /// Handles derived from it, such as property values, join the same group;
    /// release them all with [`release_object_group`](Self::release_object_group).
    pub async fn evaluate_handle(
        &self,
        expression: &str,
        group: &str,
    ) -> Result<RemoteObject, CdpError> {
        let result = self
            .call(
                "Runtime.evaluate",
                Some(json!({
                    "expression": expression,
                    "returnByValue": false,
                    "objectGroup": group,
                })),
            )
            .await?;

        check_exception(&result)?;
        let remote_obj: RemoteObject = serde_json::from_value(result["result"].clone())?;
        Ok(remote_obj)
    }

    /// Own properties of a remote object.
    pub async fn get_properties(&self, object_id: &str) -> Result<Vec<PropertyDescriptor>, CdpError> {
        let result = self
            .call(
                "Runtime.getProperties",
                Some(json!({
                    "objectId": object_id,
                    "ownProperties": true,
                })),
            )
            .await?;

        check_exception(&result)?;
        let props: Vec<PropertyDescriptor> = serde_json::from_value(result["result"].clone())?;
        Ok(props)
    }

    /// Release every handle in `group`.
    pub async fn release_object_group(&self, group: &str) -> Result<(), CdpError> {
        self.call("Runtime.releaseObjectGroup", Some(json!({"objectGroup": group})))
            .await?;
        Ok(())
    }
}

fn check_exception(result: &Value) -> Result<(), CdpError> {
    if let Some(exception) = result.get("exceptionDetails") {
        let message = serde_json::from_value::<ExceptionDetails>(exception.clone())
            .map(|d| d.message())
            .unwrap_or_else(|_| {
                exception["text"]
                    .as_str()
                    .unwrap_or("Unknown error")
                    .to_string()
            });
        return Err(CdpError::JavaScript(message));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_exception_passes_plain_result() {
        let result = json!({"result": {"type": "number", "value": 1}});
        assert!(check_exception(&result).is_ok());
    }

    #[test]
    fn test_check_exception_reports_description() {
        let result = json!({
            "result": {"type": "object"},
            "exceptionDetails": {
                "exceptionId": 3,
                "text": "Uncaught",
                "lineNumber": 1,
                "columnNumber": 4,
                "exception": {"type": "object", "description": "TypeError: x is undefined"}
            }
        });
        match check_exception(&result) {
            Err(CdpError::JavaScript(msg)) => assert_eq!(msg, "TypeError: x is undefined"),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_check_exception_falls_back_to_text() {
        let result = json!({"exceptionDetails": {"text": "Uncaught SyntaxError"}});
        match check_exception(&result) {
            Err(CdpError::JavaScript(msg)) => assert_eq!(msg, "Uncaught SyntaxError"),
            other => panic!("unexpected {:?}", other),
        }
    }
}
