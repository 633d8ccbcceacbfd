use cron_rrule::Options;
use wasm_bindgen::prelude::*;

fn options_from(value: JsValue) -> Result<Options, JsError> {
    if value.is_undefined() || value.is_null() {
        return Ok(Options::default());
    }
    serde_wasm_bindgen::from_value(value).map_err(|e| JsError::new(&e.to_string()))
}

/// A translated recurrence rule, usable from JavaScript.
#[wasm_bindgen]
pub struct RecurrenceRule {
    inner: cron_rrule::RecurrenceRule,
}

#[wasm_bindgen]
impl RecurrenceRule {
    /// Translate a cron expression. `options` may be omitted.
    #[wasm_bindgen(js_name = "fromCron")]
    pub fn from_cron(expr: &str, options: JsValue) -> Result<RecurrenceRule, JsError> {
        let options = options_from(options)?;
        let inner =
            cron_rrule::translate_with(expr, &options).map_err(|e| JsError::new(&e.to_string()))?;
        Ok(RecurrenceRule { inner })
    }

    /// The `FREQ` value, or undefined when unset.
    #[wasm_bindgen(getter)]
    pub fn freq(&self) -> Option<String> {
        self.inner.freq.map(|f| f.as_str().to_string())
    }

    /// The rule without its `RRULE:` prefix.
    pub fn value(&self) -> String {
        self.inner.value()
    }

    /// Get the full `RRULE:` string.
    #[wasm_bindgen(js_name = "toString")]
    pub fn display(&self) -> String {
        self.inner.to_string()
    }

    /// Get the JSON response shape used by the HTTP handler.
    #[wasm_bindgen(js_name = "toJSON")]
    pub fn to_json(&self) -> Result<JsValue, JsError> {
        let response = cron_rrule::handler::ConvertResponse {
            rfc5545_rule: self.inner.to_string(),
        };
        serde_wasm_bindgen::to_value(&response).map_err(|e| JsError::new(&e.to_string()))
    }
}

/// Translate a cron expression straight to an `RRULE:` string.
#[wasm_bindgen(js_name = "toRrule")]
pub fn to_rrule(expr: &str, options: JsValue) -> Result<String, JsError> {
    let options = options_from(options)?;
    cron_rrule::translate_with(expr, &options)
        .map(|rule| rule.to_string())
        .map_err(|e| JsError::new(&e.to_string()))
}

/// Validate an expression (returns true if it translates).
#[wasm_bindgen]
pub fn validate(expr: &str, options: JsValue) -> Result<bool, JsError> {
    let options = options_from(options)?;
    Ok(cron_rrule::validate(expr, &options))
}

/// Explain how each field of an expression is read.
#[wasm_bindgen]
pub fn explain(expr: &str, options: JsValue) -> Result<String, JsError> {
    let options = options_from(options)?;
    cron_rrule::explain(expr, &options).map_err(|e| JsError::new(&e.to_string()))
}

/// Handle a JSON request body and return the JSON reply body.
#[wasm_bindgen(js_name = "handleRequest")]
pub fn handle_request(body: &str) -> Result<String, JsError> {
    cron_rrule::handler::handle_request(body, &Options::default())
        .to_json()
        .map_err(|e| JsError::new(&e.to_string()))
}
