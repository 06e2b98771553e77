use crate::meeting::OptimizeRequest;
use crate::optimize::optimize;
use wasm_bindgen::prelude::*;

/// Browser entry point. Takes and returns the same JSON shapes as the HTTP
/// endpoint; a rejected request becomes a thrown string.
#[wasm_bindgen(js_name = optimizeSlots)]
pub fn optimize_slots(request: JsValue) -> Result<JsValue, JsValue> {
    let request: OptimizeRequest = serde_wasm_bindgen::from_value(request)?;

    let response = optimize(&request).map_err(|e| JsValue::from_str(&e.to_string()))?;

    Ok(serde_wasm_bindgen::to_value(&response)?)
}
