// WebAssembly bindings for the box value type
use crate::pudelko::{Pudelko, Unit};
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct PudelkoWasm {
    inner: Pudelko,
}

fn to_js_error(context: &str, error: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&format!("{}: {}", context, error))
}

#[wasm_bindgen]
impl PudelkoWasm {
    /// Construct a box; `unit` is "m", "cm" or "mm" (default "m")
    #[wasm_bindgen(constructor)]
    pub fn new(a: f64, b: f64, c: f64, unit: Option<String>) -> Result<PudelkoWasm, JsValue> {
        let unit = match unit {
            Some(symbol) => Unit::from_symbol(&symbol)
                .map_err(|e| to_js_error("Failed to read unit", e))?,
            None => Unit::Meter,
        };

        let inner =
            Pudelko::new(a, b, c, unit).map_err(|e| to_js_error("Failed to build box", e))?;
        Ok(Self { inner })
    }

    /// Parse the text form, e.g. "1.000 m × 2.000 m × 3.000 m"
    #[wasm_bindgen]
    pub fn parse(input: &str) -> Result<PudelkoWasm, JsValue> {
        let inner = Pudelko::parse(input).map_err(|e| to_js_error("Failed to parse box", e))?;
        Ok(Self { inner })
    }

    #[wasm_bindgen(js_name = fromMillimeterTriple)]
    pub fn from_millimeter_triple(a: i32, b: i32, c: i32) -> Result<PudelkoWasm, JsValue> {
        let inner = Pudelko::from_millimeter_triple(a, b, c)
            .map_err(|e| to_js_error("Failed to build box", e))?;
        Ok(Self { inner })
    }

    /// Format with "m", "cm", "mm" or "" (meters)
    #[wasm_bindgen]
    pub fn format(&self, spec: &str) -> Result<String, JsValue> {
        self.inner
            .format(spec)
            .map_err(|e| to_js_error("Failed to format box", e))
    }

    /// Side-by-side sum (a+a, b+b, c+c)
    #[wasm_bindgen]
    pub fn add(&self, other: &PudelkoWasm) -> Result<PudelkoWasm, JsValue> {
        let inner = self
            .inner
            .checked_add(&other.inner)
            .map_err(|e| to_js_error("Failed to add boxes", e))?;
        Ok(Self { inner })
    }

    #[wasm_bindgen]
    pub fn equals(&self, other: &PudelkoWasm) -> bool {
        self.inner == other.inner
    }

    #[wasm_bindgen]
    pub fn volume(&self) -> f64 {
        self.inner.volume()
    }

    #[wasm_bindgen(js_name = surfaceArea)]
    pub fn surface_area(&self) -> f64 {
        self.inner.surface_area()
    }

    #[wasm_bindgen(js_name = toArray)]
    pub fn to_array(&self) -> js_sys::Float64Array {
        js_sys::Float64Array::from(&self.inner.to_array()[..])
    }

    /// JSON form: {"a":..,"b":..,"c":..,"unit":..}
    #[wasm_bindgen(js_name = toJson)]
    pub fn to_json(&self) -> Result<String, JsValue> {
        serde_json::to_string(&self.inner).map_err(|e| to_js_error("Failed to serialize box", e))
    }

    #[wasm_bindgen(js_name = toString)]
    pub fn to_string_js(&self) -> String {
        self.inner.to_string()
    }
}
