//! WASM API for the bus decoder.
//!
//! Provides JavaScript-callable interfaces for decoding textual captures
//! and reading back annotation rows.

use crate::{BusDecoder, BusEvent, CapturedTrace, DecoderOptions, Payload, PinMap};
use wasm_bindgen::prelude::*;

/// JavaScript-compatible error wrapper
#[wasm_bindgen]
#[derive(Debug, Clone)]
pub struct JsError {
    message: String,
}

#[wasm_bindgen]
impl JsError {
    #[wasm_bindgen(constructor)]
    pub fn new(message: &str) -> JsError {
        JsError {
            message: message.to_string(),
        }
    }

    #[wasm_bindgen(getter)]
    pub fn message(&self) -> String {
        self.message.clone()
    }
}

/// One annotation, flattened for JavaScript
#[wasm_bindgen]
#[derive(Debug, Clone)]
pub struct AnnotationLine {
    start_sample: f64,
    end_sample: f64,
    row: String,
    text: String,
    length: Option<u8>,
}

#[wasm_bindgen]
impl AnnotationLine {
    #[wasm_bindgen(getter)]
    pub fn start_sample(&self) -> f64 {
        self.start_sample
    }

    #[wasm_bindgen(getter)]
    pub fn end_sample(&self) -> f64 {
        self.end_sample
    }

    /// Row identifier: "addrbus", "databus", "insname" or "cycles"
    #[wasm_bindgen(getter)]
    pub fn row(&self) -> String {
        self.row.clone()
    }

    #[wasm_bindgen(getter)]
    pub fn text(&self) -> String {
        self.text.clone()
    }

    /// Instruction length in bytes, only set on the "insname" row
    #[wasm_bindgen(getter)]
    pub fn length(&self) -> Option<u8> {
        self.length
    }
}

impl From<&BusEvent> for AnnotationLine {
    fn from(event: &BusEvent) -> Self {
        let annotation = event.to_annotation();
        let (text, length) = match annotation.payload {
            Payload::Text(text) => (text, None),
            Payload::Instruction { mnemonic, length } => (mnemonic.to_string(), Some(length)),
        };

        AnnotationLine {
            // Exact up to 2^53 samples
            start_sample: annotation.start_sample as f64,
            end_sample: annotation.end_sample as f64,
            row: annotation.category.id().to_string(),
            text,
            length,
        }
    }
}

/// Main decoder interface for JavaScript
#[wasm_bindgen]
pub struct TraceDecoder {
    options: DecoderOptions,
}

#[wasm_bindgen]
impl TraceDecoder {
    /// Create a decoder using the default channel layout
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        TraceDecoder {
            options: DecoderOptions::default(),
        }
    }

    /// Enable or disable the fetch/read/write row
    pub fn set_annotate_cycle_kinds(&mut self, enabled: bool) {
        self.options.annotate_cycle_kinds = enabled;
    }

    /// Number of channel columns a capture must have
    #[wasm_bindgen(getter)]
    pub fn channel_count(&self) -> usize {
        self.options.pins.channel_count()
    }

    /// Restore the default channel layout
    pub fn reset_pins(&mut self) {
        self.options.pins = PinMap::default();
    }

    /// Decode a textual capture and return every annotation
    pub fn decode(&self, capture: &str) -> Result<Vec<JsValue>, JsError> {
        let events = self.run(capture)?;
        Ok(events
            .iter()
            .map(|event| JsValue::from(AnnotationLine::from(event)))
            .collect())
    }

    /// Decode a textual capture, calling `on_annotation` once per annotation
    ///
    /// Returns the number of annotations delivered.
    pub fn decode_with_callback(
        &self,
        capture: &str,
        on_annotation: &js_sys::Function,
    ) -> Result<u32, JsError> {
        let mut trace = self.parse(capture)?;
        let mut delivered = 0u32;
        let mut failure = None;

        let mut sink = |event: BusEvent| {
            if failure.is_some() {
                return;
            }
            let line = JsValue::from(AnnotationLine::from(&event));
            match on_annotation.call1(&JsValue::NULL, &line) {
                Ok(_) => delivered += 1,
                Err(e) => failure = Some(format!("{:?}", e)),
            }
        };

        BusDecoder::new(self.options)
            .decode(&mut trace, &mut sink)
            .map_err(|e| JsError::new(&e.to_string()))?;

        match failure {
            Some(message) => Err(JsError::new(&message)),
            None => Ok(delivered),
        }
    }
}

impl TraceDecoder {
    fn parse(&self, capture: &str) -> Result<CapturedTrace, JsError> {
        CapturedTrace::parse(capture, self.options.pins.channel_count())
            .map_err(|e| JsError::new(&e.to_string()))
    }

    fn run(&self, capture: &str) -> Result<Vec<BusEvent>, JsError> {
        let mut trace = self.parse(capture)?;
        BusDecoder::new(self.options)
            .decode_all(&mut trace)
            .map_err(|e| JsError::new(&e.to_string()))
    }
}

impl Default for TraceDecoder {
    fn default() -> Self {
        Self::new()
    }
}
