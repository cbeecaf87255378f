//! Camera QR scanning through the `html5-qrcode` library loaded by
//! `index.html`. Decoding itself happens in JS.

use std::cell::RefCell;
use std::rc::Rc;

use serde::Serialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;

#[wasm_bindgen]
extern "C" {
    type Html5Qrcode;

    #[wasm_bindgen(constructor, catch)]
    fn new(element_id: &str) -> Result<Html5Qrcode, JsValue>;

    #[wasm_bindgen(method, catch)]
    fn start(
        this: &Html5Qrcode,
        camera: &JsValue,
        config: &JsValue,
        on_success: &js_sys::Function,
        on_error: &js_sys::Function,
    ) -> Result<js_sys::Promise, JsValue>;

    #[wasm_bindgen(method, catch)]
    fn stop(this: &Html5Qrcode) -> Result<js_sys::Promise, JsValue>;

    #[wasm_bindgen(method, getter, js_name = isScanning)]
    fn is_scanning(this: &Html5Qrcode) -> bool;
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CameraSelector {
    facing_mode: &'static str,
}

#[derive(Serialize)]
struct QrBox {
    width: u32,
    height: u32,
}

#[derive(Serialize)]
struct ScanConfig {
    fps: u32,
    qrbox: QrBox,
}

type DecodeHandler = Box<dyn FnOnce(String)>;

/// A running scanner bound to a DOM element.
///
/// Only the first decoded text is delivered; later decodes that race the
/// stop are dropped.
pub struct QrScanner {
    inner: Html5Qrcode,
    _on_success: Closure<dyn FnMut(String)>,
    _on_error: Closure<dyn FnMut(String)>,
}

impl QrScanner {
    /// Starts the rear camera inside element `element_id`.
    pub async fn start(
        element_id: &str,
        on_decode: impl FnOnce(String) + 'static,
    ) -> Result<Self, String> {
        if let Some(element) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(element_id))
        {
            element.set_inner_html("");
        } else {
            return Err(format!("Elemento #{} no encontrado", element_id));
        }

        let inner = Html5Qrcode::new(element_id).map_err(js_error)?;

        let pending: Rc<RefCell<Option<DecodeHandler>>> =
            Rc::new(RefCell::new(Some(Box::new(on_decode))));
        let on_success = Closure::wrap(Box::new(move |decoded: String| {
            let handler = pending.borrow_mut().take();
            if let Some(handler) = handler {
                log::info!("QR detectado: {}", decoded);
                handler(decoded);
            }
        }) as Box<dyn FnMut(String)>);

        // Fires for every frame without a code; too noisy for info level.
        let on_error = Closure::wrap(Box::new(move |_message: String| {}) as Box<dyn FnMut(String)>);

        let camera = serde_wasm_bindgen::to_value(&CameraSelector {
            facing_mode: "environment",
        })
        .map_err(|e| e.to_string())?;
        let config = serde_wasm_bindgen::to_value(&ScanConfig {
            fps: 10,
            qrbox: QrBox {
                width: 250,
                height: 250,
            },
        })
        .map_err(|e| e.to_string())?;

        let promise = inner
            .start(
                &camera,
                &config,
                on_success.as_ref().unchecked_ref(),
                on_error.as_ref().unchecked_ref(),
            )
            .map_err(js_error)?;
        JsFuture::from(promise).await.map_err(js_error)?;

        Ok(Self {
            inner,
            _on_success: on_success,
            _on_error: on_error,
        })
    }

    pub fn is_scanning(&self) -> bool {
        self.inner.is_scanning()
    }

    /// Stops the camera. Best effort: a scanner that already stopped is Ok.
    pub async fn stop(&self) -> Result<(), String> {
        if !self.is_scanning() {
            return Ok(());
        }
        let promise = self.inner.stop().map_err(js_error)?;
        JsFuture::from(promise).await.map_err(js_error)?;
        Ok(())
    }
}

fn js_error(value: JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            value
                .dyn_ref::<js_sys::Error>()
                .map(|e| String::from(e.message()))
        })
        .unwrap_or_else(|| format!("{:?}", value))
}
