use anyhow::{anyhow, Result};
use std::future::Future;
use wasm_bindgen::closure::{
    Closure,
    WasmClosure,
    WasmClosureFnOnce,
};
use wasm_bindgen::JsCast;

#[rustfmt::skip]
use web_sys::{
    Document,
    Window,
    CanvasRenderingContext2d,
    Element,
    HtmlCanvasElement,
};

// ==================== Macros ====================
// console logging for the wasm target
// - log! -> console.log, error! -> console.error
// - exported crate-wide through #[macro_use] on this module
macro_rules! log {
    ( $( $t:tt )* ) => {
        web_sys::console::log_1(&format!( $( $t )* ).into())
    };
}

macro_rules! error {
    ( $( $t:tt )* ) => {
        web_sys::console::error_1(&format!( $( $t )* ).into())
    };
}

// ==================== Constants ====================
// Constants related to HTML elements
pub mod html {
    pub const CANVAS_ID: &str = "canvas";
    pub const CONTEXT_2D: &str = "2d";
    pub const ASSETS_ID: &str = "assets";
}

pub fn window() -> Result<Window> {
    web_sys::window().ok_or_else(|| anyhow!("Window not found"))
}

pub fn document() -> Result<Document> {
    window()?
        .document()
        .ok_or_else(|| anyhow!("No Document Found"))
}

pub fn canvas() -> Result<HtmlCanvasElement> {
    element_by_id(html::CANVAS_ID)?
        .dyn_into::<HtmlCanvasElement>()
        .map_err(|element| anyhow!("Error converting {:#?} to HtmlCanvasElement", element))
}

pub fn context() -> Result<CanvasRenderingContext2d> {
    canvas()?
        .get_context(html::CONTEXT_2D)
        // Because return is Result<Option<Object>,JsValue>
        // - we map error(JsValue) to Error (anyhow)
        // - take the inner Option and map the None case to a value
        .map_err(|js_value| anyhow!("Error getting context : {:#?}", js_value))?
        .ok_or_else(|| anyhow!("No 2d context found"))?
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(|element| {
            anyhow!(
                "Error converting {:#?} to CanvasRenderingContext2d",
                element
            )
        })
}

pub fn element_by_id(id: &str) -> Result<Element> {
    document()?
        .get_element_by_id(id)
        .ok_or_else(|| anyhow!("No Element found with ID : '{:#?}'", id))
}

pub fn create_element(tag: &str) -> Result<Element> {
    document()?
        .create_element(tag)
        .map_err(|err| anyhow!("Error creating <{}> element : {:#?}", tag, err))
}

/// Physical screen dimensions in pixels
/// - the canvas is stretched to these at startup
pub fn screen_size() -> Result<(u32, u32)> {
    let screen = window()?
        .screen()
        .map_err(|err| anyhow!("Error getting screen : {:#?}", err))?;
    let width = screen
        .width()
        .map_err(|err| anyhow!("Error reading screen width : {:#?}", err))?;
    let height = screen
        .height()
        .map_err(|err| anyhow!("Error reading screen height : {:#?}", err))?;
    Ok((width as u32, height as u32))
}

// ==================== Animation Frames ====================
// requestAnimationFrame wants a JS function; LoopClosure is the Rust side of
// that handle, kept alive by the caller for as long as the loop runs
pub type LoopClosure = Closure<dyn FnMut(f64)>;

pub fn now() -> Result<f64> {
    Ok(window()?
        .performance()
        .ok_or_else(|| anyhow!("Performance object not found"))?
        .now())
}

pub fn request_animation_frame(callback: &LoopClosure) -> Result<i32> {
    window()?
        .request_animation_frame(callback.as_ref().unchecked_ref())
        .map_err(|err| anyhow!("Cannot request animation frame {:#?}", err))
}

pub fn create_raf_closure(f: impl FnMut(f64) + 'static) -> LoopClosure {
    closure_wrap(Box::new(f))
}

pub fn closure_wrap<T: WasmClosure + ?Sized>(data: Box<T>) -> Closure<T> {
    Closure::wrap(data)
}

pub fn closure_once<T, F, A, R>(f: F) ->
    Closure<T>
where
    T: ?Sized + WasmClosure,
    F: 'static + WasmClosureFnOnce<T, A, R>,
{
    Closure::once(f)
}

pub fn spawn_local<F>(future: F)
where
    F: Future<Output = ()> + 'static,
{
    wasm_bindgen_futures::spawn_local(future);
}
