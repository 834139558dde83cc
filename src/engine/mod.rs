use crate::browser;
use anyhow::{anyhow, Error, Result};
// ELI5: web assembly is a single threaded environment, so Rc RefCell > Mutex
use async_trait::async_trait;
use futures::channel::oneshot::channel;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::{
    // unchecked_ref (unsafe) cast from Javascript type to Rust type
    // - because we control the closure creation and specify the expected type,
    // in principle this should be generally safe (unsafe) code
    JsCast,
    JsValue,
};
use web_sys::{CanvasRenderingContext2d, HtmlImageElement};

pub mod input;

use input::KeyState;

#[async_trait(?Send)]
pub trait Game {
    async fn initialize(&self) -> Result<Box<dyn Game>>;
    fn update(&mut self, keystate: &KeyState);
    fn draw(&self, renderer: &Renderer);
}

// length of a frame in milliseconds
const FRAME_SIZE: f32 = 1.0 / 60.0 * 1000.0;

pub struct GameLoop {
    last_frame: f64,
    accumulated_delta: f32,
}

type SharedLoopClosure = Rc<RefCell<Option<browser::LoopClosure>>>;

/// GameLoop::start drives the whole frame cadence :
/// - drain key events -> update -> draw
/// - the closure re-requests itself every frame, so the chain runs for the
/// page's lifetime with no cancellation handle
impl GameLoop {
    pub async fn start(game: impl Game + 'static) -> Result<()> {
        let mut keyevent_receiver = input::prepare_input()?;
        let mut game = game.initialize().await?;
        let mut game_loop = GameLoop {
            last_frame: browser::now()?,
            accumulated_delta: 0.0,
        };
        let renderer = Renderer {
            // moving this outside of request_animation_frame closure no longer
            // requires us to use the expect() syntax ... nice
            context: browser::context()?,
        };
        let mut keystate = KeyState::new();
        let f: SharedLoopClosure = Rc::new(RefCell::new(None));
        let g = f.clone();
        *g.borrow_mut() = Some(browser::create_raf_closure(move |perf: f64| {
            input::process_input(&mut keystate, &mut keyevent_receiver);
            game_loop.accumulated_delta += (perf - game_loop.last_frame) as f32;
            while game_loop.accumulated_delta > FRAME_SIZE {
                game.update(&keystate);
                game_loop.accumulated_delta -= FRAME_SIZE;
            }
            game_loop.last_frame = perf;
            game.draw(&renderer);
            let _ = browser::request_animation_frame(f.borrow().as_ref().unwrap());
        }));

        browser::request_animation_frame(
            g.borrow()
                .as_ref()
                .ok_or_else(|| anyhow!("GameLoop: Loop is None"))?,
        )?;

        Ok(())
    }
}

// ==================== Geometry ====================
// f64 across the board because that is what the 2d canvas API speaks

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub position: Point,
    pub size: Size,
}

impl Rect {
    pub fn new(position: Point, size: Size) -> Self {
        Rect { position, size }
    }

    /// a rect anchored at the origin, used for full-canvas passes
    pub fn from_size(size: Size) -> Self {
        Rect {
            position: Point::default(),
            size,
        }
    }

    pub fn x(&self) -> f64 {
        self.position.x
    }

    pub fn y(&self) -> f64 {
        self.position.y
    }

    pub fn width(&self) -> f64 {
        self.size.width
    }

    pub fn height(&self) -> f64 {
        self.size.height
    }
}

pub struct Renderer {
    context: CanvasRenderingContext2d,
}

impl Renderer {
    /// backing canvas dimensions
    /// - zero-sized when the context is detached, which only happens in tests
    pub fn size(&self) -> Size {
        self.context
            .canvas()
            .map(|canvas| Size {
                width: canvas.width() as f64,
                height: canvas.height() as f64,
            })
            .unwrap_or_default()
    }

    pub fn clear(&self, rect: &Rect) {
        self.context
            .clear_rect(rect.x(), rect.y(), rect.width(), rect.height());
    }

    pub fn fill(&self, rect: &Rect, color: &str) {
        self.context.set_fill_style_str(color);
        self.context
            .fill_rect(rect.x(), rect.y(), rect.width(), rect.height());
    }

    /// one blit, destination rect only : drawImage(image, dx, dy, dw, dh)
    pub fn draw_image(&self, image: &HtmlImageElement, destination: &Rect) {
        self.context
            .draw_image_with_html_image_element_and_dw_and_dh(
                image,
                destination.x(),
                destination.y(),
                destination.width(),
                destination.height(),
            )
            .expect("Drawing is throwing exceptions! Unrecoverable error");
    }
}

/// Asynchronously wait for an image element to finish loading
/// # Arguments
/// * `image` - the element whose `src` is already set
/// # Returns
/// * `Ok(())` - on load success, immediately if the image already decoded
/// * `Err` - on load fail
pub async fn await_image(image: &HtmlImageElement) -> Result<()> {
    // the browser flips `complete` once the fetch settles; skip the callback
    // dance when it already has
    if image.complete() {
        return Ok(());
    }

    let (tx, rx) = channel::<Result<(), Error>>();
    let success_tx = Rc::new(RefCell::new(Some(tx)));
    let error_tx = success_tx.clone();

    let success_callback = browser::closure_once(move || {
        if let Some(tx) = success_tx.borrow_mut().take() {
            let _ = tx.send(Ok(()));
        }
    });

    let error_callback = browser::closure_once(move |err: JsValue| {
        if let Some(tx) = error_tx.borrow_mut().take() {
            let _ = tx.send(Err(anyhow!(
                "[engine::await_image] Error loading image: {:#?}",
                err
            )));
        }
    });

    image.set_onload(Some(success_callback.as_ref().unchecked_ref()));
    image.set_onerror(Some(error_callback.as_ref().unchecked_ref()));

    // keep callback alive until image is loaded or errors
    success_callback.forget();
    error_callback.forget();

    // ?? - double unwrap because Result<Result<(), Error>, oneshot::Canceled>
    // - first unwrap yields channel result : Result<(), Error>
    // - second unwrap yields image load result : () or propagating Error
    rx.await??;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn rect_from_size_is_anchored_at_origin() {
        let rect = Rect::from_size(Size {
            width: 640.0,
            height: 480.0,
        });

        assert_relative_eq!(rect.x(), 0.0);
        assert_relative_eq!(rect.y(), 0.0);
        assert_relative_eq!(rect.width(), 640.0);
        assert_relative_eq!(rect.height(), 480.0);
    }

    #[test]
    fn rect_accessors_mirror_position_and_size() {
        let rect = Rect::new(
            Point { x: 12.5, y: -3.0 },
            Size {
                width: 128.0,
                height: 64.0,
            },
        );

        assert_relative_eq!(rect.x(), 12.5);
        assert_relative_eq!(rect.y(), -3.0);
        assert_relative_eq!(rect.width(), 128.0);
        assert_relative_eq!(rect.height(), 64.0);
    }
}
