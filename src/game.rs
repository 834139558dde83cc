use crate::assets::AssetRegistry;
use crate::engine::input::KeyState;
use crate::engine::{self, Game, Rect, Renderer};
use crate::sprite::Sprite;
use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;

// the one hard-coded asset the page ships with
const SPACESHIP_ID: &str = "spaceshipImage";
const SPACESHIP_SRC: &str = "https://media.indiedb.com/images/games/1/68/67090/spaceship.1.png";
const SPACESHIP_SIZE: f64 = 128.0;

const BACKGROUND_COLOR: &str = "darkblue";

/// TABLE
/// ┌──────────────────────── Frame Flow ─────────────────────────┐
/// │                                                             │
/// │   ┌───────────┐  update   ┌───────────┐   draw              │
/// │   │ GameLoop  ├──────────►│SpaceShoot-├─────────┐           │
/// │   │ (engine)  │ &KeyState │er (here)  │         │           │
/// │   └───────────┘           └───────────┘         ▼           │
/// │                                          1. fill background │
/// │   KeyState: w/a/s/d held flags,          2. blit spaceship  │
/// │   tracked every frame, driving               at (x,y,w,h)   │
/// │   nothing yet                                               │
/// │                                                             │
/// └─────────────────────────────────────────────────────────────┘
pub enum SpaceShooter {
    /// Initialize state while the spaceship image is being fetched
    /// Transition to `Loaded` once initialization is complete
    Loading,

    /// Active game state with the registered scene
    Loaded(Scene),
}

pub struct Scene {
    assets: AssetRegistry,
    spaceship: Sprite,
}

impl SpaceShooter {
    pub fn new() -> Self {
        SpaceShooter::Loading
    }
}

#[async_trait(?Send)]
impl Game for SpaceShooter {
    async fn initialize(&self) -> Result<Box<dyn Game>> {
        match self {
            SpaceShooter::Loading => {
                let assets = AssetRegistry::new()?;
                assets
                    .register("image", SPACESHIP_ID, SPACESHIP_SRC)
                    .with_context(|| {
                        format!("Failed to register spaceship image : {}", SPACESHIP_SRC)
                    })?;

                // the registry inserted the element; wait for the browser to
                // finish fetching it before the first blit
                let image = assets.image(SPACESHIP_ID)?;
                engine::await_image(&image).await.with_context(|| {
                    format!("Failed to load spaceship image from : {}", SPACESHIP_SRC)
                })?;

                let mut spaceship = Sprite::new(SPACESHIP_ID);
                spaceship.set_size(SPACESHIP_SIZE, SPACESHIP_SIZE);
                spaceship.set_position(0.0, 0.0);

                Ok(Box::new(SpaceShooter::Loaded(Scene { assets, spaceship })))
            }
            SpaceShooter::Loaded(_) => Err(anyhow!("Game is already initialized")),
        }
    }

    fn update(&mut self, _keystate: &KeyState) {
        // the held-key flags are tracked every frame but nothing consumes
        // them yet : the ship sits where it spawned
        // TODO: move the spaceship by the held flags once movement lands
    }

    fn draw(&self, renderer: &Renderer) {
        if let SpaceShooter::Loaded(scene) = self {
            // Draw order matters : background -> foreground
            let canvas = Rect::from_size(renderer.size());
            renderer.clear(&canvas);
            renderer.fill(&canvas, BACKGROUND_COLOR);
            scene.spaceship.draw(renderer, &scene.assets);
        }
    }
}
