use crate::browser;
use anyhow::{anyhow, Result};
use std::str::FromStr;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlAudioElement, HtmlImageElement, HtmlSourceElement};

// ==================== Asset Kinds ====================

/// The media kinds the registry knows how to insert
/// - anything else is rejected at the string boundary in register()
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AssetKind {
    Image,
    Sound,
}

impl FromStr for AssetKind {
    type Err = anyhow::Error;

    fn from_str(tag: &str) -> Result<Self> {
        match tag {
            "image" => Ok(AssetKind::Image),
            "sound" => Ok(AssetKind::Sound),
            _ => Err(anyhow!("Asset type undefined : '{}'", tag)),
        }
    }
}

// ==================== Registry ====================

/// Named media elements parked under the `assets` container
/// - registered once at startup, looked back up by id on the draw path
/// - no caching, no dedup : registering the same id twice inserts twice
pub struct AssetRegistry {
    container: Element,
}

impl AssetRegistry {
    pub fn new() -> Result<Self> {
        Ok(AssetRegistry {
            container: browser::element_by_id(browser::html::ASSETS_ID)?,
        })
    }

    /// Insert a media element for `id` pointing at `src`
    /// - an unrecognized kind tag logs one console error and inserts
    /// nothing; only DOM failures bubble up as Err
    pub fn register(&self, kind: &str, id: &str, src: &str) -> Result<()> {
        let kind = match kind.parse::<AssetKind>() {
            Ok(kind) => kind,
            Err(err) => {
                error!("Error: {:#?}", err);
                return Ok(());
            }
        };

        match kind {
            AssetKind::Image => self.insert_image(id, src),
            AssetKind::Sound => self.insert_sound(id, src),
        }
    }

    /// <img id src> appended to the container
    fn insert_image(&self, id: &str, src: &str) -> Result<()> {
        let image = browser::create_element("img")?
            .dyn_into::<HtmlImageElement>()
            .map_err(|element| anyhow!("Error converting {:#?} to HtmlImageElement", element))?;
        image.set_id(id);
        image.set_src(src);

        self.container
            .append_child(&image)
            .map_err(|err| anyhow!("Error appending image '{}' : {:#?}", id, err))?;

        Ok(())
    }

    /// <audio id><source src></audio> appended to the container
    /// - the nested <source> carries the URL, mirroring how the page would
    /// hand the browser alternative encodings
    fn insert_sound(&self, id: &str, src: &str) -> Result<()> {
        let audio = browser::create_element("audio")?
            .dyn_into::<HtmlAudioElement>()
            .map_err(|element| anyhow!("Error converting {:#?} to HtmlAudioElement", element))?;
        audio.set_id(id);

        let source = browser::create_element("source")?
            .dyn_into::<HtmlSourceElement>()
            .map_err(|element| anyhow!("Error converting {:#?} to HtmlSourceElement", element))?;
        source.set_src(src);

        audio
            .append_child(&source)
            .map_err(|err| anyhow!("Error appending source to '{}' : {:#?}", id, err))?;
        self.container
            .append_child(&audio)
            .map_err(|err| anyhow!("Error appending audio '{}' : {:#?}", id, err))?;

        Ok(())
    }

    /// Look a registered element back up by identifier
    pub fn get(&self, id: &str) -> Option<Element> {
        browser::document()
            .ok()
            .and_then(|document| document.get_element_by_id(id))
    }

    /// Typed lookup for the draw path
    pub fn image(&self, id: &str) -> Result<HtmlImageElement> {
        self.get(id)
            .ok_or_else(|| anyhow!("No asset registered with id '{}'", id))?
            .dyn_into::<HtmlImageElement>()
            .map_err(|element| anyhow!("Asset '{}' is not an image : {:#?}", id, element))
    }
}
