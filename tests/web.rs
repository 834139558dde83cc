// Browser-run checks for the DOM-facing pieces : the asset registry and the
// async image wait. Pure logic (key flags, sprite geometry) is covered by
// the native unit tests next to the modules.
use space_shooter::assets::AssetRegistry;
use space_shooter::engine;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Element, HtmlAudioElement, HtmlImageElement, HtmlSourceElement};

wasm_bindgen_test_configure!(run_in_browser);

// smallest valid gif, decodes without touching the network
const PIXEL_GIF: &str =
    "data:image/gif;base64,R0lGODlhAQABAIAAAAAAAP///yH5BAEAAAAALAAAAAABAAEAAAIBRAA7";

/// Rebuild the `assets` container the page would normally ship with
/// - dropping the old container also drops every element registered by a
/// previous test, so each test starts from an empty page
fn assets_container() -> Element {
    let document = web_sys::window()
        .expect("window should exist in the test harness")
        .document()
        .expect("document should exist in the test harness");

    if let Some(stale) = document.get_element_by_id("assets") {
        stale.remove();
    }

    let container = document.create_element("div").expect("create div");
    container.set_id("assets");
    document
        .body()
        .expect("body should exist in the test harness")
        .append_child(&container)
        .expect("append container");

    container
}

#[wasm_bindgen_test]
fn registering_an_image_inserts_one_img_with_id_and_src() {
    let container = assets_container();
    let registry = AssetRegistry::new().expect("container was just created");

    registry
        .register("image", "shipImage", "https://example.com/ship.png")
        .expect("image registration should succeed");

    assert_eq!(container.child_element_count(), 1);

    let image = registry
        .get("shipImage")
        .expect("element should be addressable by id")
        .dyn_into::<HtmlImageElement>()
        .expect("registered element should be an <img>");
    assert_eq!(image.id(), "shipImage");
    assert_eq!(image.src(), "https://example.com/ship.png");
}

#[wasm_bindgen_test]
fn registering_a_sound_inserts_an_audio_wrapping_one_source() {
    let container = assets_container();
    let registry = AssetRegistry::new().expect("container was just created");

    registry
        .register("sound", "laserSound", "https://example.com/laser.ogg")
        .expect("sound registration should succeed");

    assert_eq!(container.child_element_count(), 1);

    let audio = registry
        .get("laserSound")
        .expect("element should be addressable by id")
        .dyn_into::<HtmlAudioElement>()
        .expect("registered element should be an <audio>");
    assert_eq!(audio.id(), "laserSound");
    assert_eq!(audio.child_element_count(), 1);

    let source = audio
        .first_element_child()
        .expect("audio should wrap a <source>")
        .dyn_into::<HtmlSourceElement>()
        .expect("nested element should be a <source>");
    assert_eq!(source.src(), "https://example.com/laser.ogg");
}

#[wasm_bindgen_test]
fn unrecognized_kind_inserts_nothing() {
    let container = assets_container();
    let registry = AssetRegistry::new().expect("container was just created");

    registry
        .register("video", "introVideo", "https://example.com/intro.webm")
        .expect("a bad kind tag is logged, not returned as Err");

    assert_eq!(container.child_element_count(), 0);
    assert!(registry.get("introVideo").is_none());
}

#[wasm_bindgen_test]
fn registering_the_same_id_twice_inserts_twice() {
    // no caching, no dedup
    let container = assets_container();
    let registry = AssetRegistry::new().expect("container was just created");

    registry
        .register("image", "shipImage", "https://example.com/ship.png")
        .expect("first registration");
    registry
        .register("image", "shipImage", "https://example.com/ship.png")
        .expect("second registration");

    assert_eq!(container.child_element_count(), 2);
}

#[wasm_bindgen_test]
fn typed_image_lookup_rejects_non_image_assets() {
    let _container = assets_container();
    let registry = AssetRegistry::new().expect("container was just created");

    registry
        .register("sound", "engineHum", "https://example.com/hum.ogg")
        .expect("sound registration should succeed");

    assert!(registry.image("engineHum").is_err());
    assert!(registry.image("neverRegistered").is_err());
}

#[wasm_bindgen_test]
async fn await_image_resolves_once_the_image_decodes() {
    let _container = assets_container();
    let registry = AssetRegistry::new().expect("container was just created");

    registry
        .register("image", "pixelImage", PIXEL_GIF)
        .expect("image registration should succeed");

    let image = registry
        .image("pixelImage")
        .expect("typed lookup should find the <img>");
    engine::await_image(&image)
        .await
        .expect("a data URI image should always decode");

    assert!(image.complete());
}
