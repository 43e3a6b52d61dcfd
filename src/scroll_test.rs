use wasm_bindgen_test::*;

use super::*;

wasm_bindgen_test_configure!(run_in_browser);

// Runs under `wasm-bindgen-test-runner` in a browser; the host test
// suite skips it since there is no DOM to scroll.

#[wasm_bindgen_test]
fn second_pin_leaves_offset_unchanged() {
    let document = web_sys::window()
        .expect("window")
        .document()
        .expect("document");

    let viewport = document.create_element("div").expect("create viewport");
    viewport
        .set_attribute("style", "height: 40px; overflow-y: scroll;")
        .expect("style viewport");
    let filler = document.create_element("div").expect("create filler");
    filler
        .set_attribute("style", "height: 400px;")
        .expect("style filler");
    viewport.append_child(&filler).expect("attach filler");
    document
        .body()
        .expect("body")
        .append_child(&viewport)
        .expect("attach viewport");

    pin_to_latest(&viewport);
    let pinned = viewport.scroll_top();
    assert!(pinned > 0);

    pin_to_latest(&viewport);
    assert_eq!(viewport.scroll_top(), pinned);
}
