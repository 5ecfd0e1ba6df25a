//! `<input type="file">` helpers for the avatar upload.

#[cfg(test)]
#[path = "file_input_test.rs"]
mod file_input_test;

const IMAGE_EXTENSIONS: [&str; 5] = ["png", "jpg", "jpeg", "gif", "webp"];

/// Whether `file_name` has an image extension the avatar endpoint accepts.
pub fn is_supported_image(file_name: &str) -> bool {
    file_name
        .rsplit_once('.')
        .is_some_and(|(stem, ext)| !stem.is_empty() && IMAGE_EXTENSIONS.iter().any(|e| ext.eq_ignore_ascii_case(e)))
}

/// First file selected in the input that fired `ev`.
#[cfg(feature = "hydrate")]
pub fn first_file(ev: &leptos::ev::Event) -> Option<web_sys::File> {
    use wasm_bindgen::JsCast;

    let input = ev.target()?.dyn_into::<web_sys::HtmlInputElement>().ok()?;
    input.files()?.get(0)
}
