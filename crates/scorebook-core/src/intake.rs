//! Boundary adapter for file paths arriving from drag-and-drop or a
//! file chooser.
//!
//! Drop payloads arrive as one string of whitespace-separated tokens where
//! paths containing spaces are wrapped in braces (`{C:/my dir/pic.png}`).
//! This stays a narrow adapter: the core data model never sees raw
//! payloads.

/// File extensions accepted as images, lowercase
pub const IMAGE_EXTENSIONS: [&str; 5] = ["png", "jpg", "jpeg", "bmp", "gif"];

/// Split a raw drop payload into path tokens.
///
/// Brace-wrapped tokens are taken whole with the braces stripped; anything
/// else splits on whitespace. Empty tokens are discarded.
pub fn extract_paths(payload: &str) -> Vec<String> {
    let mut paths = Vec::new();
    let mut rest = payload;

    while let Some(start) = rest.find(['{', '}']) {
        let (head, tail) = rest.split_at(start);
        paths.extend(head.split_whitespace().map(str::to_string));

        if tail.starts_with('}') {
            // Stray closing brace, skip it
            rest = &tail[1..];
            continue;
        }
        match tail[1..].find('}') {
            Some(end) => {
                let token = tail[1..1 + end].trim();
                if !token.is_empty() {
                    paths.push(token.to_string());
                }
                rest = &tail[1 + end + 1..];
            }
            None => {
                // Unterminated group, take the remainder as one token
                let token = tail[1..].trim();
                if !token.is_empty() {
                    paths.push(token.to_string());
                }
                rest = "";
            }
        }
    }
    paths.extend(rest.split_whitespace().map(str::to_string));
    paths
}

/// Whether a path names an image by its extension, case-insensitive
pub fn is_image_path(path: &str) -> bool {
    let lower = path.to_ascii_lowercase();
    IMAGE_EXTENSIONS
        .iter()
        .any(|ext| lower.ends_with(&format!(".{}", ext)))
}
