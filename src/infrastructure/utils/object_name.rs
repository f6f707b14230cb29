use std::path::Path;

use uuid::Uuid;

const FALLBACK_CONTENT_TYPE: &str = "application/octet-stream";

/// Random object name keeping the original extension as typed,
/// e.g. `photo.PNG` becomes `<32 hex chars>.PNG`.
pub fn object_name(original: &str) -> String {
    let stem = Uuid::new_v4().simple().to_string();
    match extension(original) {
        Some(ext) => format!("{}.{}", stem, ext),
        None => stem,
    }
}

fn extension(original: &str) -> Option<&str> {
    let file_name = original.rsplit(['/', '\\']).next().unwrap_or(original);
    Path::new(file_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .filter(|ext| !ext.is_empty() && ext.chars().all(|c| c.is_ascii_alphanumeric()))
}

/// Content type sniffed from the file's magic bytes.
pub fn sniff_content_type(bytes: &[u8]) -> &'static str {
    infer::get(bytes)
        .map(|kind| kind.mime_type())
        .unwrap_or(FALLBACK_CONTENT_TYPE)
}

pub fn is_image(bytes: &[u8]) -> bool {
    infer::is_image(bytes)
}
