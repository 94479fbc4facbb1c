use smol_str::SmolStr;

/// Split a symbolic path on `/`, preserving empty segments.
///
/// A leading `/` yields an empty first segment representing the root; a
/// trailing `/` yields an empty last segment, which code completion treats
/// as "offer everything in the current scope". The empty path yields no
/// segments at all.
pub fn split_path(path: &str) -> Vec<SmolStr> {
    if path.is_empty() {
        return Vec::new();
    }
    path.split('/').map(SmolStr::new).collect()
}
