use url::Url;

/// Resolves an image source against the base URL, if one is configured.
///
/// Sources that cannot be joined are returned unchanged.
pub fn resolve_url(src: &str, base: Option<&Url>) -> String {
    match base {
        Some(base) => match base.join(src) {
            Ok(url) => url.to_string(),
            Err(e) => {
                ::log::debug!("Keeping unresolvable source '{}': {}", src, e);
                src.to_string()
            }
        },
        None => src.to_string(),
    }
}
