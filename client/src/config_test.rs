use super::*;

#[test]
fn from_values_uses_defaults_when_unset() {
    let cfg = ClientConfig::from_values(None, None, None);
    assert_eq!(cfg, ClientConfig::default());
}

#[test]
fn from_values_strips_trailing_slashes() {
    let cfg = ClientConfig::from_values(Some("https://api.example.com/api/"), Some("https://cdn.example.com//"), None);
    assert_eq!(cfg.api_base_url, "https://api.example.com/api");
    assert_eq!(cfg.media_host, "https://cdn.example.com");
}

#[test]
fn from_values_treats_blank_as_unset() {
    let cfg = ClientConfig::from_values(Some("   "), Some(""), None);
    assert_eq!(cfg.api_base_url, DEFAULT_API_BASE_URL);
    assert_eq!(cfg.media_host, DEFAULT_MEDIA_HOST);
}

#[test]
fn from_values_parses_preview_width() {
    let cfg = ClientConfig::from_values(None, None, Some(" 1280 "));
    assert_eq!(cfg.preview_min_width_px, 1280);
}

#[test]
fn from_values_rejects_invalid_preview_width() {
    assert_eq!(
        ClientConfig::from_values(None, None, Some("wide")).preview_min_width_px,
        DEFAULT_PREVIEW_MIN_WIDTH_PX
    );
    assert_eq!(
        ClientConfig::from_values(None, None, Some("0")).preview_min_width_px,
        DEFAULT_PREVIEW_MIN_WIDTH_PX
    );
}
