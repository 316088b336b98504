//! Embedded asset bundle (sounds, font). Callers degrade gracefully when
//! a file is absent from `assets/`.

use rust_embed::RustEmbed;
use std::borrow::Cow;

#[derive(RustEmbed)]
#[folder = "assets/"]
struct Assets;

pub fn get_asset_bytes(name: &str) -> Option<Cow<'static, [u8]>> {
    Assets::get(name).map(|f| f.data)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_asset_is_none() {
        assert!(get_asset_bytes("no_such_file.ogg").is_none());
    }
}
