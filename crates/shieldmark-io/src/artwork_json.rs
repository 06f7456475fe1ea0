use std::fs;
use std::path::Path;

use thiserror::Error;

use shieldmark_core::Artwork;

#[derive(Error, Debug)]
pub enum ArtworkFileError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Save an artwork as pretty-printed JSON.
pub fn save_artwork(path: &Path, artwork: &Artwork) -> Result<(), ArtworkFileError> {
    let json = serde_json::to_string_pretty(artwork)?;
    fs::write(path, json)?;
    log::info!(
        "saved artwork {:?} ({} groups) to {}",
        artwork.name,
        artwork.group_count(),
        path.display()
    );
    Ok(())
}

/// Load an artwork from a JSON file.
pub fn load_artwork(path: &Path) -> Result<Artwork, ArtworkFileError> {
    let json = fs::read_to_string(path)?;
    let artwork: Artwork = serde_json::from_str(&json)?;
    log::debug!(
        "loaded artwork {:?} ({} groups) from {}",
        artwork.name,
        artwork.group_count(),
        path.display()
    );
    Ok(artwork)
}

#[cfg(test)]
mod tests {
    use super::*;
    use shieldmark_core::contoso_shield;

    fn temp_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("shieldmark-json-test-{}-{name}", std::process::id()))
    }

    #[test]
    fn test_artwork_json_round_trip() {
        let art = contoso_shield();
        let path = temp_path("shield.json");
        save_artwork(&path, &art).unwrap();
        let loaded = load_artwork(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(loaded, art);
    }

    #[test]
    fn test_load_rejects_malformed_json() {
        let path = temp_path("garbage.json");
        std::fs::write(&path, "{ not json").unwrap();
        let result = load_artwork(&path);
        std::fs::remove_file(&path).unwrap();
        assert!(matches!(result, Err(ArtworkFileError::Json(_))));
    }
}
