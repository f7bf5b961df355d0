//! File Export Helpers
//!
//! Poem text export and image byte persistence. All I/O goes through
//! `tokio::fs`; errors surface to the caller rather than being substituted.

use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::haiku::Haiku;

/// Filename used when exporting a haiku as text
#[must_use]
pub fn haiku_filename(haiku: &Haiku) -> String {
    format!("haiku-{}.txt", haiku.id)
}

/// Write a haiku to `dir` as a text file, three lines joined with `\n`
///
/// Creates the directory if needed and returns the written path.
///
/// # Errors
///
/// Returns an error if the directory cannot be created or the file cannot
/// be written.
pub async fn write_haiku_text(haiku: &Haiku, dir: &Path) -> anyhow::Result<PathBuf> {
    tokio::fs::create_dir_all(dir)
        .await
        .with_context(|| format!("Failed to create export directory {}", dir.display()))?;

    let path = dir.join(haiku_filename(haiku));
    let mut content = haiku.lines.join("\n");
    content.push('\n');

    tokio::fs::write(&path, content)
        .await
        .with_context(|| format!("Failed to write {}", path.display()))?;

    Ok(path)
}

/// Map a content type to a file extension
///
/// Unknown types fall back to "png". Parameters after ';' are ignored.
#[must_use]
pub fn image_extension(content_type: &str) -> &'static str {
    let mime = content_type.split(';').next().unwrap_or("").trim();
    match mime {
        "image/jpeg" | "image/jpg" => "jpg",
        "image/webp" => "webp",
        "image/gif" => "gif",
        _ => "png",
    }
}

/// Persist image bytes under `dir` as `{stem}.{ext}`
///
/// The extension is derived from the content type. Creates the directory if
/// needed and returns the written path.
///
/// # Errors
///
/// Returns an error if the directory cannot be created or the file cannot
/// be written.
pub async fn save_image_bytes(
    bytes: &[u8],
    content_type: &str,
    dir: &Path,
    stem: &str,
) -> anyhow::Result<PathBuf> {
    tokio::fs::create_dir_all(dir)
        .await
        .with_context(|| format!("Failed to create media directory {}", dir.display()))?;

    let path = dir.join(format!("{stem}.{}", image_extension(content_type)));
    tokio::fs::write(&path, bytes)
        .await
        .with_context(|| format!("Failed to write {}", path.display()))?;

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::haiku::{Emotion, HaikuGenerator};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_image_extension_mapping() {
        assert_eq!(image_extension("image/png"), "png");
        assert_eq!(image_extension("image/jpeg"), "jpg");
        assert_eq!(image_extension("image/webp"), "webp");
        assert_eq!(image_extension("image/png; charset=binary"), "png");
        assert_eq!(image_extension("application/octet-stream"), "png");
    }

    #[tokio::test]
    async fn test_write_haiku_text_format() {
        let dir = tempfile::tempdir().unwrap();
        let haiku = HaikuGenerator::new().from_text_seeded("forest", Some(Emotion::Serene), 1);

        let path = write_haiku_text(&haiku, dir.path()).await.unwrap();

        assert_eq!(
            path.file_name().and_then(|n| n.to_str()),
            Some(haiku_filename(&haiku).as_str())
        );
        let content = tokio::fs::read_to_string(&path).await.unwrap();
        assert_eq!(
            content,
            format!("{}\n{}\n{}\n", haiku.lines[0], haiku.lines[1], haiku.lines[2])
        );
    }

    #[tokio::test]
    async fn test_write_haiku_creates_directory() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("exports").join("poems");
        let haiku = HaikuGenerator::new().from_emotion(Emotion::Tranquil);

        let path = write_haiku_text(&haiku, &nested).await.unwrap();
        assert!(path.exists());
    }

    #[tokio::test]
    async fn test_save_image_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let path = save_image_bytes(b"notapng", "image/jpeg", dir.path(), "kigo-test")
            .await
            .unwrap();

        assert!(path.to_string_lossy().ends_with("kigo-test.jpg"));
        assert_eq!(tokio::fs::read(&path).await.unwrap(), b"notapng");
    }
}
