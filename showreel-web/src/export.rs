//! Static export of the rendered site
//!
//! Writes every page, fragment and asset under the path the server answers
//! it on, so any static file host serves the same site.

use std::path::{Path, PathBuf};

use tokio::fs;

use crate::error::{Result, WebError};
use crate::routes;
use crate::site::RenderedSite;

/// Files written by an export.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportSummary {
    pub pages: usize,
    pub fragments: usize,
    pub assets: usize,
    pub photos: usize,
}

impl ExportSummary {
    pub fn total(&self) -> usize {
        self.pages + self.fragments + self.assets + self.photos
    }
}

/// Writes the site into `output`, creating directories as needed.
///
/// Photos are copied from `photos_dir` when it exists.
///
/// # Errors
/// - `WebError::ExportFailed` - A directory or file could not be written
pub async fn export_site(
    site: &RenderedSite,
    output: &Path,
    photos_dir: Option<&Path>,
) -> Result<ExportSummary> {
    let mut summary = ExportSummary::default();

    write_file(&output.join("index.html"), site.index()).await?;
    summary.pages += 1;

    for (path, html) in site.fragments() {
        write_file(&file_for_url(output, path), html).await?;
        summary.fragments += 1;
    }

    for (path, file) in site.assets().files() {
        write_file(&file_for_url(output, path), &file.content).await?;
        summary.assets += 1;
    }

    if let Some(photos_dir) = photos_dir {
        summary.photos = copy_photos(photos_dir, &file_for_url(output, routes::PHOTOS_PREFIX)).await?;
    }

    tracing::info!(
        output = %output.display(),
        files = summary.total(),
        "Site exported"
    );

    Ok(summary)
}

/// Maps a URL path onto a file below `output`, decoding escaped segments.
fn file_for_url(output: &Path, url_path: &str) -> PathBuf {
    url_path
        .trim_start_matches('/')
        .split('/')
        .filter(|segment| !segment.is_empty())
        .fold(output.to_path_buf(), |path, segment| {
            match urlencoding::decode(segment) {
                Ok(decoded) => path.join(decoded.as_ref()),
                Err(_) => path.join(segment),
            }
        })
}

async fn write_file(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .await
            .map_err(|source| WebError::ExportFailed {
                path: parent.to_path_buf(),
                source,
            })?;
    }

    fs::write(path, contents)
        .await
        .map_err(|source| WebError::ExportFailed {
            path: path.to_path_buf(),
            source,
        })
}

/// Copies the regular files of `source_dir` into `target_dir`.
async fn copy_photos(source_dir: &Path, target_dir: &Path) -> Result<usize> {
    let mut entries = match fs::read_dir(source_dir).await {
        Ok(entries) => entries,
        Err(e) => {
            tracing::warn!(
                photos_dir = %source_dir.display(),
                error = %e,
                "Skipping photos"
            );
            return Ok(0);
        }
    };

    let export_error = |path: &Path| {
        let path = path.to_path_buf();
        move |source| WebError::ExportFailed { path, source }
    };

    fs::create_dir_all(target_dir)
        .await
        .map_err(export_error(target_dir))?;

    let mut copied = 0;
    while let Some(entry) = entries
        .next_entry()
        .await
        .map_err(export_error(source_dir))?
    {
        let file_type = entry.file_type().await.map_err(export_error(&entry.path()))?;
        if !file_type.is_file() {
            continue;
        }

        let target = target_dir.join(entry.file_name());
        fs::copy(entry.path(), &target)
            .await
            .map_err(export_error(&target))?;
        copied += 1;
    }

    Ok(copied)
}

#[cfg(test)]
mod tests {
    use showreel_core::{Catalog, ShowreelConfig};
    use tempfile::TempDir;

    use super::*;

    fn site() -> RenderedSite {
        RenderedSite::build(Catalog::portfolio(), ShowreelConfig::default()).unwrap()
    }

    #[test]
    fn test_file_for_url() {
        let root = Path::new("/out");
        assert_eq!(
            file_for_url(root, "/fragments/nav/open.html"),
            PathBuf::from("/out/fragments/nav/open.html")
        );
        assert_eq!(
            file_for_url(root, "/fragments/player/a%20b.html"),
            PathBuf::from("/out/fragments/player/a b.html")
        );
    }

    #[tokio::test]
    async fn test_export_writes_every_url() {
        let dir = TempDir::new().unwrap();
        let site = site();

        let summary = export_site(&site, dir.path(), None).await.unwrap();

        assert_eq!(summary.pages, 1);
        assert_eq!(summary.fragments, 24);
        assert_eq!(summary.assets, 2);
        assert_eq!(summary.photos, 0);

        let index = std::fs::read_to_string(dir.path().join("index.html")).unwrap();
        assert_eq!(index, site.index());
        assert!(dir.path().join("fragments/player/jcrNNpMkBQ4.html").is_file());
        assert!(dir.path().join("assets/site.js").is_file());
    }

    #[tokio::test]
    async fn test_export_copies_photos() {
        let photos = TempDir::new().unwrap();
        std::fs::write(photos.path().join("IMG_2537.JPG"), b"jpeg").unwrap();
        std::fs::create_dir(photos.path().join("raw")).unwrap();
        let output = TempDir::new().unwrap();

        let summary = export_site(&site(), output.path(), Some(photos.path()))
            .await
            .unwrap();

        assert_eq!(summary.photos, 1);
        assert_eq!(
            std::fs::read(output.path().join("photos/IMG_2537.JPG")).unwrap(),
            b"jpeg"
        );
    }

    #[tokio::test]
    async fn test_missing_photos_dir_is_skipped() {
        let output = TempDir::new().unwrap();
        let summary = export_site(&site(), output.path(), Some(Path::new("no-such-dir")))
            .await
            .unwrap();
        assert_eq!(summary.photos, 0);
    }

    #[tokio::test]
    async fn test_unwritable_output_fails() {
        let dir = TempDir::new().unwrap();
        let blocker = dir.path().join("file");
        std::fs::write(&blocker, b"").unwrap();

        let result = export_site(&site(), &blocker, None).await;
        assert!(matches!(result, Err(WebError::ExportFailed { .. })));
    }
}
