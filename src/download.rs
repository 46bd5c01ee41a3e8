//! Download-link construction: resolution substitution on artwork URLs,
//! filename generation, and saving fetched bytes to disk.

use crate::types::{AlbumResult, ArtworkSize, THUMBNAIL_TOKEN};
use crate::Result;
use std::path::{Path, PathBuf};

/// Year component used in filenames when the album has no usable release date.
pub const UNKNOWN_YEAR: &str = "UnknownYear";

/// One downloadable artwork rendition of an album.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadLink {
    /// The artwork size this link requests
    pub size: ArtworkSize,
    /// Full URL of the rendition
    pub url: String,
    /// Suggested filename for the saved image
    pub filename: String,
}

/// Replace characters invalid in common filesystem names with `-`.
///
/// Strips each of `/ \ ? % * : | " < >`.
///
/// # Examples
///
/// ```rust
/// use artfetch::sanitize_file_component;
///
/// assert_eq!(sanitize_file_component("AC/DC"), "AC-DC");
/// assert_eq!(sanitize_file_component("Who Made Who?"), "Who Made Who-");
/// ```
pub fn sanitize_file_component(name: &str) -> String {
    name.chars()
        .map(|c| {
            if matches!(c, '/' | '\\' | '?' | '%' | '*' | ':' | '|' | '"' | '<' | '>') {
                '-'
            } else {
                c
            }
        })
        .collect()
}

/// The artwork URL prefix shared by all renditions of an album.
///
/// Strips the canonical thumbnail token from the end of the URL. Thumbnails
/// that do not carry the canonical token fall back to dropping the last path
/// segment, so substitution still targets the filename position.
pub fn artwork_base_url(artwork_url_100: &str) -> String {
    if let Some(base) = artwork_url_100.strip_suffix(THUMBNAIL_TOKEN) {
        return base.to_string();
    }
    match artwork_url_100.rfind('/') {
        Some(pos) => artwork_url_100[..=pos].to_string(),
        None => artwork_url_100.to_string(),
    }
}

/// The URL of one artwork rendition, derived from the thumbnail URL.
pub fn artwork_url(artwork_url_100: &str, size: ArtworkSize) -> String {
    format!("{}{}", artwork_base_url(artwork_url_100), size.token())
}

/// The suggested filename for one rendition of an album.
///
/// `{year} - {artist} - {album} - {dim}.jpg` for the fixed sizes, with the
/// dimension suffix omitted for [`ArtworkSize::Max`]. Artist and album are
/// sanitized; the year falls back to [`UNKNOWN_YEAR`].
pub fn download_filename(album: &AlbumResult, size: ArtworkSize) -> String {
    let year = match album.release_year() {
        Some(year) => year.to_string(),
        None => UNKNOWN_YEAR.to_string(),
    };
    let artist = sanitize_file_component(&album.artist_name);
    let name = sanitize_file_component(&album.collection_name);

    match size {
        ArtworkSize::Max => format!("{year} - {artist} - {name}.jpg"),
        _ => format!("{year} - {artist} - {name} - {}.jpg", size.dimensions()),
    }
}

/// Build the fixed set of download links for an album.
///
/// Always exactly four links, in the fixed order 300, 600, 1000, 3000. The
/// URLs are identical to the thumbnail URL except for the trailing resolution
/// token. Whether the larger renditions exist server-side is not guaranteed;
/// a missing one fails at fetch time for that link only.
///
/// # Examples
///
/// ```rust
/// use artfetch::{build_download_links, AlbumResult};
///
/// let album = AlbumResult {
///     collection_id: 1,
///     artist_name: "AC/DC".to_string(),
///     collection_name: "Who Made Who?".to_string(),
///     release_date: Some("1986-05-24T07:00:00Z".to_string()),
///     artwork_url_100: "https://example.org/art/100x100bb.jpg".to_string(),
/// };
///
/// let links = build_download_links(&album);
/// assert_eq!(links.len(), 4);
/// assert_eq!(links[0].url, "https://example.org/art/300x300bb.jpg");
/// assert_eq!(links[3].filename, "1986 - AC-DC - Who Made Who-.jpg");
/// ```
pub fn build_download_links(album: &AlbumResult) -> Vec<DownloadLink> {
    ArtworkSize::ALL
        .iter()
        .map(|&size| DownloadLink {
            size,
            url: artwork_url(&album.artwork_url_100, size),
            filename: download_filename(album, size),
        })
        .collect()
}

/// Write fetched artwork bytes to `dir/filename`, returning the final path.
///
/// The directory is created if it does not exist.
pub fn save_artwork(bytes: &[u8], dir: &Path, filename: &str) -> Result<PathBuf> {
    std::fs::create_dir_all(dir)?;
    let path = dir.join(filename);
    std::fs::write(&path, bytes)?;
    log::debug!("saved {} bytes to {}", bytes.len(), path.display());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    const INVALID_CHARS: [char; 10] = ['/', '\\', '?', '%', '*', ':', '|', '"', '<', '>'];

    fn album() -> AlbumResult {
        AlbumResult {
            collection_id: 1440769632,
            artist_name: "AC/DC".to_string(),
            collection_name: "Who Made Who?".to_string(),
            release_date: Some("1986-05-24T07:00:00Z".to_string()),
            artwork_url_100: "https://is1-ssl.mzstatic.com/image/thumb/a/100x100bb.jpg".to_string(),
        }
    }

    #[test]
    fn test_links_substitute_only_trailing_token() {
        let links = build_download_links(&album());
        let urls: Vec<&str> = links.iter().map(|l| l.url.as_str()).collect();
        assert_eq!(
            urls,
            [
                "https://is1-ssl.mzstatic.com/image/thumb/a/300x300bb.jpg",
                "https://is1-ssl.mzstatic.com/image/thumb/a/600x600bb.jpg",
                "https://is1-ssl.mzstatic.com/image/thumb/a/1000x1000bb.jpg",
                "https://is1-ssl.mzstatic.com/image/thumb/a/3000x3000bb.jpg",
            ]
        );
    }

    #[test]
    fn test_noncanonical_thumbnail_replaces_last_segment() {
        let url = artwork_url("https://example.org/art/cover.jpg", ArtworkSize::Medium);
        assert_eq!(url, "https://example.org/art/600x600bb.jpg");
    }

    #[test]
    fn test_filenames_contain_no_invalid_characters() {
        for link in build_download_links(&album()) {
            for c in INVALID_CHARS {
                assert!(
                    !link.filename.contains(c),
                    "filename {:?} contains {c:?}",
                    link.filename
                );
            }
        }
    }

    #[test]
    fn test_max_filename_omits_dimensions() {
        let links = build_download_links(&album());
        assert_eq!(links[0].filename, "1986 - AC-DC - Who Made Who- - 300x300.jpg");
        assert_eq!(links[1].filename, "1986 - AC-DC - Who Made Who- - 600x600.jpg");
        assert_eq!(links[2].filename, "1986 - AC-DC - Who Made Who- - 1000x1000.jpg");
        assert_eq!(links[3].filename, "1986 - AC-DC - Who Made Who-.jpg");
    }

    #[test]
    fn test_unknown_year_placeholder() {
        let mut no_date = album();
        no_date.release_date = None;
        assert_eq!(
            download_filename(&no_date, ArtworkSize::Small),
            "UnknownYear - AC-DC - Who Made Who- - 300x300.jpg"
        );
    }

    #[test]
    fn test_sanitize_strips_all_listed_characters() {
        let nasty: String = INVALID_CHARS.iter().collect();
        assert_eq!(sanitize_file_component(&nasty), "-".repeat(INVALID_CHARS.len()));
        assert_eq!(sanitize_file_component("plain name"), "plain name");
    }

    #[test]
    fn test_save_artwork_writes_bytes() {
        let dir = std::env::temp_dir().join("artfetch-test-save");
        let path = save_artwork(b"jpegdata", &dir, "x.jpg").unwrap();
        assert_eq!(std::fs::read(&path).unwrap(), b"jpegdata");
        let _ = std::fs::remove_file(&path);
        let _ = std::fs::remove_dir(&dir);
    }
}
