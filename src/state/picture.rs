//! Profile picture handling
//!
//! A picture is either text that can go on the wire as-is (a data URL or a
//! remote URL) or a local file that has to be read and encoded first.

use base64::engine::general_purpose::STANDARD as B64;
use base64::Engine;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfilePicture {
    /// Already transportable text: a `data:` URL or an http(s) URL
    Encoded(String),
    /// A local image file, read at submission time
    File(PathBuf),
}

impl ProfilePicture {
    /// Interpret raw user input; empty input means no picture
    pub fn from_input(input: &str) -> Option<Self> {
        let input = input.trim();
        if input.is_empty() {
            return None;
        }
        if input.starts_with("data:")
            || input.starts_with("http://")
            || input.starts_with("https://")
        {
            Some(Self::Encoded(input.to_string()))
        } else {
            Some(Self::File(PathBuf::from(input)))
        }
    }
}

#[derive(Debug, Error)]
pub enum EncodingError {
    #[error("could not read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{} is not an image", path.display())]
    NotAnImage { path: PathBuf },
}

/// Turn a picture into its wire text.
///
/// Text input is returned unchanged. Files are read in full and become a
/// `data:<mime>;base64,<payload>` URL, with the MIME type sniffed from the
/// content.
pub async fn encode(picture: Option<&ProfilePicture>) -> Result<Option<String>, EncodingError> {
    match picture {
        None => Ok(None),
        Some(ProfilePicture::Encoded(text)) => Ok(Some(text.clone())),
        Some(ProfilePicture::File(path)) => encode_file(path).await.map(Some),
    }
}

async fn encode_file(path: &Path) -> Result<String, EncodingError> {
    let bytes = tokio::fs::read(path)
        .await
        .map_err(|source| EncodingError::Read {
            path: path.to_path_buf(),
            source,
        })?;

    let mime = match infer::get(&bytes) {
        Some(kind) if kind.matcher_type() == infer::MatcherType::Image => kind.mime_type(),
        _ => {
            return Err(EncodingError::NotAnImage {
                path: path.to_path_buf(),
            })
        }
    };

    tracing::debug!("Encoded {} ({} bytes, {mime})", path.display(), bytes.len());
    Ok(data_url(mime, &bytes))
}

fn data_url(mime: &str, bytes: &[u8]) -> String {
    format!("data:{mime};base64,{}", B64.encode(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    /// Smallest byte sequence `infer` recognises as PNG
    const PNG_HEADER: &[u8] = &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A, 0, 0, 0, 0x0D];

    mod from_input {
        use super::*;

        #[test]
        fn test_empty_is_absent() {
            assert_eq!(ProfilePicture::from_input(""), None);
            assert_eq!(ProfilePicture::from_input("   "), None);
        }

        #[test]
        fn test_urls_are_encoded() {
            assert_eq!(
                ProfilePicture::from_input("https://x/y.png"),
                Some(ProfilePicture::Encoded("https://x/y.png".to_string()))
            );
            assert_eq!(
                ProfilePicture::from_input("http://x/y.png"),
                Some(ProfilePicture::Encoded("http://x/y.png".to_string()))
            );
        }

        #[test]
        fn test_data_url_is_encoded() {
            let input = "data:image/png;base64,AAAA";
            assert_eq!(
                ProfilePicture::from_input(input),
                Some(ProfilePicture::Encoded(input.to_string()))
            );
        }

        #[test]
        fn test_other_input_is_file() {
            assert_eq!(
                ProfilePicture::from_input("~/me.jpg"),
                Some(ProfilePicture::File(PathBuf::from("~/me.jpg")))
            );
        }
    }

    mod encode {
        use super::*;

        #[tokio::test]
        async fn test_absent_stays_absent() {
            assert_eq!(encode(None).await.unwrap(), None);
        }

        #[tokio::test]
        async fn test_url_is_unchanged() {
            let picture = ProfilePicture::Encoded("https://x/y.png".to_string());
            assert_eq!(
                encode(Some(&picture)).await.unwrap(),
                Some("https://x/y.png".to_string())
            );
        }

        #[tokio::test]
        async fn test_encoding_is_idempotent_on_its_output() {
            let picture = ProfilePicture::Encoded("data:image/png;base64,iVBORw0K".to_string());
            let once = encode(Some(&picture)).await.unwrap().unwrap();
            let again = encode(ProfilePicture::from_input(&once).as_ref())
                .await
                .unwrap()
                .unwrap();
            assert_eq!(once, again);
        }

        #[tokio::test]
        async fn test_png_file_becomes_data_url() {
            let mut file = tempfile::NamedTempFile::new().unwrap();
            file.write_all(PNG_HEADER).unwrap();
            let picture = ProfilePicture::File(file.path().to_path_buf());

            let encoded = encode(Some(&picture)).await.unwrap().unwrap();

            assert!(encoded.starts_with("data:image/png;base64,"));
            let payload = encoded.trim_start_matches("data:image/png;base64,");
            assert_eq!(B64.decode(payload).unwrap(), PNG_HEADER);
        }

        #[tokio::test]
        async fn test_missing_file_is_read_error() {
            let picture = ProfilePicture::File(PathBuf::from("/no/such/picture.png"));
            let result = encode(Some(&picture)).await;
            assert!(matches!(result, Err(EncodingError::Read { .. })));
        }

        #[tokio::test]
        async fn test_non_image_is_rejected() {
            let mut file = tempfile::NamedTempFile::new().unwrap();
            file.write_all(b"just some text, not pixels").unwrap();
            let picture = ProfilePicture::File(file.path().to_path_buf());

            let result = encode(Some(&picture)).await;
            assert!(matches!(result, Err(EncodingError::NotAnImage { .. })));
        }
    }

    #[test]
    fn test_data_url_format() {
        assert_eq!(data_url("image/gif", b"GIF"), "data:image/gif;base64,R0lG");
    }
}
