/// Cover image loader
///
/// Downloads a cover over HTTP and decodes it into an RGBA bitmap.
/// The format is auto-detected from the bytes; JPEG and PNG are what the
/// catalog actually serves.

use thiserror::Error;
use tokio::task;
use tracing::debug;

use crate::state::data::Bitmap;

/// Why a cover could not be shown
///
/// Both kinds are recoverable: the caller logs them and keeps whatever
/// image it was already displaying.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoverError {
    /// Connection, timeout, bad status, or a body that could not be read
    #[error("network error: {0}")]
    Network(String),
    /// The body was not an image we can decode
    #[error("decode error: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for CoverError {
    fn from(err: reqwest::Error) -> Self {
        CoverError::Network(err.to_string())
    }
}

/// Fetch and decode the cover at `url`
///
/// # Arguments
/// * `client` - Shared HTTP client (cheap to clone)
/// * `url` - Image URL, used verbatim
pub async fn load_cover(client: reqwest::Client, url: String) -> Result<Bitmap, CoverError> {
    debug!(%url, "requesting cover");

    let response = client.get(&url).send().await?.error_for_status()?;
    let body = response.bytes().await?;

    debug!(%url, bytes = body.len(), "cover downloaded");

    // Decoding a full-size JPEG is CPU-bound, keep it off the executor
    task::spawn_blocking(move || decode_cover(&body))
        .await
        .map_err(|e| CoverError::Decode(format!("decode task failed: {}", e)))?
}

/// Decode encoded image bytes into an RGBA8 bitmap
pub fn decode_cover(bytes: &[u8]) -> Result<Bitmap, CoverError> {
    let decoded = image::load_from_memory(bytes)
        .map_err(|e| CoverError::Decode(e.to_string()))?
        .to_rgba8();

    let (width, height) = decoded.dimensions();

    Ok(Bitmap {
        width,
        height,
        pixels: decoded.into_raw(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{DynamicImage, ImageFormat, Rgba, RgbaImage};
    use std::io::Cursor;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    fn client() -> reqwest::Client {
        reqwest::Client::builder().no_proxy().build().unwrap()
    }

    fn png_bytes() -> Vec<u8> {
        let img = RgbaImage::from_pixel(3, 2, Rgba([200, 10, 30, 255]));
        let mut buf = Vec::new();
        DynamicImage::ImageRgba8(img)
            .write_to(&mut Cursor::new(&mut buf), ImageFormat::Png)
            .unwrap();
        buf
    }

    /// Serve exactly one HTTP response on a local port and return its URL
    async fn serve_once(status: &'static str, body: Vec<u8>) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = [0u8; 1024];
            let _ = socket.read(&mut request).await;

            let head = format!(
                "HTTP/1.1 {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
                status,
                body.len()
            );
            socket.write_all(head.as_bytes()).await.unwrap();
            socket.write_all(&body).await.unwrap();
            socket.shutdown().await.unwrap();
        });

        format!("http://{}/cover.png", addr)
    }

    #[test]
    fn test_decode_png() {
        let bitmap = decode_cover(&png_bytes()).unwrap();
        assert_eq!((bitmap.width, bitmap.height), (3, 2));
        assert_eq!(bitmap.pixels.len(), 3 * 2 * 4);
        assert_eq!(&bitmap.pixels[..4], &[200, 10, 30, 255]);
    }

    #[test]
    fn test_decode_garbage_is_decode_error() {
        let result = decode_cover(b"<html>not an image</html>");
        assert!(matches!(result, Err(CoverError::Decode(_))));
    }

    #[tokio::test]
    async fn test_load_cover_ok() {
        let url = serve_once("200 OK", png_bytes()).await;
        let bitmap = load_cover(client(), url).await.unwrap();
        assert_eq!(bitmap, decode_cover(&png_bytes()).unwrap());
    }

    #[tokio::test]
    async fn test_load_cover_not_found_is_network_error() {
        let url = serve_once("404 Not Found", Vec::new()).await;
        let result = load_cover(client(), url).await;
        assert!(matches!(result, Err(CoverError::Network(_))));
    }

    #[tokio::test]
    async fn test_load_cover_non_image_is_decode_error() {
        let url = serve_once("200 OK", b"definitely not pixels".to_vec()).await;
        let result = load_cover(client(), url).await;
        assert!(matches!(result, Err(CoverError::Decode(_))));
    }

    #[tokio::test]
    async fn test_load_cover_unreachable_is_network_error() {
        // Grab a free port, then close it so nothing is listening
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let url = format!("http://{}/cover.jpg", addr);
        let result = load_cover(client(), url).await;
        assert!(matches!(result, Err(CoverError::Network(_))));
    }
}
