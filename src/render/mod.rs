//! Render URL construction
//!
//! The rendering service is driven entirely through GET URLs of the
//! form `<base>/<format>/<token>`; assigning one to an `<img>` element
//! is the whole transport. This module only builds the strings; it
//! never issues a request, and service-side failures surface as the
//! browser's broken-image state, not here.

use crate::encode::encode;
use crate::prefs::OutputFormat;

/// Base URL of the public rendering service.
pub const DEFAULT_SERVER: &str = "http://www.plantuml.com/plantuml";

/// A rendering service endpoint, injectable for self-hosted servers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderServer {
    base: String,
}

impl Default for RenderServer {
    fn default() -> Self {
        Self::new(DEFAULT_SERVER)
    }
}

impl RenderServer {
    /// Wrap a service base URL. A trailing slash is tolerated.
    pub fn new(base: impl Into<String>) -> Self {
        let mut base = base.into();
        while base.ends_with('/') {
            base.pop();
        }
        Self { base }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    /// Full GET URL for an encoded token in the given output format.
    pub fn url(&self, format: OutputFormat, token: &str) -> String {
        format!("{}/{}/{}", self.base, format.as_str(), token)
    }
}

/// The `(token, format)` pair captured at submit time.
///
/// Ephemeral and recomputed on every submit; it reflects the diagram
/// text as of that submit, not whatever is in the editor afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderRequest {
    pub token: String,
    pub format: OutputFormat,
}

impl RenderRequest {
    /// Encode the given diagram source under the given format.
    pub fn from_source(source: &str, format: OutputFormat) -> Self {
        Self {
            token: encode(source),
            format,
        }
    }

    pub fn url(&self, server: &RenderServer) -> String {
        server.url(self.format, &self.token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encode::decode;

    #[test]
    fn test_url_shape() {
        let server = RenderServer::default();
        let url = server.url(OutputFormat::Svg, "token123");
        assert_eq!(url, "http://www.plantuml.com/plantuml/svg/token123");
    }

    #[test]
    fn test_raster_uses_img_segment() {
        let server = RenderServer::default();
        let url = server.url(OutputFormat::Img, "token123");
        assert_eq!(url, "http://www.plantuml.com/plantuml/img/token123");
    }

    #[test]
    fn test_custom_server_trailing_slash() {
        let server = RenderServer::new("https://uml.example.com/render/");
        assert_eq!(
            server.url(OutputFormat::Svg, "t"),
            "https://uml.example.com/render/svg/t"
        );
    }

    #[test]
    fn test_request_token_decodes_to_source() {
        let request = RenderRequest::from_source("A -> B: hello", OutputFormat::Svg);
        assert_eq!(decode(&request.token).unwrap(), "A -> B: hello");

        let url = request.url(&RenderServer::default());
        assert!(url.starts_with("http://www.plantuml.com/plantuml/svg/"));
        assert!(url.ends_with(&request.token));
    }

    #[test]
    fn test_format_changes_segment_not_token() {
        let svg = RenderRequest::from_source("A -> B: hello", OutputFormat::Svg);
        let img = RenderRequest::from_source("A -> B: hello", OutputFormat::Img);
        assert_eq!(svg.token, img.token);
        assert_ne!(svg.url(&RenderServer::default()), img.url(&RenderServer::default()));
    }
}
