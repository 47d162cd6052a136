//! Endpoint documentation catalog for the package-search API.
//!
//! Static description of the remote service: the five documented endpoints
//! with their query parameters and sample bodies, plus the authentication,
//! rate-limiting, and error-handling sections. Rendering functions produce
//! tagged lines only; printing them is the CLI's job. None of the sibling
//! search endpoints are called from this crate - they are documented, not
//! consumed.

use serde_json::{Value, json};

use crate::highlight::{
    CodeBlock, HighlightOptions, JsonHighlighter, StyledLine, StyledSegment, TokenKind,
    inline_str,
};

/// Public base URL the documentation advertises.
pub const BASE_URL: &str = "https://api.winget.dev";

/// Documented API version.
pub const API_VERSION: &str = "v1";

/// Requests allowed per second before the service answers 429.
pub const RATE_LIMIT_PER_SECOND: u32 = 100;

/// A required query parameter of an endpoint.
#[derive(Debug, Clone)]
pub struct QueryParam {
    pub name: &'static str,
    pub description: &'static str,
}

/// One documented endpoint with its sample bodies.
#[derive(Debug, Clone)]
pub struct EndpointDoc {
    pub id: &'static str,
    pub method: &'static str,
    pub path: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub params: Vec<QueryParam>,
    pub success: Value,
    pub error: Value,
}

fn sample_package() -> Value {
    json!({
        "PackageIdentifier": "Microsoft.VisualStudioCode",
        "PackageName": "Visual Studio Code",
        "Publisher": "Microsoft Corporation",
        "ShortDescription": "Code editor redefined and optimized for building and debugging modern web and cloud applications.",
        "Author": "Microsoft"
    })
}

fn search_results() -> Value {
    json!({ "results": [sample_package()] })
}

/// The full endpoint catalog, in documentation order.
pub fn catalog() -> Vec<EndpointDoc> {
    vec![
        EndpointDoc {
            id: "ping",
            method: "GET",
            path: "/api/v1/ping",
            title: "Health Check",
            description: "Check if the API is running and accessible",
            params: Vec::new(),
            success: json!({ "message": "pong" }),
            error: json!({ "error": "Invalid API key" }),
        },
        EndpointDoc {
            id: "search",
            method: "GET",
            path: "/api/v1/search",
            title: "Search Packages",
            description: "Search for packages across multiple fields including name, publisher, description, and author",
            params: vec![QueryParam {
                name: "q",
                description: "Search query string",
            }],
            success: search_results(),
            error: json!({ "error": "Query parameter 'q' is required" }),
        },
        EndpointDoc {
            id: "packagename",
            method: "GET",
            path: "/api/v1/packagename",
            title: "Search by Package Name",
            description: "Search for packages by their package name",
            params: vec![QueryParam {
                name: "name",
                description: "Package name to search for",
            }],
            success: search_results(),
            error: json!({ "error": "Query parameter 'name' is required" }),
        },
        EndpointDoc {
            id: "packageidentifier",
            method: "GET",
            path: "/api/v1/packageidentifier",
            title: "Search by Package Identifier",
            description: "Search for packages by their unique package identifier",
            params: vec![QueryParam {
                name: "identifier",
                description: "Package identifier to search for",
            }],
            success: search_results(),
            error: json!({ "error": "Query parameter 'identifier' is required" }),
        },
        EndpointDoc {
            id: "publisher",
            method: "GET",
            path: "/api/v1/publisher",
            title: "Search by Publisher",
            description: "Search for packages by their publisher name",
            params: vec![QueryParam {
                name: "publisher",
                description: "Publisher name to search for",
            }],
            success: search_results(),
            error: json!({ "error": "Query parameter 'publisher' is required" }),
        },
    ]
}

/// Look up one endpoint by its identifier.
pub fn find(id: &str) -> Option<EndpointDoc> {
    catalog().into_iter().find(|e| e.id == id)
}

/// Example curl invocation for an endpoint, with placeholder parameter
/// values and the API-key header.
pub fn curl_example(endpoint: &EndpointDoc) -> String {
    let query = if endpoint.params.is_empty() {
        String::new()
    } else {
        let pairs: Vec<String> = endpoint
            .params
            .iter()
            .map(|p| format!("{}=example", p.name))
            .collect();
        format!("?{}", pairs.join("&"))
    };
    format!(
        "curl -X {} \"{BASE_URL}{}{query}\" \\\n  -H \"X-API-Key: your-api-key-here\"",
        endpoint.method, endpoint.path
    )
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

fn heading(text: &str) -> StyledLine {
    StyledLine::new(vec![StyledSegment::new(text, TokenKind::Keyword)])
}

fn label(text: &str) -> StyledLine {
    StyledLine::new(vec![StyledSegment::new(text, TokenKind::Key)])
}

fn blank() -> StyledLine {
    StyledLine::default()
}

fn compact_json(value: &Value) -> Vec<StyledLine> {
    JsonHighlighter::new(HighlightOptions::compact()).render(value)
}

/// Overview section: what the API is, base URL, version.
pub fn render_overview() -> Vec<StyledLine> {
    let mut lines = vec![
        heading("API Documentation"),
        StyledLine::plain(
            "The Winget Package API provides fast and reliable access to Windows Package Manager package information.",
        ),
        blank(),
    ];
    let mut base = StyledLine::plain("Base URL: ");
    base.segments.extend(inline_str(BASE_URL).segments);
    lines.push(base);
    lines.push(StyledLine::plain(&format!("API version: {API_VERSION}")));
    lines
}

/// Authentication section: the X-API-Key header.
pub fn render_authentication() -> Vec<StyledLine> {
    let mut lines = vec![
        heading("Authentication"),
        StyledLine::plain(
            "All API requests require authentication using an API key passed in the request header.",
        ),
        blank(),
    ];
    lines.extend(
        CodeBlock::new("X-API-Key: your-api-key-here", "http")
            .with_title("Example Request Header")
            .render(),
    );
    lines
}

/// Rate-limiting section: limit, error code, tracking, sample body.
pub fn render_rate_limiting() -> Vec<StyledLine> {
    let mut lines = vec![
        heading("Rate Limiting"),
        StyledLine::plain(&format!(
            "{RATE_LIMIT_PER_SECOND} requests per second per client, tracked by IP address. \
             Exceeding the limit yields 429 Too Many Requests:"
        )),
        blank(),
    ];
    lines.extend(compact_json(&json!({ "error": "Rate limit exceeded" })));
    lines
}

/// Error-handling section: the documented status codes and their bodies.
pub fn render_error_handling() -> Vec<StyledLine> {
    let cases: [(&str, &str, Value); 4] = [
        (
            "200 - Success",
            "Request completed successfully",
            json!({ "message": "pong" }),
        ),
        (
            "400 - Bad Request",
            "Missing or invalid parameters",
            json!({ "error": "Query parameter 'q' is required" }),
        ),
        (
            "401 - Unauthorized",
            "Invalid or missing API key",
            json!({ "error": "Invalid API key" }),
        ),
        (
            "429 - Too Many Requests",
            "Rate limit exceeded",
            json!({ "error": "Rate limit exceeded" }),
        ),
    ];

    let mut lines = vec![heading("Error Handling")];
    lines.push(StyledLine::plain(
        "The API uses conventional HTTP response codes to indicate success or failure.",
    ));
    for (title, description, body) in cases {
        lines.push(blank());
        lines.push(label(title));
        lines.push(StyledLine::plain(description));
        lines.extend(compact_json(&body));
    }
    lines
}

/// One endpoint: header, parameters, example request, sample responses.
pub fn render_endpoint(endpoint: &EndpointDoc) -> Vec<StyledLine> {
    let mut lines = vec![StyledLine::new(vec![
        StyledSegment::new(endpoint.method, TokenKind::Keyword),
        StyledSegment::new(" ", TokenKind::Text),
        StyledSegment::new(endpoint.path, TokenKind::Key),
        StyledSegment::new("  -  ", TokenKind::Punct),
        StyledSegment::new(endpoint.title, TokenKind::Text),
    ])];
    lines.push(StyledLine::plain(endpoint.description));

    if !endpoint.params.is_empty() {
        lines.push(label("Parameters"));
        for param in &endpoint.params {
            lines.push(StyledLine::new(vec![
                StyledSegment::new("  ", TokenKind::Text),
                StyledSegment::new(param.name, TokenKind::Key),
                StyledSegment::new(" (string, required)  -  ", TokenKind::Punct),
                StyledSegment::new(param.description, TokenKind::Text),
            ]));
        }
    }

    lines.push(blank());
    lines.push(label("Example request"));
    lines.extend(CodeBlock::new(&curl_example(endpoint), "bash").render());

    lines.push(blank());
    lines.push(label("Success response"));
    lines.extend(compact_json(&endpoint.success));

    lines.push(blank());
    lines.push(label("Error response"));
    lines.extend(compact_json(&endpoint.error));
    lines
}

/// The whole documentation page: every section, then every endpoint.
pub fn render_all() -> Vec<StyledLine> {
    let mut lines = render_overview();
    lines.push(blank());
    lines.extend(render_authentication());
    lines.push(blank());
    lines.extend(render_rate_limiting());
    lines.push(blank());
    lines.extend(render_error_handling());
    for endpoint in catalog() {
        lines.push(blank());
        lines.extend(render_endpoint(&endpoint));
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::highlight::to_plain;

    #[test]
    fn test_catalog_contents() {
        let catalog = catalog();
        assert_eq!(catalog.len(), 5);
        let ids: Vec<&str> = catalog.iter().map(|e| e.id).collect();
        assert_eq!(
            ids,
            vec!["ping", "search", "packagename", "packageidentifier", "publisher"]
        );
        // Every non-ping endpoint requires exactly one query parameter.
        for endpoint in &catalog[1..] {
            assert_eq!(endpoint.params.len(), 1);
            assert_eq!(endpoint.method, "GET");
            assert_eq!(endpoint.success["results"].as_array().unwrap().len(), 1);
        }
    }

    #[test]
    fn test_find_endpoint() {
        assert_eq!(find("search").unwrap().path, "/api/v1/search");
        assert!(find("nope").is_none());
    }

    #[test]
    fn test_curl_example_search() {
        let example = curl_example(&find("search").unwrap());
        assert!(example.contains("curl -X GET"));
        assert!(example.contains("https://api.winget.dev/api/v1/search?q=example"));
        assert!(example.contains("-H \"X-API-Key: your-api-key-here\""));
    }

    #[test]
    fn test_curl_example_ping_has_no_query() {
        let example = curl_example(&find("ping").unwrap());
        assert!(example.contains("/api/v1/ping\""));
        assert!(!example.contains('?'));
    }

    #[test]
    fn test_render_all_covers_sections() {
        let text = to_plain(&render_all());
        assert!(text.contains("API Documentation"));
        assert!(text.contains("X-API-Key: your-api-key-here"));
        assert!(text.contains("Rate limit exceeded"));
        assert!(text.contains("\"Microsoft.VisualStudioCode\""));
        assert!(text.contains("429"));
    }

    #[test]
    fn test_render_endpoint_highlights_method() {
        let lines = render_endpoint(&find("ping").unwrap());
        let first = &lines[0].segments[0];
        assert_eq!(first.text, "GET");
        assert_eq!(first.kind, TokenKind::Keyword);
    }
}
