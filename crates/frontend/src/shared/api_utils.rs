//! API base URL resolution

/// Backend port used when no explicit URL was configured at build time
const DEFAULT_API_PORT: u16 = 8000;

/// Get the base URL for API requests
///
/// `GOCHICKEN_API_URL` set at build time wins. Otherwise the URL is derived
/// from the current window location on port 8000.
///
/// # Returns
/// - API base URL like "http://localhost:8000", without a trailing slash
/// - Empty string if window is not available
pub fn api_base() -> String {
    if let Some(url) = option_env!("GOCHICKEN_API_URL") {
        return url.trim_end_matches('/').to_string();
    }
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:{}", protocol, hostname, DEFAULT_API_PORT)
}

/// Joins base, path and an already encoded query string
pub fn build_url(base: &str, path: &str, query: &str) -> String {
    if query.is_empty() {
        format!("{}{}", base, path)
    } else {
        format!("{}{}?{}", base, path, query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_url() {
        assert_eq!(
            build_url("http://localhost:8000", "/api/produk", ""),
            "http://localhost:8000/api/produk"
        );
        assert_eq!(
            build_url("", "/api/transaksi", "page=2&per_page=10"),
            "/api/transaksi?page=2&per_page=10"
        );
    }
}
