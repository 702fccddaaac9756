//! Authentication route handlers
//!
//! This module contains all authentication-related endpoints:
//! - Account registration
//! - Login with username or email
//! - Refresh token rotation
//! - Logout

pub mod login;
pub mod logout;
pub mod refresh;
pub mod register;

use actix_web::HttpRequest;

/// Extracts the client IP address from the request.
///
/// Checks proxy headers first so the recorded address survives a reverse
/// proxy, then falls back to the peer address of the connection.
pub(crate) fn extract_client_ip(req: &HttpRequest) -> String {
    if let Some(forwarded_for) = req.headers().get("X-Forwarded-For") {
        if let Ok(forwarded_str) = forwarded_for.to_str() {
            // Take the first IP from the comma-separated list
            if let Some(ip) = forwarded_str.split(',').next() {
                return ip.trim().to_string();
            }
        }
    }

    if let Some(real_ip) = req.headers().get("X-Real-IP") {
        if let Ok(ip_str) = real_ip.to_str() {
            return ip_str.to_string();
        }
    }

    req.connection_info()
        .peer_addr()
        .unwrap_or("unknown")
        .to_string()
}
