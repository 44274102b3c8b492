// Route exports
pub mod body;
pub mod chats;
pub mod health;
pub mod matches;
pub mod profile;
pub mod scores;
pub mod users;

use std::fmt;

use actix_web::{guard, web, HttpResponse, Resource, Route};

use crate::models::ErrorResponse;

/// HTTP methods served by the route table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteMethod {
    Get,
    Post,
    Put,
}

impl RouteMethod {
    /// Unbound route guarded by this method; GET routes also answer HEAD
    pub fn route(&self) -> Route {
        match self {
            RouteMethod::Get => web::route().guard(guard::Any(guard::Get()).or(guard::Head())),
            RouteMethod::Post => web::post(),
            RouteMethod::Put => web::put(),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RouteMethod::Get => "GET",
            RouteMethod::Post => "POST",
            RouteMethod::Put => "PUT",
        }
    }
}

impl fmt::Display for RouteMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Attaches a handler to a method-guarded route
pub type BindHandler = fn(Route) -> Route;

/// One entry of the route table; `:name` segments are path parameters
#[derive(Clone, Copy)]
pub struct RouteEntry {
    pub method: RouteMethod,
    pub path: &'static str,
    pub bind: BindHandler,
}

impl fmt::Debug for RouteEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RouteEntry")
            .field("method", &self.method)
            .field("path", &self.path)
            .finish()
    }
}

const fn entry(method: RouteMethod, path: &'static str, bind: BindHandler) -> RouteEntry {
    RouteEntry { method, path, bind }
}

/// Every endpoint the service answers, in registration order
pub const ROUTE_TABLE: &[RouteEntry] = &[
    entry(RouteMethod::Get, "/health", |r| r.to(health::health_check)),
    entry(RouteMethod::Get, "/api/users", |r| r.to(users::list_users)),
    entry(RouteMethod::Get, "/api/users/:id", |r| r.to(users::get_user)),
    entry(RouteMethod::Get, "/api/matches", |r| r.to(matches::list_matches)),
    entry(RouteMethod::Get, "/api/chats/:matchId/messages", |r| r.to(chats::list_messages)),
    entry(RouteMethod::Post, "/api/chats/:matchId/messages", |r| r.to(chats::send_message)),
    entry(RouteMethod::Put, "/api/profile", |r| r.to(profile::update_profile)),
    entry(RouteMethod::Get, "/api/trust-score", |r| r.to(scores::trust_score)),
    entry(RouteMethod::Get, "/api/heart-temperature", |r| r.to(scores::heart_temperature)),
];

/// Convert a `:name` path template into an actix `{name}` pattern
pub fn resource_pattern(path: &str) -> String {
    path.split('/')
        .map(|segment| match segment.strip_prefix(':') {
            Some(name) => format!("{{{}}}", name),
            None => segment.to_string(),
        })
        .collect::<Vec<_>>()
        .join("/")
}

// A path that matches with the wrong method is answered like an unknown path.
fn resource(path: &str) -> Resource {
    web::resource(resource_pattern(path)).default_service(web::to(not_found))
}

/// Register the route table, one resource per distinct path
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    let mut paths: Vec<&'static str> = Vec::new();
    for route in ROUTE_TABLE {
        if !paths.contains(&route.path) {
            paths.push(route.path);
        }
    }

    for path in paths {
        let resource = ROUTE_TABLE
            .iter()
            .filter(|route| route.path == path)
            .fold(resource(path), |resource, route| {
                resource.route((route.bind)(route.method.route()))
            });
        cfg.service(resource);
    }
}

/// Fallback for requests no route accepts
pub async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse::not_found())
}

/// Human-readable listing of the listening address and the route table
pub fn render_banner(port: u16) -> String {
    let rule = "========================================";
    let mut banner = format!(
        "\n{rule}\n✅ 백엔드 서버가 포트 {port}에서 실행 중입니다.\n   http://localhost:{port}\n{rule}\n\n사용 가능한 API 엔드포인트:\n"
    );

    for route in ROUTE_TABLE {
        banner.push_str(&format!(
            "  {:<4} http://localhost:{}{}\n",
            route.method, port, route.path
        ));
    }

    banner.push_str(&format!("\n{rule}\n"));
    banner
}
