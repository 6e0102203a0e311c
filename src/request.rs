//! Fixed vocabularies describing network requests: the resource types and HTTP methods a
//! declarativeNetRequest condition can refer to.

use std::collections::HashMap;
use std::fmt;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// The type of resource requested from the URL endpoint, named the way the browser's request
/// filtering engine names it.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceType {
    MainFrame,
    SubFrame,
    Stylesheet,
    Script,
    Image,
    Font,
    Object,
    Xmlhttprequest,
    Ping,
    CspReport,
    Media,
    Websocket,
    Webtransport,
    Webbundle,
    Other,
}

/// Every resource type the engine knows about, in its canonical order. Negated type options are
/// resolved against this list.
pub const ALL_RESOURCE_TYPES: [ResourceType; 15] = [
    ResourceType::MainFrame,
    ResourceType::SubFrame,
    ResourceType::Stylesheet,
    ResourceType::Script,
    ResourceType::Image,
    ResourceType::Font,
    ResourceType::Object,
    ResourceType::Xmlhttprequest,
    ResourceType::Ping,
    ResourceType::CspReport,
    ResourceType::Media,
    ResourceType::Websocket,
    ResourceType::Webtransport,
    ResourceType::Webbundle,
    ResourceType::Other,
];

/// Filter list option names that select a resource type.
static RESOURCE_TYPE_ALIASES: Lazy<HashMap<&'static str, ResourceType>> = Lazy::new(|| {
    HashMap::from([
        ("script", ResourceType::Script),
        ("image", ResourceType::Image),
        ("img", ResourceType::Image),
        ("stylesheet", ResourceType::Stylesheet),
        ("xmlhttprequest", ResourceType::Xmlhttprequest),
        ("xhr", ResourceType::Xmlhttprequest),
        ("subdocument", ResourceType::SubFrame),
        ("sub_frame", ResourceType::SubFrame),
        ("document", ResourceType::MainFrame),
        ("main_frame", ResourceType::MainFrame),
        ("websocket", ResourceType::Websocket),
        ("media", ResourceType::Media),
        ("font", ResourceType::Font),
        ("ping", ResourceType::Ping),
        ("other", ResourceType::Other),
    ])
});

impl ResourceType {
    /// Looks up a filter list option name (`xhr`, `subdocument`, ...). Matching is
    /// case-sensitive.
    pub fn from_option(option: &str) -> Option<ResourceType> {
        RESOURCE_TYPE_ALIASES.get(option).copied()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceType::MainFrame => "main_frame",
            ResourceType::SubFrame => "sub_frame",
            ResourceType::Stylesheet => "stylesheet",
            ResourceType::Script => "script",
            ResourceType::Image => "image",
            ResourceType::Font => "font",
            ResourceType::Object => "object",
            ResourceType::Xmlhttprequest => "xmlhttprequest",
            ResourceType::Ping => "ping",
            ResourceType::CspReport => "csp_report",
            ResourceType::Media => "media",
            ResourceType::Websocket => "websocket",
            ResourceType::Webtransport => "webtransport",
            ResourceType::Webbundle => "webbundle",
            ResourceType::Other => "other",
        }
    }
}

impl fmt::Display for ResourceType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// HTTP methods supported in `requestMethods` conditions.
///
/// Declaration order is lexicographic, so sorting by `Ord` matches sorting the uppercase tokens.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RequestMethod {
    Connect,
    Delete,
    Get,
    Head,
    Options,
    Patch,
    Post,
    Put,
}

impl RequestMethod {
    /// Parses a method token from a `$method=` option, ignoring case. Unsupported methods yield
    /// `None`.
    pub fn from_token(token: &str) -> Option<RequestMethod> {
        match token.to_ascii_lowercase().as_str() {
            "connect" => Some(RequestMethod::Connect),
            "delete" => Some(RequestMethod::Delete),
            "get" => Some(RequestMethod::Get),
            "head" => Some(RequestMethod::Head),
            "options" => Some(RequestMethod::Options),
            "patch" => Some(RequestMethod::Patch),
            "post" => Some(RequestMethod::Post),
            "put" => Some(RequestMethod::Put),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RequestMethod::Connect => "CONNECT",
            RequestMethod::Delete => "DELETE",
            RequestMethod::Get => "GET",
            RequestMethod::Head => "HEAD",
            RequestMethod::Options => "OPTIONS",
            RequestMethod::Patch => "PATCH",
            RequestMethod::Post => "POST",
            RequestMethod::Put => "PUT",
        }
    }
}

impl fmt::Display for RequestMethod {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
#[path = "../tests/unit/request.rs"]
mod unit_tests;
