use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use std::fmt;

/// Characters a browser's `encodeURIComponent` leaves untouched
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encode a path segment or query value
pub fn encode_component(value: &str) -> String {
    utf8_percent_encode(value, URI_COMPONENT).to_string()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Endpoints of the activities backend
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiRoute {
    /// `GET /activities`
    ListActivities,
    /// `POST /activities/{name}/signup?email=`
    Signup { activity: String, email: String },
    /// `DELETE /activities/{name}/unregister?email=`
    Unregister { activity: String, email: String },
}

impl ApiRoute {
    pub fn method(&self) -> HttpMethod {
        match self {
            ApiRoute::ListActivities => HttpMethod::Get,
            ApiRoute::Signup { .. } => HttpMethod::Post,
            ApiRoute::Unregister { .. } => HttpMethod::Delete,
        }
    }

    /// Path and query, percent-encoded
    pub fn path(&self) -> String {
        match self {
            ApiRoute::ListActivities => "/activities".to_string(),
            ApiRoute::Signup { activity, email } => format!(
                "/activities/{}/signup?email={}",
                encode_component(activity),
                encode_component(email)
            ),
            ApiRoute::Unregister { activity, email } => format!(
                "/activities/{}/unregister?email={}",
                encode_component(activity),
                encode_component(email)
            ),
        }
    }

    /// Absolute (or same-origin, when `base_url` is empty) request URL
    pub fn url(&self, base_url: &str) -> String {
        format!("{}{}", base_url.trim_end_matches('/'), self.path())
    }
}

impl fmt::Display for ApiRoute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.method(), self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_component_matches_browser() {
        assert_eq!(encode_component("Chess Club"), "Chess%20Club");
        assert_eq!(encode_component("a@b.com"), "a%40b.com");
        assert_eq!(encode_component("a+b/c?d&e=f#g"), "a%2Bb%2Fc%3Fd%26e%3Df%23g");
        assert_eq!(encode_component("-_.!~*'()"), "-_.!~*'()");
        assert_eq!(encode_component("Café"), "Caf%C3%A9");
    }

    #[test]
    fn test_list_route() {
        let route = ApiRoute::ListActivities;
        assert_eq!(route.method(), HttpMethod::Get);
        assert_eq!(route.path(), "/activities");
    }

    #[test]
    fn test_signup_route() {
        let route = ApiRoute::Signup {
            activity: "Chess Club".to_string(),
            email: "new@mergington.edu".to_string(),
        };
        assert_eq!(route.method(), HttpMethod::Post);
        assert_eq!(
            route.path(),
            "/activities/Chess%20Club/signup?email=new%40mergington.edu"
        );
    }

    #[test]
    fn test_unregister_route() {
        let route = ApiRoute::Unregister {
            activity: "Chess Club".to_string(),
            email: "a@b.com".to_string(),
        };
        assert_eq!(
            route.to_string(),
            "DELETE /activities/Chess%20Club/unregister?email=a%40b.com"
        );
    }

    #[test]
    fn test_url_joins_base() {
        let route = ApiRoute::ListActivities;
        assert_eq!(route.url(""), "/activities");
        assert_eq!(route.url("http://localhost:8000/"), "http://localhost:8000/activities");
    }
}
