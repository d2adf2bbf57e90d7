use preflight_cors::constants::method;
use preflight_cors::{
    AllowedHeaders, AllowedMethods, AllowedOrigins, CorsMode, CorsPolicy, ExposedHeaders,
    HeaderMap, PolicyOptions, Request,
};

pub struct RequestBuilder {
    method: String,
    url: String,
    headers: Vec<(String, String)>,
    mode: CorsMode,
}

impl RequestBuilder {
    pub fn new() -> Self {
        Self {
            method: method::GET.into(),
            url: "http://a.example/resource".into(),
            headers: Vec::new(),
            mode: CorsMode::Anonymous,
        }
    }

    pub fn method(mut self, method: impl Into<String>) -> Self {
        self.method = method.into();
        self
    }

    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    pub fn credentialed(mut self) -> Self {
        self.mode = CorsMode::UseCredentials;
        self
    }

    pub fn build(self) -> Request {
        let headers: HeaderMap = self.headers.into_iter().collect();
        Request::new(self.method, &self.url, headers, self.mode)
            .expect("test request should be well-formed")
    }
}

#[derive(Default)]
pub struct PolicyBuilder {
    origins: Option<AllowedOrigins>,
    methods: Option<AllowedMethods>,
    allowed_headers: Option<AllowedHeaders>,
    exposed_headers: Option<ExposedHeaders>,
    credentials: Option<bool>,
    max_age: Option<u64>,
}

impl PolicyBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn origins(mut self, origins: AllowedOrigins) -> Self {
        self.origins = Some(origins);
        self
    }

    pub fn methods<I, S>(mut self, methods: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.methods = Some(AllowedMethods::list(methods));
        self
    }

    pub fn allowed_headers(mut self, headers: AllowedHeaders) -> Self {
        self.allowed_headers = Some(headers);
        self
    }

    pub fn exposed_headers(mut self, headers: ExposedHeaders) -> Self {
        self.exposed_headers = Some(headers);
        self
    }

    pub fn credentials(mut self, enabled: bool) -> Self {
        self.credentials = Some(enabled);
        self
    }

    pub fn max_age(mut self, seconds: u64) -> Self {
        self.max_age = Some(seconds);
        self
    }

    pub fn build(self) -> CorsPolicy {
        let defaults = PolicyOptions::default();
        CorsPolicy::new(PolicyOptions {
            origins: self.origins.unwrap_or(defaults.origins),
            methods: self.methods.unwrap_or(defaults.methods),
            allowed_headers: self.allowed_headers.unwrap_or(defaults.allowed_headers),
            exposed_headers: self.exposed_headers.unwrap_or(defaults.exposed_headers),
            credentials: self.credentials.unwrap_or(defaults.credentials),
            max_age: self.max_age.or(defaults.max_age),
        })
        .expect("valid policy configuration")
    }
}

pub fn request() -> RequestBuilder {
    RequestBuilder::new()
}

pub fn policy() -> PolicyBuilder {
    PolicyBuilder::new()
}
