use super::ApplicationEnv;
use tower_http::{
    limit::RequestBodyLimitLayer,
    trace::{HttpMakeClassifier, TraceLayer},
};

pub struct ApplicationMiddleware {
    pub body_limit: RequestBodyLimitLayer,
    pub trace: TraceLayer<HttpMakeClassifier>,
}

impl ApplicationMiddleware {
    pub fn new(max_http_content_len: usize) -> Self {
        let body_limit = RequestBodyLimitLayer::new(max_http_content_len);
        let trace = TraceLayer::new_for_http();

        Self { body_limit, trace }
    }
}

pub fn create_middleware(env: &ApplicationEnv) -> ApplicationMiddleware {
    ApplicationMiddleware::new(env.max_http_content_len)
}
