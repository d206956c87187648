use std::{future::Ready, rc::Rc};

use actix_cors::Cors;
use actix_web::{
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    http::header::{HeaderName, HeaderValue},
    Error, HttpMessage,
};
use futures::future::LocalBoxFuture;
use regex::Regex;
use uuid::Uuid;

use crate::errors::{AppError, AppResult};

pub const REQUEST_ID_HEADER: &str = "x-request-id";

#[derive(Clone, Debug)]
pub struct RequestId(pub String);

/// Tags every request with an id, echoes it in `x-request-id` and logs the
/// outcome. A usable incoming `x-request-id` is kept, otherwise a v4 uuid is minted.
pub struct RequestIdMiddleware;

impl<S, B> Transform<S, ServiceRequest> for RequestIdMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = RequestIdMiddlewareService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        std::future::ready(Ok(RequestIdMiddlewareService {
            service: Rc::new(service),
        }))
    }
}

pub struct RequestIdMiddlewareService<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for RequestIdMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let request_id = incoming_request_id(&req).unwrap_or_else(|| Uuid::new_v4().to_string());
        req.extensions_mut().insert(RequestId(request_id.clone()));

        let method = req.method().clone();
        let path = req.path().to_string();
        let service = Rc::clone(&self.service);

        Box::pin(async move {
            let mut res = service.call(req).await?;
            log::debug!("{} {} -> {} [{}]", method, path, res.status(), request_id);

            if let Ok(value) = HeaderValue::from_str(&request_id) {
                res.headers_mut()
                    .insert(HeaderName::from_static(REQUEST_ID_HEADER), value);
            }
            Ok(res)
        })
    }
}

const MAX_REQUEST_ID_LEN: usize = 128;

fn incoming_request_id(req: &ServiceRequest) -> Option<String> {
    let value = req.headers().get(REQUEST_ID_HEADER)?.to_str().ok()?.trim();
    if value.is_empty() || value.len() > MAX_REQUEST_ID_LEN {
        return None;
    }
    Some(value.to_string())
}

pub fn get_request_id(req: &actix_web::HttpRequest) -> Option<String> {
    req.extensions().get::<RequestId>().map(|id| id.0.clone())
}

/// Compiles the configured origin pattern. The pattern must match the whole
/// `Origin` header.
pub fn compile_origin_pattern(pattern: &str) -> AppResult<Regex> {
    Regex::new(&format!("^(?:{})$", pattern))
        .map_err(|e| AppError::InternalError(format!("Invalid CORS origin pattern: {}", e)))
}

pub fn cors(origin_pattern: Regex) -> Cors {
    Cors::default()
        .allowed_origin_fn(move |origin, _req_head| {
            origin
                .to_str()
                .map(|origin| origin_pattern.is_match(origin))
                .unwrap_or(false)
        })
        .allow_any_method()
        .allow_any_header()
        .supports_credentials()
}

#[cfg(test)]
mod tests {
    use actix_web::{get, test, App, HttpRequest, HttpResponse};

    use super::*;
    use crate::config::DEFAULT_CORS_ORIGIN_REGEX;

    #[get("/echo-id")]
    async fn echo_id(req: HttpRequest) -> HttpResponse {
        HttpResponse::Ok().body(get_request_id(&req).unwrap_or_default())
    }

    #[actix_web::test]
    async fn test_request_id_is_exposed_to_handlers_and_response() {
        let app = test::init_service(App::new().wrap(RequestIdMiddleware).service(echo_id)).await;

        let req = test::TestRequest::get().uri("/echo-id").to_request();
        let resp = test::call_service(&app, req).await;

        let header = resp
            .headers()
            .get(REQUEST_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
            .expect("request id header should be set");
        let body = test::read_body(resp).await;

        assert_eq!(body, header.as_bytes());
        assert!(Uuid::parse_str(&header).is_ok());
    }

    #[actix_web::test]
    async fn test_cors_allows_matching_origin_only() {
        let pattern = compile_origin_pattern(DEFAULT_CORS_ORIGIN_REGEX).unwrap();
        let app = test::init_service(App::new().wrap(cors(pattern)).service(echo_id)).await;

        let allowed = test::TestRequest::get()
            .uri("/echo-id")
            .insert_header(("Origin", "https://examifyr.vercel.app"))
            .to_request();
        let resp = test::call_service(&app, allowed).await;
        assert_eq!(
            resp.headers()
                .get("access-control-allow-origin")
                .and_then(|v| v.to_str().ok()),
            Some("https://examifyr.vercel.app")
        );

        let denied = test::TestRequest::get()
            .uri("/echo-id")
            .insert_header(("Origin", "https://example.com"))
            .to_request();
        if let Ok(resp) = test::try_call_service(&app, denied).await {
            assert!(resp.headers().get("access-control-allow-origin").is_none());
        }
    }

    #[actix_web::test]
    async fn test_incoming_request_id_is_reused() {
        let app = test::init_service(App::new().wrap(RequestIdMiddleware).service(echo_id)).await;

        let req = test::TestRequest::get()
            .uri("/echo-id")
            .insert_header((REQUEST_ID_HEADER, "trace-abc-123"))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(
            resp.headers()
                .get(REQUEST_ID_HEADER)
                .and_then(|v| v.to_str().ok()),
            Some("trace-abc-123")
        );
        assert_eq!(test::read_body(resp).await, "trace-abc-123".as_bytes());
    }

    #[actix_web::test]
    async fn test_blank_incoming_request_id_is_replaced() {
        let app = test::init_service(App::new().wrap(RequestIdMiddleware).service(echo_id)).await;

        let req = test::TestRequest::get()
            .uri("/echo-id")
            .insert_header((REQUEST_ID_HEADER, "   "))
            .to_request();
        let resp = test::call_service(&app, req).await;

        let header = resp
            .headers()
            .get(REQUEST_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .expect("request id header should be set");
        assert!(Uuid::parse_str(header).is_ok());
    }
}
