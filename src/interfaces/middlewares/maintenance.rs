use actix_web::{
    body::BoxBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    web, Error, HttpMessage, HttpResponse,
};
use futures_util::future::{ok, LocalBoxFuture, Ready};
use std::{rc::Rc, task::{Context, Poll}};

use crate::{
    use_cases::{
        extractors::{extract_bearer, SiteContext},
        maintenance::{is_exempt_path, should_show_maintenance, MaintenanceView},
    },
    AppState,
};

/// Fetches site settings and the caller's session together, then either
/// answers with the maintenance view or hands the settings to the handler
/// through `SiteContext`.
pub struct MaintenanceMiddleware;

impl<S> Transform<S, ServiceRequest> for MaintenanceMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<BoxBody>, Error = Error> + 'static,
{
    type Response = ServiceResponse<BoxBody>;
    type Error = Error;
    type InitError = ();
    type Transform = MaintenanceMiddlewareService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ok(MaintenanceMiddlewareService {
            service: Rc::new(service),
        })
    }
}

pub struct MaintenanceMiddlewareService<S> {
    service: Rc<S>,
}

impl<S> Service<ServiceRequest> for MaintenanceMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<BoxBody>, Error = Error> + 'static,
{
    type Response = ServiceResponse<BoxBody>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, ctx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);

        Box::pin(async move {
            if req.method().as_str() == "OPTIONS" || is_exempt_path(req.path()) {
                return service.call(req).await;
            }

            let Some(state) = req.app_data::<web::Data<AppState>>().cloned() else {
                tracing::error!("AppState missing in maintenance middleware");
                return service.call(req).await;
            };

            let token = extract_bearer(req.headers());
            let (settings, session) = futures::join!(
                state.content.site_settings(),
                state.auth_handler.resolve(token.as_ref()),
            );

            let flag = settings.as_ref().is_some_and(|s| s.maintenance_mode);
            let has_session = session.session().is_some();

            if should_show_maintenance(flag, has_session, req.path()) {
                tracing::info!(path = %req.path(), "Serving maintenance view");
                let view = MaintenanceView::new(settings.and_then(|s| s.site_title));
                let response = HttpResponse::ServiceUnavailable()
                    .insert_header(("Retry-After", "3600"))
                    .json(view);
                return Ok(req.into_response(response));
            }

            req.extensions_mut().insert(SiteContext(settings));
            service.call(req).await
        })
    }
}
