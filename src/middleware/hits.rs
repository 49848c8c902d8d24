use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::task::{Context, Poll};

use actix_web::dev::{Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::Error;
use futures_util::future::{ready, Ready};

/// Process-wide count of file server hits. Individual increments and the
/// admin reset only need per-operation atomicity, so relaxed ordering is
/// enough.
#[derive(Debug, Default)]
pub struct HitCounter(AtomicUsize);

impl HitCounter {
    pub fn inc(&self) {
        self.0.fetch_add(1, Ordering::Relaxed);
    }

    pub fn load(&self) -> usize {
        self.0.load(Ordering::Relaxed)
    }

    pub fn reset(&self) {
        self.0.store(0, Ordering::Relaxed);
    }
}

/// Middleware that bumps the counter for every request entering the scope
/// it wraps, misses included, then hands the request on untouched.
pub struct HitCount {
    hits: Arc<HitCounter>,
}

impl HitCount {
    pub fn new(hits: Arc<HitCounter>) -> Self {
        HitCount { hits }
    }
}

impl<S, B> Transform<S, ServiceRequest> for HitCount
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = HitCountMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(HitCountMiddleware {
            service,
            hits: Arc::clone(&self.hits),
        }))
    }
}

pub struct HitCountMiddleware<S> {
    service: S,
    hits: Arc<HitCounter>,
}

impl<S, B> Service<ServiceRequest> for HitCountMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = S::Future;

    fn poll_ready(&self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(cx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        self.hits.inc();
        self.service.call(req)
    }
}
