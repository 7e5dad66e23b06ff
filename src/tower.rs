//! Tower integration for guard-rail.
//!
//! [`GuardLayer`] validates every request with a [`Guard`] before it reaches
//! the wrapped service. A request that fails validation resolves immediately
//! to `Err(S::Error::from(BusinessError))`; the inner service is never called
//! for it.
//!
//! # Feature Flag
//!
//! Requires the `tower` feature:
//!
//! ```toml
//! [dependencies]
//! guard-rail = { version = "0.3", features = ["tower"] }
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use guard_rail::tower::GuardLayer;
//! use tower::ServiceBuilder;
//!
//! let service = ServiceBuilder::new()
//!     .layer(GuardLayer::new(guard))
//!     .service(register_user);
//! ```

use core::future::Future;
use core::pin::Pin;
use core::task::{Context, Poll};
use std::sync::Arc;

use futures_core::future::FusedFuture;
use pin_project_lite::pin_project;
use tower::{Layer, Service};

use crate::guard::{Guard, Invocation};
use crate::types::BusinessError;

/// A request that can describe itself as a guarded [`Invocation`].
pub trait GuardedRequest {
    fn invocation(&self) -> Invocation<'_>;
}

/// A Tower [`Layer`] that validates requests before the wrapped service runs.
#[derive(Clone, Debug)]
pub struct GuardLayer {
    guard: Arc<Guard>,
}

impl GuardLayer {
    #[inline]
    pub fn new(guard: Guard) -> Self {
        Self { guard: Arc::new(guard) }
    }

    /// Shares one guard between several layers.
    #[inline]
    pub fn shared(guard: Arc<Guard>) -> Self {
        Self { guard }
    }

    #[inline]
    pub fn guard(&self) -> &Guard {
        &self.guard
    }
}

impl<S> Layer<S> for GuardLayer {
    type Service = GuardService<S>;

    #[inline]
    fn layer(&self, inner: S) -> Self::Service {
        GuardService { inner, guard: Arc::clone(&self.guard) }
    }
}

/// A Tower [`Service`] that rejects invalid requests.
///
/// Created by [`GuardLayer`].
#[derive(Clone, Debug)]
pub struct GuardService<S> {
    inner: S,
    guard: Arc<Guard>,
}

impl<S> GuardService<S> {
    #[inline]
    pub fn new(inner: S, guard: Arc<Guard>) -> Self {
        Self { inner, guard }
    }

    #[inline]
    pub const fn inner(&self) -> &S {
        &self.inner
    }

    #[inline]
    pub fn inner_mut(&mut self) -> &mut S {
        &mut self.inner
    }

    #[inline]
    pub fn into_inner(self) -> S {
        self.inner
    }

    #[inline]
    pub fn guard(&self) -> &Guard {
        &self.guard
    }
}

impl<S, Request> Service<Request> for GuardService<S>
where
    S: Service<Request>,
    S::Error: From<BusinessError>,
    Request: GuardedRequest,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = GuardFuture<S::Future, S::Error>;

    #[inline]
    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, request: Request) -> Self::Future {
        let verdict = self.guard.validate(&request.invocation());
        match verdict {
            Ok(()) => GuardFuture::inner(self.inner.call(request)),
            Err(error) => {
                tracing::debug!(errors = error.len(), "request rejected");
                GuardFuture::rejected(S::Error::from(error))
            },
        }
    }
}

pin_project! {
    /// Future returned by [`GuardService`].
    #[must_use = "futures do nothing unless polled"]
    #[project = GuardFutureProj]
    pub enum GuardFuture<F, E> {
        Inner {
            #[pin]
            future: F,
        },
        Rejected {
            error: Option<E>,
        },
    }
}

impl<F, E> GuardFuture<F, E> {
    #[inline]
    fn inner(future: F) -> Self {
        Self::Inner { future }
    }

    #[inline]
    fn rejected(error: E) -> Self {
        Self::Rejected { error: Some(error) }
    }
}

impl<F, T, E> Future for GuardFuture<F, E>
where
    F: Future<Output = Result<T, E>>,
{
    type Output = Result<T, E>;

    #[inline]
    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        match self.project() {
            GuardFutureProj::Inner { future } => future.poll(cx),
            GuardFutureProj::Rejected { error } => match error.take() {
                Some(error) => Poll::Ready(Err(error)),
                None => Poll::Pending,
            },
        }
    }
}

impl<F, T, E> FusedFuture for GuardFuture<F, E>
where
    F: FusedFuture<Output = Result<T, E>>,
{
    #[inline]
    fn is_terminated(&self) -> bool {
        match self {
            Self::Inner { future } => future.is_terminated(),
            Self::Rejected { error } => error.is_none(),
        }
    }
}

/// Extension trait for wrapping services with a [`Guard`].
pub trait ServiceGuardExt<Request>: Service<Request> + Sized {
    /// Validates each request with `guard` before calling this service.
    ///
    /// ```rust,ignore
    /// use guard_rail::tower::ServiceGuardExt;
    ///
    /// let guarded = register_user.guarded(guard);
    /// ```
    fn guarded(self, guard: Guard) -> GuardService<Self> {
        GuardService::new(self, Arc::new(guard))
    }
}

impl<S, Request> ServiceGuardExt<Request> for S where S: Service<Request> {}
