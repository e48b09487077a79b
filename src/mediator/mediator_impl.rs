use super::error::{Error, ErrorKind};
use super::{AsyncMediator, AsyncRequestHandler, BoxFuture, Event, Request};
use parking_lot::RwLock;
use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;

type SharedRegistry<K, H> = Arc<RwLock<HashMap<K, H>>>;

// Stores an `Arc<dyn AsyncRequestHandler<Req, Res>>` erased to `Any`,
// recovered in `send` with the same `Req` and `Res`.
type ErasedRequestHandler = Arc<dyn Any + Send + Sync>;

type EventHandlerFn = Arc<dyn Fn(Box<dyn Any + Send>) -> BoxFuture<'static, ()> + Send + Sync>;

// A type may implement `Request` for several responses, so the handler is keyed by both.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq)]
struct HandlerKey {
    req_ty: TypeId,
    res_ty: TypeId,
}

impl HandlerKey {
    fn of<Req: 'static, Res: 'static>() -> Self {
        HandlerKey {
            req_ty: TypeId::of::<Req>(),
            res_ty: TypeId::of::<Res>(),
        }
    }
}

/// A default implementation for the [AsyncMediator] trait.
///
/// Clones share the same registries, which is what lets a handler hold a
/// mediator to publish events through.
#[derive(Clone, Default)]
pub struct DefaultAsyncMediator {
    request_handlers: SharedRegistry<HandlerKey, ErasedRequestHandler>,
    event_handlers: SharedRegistry<TypeId, Vec<EventHandlerFn>>,
}

impl DefaultAsyncMediator {
    /// Gets a [DefaultAsyncMediator] builder.
    pub fn builder() -> Builder {
        Builder::new()
    }
}

#[async_trait::async_trait]
impl AsyncMediator for DefaultAsyncMediator {
    async fn send<Req, Res>(&self, req: Req) -> crate::mediator::Result<Res>
    where
        Res: Send + 'static,
        Req: Request<Res> + Send + 'static,
    {
        let handler = {
            let handlers = self.request_handlers.read();
            handlers
                .get(&HandlerKey::of::<Req, Res>())
                .and_then(|h| h.downcast_ref::<Arc<dyn AsyncRequestHandler<Req, Res>>>())
                .cloned()
        };

        match handler {
            Some(handler) => Ok(handler.handle(req).await),
            None => Err(Error::new(
                ErrorKind::NotFound,
                std::any::type_name::<Req>(),
            )),
        }
    }

    async fn publish<E>(&self, event: E) -> crate::mediator::Result<()>
    where
        E: Event + Sync + Send + 'static,
    {
        let handlers = self
            .event_handlers
            .read()
            .get(&TypeId::of::<E>())
            .cloned()
            .unwrap_or_default();

        for handler in handlers {
            handler(Box::new(event.clone())).await;
        }

        Ok(())
    }
}

/// A builder for the [DefaultAsyncMediator].
pub struct Builder {
    inner: DefaultAsyncMediator,
}

impl Builder {
    /// Constructs a new `Builder`.
    pub fn new() -> Self {
        Self {
            inner: DefaultAsyncMediator::default(),
        }
    }

    /// Registers a request handler, replacing any previous handler for the same request.
    pub fn add_handler<Req, Res, H>(self, handler: H) -> Self
    where
        Req: Request<Res> + Send + 'static,
        Res: Send + 'static,
        H: AsyncRequestHandler<Req, Res> + 'static,
    {
        let handler: Arc<dyn AsyncRequestHandler<Req, Res>> = Arc::new(handler);
        self.inner
            .request_handlers
            .write()
            .insert(HandlerKey::of::<Req, Res>(), Arc::new(handler));

        self
    }

    /// Register a request handler using a copy of the mediator.
    pub fn add_handler_deferred<Req, Res, H, F>(self, f: F) -> Self
    where
        Req: Request<Res> + Send + 'static,
        Res: Send + 'static,
        H: AsyncRequestHandler<Req, Res> + 'static,
        F: FnOnce(DefaultAsyncMediator) -> H,
    {
        let handler = f(self.inner.clone());
        self.add_handler(handler)
    }

    /// Registers an event handler from a function.
    pub fn subscribe_fn<E, H, F>(self, handler: H) -> Self
    where
        E: Event + Send + 'static,
        H: Fn(E) -> F + Send + Sync + 'static,
        F: Future<Output = ()> + Send + 'static,
    {
        let f: EventHandlerFn = Arc::new(move |event: Box<dyn Any + Send>| -> BoxFuture<'static, ()> {
            match event.downcast::<E>() {
                Ok(event) => Box::pin(handler(*event)),
                Err(_) => Box::pin(async {}),
            }
        });

        self.inner
            .event_handlers
            .write()
            .entry(TypeId::of::<E>())
            .or_default()
            .push(f);

        self
    }

    /// Builds the `DefaultAsyncMediator`.
    pub fn build(self) -> DefaultAsyncMediator {
        self.inner
    }
}

impl Default for Builder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
fn _dummy() {
    fn assert_send_sync<T: Send + Sync>(_: T) {}
    assert_send_sync(DefaultAsyncMediator::builder().build());
}

#[cfg(test)]
mod test {
    use crate::mediator::{
        AsyncMediator, AsyncRequestHandler, DefaultAsyncMediator, ErrorKind, Event, Request,
    };
    use std::marker::PhantomData;
    use std::sync::atomic::{AtomicI64, Ordering};
    use std::sync::Arc;

    #[tokio::test(flavor = "multi_thread")]
    async fn send_test() {
        struct WaitAndGetRequest<T>(T);
        impl<T: Send> Request<T> for WaitAndGetRequest<T> {}

        struct WaitAndGetRequestHandler<T>(PhantomData<fn() -> T>);

        #[async_trait::async_trait]
        impl<T: Send + 'static> AsyncRequestHandler<WaitAndGetRequest<T>, T>
            for WaitAndGetRequestHandler<T>
        {
            async fn handle(&self, req: WaitAndGetRequest<T>) -> T {
                tokio::time::sleep(std::time::Duration::from_millis(10)).await;
                req.0
            }
        }

        let mediator = DefaultAsyncMediator::builder()
            .add_handler(WaitAndGetRequestHandler::<i32>(PhantomData))
            .add_handler(WaitAndGetRequestHandler::<String>(PhantomData))
            .build();

        assert_eq!(mediator.send(WaitAndGetRequest(1)).await.unwrap(), 1);
        assert_eq!(
            mediator
                .send(WaitAndGetRequest("hello".to_owned()))
                .await
                .unwrap(),
            "hello".to_owned()
        );
    }

    #[tokio::test]
    async fn send_without_handler_test() {
        struct Unhandled;
        impl Request<()> for Unhandled {}

        let mediator = DefaultAsyncMediator::builder().build();
        let err = mediator.send(Unhandled).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }

    #[tokio::test]
    async fn publish_test() {
        #[derive(Clone)]
        struct IncEvent(i64);
        impl Event for IncEvent {}

        #[derive(Clone)]
        struct DecEvent(i64);
        impl Event for DecEvent {}

        let value = Arc::new(AtomicI64::new(0));
        let inc = value.clone();
        let dec = value.clone();

        let mediator = DefaultAsyncMediator::builder()
            .subscribe_fn(move |event: IncEvent| {
                let inc = inc.clone();
                async move {
                    inc.fetch_add(event.0, Ordering::SeqCst);
                }
            })
            .subscribe_fn(move |event: DecEvent| {
                let dec = dec.clone();
                async move {
                    dec.fetch_sub(event.0, Ordering::SeqCst);
                }
            })
            .build();

        mediator.publish(IncEvent(1)).await.unwrap();
        mediator.publish(IncEvent(2)).await.unwrap();
        mediator.publish(IncEvent(3)).await.unwrap();
        mediator.publish(DecEvent(2)).await.unwrap();

        assert_eq!(value.load(Ordering::SeqCst), 4);
    }

    #[tokio::test]
    async fn deferred_handler_publishes_test() {
        #[derive(Clone)]
        struct Pinged;
        impl Event for Pinged {}

        struct Ping;
        impl Request<()> for Ping {}

        struct PingHandler(DefaultAsyncMediator);

        #[async_trait::async_trait]
        impl AsyncRequestHandler<Ping, ()> for PingHandler {
            async fn handle(&self, _: Ping) {
                self.0.publish(Pinged).await.unwrap();
            }
        }

        let count = Arc::new(AtomicI64::new(0));
        let counter = count.clone();

        let mediator = DefaultAsyncMediator::builder()
            .add_handler_deferred(PingHandler)
            .subscribe_fn(move |_: Pinged| {
                let counter = counter.clone();
                async move {
                    counter.fetch_add(1, Ordering::SeqCst);
                }
            })
            .build();

        mediator.send(Ping).await.unwrap();
        mediator.send(Ping).await.unwrap();

        assert_eq!(count.load(Ordering::SeqCst), 2);
    }
}
