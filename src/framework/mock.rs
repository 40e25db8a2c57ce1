//! # Test doubles for services
//!
//! Two styles, both used by the crate's tests:
//!
//! - [`MockClient`]: queue expected requests with canned replies, hand the
//!   client to the code under test, then [`MockClient::verify`].
//! - [`create_mock_client`] plus `expect_*`: receive the raw request yourself
//!   and answer through its reply channel, for asserting on payloads.

use super::{ActorEntity, FrameworkError, ResourceClient, ResourceRequest, Response};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;

enum Expectation<T: ActorEntity> {
    Get {
        id: T::Id,
        response: Result<Option<T>, FrameworkError>,
    },
    List {
        response: Result<Vec<T>, FrameworkError>,
    },
    Action {
        id: T::Id,
        response: Result<T::ActionResult, FrameworkError>,
    },
}

impl<T: ActorEntity> Expectation<T> {
    fn name(&self) -> &'static str {
        match self {
            Expectation::Get { .. } => "get",
            Expectation::List { .. } => "list",
            Expectation::Action { .. } => "action",
        }
    }
}

type Queue<T> = Arc<Mutex<VecDeque<Expectation<T>>>>;

/// A service stand-in that answers from a queue of expectations, in order.
///
/// # Example
/// ```ignore
/// let mut users = MockClient::<User>::new();
/// users.expect_get(UserId(1)).return_ok(Some(alice));
/// let client = UserClient::new(users.client(), Duration::ZERO);
/// // ... exercise code that looks the user up ...
/// users.verify();
/// ```
///
/// A request that does not match the next expectation panics inside the mock
/// task; the caller then sees `FrameworkError::ActorDropped`.
pub struct MockClient<T: ActorEntity> {
    client: ResourceClient<T>,
    expectations: Queue<T>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: ActorEntity> Default for MockClient<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ActorEntity> MockClient<T> {
    /// Must be called inside a Tokio runtime; the mock answers from a task.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<ResourceRequest<T>>(100);
        let expectations: Queue<T> = Arc::new(Mutex::new(VecDeque::new()));
        let queue = expectations.clone();

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let next = queue.lock().unwrap().pop_front();
                answer(request, next);
            }
        });

        Self {
            client: ResourceClient::new(sender),
            expectations,
            _handle: handle,
        }
    }

    pub fn client(&self) -> ResourceClient<T> {
        self.client.clone()
    }

    pub fn expect_get(&mut self, id: T::Id) -> GetExpectation<T> {
        GetExpectation {
            id,
            queue: self.expectations.clone(),
        }
    }

    pub fn expect_list(&mut self) -> ListExpectation<T> {
        ListExpectation {
            queue: self.expectations.clone(),
        }
    }

    pub fn expect_action(&mut self, id: T::Id) -> ActionExpectation<T> {
        ActionExpectation {
            id,
            queue: self.expectations.clone(),
        }
    }

    /// Panics if any expectation was never consumed.
    pub fn verify(&self) {
        let remaining = self.expectations.lock().unwrap();
        if !remaining.is_empty() {
            let names: Vec<_> = remaining.iter().map(Expectation::name).collect();
            panic!("Not all expectations were met, remaining: {names:?}");
        }
    }
}

fn answer<T: ActorEntity>(request: ResourceRequest<T>, next: Option<Expectation<T>>) {
    match (request, next) {
        (ResourceRequest::Get { id, respond_to }, Some(Expectation::Get { id: want, response })) => {
            assert_eq!(id, want, "get for unexpected id");
            let _ = respond_to.send(response);
        }
        (ResourceRequest::List { respond_to }, Some(Expectation::List { response })) => {
            let _ = respond_to.send(response);
        }
        (
            ResourceRequest::Action { id, respond_to, .. },
            Some(Expectation::Action { id: want, response }),
        ) => {
            assert_eq!(id, want, "action for unexpected id");
            let _ = respond_to.send(response);
        }
        (request, Some(expected)) => panic!(
            "Unexpected {} request, expected {}",
            request.kind(),
            expected.name()
        ),
        (request, None) => panic!("Unexpected {} request, no expectation left", request.kind()),
    }
}

pub struct GetExpectation<T: ActorEntity> {
    id: T::Id,
    queue: Queue<T>,
}

impl<T: ActorEntity> GetExpectation<T> {
    pub fn return_ok(self, value: Option<T>) {
        self.push(Ok(value));
    }

    pub fn return_err(self, error: FrameworkError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<Option<T>, FrameworkError>) {
        self.queue.lock().unwrap().push_back(Expectation::Get {
            id: self.id,
            response,
        });
    }
}

pub struct ListExpectation<T: ActorEntity> {
    queue: Queue<T>,
}

impl<T: ActorEntity> ListExpectation<T> {
    pub fn return_ok(self, items: Vec<T>) {
        self.queue.lock().unwrap().push_back(Expectation::List {
            response: Ok(items),
        });
    }
}

pub struct ActionExpectation<T: ActorEntity> {
    id: T::Id,
    queue: Queue<T>,
}

impl<T: ActorEntity> ActionExpectation<T> {
    pub fn return_ok(self, result: T::ActionResult) {
        self.push(Ok(result));
    }

    pub fn return_err(self, error: FrameworkError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<T::ActionResult, FrameworkError>) {
        self.queue.lock().unwrap().push_back(Expectation::Action {
            id: self.id,
            response,
        });
    }
}

/// A client whose requests land on a receiver the test controls.
pub fn create_mock_client<T: ActorEntity>(
    buffer_size: usize,
) -> (ResourceClient<T>, mpsc::Receiver<ResourceRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ResourceClient::new(sender), receiver)
}

/// Next request, if it is a create.
pub async fn expect_create<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Create, Response<T::Id>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Create { params, respond_to }) => Some((params, respond_to)),
        _ => None,
    }
}

/// Next request, if it is a get.
pub async fn expect_get<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, Response<Option<T>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Get { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Next request, if it is a list.
pub async fn expect_list<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<Response<Vec<T>>> {
    match receiver.recv().await {
        Some(ResourceRequest::List { respond_to }) => Some(respond_to),
        _ => None,
    }
}

/// Next request, if it is an action.
pub async fn expect_action<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, T::Action, Response<T::ActionResult>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Action {
            id,
            action,
            respond_to,
        }) => Some((id, action, respond_to)),
        _ => None,
    }
}
