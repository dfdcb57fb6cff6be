//! Fakes for the transport and navigation seams, shared by unit tests.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use async_trait::async_trait;

use crate::config::ClientConfig;
use crate::net::client::ApiClient;
use crate::net::error::ApiError;
use crate::net::request::RequestOptions;
use crate::net::transport::{RawResponse, Transport};
use crate::util::navigation::Navigator;

/// Transport answering from a queue of canned results and recording calls.
#[derive(Clone, Debug, Default)]
pub struct FakeTransport {
    replies: Rc<RefCell<VecDeque<Result<RawResponse, ApiError>>>>,
    sent: Rc<RefCell<Vec<(String, RequestOptions)>>>,
}

impl FakeTransport {
    pub fn reply(&self, reply: Result<RawResponse, ApiError>) -> &Self {
        self.replies.borrow_mut().push_back(reply);
        self
    }

    pub fn reply_json(&self, status: u16, body: &serde_json::Value) -> &Self {
        self.reply(Ok(json_response(status, body)))
    }

    pub fn sent(&self) -> Vec<(String, RequestOptions)> {
        self.sent.borrow().clone()
    }

    pub fn last_sent(&self) -> (String, RequestOptions) {
        self.sent.borrow().last().cloned().expect("no request sent")
    }
}

#[async_trait(?Send)]
impl Transport for FakeTransport {
    async fn send(&self, url: &str, options: &RequestOptions) -> Result<RawResponse, ApiError> {
        self.sent.borrow_mut().push((url.to_owned(), options.clone()));
        self.replies
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(ApiError::Network("no canned reply".to_owned())))
    }
}

/// Navigator sitting on a fixed path and recording every navigation.
#[derive(Clone, Debug, Default)]
pub struct RecordingNavigator {
    pathname: String,
    visits: Rc<RefCell<Vec<String>>>,
}

impl RecordingNavigator {
    pub fn at(pathname: &str) -> Self {
        Self { pathname: pathname.to_owned(), visits: Rc::default() }
    }

    pub fn visits(&self) -> Vec<String> {
        self.visits.borrow().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn pathname(&self) -> String {
        self.pathname.clone()
    }

    fn assign(&self, href: &str) {
        self.visits.borrow_mut().push(href.to_owned());
    }
}

pub fn json_response(status: u16, body: &serde_json::Value) -> RawResponse {
    RawResponse {
        status,
        content_type: Some("application/json".to_owned()),
        body: serde_json::to_vec(body).expect("serializable body"),
    }
}

pub fn client_at(pathname: &str) -> (ApiClient<FakeTransport, RecordingNavigator>, FakeTransport, RecordingNavigator) {
    let transport = FakeTransport::default();
    let navigator = RecordingNavigator::at(pathname);
    let client = ApiClient::new(transport.clone(), navigator.clone(), ClientConfig::default());
    (client, transport, navigator)
}
