use std::cell::RefCell;

use super::{ImageFetcher, Response};

/// Replays a scripted list of responses in order; once exhausted, every
/// further fetch reports a network error.
pub struct MockFetcher {
    responses: RefCell<Vec<Response>>,
}

impl ImageFetcher for MockFetcher {
    fn fetch(&self, _url: &str) -> Response {
        let mut responses = self.responses.borrow_mut();

        if responses.is_empty() {
            Response::network_error("no scripted response left")
        } else {
            responses.remove(0)
        }
    }
}

impl MockFetcher {
    pub fn new(responses: Vec<Response>) -> Self {
        Self {
            responses: RefCell::new(responses),
        }
    }
}
