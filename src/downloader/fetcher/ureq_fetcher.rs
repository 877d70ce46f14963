use ureq::Error::Status;

use super::{ImageFetcher, Response};

use std::io::Read;

/// Blocking HTTP fetcher over the default `ureq` agent. No timeout is
/// configured, so a hanging server blocks until the connection drops.
pub struct UReqFetcher;

impl ImageFetcher for UReqFetcher {
    fn fetch(&self, url: &str) -> Response {
        let response = ureq::request("GET", url).call();

        match response {
            Ok(response) => {
                let body = response
                    .into_reader()
                    .bytes()
                    .collect::<Result<Vec<u8>, _>>();

                let Ok(body) = body else {
                    return Response::invalid_body();
                };

                Response::ok(body)
            }

            Err(Status(404, _)) => Response::not_found(),

            Err(err) => Response::network_error(err.to_string()),
        }
    }
}

impl UReqFetcher {
    pub fn new() -> Self {
        UReqFetcher
    }
}

impl Default for UReqFetcher {
    fn default() -> Self {
        Self::new()
    }
}
