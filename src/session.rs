use url::Url;

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

/// Connection to the tracking server: the parsed base URL plus the shared
/// HTTP client every operation goes through.
pub struct Session {
    pub base_url: Url,
    client: reqwest::Client,
}

impl Session {
    pub fn new(base_url: &str) -> Result<Session, url::ParseError> {
        Ok(Session {
            base_url: Url::parse(base_url)?,
            client: reqwest::Client::new(),
        })
    }

    pub fn client(&self) -> &reqwest::Client {
        &self.client
    }

    pub fn resolve(&self, url_fragment: Vec<&str>) -> Url {
        url_fragment
            .iter()
            .fold(self.base_url.clone(), |url, fragment| {
                url.join(fragment).unwrap()
            })
    }

    pub fn resolve_single(&self, url_fragment: &str) -> Url {
        self.resolve(vec![url_fragment])
    }
}
