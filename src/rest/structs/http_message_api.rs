use std::sync::Arc;
use reqwest::Url;
use crate::session::traits::session_provider::SessionProvider;

#[derive(Clone)]
pub struct HttpMessageApi {
    pub base_url: Url,
    pub(crate) client: reqwest::Client,
    pub(crate) session: Arc<dyn SessionProvider>,
}
