//! Recording transport for pipeline tests.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Arc;
use tokio::sync::Mutex;

use log_search_repository::{
    EngineResponse, IndexRequest, SearchEngineTransport, SearchError, SearchRequest,
};

/// Scripted outcome for one request.
pub enum Reply {
    Respond(u16, String),
    Fail(String),
}

impl Reply {
    pub fn ok() -> Self {
        Self::Respond(201, r#"{"result":"created"}"#.to_string())
    }

    pub fn status(status: u16, body: &str) -> Self {
        Self::Respond(status, body.to_string())
    }

    pub fn fail(msg: &str) -> Self {
        Self::Fail(msg.to_string())
    }

    fn into_result(self) -> Result<EngineResponse, SearchError> {
        match self {
            Self::Respond(status, body) => Ok(EngineResponse::new(status, body)),
            Self::Fail(msg) => Err(SearchError::transport(msg)),
        }
    }
}

/// Records every request and answers from a script. Index requests beyond
/// the script are accepted with 201.
#[derive(Default)]
pub struct MockTransport {
    pub index_requests: Arc<Mutex<Vec<IndexRequest>>>,
    pub search_requests: Arc<Mutex<Vec<SearchRequest>>>,
    index_replies: Mutex<VecDeque<Reply>>,
    search_replies: Mutex<VecDeque<Reply>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_index_replies(replies: Vec<Reply>) -> Self {
        Self {
            index_replies: Mutex::new(replies.into()),
            ..Self::default()
        }
    }

    pub fn with_search_reply(reply: Reply) -> Self {
        Self {
            search_replies: Mutex::new(VecDeque::from(vec![reply])),
            ..Self::default()
        }
    }
}

#[async_trait]
impl SearchEngineTransport for MockTransport {
    async fn index_document(&self, request: &IndexRequest) -> Result<EngineResponse, SearchError> {
        self.index_requests.lock().await.push(request.clone());
        self.index_replies
            .lock()
            .await
            .pop_front()
            .unwrap_or_else(Reply::ok)
            .into_result()
    }

    async fn search(&self, request: &SearchRequest) -> Result<EngineResponse, SearchError> {
        self.search_requests.lock().await.push(request.clone());
        self.search_replies
            .lock()
            .await
            .pop_front()
            .unwrap_or_else(|| Reply::status(200, r#"{"hits":{"hits":[]}}"#))
            .into_result()
    }
}
