#![allow(dead_code)]

use async_trait::async_trait;
use ferrous_relay_application::ports::{MessageDecoder, UpstreamForwarder, UpstreamResponse};
use ferrous_relay_domain::{
    DomainError, DomainName, Flags, Header, Message, Question, RecordClass, RecordType, WireError,
};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// Decoder that either always fails or returns a fixed one-question message.
pub struct MockMessageDecoder {
    fail: bool,
    calls: AtomicUsize,
}

impl MockMessageDecoder {
    pub fn succeeding() -> Self {
        Self {
            fail: false,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl MessageDecoder for MockMessageDecoder {
    fn decode(&self, buf: &[u8]) -> Result<Message, WireError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(WireError::TruncatedInput {
                offset: 0,
                needed: 12,
                available: buf.len(),
            });
        }
        Ok(Message {
            header: Header {
                id: 0x1234,
                flags: Flags::from_raw(0x0100),
                question_count: 1,
                answer_count: 0,
                authority_count: 0,
                additional_count: 0,
            },
            questions: vec![Question::new(
                DomainName::from("example.com"),
                RecordType::A,
                RecordClass::IN,
            )],
            answers: vec![],
            authorities: vec![],
            additionals: vec![],
        })
    }
}

#[derive(Clone)]
pub struct MockUpstreamForwarder {
    response: Option<Vec<u8>>,
    received: Arc<Mutex<Vec<Vec<u8>>>>,
}

impl MockUpstreamForwarder {
    pub fn answering(response: Vec<u8>) -> Self {
        Self {
            response: Some(response),
            received: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn unreachable() -> Self {
        Self {
            response: None,
            received: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn received(&self) -> Vec<Vec<u8>> {
        self.received.lock().unwrap().clone()
    }
}

#[async_trait]
impl UpstreamForwarder for MockUpstreamForwarder {
    async fn forward(&self, query: &[u8]) -> Result<UpstreamResponse, DomainError> {
        self.received.lock().unwrap().push(query.to_vec());
        match &self.response {
            Some(bytes) => Ok(UpstreamResponse {
                bytes: bytes.clone(),
                server: "udp://127.0.0.1:53".to_string(),
                latency_ms: 1,
            }),
            None => Err(DomainError::TransportAllServersUnreachable),
        }
    }
}
