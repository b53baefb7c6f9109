use actix_web::{body::BoxBody, http::StatusCode, HttpRequest, HttpResponse, Responder};
use serde::Serialize;
use std::borrow::Cow;

/// Body of every successful response that carries data.
#[derive(Serialize)]
pub struct Envelope<T: Serialize> {
    pub data: T,
    pub message: Cow<'static, str>,
}

pub struct Success<T: Serialize> {
    status: StatusCode,
    envelope: Option<Envelope<T>>,
}

impl<T: Serialize> Success<T> {
    fn with_status<M>(status: StatusCode, data: T, message: M) -> Self
    where
        M: Into<Cow<'static, str>>,
    {
        Self { status, envelope: Some(Envelope { data, message: message.into() }) }
    }

    pub fn ok<M: Into<Cow<'static, str>>>(data: T, message: M) -> Self {
        Self::with_status(StatusCode::OK, data, message)
    }

    pub fn created<M: Into<Cow<'static, str>>>(data: T, message: M) -> Self {
        Self::with_status(StatusCode::CREATED, data, message)
    }
}

impl Success<()> {
    /// 200 with no body, for mutations that have nothing to return.
    pub fn empty() -> Self {
        Self { status: StatusCode::OK, envelope: None }
    }
}

impl<T: Serialize> Responder for Success<T> {
    type Body = BoxBody;

    fn respond_to(self, _req: &HttpRequest) -> HttpResponse<Self::Body> {
        let mut response = HttpResponse::build(self.status);
        match self.envelope {
            Some(envelope) => response.json(envelope),
            None => response.finish(),
        }
    }
}
