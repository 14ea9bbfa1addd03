#![allow(dead_code)]

use card_dashboard::{
    ApiResponse, CardBackend, CardId, CreateCardRequest, DashboardError, Prompter, Result,
    UpdateCardRequest,
};
use std::cell::RefCell;
use std::collections::VecDeque;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Update(CardId, UpdateCardRequest),
    Delete(CardId),
    Create(CreateCardRequest),
}

/// Backend that records calls and replays queued answers in order.
#[derive(Default)]
pub struct FakeBackend {
    calls: RefCell<Vec<Call>>,
    answers: RefCell<VecDeque<Result<ApiResponse>>>,
}

impl FakeBackend {
    pub fn answering(answers: Vec<Result<ApiResponse>>) -> Self {
        FakeBackend {
            calls: RefCell::new(Vec::new()),
            answers: RefCell::new(answers.into()),
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    fn next(&self, call: Call) -> Result<ApiResponse> {
        self.calls.borrow_mut().push(call);
        self.answers
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(DashboardError::Decode("no answer queued".into())))
    }
}

impl CardBackend for FakeBackend {
    fn update_card(&self, id: &CardId, req: &UpdateCardRequest) -> Result<ApiResponse> {
        self.next(Call::Update(id.clone(), req.clone()))
    }

    fn delete_card(&self, id: &CardId) -> Result<ApiResponse> {
        self.next(Call::Delete(id.clone()))
    }

    fn create_card(&self, req: &CreateCardRequest) -> Result<ApiResponse> {
        self.next(Call::Create(req.clone()))
    }
}

pub fn ok() -> Result<ApiResponse> {
    Ok(ApiResponse {
        success: true,
        ..Default::default()
    })
}

pub fn rejected(detail: &str) -> Result<ApiResponse> {
    Ok(ApiResponse {
        success: false,
        error: Some(detail.to_string()),
        id: None,
    })
}

pub fn created(id: i64) -> Result<ApiResponse> {
    Ok(ApiResponse {
        success: true,
        error: None,
        id: Some(id),
    })
}

pub fn broken() -> Result<ApiResponse> {
    Err(DashboardError::Decode("<html>502 Bad Gateway</html>".into()))
}

/// Prompter that answers confirmations from a script and records alerts.
#[derive(Default)]
pub struct ScriptedPrompter {
    answers: RefCell<VecDeque<bool>>,
    pub questions: RefCell<Vec<String>>,
    pub alerts: RefCell<Vec<String>>,
    pub requests: RefCell<Vec<String>>,
}

impl ScriptedPrompter {
    pub fn answering(answers: &[bool]) -> Self {
        ScriptedPrompter {
            answers: RefCell::new(answers.iter().copied().collect()),
            ..Default::default()
        }
    }

    pub fn alerts(&self) -> Vec<String> {
        self.alerts.borrow().clone()
    }
}

impl Prompter for ScriptedPrompter {
    fn confirm(&self, message: &str) -> Result<bool> {
        self.questions.borrow_mut().push(message.to_string());
        self.answers
            .borrow_mut()
            .pop_front()
            .ok_or_else(|| DashboardError::Prompt("no scripted answer".into()))
    }

    fn alert(&self, message: &str) {
        self.alerts.borrow_mut().push(message.to_string());
    }

    fn request_started(&self, label: &str) {
        self.requests.borrow_mut().push(label.to_string());
    }
}
