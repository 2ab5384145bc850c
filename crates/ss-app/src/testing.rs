//! Hand-rolled port doubles shared by the use case tests.

use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use ss_core::ids::{BookId, ShareId, UserId};
use ss_core::ports::{
    BookRepositoryPort, LedgerError, MediatorError, MediatorPort, SessionPort, UserRepositoryPort,
};
use ss_core::{Book, TransactionAction, TransactionIntent, TransactionOutcome, UserProfile};

pub fn person(uid: &str) -> UserProfile {
    UserProfile {
        uid: UserId::from(uid),
        full_name: uid.to_string(),
        tel: "0600000000".to_string(),
        email: format!("{uid}@example.org"),
    }
}

pub fn incomplete_person(uid: &str) -> UserProfile {
    UserProfile {
        tel: String::new(),
        ..person(uid)
    }
}

pub fn outcome_with(
    action: TransactionAction,
    book: Book,
    owner: UserProfile,
    borrower: Option<UserProfile>,
) -> TransactionOutcome {
    TransactionOutcome {
        action,
        book,
        owner,
        borrower,
    }
}

#[derive(Default)]
pub struct InMemoryBookRepository {
    rows: Mutex<HashMap<String, Book>>,
}

impl InMemoryBookRepository {
    pub fn insert(&self, book: Book) {
        self.rows
            .lock()
            .expect("rows lock")
            .insert(book.uid.as_str().to_string(), book);
    }

    pub fn get(&self, uid: &str) -> Option<Book> {
        self.rows.lock().expect("rows lock").get(uid).cloned()
    }

    pub fn remove(&self, uid: &str) {
        self.rows.lock().expect("rows lock").remove(uid);
    }
}

#[async_trait]
impl BookRepositoryPort for InMemoryBookRepository {
    async fn find_by_id(&self, uid: &BookId) -> Result<Option<Book>, LedgerError> {
        Ok(self.get(uid.as_str()))
    }

    async fn save(&self, book: Book) -> Result<(), LedgerError> {
        self.insert(book);
        Ok(())
    }

    async fn delete(&self, uid: &BookId) -> Result<(), LedgerError> {
        self.rows.lock().expect("rows lock").remove(uid.as_str());
        Ok(())
    }

    async fn list_all(&self) -> Result<Vec<Book>, LedgerError> {
        Ok(self.rows.lock().expect("rows lock").values().cloned().collect())
    }
}

#[derive(Default)]
pub struct InMemoryUserRepository {
    rows: Mutex<HashMap<String, UserProfile>>,
}

impl InMemoryUserRepository {
    pub fn insert(&self, profile: UserProfile) {
        self.rows
            .lock()
            .expect("rows lock")
            .insert(profile.uid.as_str().to_string(), profile);
    }

    pub fn get(&self, uid: &str) -> Option<UserProfile> {
        self.rows.lock().expect("rows lock").get(uid).cloned()
    }
}

#[async_trait]
impl UserRepositoryPort for InMemoryUserRepository {
    async fn find_by_id(&self, uid: &UserId) -> Result<Option<UserProfile>, LedgerError> {
        Ok(self.get(uid.as_str()))
    }

    async fn save(&self, profile: UserProfile) -> Result<(), LedgerError> {
        self.insert(profile);
        Ok(())
    }
}

pub struct FixedSession(pub UserId);

impl SessionPort for FixedSession {
    fn current_user_id(&self) -> UserId {
        self.0.clone()
    }
}

/// Scriptable mediator double.
///
/// `result` answers pop off a queue; once the queue is dry the fallback
/// answer repeats, which is what a mediator that never changes its mind
/// looks like to the poll loop.
#[derive(Default)]
pub struct MockMediator {
    init_response: Mutex<Option<Result<ShareId, MediatorError>>>,
    accept_response: Mutex<Option<Result<TransactionOutcome, MediatorError>>>,
    result_script: Mutex<VecDeque<Result<TransactionOutcome, MediatorError>>>,
    result_fallback: Mutex<Option<Result<TransactionOutcome, MediatorError>>>,
    pub init_calls: AtomicUsize,
    pub accept_calls: AtomicUsize,
    pub result_calls: AtomicUsize,
    pub seen_intents: Mutex<Vec<TransactionIntent>>,
    pub seen_borrowers: Mutex<Vec<UserProfile>>,
}

impl MockMediator {
    pub fn stub_init(&self, response: Result<ShareId, MediatorError>) {
        *self.init_response.lock().expect("init lock") = Some(response);
    }

    pub fn stub_accept(&self, response: Result<TransactionOutcome, MediatorError>) {
        *self.accept_response.lock().expect("accept lock") = Some(response);
    }

    pub fn push_result(&self, response: Result<TransactionOutcome, MediatorError>) {
        self.result_script
            .lock()
            .expect("script lock")
            .push_back(response);
    }

    pub fn set_result_fallback(&self, response: Result<TransactionOutcome, MediatorError>) {
        *self.result_fallback.lock().expect("fallback lock") = Some(response);
    }

    pub fn result_call_count(&self) -> usize {
        self.result_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl MediatorPort for MockMediator {
    async fn init(&self, intent: &TransactionIntent) -> Result<ShareId, MediatorError> {
        self.init_calls.fetch_add(1, Ordering::SeqCst);
        self.seen_intents
            .lock()
            .expect("intents lock")
            .push(intent.clone());
        self.init_response
            .lock()
            .expect("init lock")
            .clone()
            .unwrap_or(Err(MediatorError::Unavailable("init not stubbed".into())))
    }

    async fn accept(
        &self,
        _share_id: &ShareId,
        borrower: &UserProfile,
    ) -> Result<TransactionOutcome, MediatorError> {
        self.accept_calls.fetch_add(1, Ordering::SeqCst);
        self.seen_borrowers
            .lock()
            .expect("borrowers lock")
            .push(borrower.clone());
        self.accept_response
            .lock()
            .expect("accept lock")
            .clone()
            .unwrap_or(Err(MediatorError::Unavailable("accept not stubbed".into())))
    }

    async fn result(&self, _share_id: &ShareId) -> Result<TransactionOutcome, MediatorError> {
        self.result_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(next) = self.result_script.lock().expect("script lock").pop_front() {
            return next;
        }
        self.result_fallback
            .lock()
            .expect("fallback lock")
            .clone()
            .unwrap_or(Err(MediatorError::NotFound))
    }
}
