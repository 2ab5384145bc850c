pub mod accept_transaction;
pub mod begin_transaction;
pub mod load_transaction;
pub mod poll_result;
pub mod watch_return_hand_back;

pub use accept_transaction::AcceptTransactionUseCase;
pub use begin_transaction::BeginTransactionUseCase;
pub use load_transaction::LoadTransactionUseCase;
pub use poll_result::{PollOutcome, PollTransactionResultUseCase};
pub use watch_return_hand_back::{HandBackOutcome, WatchReturnHandBackUseCase};
