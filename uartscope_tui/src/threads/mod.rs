mod draw;
mod error;
mod event;
mod thread_group;
mod util;

pub use draw::DrawThread;
pub use draw::Message as DrawMessage;
pub use error::ThreadError;
pub use error::ThreadResult;
pub use event::EventThread;
pub use thread_group::ThreadGroup;
pub use util::setup_terminate_group_panic_hook;

pub trait Thread {
    fn name(&self) -> &'static str;

    fn terminate(&mut self) -> ThreadResult;
}
