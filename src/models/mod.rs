pub mod attendance;
pub mod event;
pub mod session;
pub mod window;

pub use attendance::{AttendancePolicy, AttendanceRecord};
pub use event::{Action, ActionRecord, Event};
pub use session::{Session, SessionEndpoint, Validation};
pub use window::EventWindow;
