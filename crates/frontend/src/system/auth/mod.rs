//! Authentication: session state, token storage and the login gate
//! that defers actions until the visitor has logged in.

pub mod api;
pub mod context;
pub mod gate;
pub mod login_dialog;
pub mod storage;

pub use context::{use_auth, AuthProvider, AuthState};
pub use gate::{LoginAction, LoginError, LoginGate, LoginGateService};
pub use login_dialog::LoginDialog;
