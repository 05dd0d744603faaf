pub mod api;
pub mod context;
pub mod otp_flow;
pub mod state;
pub mod storage;
