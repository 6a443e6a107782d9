pub mod event;
pub mod limits;
pub mod machine;
pub mod state;
pub mod status;
pub mod view_state_codec;
