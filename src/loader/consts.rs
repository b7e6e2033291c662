pub const READY_STATE_DONE: u8 = 4;
