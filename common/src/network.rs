pub mod block;
pub mod membership;
pub mod ports;
