//! 시세 프록시를 위한 도메인 모델.

mod calculations;
mod freq;
mod kline;
mod stock;

pub use calculations::*;
pub use freq::*;
pub use kline::*;
pub use stock::*;
