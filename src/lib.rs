mod codec;
mod combine;
mod pad;
mod prefix;

pub use codec::*;
pub use combine::*;
pub use pad::*;
pub use prefix::*;
