mod fix32;
#[cfg(feature = "serde_support")]
mod serde;
mod traits;

pub use self::fix32::Fix32;
