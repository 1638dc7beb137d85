pub mod io;
pub mod labels;
pub mod traits;
pub mod u8;

pub use self::labels::LabelMap;
pub use self::traits::{ImageView, Rows};
pub use self::u8::ImageU8;
