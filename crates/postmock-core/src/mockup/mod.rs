pub mod compose;
pub mod draw;
pub mod icons;
pub mod layout;
pub mod text;

pub use compose::{MockupRenderer, MockupRequest};
pub use layout::{layout_for, AvatarShape, CaptionPlacement, PlatformLayout};
pub use text::MockupFont;
