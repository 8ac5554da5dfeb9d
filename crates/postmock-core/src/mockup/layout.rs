use crate::post::Platform;

/// Where the caption/hashtag block sits in the post template.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CaptionPlacement {
    /// Inside the block below the action row (Instagram).
    BelowActions,
    /// Between the header and the media block (Facebook, LinkedIn).
    AboveMedia,
    /// Above the media, in the column indented past the avatar (Twitter).
    AboveMediaIndented,
}

/// Avatar placeholder shape.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AvatarShape {
    Circle,
    /// Circle wrapped in the Instagram story gradient ring.
    StoryRing,
    RoundedSquare,
}

/// Fixed layout parameters for one platform's post template.
///
/// All values are in layout pixels at scale 1.0; the compositor multiplies
/// by the requested scale factor.
#[derive(Clone, Debug)]
pub struct PlatformLayout {
    pub container_width: u32,
    /// Horizontal padding of text blocks.
    pub padding: u32,
    pub avatar_size: u32,
    pub avatar_shape: AvatarShape,
    pub caption_placement: CaptionPlacement,
    /// Corner radius of the media block (Twitter rounds its cards).
    pub media_corner_radius: u32,
    /// Left inset of the body column (Twitter indents past the avatar).
    pub body_indent: u32,
    /// Placeholder shown when the username field is empty.
    pub username_placeholder: &'static str,
}

impl PlatformLayout {
    /// Width of the media block.
    pub fn media_width(&self) -> u32 {
        if self.body_indent > 0 {
            self.container_width - self.body_indent - self.padding
        } else {
            self.container_width
        }
    }

    /// Height of the media block for a width/height ratio.
    pub fn media_height(&self, ratio: f32) -> u32 {
        (self.media_width() as f32 / ratio).round() as u32
    }
}

const INSTAGRAM: PlatformLayout = PlatformLayout {
    container_width: 550,
    padding: 16,
    avatar_size: 32,
    avatar_shape: AvatarShape::StoryRing,
    caption_placement: CaptionPlacement::BelowActions,
    media_corner_radius: 0,
    body_indent: 0,
    username_placeholder: "username",
};

const FACEBOOK: PlatformLayout = PlatformLayout {
    container_width: 580,
    padding: 16,
    avatar_size: 40,
    avatar_shape: AvatarShape::Circle,
    caption_placement: CaptionPlacement::AboveMedia,
    media_corner_radius: 0,
    body_indent: 0,
    username_placeholder: "Username",
};

const LINKEDIN: PlatformLayout = PlatformLayout {
    container_width: 560,
    padding: 16,
    avatar_size: 48,
    avatar_shape: AvatarShape::RoundedSquare,
    caption_placement: CaptionPlacement::AboveMedia,
    media_corner_radius: 0,
    body_indent: 0,
    username_placeholder: "Your Name",
};

const TWITTER: PlatformLayout = PlatformLayout {
    container_width: 580,
    padding: 16,
    avatar_size: 40,
    avatar_shape: AvatarShape::Circle,
    caption_placement: CaptionPlacement::AboveMediaIndented,
    media_corner_radius: 16,
    body_indent: 56,
    username_placeholder: "Username",
};

/// Layout parameters for a platform's post template.
pub fn layout_for(platform: Platform) -> &'static PlatformLayout {
    match platform {
        Platform::Instagram => &INSTAGRAM,
        Platform::Facebook => &FACEBOOK,
        Platform::LinkedIn => &LINKEDIN,
        Platform::Twitter => &TWITTER,
    }
}
