/// How a segmented line's box is derived from the boxes of its words.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineBoxPolicy {
    /// The line keeps the box of its first word.
    #[default]
    FirstWord,
    /// The line box grows to cover every word appended to it.
    Union,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConvertConfig {
    /// Multiplier applied to `font-size` when `line-height` is `normal`.
    ///
    /// Defaults to `1.61`.
    pub normal_line_height_factor: f32,
    /// Fill of the canvas-sized rectangle painted beneath everything.
    ///
    /// Defaults to opaque white, `rgb(255, 255, 255)`.
    pub document_background: String,
    pub line_box_policy: LineBoxPolicy,
    /// Lowercase tag names rasterized as bitmaps instead of being walked.
    ///
    /// Defaults to `["img"]`.
    pub image_tags: Vec<String>,
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            normal_line_height_factor: 1.61,
            document_background: "rgb(255, 255, 255)".to_string(),
            line_box_policy: LineBoxPolicy::FirstWord,
            image_tags: vec!["img".to_string()],
        }
    }
}

impl ConvertConfig {
    pub fn is_image_tag(&self, tag: &str) -> bool {
        self.image_tags.iter().any(|image| image == tag)
    }
}
