pub mod background;
pub mod computed;
pub mod parsers;

pub use background::{
    Background, BackgroundPosition, BackgroundSize, LinearGradient, parse_background_image,
    parse_background_position, parse_background_size,
};
pub use computed::{BorderSide, BoxSide, ComputedStyle, PropertyMap, TRANSPARENT_FILL};
pub use parsers::{StyleParseError, css_value_to_number, leading_number};
