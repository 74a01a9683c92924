//! Page-lifetime controllers over server-rendered markup

pub mod anchors;
pub mod navigation;
pub mod scroll;
pub mod sections;
pub mod theme;
