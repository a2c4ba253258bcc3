// src/domain/media/mod.rs
pub mod urls;

pub use urls::MediaUrlBuilder;

use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum CropPosition {
    Center,
    Top,
    Bottom,
    Left,
    Right,
}

/// A resized variant generated for every uploaded image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct ImageSize {
    pub name: String,
    pub width: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub crop: Option<CropPosition>,
}

impl ImageSize {
    pub fn width(name: impl Into<String>, width: u32) -> Self {
        Self {
            name: name.into(),
            width,
            height: None,
            crop: None,
        }
    }

    pub fn boxed(name: impl Into<String>, width: u32, height: u32) -> Self {
        Self {
            height: Some(height),
            ..Self::width(name, width)
        }
    }

    #[must_use]
    pub const fn cropped(mut self, crop: CropPosition) -> Self {
        self.crop = Some(crop);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct UploadConfig {
    pub admin_thumbnail: String,
    pub focal_point: bool,
    pub image_sizes: Vec<ImageSize>,
}

impl UploadConfig {
    /// The image pipeline used for editorial uploads.
    #[must_use]
    pub fn editorial() -> Self {
        Self {
            admin_thumbnail: "thumbnail".into(),
            focal_point: true,
            image_sizes: vec![
                ImageSize::width("thumbnail", 300),
                ImageSize::boxed("square", 500, 500),
                ImageSize::width("small", 600),
                ImageSize::width("medium", 900),
                ImageSize::width("large", 1400),
                ImageSize::width("xlarge", 1920),
                ImageSize::boxed("og", 1200, 630).cropped(CropPosition::Center),
            ],
        }
    }

    pub fn size(&self, name: &str) -> Option<&ImageSize> {
        self.image_sizes.iter().find(|size| size.name == name)
    }
}
